//! Domain types for the certification quote calculator

pub mod category;
pub mod document;
pub mod quote;
pub mod urgency;

use thiserror::Error;

pub use category::ProductCategory;
pub use document::DocumentType;
pub use quote::Quote;
pub use urgency::Urgency;

/// Errors raised when parsing a wire slug into a selection
///
/// Only the typed boundary (FromStr / serde / CLI arguments) rejects
/// unknown slugs; the slug-keyed estimator path degrades to fallbacks
/// instead (see `pricing`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseSelectionError {
    #[error("unknown document type '{slug}' (expected one of: cert-tr-ts, declaration-tr-ts, cert-gost, protocol)")]
    UnknownDocumentType { slug: String },

    #[error("unknown product category '{slug}' (expected one of: food, electronics, textile, toys, construction)")]
    UnknownProductCategory { slug: String },

    #[error("unknown urgency '{slug}' (expected one of: 1-day, 3-days, 7-days, 14-days)")]
    UnknownUrgency { slug: String },
}
