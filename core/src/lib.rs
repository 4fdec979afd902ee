//! CertPro Quote Core
//!
//! Price-estimation core for a certification-brokerage order form, with
//! deterministic integer quotes.
//!
//! # Architecture
//!
//! - **models**: Domain types (DocumentType, ProductCategory, Urgency, Quote)
//! - **pricing**: The pure estimator over the selection triple
//! - **calculator**: Reactive form state that refreshes the quote on every edit
//! - **message**: Quote hand-off text and the Telegram deep link
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (rubles)
//! 2. The three lookup tables are compile-time constants
//! 3. Estimation is pure: no I/O, no hidden state, O(1)

// Module declarations
pub mod calculator;
pub mod message;
pub mod models;
pub mod pricing;

// Re-exports for convenience
pub use calculator::CalculatorForm;
pub use message::{quote_message, telegram_deep_link, TELEGRAM_BOT};
pub use models::{
    DocumentType, ParseSelectionError, ProductCategory, Quote, Urgency,
};
pub use pricing::{estimate, estimate_slugs};
