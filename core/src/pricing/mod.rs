//! Price estimation
//!
//! The estimator is a pure function over the selection triple:
//!
//! ```text
//! quote = round(base_price[document] × multiplier[category] × multiplier[urgency])
//! ```
//!
//! Document type and product category are required; with either unset the
//! estimator produces no result. Urgency is effectively optional: unset
//! urgency contributes the ×1.0 baseline, identical to a 14-day selection.
//!
//! Rounding is half-away-from-zero (`f64::round`). No table entry can
//! land exactly on .5 for these constants, so the convention is recorded
//! here only for determinism.
//!
//! There are no error conditions. The typed entry point cannot see an
//! unknown key at all; the slug-keyed entry point degrades to documented
//! fallbacks (base 10000, multipliers ×1.0) rather than erroring.

use crate::models::category::FALLBACK_CATEGORY_MULTIPLIER;
use crate::models::document::FALLBACK_BASE_PRICE;
use crate::models::urgency::FALLBACK_URGENCY_MULTIPLIER;
use crate::models::{DocumentType, ProductCategory, Quote, Urgency};

/// Estimate the price for a selection triple
///
/// Returns `None` while the document type or product category is unset.
/// The computation is pure: identical inputs always yield identical
/// quotes.
///
/// # Example
/// ```
/// use certpro_core::{estimate, DocumentType, ProductCategory, Quote, Urgency};
///
/// let quote = estimate(
///     Some(DocumentType::CertificateTrCu),
///     Some(ProductCategory::Food),
///     Some(Urgency::OneDay),
/// );
/// assert_eq!(quote, Some(Quote::new(36_000)));
///
/// // Urgency unset prices like the 14-day baseline
/// let quote = estimate(
///     Some(DocumentType::CertificateGostR),
///     Some(ProductCategory::Textile),
///     None,
/// );
/// assert_eq!(quote, Some(Quote::new(12_000)));
///
/// // Incomplete selection produces nothing
/// assert_eq!(estimate(None, Some(ProductCategory::Food), None), None);
/// ```
pub fn estimate(
    document_type: Option<DocumentType>,
    product_category: Option<ProductCategory>,
    urgency: Option<Urgency>,
) -> Option<Quote> {
    let document_type = document_type?;
    let product_category = product_category?;

    let urgency_multiplier = urgency
        .map(|u| u.multiplier())
        .unwrap_or(FALLBACK_URGENCY_MULTIPLIER);

    Some(compute(
        document_type.base_price(),
        product_category.multiplier(),
        urgency_multiplier,
    ))
}

/// Estimate from raw wire slugs, with degrade-to-fallback semantics
///
/// Mirrors the original form's open-keyed lookups: empty slugs count as
/// unset, and a non-empty slug missing from its table falls back to a
/// base price of 10000 or a ×1.0 multiplier instead of erroring.
///
/// # Example
/// ```
/// use certpro_core::{estimate_slugs, Quote};
///
/// assert_eq!(
///     estimate_slugs("protocol", "toys", "3-days"),
///     Some(Quote::new(9_750)),
/// );
///
/// // Unknown document slug degrades to the 10000 fallback base
/// assert_eq!(
///     estimate_slugs("cert-iso", "textile", "14-days"),
///     Some(Quote::new(10_000)),
/// );
///
/// // Required selections left empty produce nothing
/// assert_eq!(estimate_slugs("", "food", "1-day"), None);
/// ```
pub fn estimate_slugs(
    document_type: &str,
    product_category: &str,
    urgency: &str,
) -> Option<Quote> {
    if document_type.is_empty() || product_category.is_empty() {
        return None;
    }

    let base_price = document_type
        .parse::<DocumentType>()
        .map(|doc| doc.base_price())
        .unwrap_or(FALLBACK_BASE_PRICE);

    let category_multiplier = product_category
        .parse::<ProductCategory>()
        .map(|cat| cat.multiplier())
        .unwrap_or(FALLBACK_CATEGORY_MULTIPLIER);

    let urgency_multiplier = urgency
        .parse::<Urgency>()
        .map(|u| u.multiplier())
        .unwrap_or(FALLBACK_URGENCY_MULTIPLIER);

    Some(compute(base_price, category_multiplier, urgency_multiplier))
}

/// Apply both multipliers to the base price and round
fn compute(base_price: i64, category_multiplier: f64, urgency_multiplier: f64) -> Quote {
    let raw = base_price as f64 * category_multiplier * urgency_multiplier;
    Quote::new(raw.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_rounds_half_away_from_zero() {
        assert_eq!(compute(1, 0.5, 1.0).amount(), 1);
        assert_eq!(compute(3, 0.5, 1.0).amount(), 2);
    }

    #[test]
    fn test_empty_urgency_slug_uses_baseline() {
        let quote = estimate_slugs("cert-gost", "textile", "").unwrap();
        assert_eq!(quote.amount(), 12_000);
    }
}
