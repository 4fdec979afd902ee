//! Property tests for the price estimator
//!
//! The tables are tiny, so these mostly guard the contract against table
//! edits: the formula always holds, quotes stay non-negative, and faster
//! turnarounds never get cheaper.

use certpro_core::{estimate, DocumentType, ProductCategory, Urgency};
use proptest::option;
use proptest::prelude::*;

fn any_document() -> impl Strategy<Value = DocumentType> {
    (0..DocumentType::ALL.len()).prop_map(|i| DocumentType::ALL[i])
}

fn any_category() -> impl Strategy<Value = ProductCategory> {
    (0..ProductCategory::ALL.len()).prop_map(|i| ProductCategory::ALL[i])
}

fn any_urgency() -> impl Strategy<Value = Urgency> {
    (0..Urgency::ALL.len()).prop_map(|i| Urgency::ALL[i])
}

proptest! {
    #[test]
    fn prop_quote_matches_the_formula(
        doc in any_document(),
        cat in any_category(),
        urgency in any_urgency(),
    ) {
        let expected =
            (doc.base_price() as f64 * cat.multiplier() * urgency.multiplier()).round() as i64;
        let quote = estimate(Some(doc), Some(cat), Some(urgency)).unwrap();
        prop_assert_eq!(quote.amount(), expected);
    }

    #[test]
    fn prop_quote_is_non_negative(
        doc in option::of(any_document()),
        cat in option::of(any_category()),
        urgency in option::of(any_urgency()),
    ) {
        if let Some(quote) = estimate(doc, cat, urgency) {
            prop_assert!(quote.amount() >= 0);
        }
    }

    #[test]
    fn prop_missing_required_selection_suppresses_output(
        cat in option::of(any_category()),
        urgency in option::of(any_urgency()),
    ) {
        prop_assert_eq!(estimate(None, cat, urgency), None);
        prop_assert_eq!(estimate(Some(DocumentType::CertificateTrCu), None, urgency), None);
    }

    #[test]
    fn prop_faster_turnaround_never_costs_less(
        doc in any_document(),
        cat in any_category(),
    ) {
        // Urgency::ALL is ordered fastest first
        let quotes: Vec<i64> = Urgency::ALL
            .iter()
            .map(|&u| estimate(Some(doc), Some(cat), Some(u)).unwrap().amount())
            .collect();

        for pair in quotes.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn prop_unset_urgency_equals_fourteen_days(
        doc in any_document(),
        cat in any_category(),
    ) {
        prop_assert_eq!(
            estimate(Some(doc), Some(cat), None),
            estimate(Some(doc), Some(cat), Some(Urgency::FourteenDays)),
        );
    }

    #[test]
    fn prop_estimate_is_pure(
        doc in option::of(any_document()),
        cat in option::of(any_category()),
        urgency in option::of(any_urgency()),
    ) {
        prop_assert_eq!(
            estimate(doc, cat, urgency),
            estimate(doc, cat, urgency),
        );
    }
}
