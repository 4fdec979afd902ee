//! Calculator form state
//!
//! The order form behind the "cost calculator" dialog. Every setter
//! re-runs the estimator, so the held quote is always current with the
//! selection: callers read, never trigger.
//!
//! While the required selections (document type, product category) are
//! incomplete, a previously computed quote is withheld, not cleared. A
//! customer reopening an incomplete form sees the last complete estimate
//! rather than a blank. `reset` discards everything.

use serde::{Deserialize, Serialize};

use crate::models::{DocumentType, ProductCategory, Quote, Urgency};
use crate::pricing::estimate;

/// Mutable selection state with a reactive quote
///
/// # Example
/// ```
/// use certpro_core::{CalculatorForm, DocumentType, ProductCategory, Urgency};
///
/// let mut form = CalculatorForm::new();
/// assert_eq!(form.estimate(), None);
///
/// form.set_document_type(DocumentType::DeclarationTrCu);
/// assert_eq!(form.estimate(), None); // category still unset
///
/// form.set_product_category(ProductCategory::Electronics);
/// assert_eq!(form.estimate().unwrap().amount(), 12_000);
///
/// form.set_urgency(Urgency::SevenDays);
/// assert_eq!(form.estimate().unwrap().amount(), 14_400);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorForm {
    /// Selected document type, if any
    document_type: Option<DocumentType>,

    /// Selected product category, if any
    product_category: Option<ProductCategory>,

    /// Selected turnaround, if any (unset prices as the 14-day baseline)
    urgency: Option<Urgency>,

    /// Item count collected by the form but never read by the estimator
    quantity: Option<u32>,

    /// Most recent complete estimate
    estimate: Option<Quote>,
}

impl CalculatorForm {
    /// Create an empty form with no selections and no estimate
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document type and refresh the estimate
    pub fn set_document_type(&mut self, document_type: DocumentType) {
        self.document_type = Some(document_type);
        self.recompute();
    }

    /// Unset the document type
    ///
    /// The held estimate is withheld, not cleared: it keeps its last
    /// complete value until the selection is complete again.
    pub fn clear_document_type(&mut self) {
        self.document_type = None;
        self.recompute();
    }

    /// Set the product category and refresh the estimate
    pub fn set_product_category(&mut self, product_category: ProductCategory) {
        self.product_category = Some(product_category);
        self.recompute();
    }

    /// Unset the product category (estimate withheld, see `clear_document_type`)
    pub fn clear_product_category(&mut self) {
        self.product_category = None;
        self.recompute();
    }

    /// Set the urgency and refresh the estimate
    pub fn set_urgency(&mut self, urgency: Urgency) {
        self.urgency = Some(urgency);
        self.recompute();
    }

    /// Unset the urgency; the estimate falls back to the 14-day baseline
    pub fn clear_urgency(&mut self) {
        self.urgency = None;
        self.recompute();
    }

    /// Set the item count
    ///
    /// Carried in form state for the order hand-off; the estimator does
    /// not read it and the quote does not change.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = Some(quantity);
        self.recompute();
    }

    /// Discard all selections and the held estimate
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Selected document type
    pub fn document_type(&self) -> Option<DocumentType> {
        self.document_type
    }

    /// Selected product category
    pub fn product_category(&self) -> Option<ProductCategory> {
        self.product_category
    }

    /// Selected urgency
    pub fn urgency(&self) -> Option<Urgency> {
        self.urgency
    }

    /// Item count collected by the form
    pub fn quantity(&self) -> Option<u32> {
        self.quantity
    }

    /// Most recent complete estimate
    ///
    /// `None` only before the first complete selection; afterwards it
    /// always holds the quote for the last complete triple.
    pub fn estimate(&self) -> Option<Quote> {
        self.estimate
    }

    /// Whether both required selections are set
    pub fn is_complete(&self) -> bool {
        self.document_type.is_some() && self.product_category.is_some()
    }

    /// Re-run the estimator; incomplete selections leave the held
    /// estimate untouched
    fn recompute(&mut self) {
        if let Some(quote) = estimate(self.document_type, self.product_category, self.urgency) {
            self.estimate = Some(quote);
        }
    }
}
