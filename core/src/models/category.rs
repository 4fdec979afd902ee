//! Product category model
//!
//! Categories scale the document base price by a fixed multiplier.
//! Textile is the ×1.0 baseline; electronics is the most expensive
//! category at ×1.5.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseSelectionError;

/// Multiplier used when a raw slug does not match any category
pub const FALLBACK_CATEGORY_MULTIPLIER: f64 = 1.0;

/// Product category being certified
///
/// Serializes to the wire slug used by the original order form.
///
/// # Example
/// ```
/// use certpro_core::ProductCategory;
///
/// let cat: ProductCategory = "electronics".parse().unwrap();
/// assert_eq!(cat.multiplier(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// Пищевые продукты
    Food,
    /// Электроника
    Electronics,
    /// Текстиль
    Textile,
    /// Игрушки
    Toys,
    /// Стройматериалы
    Construction,
}

impl ProductCategory {
    /// All categories, in form order
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::Food,
        ProductCategory::Electronics,
        ProductCategory::Textile,
        ProductCategory::Toys,
        ProductCategory::Construction,
    ];

    /// Price multiplier for this category
    pub fn multiplier(&self) -> f64 {
        match self {
            ProductCategory::Food => 1.2,
            ProductCategory::Electronics => 1.5,
            ProductCategory::Textile => 1.0,
            ProductCategory::Toys => 1.3,
            ProductCategory::Construction => 1.1,
        }
    }

    /// Wire slug (the original form's option value)
    pub fn slug(&self) -> &'static str {
        match self {
            ProductCategory::Food => "food",
            ProductCategory::Electronics => "electronics",
            ProductCategory::Textile => "textile",
            ProductCategory::Toys => "toys",
            ProductCategory::Construction => "construction",
        }
    }

    /// Human-readable label shown to customers
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Food => "Пищевые продукты",
            ProductCategory::Electronics => "Электроника",
            ProductCategory::Textile => "Текстиль",
            ProductCategory::Toys => "Игрушки",
            ProductCategory::Construction => "Стройматериалы",
        }
    }
}

impl FromStr for ProductCategory {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductCategory::ALL
            .iter()
            .copied()
            .find(|cat| cat.slug() == s)
            .ok_or_else(|| ParseSelectionError::UnknownProductCategory { slug: s.to_string() })
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
