//! Quote model
//!
//! A quote is a derived, immutable value: the rounded integer price for a
//! (document type, category, urgency) selection. It has no lifecycle of
//! its own and is recomputed whenever the selection changes.
//!
//! CRITICAL: All money values are i64 (rubles)

use std::fmt;

use serde::{Deserialize, Serialize};

/// Estimated price for a certification order, in whole rubles
///
/// Always non-negative: base prices are positive and multipliers are >= 1.0.
///
/// # Example
/// ```
/// use certpro_core::Quote;
///
/// let quote = Quote::new(36_000);
/// assert_eq!(quote.amount(), 36_000);
/// assert_eq!(quote.to_string(), "36 000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// Rounded price in rubles
    amount: i64,
}

impl Quote {
    /// Create a quote
    ///
    /// # Panics
    /// Panics if amount is negative
    pub fn new(amount: i64) -> Self {
        assert!(amount >= 0, "amount must be non-negative");
        Self { amount }
    }

    /// Price in rubles
    pub fn amount(&self) -> i64 {
        self.amount
    }
}

impl fmt::Display for Quote {
    /// Groups thousands with spaces, the way the original form rendered
    /// prices (`36 000`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.amount.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(ch);
        }
        f.write_str(&grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Quote::new(0).to_string(), "0");
        assert_eq!(Quote::new(975).to_string(), "975");
        assert_eq!(Quote::new(9_750).to_string(), "9 750");
        assert_eq!(Quote::new(36_000).to_string(), "36 000");
        assert_eq!(Quote::new(1_234_567).to_string(), "1 234 567");
    }

    #[test]
    #[should_panic(expected = "amount must be non-negative")]
    fn test_negative_amount_panics() {
        Quote::new(-1);
    }
}
