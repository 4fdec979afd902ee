//! Document type model
//!
//! The certification documents the business brokers. Each document type
//! carries a fixed base price (i64 rubles) that category and urgency
//! multipliers are applied to.
//!
//! CRITICAL: All money values are i64 (rubles)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseSelectionError;

/// Base price used when a raw slug does not match any document type
///
/// Unreachable through the typed API (the enum is closed), but the
/// slug-keyed estimator path degrades to this value instead of erroring.
pub const FALLBACK_BASE_PRICE: i64 = 10_000;

/// Certification document type
///
/// Serializes to the wire slug used by the original order form
/// (`cert-tr-ts`, `declaration-tr-ts`, `cert-gost`, `protocol`).
///
/// # Example
/// ```
/// use certpro_core::DocumentType;
///
/// let doc: DocumentType = "cert-tr-ts".parse().unwrap();
/// assert_eq!(doc, DocumentType::CertificateTrCu);
/// assert_eq!(doc.base_price(), 15_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Сертификат ТР ТС (Customs Union technical regulation certificate)
    #[serde(rename = "cert-tr-ts")]
    CertificateTrCu,

    /// Декларация ТР ТС (Customs Union declaration of conformity)
    #[serde(rename = "declaration-tr-ts")]
    DeclarationTrCu,

    /// Сертификат ГОСТ Р (GOST R certificate)
    #[serde(rename = "cert-gost")]
    CertificateGostR,

    /// Протокол испытаний (laboratory test protocol)
    #[serde(rename = "protocol")]
    TestProtocol,
}

impl DocumentType {
    /// All document types, in form order
    pub const ALL: [DocumentType; 4] = [
        DocumentType::CertificateTrCu,
        DocumentType::DeclarationTrCu,
        DocumentType::CertificateGostR,
        DocumentType::TestProtocol,
    ];

    /// Base price in rubles before any multiplier
    ///
    /// # Example
    /// ```
    /// use certpro_core::DocumentType;
    ///
    /// assert_eq!(DocumentType::TestProtocol.base_price(), 5_000);
    /// ```
    pub fn base_price(&self) -> i64 {
        match self {
            DocumentType::CertificateTrCu => 15_000,
            DocumentType::DeclarationTrCu => 8_000,
            DocumentType::CertificateGostR => 12_000,
            DocumentType::TestProtocol => 5_000,
        }
    }

    /// Wire slug (the original form's option value)
    pub fn slug(&self) -> &'static str {
        match self {
            DocumentType::CertificateTrCu => "cert-tr-ts",
            DocumentType::DeclarationTrCu => "declaration-tr-ts",
            DocumentType::CertificateGostR => "cert-gost",
            DocumentType::TestProtocol => "protocol",
        }
    }

    /// Human-readable label shown to customers
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::CertificateTrCu => "Сертификат ТР ТС",
            DocumentType::DeclarationTrCu => "Декларация ТР ТС",
            DocumentType::CertificateGostR => "Сертификат ГОСТ Р",
            DocumentType::TestProtocol => "Протокол испытаний",
        }
    }
}

impl FromStr for DocumentType {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .iter()
            .copied()
            .find(|doc| doc.slug() == s)
            .ok_or_else(|| ParseSelectionError::UnknownDocumentType { slug: s.to_string() })
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for doc in DocumentType::ALL {
            assert_eq!(doc.slug().parse::<DocumentType>().unwrap(), doc);
        }
    }

    #[test]
    fn test_unknown_slug_is_rejected() {
        let err = "cert-iso".parse::<DocumentType>().unwrap_err();
        assert_eq!(
            err,
            ParseSelectionError::UnknownDocumentType {
                slug: "cert-iso".to_string()
            }
        );
    }

    #[test]
    fn test_serde_uses_wire_slug() {
        let json = serde_json::to_string(&DocumentType::CertificateGostR).unwrap();
        assert_eq!(json, "\"cert-gost\"");

        let doc: DocumentType = serde_json::from_str("\"protocol\"").unwrap();
        assert_eq!(doc, DocumentType::TestProtocol);
    }
}
