//! Quote message formatting
//!
//! Renders a completed estimate as the human-readable text handed to the
//! sales channel, and builds the Telegram deep link that carries it. The
//! template and emoji match the original order form. The link is a plain
//! URL value; nothing here performs network I/O.

use urlencoding::encode;

use crate::models::{DocumentType, ProductCategory, Quote, Urgency};

/// Bot username the deep link targets
pub const TELEGRAM_BOT: &str = "SertEcoPromBot";

/// Render the quote hand-off message
///
/// An unset urgency prices as the standard 14-day turnaround, so it is
/// rendered with the 14-day label rather than left blank.
///
/// # Example
/// ```
/// use certpro_core::{quote_message, DocumentType, ProductCategory, Quote, Urgency};
///
/// let text = quote_message(
///     DocumentType::CertificateTrCu,
///     ProductCategory::Food,
///     Some(Urgency::OneDay),
///     Quote::new(36_000),
/// );
/// assert!(text.contains("Сертификат ТР ТС"));
/// assert!(text.contains("36 000 ₽"));
/// ```
pub fn quote_message(
    document_type: DocumentType,
    product_category: ProductCategory,
    urgency: Option<Urgency>,
    quote: Quote,
) -> String {
    let urgency = urgency.unwrap_or(Urgency::FourteenDays);

    format!(
        "🧮 Расчет стоимости сертификации\n\
         \n\
         📋 Тип документа: {document_type}\n\
         🏷️ Категория: {product_category}\n\
         ⏰ Срочность: {urgency}\n\
         💰 Стоимость: {quote} ₽\n\
         \n\
         Для получения точного расчета свяжитесь с нами!"
    )
}

/// Build the `t.me` deep link carrying a message as the start payload
///
/// # Example
/// ```
/// use certpro_core::telegram_deep_link;
///
/// let url = telegram_deep_link("смета");
/// assert!(url.starts_with("https://t.me/SertEcoPromBot?start="));
/// assert!(!url.contains(' '));
/// ```
pub fn telegram_deep_link(message: &str) -> String {
    format!("https://t.me/{TELEGRAM_BOT}?start={}", encode(message))
}
