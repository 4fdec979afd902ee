//! Quote calculator CLI
//!
//! Thin wrapper over `certpro-core`: parses the three selections as wire
//! slugs, computes the quote, and prints it in one of four shapes
//! (amount, JSON breakdown, hand-off message, or Telegram deep link).

use anyhow::Context;
use clap::{Parser, ValueEnum};

use certpro_core::{
    estimate, quote_message, telegram_deep_link, DocumentType, ProductCategory, Urgency,
};

#[derive(Debug, Parser)]
#[command(name = "certpro", version, about = "Certification cost calculator")]
struct Cli {
    /// Document type slug: cert-tr-ts, declaration-tr-ts, cert-gost, protocol
    document_type: DocumentType,

    /// Product category slug: food, electronics, textile, toys, construction
    product_category: ProductCategory,

    /// Turnaround slug: 1-day, 3-days, 7-days, 14-days (omitted prices as 14-days)
    #[arg(long)]
    urgency: Option<Urgency>,

    /// Item count recorded with the order; does not affect the quote
    #[arg(long)]
    quantity: Option<u32>,

    /// What to print
    #[arg(long, value_enum, default_value_t = Output::Quote)]
    output: Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    /// The amount in rubles
    Quote,
    /// The full breakdown as JSON
    Json,
    /// The hand-off message text
    Message,
    /// The Telegram deep link carrying the message
    Link,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let quote = estimate(
        Some(cli.document_type),
        Some(cli.product_category),
        cli.urgency,
    )
    .context("no quote for a complete selection")?;

    match cli.output {
        Output::Quote => println!("{quote} ₽"),
        Output::Json => {
            let urgency_multiplier = cli
                .urgency
                .map(|u| u.multiplier())
                .unwrap_or(Urgency::FourteenDays.multiplier());
            let breakdown = serde_json::json!({
                "document_type": cli.document_type,
                "base_price": cli.document_type.base_price(),
                "product_category": cli.product_category,
                "category_multiplier": cli.product_category.multiplier(),
                "urgency": cli.urgency,
                "urgency_multiplier": urgency_multiplier,
                "quantity": cli.quantity,
                "amount": quote.amount(),
            });
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
        Output::Message => {
            println!(
                "{}",
                quote_message(cli.document_type, cli.product_category, cli.urgency, quote)
            );
        }
        Output::Link => {
            let text = quote_message(cli.document_type, cli.product_category, cli.urgency, quote);
            println!("{}", telegram_deep_link(&text));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_slug_arguments_parse() {
        let cli = Cli::parse_from([
            "certpro",
            "cert-tr-ts",
            "food",
            "--urgency",
            "1-day",
            "--quantity",
            "10",
        ]);
        assert_eq!(cli.document_type, DocumentType::CertificateTrCu);
        assert_eq!(cli.product_category, ProductCategory::Food);
        assert_eq!(cli.urgency, Some(Urgency::OneDay));
        assert_eq!(cli.quantity, Some(10));
        assert_eq!(cli.output, Output::Quote);
    }

    #[test]
    fn test_unknown_slug_is_a_usage_error() {
        let err = Cli::try_parse_from(["certpro", "cert-iso", "food"]).unwrap_err();
        assert!(err.to_string().contains("cert-iso"));
    }
}
