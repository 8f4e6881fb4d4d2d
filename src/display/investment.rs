//! Investment descriptions
//!
//! Builds the human-readable description recorded as an investment's
//! purpose from the well-known detail keys of each kind. Unknown keys are
//! ignored.

use crate::models::{InvestmentDetail, InvestmentKind};

/// Describe an investment from its kind and detail fields
///
/// ```
/// use rockefeller_ledger::display::describe_investment;
/// use rockefeller_ledger::models::{InvestmentDetail, InvestmentKind};
///
/// let mut detail = InvestmentDetail::new();
/// detail.insert("exchange".into(), "Binance".into());
/// assert_eq!(
///     describe_investment(InvestmentKind::Bitcoin, &detail),
///     "Đầu tư Bitcoin: Sàn Binance"
/// );
/// ```
pub fn describe_investment(kind: InvestmentKind, detail: &InvestmentDetail) -> String {
    match kind {
        InvestmentKind::Gold => describe_gold(detail),
        InvestmentKind::Bitcoin => describe_bitcoin(detail),
        InvestmentKind::SelfInvestment => field(detail, "content")
            .unwrap_or(kind.label())
            .to_string(),
    }
}

fn describe_gold(detail: &InvestmentDetail) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(gold_type) = field(detail, "goldType") {
        parts.push(gold_type.to_string());
    }
    if let Some(weight) = field(detail, "weight") {
        let unit = match field(detail, "weightUnit") {
            Some("gram") | None => "g",
            Some(_) => "lượng",
        };
        parts.push(format!("{} {}", weight, unit));
    }
    for key in ["brand", "form"] {
        if let Some(value) = field(detail, key) {
            parts.push(value.to_string());
        }
    }

    format!("Đầu tư vàng: {}", parts.join(", "))
}

fn describe_bitcoin(detail: &InvestmentDetail) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(exchange) = field(detail, "exchange") {
        parts.push(format!("Sàn {}", exchange));
    }
    if let Some(wallet) = field(detail, "wallet") {
        parts.push(format!("Ví: {}", wallet));
    }

    format!("Đầu tư Bitcoin: {}", parts.join(", "))
}

/// A non-blank detail value
fn field<'a>(detail: &'a InvestmentDetail, key: &str) -> Option<&'a str> {
    detail
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}
