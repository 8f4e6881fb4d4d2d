//! Investment CLI command

use clap::Args;

use crate::audit::{draw_summary, AuditEntry, EntityType};
use crate::config::Settings;
use crate::display::{describe_investment, money_to_words};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{EnvelopeName, InvestmentDetail, InvestmentKind, InvestmentRequest, Money};
use crate::storage::Storage;

/// Options for `invest`
#[derive(Args, Debug)]
pub struct InvestArgs {
    /// gold, bitcoin or selfInvestment
    pub kind: String,

    /// Amount in đồng
    pub amount: String,

    /// Detail field as key=value (repeatable), e.g. goldType=24K
    #[arg(short, long = "detail", value_name = "KEY=VALUE")]
    pub details: Vec<String>,

    /// Description to record instead of the generated one
    #[arg(long)]
    pub description: Option<String>,
}

impl InvestArgs {
    fn to_request(&self) -> LedgerResult<InvestmentRequest> {
        let kind: InvestmentKind = self.kind.parse()?;
        let amount = Money::parse(&self.amount)?;
        let detail = parse_details(&self.details)?;

        let description = self
            .description
            .clone()
            .unwrap_or_else(|| describe_investment(kind, &detail));

        Ok(InvestmentRequest {
            amount,
            kind,
            detail,
            description: Some(description),
        })
    }
}

fn parse_details(pairs: &[String]) -> LedgerResult<InvestmentDetail> {
    pairs
        .iter()
        .map(|pair| {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                LedgerError::InvalidInput(format!("Detail '{}' is not in key=value form", pair))
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(LedgerError::InvalidInput(format!(
                    "Detail '{}' has an empty key",
                    pair
                )));
            }
            Ok((key.to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Invest from selfInvestment, topping up from emergency
pub fn handle_invest(storage: &Storage, settings: &Settings, args: InvestArgs) -> LedgerResult<()> {
    let request = args.to_request()?;

    let mut ledger = storage.load_ledger()?;
    let entry = ledger.invest(request)?;
    storage.save_ledger(&ledger)?;

    let mut audit = AuditEntry::create(
        EntityType::Investment,
        entry.id.to_string(),
        Some(entry.purpose.clone()),
        &entry,
    );
    audit.diff_summary = Some(draw_summary(&entry));
    storage.log_entry(audit)?;

    println!("Invested {}: {}", entry.amount, entry.purpose);
    if settings.show_amount_in_words {
        println!("  ({})", money_to_words(entry.amount));
    }
    for split in &entry.splits {
        println!("  From {}: {}", split.envelope.label(), split.amount);
    }
    for envelope in [EnvelopeName::SelfInvestment, EnvelopeName::Emergency] {
        println!("  {} left: {}", envelope.label(), ledger.balances()[envelope]);
    }

    Ok(())
}
