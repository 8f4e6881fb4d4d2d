//! Ledger CLI commands
//!
//! Deposits, balances, history listing and amounts in words.

use clap::Args;

use crate::audit::{balance_change_summary, EntityType};
use crate::config::Settings;
use crate::display::{
    format_balances, format_currency, format_history, format_spending_chart, money_to_words,
    number_to_words,
};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{EnvelopeName, LedgerEntry, Money, MonthKey};
use crate::services::HistoryFilter;
use crate::storage::Storage;

/// Record an inflow and split it across the envelopes
pub fn handle_deposit(storage: &Storage, settings: &Settings, amount: &str) -> LedgerResult<()> {
    let amount = Money::parse(amount)?;

    let mut ledger = storage.load_ledger()?;
    let before = *ledger.balances();
    let after = ledger.deposit(amount)?;
    storage.save_ledger(&ledger)?;

    storage.log_update(
        EntityType::Balances,
        "balances",
        None,
        &before,
        &after,
        balance_change_summary(&before, &after),
    )?;

    println!("Deposited {}", amount);
    if settings.show_amount_in_words {
        println!("  ({})", money_to_words(amount));
    }
    println!();
    for (envelope, new_balance) in after.iter() {
        let added = new_balance - before[envelope];
        println!(
            "  {:<8} {} +{}",
            ledger.policy().weights().percent_label(envelope),
            envelope.label(),
            added
        );
    }

    Ok(())
}

/// Show balances, the latest entries and recent spending
pub fn handle_balance(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let ledger = storage.load_ledger()?;

    print!(
        "{}",
        format_balances(
            ledger.balances(),
            ledger.policy().weights(),
            settings.show_amount_in_words
        )
    );

    if ledger.is_empty() {
        return Ok(());
    }

    let latest: Vec<(usize, &LedgerEntry)> = ledger
        .recent()
        .take(settings.collapsed_history_count)
        .enumerate()
        .map(|(i, e)| (i + 1, e))
        .collect();

    println!();
    println!("Latest entries:");
    print!("{}", format_history(&latest));
    if ledger.len() > latest.len() {
        println!(
            "... {} more. Run 'rockefeller history' to see everything.",
            ledger.len() - latest.len()
        );
        println!();
    }

    let chart_count = settings.recent_chart_count.min(ledger.len());
    print!(
        "{}",
        format_spending_chart(&ledger.spending_by_envelope(chart_count), chart_count)
    );

    Ok(())
}

/// Options for `history`
#[derive(Args, Debug, Default)]
pub struct HistoryArgs {
    /// Only entries from this month (YYYY-MM or MM/YYYY)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Only entries filed under this envelope
    #[arg(short, long)]
    pub envelope: Option<String>,

    /// Smallest amount
    #[arg(long)]
    pub min: Option<String>,

    /// Largest amount
    #[arg(long)]
    pub max: Option<String>,

    /// Text to look for in the purpose
    #[arg(short, long)]
    pub search: Option<String>,

    /// Text to look for in the location
    #[arg(short, long)]
    pub location: Option<String>,

    /// Page to show (starts at 1)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// List the months that have entries
    #[arg(long)]
    pub months: bool,
}

impl HistoryArgs {
    fn to_filter(&self) -> LedgerResult<HistoryFilter> {
        let mut filter = HistoryFilter::new();

        if let Some(month) = &self.month {
            filter = filter.month(month.parse::<MonthKey>()?);
        }
        if let Some(envelope) = &self.envelope {
            filter = filter.envelope(envelope.parse::<EnvelopeName>()?);
        }
        if let Some(min) = &self.min {
            filter = filter.min_amount(Money::parse(min)?);
        }
        if let Some(max) = &self.max {
            filter = filter.max_amount(Money::parse(max)?);
        }
        if let Some(text) = &self.search {
            filter = filter.purpose(text.as_str());
        }
        if let Some(text) = &self.location {
            filter = filter.location(text.as_str());
        }

        Ok(filter)
    }
}

/// List history newest first, grouped by month
pub fn handle_history(storage: &Storage, settings: &Settings, args: HistoryArgs) -> LedgerResult<()> {
    let ledger = storage.load_ledger()?;

    if args.months {
        let months = ledger.available_months();
        if months.is_empty() {
            println!("No entries found.");
        }
        for month in months {
            println!("{}", month.iso());
        }
        return Ok(());
    }

    if args.page == 0 {
        return Err(LedgerError::InvalidInput("Pages start at 1".into()));
    }

    let filter = args.to_filter()?;
    let matches = ledger.search_indexed(&filter);
    let per_page = settings.history_page_size;
    let total_pages = matches.len().div_ceil(per_page).max(1);

    let rows: Vec<(usize, &LedgerEntry)> = matches
        .chunks(per_page)
        .nth(args.page - 1)
        .unwrap_or_default()
        .iter()
        .map(|(i, e)| (i + 1, *e))
        .collect();

    print!("{}", format_history(&rows));

    if !matches.is_empty() {
        let total: Money = matches.iter().map(|(_, e)| e.amount).sum();
        println!(
            "Page {} of {} ({} entries, {})",
            args.page,
            total_pages,
            matches.len(),
            format_currency(total)
        );
    }

    Ok(())
}

/// Spell out an amount in Vietnamese words
pub fn handle_words(amount: &str) -> LedgerResult<()> {
    let cleaned: String = amount
        .trim()
        .chars()
        .filter(|c| *c != '_' && *c != ',')
        .collect();
    let value: f64 = cleaned
        .parse()
        .map_err(|_| LedgerError::InvalidAmount(format!("'{}' is not a number", amount)))?;

    println!("{}", number_to_words(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_args_to_filter() {
        let args = HistoryArgs {
            month: Some("2026-10".into()),
            envelope: Some("essentials".into()),
            min: Some("1000".into()),
            search: Some("phở".into()),
            page: 1,
            ..HistoryArgs::default()
        };

        let filter = args.to_filter().unwrap();
        assert_eq!(filter.month, MonthKey::new(2026, 10));
        assert_eq!(filter.envelope, Some(EnvelopeName::Essentials));
        assert_eq!(filter.min_amount, Some(Money::from_dong(1_000)));
        assert_eq!(filter.purpose.as_deref(), Some("phở"));
        assert!(filter.location.is_none());
    }

    #[test]
    fn test_history_args_reject_bad_values() {
        let args = HistoryArgs {
            envelope: Some("holiday".into()),
            ..HistoryArgs::default()
        };
        assert!(matches!(args.to_filter(), Err(LedgerError::UnknownEnvelope(_))));

        let args = HistoryArgs {
            max: Some("lots".into()),
            ..HistoryArgs::default()
        };
        assert!(matches!(args.to_filter(), Err(LedgerError::InvalidAmount(_))));
    }
}
