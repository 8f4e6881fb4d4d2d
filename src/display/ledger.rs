//! Ledger display formatting
//!
//! Text views of the envelope balances and the withdrawal history for the
//! terminal.

use std::collections::BTreeMap;

use crate::models::{AllocationWeights, Balances, LedgerEntry, Money, MonthKey};

use super::words::money_to_words;

/// Format the envelope balances as a table, optionally with amounts in words
pub fn format_balances(
    balances: &Balances,
    weights: &AllocationWeights,
    show_words: bool,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:22} {:>7} {:>18}\n",
        "Envelope", "Share", "Balance"
    ));
    output.push_str(&"-".repeat(49));
    output.push('\n');

    for (envelope, amount) in balances.iter() {
        output.push_str(&format!(
            "{} {:>7} {:>18}\n",
            pad(envelope.label(), 22),
            weights.percent_label(envelope),
            amount.to_string()
        ));
        if show_words {
            output.push_str(&format!("  ({})\n", money_to_words(amount)));
        }
    }

    output.push_str(&"-".repeat(49));
    output.push('\n');

    let total = balances.total();
    output.push_str(&format!("{:>30} {:>18}\n", "Total:", total.to_string()));
    if show_words {
        output.push_str(&format!("  ({})\n", money_to_words(total)));
    }

    output
}

/// Format a single entry as a history row
///
/// `index` is the newest-first position used by `expense delete`.
pub fn format_entry_row(index: usize, entry: &LedgerEntry) -> String {
    let marker = if entry.is_investment() { "↗" } else { " " };
    format!(
        "{:>3} {} {} {} {} {} {:>14}  {}",
        index,
        marker,
        entry.timestamp_display(),
        pad(entry.envelope.label(), 20),
        pad(&entry.purpose, 24),
        pad(&entry.location, 14),
        entry.amount.to_string(),
        entry.id
    )
}

/// Format newest-first entries grouped under month headings
///
/// Each item pairs an entry with its newest-first display index.
pub fn format_history(entries: &[(usize, &LedgerEntry)]) -> String {
    if entries.is_empty() {
        return "No entries found.\n".to_string();
    }

    let mut by_month: BTreeMap<MonthKey, Vec<(usize, &LedgerEntry)>> = BTreeMap::new();
    for (index, entry) in entries {
        by_month
            .entry(entry.month_key())
            .or_default()
            .push((*index, *entry));
    }

    let mut output = String::new();
    for (month, rows) in by_month.iter().rev() {
        let total: Money = rows.iter().map(|(_, e)| e.amount).sum();
        output.push_str(&format!("== {} ({}) ==\n", capitalize(&month.to_string()), total));
        for (index, entry) in rows {
            output.push_str(&format_entry_row(*index, entry));
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

/// Format one entry in full
pub fn format_entry_details(entry: &LedgerEntry) -> String {
    let mut output = String::new();

    output.push_str(&format!("Entry:     {}\n", entry.id));
    output.push_str(&format!("Time:      {}\n", entry.timestamp_display()));
    output.push_str(&format!("Envelope:  {}\n", entry.envelope.label()));
    output.push_str(&format!("Amount:    {}\n", entry.amount));
    output.push_str(&format!("           ({})\n", money_to_words(entry.amount)));
    output.push_str(&format!("Purpose:   {}\n", entry.purpose));

    if !entry.location.is_empty() {
        output.push_str(&format!("Location:  {}\n", entry.location));
    }

    if let Some(kind) = entry.investment_kind() {
        output.push_str(&format!("Invested:  {}\n", kind.label()));
    }

    if entry.splits.len() > 1 {
        output.push_str("Drawn from:\n");
        for split in &entry.splits {
            output.push_str(&format!("  {} {}\n", pad(split.envelope.label(), 22), split.amount));
        }
    }

    output
}

/// Horizontal bar chart of spending per envelope
pub fn format_spending_chart(spending: &Balances, entry_count: usize) -> String {
    const WIDTH: i64 = 30;

    let mut output = format!("Spending over the last {} entries\n", entry_count);
    let largest = spending
        .iter()
        .map(|(_, amount)| amount.minor())
        .max()
        .unwrap_or(0);

    for (envelope, amount) in spending.iter() {
        let bar = if largest > 0 {
            (i128::from(amount.minor()) * i128::from(WIDTH) / i128::from(largest)) as usize
        } else {
            0
        };
        output.push_str(&format!(
            "{} {:30} {:>14}\n",
            pad(envelope.label(), 22),
            "█".repeat(bar),
            amount.to_string()
        ));
    }

    output
}

/// Pad or cut to a fixed number of characters
fn pad(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count <= width {
        format!("{}{}", s, " ".repeat(width - count))
    } else {
        let cut: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
