//! vi-VN currency formatting
//!
//! Renders amounts the way `Intl.NumberFormat('vi-VN', {style: 'currency',
//! currency: 'VND'})` does: dot-grouped thousands, no fraction digits, a
//! no-break space and a trailing đồng sign.

use crate::error::LedgerResult;
use crate::models::Money;

/// Đồng sign
pub const CURRENCY_SYMBOL: &str = "₫";

/// Separator between the number and the symbol (U+00A0)
pub const SYMBOL_SEPARATOR: char = '\u{a0}';

const GROUP_SEPARATOR: char = '.';

/// Format an amount as vi-VN VND, e.g. "1.000.000 ₫"
pub fn format_currency(amount: Money) -> String {
    let dong = amount.rounded_dong();
    let sign = if dong < 0 { "-" } else { "" };
    format!(
        "{}{}{}{}",
        sign,
        group_thousands(dong.unsigned_abs()),
        SYMBOL_SEPARATOR,
        CURRENCY_SYMBOL
    )
}

/// Format a floating-point amount, failing on NaN or infinities
pub fn format_currency_f64(amount: f64) -> LedgerResult<String> {
    Ok(format_currency(Money::from_f64(amount)?))
}

/// Insert a group separator every three digits from the right
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}
