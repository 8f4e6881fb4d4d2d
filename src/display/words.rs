//! Vietnamese number-to-words for đồng amounts
//!
//! Digits are read in groups of three from the most significant group down.
//! Zero groups are skipped along with their scale word. Teens use "mười"
//! rather than "một mươi".

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

const UNITS: [&str; 10] = [
    "", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];

const ZERO_PHRASE: &str = "không đồng";
const CURRENCY_UNIT: &str = "đồng";
const NEGATIVE_MARKER: &str = "âm";
const HUNDRED: &str = "trăm";
const TEN: &str = "mười";
const TENS_SUFFIX: &str = "mươi";

/// Spell out a floating-point amount; the fractional part is dropped
pub fn number_to_words(amount: f64) -> LedgerResult<String> {
    if !amount.is_finite() {
        return Err(LedgerError::InvalidAmount(format!(
            "{} is not a finite number",
            amount
        )));
    }

    let truncated = amount.trunc();
    if truncated.abs() >= u64::MAX as f64 {
        return Err(LedgerError::InvalidAmount(format!("{} is too large", amount)));
    }

    Ok(spell(truncated < 0.0, truncated.abs() as u64))
}

/// Spell out a Money amount in whole đồng (truncated toward zero)
pub fn money_to_words(amount: Money) -> String {
    let dong = amount.whole_dong();
    spell(dong < 0, dong.unsigned_abs())
}

fn spell(negative: bool, magnitude: u64) -> String {
    if magnitude == 0 {
        return ZERO_PHRASE.to_string();
    }

    let mut groups = Vec::new();
    let mut rest = magnitude;
    while rest > 0 {
        groups.push((rest % 1000) as usize);
        rest /= 1000;
    }

    let mut words: Vec<String> = Vec::new();
    if negative {
        words.push(NEGATIVE_MARKER.to_string());
    }

    for (scale, group) in groups.iter().enumerate().rev() {
        if *group == 0 {
            continue;
        }
        words.extend(group_words(*group).into_iter().map(str::to_string));
        if let Some(scale_word) = scale_word(scale) {
            words.push(scale_word);
        }
    }

    words.push(CURRENCY_UNIT.to_string());
    words.join(" ")
}

/// Words for a single non-zero group of up to three digits
fn group_words(group: usize) -> Vec<&'static str> {
    let mut words = Vec::new();

    let hundreds = group / 100;
    if hundreds > 0 {
        words.push(UNITS[hundreds]);
        words.push(HUNDRED);
    }

    let tens_and_units = group % 100;
    let tens = tens_and_units / 10;
    let units = tens_and_units % 10;
    match tens {
        0 => {}
        1 => words.push(TEN),
        _ => {
            words.push(UNITS[tens]);
            words.push(TENS_SUFFIX);
        }
    }
    if units > 0 {
        words.push(UNITS[units]);
    }

    words
}

/// Scale word for the n-th group from the right
///
/// nghìn, triệu, tỷ, then nghìn tỷ, triệu tỷ, tỷ tỷ.
fn scale_word(scale: usize) -> Option<String> {
    const BASE: [&str; 3] = ["nghìn", "triệu", "tỷ"];

    if scale == 0 {
        return None;
    }
    let extra_ty = (scale - 1) / 3;
    let mut word = BASE[(scale - 1) % 3].to_string();
    for _ in 0..extra_ty {
        word.push_str(" tỷ");
    }
    Some(word)
}
