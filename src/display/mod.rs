//! Display formatting for terminal output
//!
//! vi-VN currency rendering, Vietnamese amounts in words, investment
//! descriptions and text views of the ledger.

pub mod currency;
pub mod investment;
pub mod ledger;
pub mod words;

pub use currency::{format_currency, format_currency_f64};
pub use investment::describe_investment;
pub use ledger::{
    format_balances, format_entry_details, format_entry_row, format_history,
    format_spending_chart,
};
pub use words::{money_to_words, number_to_words};
