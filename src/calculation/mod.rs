//! Calculation logic for the shift ledger.
//!
//! This module contains the pure functions that turn a raw shift
//! submission into a fully derived record: safe numeric coercion,
//! weekday naming, sales-mix percentages, tip totals and tipout
//! percentages, and the composite derivation that assembles a
//! [`crate::models::DerivedShift`].

mod day_name;
mod derive;
mod parse;
mod sales_mix;
mod tips;

pub use day_name::day_name;
pub use derive::derive_totals;
pub use parse::{is_missing, parse_amount, parse_count};
pub use sales_mix::{average_check_per_cover, category_percent};
pub use tips::{average_tip_percent, credit_tips_after_tipout, tipout_percent, total_tips};
