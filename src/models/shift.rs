//! Shift models: raw submissions, derived records, stored records.
//!
//! A shift moves through three shapes. [`RawShift`] is the loosely typed
//! submission after precondition checks; the calculator turns it into a
//! fully populated [`DerivedShift`]; the store assigns identity and a
//! timestamp to produce a [`StoredShift`].

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A numeric field as submitted by a caller: either a JSON number or a
/// free-form string from an HTML form.
///
/// Coercion to [`Decimal`] or integer happens in the calculator via
/// `parse_amount`/`parse_count`; unparseable values degrade to zero there
/// rather than failing the submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    /// A JSON number.
    Number(f64),
    /// A string, typically straight out of a form input.
    Text(String),
}

impl RawField {
    /// Returns true if the field holds only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            RawField::Number(_) => false,
            RawField::Text(s) => s.trim().is_empty(),
        }
    }
}

/// A shift submission ready for the calculator.
///
/// The date is required by construction; every numeric field is optional
/// and loosely typed. The calculator is total over this type: any
/// combination of missing or malformed numeric fields produces a
/// [`DerivedShift`] with zeros in the affected positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShift {
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Number of customer transactions.
    #[serde(default)]
    pub checks: Option<RawField>,
    /// Number of guests served.
    #[serde(default)]
    pub covers: Option<RawField>,
    /// Pre-tax sales total.
    #[serde(default)]
    pub net_revenue: Option<RawField>,
    /// Tax collected on top of net revenue.
    #[serde(default)]
    pub tax: Option<RawField>,
    /// Caller-supplied total including tax; only consulted when `tax`
    /// is absent.
    #[serde(default)]
    pub total_with_tax: Option<RawField>,
    /// Wine sales for the shift.
    #[serde(default)]
    pub wine_sales: Option<RawField>,
    /// Beer sales for the shift.
    #[serde(default)]
    pub beer_sales: Option<RawField>,
    /// Liquor sales for the shift.
    #[serde(default)]
    pub liquor_sales: Option<RawField>,
    /// Food sales for the shift.
    #[serde(default)]
    pub food_sales: Option<RawField>,
    /// Tips received on card payments.
    #[serde(default)]
    pub credit_tips: Option<RawField>,
    /// Tips received in cash.
    #[serde(default)]
    pub cash_tips: Option<RawField>,
    /// Portion of tips surrendered to support staff.
    #[serde(default)]
    pub tipout_amount: Option<RawField>,
}

/// A fully computed shift record, ready for persistence.
///
/// Produced once by the calculator and never mutated afterwards. The
/// serialized field names are the contract consumed by the presentation
/// layer; the formatting table in [`crate::format`] must stay in sync
/// with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedShift {
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Long-form English weekday name derived from the date.
    pub day_of_week: String,
    /// Number of customer transactions.
    pub checks: i64,
    /// Number of guests served.
    pub covers: i64,
    /// Pre-tax sales total.
    pub net_revenue: Decimal,
    /// Net revenue plus tax, or the caller-supplied total.
    pub total_with_tax: Decimal,
    /// Net revenue divided by covers; zero when no covers.
    pub average_check_per_cover: Decimal,
    /// Wine sales.
    pub wine_sales: Decimal,
    /// Wine sales as a percentage of net revenue.
    pub wine_percent: Decimal,
    /// Beer sales.
    pub beer_sales: Decimal,
    /// Beer sales as a percentage of net revenue.
    pub beer_percent: Decimal,
    /// Liquor sales.
    pub liquor_sales: Decimal,
    /// Liquor sales as a percentage of net revenue.
    pub liquor_percent: Decimal,
    /// Food sales.
    pub food_sales: Decimal,
    /// Food sales as a percentage of net revenue.
    pub food_percent: Decimal,
    /// Tips received on card payments.
    pub credit_tips: Decimal,
    /// Tips received in cash.
    pub cash_tips: Decimal,
    /// Credit tips plus cash tips.
    pub total_tips: Decimal,
    /// Total tips as a percentage of net revenue.
    pub average_tip_percent: Decimal,
    /// Credit tips remaining after the tipout.
    pub credit_tips_after_tipout: Decimal,
    /// Percentage of combined tips surrendered via tipout.
    pub tipout_percent: Decimal,
}

/// A persisted shift with the identity and timestamp the store assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredShift {
    /// Unique identifier assigned by the store.
    pub id: i64,
    /// Creation timestamp assigned by the store.
    pub created_at: DateTime<Utc>,
    /// The restaurant this shift belongs to.
    pub restaurant_id: i64,
    /// The user who recorded the shift.
    pub user_id: i64,
    /// The computed shift fields.
    #[serde(flatten)]
    pub shift: DerivedShift,
}
