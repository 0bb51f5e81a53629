//! Request types for the shift ledger API.
//!
//! This module defines the JSON request structures for the endpoints
//! and the precondition checks that run before the calculator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{is_missing, parse_count};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{RawField, RawShift};

/// Request body for `POST /login`.
///
/// Both fields are checked explicitly so a missing one produces a
/// field-level error rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login email.
    #[serde(default)]
    pub email: Option<String>,
    /// Account password, in the clear over the transport.
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Extracts the credentials, rejecting blank or missing fields.
    pub fn into_credentials(self) -> LedgerResult<(String, String)> {
        let email = require_text(self.email, "email")?;
        let password = require_text(self.password, "password")?;
        Ok((email, password))
    }
}

/// Request body for `POST /restaurants`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRestaurantRequest {
    /// Name for the new restaurant.
    #[serde(default)]
    pub name: Option<String>,
}

impl CreateRestaurantRequest {
    /// Extracts the restaurant name, rejecting blank or missing input.
    pub fn into_name(self) -> LedgerResult<String> {
        require_text(self.name, "name")
    }
}

/// Request body for `POST /shifts`.
///
/// Everything numeric is loosely typed; the calculator coerces it.
/// Only `date`, `restaurantId`, and `netRevenue` are required, and that
/// precondition is enforced here, before the calculator runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShiftRequest {
    /// The restaurant this shift belongs to.
    #[serde(default)]
    pub restaurant_id: Option<RawField>,
    /// The calendar date of the shift.
    #[serde(default)]
    pub date: Option<NaiveDate>,
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
    /// Caller-supplied total including tax.
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

impl CreateShiftRequest {
    /// Splits the request into a restaurant id and a calculator-ready
    /// [`RawShift`], enforcing the required-field precondition.
    pub fn into_parts(self) -> LedgerResult<(i64, RawShift)> {
        if is_missing(self.restaurant_id.as_ref()) {
            return Err(LedgerError::MissingField {
                field: "restaurantId".to_string(),
            });
        }
        let restaurant_id = parse_count(self.restaurant_id.as_ref());

        let date = self.date.ok_or_else(|| LedgerError::MissingField {
            field: "date".to_string(),
        })?;

        if is_missing(self.net_revenue.as_ref()) {
            return Err(LedgerError::MissingField {
                field: "netRevenue".to_string(),
            });
        }

        let raw = RawShift {
            date,
            checks: self.checks,
            covers: self.covers,
            net_revenue: self.net_revenue,
            tax: self.tax,
            total_with_tax: self.total_with_tax,
            wine_sales: self.wine_sales,
            beer_sales: self.beer_sales,
            liquor_sales: self.liquor_sales,
            food_sales: self.food_sales,
            credit_tips: self.credit_tips,
            cash_tips: self.cash_tips,
            tipout_amount: self.tipout_amount,
        };

        Ok((restaurant_id, raw))
    }
}

fn require_text(value: Option<String>, field: &str) -> LedgerResult<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(LedgerError::MissingField {
            field: field.to_string(),
        }),
    }
}
