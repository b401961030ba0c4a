//! Employee model.
//!
//! Mirrors the employee document kept in the hosted store: identity fields
//! plus the base monthly salary used for proration.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee whose salary can be settled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee (the store's document id).
    pub id: String,
    /// Full name, used on salary records and slips.
    pub name: String,
    /// National identity card number.
    #[serde(default)]
    pub cnic: String,
    /// The date the employee joined.
    pub joining_date: NaiveDate,
    /// Base monthly salary before leave deductions.
    pub salary: Decimal,
    /// Job title.
    pub role: String,
}
