use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Pending,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal address (display only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Address {
    /// Street and number
    #[schema(example = "Justičná 504")]
    pub street: String,
    #[schema(example = "Spišská Stará Ves")]
    pub city: String,
    #[schema(example = "816 59")]
    pub zip: String,
    #[schema(example = "Slovakia")]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Account {
    #[schema(example = 3266.96)]
    pub balance: f64,
    /// Currency code (e.g. "EUR")
    #[schema(example = "EUR")]
    pub currency: String,
}

/// User record as served by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique, stable identifier (never reused)
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "Deborah")]
    pub first_name: String,

    #[schema(example = "Davenport")]
    pub last_name: String,

    #[schema(example = "parsonsmary@szm.sk")]
    pub email: String,

    pub status: UserStatus,

    /// Creation date (YYYY-MM-DD)
    #[schema(value_type = String, format = Date, example = "2024-11-01")]
    pub created_at: NaiveDate,

    /// Date of last update (YYYY-MM-DD)
    #[schema(value_type = String, format = Date, example = "2025-10-22")]
    pub updated_at: NaiveDate,

    pub address: Address,
    pub account: Account,
}
