use serde::Deserialize;
use std::str::FromStr;

use crate::utils::error::ValidationError;

/// Raw query string of `GET /users`.
///
/// Every field is kept as text so malformed values surface as a 412 with a
/// stable message instead of an extractor error.
#[derive(Debug, Default, Clone, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// Page number, 1-based (required)
    #[param(value_type = Option<u64>, minimum = 1, example = 1)]
    pub page: Option<String>,
    /// Number of users per page (required)
    #[param(value_type = Option<u64>, minimum = 1, example = 10)]
    pub page_size: Option<String>,
    /// Field for sorting
    #[param(value_type = Option<SortBy>)]
    pub sort_by: Option<String>,
    /// Sort direction, descending when omitted
    #[param(value_type = Option<Direction>)]
    pub direction: Option<String>,
    /// Filter by user status
    #[param(value_type = Option<crate::models::UserStatus>)]
    pub status: Option<String>,
    /// Filter by part of email (case-sensitive)
    #[param(example = "gmail.com")]
    pub email: Option<String>,
    /// Minimum account balance (inclusive)
    #[param(value_type = Option<f64>, example = 1000)]
    pub balance_from: Option<String>,
    /// Maximum account balance (inclusive)
    #[param(value_type = Option<f64>, example = 5000)]
    pub balance_to: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    CreatedAt,
    UpdatedAt,
}

impl FromStr for SortBy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" => Ok(SortBy::CreatedAt),
            "updatedAt" => Ok(SortBy::UpdatedAt),
            _ => Err(ValidationError::InvalidSortBy),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

impl FromStr for Direction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(Direction::Asc),
            "DESC" => Ok(Direction::Desc),
            _ => Err(ValidationError::InvalidDirection),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub by: SortBy,
    pub direction: Direction,
}

/// Validated list query. Only built through `TryFrom<&ListUsersParams>`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserQuery {
    pub page: u64,
    pub page_size: u64,
    pub sort: Option<SortSpec>,
    /// Status wire name; an unknown value simply matches nothing.
    pub status: Option<String>,
    pub email: Option<String>,
    /// Unparsable bounds become NaN and match nothing.
    pub balance_from: Option<f64>,
    pub balance_to: Option<f64>,
}

/// Empty strings count as absent, like an unset query parameter.
/// The value is kept verbatim so enum names must match exactly.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Numeric text tolerates surrounding whitespace.
fn present_number(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn positive_integer(value: &Option<String>) -> Option<u64> {
    present_number(value)
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
}

fn balance_bound(value: &Option<String>) -> Option<f64> {
    present_number(value).map(|v| v.parse::<f64>().unwrap_or(f64::NAN))
}

impl TryFrom<&ListUsersParams> for UserQuery {
    type Error = ValidationError;

    /// Rules run in a fixed order; the first failure wins.
    fn try_from(params: &ListUsersParams) -> Result<Self, Self::Error> {
        let page = positive_integer(&params.page).ok_or(ValidationError::PageRequired)?;
        let page_size =
            positive_integer(&params.page_size).ok_or(ValidationError::PageSizeRequired)?;

        let sort_by = present(&params.sort_by).map(SortBy::from_str).transpose()?;
        let direction = present(&params.direction)
            .map(Direction::from_str)
            .transpose()?;

        let sort = sort_by.map(|by| SortSpec {
            by,
            direction: direction.unwrap_or_default(),
        });

        Ok(UserQuery {
            page,
            page_size,
            sort,
            status: present(&params.status).map(str::to_string),
            email: present(&params.email).map(str::to_string),
            balance_from: balance_bound(&params.balance_from),
            balance_to: balance_bound(&params.balance_to),
        })
    }
}
