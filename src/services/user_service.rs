use chrono::NaiveDate;

use crate::models::{Direction, Pagination, SortBy, SortSpec, User, UserListResponse, UserQuery};
use crate::store::UserStore;
use crate::utils::error::{AppError, ValidationError};

fn matches_status(user: &User, status: Option<&str>) -> bool {
    status.map_or(true, |status| user.status.as_str() == status)
}

fn matches_email(user: &User, email: Option<&str>) -> bool {
    email.map_or(true, |needle| user.email.contains(needle))
}

/// Inclusive on both ends; a NaN bound excludes everything.
fn within_balance(user: &User, from: Option<f64>, to: Option<f64>) -> bool {
    let balance = user.account.balance;
    from.map_or(true, |from| balance >= from) && to.map_or(true, |to| balance <= to)
}

/// Applies every filter of `query`, keeping storage order.
pub fn filter_users<'a>(users: &'a [User], query: &UserQuery) -> Vec<&'a User> {
    users
        .iter()
        .filter(|user| matches_status(user, query.status.as_deref()))
        .filter(|user| matches_email(user, query.email.as_deref()))
        .filter(|user| within_balance(user, query.balance_from, query.balance_to))
        .collect()
}

fn sort_key(user: &User, by: SortBy) -> NaiveDate {
    match by {
        SortBy::CreatedAt => user.created_at,
        SortBy::UpdatedAt => user.updated_at,
    }
}

/// Stable sort; users with equal dates keep their relative order.
pub fn sort_users(users: &mut [&User], sort: SortSpec) {
    users.sort_by(|a, b| {
        let (a, b) = (sort_key(a, sort.by), sort_key(b, sort.by));
        match sort.direction {
            Direction::Asc => a.cmp(&b),
            Direction::Desc => b.cmp(&a),
        }
    });
}

/// Half-open `[start, end)` window of a 1-based page, clamped to `len`.
pub fn page_window(page: u64, page_size: u64, len: usize) -> (usize, usize) {
    let clamp = |index: u64| usize::try_from(index).map_or(len, |index| index.min(len));
    let start = clamp(page.saturating_sub(1).saturating_mul(page_size));
    let end = clamp(page.saturating_mul(page_size));
    (start, end.max(start))
}

/// Filters, sorts and pages the store. Pages past the end come back empty.
pub fn list_users(store: &UserStore, query: &UserQuery) -> UserListResponse {
    let mut filtered = filter_users(store.snapshot(), query);

    if let Some(sort) = query.sort {
        sort_users(&mut filtered, sort);
    }

    let total = filtered.len();
    let (start, end) = page_window(query.page, query.page_size, total);

    UserListResponse {
        items: filtered[start..end].iter().map(|user| (*user).clone()).collect(),
        pagination: Pagination {
            total: total as u64,
            page: query.page,
            page_size: query.page_size,
        },
    }
}

/// Accepts only a positive integer path segment.
pub fn parse_user_id(raw: &str) -> Result<u64, ValidationError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(ValidationError::IdRequired)
}

pub fn get_user(store: &UserStore, id: u64) -> Result<User, AppError> {
    store
        .find(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
