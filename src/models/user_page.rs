use serde::{Deserialize, Serialize};

use super::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Number of users matching the filters, before paging
    #[schema(example = 1250)]
    pub total: u64,
    #[schema(example = 1)]
    pub page: u64,
    #[schema(example = 10)]
    pub page_size: u64,
}

/// One page of `GET /users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserListResponse {
    pub items: Vec<User>,
    pub pagination: Pagination,
}
