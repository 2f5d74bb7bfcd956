use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        version = "1.0.0",
        description = "Mock user management API. Serves a read-only, in-memory user dataset with \
filtering, sorting and pagination.\n\n**Note:** responses are delayed by a random duration to \
simulate network latency (configurable through `MAX_RESPONSE_DELAY_MS`)."
    ),
    paths(
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::UserStatus,
            crate::models::Address,
            crate::models::Account,
            crate::models::SortBy,
            crate::models::Direction,
            crate::models::Pagination,
            crate::models::UserListResponse,
            crate::utils::error::ErrorResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User listing with filters, sorting and pagination, and lookup by ID."),
        (name = "Health", description = "Service health check."),
    )
)]
pub struct ApiDoc;
