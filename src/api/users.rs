use actix_web::{web, HttpResponse};

use crate::models::{ListUsersParams, UserQuery};
use crate::services::user_service;
use crate::store::UserStore;
use crate::utils::error::AppError;
use crate::utils::latency::LatencyPolicy;

/// Get list of users with filtering, sorting and pagination
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "Successfully retrieved list of users", body = crate::models::UserListResponse),
        (status = 412, description = "Missing or invalid parameters", body = crate::utils::error::ErrorResponse)
    )
)]
pub async fn list_users(
    store: web::Data<UserStore>,
    latency: web::Data<dyn LatencyPolicy>,
    params: web::Query<ListUsersParams>,
) -> Result<HttpResponse, AppError> {
    log::info!("👥 GET /users - {:?}", params);

    let query = UserQuery::try_from(&*params).map_err(|e| {
        log::warn!("⚠️ Rejected user list query: {}", e);
        AppError::from(e)
    })?;

    let response = user_service::list_users(&store, &query);
    latency.pause().await;

    log::info!(
        "✅ Returning {} of {} users (page {})",
        response.items.len(),
        response.pagination.total,
        response.pagination.page
    );
    Ok(HttpResponse::Ok().json(response))
}

/// Get user detail by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "Unique user identifier", minimum = 1, example = 1)
    ),
    responses(
        (status = 200, description = "Successfully retrieved user detail", body = crate::models::User),
        (status = 404, description = "User with given ID was not found", body = crate::utils::error::ErrorResponse),
        (status = 412, description = "Invalid or missing ID parameter", body = crate::utils::error::ErrorResponse)
    )
)]
pub async fn get_user(
    store: web::Data<UserStore>,
    latency: web::Data<dyn LatencyPolicy>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let raw_id = path.into_inner();
    log::info!("👤 GET /users/{}", raw_id);

    let id = user_service::parse_user_id(&raw_id).map_err(|e| {
        log::warn!("⚠️ Rejected user id {:?}: {}", raw_id, e);
        AppError::from(e)
    })?;

    let user = user_service::get_user(&store, id);
    latency.pause().await;

    match user {
        Ok(user) => Ok(HttpResponse::Ok().json(user)),
        Err(e) => {
            log::warn!("⚠️ User {} not found", id);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use std::sync::Arc;

    use crate::models::{User, UserListResponse};
    use crate::store::UserStore;
    use crate::utils::error::ErrorResponse;
    use crate::utils::latency::{LatencyPolicy, NoLatency};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingLatency {
        pauses: AtomicUsize,
    }

    #[async_trait]
    impl LatencyPolicy for CountingLatency {
        async fn pause(&self) {
            self.pauses.fetch_add(1, Ordering::SeqCst);
        }
    }

    macro_rules! test_app {
        () => {{
            let latency: Arc<dyn LatencyPolicy> = Arc::new(NoLatency);
            test_app!(latency)
        }};
        ($latency:expr) => {{
            let latency: Arc<dyn LatencyPolicy> = $latency;
            test::init_service(
                App::new()
                    .app_data(web::Data::new(UserStore::bundled().unwrap()))
                    .app_data(web::Data::from(latency))
                    .configure(crate::api::configure),
            )
            .await
        }};
    }

    async fn expect_precondition_failed(uri: &str, message: &str) {
        let app = test_app!();
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PRECONDITION_FAILED, "uri={}", uri);

        let body: ErrorResponse = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body.message, message);
    }

    #[actix_rt::test]
    async fn test_list_users_first_page() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/users?page=1&pageSize=10").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: UserListResponse = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        let store = UserStore::bundled().unwrap();
        assert_eq!(body.items.len(), 10);
        assert_eq!(body.items[0].id, 1);
        assert_eq!(body.pagination.total, store.len() as u64);
        assert_eq!(body.pagination.page, 1);
        assert_eq!(body.pagination.page_size, 10);
    }

    #[actix_rt::test]
    async fn test_list_users_wire_names() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/users?page=1&pageSize=1").to_request();
        let resp = test::call_service(&app, req).await;

        let body: serde_json::Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert!(body["pagination"]["pageSize"].is_u64());
        assert!(body["pagination"]["page"].is_u64());
        assert_eq!(body["items"][0]["createdAt"], "2024-11-01");
        assert_eq!(body["items"][0]["firstName"], "Deborah");
    }

    #[actix_rt::test]
    async fn test_list_users_validation_messages() {
        expect_precondition_failed("/users", "Parameter 'page' is required.").await;
        expect_precondition_failed("/users?pageSize=10", "Parameter 'page' is required.").await;
        expect_precondition_failed("/users?page=1", "Parameter 'pageSize' is required.").await;
        expect_precondition_failed(
            "/users?page=1&pageSize=10&sortBy=invalid",
            "Parameter 'sortBy' can be only 'createdAt', 'updatedAt'.",
        )
        .await;
        expect_precondition_failed(
            "/users?page=1&pageSize=10&sortBy=createdAt&direction=up",
            "Parameter 'direction' can be only 'ASC' or 'DESC'.",
        )
        .await;
    }

    #[actix_rt::test]
    async fn test_list_users_status_and_sort() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/users?page=1&pageSize=100&status=active&sortBy=createdAt&direction=ASC")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: UserListResponse = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert!(!body.items.is_empty());
        assert_eq!(body.pagination.total, body.items.len() as u64);
        assert!(body.items.iter().all(|u| u.status.as_str() == "active"));
        assert!(body.items.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[actix_rt::test]
    async fn test_list_users_page_beyond_end() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/users?page=1000&pageSize=10&status=pending")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: UserListResponse = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        let pending = UserStore::bundled()
            .unwrap()
            .snapshot()
            .iter()
            .filter(|u| u.status.as_str() == "pending")
            .count();
        assert!(body.items.is_empty());
        assert_eq!(body.pagination.total, pending as u64);
    }

    #[actix_rt::test]
    async fn test_list_users_balance_range() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/users?page=1&pageSize=100&balanceFrom=1000&balanceTo=5000")
            .to_request();
        let resp = test::call_service(&app, req).await;

        let body: UserListResponse = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert!(!body.items.is_empty());
        assert!(body
            .items
            .iter()
            .all(|u| u.account.balance >= 1000.0 && u.account.balance <= 5000.0));
    }

    #[actix_rt::test]
    async fn test_get_user_found() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/users/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let user: User = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(&user, UserStore::bundled().unwrap().find(1).unwrap());
    }

    #[actix_rt::test]
    async fn test_get_user_missing_is_404() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/users/999999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: ErrorResponse = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body.message, "User not found");
    }

    #[actix_rt::test]
    async fn test_get_user_invalid_id() {
        expect_precondition_failed("/users/0", "Parameter 'id' is required.").await;
        expect_precondition_failed("/users/abc", "Parameter 'id' is required.").await;
    }

    #[actix_rt::test]
    async fn test_padded_enum_values_are_not_trimmed() {
        expect_precondition_failed(
            "/users?page=1&pageSize=10&sortBy=%20createdAt",
            "Parameter 'sortBy' can be only 'createdAt', 'updatedAt'.",
        )
        .await;
        expect_precondition_failed(
            "/users?page=1&pageSize=10&sortBy=createdAt&direction=ASC%20",
            "Parameter 'direction' can be only 'ASC' or 'DESC'.",
        )
        .await;

        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/users?page=1&pageSize=10&status=%20active")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: UserListResponse = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert!(body.items.is_empty());
        assert_eq!(body.pagination.total, 0);
    }

    #[actix_rt::test]
    async fn test_repeated_query_key_is_precondition_failed() {
        expect_precondition_failed("/users?page=1&page=2&pageSize=10", "Query string is malformed.").await;
    }

    #[actix_rt::test]
    async fn test_rejected_requests_are_not_delayed() {
        let latency = Arc::new(CountingLatency::default());
        let app = test_app!(latency.clone());

        for uri in ["/users?pageSize=10", "/users?page=1&pageSize=10&sortBy=name", "/users/0"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::PRECONDITION_FAILED, "uri={}", uri);
        }
        assert_eq!(latency.pauses.load(Ordering::SeqCst), 0);

        let req = test::TestRequest::get().uri("/users?page=1&pageSize=10").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        let req = test::TestRequest::get().uri("/users/999999").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
        assert_eq!(latency.pauses.load(Ordering::SeqCst), 2);
    }
}
