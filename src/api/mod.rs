pub mod health;
pub mod swagger;
pub mod users;

use actix_web::{error::QueryPayloadError, web, HttpRequest};

use crate::utils::error::{AppError, ValidationError};

/// Undecodable query strings answer 412 like every other input error.
fn query_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("⚠️ Malformed query on {}: {}", req.path(), err);
    AppError::from(ValidationError::MalformedQuery).into()
}

/// Registers every API route. Expects `UserStore` and `dyn LatencyPolicy`
/// application data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error))
        .route("/health", web::get().to(health::health_check))
        .route("/users", web::get().to(users::list_users))
        .route("/users/{id}", web::get().to(users::get_user));
}
