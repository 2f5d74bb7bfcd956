mod api;
mod config;
mod models;
mod services;
mod store;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::{Compress, Logger}, web, App, HttpServer};
use dotenv::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::store::UserStore;
use crate::utils::latency;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env()?;

    log::info!("🚀 Starting User API...");

    let store = UserStore::load(config.users_data_path.as_deref())?;
    if store.is_empty() {
        log::warn!("⚠️ User dataset is empty, every listing will be empty");
    } else {
        log::info!("✅ Loaded {} users", store.len());
    }

    if config.max_response_delay_ms > 0 {
        log::info!("⏳ Responses delayed randomly by up to {}ms", config.max_response_delay_ms);
    } else {
        log::info!("⚡ Artificial response delay disabled");
    }

    let store_data = web::Data::new(store);
    let latency_data = web::Data::from(latency::from_max_delay(config.max_response_delay_ms));
    let allowed_origins = config.allowed_origins.clone();

    log::info!("🌐 Server starting on {}", config.bind_address());
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", config.bind_address());
    log::info!("📄 OpenAPI spec at: http://{}/api-docs/openapi.json", config.bind_address());

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::AUTHORIZATION,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .app_data(store_data.clone())
            .app_data(latency_data.clone())
            .wrap(cors)
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::swagger::ApiDoc::openapi()),
            )
            .configure(api::configure)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
