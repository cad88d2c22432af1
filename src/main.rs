use axum::{Router, http::header, routing::get};
use lifeflow::api::{handlers::api_routes, openapi::ApiDoc};
use lifeflow::config::CONFIG;
use lifeflow::{InMemoryLogging, InMemoryStorage, LifeFlowService};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&CONFIG.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!("Loaded configuration: {:?}", *CONFIG);

    // Seeded storage; every restart starts again from the fixtures
    let storage = InMemoryStorage::with_fixtures();
    let logging = InMemoryLogging::new();
    let service = Arc::new(LifeFlowService::new(
        storage,
        logging,
        CONFIG.jwt_secret.clone(),
        CONFIG.session_ttl_secs,
    ));

    let app = Router::new()
        .route("/", get(|| async { "OK" }))
        .nest("/api", api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PATCH,
                    http::Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", CONFIG.host, CONFIG.port).parse()?;
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
