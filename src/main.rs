use std::{path::PathBuf, sync::Arc};

use tower_http::cors::{Any, CorsLayer};
use video_service::{
    adapters::{repositories::PgVideoRepository, state::AppState},
    application::{repositories::video_repository::VideoRepository, services::BlobStore},
    services::LocalBlobStore,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL")
        .expect("ERROR: DATABASE_URL environment variable must be set");

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()
        .expect("PORT must be a valid u16");

    let upload_dir =
        PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()));

    let public_base_url = std::env::var("PUBLIC_BACKEND_URL")
        .ok()
        .filter(|url| !url.is_empty());

    // Configure CORS
    let cors = if let Ok(allowed_origins) = std::env::var("CORS_ALLOWED_ORIGINS") {
        // Parse comma-separated origins
        let origins: Vec<_> = allowed_origins
            .split(',')
            .map(|s| s.trim().parse().expect("Invalid CORS origin"))
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Allow all origins if not specified (only for development)
        CorsLayer::permissive()
    };

    tracing::info!("Connecting to database...");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&database_url)
        .await
        .expect("ERROR: Failed to connect to PostgreSQL database. Check DATABASE_URL and network connectivity.");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database connection established");

    let blob_store = LocalBlobStore::new(&upload_dir)
        .await
        .expect("Failed to create upload directory");

    let app_state = AppState {
        video_repository: Arc::new(PgVideoRepository::new(pool)) as Arc<dyn VideoRepository>,
        blob_store: Arc::new(blob_store) as Arc<dyn BlobStore>,
        public_base_url,
    };

    let router = video_service::router(app_state, &upload_dir).layer(cors);

    // Start the server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", port);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
