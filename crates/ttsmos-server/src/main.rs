mod config;
mod error;
mod routes;

use std::time::Duration;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use config::ServerConfig;
use routes::{api_routes, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(config.ratings_table_path.clone());

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    // Client-side routes fall through to index.html
    let index = ServeFile::new(config.static_dir.join("index.html"));
    let static_files = ServeDir::new(&config.static_dir).fallback(index);

    let app = Router::new()
        .nest("/api", api_routes(state))
        .fallback_service(static_files)
        .layer(trace_layer)
        .layer(CorsLayer::permissive());

    let addr = config.bind_addr();
    info!("Server listening on {}", addr);
    info!("Serving static files from {}", config.static_dir.display());
    info!("Ratings table snapshot at {}", config.ratings_table_path.display());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
