use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod routes;

/// Server state
///
/// Only the document path is shared; each request loads, mutates, and saves
/// the file on its own. The read-modify-write cycle is not locked, so
/// concurrent writers can race and lose updates (an accepted limitation).
pub struct AppState {
    pub data_path: PathBuf,
}

pub async fn start_server(port: u16, data_path: PathBuf) -> anyhow::Result<()> {
    let state = Arc::new(AppState { data_path });

    let app = Router::new()
        .route("/", get(routes::index))
        .route(
            "/api/employees",
            get(routes::list_employees).post(routes::create_employee),
        )
        .route(
            "/api/feedback",
            get(routes::list_feedback).post(routes::create_feedback),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);
    println!("🌍 Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
