//! Backend for a mobile-web mock voting machine promotion.
//!
//! Serves electoral-candidate records to the constituency selector on the
//! frontend. Records come from a bundled delimited text file, parsed on
//! demand and held in memory for a freshness window (default 5 minutes);
//! `GET /candidates?search=` returns the full or text-filtered set.
//!
//! "Voting" itself is a client-side animation with no recorded outcome, so
//! there is nothing to persist here: the whole backend is the lookup path.
//!
//! # Configuration
//!
//! Environment variables, all optional:
//! - `RUST_PORT`: listen port, default `1111`
//! - `CANDIDATE_DATA_PATH`: source file, default `assets/CandidateNameData.csv`
//! - `CACHE_TTL_SECS`: freshness window in seconds, default `300`

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod candidates;
pub mod config;
pub mod error;
pub mod lookup;
pub mod routes;
pub mod state;
pub mod store;

use routes::candidates_handler;
use state::State;

pub fn app(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/candidates", get(candidates_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new();

    info!("Starting server...");
    let address = format!("0.0.0.0:{}", state.config.port);
    let app = app(state);

    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
