use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use stagetip_backend::app::config::Config;
use stagetip_backend::app::AppState;
use stagetip_backend::handlers::{auth, commissions, donations, donations_summary, metrics};
use stagetip_backend::services::{gateway, DonationService, InMemoryStore, SessionService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    info!("Starting StageTip backend on port {}", config.server_port);

    let payment_gateway = gateway::from_config(&config);
    let store = Arc::new(InMemoryStore::new(config.store_failure_rate));
    let donation_service = Arc::new(DonationService::new(
        payment_gateway,
        store,
        config.min_donation_cents,
    ));
    let session_service = Arc::new(SessionService::new());

    // Gateway health task
    tokio::spawn({
        let donation_service = donation_service.clone();
        async move {
            loop {
                let healthy = donation_service.gateway_health().await;
                info!(
                    "Payment gateway: {}",
                    if healthy { "healthy" } else { "unhealthy" }
                );
                tokio::time::sleep(tokio::time::Duration::from_secs(30)).await;
            }
        }
    });

    let state = AppState {
        donations: donation_service,
        sessions: session_service,
    };

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/donations", post(donations::create_donation))
        .route("/donations/quote", post(donations::quote_donation))
        .route("/donations/summary", get(donations_summary::get_summary))
        .route("/donations/:id", get(donations::get_donation))
        .route("/donations/:id/retry", post(donations::retry_donation))
        .route("/commissions/scenario", get(commissions::get_scenario))
        .route("/commissions/per-show", get(commissions::get_show_projection))
        .route("/metrics", get(metrics::get_metrics))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health_handler() -> StatusCode {
    StatusCode::OK
}
