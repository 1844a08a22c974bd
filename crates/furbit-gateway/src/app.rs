use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use furbit_channels::NotificationChannel;
use furbit_core::config::FurbitConfig;
use furbit_ledger::ReminderLedger;
use furbit_reminders::ReminderEngine;

/// Shared handler state, passed to every route as Arc<AppState>.
pub struct AppState {
    pub config: FurbitConfig,
    /// Reminder engine — tokio::sync::Mutex so overlapping triggers run one
    /// at a time; interleaved runs could double-send.
    pub engine: tokio::sync::Mutex<ReminderEngine>,
    pub ledger: Arc<ReminderLedger>,
    pub channel: Arc<dyn NotificationChannel>,
}

impl AppState {
    pub fn new(
        config: FurbitConfig,
        engine: ReminderEngine,
        ledger: Arc<ReminderLedger>,
        channel: Arc<dyn NotificationChannel>,
    ) -> Self {
        Self {
            config,
            engine: tokio::sync::Mutex::new(engine),
            ledger,
            channel,
        }
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(crate::http::health::health_handler))
        .route(
            "/api/reminders/run",
            get(crate::http::reminders::run_handler),
        )
        .route(
            "/api/reminders/test-email",
            post(crate::http::reminders::test_email_handler),
        )
        .route(
            "/api/pets/{id}/reminders",
            get(crate::http::pets::pet_reminders_handler),
        )
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        // the mobile app calls this API cross-origin
        .layer(tower_http::cors::CorsLayer::permissive())
}
