//! Reminder trigger endpoints.
//!
//! `GET /api/reminders/run` is the single external entry point driving the
//! engine; anything that wants reminders out the door (cron, the app's
//! admin screen, curl) calls it. `POST /api/reminders/test-email` verifies
//! channel connectivity without touching the ledger.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use furbit_channels::Notification;

use crate::app::AppState;
use crate::http::ApiError;

/// GET /api/reminders/run — one full generate-then-deliver run.
///
/// Always 200 with a summary; engine-level failures surface as
/// `success: false` inside it, never as a 5xx.
pub async fn run_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    let engine = state.engine.lock().await;
    let result = engine.run().await;
    Json(json!({
        "message": "Reminder service executed",
        "result": result,
    }))
}

#[derive(Deserialize)]
pub struct TestEmailRequest {
    #[serde(default)]
    pub email: String,
}

/// POST /api/reminders/test-email — send one ad hoc test notification,
/// bypassing the ledger entirely.
pub async fn test_email_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TestEmailRequest>,
) -> Result<Json<Value>, (StatusCode, Json<ApiError>)> {
    let address = req.email.trim();
    if address.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: "Email required".to_string(),
            }),
        ));
    }

    let notification = Notification::connectivity_test(address);
    match state.channel.send(&notification).await {
        Ok(()) => {
            info!(to = %notification.to_address, "test notification sent");
            Ok(Json(json!({
                "message": "Test email sent",
                "success": true,
            })))
        }
        Err(e) => Err((
            StatusCode::BAD_GATEWAY,
            Json(ApiError {
                error: e.to_string(),
            }),
        )),
    }
}
