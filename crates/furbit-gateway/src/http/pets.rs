use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use furbit_ledger::ReminderRecord;

use crate::app::AppState;
use crate::http::ApiError;

/// GET /api/pets/{id}/reminders — pending and sent reminders for one pet,
/// soonest due date first.
pub async fn pet_reminders_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ReminderRecord>>, (StatusCode, Json<ApiError>)> {
    match state.ledger.list_for_pet(&id) {
        Ok(records) => Ok(Json(records)),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError {
                error: e.to_string(),
            }),
        )),
    }
}
