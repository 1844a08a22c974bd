pub mod health;
pub mod pets;
pub mod reminders;

use serde::Serialize;

/// Error body shared by every JSON endpoint.
#[derive(Serialize)]
pub struct ApiError {
    pub error: String,
}
