use serde::{Deserialize, Serialize};

/// A pet owner. Account/auth data lives in the passport application; this
/// store only carries what reminder delivery needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    /// UUIDv7 — time-sortable.
    pub id: String,
    pub name: String,
    /// Delivery address for notifications. `None` means the owner is
    /// unreachable and pending reminders for their pets fail delivery.
    pub email: Option<String>,
    /// RFC3339 creation timestamp.
    pub created_at: String,
}

/// The resolved contact surface handed to the delivery pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerContact {
    pub name: String,
    pub address: String,
}

/// A pet profile with its vaccination entries.
///
/// `is_active = false` is a soft delete: the reminder engine excludes the
/// pet entirely, queued reminders included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub species: String,
    pub is_active: bool,
    pub vaccinations: Vec<VaccinationEntry>,
    /// RFC3339 creation timestamp.
    pub created_at: String,
    /// RFC3339 timestamp of the last profile update.
    pub updated_at: String,
}

/// One vaccination record on a pet.
///
/// Calendar dates are stored as `YYYY-MM-DD` strings exactly as supplied;
/// the reminder engine parses them at use and skips entries it cannot read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaccinationEntry {
    pub id: String,
    pub vaccine_name: String,
    pub date_given: String,
    pub next_due_date: String,
    pub notes: Option<String>,
    /// Bookkeeping flags owned by the passport application; the reminder
    /// engine never writes them.
    pub reminder_sent: bool,
    pub last_reminder_date: Option<String>,
}
