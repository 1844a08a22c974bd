use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which due-date window a reminder was generated for.
///
/// Wire strings (`7-days-before`, …) match what the mobile app already
/// parses, hence the explicit renames instead of `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderType {
    #[serde(rename = "7-days-before")]
    SevenDaysBefore,
    #[serde(rename = "3-days-before")]
    ThreeDaysBefore,
    #[serde(rename = "due-today")]
    DueToday,
    #[serde(rename = "overdue")]
    Overdue,
}

impl std::fmt::Display for ReminderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReminderType::SevenDaysBefore => "7-days-before",
            ReminderType::ThreeDaysBefore => "3-days-before",
            ReminderType::DueToday => "due-today",
            ReminderType::Overdue => "overdue",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ReminderType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "7-days-before" => Ok(ReminderType::SevenDaysBefore),
            "3-days-before" => Ok(ReminderType::ThreeDaysBefore),
            "due-today" => Ok(ReminderType::DueToday),
            "overdue" => Ok(ReminderType::Overdue),
            other => Err(format!("unknown reminder type: {other}")),
        }
    }
}

/// Lifecycle state of a reminder record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    /// Created by a generation pass, not yet delivered.
    Pending,
    /// Delivered through a notification channel.
    Sent,
    /// The owner confirmed the reminder (set by the app, not the engine).
    Acknowledged,
    /// Reserved for future cleanup of stale reminders; never set today.
    Expired,
    /// Delivery failed; terminal, retried only via a fresh record.
    Failed,
}

impl std::fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReminderStatus::Pending => "pending",
            ReminderStatus::Sent => "sent",
            ReminderStatus::Acknowledged => "acknowledged",
            ReminderStatus::Expired => "expired",
            ReminderStatus::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ReminderStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReminderStatus::Pending),
            "sent" => Ok(ReminderStatus::Sent),
            "acknowledged" => Ok(ReminderStatus::Acknowledged),
            "expired" => Ok(ReminderStatus::Expired),
            "failed" => Ok(ReminderStatus::Failed),
            other => Err(format!("unknown reminder status: {other}")),
        }
    }
}

/// Logical identity of one reminder: a given pet, vaccine, due date, and
/// window together should reach the owner at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderKey {
    pub pet_id: String,
    pub vaccine_name: String,
    pub next_due_date: String,
    pub reminder_type: ReminderType,
}

impl std::fmt::Display for ReminderKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.pet_id, self.vaccine_name, self.next_due_date, self.reminder_type
        )
    }
}

/// A persisted reminder.
///
/// Serializes camelCase — these records go straight out over
/// `GET /api/pets/{id}/reminders` and the app expects the original field
/// casing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRecord {
    /// UUID v4 string — primary key.
    pub id: String,
    pub pet_id: String,
    pub owner_id: String,
    pub vaccine_name: String,
    /// Due date this reminder is about, `YYYY-MM-DD`.
    pub next_due_date: String,
    pub reminder_type: ReminderType,
    pub status: ReminderStatus,
    /// Channel name the reminder is (to be) delivered through.
    pub delivery_method: String,
    /// Short human-readable line persisted at generation time.
    pub message: String,
    /// ISO-8601 timestamp of record creation.
    pub created_at: String,
    /// ISO-8601 timestamp of successful delivery, if any.
    pub sent_at: Option<String>,
}

impl ReminderRecord {
    /// Build a fresh `pending` record for the given key.
    pub fn pending(
        key: &ReminderKey,
        owner_id: &str,
        delivery_method: &str,
        message: &str,
        created_at: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            pet_id: key.pet_id.clone(),
            owner_id: owner_id.to_string(),
            vaccine_name: key.vaccine_name.clone(),
            next_due_date: key.next_due_date.clone(),
            reminder_type: key.reminder_type,
            status: ReminderStatus::Pending,
            delivery_method: delivery_method.to_string(),
            message: message.to_string(),
            created_at: created_at.to_string(),
            sent_at: None,
        }
    }

    /// The logical key this record was generated under.
    pub fn key(&self) -> ReminderKey {
        ReminderKey {
            pet_id: self.pet_id.clone(),
            vaccine_name: self.vaccine_name.clone(),
            next_due_date: self.next_due_date.clone(),
            reminder_type: self.reminder_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn reminder_type_round_trips_through_wire_strings() {
        for (ty, wire) in [
            (ReminderType::SevenDaysBefore, "7-days-before"),
            (ReminderType::ThreeDaysBefore, "3-days-before"),
            (ReminderType::DueToday, "due-today"),
            (ReminderType::Overdue, "overdue"),
        ] {
            assert_eq!(ty.to_string(), wire);
            assert_eq!(ReminderType::from_str(wire).unwrap(), ty);
        }
        assert!(ReminderType::from_str("fortnight-before").is_err());
    }

    #[test]
    fn record_serializes_camel_case() {
        let key = ReminderKey {
            pet_id: "p1".into(),
            vaccine_name: "Rabies".into(),
            next_due_date: "2026-09-01".into(),
            reminder_type: ReminderType::SevenDaysBefore,
        };
        let record = ReminderRecord::pending(&key, "o1", "email", "msg", "2026-08-25T00:00:00Z");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["petId"], "p1");
        assert_eq!(json["vaccineName"], "Rabies");
        assert_eq!(json["reminderType"], "7-days-before");
        assert_eq!(json["status"], "pending");
        assert!(json["sentAt"].is_null());
    }
}
