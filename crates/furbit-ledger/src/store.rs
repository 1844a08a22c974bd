use std::sync::Mutex;

use rusqlite::Connection;
use tracing::{debug, instrument};

use crate::db::init_db;
use crate::error::{LedgerError, Result};
use crate::types::{ReminderKey, ReminderRecord, ReminderStatus};

/// Raw column tuple for one `reminders` row, before enum parsing.
type RawReminderRow = (
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    Option<String>,
);

/// Thread-safe ledger of generated reminders.
///
/// Wraps a single SQLite connection in a `Mutex`, same trade-off as the
/// pet store: plenty for a single-node deployment.
pub struct ReminderLedger {
    db: Mutex<Connection>,
}

impl ReminderLedger {
    /// Wrap a connection, initialising the schema if needed.
    pub fn new(conn: Connection) -> Result<Self> {
        init_db(&conn)?;
        Ok(Self {
            db: Mutex::new(conn),
        })
    }

    /// Persist a record exactly as built by the caller.
    ///
    /// No duplicate detection here: the generation pass owns the pre-check,
    /// and the partial unique index rejects a second finalized row per key.
    pub fn insert(&self, record: &ReminderRecord) -> Result<()> {
        let db = self.db.lock().unwrap();
        db.execute(
            "INSERT INTO reminders
             (id, pet_id, owner_id, vaccine_name, next_due_date, reminder_type,
              status, delivery_method, message, created_at, sent_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            rusqlite::params![
                record.id,
                record.pet_id,
                record.owner_id,
                record.vaccine_name,
                record.next_due_date,
                record.reminder_type.to_string(),
                record.status.to_string(),
                record.delivery_method,
                record.message,
                record.created_at,
                record.sent_at,
            ],
        )?;
        debug!(reminder_id = %record.id, key = %record.key(), "reminder recorded");
        Ok(())
    }

    /// Look up one record for the logical key in any of `statuses`.
    ///
    /// This is the generation pre-check: asking for `[Sent, Acknowledged]`
    /// answers "has this reminder already reached the owner".
    pub fn find_with_status(
        &self,
        key: &ReminderKey,
        statuses: &[ReminderStatus],
    ) -> Result<Option<ReminderRecord>> {
        if statuses.is_empty() {
            return Ok(None);
        }
        let placeholders = vec!["?"; statuses.len()].join(", ");
        let sql = format!(
            "SELECT id, pet_id, owner_id, vaccine_name, next_due_date, reminder_type,
                    status, delivery_method, message, created_at, sent_at
             FROM reminders
             WHERE pet_id = ? AND vaccine_name = ? AND next_due_date = ? AND reminder_type = ?
               AND status IN ({placeholders})
             LIMIT 1"
        );
        let mut params: Vec<String> = vec![
            key.pet_id.clone(),
            key.vaccine_name.clone(),
            key.next_due_date.clone(),
            key.reminder_type.to_string(),
        ];
        params.extend(statuses.iter().map(|s| s.to_string()));

        let db = self.db.lock().unwrap();
        match db.query_row(&sql, rusqlite::params_from_iter(params.iter()), read_row) {
            Ok(raw) => Ok(into_record(raw)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(LedgerError::Database(e)),
        }
    }

    /// Move a record to `status`. `sent_at`, when given, records the delivery
    /// instant; `None` leaves any existing value untouched.
    #[instrument(skip(self), fields(reminder_id = %id))]
    pub fn update_status(
        &self,
        id: &str,
        status: ReminderStatus,
        sent_at: Option<&str>,
    ) -> Result<()> {
        let db = self.db.lock().unwrap();
        let rows_changed = db.execute(
            "UPDATE reminders SET status = ?1, sent_at = COALESCE(?2, sent_at) WHERE id = ?3",
            rusqlite::params![status.to_string(), sent_at, id],
        )?;
        if rows_changed == 0 {
            return Err(LedgerError::ReminderNotFound { id: id.to_string() });
        }
        debug!(%status, "reminder status updated");
        Ok(())
    }

    /// All records in `status`, oldest first. The delivery pass drains
    /// `Pending` through this.
    pub fn list_by_status(&self, status: ReminderStatus) -> Result<Vec<ReminderRecord>> {
        let db = self.db.lock().unwrap();
        let mut stmt = db.prepare(
            "SELECT id, pet_id, owner_id, vaccine_name, next_due_date, reminder_type,
                    status, delivery_method, message, created_at, sent_at
             FROM reminders WHERE status = ?1 ORDER BY created_at",
        )?;
        let records = stmt
            .query_map(rusqlite::params![status.to_string()], read_row)?
            .filter_map(|r| r.ok().and_then(into_record))
            .collect();
        Ok(records)
    }

    /// Pending and sent reminders for one pet, soonest due date first — the
    /// shape the app's reminders screen expects.
    pub fn list_for_pet(&self, pet_id: &str) -> Result<Vec<ReminderRecord>> {
        let db = self.db.lock().unwrap();
        let mut stmt = db.prepare(
            "SELECT id, pet_id, owner_id, vaccine_name, next_due_date, reminder_type,
                    status, delivery_method, message, created_at, sent_at
             FROM reminders
             WHERE pet_id = ?1 AND status IN ('pending', 'sent')
             ORDER BY next_due_date",
        )?;
        let records = stmt
            .query_map(rusqlite::params![pet_id], read_row)?
            .filter_map(|r| r.ok().and_then(into_record))
            .collect();
        Ok(records)
    }
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawReminderRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
        row.get(8)?,
        row.get(9)?,
        row.get(10)?,
    ))
}

/// Parse the enum columns; rows with unknown type/status strings are dropped
/// rather than failing the whole query.
fn into_record(raw: RawReminderRow) -> Option<ReminderRecord> {
    let (
        id,
        pet_id,
        owner_id,
        vaccine_name,
        next_due_date,
        type_str,
        status_str,
        delivery_method,
        message,
        created_at,
        sent_at,
    ) = raw;
    Some(ReminderRecord {
        id,
        pet_id,
        owner_id,
        vaccine_name,
        next_due_date,
        reminder_type: type_str.parse().ok()?,
        status: status_str.parse().ok()?,
        delivery_method,
        message,
        created_at,
        sent_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReminderType;

    fn ledger() -> ReminderLedger {
        ReminderLedger::new(Connection::open_in_memory().expect("open in-memory db"))
            .expect("init schema")
    }

    fn key(due: &str, ty: ReminderType) -> ReminderKey {
        ReminderKey {
            pet_id: "pet-1".into(),
            vaccine_name: "Rabies".into(),
            next_due_date: due.into(),
            reminder_type: ty,
        }
    }

    fn pending(k: &ReminderKey) -> ReminderRecord {
        ReminderRecord::pending(k, "owner-1", "email", "msg", "2026-08-25T08:00:00+00:00")
    }

    #[test]
    fn insert_then_find_by_key_and_status() {
        let ledger = ledger();
        let k = key("2026-09-01", ReminderType::SevenDaysBefore);
        ledger.insert(&pending(&k)).unwrap();

        let found = ledger
            .find_with_status(&k, &[ReminderStatus::Pending])
            .unwrap()
            .unwrap();
        assert_eq!(found.vaccine_name, "Rabies");
        assert_eq!(found.status, ReminderStatus::Pending);

        let sent_only = ledger
            .find_with_status(&k, &[ReminderStatus::Sent, ReminderStatus::Acknowledged])
            .unwrap();
        assert!(sent_only.is_none());
    }

    #[test]
    fn duplicate_pending_rows_are_allowed() {
        let ledger = ledger();
        let k = key("2026-09-01", ReminderType::ThreeDaysBefore);
        ledger.insert(&pending(&k)).unwrap();
        ledger.insert(&pending(&k)).unwrap();

        let pending_rows = ledger.list_by_status(ReminderStatus::Pending).unwrap();
        assert_eq!(pending_rows.len(), 2);
    }

    #[test]
    fn second_sent_row_for_same_key_is_rejected() {
        let ledger = ledger();
        let k = key("2026-09-01", ReminderType::DueToday);
        let first = pending(&k);
        let second = pending(&k);
        ledger.insert(&first).unwrap();
        ledger.insert(&second).unwrap();

        ledger
            .update_status(&first.id, ReminderStatus::Sent, Some("2026-09-01T09:00:00+00:00"))
            .unwrap();
        let err = ledger
            .update_status(&second.id, ReminderStatus::Sent, Some("2026-09-01T09:00:01+00:00"))
            .unwrap_err();
        assert!(matches!(err, LedgerError::Database(_)));
    }

    #[test]
    fn acknowledging_keeps_the_sent_timestamp() {
        let ledger = ledger();
        let k = key("2026-09-01", ReminderType::Overdue);
        let record = pending(&k);
        ledger.insert(&record).unwrap();

        ledger
            .update_status(&record.id, ReminderStatus::Sent, Some("2026-09-02T10:00:00+00:00"))
            .unwrap();
        ledger
            .update_status(&record.id, ReminderStatus::Acknowledged, None)
            .unwrap();

        let found = ledger
            .find_with_status(&k, &[ReminderStatus::Acknowledged])
            .unwrap()
            .unwrap();
        assert_eq!(found.sent_at.as_deref(), Some("2026-09-02T10:00:00+00:00"));
    }

    #[test]
    fn update_on_unknown_reminder_is_an_error() {
        let ledger = ledger();
        let err = ledger
            .update_status("missing", ReminderStatus::Failed, None)
            .unwrap_err();
        assert!(matches!(err, LedgerError::ReminderNotFound { .. }));
    }

    #[test]
    fn pet_listing_orders_by_due_date_and_hides_failed() {
        let ledger = ledger();
        let later = key("2026-10-01", ReminderType::SevenDaysBefore);
        let sooner = key("2026-09-01", ReminderType::SevenDaysBefore);
        let dead = key("2026-08-01", ReminderType::Overdue);
        ledger.insert(&pending(&later)).unwrap();
        ledger.insert(&pending(&sooner)).unwrap();
        let failed = pending(&dead);
        ledger.insert(&failed).unwrap();
        ledger
            .update_status(&failed.id, ReminderStatus::Failed, None)
            .unwrap();

        let listed = ledger.list_for_pet("pet-1").unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].next_due_date, "2026-09-01");
        assert_eq!(listed[1].next_due_date, "2026-10-01");
    }
}
