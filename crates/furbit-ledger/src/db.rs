use rusqlite::Connection;

use crate::error::Result;

/// Initialise the reminder ledger schema in `conn`.
///
/// Creates the `reminders` table (idempotent) plus the lookup indexes the
/// delivery pass and the per-pet listing rely on. The partial unique index
/// is the storage-level backstop for the delivery guarantee: one logical
/// reminder (pet, vaccine, due date, window) may only ever hold a single
/// `sent` or `acknowledged` row, while duplicate `pending` rows stay legal.
pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS reminders (
            id              TEXT NOT NULL PRIMARY KEY,
            pet_id          TEXT NOT NULL,
            owner_id        TEXT NOT NULL,
            vaccine_name    TEXT NOT NULL,
            next_due_date   TEXT NOT NULL,      -- YYYY-MM-DD
            reminder_type   TEXT NOT NULL,      -- 7-days-before | 3-days-before | due-today | overdue
            status          TEXT NOT NULL DEFAULT 'pending',
            delivery_method TEXT NOT NULL DEFAULT 'email',
            message         TEXT NOT NULL,
            created_at      TEXT NOT NULL,
            sent_at         TEXT                -- ISO-8601 or NULL
        ) STRICT;

        CREATE INDEX IF NOT EXISTS idx_reminders_pet_status
            ON reminders (pet_id, status);
        CREATE INDEX IF NOT EXISTS idx_reminders_owner_status
            ON reminders (owner_id, status);
        CREATE INDEX IF NOT EXISTS idx_reminders_due_date
            ON reminders (next_due_date);

        -- One finalized reminder per logical key, ever.
        CREATE UNIQUE INDEX IF NOT EXISTS idx_reminders_finalized_key
            ON reminders (pet_id, vaccine_name, next_due_date, reminder_type)
            WHERE status IN ('sent', 'acknowledged');
        ",
    )?;
    Ok(())
}
