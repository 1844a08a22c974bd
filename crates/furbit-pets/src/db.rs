use rusqlite::{Connection, Result};

/// Initialise the owner, pet, and vaccination tables.
///
/// Every statement is `IF NOT EXISTS`, so the gateway can run this on each
/// startup without checking schema state first.
pub fn init_db(conn: &Connection) -> Result<()> {
    create_owners_table(conn)?;
    create_pets_table(conn)?;
    create_vaccinations_table(conn)?;
    Ok(())
}

fn create_owners_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS owners (
            id          TEXT PRIMARY KEY NOT NULL,
            name        TEXT NOT NULL,
            email       TEXT,
            created_at  TEXT NOT NULL
        ) STRICT;",
    )
}

fn create_pets_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS pets (
            id          TEXT PRIMARY KEY NOT NULL,
            owner_id    TEXT NOT NULL REFERENCES owners(id),
            name        TEXT NOT NULL,
            species     TEXT NOT NULL,
            is_active   INTEGER NOT NULL DEFAULT 1,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        ) STRICT;",
    )
}

fn create_vaccinations_table(conn: &Connection) -> Result<()> {
    // idx_vaccinations_pet speeds up the hot path: enumerating every entry
    // across active pets during a generation pass.
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS vaccinations (
            id                 TEXT PRIMARY KEY NOT NULL,
            pet_id             TEXT NOT NULL REFERENCES pets(id),
            vaccine_name       TEXT NOT NULL,
            date_given         TEXT NOT NULL,   -- YYYY-MM-DD
            next_due_date      TEXT NOT NULL,   -- YYYY-MM-DD
            notes              TEXT,
            reminder_sent      INTEGER NOT NULL DEFAULT 0,
            last_reminder_date TEXT,
            created_at         TEXT NOT NULL
        ) STRICT;
        CREATE INDEX IF NOT EXISTS idx_vaccinations_pet
            ON vaccinations (pet_id);",
    )
}
