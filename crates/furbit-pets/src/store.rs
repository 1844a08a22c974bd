use std::sync::Mutex;

use rusqlite::Connection;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::db::init_db;
use crate::error::{PetStoreError, Result};
use crate::types::{Owner, OwnerContact, Pet, VaccinationEntry};

/// Thread-safe store for owners, pets, and vaccination entries.
///
/// Wraps a single SQLite connection in a `Mutex`. For high-concurrency
/// deployments consider a connection pool, but a Mutex is sufficient for
/// the single-node target.
pub struct PetStore {
    db: Mutex<Connection>,
}

impl PetStore {
    /// Wrap a connection, initialising the schema if needed.
    pub fn new(conn: Connection) -> Result<Self> {
        init_db(&conn)?;
        Ok(Self {
            db: Mutex::new(conn),
        })
    }

    /// Register an owner. `email` is the notification delivery address;
    /// owners without one are unreachable for reminders.
    pub fn add_owner(&self, name: &str, email: Option<&str>) -> Result<Owner> {
        let db = self.db.lock().unwrap();
        let id = Uuid::now_v7().to_string();
        let now = chrono::Utc::now().to_rfc3339();
        db.execute(
            "INSERT INTO owners (id, name, email, created_at) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![id, name, email, now],
        )?;
        info!(owner_id = %id, %name, "owner registered");
        Ok(Owner {
            id,
            name: name.to_string(),
            email: email.map(String::from),
            created_at: now,
        })
    }

    /// Register a pet under an existing owner.
    pub fn add_pet(&self, owner_id: &str, name: &str, species: &str) -> Result<Pet> {
        let db = self.db.lock().unwrap();
        ensure_owner_exists(&db, owner_id)?;

        let id = Uuid::now_v7().to_string();
        let now = chrono::Utc::now().to_rfc3339();
        db.execute(
            "INSERT INTO pets (id, owner_id, name, species, is_active, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5)",
            rusqlite::params![id, owner_id, name, species, now],
        )?;
        info!(pet_id = %id, %name, %species, "pet registered");
        Ok(Pet {
            id,
            owner_id: owner_id.to_string(),
            name: name.to_string(),
            species: species.to_string(),
            is_active: true,
            vaccinations: Vec::new(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Append a vaccination entry to a pet's record.
    ///
    /// Dates are stored exactly as supplied (`YYYY-MM-DD` expected); the
    /// reminder engine skips entries it cannot parse rather than this
    /// store rejecting them.
    pub fn record_vaccination(
        &self,
        pet_id: &str,
        vaccine_name: &str,
        date_given: &str,
        next_due_date: &str,
        notes: Option<&str>,
    ) -> Result<VaccinationEntry> {
        let db = self.db.lock().unwrap();
        ensure_pet_exists(&db, pet_id)?;

        let id = Uuid::now_v7().to_string();
        let now = chrono::Utc::now().to_rfc3339();
        db.execute(
            "INSERT INTO vaccinations
             (id, pet_id, vaccine_name, date_given, next_due_date, notes,
              reminder_sent, last_reminder_date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, NULL, ?7)",
            rusqlite::params![id, pet_id, vaccine_name, date_given, next_due_date, notes, now],
        )?;
        db.execute(
            "UPDATE pets SET updated_at = ?1 WHERE id = ?2",
            rusqlite::params![now, pet_id],
        )?;
        debug!(%pet_id, %vaccine_name, %next_due_date, "vaccination recorded");
        Ok(VaccinationEntry {
            id,
            vaccine_name: vaccine_name.to_string(),
            date_given: date_given.to_string(),
            next_due_date: next_due_date.to_string(),
            notes: notes.map(String::from),
            reminder_sent: false,
            last_reminder_date: None,
        })
    }

    /// Soft-delete (or restore) a pet. Inactive pets are invisible to the
    /// reminder engine.
    pub fn set_pet_active(&self, pet_id: &str, active: bool) -> Result<()> {
        let db = self.db.lock().unwrap();
        let now = chrono::Utc::now().to_rfc3339();
        let rows_changed = db.execute(
            "UPDATE pets SET is_active = ?1, updated_at = ?2 WHERE id = ?3",
            rusqlite::params![active as i64, now, pet_id],
        )?;
        if rows_changed == 0 {
            return Err(PetStoreError::PetNotFound {
                id: pet_id.to_string(),
            });
        }
        info!(%pet_id, active, "pet active flag updated");
        Ok(())
    }

    /// Every active pet together with all of its vaccination entries. This
    /// is the read surface a generation pass scans.
    #[instrument(skip(self))]
    pub fn list_active_pets_with_vaccinations(&self) -> Result<Vec<Pet>> {
        let db = self.db.lock().unwrap();
        let mut stmt = db.prepare(
            "SELECT id, owner_id, name, species, is_active, created_at, updated_at
             FROM pets WHERE is_active = 1 ORDER BY created_at",
        )?;
        let mut pets: Vec<Pet> = stmt
            .query_map([], row_to_pet)?
            .filter_map(|r| r.ok())
            .collect();

        for pet in &mut pets {
            pet.vaccinations = load_vaccinations(&db, &pet.id)?;
        }
        debug!(count = pets.len(), "active pets loaded");
        Ok(pets)
    }

    /// Retrieve one pet in any active state, or `None`. The vaccination
    /// list is left empty; the delivery pass only needs the name and the
    /// active flag.
    pub fn get_pet(&self, pet_id: &str) -> Result<Option<Pet>> {
        let db = self.db.lock().unwrap();
        match db.query_row(
            "SELECT id, owner_id, name, species, is_active, created_at, updated_at
             FROM pets WHERE id = ?1",
            rusqlite::params![pet_id],
            row_to_pet,
        ) {
            Ok(pet) => Ok(Some(pet)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(PetStoreError::Database(e)),
        }
    }

    /// Resolve an owner's deliverable contact.
    ///
    /// Returns `None` both when the owner row is missing and when the owner
    /// has no usable (non-empty) address — callers only care whether a
    /// notification can be addressed.
    #[instrument(skip(self))]
    pub fn get_owner_contact(&self, owner_id: &str) -> Result<Option<OwnerContact>> {
        let db = self.db.lock().unwrap();
        let row: Option<(String, Option<String>)> = match db.query_row(
            "SELECT name, email FROM owners WHERE id = ?1",
            rusqlite::params![owner_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        ) {
            Ok(r) => Some(r),
            Err(rusqlite::Error::QueryReturnedNoRows) => None,
            Err(e) => return Err(PetStoreError::Database(e)),
        };
        Ok(row.and_then(|(name, email)| match email {
            Some(address) if !address.trim().is_empty() => Some(OwnerContact { name, address }),
            _ => None,
        }))
    }
}

fn ensure_owner_exists(db: &Connection, owner_id: &str) -> Result<()> {
    match db.query_row(
        "SELECT 1 FROM owners WHERE id = ?1",
        rusqlite::params![owner_id],
        |_| Ok(()),
    ) {
        Ok(()) => Ok(()),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(PetStoreError::OwnerNotFound {
            id: owner_id.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

fn ensure_pet_exists(db: &Connection, pet_id: &str) -> Result<()> {
    match db.query_row(
        "SELECT 1 FROM pets WHERE id = ?1",
        rusqlite::params![pet_id],
        |_| Ok(()),
    ) {
        Ok(()) => Ok(()),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(PetStoreError::PetNotFound {
            id: pet_id.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

fn load_vaccinations(db: &Connection, pet_id: &str) -> Result<Vec<VaccinationEntry>> {
    let mut stmt = db.prepare(
        "SELECT id, vaccine_name, date_given, next_due_date, notes,
                reminder_sent, last_reminder_date
         FROM vaccinations WHERE pet_id = ?1 ORDER BY created_at",
    )?;
    let rows = stmt.query_map(rusqlite::params![pet_id], row_to_vaccination)?;
    Ok(rows.filter_map(|r| r.ok()).collect())
}

/// Map a SELECT row to a `Pet` with an empty vaccination list.
fn row_to_pet(row: &rusqlite::Row<'_>) -> rusqlite::Result<Pet> {
    Ok(Pet {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        name: row.get(2)?,
        species: row.get(3)?,
        is_active: row.get::<_, i64>(4)? != 0,
        vaccinations: Vec::new(),
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

fn row_to_vaccination(row: &rusqlite::Row<'_>) -> rusqlite::Result<VaccinationEntry> {
    Ok(VaccinationEntry {
        id: row.get(0)?,
        vaccine_name: row.get(1)?,
        date_given: row.get(2)?,
        next_due_date: row.get(3)?,
        notes: row.get(4)?,
        reminder_sent: row.get::<_, i64>(5)? != 0,
        last_reminder_date: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> PetStore {
        PetStore::new(Connection::open_in_memory().expect("open in-memory db"))
            .expect("init schema")
    }

    #[test]
    fn active_listing_excludes_soft_deleted_pets() {
        let store = store();
        let owner = store.add_owner("Dana", Some("dana@example.com")).unwrap();
        let kept = store.add_pet(&owner.id, "Max", "Dog").unwrap();
        let gone = store.add_pet(&owner.id, "Whiskers", "Cat").unwrap();
        store.set_pet_active(&gone.id, false).unwrap();

        let active = store.list_active_pets_with_vaccinations().unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, kept.id);
    }

    #[test]
    fn vaccinations_come_back_with_their_pet() {
        let store = store();
        let owner = store.add_owner("Dana", Some("dana@example.com")).unwrap();
        let pet = store.add_pet(&owner.id, "Max", "Dog").unwrap();
        store
            .record_vaccination(&pet.id, "Rabies", "2026-01-10", "2027-01-10", None)
            .unwrap();
        store
            .record_vaccination(&pet.id, "Distemper", "2026-02-01", "2027-02-01", Some("booster"))
            .unwrap();

        let pets = store.list_active_pets_with_vaccinations().unwrap();
        assert_eq!(pets[0].vaccinations.len(), 2);
        assert_eq!(pets[0].vaccinations[0].vaccine_name, "Rabies");
        assert_eq!(pets[0].vaccinations[1].notes.as_deref(), Some("booster"));
    }

    #[test]
    fn contact_is_none_without_email() {
        let store = store();
        let silent = store.add_owner("No Email", None).unwrap();
        let blank = store.add_owner("Blank Email", Some("  ")).unwrap();

        assert!(store.get_owner_contact(&silent.id).unwrap().is_none());
        assert!(store.get_owner_contact(&blank.id).unwrap().is_none());
        assert!(store.get_owner_contact("missing-owner").unwrap().is_none());
    }

    #[test]
    fn contact_resolves_name_and_address() {
        let store = store();
        let owner = store.add_owner("Dana", Some("dana@example.com")).unwrap();
        let contact = store.get_owner_contact(&owner.id).unwrap().unwrap();
        assert_eq!(contact.name, "Dana");
        assert_eq!(contact.address, "dana@example.com");
    }

    #[test]
    fn add_pet_requires_known_owner() {
        let store = store();
        let err = store.add_pet("nope", "Max", "Dog").unwrap_err();
        assert!(matches!(err, PetStoreError::OwnerNotFound { .. }));
    }

    #[test]
    fn set_active_on_unknown_pet_is_an_error() {
        let store = store();
        let err = store.set_pet_active("nope", false).unwrap_err();
        assert!(matches!(err, PetStoreError::PetNotFound { .. }));
    }

    #[test]
    fn get_pet_returns_inactive_pets_too() {
        let store = store();
        let owner = store.add_owner("Dana", Some("dana@example.com")).unwrap();
        let pet = store.add_pet(&owner.id, "Max", "Dog").unwrap();
        store.set_pet_active(&pet.id, false).unwrap();

        let loaded = store.get_pet(&pet.id).unwrap().unwrap();
        assert!(!loaded.is_active);
        assert!(store.get_pet("missing").unwrap().is_none());
    }
}
