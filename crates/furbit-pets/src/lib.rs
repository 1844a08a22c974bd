//! `furbit-pets` — the pet record store.
//!
//! Owners, pets, and their vaccination entries live here. The reminder
//! engine treats this crate as a read-only collaborator: it enumerates
//! active pets with their vaccination entries and resolves owner contact
//! addresses, and never writes anything back. Mutations (registering pets,
//! recording vaccinations, soft-deleting) belong to the passport
//! application layer.

pub mod db;
pub mod error;
pub mod store;
pub mod types;

pub use error::{PetStoreError, Result};
pub use store::PetStore;
pub use types::{Owner, OwnerContact, Pet, VaccinationEntry};
