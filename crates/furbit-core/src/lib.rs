//! `furbit-core` — configuration and shared plumbing for the Furbit
//! reminder service.
//!
//! Every other crate in the workspace depends on this one for the
//! [`config::FurbitConfig`] type and the calendar-date wire format.

pub mod config;
pub mod error;

pub use config::FurbitConfig;
pub use error::{FurbitError, Result};

/// Calendar dates (`next_due_date`, `date_given`, …) travel as plain
/// `YYYY-MM-DD` strings; time-of-day is never part of the contract.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
