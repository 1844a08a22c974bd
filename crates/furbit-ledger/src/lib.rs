//! `furbit-ledger` — SQLite-backed ledger of generated vaccination reminders.
//!
//! # Overview
//!
//! Every reminder the engine generates becomes one row in the `reminders`
//! table, identified logically by (pet, vaccine, due date, window). The
//! [`store::ReminderLedger`] answers "was this reminder already sent" during
//! generation and hands the pending batch to the delivery pass.
//!
//! # Status lifecycle
//!
//! | Status         | Meaning                                             |
//! |----------------|-----------------------------------------------------|
//! | `pending`      | Generated, waiting for delivery                     |
//! | `sent`         | Delivered through a channel                         |
//! | `acknowledged` | Confirmed by the owner in the app                   |
//! | `failed`       | Delivery failed; terminal (a fresh record retries)  |
//! | `expired`      | Reserved for stale-reminder cleanup; never set yet  |

pub mod db;
pub mod error;
pub mod store;
pub mod types;

pub use error::{LedgerError, Result};
pub use store::ReminderLedger;
pub use types::{ReminderKey, ReminderRecord, ReminderStatus, ReminderType};
