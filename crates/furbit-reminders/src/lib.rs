//! `furbit-reminders` — the vaccination reminder engine.
//!
//! # Overview
//!
//! Two passes run back to back on an external trigger. Generation scans
//! every active pet's vaccinations, classifies each due date into a
//! reminder window, and writes `pending` records into the ledger. Delivery
//! drains the pending records through a [`NotificationChannel`]
//! (furbit-channels), finalising each as `sent` or `failed`.
//!
//! # Windows
//!
//! | Day offset | Window          |
//! |------------|-----------------|
//! | exactly 7  | `7-days-before` |
//! | exactly 3  | `3-days-before` |
//! | exactly 0  | `due-today`     |
//! | below 0    | `overdue`       |
//!
//! Any other offset produces nothing; the strict equality means a window is
//! skipped outright when generation does not run on its exact day.
//!
//! Time is injected through the [`Clock`] trait so a run can be replayed at
//! any fixed date.

pub mod clock;
pub mod due;
pub mod engine;
pub mod error;
pub mod message;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use due::{classify, days_until_due, due_date_for_offset};
pub use engine::ReminderEngine;
pub use error::{EngineError, Result};
pub use message::{render, reminder_line, RenderedMessage};
pub use types::{DeliverySummary, GenerationSummary, RunSummary};

pub use furbit_channels::NotificationChannel;
