//! `furbit-channels` — notification transport adapters.
//!
//! The reminder engine talks to a [`NotificationChannel`] trait object and
//! never sees wire formats; adapters own addressing and the remote API.
//! Email (Mailtrap) is the only adapter today.

pub mod channel;
pub mod email;
pub mod error;
pub mod types;

pub use channel::NotificationChannel;
pub use email::EmailChannel;
pub use error::ChannelError;
pub use types::Notification;
