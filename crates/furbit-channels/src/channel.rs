use async_trait::async_trait;

use crate::{error::ChannelError, types::Notification};

/// Common interface implemented by every notification channel adapter
/// (email today; in-app and WhatsApp are candidates).
///
/// Implementations must be `Send + Sync` so one adapter can be shared
/// behind an `Arc` and driven from multiple Tokio tasks.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Stable lowercase identifier for this channel (e.g. `"email"`).
    ///
    /// Recorded on each reminder as its `delivery_method`, so it must stay
    /// stable across releases.
    fn name(&self) -> &str;

    /// Deliver a single notification.
    ///
    /// Intentionally `&self` so a shared adapter can send concurrently
    /// without a mutable borrow.
    async fn send(&self, notification: &Notification) -> Result<(), ChannelError>;
}
