/// A rendered notification, ready for transport.
///
/// Channels treat this as opaque content: the engine owns subject and body
/// copy, the channel owns addressing and the wire format.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Destination in the channel's own address format (an email address here).
    pub to_address: String,
    /// Recipient display name; empty when the channel should omit it.
    pub to_name: String,
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

impl Notification {
    /// Fixed connectivity-check message, sent on request to verify the
    /// channel reaches a real inbox before any reminders ride on it.
    pub fn connectivity_test(address: &str) -> Self {
        Self {
            to_address: address.to_string(),
            to_name: String::new(),
            subject: "Test Email from Furbit 🐾".to_string(),
            body: "Hi there,\n\n\
                   This is a test email from Furbit Digital Pet Passport System.\n\
                   If you received this, email notifications are working correctly!\n\
                   You can now start receiving vaccination reminders for your pets."
                .to_string(),
        }
    }
}
