use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, error, info, instrument, warn};

use furbit_channels::{Notification, NotificationChannel};
use furbit_core::DATE_FORMAT;
use furbit_ledger::{ReminderKey, ReminderLedger, ReminderRecord, ReminderStatus};
use furbit_pets::PetStore;

use crate::clock::Clock;
use crate::due::{classify, days_until_due};
use crate::error::Result;
use crate::message::{reminder_line, render};
use crate::types::{DeliverySummary, GenerationSummary, RunSummary};

/// Drives the two reminder passes against the pet store and the ledger.
///
/// One engine per process; the caller is responsible for not running two
/// invocations concurrently (the gateway serialises them behind a mutex).
/// The passes never return `Err`: infrastructure failure is folded into the
/// summary so the external trigger always receives a well-formed result.
pub struct ReminderEngine {
    pets: Arc<PetStore>,
    ledger: Arc<ReminderLedger>,
    channel: Arc<dyn NotificationChannel>,
    clock: Box<dyn Clock>,
}

impl ReminderEngine {
    pub fn new(
        pets: Arc<PetStore>,
        ledger: Arc<ReminderLedger>,
        channel: Arc<dyn NotificationChannel>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            pets,
            ledger,
            channel,
            clock,
        }
    }

    /// Generation pass: scan every vaccination of every active pet and
    /// write a `pending` reminder for each one sitting on a window today.
    #[instrument(skip(self))]
    pub fn generate(&self) -> GenerationSummary {
        match self.generate_inner() {
            Ok(count) => {
                info!(created = count, "generation pass complete");
                GenerationSummary {
                    success: true,
                    reminders_created: count,
                    error: None,
                }
            }
            Err(e) => {
                error!(error = %e, "generation pass failed");
                GenerationSummary {
                    success: false,
                    reminders_created: 0,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    fn generate_inner(&self) -> Result<u32> {
        let today = self.clock.today();
        let pets = self.pets.list_active_pets_with_vaccinations()?;
        let mut created = 0u32;

        for pet in &pets {
            for entry in &pet.vaccinations {
                let due = match NaiveDate::parse_from_str(&entry.next_due_date, DATE_FORMAT) {
                    Ok(d) => d,
                    Err(e) => {
                        warn!(
                            pet_id = %pet.id,
                            vaccine = %entry.vaccine_name,
                            date = %entry.next_due_date,
                            error = %e,
                            "skipping vaccination with unparseable due date"
                        );
                        continue;
                    }
                };
                let days = days_until_due(due, today);
                let Some(reminder_type) = classify(days) else {
                    continue;
                };

                let key = ReminderKey {
                    pet_id: pet.id.clone(),
                    vaccine_name: entry.vaccine_name.clone(),
                    next_due_date: entry.next_due_date.clone(),
                    reminder_type,
                };
                // Already reached the owner once; never again for this key.
                // A duplicate that is merely pending is tolerated here and
                // weeded out by the delivery pass.
                if self
                    .ledger
                    .find_with_status(&key, &[ReminderStatus::Sent, ReminderStatus::Acknowledged])?
                    .is_some()
                {
                    debug!(%key, "already delivered, skipping");
                    continue;
                }

                let message = reminder_line(reminder_type, &pet.name, &entry.vaccine_name, days);
                let record = ReminderRecord::pending(
                    &key,
                    &pet.owner_id,
                    self.channel.name(),
                    &message,
                    &self.clock.now().to_rfc3339(),
                );
                self.ledger.insert(&record)?;
                info!(%key, reminder_id = %record.id, "reminder generated");
                created += 1;
            }
        }
        Ok(created)
    }

    /// Delivery pass: push every `pending` reminder through the channel.
    ///
    /// The count in the summary is records attempted (the batch size), not
    /// successful sends.
    #[instrument(skip(self))]
    pub async fn deliver(&self) -> DeliverySummary {
        match self.deliver_inner().await {
            Ok(count) => {
                info!(attempted = count, "delivery pass complete");
                DeliverySummary {
                    success: true,
                    reminders_sent: count,
                    error: None,
                }
            }
            Err(e) => {
                error!(error = %e, "delivery pass failed");
                DeliverySummary {
                    success: false,
                    reminders_sent: 0,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn deliver_inner(&self) -> Result<u32> {
        let today = self.clock.today();
        let pending = self.ledger.list_by_status(ReminderStatus::Pending)?;
        debug!(batch = pending.len(), "delivering pending reminders");
        let mut attempted = 0u32;

        for record in &pending {
            attempted += 1;

            // A tolerated generation duplicate whose twin already reached
            // the owner must not fire a second time.
            match self.ledger.find_with_status(
                &record.key(),
                &[ReminderStatus::Sent, ReminderStatus::Acknowledged],
            ) {
                Ok(Some(_)) => {
                    self.mark_failed(record, "duplicate of an already delivered reminder");
                    continue;
                }
                Ok(None) => {}
                Err(e) => {
                    self.mark_failed(record, &format!("ledger lookup failed: {e}"));
                    continue;
                }
            }

            let pet = match self.pets.get_pet(&record.pet_id) {
                Ok(Some(pet)) if pet.is_active => pet,
                Ok(Some(_)) => {
                    self.mark_failed(record, "pet is inactive");
                    continue;
                }
                Ok(None) => {
                    self.mark_failed(record, "pet no longer exists");
                    continue;
                }
                Err(e) => {
                    self.mark_failed(record, &format!("pet lookup failed: {e}"));
                    continue;
                }
            };

            let contact = match self.pets.get_owner_contact(&record.owner_id) {
                Ok(Some(contact)) => contact,
                Ok(None) => {
                    self.mark_failed(record, "owner has no usable contact address");
                    continue;
                }
                Err(e) => {
                    self.mark_failed(record, &format!("contact lookup failed: {e}"));
                    continue;
                }
            };

            let days = match NaiveDate::parse_from_str(&record.next_due_date, DATE_FORMAT) {
                Ok(due) => days_until_due(due, today),
                Err(e) => {
                    self.mark_failed(record, &format!("unparseable due date: {e}"));
                    continue;
                }
            };
            let rendered = render(
                record.reminder_type,
                &pet.name,
                &record.vaccine_name,
                &record.next_due_date,
                days,
            );
            let notification = Notification {
                to_address: contact.address,
                to_name: contact.name,
                subject: rendered.subject,
                body: rendered.body,
            };

            match self.channel.send(&notification).await {
                Ok(()) => self.mark_sent(record),
                Err(e) => self.mark_failed(record, &format!("channel send failed: {e}")),
            }
        }
        Ok(attempted)
    }

    /// One full run: generation, then delivery of whatever is pending —
    /// including the records generation just created. Delivery runs even
    /// when generation failed; older pending records still deserve a try.
    #[instrument(skip(self))]
    pub async fn run(&self) -> RunSummary {
        let generation = self.generate();
        let delivery = self.deliver().await;
        let total_processed = generation.reminders_created + delivery.reminders_sent;
        info!(
            created = generation.reminders_created,
            attempted = delivery.reminders_sent,
            total_processed,
            "reminder run complete"
        );
        RunSummary {
            generation,
            delivery,
            total_processed,
        }
    }

    fn mark_sent(&self, record: &ReminderRecord) {
        let now = self.clock.now().to_rfc3339();
        match self.ledger.update_status(&record.id, ReminderStatus::Sent, Some(&now)) {
            Ok(()) => info!(reminder_id = %record.id, key = %record.key(), "reminder sent"),
            Err(e) => {
                // The notification went out but the ledger missed it; dead-
                // letter the record so the next pass cannot send it again.
                error!(reminder_id = %record.id, error = %e, "failed to record sent status");
                self.mark_failed(record, "sent, but status update failed");
            }
        }
    }

    fn mark_failed(&self, record: &ReminderRecord, reason: &str) {
        warn!(reminder_id = %record.id, key = %record.key(), reason, "reminder delivery failed");
        if let Err(e) = self
            .ledger
            .update_status(&record.id, ReminderStatus::Failed, None)
        {
            error!(reminder_id = %record.id, error = %e, "failed to record failed status");
        }
    }
}
