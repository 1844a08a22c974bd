use furbit_ledger::ReminderType;

/// Subject and plain-text body for one outgoing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub subject: String,
    pub body: String,
}

/// The short one-line message persisted on a reminder record at generation
/// time. Fields are interpolated literally; no escaping.
pub fn reminder_line(
    reminder_type: ReminderType,
    pet_name: &str,
    vaccine_name: &str,
    days_until_due: i64,
) -> String {
    match reminder_type {
        ReminderType::SevenDaysBefore => {
            format!("Reminder: {pet_name}'s {vaccine_name} vaccination is due in 7 days.")
        }
        ReminderType::ThreeDaysBefore => {
            format!("Reminder: {pet_name}'s {vaccine_name} vaccination is due in 3 days.")
        }
        ReminderType::DueToday => {
            format!("Important: {pet_name}'s {vaccine_name} vaccination is due today!")
        }
        ReminderType::Overdue => {
            let overdue_days = days_until_due.abs();
            format!(
                "Alert: {pet_name}'s {vaccine_name} vaccination is overdue by {overdue_days} days."
            )
        }
    }
}

/// Per-window subject and body for channel delivery.
///
/// Copy follows the app's notification templates; `days_until_due` only
/// shows up in the overdue body.
pub fn render(
    reminder_type: ReminderType,
    pet_name: &str,
    vaccine_name: &str,
    due_date: &str,
    days_until_due: i64,
) -> RenderedMessage {
    match reminder_type {
        ReminderType::SevenDaysBefore => RenderedMessage {
            subject: format!("📅 Vaccination Reminder - {pet_name}'s {vaccine_name} Due in 7 Days"),
            body: format!(
                "{pet_name}'s {vaccine_name} vaccination is due in 7 days.\n\
                 Due date: {due_date}.\n\
                 Plan ahead and schedule an appointment with your veterinarian."
            ),
        },
        ReminderType::ThreeDaysBefore => RenderedMessage {
            subject: format!("🔔 Vaccination Due in 3 Days - {pet_name}'s {vaccine_name}"),
            body: format!(
                "{pet_name}'s {vaccine_name} vaccination is due in 3 days.\n\
                 Due date: {due_date}.\n\
                 Please schedule an appointment with your veterinarian soon to ensure your pet stays healthy."
            ),
        },
        ReminderType::DueToday => RenderedMessage {
            subject: format!("📌 Vaccination Due Today - {pet_name}'s {vaccine_name}"),
            body: format!(
                "{pet_name}'s {vaccine_name} vaccination is due today!\n\
                 Due date: {due_date}.\n\
                 Please contact your veterinarian to schedule the vaccination appointment."
            ),
        },
        ReminderType::Overdue => {
            let overdue_days = days_until_due.abs();
            RenderedMessage {
                subject: format!("⚠️ Overdue Vaccination Alert - {pet_name}'s {vaccine_name}"),
                body: format!(
                    "{pet_name}'s {vaccine_name} vaccination is overdue by {overdue_days} days.\n\
                     Due date: {due_date}.\n\
                     Please schedule a veterinary appointment as soon as possible to keep your pet protected."
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reminder_lines_use_the_fixed_templates() {
        assert_eq!(
            reminder_line(ReminderType::SevenDaysBefore, "Max", "Rabies", 7),
            "Reminder: Max's Rabies vaccination is due in 7 days."
        );
        assert_eq!(
            reminder_line(ReminderType::ThreeDaysBefore, "Max", "Rabies", 3),
            "Reminder: Max's Rabies vaccination is due in 3 days."
        );
        assert_eq!(
            reminder_line(ReminderType::DueToday, "Max", "Rabies", 0),
            "Important: Max's Rabies vaccination is due today!"
        );
        assert_eq!(
            reminder_line(ReminderType::Overdue, "Max", "Rabies", -5),
            "Alert: Max's Rabies vaccination is overdue by 5 days."
        );
    }

    #[test]
    fn overdue_body_carries_the_day_count() {
        let rendered = render(ReminderType::Overdue, "Max", "Rabies", "2026-08-20", -5);
        assert!(rendered.body.contains("overdue"));
        assert!(rendered.body.contains('5'));
        assert!(rendered.body.contains("2026-08-20"));
    }

    #[test]
    fn names_interpolate_literally_without_escaping() {
        let rendered = render(
            ReminderType::DueToday,
            "Max <b>Jr.</b>",
            "K9 & Friends Combo",
            "2026-08-25",
            0,
        );
        assert!(rendered.subject.contains("Max <b>Jr.</b>"));
        assert!(rendered.subject.contains("K9 & Friends Combo"));
        assert!(rendered.body.contains("Max <b>Jr.</b>"));
        assert!(rendered.body.contains("K9 & Friends Combo"));
    }

    #[test]
    fn each_window_gets_its_own_subject() {
        let subjects: Vec<String> = [
            (ReminderType::SevenDaysBefore, 7),
            (ReminderType::ThreeDaysBefore, 3),
            (ReminderType::DueToday, 0),
            (ReminderType::Overdue, -2),
        ]
        .into_iter()
        .map(|(ty, days)| render(ty, "Max", "Rabies", "2026-09-01", days).subject)
        .collect();

        for (i, a) in subjects.iter().enumerate() {
            for b in subjects.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
