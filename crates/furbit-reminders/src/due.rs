use chrono::{Duration, NaiveDate};
use furbit_ledger::ReminderType;

/// Signed whole days from `today` to `due`.
///
/// Calendar-date subtraction: tomorrow is 1 regardless of time of day,
/// yesterday is -1. Due dates are day-granularity throughout.
pub fn days_until_due(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Inverse of [`days_until_due`]: the due date sitting `days` from `today`.
pub fn due_date_for_offset(today: NaiveDate, days: i64) -> NaiveDate {
    today + Duration::days(days)
}

/// Map a day-offset onto a reminder window.
///
/// Strict equality for the three upcoming windows and an open range for
/// overdue. An offset of 1, 2, 4, 5, 6 or anything above 7 produces no
/// reminder at all; a window is silently missed when generation does not
/// run on its exact day.
pub fn classify(days_until_due: i64) -> Option<ReminderType> {
    match days_until_due {
        7 => Some(ReminderType::SevenDaysBefore),
        3 => Some(ReminderType::ThreeDaysBefore),
        0 => Some(ReminderType::DueToday),
        d if d < 0 => Some(ReminderType::Overdue),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_match_exact_offsets_only() {
        assert_eq!(classify(7), Some(ReminderType::SevenDaysBefore));
        assert_eq!(classify(3), Some(ReminderType::ThreeDaysBefore));
        assert_eq!(classify(0), Some(ReminderType::DueToday));
        assert_eq!(classify(-1), Some(ReminderType::Overdue));
        assert_eq!(classify(-100), Some(ReminderType::Overdue));

        for off_window in [1, 2, 4, 5, 6, 8, 100] {
            assert_eq!(classify(off_window), None, "offset {off_window}");
        }
    }

    #[test]
    fn offsets_are_signed_calendar_days() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let across_month = NaiveDate::from_ymd_opt(2026, 9, 2).unwrap();
        let last_week = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();

        assert_eq!(days_until_due(across_month, today), 3);
        assert_eq!(days_until_due(last_week, today), -7);
        assert_eq!(days_until_due(today, today), 0);
    }

    #[test]
    fn offset_and_due_date_round_trip() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 27).unwrap();
        for days in [-30, -1, 0, 3, 7, 365] {
            let due = due_date_for_offset(today, days);
            assert_eq!(days_until_due(due, today), days);
        }
    }
}
