//! The tool-invocation boundary.
//!
//! The conversation runtime calls these with whatever the guardian said and
//! relays the returned string verbatim, so every branch reads as a complete,
//! calm sentence. The manager is injected by the composition root; nothing
//! here holds global state.

use sprout_reminders::{ReminderError, ReminderManager};

/// Set up a medication reminder from a free-text instruction, e.g.
/// "Take Zyrtec every 12 hours" or "Take Ibuprofen every 6 hours for 3 days".
pub fn set_medication_reminder(manager: &ReminderManager, instruction: &str) -> String {
    match manager.add(instruction) {
        Ok(conf) => {
            let duration_info = match conf.schedule.duration_days {
                Some(d) => format!(" for {d} days"),
                None => String::new(),
            };
            format!(
                "Reminder set for {} every {} hours{}. First reminder at {}.",
                conf.schedule.medication_name,
                conf.schedule.interval_hours,
                duration_info,
                conf.next_reminder.format("%H:%M:%S"),
            )
        }
        Err(e) => format!("I couldn't set up that reminder: {e}."),
    }
}

/// List every active medication reminder.
pub fn list_medication_reminders(manager: &ReminderManager) -> String {
    let schedules = manager.list();
    if schedules.is_empty() {
        return "No active medication reminders are currently set.".to_string();
    }

    let mut response = String::from("Active medication reminders:\n");
    for (i, schedule) in schedules.iter().enumerate() {
        let duration = match schedule.duration_days {
            Some(d) => format!(" (for {d} days)"),
            None => String::new(),
        };
        response.push_str(&format!(
            "\n{}. {} - every {} hours{}\n   Next reminder: {}\n   Reminders sent: {}",
            i + 1,
            schedule.medication_name,
            schedule.interval_hours,
            duration,
            schedule.next_reminder.format("%Y-%m-%d %H:%M:%S"),
            schedule.reminders_sent,
        ));
    }
    response
}

/// Cancel the reminder for one medication.
pub fn cancel_medication_reminder(manager: &ReminderManager, medication_name: &str) -> String {
    match manager.cancel(medication_name) {
        Ok(name) => format!("Reminder for {name} has been cancelled."),
        Err(ReminderError::NotScheduled(name)) => {
            format!("No active reminder found for {name}.")
        }
        Err(e) => format!("I couldn't cancel that reminder: {e}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sprout_core::{error::SproutError, message::ReminderFire, traits::Notifier};
    use std::sync::Arc;

    struct Null;

    #[async_trait]
    impl Notifier for Null {
        fn name(&self) -> &str {
            "null"
        }

        async fn deliver(&self, _fire: &ReminderFire) -> Result<(), SproutError> {
            Ok(())
        }
    }

    fn manager() -> ReminderManager {
        ReminderManager::new(Arc::new(Null))
    }

    #[tokio::test]
    async fn test_set_reminder_confirmation() {
        let mgr = manager();
        let msg = set_medication_reminder(&mgr, "Take Ibuprofen every 6 hours for 3 days");
        assert!(msg.starts_with("Reminder set for Ibuprofen every 6 hours for 3 days."));
        assert!(msg.contains("First reminder at"));
    }

    #[tokio::test]
    async fn test_set_reminder_unparseable() {
        let mgr = manager();
        let msg = set_medication_reminder(&mgr, "my child has a cough");
        assert!(msg.starts_with("I couldn't set up that reminder"));
        assert!(msg.contains("every 12 hours"), "should suggest the format");
    }

    #[tokio::test]
    async fn test_list_empty() {
        let mgr = manager();
        assert_eq!(
            list_medication_reminders(&mgr),
            "No active medication reminders are currently set."
        );
    }

    #[tokio::test]
    async fn test_list_formats_each_schedule() {
        let mgr = manager();
        set_medication_reminder(&mgr, "Take Zyrtec every 12 hours");
        set_medication_reminder(&mgr, "Amoxicillin every 8 hours for 2 weeks");

        let msg = list_medication_reminders(&mgr);
        assert!(msg.contains("1. Zyrtec - every 12 hours"));
        assert!(msg.contains("2. Amoxicillin - every 8 hours (for 14 days)"));
        assert!(msg.contains("Reminders sent: 0"));
    }

    #[tokio::test]
    async fn test_cancel_known_and_unknown() {
        let mgr = manager();
        set_medication_reminder(&mgr, "Take Zyrtec every 12 hours");
        assert_eq!(
            cancel_medication_reminder(&mgr, "zyrtec"),
            "Reminder for Zyrtec has been cancelled."
        );
        assert_eq!(
            cancel_medication_reminder(&mgr, "zyrtec"),
            "No active reminder found for Zyrtec."
        );
    }
}
