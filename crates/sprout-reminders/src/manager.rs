//! The facade the tool layer talks to.

use crate::error::ReminderError;
use crate::parse;
use crate::schedule::{AddConfirmation, ScheduleSummary};
use crate::scheduler::{self, Shared};
use crate::store::Entry;
use sprout_core::traits::Notifier;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::info;

/// Manages medication reminder schedules.
///
/// Owns the schedule store and spawns the trigger engine's coordinating
/// task. Cheap to clone; clones share state. Built once at the composition
/// root and handed to whoever needs it — there is no process-global
/// instance.
#[derive(Clone)]
pub struct ReminderManager {
    shared: Arc<Shared>,
}

impl ReminderManager {
    /// Create a manager and start its trigger engine on the current tokio
    /// runtime. Fires are delivered through `notifier`.
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        let shared = Arc::new(Shared::new(notifier));
        tokio::spawn(scheduler::run(Arc::clone(&shared)));
        Self { shared }
    }

    /// Parse an instruction and install the schedule, arming its first fire.
    ///
    /// Idempotent per medication name: a same-named schedule is cancelled
    /// and replaced, so re-adding always yields a single clean chain.
    pub fn add(&self, text: &str) -> Result<AddConfirmation, ReminderError> {
        let spec = parse::parse(text)?;
        let next_reminder = spec.projected_next();

        {
            let mut state = self.shared.lock();
            let entry = Entry::new(spec.clone());
            let id = entry.id;
            if state.get(&spec.medication_name).is_some() {
                info!("replacing existing schedule for {}", spec.medication_name);
            }
            state.insert(entry);
            state.arm(
                Instant::now() + spec.interval(),
                id,
                spec.medication_name.clone(),
            );
        }
        // The new deadline may be the earliest; wake the engine.
        self.shared.wake.notify_one();

        info!(
            "scheduled {} every {} hours{}",
            spec.medication_name,
            spec.interval_hours,
            match spec.duration_days {
                Some(d) => format!(" for {d} days"),
                None => String::new(),
            }
        );

        Ok(AddConfirmation {
            schedule: spec,
            next_reminder,
        })
    }

    /// Snapshot every active schedule, in insertion order.
    pub fn list(&self) -> Vec<ScheduleSummary> {
        let state = self.shared.lock();
        state
            .iter()
            .map(|entry| ScheduleSummary {
                medication_name: entry.spec.medication_name.clone(),
                interval_hours: entry.spec.interval_hours,
                duration_days: entry.spec.duration_days,
                reminders_sent: entry.reminder_count,
                next_reminder: entry.spec.projected_next(),
            })
            .collect()
    }

    /// Cancel one medication's schedule. Returns the canonical (title-cased)
    /// name on success. Any still-armed fire for it becomes a no-op.
    pub fn cancel(&self, name: &str) -> Result<String, ReminderError> {
        let canonical = parse::title_case(name);
        let mut state = self.shared.lock();
        match state.remove(&canonical) {
            Some(_) => {
                info!("cancelled reminder for {canonical}");
                Ok(canonical)
            }
            None => Err(ReminderError::NotScheduled(canonical)),
        }
    }

    /// Cancel everything in one atomic step. Returns how many schedules were
    /// active.
    pub fn cancel_all(&self) -> usize {
        let count = self.shared.lock().clear();
        // Let the engine drop any deadline it was sleeping toward.
        self.shared.wake.notify_one();
        info!("cancelled {count} medication reminder(s)");
        count
    }

    /// Number of active schedules.
    pub fn active_count(&self) -> usize {
        self.shared.lock().len()
    }
}
