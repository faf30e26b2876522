//! The recurring trigger engine.
//!
//! One coordinating task owns the delay queue: it sleeps until the earliest
//! armed deadline (or a wakeup when the manager arms or clears schedules),
//! pops due fires, delivers them, and decides expiry vs re-arm. This keeps
//! the number of background tasks constant no matter how many medications
//! are tracked, and gives cancellation a single place to take effect.

use crate::store::StoreState;
use sprout_core::{message::ReminderFire, traits::Notifier};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;
use tokio::time::{self, Instant};
use tracing::{debug, error, info};

/// State shared between the manager facade and the coordinating task.
pub(crate) struct Shared {
    state: Mutex<StoreState>,
    /// Pinged whenever the queue may have a new earliest deadline.
    pub wake: Notify,
    pub notifier: Arc<dyn Notifier>,
}

impl Shared {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
            wake: Notify::new(),
            notifier,
        }
    }

    /// Acquire the store lock. Held only for O(1)-bounded work and never
    /// across an await; a poisoned lock is recovered rather than propagated
    /// since the guarded state stays consistent under these access rules.
    pub fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Drive the delay queue until the process exits.
///
/// Detached background work: there is no teardown protocol, and dropping the
/// runtime drops the task mid-sleep without touching schedule state.
pub(crate) async fn run(shared: Arc<Shared>) {
    loop {
        let next = shared.lock().next_due();
        match next {
            None => shared.wake.notified().await,
            Some(due) => {
                tokio::select! {
                    _ = time::sleep_until(due) => fire_due(&shared).await,
                    // A new arm may have an earlier deadline; re-evaluate.
                    _ = shared.wake.notified() => {}
                }
            }
        }
    }
}

/// Pop and handle every fire that is currently due.
///
/// Per fire: validate under the lock, deliver WITHOUT the lock (a slow
/// notifier must not block store operations), then re-validate and make the
/// expiry/re-arm decision. A pop whose schedule id is no longer on record is
/// a stale arm from a cancelled or replaced schedule and is dropped — a fire
/// can never resurrect a cancelled schedule.
async fn fire_due(shared: &Arc<Shared>) {
    loop {
        let (armed, fire) = {
            let mut state = shared.lock();
            let Some(armed) = state.pop_due(Instant::now()) else {
                break;
            };
            match state.get(&armed.name) {
                Some(entry) if entry.id == armed.id => {
                    let fire = ReminderFire {
                        medication_name: entry.spec.medication_name.clone(),
                        fired_at: chrono::Utc::now(),
                        interval_hours: entry.spec.interval_hours,
                        sequence: entry.reminder_count + 1,
                    };
                    (armed, fire)
                }
                _ => {
                    debug!("dropping stale fire for {}", armed.name);
                    continue;
                }
            }
        };

        // Delivery failures are logged and must never prevent the
        // expiry/re-arm decision below.
        if let Err(e) = shared.notifier.deliver(&fire).await {
            error!(
                "reminder delivery failed for {} via {}: {e}",
                fire.medication_name,
                shared.notifier.name()
            );
        } else {
            info!(
                "reminder fired: {} (#{})",
                fire.medication_name, fire.sequence
            );
        }

        let mut state = shared.lock();
        // The schedule may have been cancelled or replaced while the
        // notification was in flight; that cancellation wins.
        let Some(entry) = state.get_mut(&armed.name).filter(|e| e.id == armed.id) else {
            continue;
        };
        entry.reminder_count += 1;

        let now = Instant::now();
        let expired = entry.expired(now);
        let interval = entry.spec.interval();
        if expired {
            info!("medication schedule for {} has completed", armed.name);
            state.remove(&armed.name);
        } else {
            state.arm(now + interval, armed.id, armed.name);
        }
    }
}
