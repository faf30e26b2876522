use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One reminder fire, as handed to a [`Notifier`](crate::traits::Notifier).
///
/// This is a snapshot taken at fire time; it carries everything a delivery
/// backend needs without giving it access to the live schedule state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderFire {
    /// Title-cased medication name.
    pub medication_name: String,
    /// Wall-clock time the fire was emitted.
    pub fired_at: DateTime<Utc>,
    /// Hours until the next fire, if the schedule re-arms.
    pub interval_hours: f64,
    /// 1-based position of this fire in the schedule's lifetime.
    pub sequence: u64,
}
