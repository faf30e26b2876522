use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Identity of one installed schedule.
///
/// Re-adding or replacing a medication mints a fresh id, which is how the
/// scheduler recognizes (and discards) queue entries armed for a schedule
/// that is no longer on record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ScheduleId(Uuid);

impl ScheduleId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Immutable reminder cadence for one medication.
///
/// This is pure data: all live state (fire counter, armed deadline) belongs
/// to the scheduler, keyed by [`ScheduleId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSpec {
    /// Title-cased display name; also the unique store key.
    pub medication_name: String,
    /// Hours between fires. The parser guarantees this is positive.
    pub interval_hours: f64,
    /// Total run length in days; `None` runs until cancelled.
    pub duration_days: Option<u32>,
}

impl ScheduleSpec {
    /// Time between fires.
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval_hours * 3600.0)
    }

    /// Projected next fire from now — a display estimate, not the armed
    /// deadline the scheduler holds.
    pub fn projected_next(&self) -> DateTime<Utc> {
        Utc::now() + chrono::Duration::milliseconds((self.interval_hours * 3_600_000.0) as i64)
    }
}

/// One entry of a `list()` snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSummary {
    pub medication_name: String,
    pub interval_hours: f64,
    pub duration_days: Option<u32>,
    /// Fires delivered so far.
    pub reminders_sent: u64,
    /// Projected next fire (`now + interval`).
    pub next_reminder: DateTime<Utc>,
}

/// Returned by a successful `add()`.
#[derive(Debug, Clone, Serialize)]
pub struct AddConfirmation {
    pub schedule: ScheduleSpec,
    /// When the first fire of the freshly armed schedule is expected.
    pub next_reminder: DateTime<Utc>,
}
