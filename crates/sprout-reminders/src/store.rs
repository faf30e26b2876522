//! In-memory schedule table and delay queue.
//!
//! Both live behind the scheduler's single mutex; every method here assumes
//! the caller already holds that lock. Entries keep insertion
//! order so `list()` reads back in the order guardians created them.

use crate::schedule::{ScheduleId, ScheduleSpec};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tokio::time::Instant;

/// Live state of one tracked medication.
#[derive(Debug)]
pub(crate) struct Entry {
    pub id: ScheduleId,
    pub spec: ScheduleSpec,
    /// Monotonic creation time, for expiry math.
    pub started: Instant,
    pub reminder_count: u64,
}

impl Entry {
    pub fn new(spec: ScheduleSpec) -> Self {
        Self {
            id: ScheduleId::new(),
            spec,
            started: Instant::now(),
            reminder_count: 0,
        }
    }

    /// Whether the schedule's configured duration has fully elapsed.
    ///
    /// Checked at the moment a fire would otherwise re-arm. A schedule
    /// without a duration never expires on its own.
    pub fn expired(&self, now: Instant) -> bool {
        match self.spec.duration_days {
            Some(days) => {
                let elapsed_hours = now.duration_since(self.started).as_secs_f64() / 3600.0;
                elapsed_hours >= f64::from(days) * 24.0
            }
            None => false,
        }
    }
}

/// One armed future fire.
///
/// The queue may hold entries for schedules that were since cancelled or
/// replaced; those are recognized by `id` mismatch when popped and dropped
/// as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Armed {
    pub due: Instant,
    pub id: ScheduleId,
    pub name: String,
}

/// Insertion-ordered name→schedule table plus the fire queue.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    entries: Vec<Entry>,
    queue: BinaryHeap<Reverse<Armed>>,
}

impl StoreState {
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.spec.medication_name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|e| e.spec.medication_name == name)
    }

    /// Install an entry. A same-named entry is replaced in place, keeping
    /// its list position; its old id makes any armed fires stale.
    pub fn insert(&mut self, entry: Entry) {
        let name = entry.spec.medication_name.clone();
        match self.entries.iter_mut().find(|e| e.spec.medication_name == name) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.spec.medication_name == name)?;
        Some(self.entries.remove(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Arm a future fire for a schedule.
    pub fn arm(&mut self, due: Instant, id: ScheduleId, name: String) {
        self.queue.push(Reverse(Armed { due, id, name }));
    }

    /// Earliest armed deadline, stale entries included.
    pub fn next_due(&self) -> Option<Instant> {
        self.queue.peek().map(|Reverse(armed)| armed.due)
    }

    /// Pop the earliest armed fire if it is due.
    pub fn pop_due(&mut self, now: Instant) -> Option<Armed> {
        if self.next_due()? <= now {
            self.queue.pop().map(|Reverse(armed)| armed)
        } else {
            None
        }
    }

    /// Drop every schedule and every armed fire. Returns how many schedules
    /// were active.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.queue.clear();
        count
    }
}
