//! # sprout-reminders
//!
//! Medication reminder scheduling. Guardians describe a cadence in plain
//! language ("Take Ibuprofen every 6 hours for 3 days"); this crate parses
//! it, tracks one schedule per medication, and fires reminders through a
//! [`Notifier`](sprout_core::traits::Notifier) until the schedule is
//! cancelled or its duration elapses.
//!
//! Split into focused submodules:
//! - `parse` — free-text instruction → [`ScheduleSpec`]
//! - `store` — insertion-ordered schedule table and the delay queue
//! - `scheduler` — the coordinating task that sleeps, fires, and re-arms
//! - `manager` — the facade the tool layer talks to

mod error;
mod manager;
mod parse;
mod schedule;
mod scheduler;
mod store;


pub use error::ReminderError;
pub use manager::ReminderManager;
pub use parse::{parse, MAX_INTERVAL_HOURS, MAX_NAME_WORDS};
pub use schedule::{AddConfirmation, ScheduleId, ScheduleSpec, ScheduleSummary};
