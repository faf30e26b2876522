use crate::parse::MAX_NAME_WORDS;
use thiserror::Error;

/// Structured failures of the reminder subsystem.
///
/// These are expected, user-recoverable outcomes — the tool layer turns them
/// into conversational messages, so every variant reads well on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReminderError {
    /// No "every N hours" clause was found in the instruction.
    #[error(
        "could not recognize a medication schedule — use a format like \
         'Take Zyrtec every 12 hours' or 'Take Ibuprofen every 6 hours for 3 days'"
    )]
    UnrecognizedSchedule,

    /// More than [`MAX_NAME_WORDS`] contiguous name words preceded "every".
    /// Rejected outright rather than silently truncated.
    #[error(
        "medication names of more than {MAX_NAME_WORDS} words are not supported — \
         use a shorter name before 'every'"
    )]
    NameTooLong,

    /// Cancel was asked for a medication with no active schedule.
    #[error("no active reminder found for {0}")]
    NotScheduled(String),
}
