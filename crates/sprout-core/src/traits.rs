use crate::{error::SproutError, message::ReminderFire};
use async_trait::async_trait;

/// Reminder delivery trait — how a fire reaches the guardian.
///
/// The scheduler calls this outside its lock, so a slow backend never blocks
/// store operations. Delivery failures are reported, logged by the caller,
/// and never affect the schedule's re-arm decision.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Deliver one reminder fire.
    async fn deliver(&self, fire: &ReminderFire) -> Result<(), SproutError>;
}
