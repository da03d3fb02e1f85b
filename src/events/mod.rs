//! Environment readings, fail-safe issues, and the in-process event bus.

mod bus;
mod reading;

pub use bus::{EventBus, SubscriberId};
pub use reading::{Issue, IssueKind, Reading, ReadingKind};
