use tracing::warn;

use super::ReactionStrategy;
use crate::events::{IssueKind, Reading};
use crate::mission::MissionContext;

/// Cracks per inspected section beyond which the structure is treated as
/// critically damaged.
pub const MAX_CRACK_COUNT: f64 = 3.0;

/// Raises an emergency when the crack count exceeds the fixed limit.
pub struct CrackReaction;

impl ReactionStrategy for CrackReaction {
    fn react(&self, mission: &MissionContext, reading: &Reading) -> bool {
        let Some(count) = reading.measurement("count") else {
            return false;
        };

        if count > MAX_CRACK_COUNT {
            warn!(count, limit = MAX_CRACK_COUNT, "Crack count limit exceeded");
            mission.request_fail_safe(IssueKind::Emergency, reading.clone());
            return true;
        }
        false
    }
}
