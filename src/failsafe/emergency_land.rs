use std::sync::Arc;

use tracing::warn;

use super::{FailSafeHandler, forward};
use crate::events::{Issue, IssueKind};
use crate::mission::MissionContext;

/// Last resort: put the vehicle down immediately.
pub struct EmergencyLandHandler {
    next: Option<Arc<dyn FailSafeHandler>>,
}

impl EmergencyLandHandler {
    pub fn new(next: Option<Arc<dyn FailSafeHandler>>) -> Self {
        Self { next }
    }
}

impl FailSafeHandler for EmergencyLandHandler {
    fn handle(&self, mission: &MissionContext, issue: &Issue) -> bool {
        if issue.kind == IssueKind::Emergency {
            mission.controller().implementor().land();
            warn!(mission_id = %mission.config().mission_id, "Emergency landing");
            return true;
        }
        forward(&self.next, mission, issue)
    }
}
