use std::sync::Arc;

use tracing::info;

use super::{FailSafeHandler, forward};
use crate::events::{Issue, IssueKind};
use crate::mission::MissionContext;

/// Switches the vehicle into swarm mode when a swarm reassignment is
/// requested. Not part of the standard chain; assemble it explicitly for
/// swarm-capable deployments.
pub struct SwarmReassignHandler {
    next: Option<Arc<dyn FailSafeHandler>>,
}

impl SwarmReassignHandler {
    pub fn new(next: Option<Arc<dyn FailSafeHandler>>) -> Self {
        Self { next }
    }
}

impl FailSafeHandler for SwarmReassignHandler {
    fn handle(&self, mission: &MissionContext, issue: &Issue) -> bool {
        if issue.kind == IssueKind::Swarm {
            mission.controller().set_swarm();
            info!(mission_id = %mission.config().mission_id, "Reassigned to swarm mode");
            return true;
        }
        forward(&self.next, mission, issue)
    }
}
