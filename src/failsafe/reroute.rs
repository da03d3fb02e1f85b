use std::sync::Arc;

use tracing::info;

use super::{FailSafeHandler, forward};
use crate::events::{Issue, IssueKind};
use crate::mission::MissionContext;

/// Least disruptive remedy: hold position while a new route is worked out.
pub struct ReRouteHandler {
    next: Option<Arc<dyn FailSafeHandler>>,
}

impl ReRouteHandler {
    pub fn new(next: Option<Arc<dyn FailSafeHandler>>) -> Self {
        Self { next }
    }
}

impl FailSafeHandler for ReRouteHandler {
    fn handle(&self, mission: &MissionContext, issue: &Issue) -> bool {
        if issue.kind == IssueKind::Reroute {
            mission.controller().implementor().hold_position();
            info!(mission_id = %mission.config().mission_id, "Rerouting");
            return true;
        }
        forward(&self.next, mission, issue)
    }
}
