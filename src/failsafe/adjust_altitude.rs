use std::sync::Arc;

use tracing::info;

use super::{FailSafeHandler, forward};
use crate::config::Coord;
use crate::events::{Issue, IssueKind};
use crate::mission::MissionContext;

/// Fixed upward course correction applied when altitude must change.
const CLIMB_VECTOR: Coord = (0.0, 0.0, 1.0);

pub struct AdjustAltitudeHandler {
    next: Option<Arc<dyn FailSafeHandler>>,
}

impl AdjustAltitudeHandler {
    pub fn new(next: Option<Arc<dyn FailSafeHandler>>) -> Self {
        Self { next }
    }
}

impl FailSafeHandler for AdjustAltitudeHandler {
    fn handle(&self, mission: &MissionContext, issue: &Issue) -> bool {
        if issue.kind == IssueKind::AdjustAltitude {
            mission.controller().adjust_course(CLIMB_VECTOR);
            info!(mission_id = %mission.config().mission_id, "Altitude adjusted");
            return true;
        }
        forward(&self.next, mission, issue)
    }
}
