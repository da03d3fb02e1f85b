use tracing::{debug, info};

use super::template::{DroneMission, MissionCore};
use crate::config::MissionType;

/// Structural inspection pass over a surface section.
pub struct DefectsDetectionMission {
    core: MissionCore,
}

impl DefectsDetectionMission {
    pub fn new(core: MissionCore) -> Self {
        Self { core }
    }
}

impl DroneMission for DefectsDetectionMission {
    fn mission_type(&self) -> MissionType {
        MissionType::DefectsDetection
    }

    fn core(&self) -> &MissionCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MissionCore {
        &mut self.core
    }

    fn perform_payload_action(&mut self) {
        let ctx = self.core.context();
        ctx.controller().implementor().hold_position();
        info!(
            mission_id = %ctx.config().mission_id,
            "Running structural inspection sweep"
        );
    }

    fn postprocess_results(&mut self) {
        debug!(
            mission_id = %self.core.config().mission_id,
            "Compiling defect report"
        );
    }
}
