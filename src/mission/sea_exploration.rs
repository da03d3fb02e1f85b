use tracing::{debug, info};

use super::template::{DroneMission, MissionCore};
use crate::config::MissionType;

/// Sonar survey of a patch of seabed.
pub struct SeaExplorationMission {
    core: MissionCore,
}

impl SeaExplorationMission {
    pub fn new(core: MissionCore) -> Self {
        Self { core }
    }
}

impl DroneMission for SeaExplorationMission {
    fn mission_type(&self) -> MissionType {
        MissionType::SeaExploration
    }

    fn core(&self) -> &MissionCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MissionCore {
        &mut self.core
    }

    fn perform_payload_action(&mut self) {
        let ctx = self.core.context();
        ctx.controller()
            .implementor()
            .broadcast("sonar survey in progress");
        info!(mission_id = %ctx.config().mission_id, "Scanning seabed");
    }

    fn collect_and_store_data(&mut self) {
        debug!(
            mission_id = %self.core.config().mission_id,
            "Archiving sonar sweep"
        );
    }
}
