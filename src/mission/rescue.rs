use tracing::info;

use super::template::{DroneMission, MissionCore};
use crate::config::{FlightMode, MissionType};

/// Search-and-rescue sweep. In swarm mode the vehicle joins the formation
/// before announcing itself.
pub struct RescueMission {
    core: MissionCore,
}

impl RescueMission {
    pub fn new(core: MissionCore) -> Self {
        Self { core }
    }
}

impl DroneMission for RescueMission {
    fn mission_type(&self) -> MissionType {
        MissionType::Rescue
    }

    fn core(&self) -> &MissionCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MissionCore {
        &mut self.core
    }

    fn perform_payload_action(&mut self) {
        let ctx = self.core.context();
        if ctx.config().mode == FlightMode::Swarm {
            ctx.controller().set_swarm();
        }
        ctx.controller().implementor().broadcast("rescue beacon active");
        info!(
            mission_id = %ctx.config().mission_id,
            "Sweeping area for survivors"
        );
    }
}
