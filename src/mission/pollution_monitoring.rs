use tracing::{debug, info};

use super::template::{DroneMission, MissionCore};
use crate::config::MissionType;

/// Contaminant sampling over the target area.
pub struct PollutionMonitoringMission {
    core: MissionCore,
    samples_collected: usize,
}

impl PollutionMonitoringMission {
    pub fn new(core: MissionCore) -> Self {
        Self {
            core,
            samples_collected: 0,
        }
    }
}

impl DroneMission for PollutionMonitoringMission {
    fn mission_type(&self) -> MissionType {
        MissionType::PollutionMonitoring
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
            .broadcast("pollution probes deployed");
        info!(mission_id = %ctx.config().mission_id, "Sampling contaminants");
    }

    fn collect_and_store_data(&mut self) {
        self.samples_collected += 1;
        debug!(
            mission_id = %self.core.config().mission_id,
            samples = self.samples_collected,
            "Stored contaminant sample"
        );
    }
}
