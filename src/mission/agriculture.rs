use serde_json::Value;
use tracing::info;

use super::template::{DroneMission, MissionCore};
use crate::config::MissionType;

const DEFAULT_SPRAY_RATE: f64 = 1.0;

/// Crop treatment over a field; spray rate comes from `behavior_params`.
pub struct AgricultureMission {
    core: MissionCore,
    spray_rate: f64,
}

impl AgricultureMission {
    pub fn new(core: MissionCore) -> Self {
        Self {
            core,
            spray_rate: DEFAULT_SPRAY_RATE,
        }
    }
}

impl DroneMission for AgricultureMission {
    fn mission_type(&self) -> MissionType {
        MissionType::Agriculture
    }

    fn core(&self) -> &MissionCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MissionCore {
        &mut self.core
    }

    fn load_config(&mut self) {
        let rate = self
            .core
            .config()
            .behavior_param("spray_rate")
            .and_then(Value::as_f64);
        if let Some(rate) = rate {
            self.spray_rate = rate;
        }
    }

    fn perform_payload_action(&mut self) {
        let ctx = self.core.context();
        ctx.controller()
            .implementor()
            .broadcast(&format!("spraying at {:.1} l/ha", self.spray_rate));
        info!(
            mission_id = %ctx.config().mission_id,
            spray_rate = self.spray_rate,
            "Treating field"
        );
    }
}
