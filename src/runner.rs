//! Entry point that takes a raw mission record through the full lifecycle.

use tracing::info;

use crate::config::MissionRequest;
use crate::error::Result;
use crate::factory::MissionFactory;
use crate::mission::MissionReport;

/// Runs missions end to end: validate, wire, launch, execute.
pub struct MissionRunner {
    factory: MissionFactory,
}

impl MissionRunner {
    pub fn new() -> Self {
        Self {
            factory: MissionFactory::new(),
        }
    }

    pub fn run_mission(&self, request: &MissionRequest) -> Result<MissionReport> {
        info!(mission_id = %request.mission_id, "Received mission request");

        let mut mission = self.factory.create_from_request(request)?;
        mission.launch()?;
        mission.execute_mission()
    }
}

impl Default for MissionRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::mission::MissionStatus;

    #[test]
    fn test_run_mission_completes() {
        let request = MissionRequest {
            mission_id: "r-1".into(),
            mission_type: "pollution_monitoring".into(),
            environment_type: "surface".into(),
            platform_type: "surface".into(),
            mode: "single".into(),
            target_area: (3.0, 4.0, 0.0),
            base_area: (0.0, 0.0, 0.0),
            thresholds: HashMap::new(),
            behavior_params: HashMap::new(),
        };

        let report = MissionRunner::new().run_mission(&request).unwrap();
        assert_eq!(report.mission_id, "r-1");
        assert_eq!(report.status, MissionStatus::Done);
    }
}
