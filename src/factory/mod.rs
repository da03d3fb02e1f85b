//! Mission assembly from raw request records.

mod builder;

pub use builder::MissionBuilder;

use tracing::debug;

use crate::config::MissionRequest;
use crate::error::Result;
use crate::mission::DroneMission;

/// Validates a raw mission record and wires a mission from the registry
/// defaults. Rejection happens before any component exists, so a bad
/// record never causes a movement side effect.
pub struct MissionFactory;

impl MissionFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn create_from_request(&self, request: &MissionRequest) -> Result<Box<dyn DroneMission>> {
        let config = request.validate()?;
        debug!(
            mission_id = %config.mission_id,
            mission_type = %config.mission_type,
            environment = %config.environment_type,
            platform = %config.platform_type,
            "Wiring mission components"
        );
        Ok(MissionBuilder::new(config).build())
    }
}

impl Default for MissionFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::config::MissionType;
    use crate::error::DroneError;
    use crate::mission::MissionPhase;

    fn request(mission_type: &str, environment: &str, platform: &str) -> MissionRequest {
        MissionRequest {
            mission_id: "f-1".into(),
            mission_type: mission_type.into(),
            environment_type: environment.into(),
            platform_type: platform.into(),
            mode: "single".into(),
            target_area: (5.0, 5.0, 5.0),
            base_area: (0.0, 0.0, 0.0),
            thresholds: HashMap::new(),
            behavior_params: HashMap::new(),
        }
    }

    #[test]
    fn test_creates_each_mission_variant() {
        let factory = MissionFactory::new();
        for (tag, expected) in [
            ("sea_exploration", MissionType::SeaExploration),
            ("agriculture", MissionType::Agriculture),
            ("defects_detection", MissionType::DefectsDetection),
            ("rescue", MissionType::Rescue),
            ("pollution_monitoring", MissionType::PollutionMonitoring),
        ] {
            let mission = factory
                .create_from_request(&request(tag, "air", "air"))
                .unwrap();
            assert_eq!(mission.mission_type(), expected);
        }
    }

    #[test]
    fn test_wiring_performs_no_side_effect() {
        let factory = MissionFactory::new();
        let mission = factory
            .create_from_request(&request("rescue", "air", "air"))
            .unwrap();

        assert_eq!(mission.core().phase(), MissionPhase::Wired);
        assert!(mission.core().context().recorder().is_empty());
    }

    #[test]
    fn test_rejects_unknown_tags() {
        let factory = MissionFactory::new();

        assert!(matches!(
            factory
                .create_from_request(&request("unknown", "air", "air"))
                .unwrap_err(),
            DroneError::UnknownMissionType(_)
        ));
        assert!(matches!(
            factory
                .create_from_request(&request("rescue", "vacuum", "air"))
                .unwrap_err(),
            DroneError::UnknownEnvironmentType(_)
        ));
        assert!(matches!(
            factory
                .create_from_request(&request("rescue", "air", "rail"))
                .unwrap_err(),
            DroneError::UnknownPlatformType(_)
        ));
    }
}
