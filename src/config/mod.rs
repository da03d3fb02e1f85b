//! Mission configuration types and validation.
//!
//! A caller supplies a raw [`MissionRequest`] record (the wire-shaped form,
//! with string type tags). Validation turns it into an immutable
//! [`MissionConfig`] whose type fields are closed enums; unknown tags are
//! rejected here, before any mission component is wired.

use std::collections::HashMap;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DroneError, Result};

/// A point or direction vector in mission space: (x, y, z).
pub type Coord = (f64, f64, f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MissionType {
    SeaExploration,
    Agriculture,
    DefectsDetection,
    Rescue,
    PollutionMonitoring,
}

impl MissionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SeaExploration => "sea_exploration",
            Self::Agriculture => "agriculture",
            Self::DefectsDetection => "defects_detection",
            Self::Rescue => "rescue",
            Self::PollutionMonitoring => "pollution_monitoring",
        }
    }
}

impl std::fmt::Display for MissionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MissionType {
    type Err = DroneError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sea_exploration" => Ok(Self::SeaExploration),
            "agriculture" => Ok(Self::Agriculture),
            "defects_detection" => Ok(Self::DefectsDetection),
            "rescue" => Ok(Self::Rescue),
            "pollution_monitoring" => Ok(Self::PollutionMonitoring),
            other => Err(DroneError::UnknownMissionType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentType {
    Air,
    Sea,
    Surface,
}

impl EnvironmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Air => "air",
            Self::Sea => "sea",
            Self::Surface => "surface",
        }
    }
}

impl std::fmt::Display for EnvironmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EnvironmentType {
    type Err = DroneError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "air" => Ok(Self::Air),
            "sea" => Ok(Self::Sea),
            "surface" => Ok(Self::Surface),
            other => Err(DroneError::UnknownEnvironmentType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlatformType {
    Air,
    Sea,
    Surface,
}

impl PlatformType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Air => "air",
            Self::Sea => "sea",
            Self::Surface => "surface",
        }
    }
}

impl std::fmt::Display for PlatformType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PlatformType {
    type Err = DroneError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "air" => Ok(Self::Air),
            "sea" => Ok(Self::Sea),
            "surface" => Ok(Self::Surface),
            other => Err(DroneError::UnknownPlatformType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FlightMode {
    #[default]
    Single,
    Swarm,
}

impl FlightMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Swarm => "swarm",
        }
    }
}

impl std::fmt::Display for FlightMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FlightMode {
    type Err = DroneError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "single" => Ok(Self::Single),
            "swarm" => Ok(Self::Swarm),
            other => Err(DroneError::UnknownFlightMode(other.to_string())),
        }
    }
}

/// Raw mission record as supplied by a caller (request body, config file).
///
/// Type tags stay as plain strings here; [`MissionRequest::validate`] maps
/// them onto the closed enums and is the single rejection point for unknown
/// values.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MissionRequest {
    pub mission_id: String,
    pub mission_type: String,
    pub environment_type: String,
    pub platform_type: String,
    pub mode: String,
    pub target_area: Coord,
    pub base_area: Coord,
    #[serde(default)]
    pub thresholds: HashMap<String, f64>,
    #[serde(default)]
    pub behavior_params: HashMap<String, Value>,
}

impl MissionRequest {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Validate the record into an immutable typed configuration.
    ///
    /// Fails fast on an unknown mission/environment/platform/mode tag or an
    /// empty mission id. No side effect has happened by the time this
    /// returns an error.
    pub fn validate(&self) -> Result<MissionConfig> {
        if self.mission_id.trim().is_empty() {
            return Err(DroneError::Config("mission_id must not be empty".into()));
        }

        Ok(MissionConfig {
            mission_id: self.mission_id.clone(),
            mission_type: self.mission_type.parse()?,
            environment_type: self.environment_type.parse()?,
            platform_type: self.platform_type.parse()?,
            mode: self.mode.parse()?,
            target_area: self.target_area,
            base_area: self.base_area,
            thresholds: self.thresholds.clone(),
            behavior_params: self.behavior_params.clone(),
        })
    }
}

/// Immutable, validated mission parameters. Owned by the mission that they
/// parameterize; never mutated after construction.
///
/// `environment_type` and `platform_type` are deliberately independent: an
/// air platform may be flown over a sea environment for aerial inspection.
#[derive(Debug, Clone, Serialize)]
pub struct MissionConfig {
    pub mission_id: String,
    pub mission_type: MissionType,
    pub environment_type: EnvironmentType,
    pub platform_type: PlatformType,
    pub mode: FlightMode,
    pub target_area: Coord,
    pub base_area: Coord,
    pub thresholds: HashMap<String, f64>,
    pub behavior_params: HashMap<String, Value>,
}

impl MissionConfig {
    pub fn threshold(&self, name: &str) -> Option<f64> {
        self.thresholds.get(name).copied()
    }

    pub fn behavior_param(&self, name: &str) -> Option<&Value> {
        self.behavior_params.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> MissionRequest {
        MissionRequest {
            mission_id: "m-001".into(),
            mission_type: "rescue".into(),
            environment_type: "air".into(),
            platform_type: "air".into(),
            mode: "single".into(),
            target_area: (1.0, 2.0, 3.0),
            base_area: (0.0, 0.0, 0.0),
            thresholds: HashMap::new(),
            behavior_params: HashMap::new(),
        }
    }

    #[test]
    fn test_validate_accepts_known_tags() {
        let config = request().validate().unwrap();

        assert_eq!(config.mission_id, "m-001");
        assert_eq!(config.mission_type, MissionType::Rescue);
        assert_eq!(config.environment_type, EnvironmentType::Air);
        assert_eq!(config.platform_type, PlatformType::Air);
        assert_eq!(config.mode, FlightMode::Single);
    }

    #[test]
    fn test_validate_rejects_unknown_mission_type() {
        let mut req = request();
        req.mission_type = "orbital_survey".into();

        let err = req.validate().unwrap_err();
        assert!(matches!(err, DroneError::UnknownMissionType(_)));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_validate_rejects_unknown_environment_and_platform() {
        let mut req = request();
        req.environment_type = "space".into();
        assert!(matches!(
            req.validate().unwrap_err(),
            DroneError::UnknownEnvironmentType(_)
        ));

        let mut req = request();
        req.platform_type = "submarine".into();
        assert!(matches!(
            req.validate().unwrap_err(),
            DroneError::UnknownPlatformType(_)
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_mode_and_empty_id() {
        let mut req = request();
        req.mode = "formation".into();
        assert!(matches!(
            req.validate().unwrap_err(),
            DroneError::UnknownFlightMode(_)
        ));

        let mut req = request();
        req.mission_id = "  ".into();
        assert!(matches!(req.validate().unwrap_err(), DroneError::Config(_)));
    }

    #[test]
    fn test_environment_and_platform_may_differ() {
        let mut req = request();
        req.environment_type = "sea".into();
        req.platform_type = "air".into();

        let config = req.validate().unwrap();
        assert_eq!(config.environment_type, EnvironmentType::Sea);
        assert_eq!(config.platform_type, PlatformType::Air);
    }

    #[test]
    fn test_json_defaults_for_optional_maps() {
        let raw = r#"{
            "mission_id": "m-7",
            "mission_type": "agriculture",
            "environment_type": "surface",
            "platform_type": "surface",
            "mode": "single",
            "target_area": [10.0, 20.0, 0.0],
            "base_area": [0.0, 0.0, 0.0]
        }"#;

        let req = MissionRequest::from_json_str(raw).unwrap();
        assert!(req.thresholds.is_empty());
        assert!(req.behavior_params.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_type_tag_round_trip() {
        for tag in [
            "sea_exploration",
            "agriculture",
            "defects_detection",
            "rescue",
            "pollution_monitoring",
        ] {
            let parsed: MissionType = tag.parse().unwrap();
            assert_eq!(parsed.as_str(), tag);
        }
    }

    #[test]
    fn test_threshold_lookup() {
        let mut req = request();
        req.thresholds.insert("max_wave".into(), 2.5);

        let config = req.validate().unwrap();
        assert_eq!(config.threshold("max_wave"), Some(2.5));
        assert_eq!(config.threshold("max_wind"), None);
    }
}
