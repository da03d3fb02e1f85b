//! Mission lifecycle: the template method, its shared context, the phase
//! machine, and the concrete mission variants.

mod agriculture;
mod context;
mod defects_detection;
mod phase;
mod pollution_monitoring;
mod rescue;
mod sea_exploration;
mod template;

pub use agriculture::AgricultureMission;
pub use context::MissionContext;
pub use defects_detection::DefectsDetectionMission;
pub use phase::{MissionPhase, PhaseTransition};
pub use pollution_monitoring::PollutionMonitoringMission;
pub use rescue::RescueMission;
pub use sea_exploration::SeaExplorationMission;
pub use template::{DroneMission, MissionCore, MissionReport, MissionStatus};
