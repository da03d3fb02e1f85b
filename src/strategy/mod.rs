//! Reaction strategies: inspect a published reading against mission
//! thresholds and raise a fail-safe issue on violation.
//!
//! Exactly one strategy is bound per mission, matching its environment
//! type. Strategies hold no per-mission state and are shared as `Arc`s.

mod crack;
mod wave;
mod wind;

pub use crack::{CrackReaction, MAX_CRACK_COUNT};
pub use wave::{DEFAULT_MAX_WAVE, WaveReaction};
pub use wind::{MAX_WIND_SPEED, WindReaction};

use crate::events::Reading;
use crate::mission::MissionContext;

pub trait ReactionStrategy: Send + Sync {
    /// Inspect one reading. On a threshold violation, request the matching
    /// fail-safe through the mission and return true; otherwise return
    /// false without side effects.
    fn react(&self, mission: &MissionContext, reading: &Reading) -> bool;
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::collections::HashMap;
    use std::sync::Arc;

    use super::ReactionStrategy;
    use crate::config::{MissionConfig, MissionRequest};
    use crate::failsafe;
    use crate::mission::MissionContext;
    use crate::platform::{AirPlatform, MotionController};
    use crate::telemetry::FlightRecorder;

    pub fn config_with_thresholds(thresholds: HashMap<String, f64>) -> MissionConfig {
        MissionRequest {
            mission_id: "strategy-test".into(),
            mission_type: "rescue".into(),
            environment_type: "air".into(),
            platform_type: "air".into(),
            mode: "single".into(),
            target_area: (1.0, 1.0, 1.0),
            base_area: (0.0, 0.0, 0.0),
            thresholds,
            behavior_params: HashMap::new(),
        }
        .validate()
        .unwrap()
    }

    /// Context wired to an air platform and the standard chain, with the
    /// recorder exposed so tests can assert on remedial commands.
    pub fn context(
        strategy: Arc<dyn ReactionStrategy>,
        thresholds: HashMap<String, f64>,
    ) -> (Arc<MissionContext>, FlightRecorder) {
        let recorder = FlightRecorder::new();
        let controller = MotionController::new(Box::new(AirPlatform::new(recorder.clone())));
        let context = MissionContext::new(
            config_with_thresholds(thresholds),
            controller,
            strategy,
            failsafe::standard_chain(),
            recorder.clone(),
        );
        (Arc::new(context), recorder)
    }
}
