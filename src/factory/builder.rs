use std::sync::Arc;

use crate::config::{EnvironmentType, MissionConfig, MissionType, PlatformType};
use crate::environment::{AirEnvironment, Environment, SeaEnvironment, SurfaceEnvironment};
use crate::events::EventBus;
use crate::failsafe::{self, FailSafeHandler};
use crate::mission::{
    AgricultureMission, DefectsDetectionMission, DroneMission, MissionContext, MissionCore,
    PollutionMonitoringMission, RescueMission, SeaExplorationMission,
};
use crate::platform::{AirPlatform, MotionController, MovementImplementor, SeaPlatform, SurfacePlatform};
use crate::strategy::{CrackReaction, ReactionStrategy, WaveReaction, WindReaction};
use crate::telemetry::FlightRecorder;

/// Wires one mission from a validated configuration.
///
/// Every slot can be overridden before `build`; unset slots fall back to
/// the registry defaults keyed by the config's type fields. Wiring performs
/// no movement side effect: the returned mission is in the `Wired` phase
/// and must be launched explicitly.
pub struct MissionBuilder {
    config: MissionConfig,
    recorder: Option<FlightRecorder>,
    environment: Option<Box<dyn Environment>>,
    platform: Option<Box<dyn MovementImplementor>>,
    strategy: Option<Arc<dyn ReactionStrategy>>,
    chain: Option<Arc<dyn FailSafeHandler>>,
}

impl MissionBuilder {
    pub fn new(config: MissionConfig) -> Self {
        Self {
            config,
            recorder: None,
            environment: None,
            platform: None,
            strategy: None,
            chain: None,
        }
    }

    pub fn with_recorder(mut self, recorder: FlightRecorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn with_environment(mut self, environment: Box<dyn Environment>) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn with_platform(mut self, platform: Box<dyn MovementImplementor>) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn with_strategy(mut self, strategy: Arc<dyn ReactionStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn with_chain(mut self, chain: Arc<dyn FailSafeHandler>) -> Self {
        self.chain = Some(chain);
        self
    }

    pub fn build(self) -> Box<dyn DroneMission> {
        let mission_type = self.config.mission_type;
        let environment_type = self.config.environment_type;
        let platform_type = self.config.platform_type;

        let recorder = self.recorder.unwrap_or_default();
        let environment = self
            .environment
            .unwrap_or_else(|| default_environment(environment_type));
        let platform = self
            .platform
            .unwrap_or_else(|| default_platform(platform_type, recorder.clone()));
        let strategy = self
            .strategy
            .unwrap_or_else(|| default_strategy(environment_type));
        let chain = self.chain.unwrap_or_else(failsafe::standard_chain);

        let controller = MotionController::new(platform);
        let context = Arc::new(MissionContext::new(
            self.config,
            controller,
            strategy,
            chain,
            recorder,
        ));
        let core = MissionCore::new(context, environment);

        match mission_type {
            MissionType::SeaExploration => Box::new(SeaExplorationMission::new(core)),
            MissionType::Agriculture => Box::new(AgricultureMission::new(core)),
            MissionType::DefectsDetection => Box::new(DefectsDetectionMission::new(core)),
            MissionType::Rescue => Box::new(RescueMission::new(core)),
            MissionType::PollutionMonitoring => Box::new(PollutionMonitoringMission::new(core)),
        }
    }
}

fn default_environment(kind: EnvironmentType) -> Box<dyn Environment> {
    let bus = EventBus::new();
    match kind {
        EnvironmentType::Air => Box::new(AirEnvironment::new(bus)),
        EnvironmentType::Sea => Box::new(SeaEnvironment::new(bus)),
        EnvironmentType::Surface => Box::new(SurfaceEnvironment::new(bus)),
    }
}

fn default_platform(kind: PlatformType, recorder: FlightRecorder) -> Box<dyn MovementImplementor> {
    match kind {
        PlatformType::Air => Box::new(AirPlatform::new(recorder)),
        PlatformType::Sea => Box::new(SeaPlatform::new(recorder)),
        PlatformType::Surface => Box::new(SurfacePlatform::new(recorder)),
    }
}

fn default_strategy(kind: EnvironmentType) -> Arc<dyn ReactionStrategy> {
    match kind {
        EnvironmentType::Air => Arc::new(WindReaction),
        EnvironmentType::Sea => Arc::new(WaveReaction),
        EnvironmentType::Surface => Arc::new(CrackReaction),
    }
}
