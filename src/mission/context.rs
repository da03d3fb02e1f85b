use std::sync::Arc;

use tracing::info;

use crate::config::MissionConfig;
use crate::events::{Issue, IssueKind, Reading};
use crate::failsafe::FailSafeHandler;
use crate::platform::MotionController;
use crate::strategy::ReactionStrategy;
use crate::telemetry::FlightRecorder;

/// Shared, immutable wiring of one mission: configuration, motion control,
/// the bound reaction strategy and the fail-safe chain head.
///
/// Reaction and escalation run against this context rather than the mission
/// object itself, so bus subscribers can hold an `Arc` of it while the
/// mission template drives the lifecycle. Strategy and chain are stateless;
/// sharing them is safe by construction.
pub struct MissionContext {
    config: MissionConfig,
    controller: MotionController,
    strategy: Arc<dyn ReactionStrategy>,
    chain: Arc<dyn FailSafeHandler>,
    recorder: FlightRecorder,
}

impl MissionContext {
    pub fn new(
        config: MissionConfig,
        controller: MotionController,
        strategy: Arc<dyn ReactionStrategy>,
        chain: Arc<dyn FailSafeHandler>,
        recorder: FlightRecorder,
    ) -> Self {
        Self {
            config,
            controller,
            strategy,
            chain,
            recorder,
        }
    }

    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    pub fn controller(&self) -> &MotionController {
        &self.controller
    }

    pub fn strategy(&self) -> &Arc<dyn ReactionStrategy> {
        &self.strategy
    }

    pub fn recorder(&self) -> &FlightRecorder {
        &self.recorder
    }

    /// Wrap a violated reading into an issue and hand it to the fail-safe
    /// chain. Returns whether any handler resolved it; an unhandled issue is
    /// absorbed and the mission carries on.
    pub fn request_fail_safe(&self, kind: IssueKind, reading: Reading) -> bool {
        info!(
            mission_id = %self.config.mission_id,
            issue = %kind,
            "Fail-safe requested"
        );
        self.chain.handle(self, &Issue::new(kind, reading))
    }
}
