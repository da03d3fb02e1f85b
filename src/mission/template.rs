use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::context::MissionContext;
use super::phase::{MissionPhase, PhaseTransition};
use crate::config::{MissionConfig, MissionType};
use crate::environment::Environment;
use crate::error::{DroneError, Result};

/// State every mission variant carries: the shared context, the owned
/// environment (which owns the bus), and the phase machine.
pub struct MissionCore {
    context: Arc<MissionContext>,
    environment: Box<dyn Environment>,
    phase: MissionPhase,
    history: Vec<PhaseTransition>,
}

impl MissionCore {
    pub fn new(context: Arc<MissionContext>, environment: Box<dyn Environment>) -> Self {
        Self {
            context,
            environment,
            phase: MissionPhase::Wired,
            history: Vec::new(),
        }
    }

    pub fn context(&self) -> &Arc<MissionContext> {
        &self.context
    }

    pub fn config(&self) -> &MissionConfig {
        self.context.config()
    }

    pub fn environment(&self) -> &dyn Environment {
        self.environment.as_ref()
    }

    pub fn phase(&self) -> MissionPhase {
        self.phase
    }

    pub fn history(&self) -> &[PhaseTransition] {
        &self.history
    }

    pub fn transition_to(&mut self, to: MissionPhase) -> Result<()> {
        if !self.phase.can_transition_to(to) {
            return Err(DroneError::InvalidPhase {
                from: self.phase.to_string(),
                to: to.to_string(),
                allowed: self
                    .phase
                    .allowed_transitions()
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }

        debug!(
            mission_id = %self.config().mission_id,
            from = %self.phase,
            to = %to,
            "Mission phase transition"
        );
        self.history.push(PhaseTransition::new(self.phase, to));
        self.phase = to;
        Ok(())
    }
}

/// Outcome of a completed mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissionStatus {
    Done,
}

impl std::fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done => write!(f, "DONE"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MissionReport {
    pub mission_id: String,
    pub status: MissionStatus,
    pub completed_at: DateTime<Utc>,
}

impl MissionReport {
    pub fn done(mission_id: impl Into<String>) -> Self {
        Self {
            mission_id: mission_id.into(),
            status: MissionStatus::Done,
            completed_at: Utc::now(),
        }
    }
}

/// Template method over one mission's lifecycle.
///
/// `launch` and `execute_mission` are the fixed algorithm; the numbered
/// steps in between are hooks. Every step has a no-op (or standard)
/// default except [`DroneMission::perform_payload_action`], which each
/// mission type must provide.
pub trait DroneMission: Send {
    fn mission_type(&self) -> MissionType;

    fn core(&self) -> &MissionCore;

    fn core_mut(&mut self) -> &mut MissionCore;

    /// The mission-specific work performed over the target area.
    fn perform_payload_action(&mut self);

    /// Take off and navigate to the target area. Must be called exactly
    /// once, before `execute_mission`.
    fn launch(&mut self) -> Result<()> {
        self.core_mut().transition_to(MissionPhase::Launched)?;

        let core = self.core();
        info!(
            mission_id = %core.config().mission_id,
            mission_type = %core.config().mission_type,
            "Launching mission"
        );
        let ctx = core.context();
        ctx.controller().implementor().takeoff();
        ctx.controller().goto(ctx.config().target_area);
        Ok(())
    }

    /// Drive the lifecycle from the target area back to base.
    ///
    /// The environment publishes inside `analyze_environment`, so any
    /// reaction and fail-safe escalation has completed before the payload
    /// step runs.
    fn execute_mission(&mut self) -> Result<MissionReport> {
        self.core_mut().transition_to(MissionPhase::Executing)?;

        self.load_config();
        self.setup_event_subscriptions();
        self.analyze_environment();
        self.perform_payload_action();
        self.collect_and_store_data();
        self.return_to_base();
        self.postprocess_results();

        self.core_mut().transition_to(MissionPhase::Done)?;
        let mission_id = self.core().config().mission_id.clone();
        info!(mission_id = %mission_id, "Mission complete");
        Ok(MissionReport::done(mission_id))
    }

    /// Pull mission parameters out of `behavior_params`.
    fn load_config(&mut self) {}

    /// Wire reaction logic to the environment bus. The default subscribes
    /// the bound strategy.
    fn setup_event_subscriptions(&mut self) {
        let ctx = Arc::clone(self.core().context());
        self.core().environment().bus().subscribe(move |reading| {
            ctx.strategy().react(&ctx, reading);
            Ok(())
        });
    }

    /// Sample the environment once; blocks until every subscriber has
    /// reacted to the published reading.
    fn analyze_environment(&mut self) {
        self.core().environment().start();
    }

    fn collect_and_store_data(&mut self) {}

    /// Navigate home and land. Unconditional: the landing is issued even if
    /// a fail-safe handler already landed the vehicle.
    fn return_to_base(&mut self) {
        let ctx = self.core().context();
        ctx.controller().goto(ctx.config().base_area);
        ctx.controller().implementor().land();
    }

    fn postprocess_results(&mut self) {}
}

impl std::fmt::Debug for dyn DroneMission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DroneMission")
            .field("mission_type", &self.mission_type())
            .finish()
    }
}
