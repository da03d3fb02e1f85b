//! Fail-safe escalation chain (chain of responsibility).
//!
//! Handlers are linked in order of increasing disruption: try a reroute
//! first, climb next, put the vehicle down only as a last resort. The first
//! handler that recognizes an issue's kind resolves it and stops the chain.
//! An issue no handler recognizes falls off the end and is absorbed; the
//! mission continues (best-effort policy).

mod adjust_altitude;
mod emergency_land;
mod reroute;
mod swarm_reassign;

pub use adjust_altitude::AdjustAltitudeHandler;
pub use emergency_land::EmergencyLandHandler;
pub use reroute::ReRouteHandler;
pub use swarm_reassign::SwarmReassignHandler;

use std::sync::Arc;

use tracing::debug;

use crate::events::Issue;
use crate::mission::MissionContext;

pub trait FailSafeHandler: Send + Sync {
    /// Resolve the issue or pass it along. Returns true once some handler
    /// has taken a remedial action.
    fn handle(&self, mission: &MissionContext, issue: &Issue) -> bool;
}

/// The production escalation order: ReRoute -> AdjustAltitude ->
/// EmergencyLand. Handlers are stateless, so one chain may be shared
/// across missions.
pub fn standard_chain() -> Arc<dyn FailSafeHandler> {
    Arc::new(ReRouteHandler::new(Some(Arc::new(
        AdjustAltitudeHandler::new(Some(Arc::new(EmergencyLandHandler::new(None)))),
    ))))
}

/// Terminal no-op behavior shared by every handler: forward when a next
/// link exists, otherwise absorb the issue.
pub(crate) fn forward(
    next: &Option<Arc<dyn FailSafeHandler>>,
    mission: &MissionContext,
    issue: &Issue,
) -> bool {
    match next {
        Some(handler) => handler.handle(mission, issue),
        None => {
            debug!(issue = %issue.kind, "No handler for fail-safe issue; absorbing");
            false
        }
    }
}
