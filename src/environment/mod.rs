//! Simulated sensing environments.
//!
//! Each environment owns the event bus it publishes on. Sampling is
//! single-shot: one `start` call produces exactly one reading. Continuous
//! monitoring, if a mission ever needs it, is a matter of calling `start`
//! again; there is no internal timer.

mod air;
mod sea;
mod surface;

pub use air::AirEnvironment;
pub use sea::SeaEnvironment;
pub use surface::SurfaceEnvironment;

use tracing::debug;

use crate::config::EnvironmentType;
use crate::events::{EventBus, Reading};

pub trait Environment: Send + Sync {
    fn environment_type(&self) -> EnvironmentType;

    /// The bus this environment publishes its readings on.
    fn bus(&self) -> &EventBus;

    /// Produce one reading.
    fn sample(&self) -> Reading;

    /// Sample once and publish the result. Every subscriber has finished
    /// reacting by the time this returns.
    fn start(&self) {
        let reading = self.sample();
        debug!(kind = %reading.kind, severity = reading.severity, "Publishing environment reading");
        self.bus().publish(&reading);
    }
}
