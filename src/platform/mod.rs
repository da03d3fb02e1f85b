//! Movement bridge: platform implementors and the motion controller.
//!
//! The controller speaks mission-level intents; an implementor turns them
//! into platform commands. All commands are fire-and-forget (no return
//! value, no error channel), so a mission type is never coupled to what a
//! concrete platform does with them.

mod air;
mod controller;
mod sea;
mod surface;

pub use air::AirPlatform;
pub use controller::MotionController;
pub use sea::SeaPlatform;
pub use surface::SurfacePlatform;

use crate::config::{Coord, FlightMode};

/// Capability surface of a physical or simulated platform.
pub trait MovementImplementor: Send + Sync {
    fn takeoff(&self);
    fn land(&self);
    fn move_to(&self, coord: Coord);
    fn adjust_course(&self, vector: Coord);
    fn hold_position(&self);
    fn set_mode(&self, mode: FlightMode);
    fn broadcast(&self, message: &str);
}
