use tracing::debug;

use super::MovementImplementor;
use crate::config::{Coord, FlightMode, PlatformType};
use crate::telemetry::{FlightRecorder, MovementCommand};

/// Rotor or fixed-wing aerial platform.
pub struct AirPlatform {
    recorder: FlightRecorder,
}

impl AirPlatform {
    pub fn new(recorder: FlightRecorder) -> Self {
        Self { recorder }
    }
}

impl MovementImplementor for AirPlatform {
    fn takeoff(&self) {
        debug!("Air platform taking off");
        self.recorder.record(PlatformType::Air, MovementCommand::Takeoff);
    }

    fn land(&self) {
        debug!("Air platform landing");
        self.recorder.record(PlatformType::Air, MovementCommand::Land);
    }

    fn move_to(&self, coord: Coord) {
        debug!(x = coord.0, y = coord.1, z = coord.2, "Air platform flying to coordinate");
        self.recorder
            .record(PlatformType::Air, MovementCommand::MoveTo(coord));
    }

    fn adjust_course(&self, vector: Coord) {
        debug!(dx = vector.0, dy = vector.1, dz = vector.2, "Air platform adjusting course");
        self.recorder
            .record(PlatformType::Air, MovementCommand::AdjustCourse(vector));
    }

    fn hold_position(&self) {
        debug!("Air platform hovering");
        self.recorder
            .record(PlatformType::Air, MovementCommand::HoldPosition);
    }

    fn set_mode(&self, mode: FlightMode) {
        debug!(%mode, "Air platform switching mode");
        self.recorder
            .record(PlatformType::Air, MovementCommand::SetMode(mode));
    }

    fn broadcast(&self, message: &str) {
        debug!(text = message, "Air platform broadcasting");
        self.recorder
            .record(PlatformType::Air, MovementCommand::Broadcast(message.to_string()));
    }
}
