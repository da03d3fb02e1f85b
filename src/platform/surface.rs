use tracing::debug;

use super::MovementImplementor;
use crate::config::{Coord, FlightMode, PlatformType};
use crate::telemetry::{FlightRecorder, MovementCommand};

/// Wheeled or tracked ground platform.
pub struct SurfacePlatform {
    recorder: FlightRecorder,
}

impl SurfacePlatform {
    pub fn new(recorder: FlightRecorder) -> Self {
        Self { recorder }
    }
}

impl MovementImplementor for SurfacePlatform {
    fn takeoff(&self) {
        debug!("Surface platform starting");
        self.recorder
            .record(PlatformType::Surface, MovementCommand::Takeoff);
    }

    fn land(&self) {
        debug!("Surface platform stopping");
        self.recorder
            .record(PlatformType::Surface, MovementCommand::Land);
    }

    fn move_to(&self, coord: Coord) {
        debug!(x = coord.0, y = coord.1, z = coord.2, "Surface platform driving to coordinate");
        self.recorder
            .record(PlatformType::Surface, MovementCommand::MoveTo(coord));
    }

    fn adjust_course(&self, vector: Coord) {
        debug!(dx = vector.0, dy = vector.1, dz = vector.2, "Surface platform adjusting course");
        self.recorder
            .record(PlatformType::Surface, MovementCommand::AdjustCourse(vector));
    }

    fn hold_position(&self) {
        debug!("Surface platform idling");
        self.recorder
            .record(PlatformType::Surface, MovementCommand::HoldPosition);
    }

    fn set_mode(&self, mode: FlightMode) {
        debug!(%mode, "Surface platform switching mode");
        self.recorder
            .record(PlatformType::Surface, MovementCommand::SetMode(mode));
    }

    fn broadcast(&self, message: &str) {
        debug!(text = message, "Surface platform broadcasting");
        self.recorder.record(
            PlatformType::Surface,
            MovementCommand::Broadcast(message.to_string()),
        );
    }
}
