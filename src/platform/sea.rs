use tracing::debug;

use super::MovementImplementor;
use crate::config::{Coord, FlightMode, PlatformType};
use crate::telemetry::{FlightRecorder, MovementCommand};

/// Surface vessel or submersible platform. "Takeoff" and "land" map to
/// engine start and stop; holding position drops anchor.
pub struct SeaPlatform {
    recorder: FlightRecorder,
}

impl SeaPlatform {
    pub fn new(recorder: FlightRecorder) -> Self {
        Self { recorder }
    }
}

impl MovementImplementor for SeaPlatform {
    fn takeoff(&self) {
        debug!("Sea platform starting engines");
        self.recorder.record(PlatformType::Sea, MovementCommand::Takeoff);
    }

    fn land(&self) {
        debug!("Sea platform stopping engines");
        self.recorder.record(PlatformType::Sea, MovementCommand::Land);
    }

    fn move_to(&self, coord: Coord) {
        debug!(x = coord.0, y = coord.1, z = coord.2, "Sea platform sailing to coordinate");
        self.recorder
            .record(PlatformType::Sea, MovementCommand::MoveTo(coord));
    }

    fn adjust_course(&self, vector: Coord) {
        debug!(dx = vector.0, dy = vector.1, dz = vector.2, "Sea platform adjusting course");
        self.recorder
            .record(PlatformType::Sea, MovementCommand::AdjustCourse(vector));
    }

    fn hold_position(&self) {
        debug!("Sea platform dropping anchor");
        self.recorder
            .record(PlatformType::Sea, MovementCommand::HoldPosition);
    }

    fn set_mode(&self, mode: FlightMode) {
        debug!(%mode, "Sea platform switching mode");
        self.recorder
            .record(PlatformType::Sea, MovementCommand::SetMode(mode));
    }

    fn broadcast(&self, message: &str) {
        debug!(text = message, "Sea platform broadcasting");
        self.recorder
            .record(PlatformType::Sea, MovementCommand::Broadcast(message.to_string()));
    }
}
