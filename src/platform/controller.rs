use super::MovementImplementor;
use crate::config::{Coord, FlightMode};

/// Thin orchestration layer over one platform implementor.
///
/// Missions speak in intents (`goto`, `adjust_course`, mode changes); the
/// controller forwards them to whatever platform it wraps. Launch, landing
/// and position-hold commands go through [`MotionController::implementor`]
/// directly, since they are platform commands rather than navigation
/// intents.
pub struct MotionController {
    implementor: Box<dyn MovementImplementor>,
}

impl MotionController {
    pub fn new(implementor: Box<dyn MovementImplementor>) -> Self {
        Self { implementor }
    }

    pub fn goto(&self, coord: Coord) {
        self.implementor.move_to(coord);
    }

    pub fn adjust_course(&self, vector: Coord) {
        self.implementor.adjust_course(vector);
    }

    pub fn set_swarm(&self) {
        self.implementor.set_mode(FlightMode::Swarm);
    }

    pub fn set_single(&self) {
        self.implementor.set_mode(FlightMode::Single);
    }

    pub fn implementor(&self) -> &dyn MovementImplementor {
        self.implementor.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlatformType;
    use crate::platform::AirPlatform;
    use crate::telemetry::{FlightRecorder, MovementCommand};

    #[test]
    fn test_intents_map_to_implementor_commands() {
        let recorder = FlightRecorder::new();
        let controller = MotionController::new(Box::new(AirPlatform::new(recorder.clone())));

        controller.goto((1.0, 2.0, 3.0));
        controller.adjust_course((0.0, 0.0, 1.0));
        controller.set_swarm();
        controller.set_single();

        assert_eq!(
            recorder.commands(),
            vec![
                MovementCommand::MoveTo((1.0, 2.0, 3.0)),
                MovementCommand::AdjustCourse((0.0, 0.0, 1.0)),
                MovementCommand::SetMode(FlightMode::Swarm),
                MovementCommand::SetMode(FlightMode::Single),
            ]
        );
        assert!(recorder.records().iter().all(|r| r.platform == PlatformType::Air));
    }

    #[test]
    fn test_implementor_access_for_platform_commands() {
        let recorder = FlightRecorder::new();
        let controller = MotionController::new(Box::new(AirPlatform::new(recorder.clone())));

        controller.implementor().takeoff();
        controller.implementor().hold_position();
        controller.implementor().land();

        assert_eq!(
            recorder.commands(),
            vec![
                MovementCommand::Takeoff,
                MovementCommand::HoldPosition,
                MovementCommand::Land,
            ]
        );
    }
}
