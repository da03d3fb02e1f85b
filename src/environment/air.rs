use rand::Rng;

use super::Environment;
use crate::config::EnvironmentType;
use crate::events::{EventBus, Reading, ReadingKind};

/// Open-air environment; readings report wind speed in m/s.
pub struct AirEnvironment {
    bus: EventBus,
}

impl AirEnvironment {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl Environment for AirEnvironment {
    fn environment_type(&self) -> EnvironmentType {
        EnvironmentType::Air
    }

    fn bus(&self) -> &EventBus {
        &self.bus
    }

    fn sample(&self) -> Reading {
        let speed = rand::thread_rng().gen_range(0.0..=20.0);
        Reading::new(ReadingKind::Wind).with_measurement("speed", speed)
    }
}
