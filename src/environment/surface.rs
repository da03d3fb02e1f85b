use rand::Rng;

use super::Environment;
use crate::config::EnvironmentType;
use crate::events::{EventBus, Reading, ReadingKind};

/// Ground or structure-surface environment; readings report the number of
/// cracks detected in the inspected section.
pub struct SurfaceEnvironment {
    bus: EventBus,
}

impl SurfaceEnvironment {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl Environment for SurfaceEnvironment {
    fn environment_type(&self) -> EnvironmentType {
        EnvironmentType::Surface
    }

    fn bus(&self) -> &EventBus {
        &self.bus
    }

    fn sample(&self) -> Reading {
        let count: u32 = rand::thread_rng().gen_range(0..=5);
        Reading::new(ReadingKind::Crack).with_measurement("count", f64::from(count))
    }
}
