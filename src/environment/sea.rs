use rand::Rng;

use super::Environment;
use crate::config::EnvironmentType;
use crate::events::{EventBus, Reading, ReadingKind};

/// Open-water environment; readings report wave height in meters.
pub struct SeaEnvironment {
    bus: EventBus,
}

impl SeaEnvironment {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }
}

impl Environment for SeaEnvironment {
    fn environment_type(&self) -> EnvironmentType {
        EnvironmentType::Sea
    }

    fn bus(&self) -> &EventBus {
        &self.bus
    }

    fn sample(&self) -> Reading {
        let height = rand::thread_rng().gen_range(0.0..=3.0);
        Reading::new(ReadingKind::Wave).with_measurement("height", height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_produces_wave_reading_in_range() {
        let env = SeaEnvironment::new(EventBus::new());

        for _ in 0..50 {
            let reading = env.sample();
            assert_eq!(reading.kind, ReadingKind::Wave);
            let height = reading.measurement("height").unwrap();
            assert!((0.0..=3.0).contains(&height));
        }
    }

    #[test]
    fn test_start_publishes_exactly_once() {
        let env = SeaEnvironment::new(EventBus::new());
        let count = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));

        let counter = std::sync::Arc::clone(&count);
        env.bus().subscribe(move |_| {
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(())
        });

        env.start();
        assert_eq!(count.load(std::sync::atomic::Ordering::SeqCst), 1);
    }
}
