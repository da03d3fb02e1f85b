use tracing::warn;

use super::ReactionStrategy;
use crate::events::{IssueKind, Reading};
use crate::mission::MissionContext;

/// Wave height (m) used when the mission does not configure `max_wave`.
pub const DEFAULT_MAX_WAVE: f64 = 2.0;

/// Raises a reroute when wave height exceeds the mission's `max_wave`
/// threshold.
pub struct WaveReaction;

impl ReactionStrategy for WaveReaction {
    fn react(&self, mission: &MissionContext, reading: &Reading) -> bool {
        let Some(height) = reading.measurement("height") else {
            return false;
        };

        let max_wave = mission
            .config()
            .threshold("max_wave")
            .unwrap_or(DEFAULT_MAX_WAVE);
        if height > max_wave {
            warn!(height, limit = max_wave, "Wave height limit exceeded");
            mission.request_fail_safe(IssueKind::Reroute, reading.clone());
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use super::*;
    use crate::events::ReadingKind;
    use crate::strategy::testutil;
    use crate::telemetry::MovementCommand;

    fn wave(height: f64) -> Reading {
        Reading::new(ReadingKind::Wave).with_measurement("height", height)
    }

    #[test]
    fn test_high_wave_requests_reroute() {
        let (ctx, recorder) = testutil::context(Arc::new(WaveReaction), HashMap::new());

        assert!(WaveReaction.react(&ctx, &wave(2.1)));
        assert_eq!(recorder.commands(), vec![MovementCommand::HoldPosition]);
    }

    #[test]
    fn test_configured_threshold_overrides_default() {
        let thresholds = HashMap::from([("max_wave".to_string(), 4.0)]);
        let (ctx, recorder) = testutil::context(Arc::new(WaveReaction), thresholds);

        assert!(!WaveReaction.react(&ctx, &wave(3.0)));
        assert!(recorder.is_empty());

        assert!(WaveReaction.react(&ctx, &wave(5.0)));
        assert_eq!(recorder.commands(), vec![MovementCommand::HoldPosition]);
    }

    #[test]
    fn test_calm_sea_is_ignored() {
        let (ctx, recorder) = testutil::context(Arc::new(WaveReaction), HashMap::new());

        assert!(!WaveReaction.react(&ctx, &wave(2.0)));
        assert!(recorder.is_empty());
    }
}
