use tracing::warn;

use super::ReactionStrategy;
use crate::events::{IssueKind, Reading};
use crate::mission::MissionContext;

/// Wind speed (m/s) above which flight is considered unsafe at the current
/// altitude.
pub const MAX_WIND_SPEED: f64 = 15.0;

/// Raises an altitude adjustment when wind speed exceeds the fixed limit.
pub struct WindReaction;

impl ReactionStrategy for WindReaction {
    fn react(&self, mission: &MissionContext, reading: &Reading) -> bool {
        let Some(speed) = reading.measurement("speed") else {
            return false;
        };

        if speed > MAX_WIND_SPEED {
            warn!(speed, limit = MAX_WIND_SPEED, "Wind speed limit exceeded");
            mission.request_fail_safe(IssueKind::AdjustAltitude, reading.clone());
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

    fn wind(speed: f64) -> Reading {
        Reading::new(ReadingKind::Wind).with_measurement("speed", speed)
    }

    #[test]
    fn test_strong_wind_requests_altitude_adjustment() {
        let (ctx, recorder) = testutil::context(Arc::new(WindReaction), HashMap::new());

        assert!(WindReaction.react(&ctx, &wind(15.1)));
        assert_eq!(
            recorder.commands(),
            vec![MovementCommand::AdjustCourse((0.0, 0.0, 1.0))]
        );
    }

    #[test]
    fn test_calm_wind_is_ignored() {
        let (ctx, recorder) = testutil::context(Arc::new(WindReaction), HashMap::new());

        assert!(!WindReaction.react(&ctx, &wind(15.0)));
        assert!(!WindReaction.react(&ctx, &wind(0.0)));
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_missing_measurement_is_ignored() {
        let (ctx, recorder) = testutil::context(Arc::new(WindReaction), HashMap::new());
        let reading = Reading::new(ReadingKind::Wind);

        assert!(!WindReaction.react(&ctx, &reading));
        assert!(recorder.is_empty());
    }
}
