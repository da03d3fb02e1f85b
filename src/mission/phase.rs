use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle phase of one mission.
///
/// Wiring a mission performs no side effect; takeoff happens in the
/// explicit transition to `Launched`, and the template sequence runs in
/// `Executing`. `Done` is terminal; missions are not reusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionPhase {
    #[default]
    Wired,
    Launched,
    Executing,
    Done,
}

impl MissionPhase {
    pub fn allowed_transitions(&self) -> &'static [MissionPhase] {
        match self {
            Self::Wired => &[Self::Launched],
            Self::Launched => &[Self::Executing],
            Self::Executing => &[Self::Done],
            Self::Done => &[],
        }
    }

    pub fn can_transition_to(&self, target: MissionPhase) -> bool {
        self.allowed_transitions().contains(&target)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for MissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Wired => "Wired",
            Self::Launched => "Launched",
            Self::Executing => "Executing",
            Self::Done => "Done",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PhaseTransition {
    pub from: MissionPhase,
    pub to: MissionPhase,
    pub at: DateTime<Utc>,
}

impl PhaseTransition {
    pub fn new(from: MissionPhase, to: MissionPhase) -> Self {
        Self {
            from,
            to,
            at: Utc::now(),
        }
    }
}
