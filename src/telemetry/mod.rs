//! Structured trace of movement commands.
//!
//! Platform implementors are fire-and-forget: their only observable effect
//! is the command trace. The recorder is the structured side of that trace
//! (the `tracing` lines are the human-readable side); collaborators decide
//! how, or whether, to render it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;

use crate::config::{Coord, FlightMode, PlatformType};

/// One movement command as received by a platform implementor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementCommand {
    Takeoff,
    Land,
    MoveTo(Coord),
    AdjustCourse(Coord),
    HoldPosition,
    SetMode(FlightMode),
    Broadcast(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandRecord {
    pub platform: PlatformType,
    pub command: MovementCommand,
    pub at: DateTime<Utc>,
}

/// Shared, append-only log of commands issued during one mission.
///
/// Cheap to clone; all clones append to the same log.
#[derive(Clone, Default)]
pub struct FlightRecorder {
    records: Arc<Mutex<Vec<CommandRecord>>>,
}

impl FlightRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, platform: PlatformType, command: MovementCommand) {
        self.records.lock().push(CommandRecord {
            platform,
            command,
            at: Utc::now(),
        });
    }

    /// Snapshot of the commands issued so far, in issue order.
    pub fn commands(&self) -> Vec<MovementCommand> {
        self.records
            .lock()
            .iter()
            .map(|r| r.command.clone())
            .collect()
    }

    /// Full snapshot including platform and timestamp.
    pub fn records(&self) -> Vec<CommandRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}
