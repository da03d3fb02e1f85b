pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod events;
pub mod factory;
pub mod failsafe;
pub mod mission;
pub mod platform;
pub mod runner;
pub mod strategy;
pub mod telemetry;

pub use config::{
    Coord, EnvironmentType, FlightMode, MissionConfig, MissionRequest, MissionType, PlatformType,
};
pub use environment::Environment;
pub use error::{DroneError, Result};
pub use events::{EventBus, Issue, IssueKind, Reading, ReadingKind, SubscriberId};
pub use factory::{MissionBuilder, MissionFactory};
pub use failsafe::FailSafeHandler;
pub use mission::{
    DroneMission, MissionContext, MissionCore, MissionPhase, MissionReport, MissionStatus,
    PhaseTransition,
};
pub use platform::{MotionController, MovementImplementor};
pub use runner::MissionRunner;
pub use strategy::ReactionStrategy;
pub use telemetry::{CommandRecord, FlightRecorder, MovementCommand};
