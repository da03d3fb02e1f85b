use thiserror::Error;

#[derive(Error, Debug)]
pub enum DroneError {
    #[error("Unknown mission type: {0}")]
    UnknownMissionType(String),

    #[error("Unknown environment type: {0}")]
    UnknownEnvironmentType(String),

    #[error("Unknown platform type: {0}")]
    UnknownPlatformType(String),

    #[error("Unknown flight mode: {0}")]
    UnknownFlightMode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid mission phase transition: {from} -> {to} (allowed: {allowed})")]
    InvalidPhase {
        from: String,
        to: String,
        allowed: String,
    },

    #[error("Subscriber error: {0}")]
    Subscriber(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DroneError {
    /// True for rejections of the mission request record itself. These are
    /// raised before any component is wired, so no movement side effect has
    /// occurred when one surfaces.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownMissionType(_)
                | Self::UnknownEnvironmentType(_)
                | Self::UnknownPlatformType(_)
                | Self::UnknownFlightMode(_)
                | Self::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DroneError>;
