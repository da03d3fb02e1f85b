use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Physical quantity a reading describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingKind {
    Wind,
    Wave,
    Crack,
}

impl ReadingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wind => "wind",
            Self::Wave => "wave",
            Self::Crack => "crack",
        }
    }
}

impl std::fmt::Display for ReadingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One sampled environmental measurement. Immutable once published on the
/// bus; subscribers receive it by reference and clone what they keep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub kind: ReadingKind,
    pub data: HashMap<String, f64>,
    #[serde(default = "default_severity")]
    pub severity: u32,
}

fn default_severity() -> u32 {
    1
}

impl Reading {
    pub fn new(kind: ReadingKind) -> Self {
        Self {
            kind,
            data: HashMap::new(),
            severity: default_severity(),
        }
    }

    pub fn with_measurement(mut self, name: impl Into<String>, value: f64) -> Self {
        self.data.insert(name.into(), value);
        self
    }

    pub fn with_severity(mut self, severity: u32) -> Self {
        self.severity = severity.max(1);
        self
    }

    pub fn measurement(&self, name: &str) -> Option<f64> {
        self.data.get(name).copied()
    }
}

/// Fail-safe action a reaction strategy requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Reroute,
    AdjustAltitude,
    Emergency,
    Swarm,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reroute => "reroute",
            Self::AdjustAltitude => "adjust_altitude",
            Self::Emergency => "emergency",
            Self::Swarm => "swarm",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raised anomaly, carrying the reading that triggered it. Created by a
/// reaction strategy and consumed exactly once by the fail-safe chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub reading: Reading,
}

impl Issue {
    pub fn new(kind: IssueKind, reading: Reading) -> Self {
        Self { kind, reading }
    }
}
