use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a stage in the pipeline lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Start,
    Active,
    TerminalSuccess,
    TerminalFailure,
}

/// A named step of the fixed hiring pipeline, immutable after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ordinal: usize,
    pub kind: StageKind,
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.kind,
            StageKind::TerminalSuccess | StageKind::TerminalFailure
        )
    }
}

/// Fine-grained outcome of a candidate within a single stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageStatus {
    Pending,
    Cleared,
    Rejected,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StageStatus::Pending => "Pending",
            StageStatus::Cleared => "Cleared",
            StageStatus::Rejected => "Rejected",
            StageStatus::OnHold => "On Hold",
        };
        f.write_str(s)
    }
}
