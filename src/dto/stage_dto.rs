use crate::models::stage::StageStatus;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Wire shape of a pipeline update, shared with the persistence backend:
/// `{stage, status, note?}`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StageUpdateRequest {
    #[validate(length(min = 1))]
    pub stage: String,
    pub status: StageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl StageUpdateRequest {
    pub fn new(stage: impl Into<String>, status: StageStatus) -> Self {
        Self {
            stage: stage.into(),
            status,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
