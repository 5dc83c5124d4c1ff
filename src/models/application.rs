use crate::models::interview::Interview;
use crate::models::stage::{Stage, StageKind, StageStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Coarse overall status of an application. Always derived from the current
/// stage and stage status, never set directly except through the deprecated
/// legacy override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    New,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    /// Maps fine-grained pipeline state to the coarse status.
    ///
    /// Precedence: the success-terminal stage always means `Hired`, even when
    /// the stage status is `Rejected`. Outside of that, a `Rejected` stage
    /// status wins over any stage-based classification.
    pub fn derive(stage: &Stage, stage_status: StageStatus) -> Self {
        match stage.kind {
            StageKind::TerminalSuccess => ApplicationStatus::Hired,
            StageKind::TerminalFailure => ApplicationStatus::Rejected,
            _ if stage_status == StageStatus::Rejected => ApplicationStatus::Rejected,
            StageKind::Start => ApplicationStatus::New,
            _ => ApplicationStatus::Shortlisted,
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApplicationStatus::New => "New",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Hired => "Hired",
        };
        f.write_str(s)
    }
}

/// Whether the local copy of an application matches what the backend last
/// acknowledged. Flips to `OutOfSync` when a backend write fails after an
/// optimistic local apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    #[default]
    Synced,
    OutOfSync,
}

/// Immutable audit record of one pipeline transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub stage_id: String,
    pub stage_name: String,
    pub status: StageStatus,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub email_sent: bool,
    pub whatsapp_sent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_scheduled: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventKind {
    StatusChange,
    Note,
    Email,
    Whatsapp,
    Interview,
    Other,
}

/// Immutable audit record of any notable action on an application. Broader
/// than [`HistoryEntry`]: includes notes, sends and interview scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TimelineEventKind,
    pub content: String,
    pub date: DateTime<Utc>,
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<JsonValue>,
}

impl TimelineEvent {
    pub fn new(
        kind: TimelineEventKind,
        content: impl Into<String>,
        user: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            content: content.into(),
            date,
            user: user.into(),
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: JsonValue) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// Mutable aggregate for one candidate-job pairing.
///
/// Ordering contracts for the two ledgers differ on purpose and downstream
/// consumers rely on each:
/// - `stage_history` is chronological ascending (oldest first, appended);
/// - `timeline` is reverse-chronological (newest first, prepended).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub job_id: String,
    pub job_title: String,
    pub candidate_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub resume_url: Option<String>,
    pub applied_date: DateTime<Utc>,
    pub status: ApplicationStatus,
    pub current_stage_id: String,
    pub current_stage_status: StageStatus,
    pub stage_history: Vec<HistoryEntry>,
    pub timeline: Vec<TimelineEvent>,
    pub upcoming_interview: Option<Interview>,
    pub rating: u8,
    pub tags: Vec<String>,
    pub notes: String,
    pub answers: HashMap<String, JsonValue>,
    #[serde(default)]
    pub sync: SyncState,
}

impl Application {
    /// A freshly submitted application sitting at the start stage, seeded
    /// with one "received" history entry and timeline event.
    pub fn received(
        job_id: impl Into<String>,
        job_title: impl Into<String>,
        candidate_name: impl Into<String>,
        email: Option<String>,
        phone: Option<String>,
        start_stage: &Stage,
    ) -> Self {
        let now = Utc::now();
        let candidate_name = candidate_name.into();
        Self {
            id: Uuid::new_v4(),
            job_id: job_id.into(),
            job_title: job_title.into(),
            candidate_name,
            email,
            phone,
            location: None,
            linkedin_url: None,
            portfolio_url: None,
            resume_url: None,
            applied_date: now,
            status: ApplicationStatus::New,
            current_stage_id: start_stage.id.clone(),
            current_stage_status: StageStatus::Pending,
            stage_history: vec![HistoryEntry {
                stage_id: start_stage.id.clone(),
                stage_name: start_stage.name.clone(),
                status: StageStatus::Pending,
                updated_at: now,
                updated_by: "System".to_string(),
                note: None,
                email_sent: false,
                whatsapp_sent: false,
                interview_scheduled: None,
            }],
            timeline: vec![TimelineEvent::new(
                TimelineEventKind::Other,
                "Application received",
                "System",
                now,
            )],
            upcoming_interview: None,
            rating: 0,
            tags: Vec::new(),
            notes: String::new(),
            answers: HashMap::new(),
            sync: SyncState::Synced,
        }
    }

    /// Prepends a batch of events, preserving the batch's internal order at
    /// the head of the timeline.
    pub(crate) fn prepend_events(&mut self, events: Vec<TimelineEvent>) {
        let old = std::mem::take(&mut self.timeline);
        self.timeline = events.into_iter().chain(old).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(kind: StageKind) -> Stage {
        Stage {
            id: "s".to_string(),
            name: "Stage".to_string(),
            description: String::new(),
            ordinal: 1,
            kind,
        }
    }

    #[test]
    fn rejection_wins_over_active_stages() {
        let s = stage(StageKind::Active);
        assert_eq!(
            ApplicationStatus::derive(&s, StageStatus::Rejected),
            ApplicationStatus::Rejected
        );
    }

    #[test]
    fn success_terminal_stage_wins_over_rejection() {
        let s = stage(StageKind::TerminalSuccess);
        assert_eq!(
            ApplicationStatus::derive(&s, StageStatus::Rejected),
            ApplicationStatus::Hired
        );
    }

    #[test]
    fn start_stage_maps_to_new_unless_rejected() {
        let s = stage(StageKind::Start);
        assert_eq!(
            ApplicationStatus::derive(&s, StageStatus::Pending),
            ApplicationStatus::New
        );
        assert_eq!(
            ApplicationStatus::derive(&s, StageStatus::Rejected),
            ApplicationStatus::Rejected
        );
    }

    #[test]
    fn anything_else_is_shortlisted() {
        let s = stage(StageKind::Active);
        assert_eq!(
            ApplicationStatus::derive(&s, StageStatus::Cleared),
            ApplicationStatus::Shortlisted
        );
        assert_eq!(
            ApplicationStatus::derive(&s, StageStatus::OnHold),
            ApplicationStatus::Shortlisted
        );
    }
}
