use crate::dto::interview_dto::InterviewRequest;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewMode {
    Online,
    Offline,
    Phone,
}

impl fmt::Display for InterviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InterviewMode::Online => "Online",
            InterviewMode::Offline => "Offline",
            InterviewMode::Phone => "Phone",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub mode: InterviewMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    pub interviewer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: InterviewStatus,
}

impl Interview {
    pub fn scheduled(req: InterviewRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: req.date,
            time: req.time,
            mode: req.mode,
            meeting_link: req.meeting_link,
            interviewer_name: req.interviewer_name,
            notes: req.notes,
            status: InterviewStatus::Scheduled,
        }
    }
}
