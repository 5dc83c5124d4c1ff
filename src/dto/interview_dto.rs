use crate::models::interview::InterviewMode;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRequest {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub mode: InterviewMode,
    #[validate(url)]
    pub meeting_link: Option<String>,
    #[validate(length(min = 1))]
    pub interviewer_name: String,
    pub notes: Option<String>,
}
