use serde::Deserialize;
use ts_rs::TS;

use crate::models::packages::entities::GradingPeriod;

/// 录入/覆盖学生评语
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/feedback.ts")]
pub struct RecordFeedbackRequest {
    pub student_id: i64,
    pub section_id: i64,
    pub subject_id: Option<i64>,
    pub grading_period: GradingPeriod,
    pub content: String,
}
