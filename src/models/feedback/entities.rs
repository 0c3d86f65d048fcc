use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::packages::entities::GradingPeriod;

// 学生学期评语，(学生, 班级, 科目, 学期) 唯一
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/feedback.ts")]
pub struct StudentFeedback {
    pub id: i64,
    pub student_id: i64,
    pub section_id: i64,
    pub subject_id: Option<i64>,
    pub grading_period: GradingPeriod,
    pub content: String,
    pub recorded_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
