use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::packages::entities::GradingPeriod;

// 成绩分项类型
//
// Final 由三个分项按固定权重推导（见 services::grades::aggregate），
// 但独立落库，允许教师在提交前手工修正。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub enum GradeComponentType {
    Written,     // 书面作业
    Performance, // 课堂表现
    Exam,        // 考试
    Final,       // 最终成绩（推导）
}

impl GradeComponentType {
    pub const WRITTEN: &'static str = "written";
    pub const PERFORMANCE: &'static str = "performance";
    pub const EXAM: &'static str = "exam";
    pub const FINAL: &'static str = "final";

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeComponentType::Written => Self::WRITTEN,
            GradeComponentType::Performance => Self::PERFORMANCE,
            GradeComponentType::Exam => Self::EXAM,
            GradeComponentType::Final => Self::FINAL,
        }
    }
}

impl<'de> Deserialize<'de> for GradeComponentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<GradeComponentType>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的成绩分项: '{s}'. 支持的分项: written, performance, exam, final"
            ))
        })
    }
}

impl std::fmt::Display for GradeComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GradeComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::WRITTEN => Ok(GradeComponentType::Written),
            Self::PERFORMANCE => Ok(GradeComponentType::Performance),
            Self::EXAM => Ok(GradeComponentType::Exam),
            Self::FINAL => Ok(GradeComponentType::Final),
            _ => Err(format!("Invalid grade component type: {s}")),
        }
    }
}

// 成绩分项记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeComponent {
    pub id: i64,
    pub student_id: i64,
    pub section_id: i64,
    pub subject_id: Option<i64>,
    pub grading_period: GradingPeriod,
    pub component_type: GradeComponentType,
    pub score: f64,
    pub recorded_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
