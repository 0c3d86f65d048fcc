use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;
use crate::models::grades::entities::GradeComponentType;
use crate::models::packages::entities::GradingPeriod;

/// 录入/覆盖单个成绩分项
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct RecordGradeRequest {
    pub student_id: i64,
    pub section_id: i64,
    pub subject_id: Option<i64>,
    pub grading_period: GradingPeriod,
    pub component_type: GradeComponentType,
    pub score: f64,
}

/// 成绩列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub section_id: i64,
    pub subject_id: Option<i64>,
    pub grading_period: GradingPeriod,
    pub student_id: Option<i64>,
    pub component_type: Option<GradeComponentType>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct GradeListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub section_id: i64,
    pub subject_id: Option<i64>,
    pub grading_period: GradingPeriod,
    pub student_id: Option<i64>,
    pub component_type: Option<GradeComponentType>,
}
