use serde::Deserialize;
use ts_rs::TS;

use crate::models::packages::entities::GradingPeriod;

/// 提交成绩包请求
///
/// 成绩包行在第一次提交时才会惰性创建，所以提交接口用
/// (班级, 科目, 学期) 定位而不是包ID。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/package.ts")]
pub struct SubmitPackageRequest {
    pub section_id: i64,
    pub subject_id: Option<i64>,
    pub grading_period: GradingPeriod,
}

/// 退回成绩包请求（备注必填）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/package.ts")]
pub struct ReturnPackageRequest {
    pub remarks: String,
}

/// 按作用域查询成绩包
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/package.ts")]
pub struct PackageQueryParams {
    pub section_id: i64,
    pub subject_id: Option<i64>,
    pub grading_period: GradingPeriod,
}
