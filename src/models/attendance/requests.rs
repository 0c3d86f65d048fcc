use serde::Deserialize;
use ts_rs::TS;

use crate::models::attendance::entities::AttendanceStatus;
use crate::models::packages::entities::GradingPeriod;

/// 单个学生的当日考勤条目
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub status: AttendanceStatus,
}

/// 整班单日考勤录入
///
/// entries 必须恰好覆盖该班级当前在读学生；grading_period 用于
/// 定位班级整体成绩包做编辑锁检查。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct RecordAttendanceDayRequest {
    pub section_id: i64,
    // YYYY-MM-DD
    pub date: String,
    pub grading_period: GradingPeriod,
    pub entries: Vec<AttendanceEntry>,
}

/// 按班级+日期查询考勤
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceQueryParams {
    pub section_id: i64,
    // YYYY-MM-DD
    pub date: String,
}
