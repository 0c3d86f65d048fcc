use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::attendance::entities::AttendanceRecord;

/// 某班某日的考勤（每个在读学生至多一条）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceDayResponse {
    pub items: Vec<AttendanceRecord>,
}
