use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 系统状态
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct SystemStatusResponse {
    pub system_name: String,
    pub version: String,
    pub environment: String,
    pub uptime_secs: i64,
}
