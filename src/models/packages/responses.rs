use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::packages::entities::ApprovalHistoryEntry;

/// 审批历史响应（按时间升序，完整返回不分页）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/package.ts")]
pub struct ApprovalHistoryResponse {
    pub items: Vec<ApprovalHistoryEntry>,
}
