//! 审批历史存储操作
//!
//! 历史行的写入发生在 packages.rs 的流转事务里，这里只负责读取。
//! 表是只追加的，没有更新和删除路径。

use super::SeaOrmStorage;
use crate::entity::approval_history::{Column, Entity as ApprovalHistory};
use crate::errors::{Result, SRSystemError};
use crate::models::packages::entities::ApprovalHistoryEntry;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 按时间升序列出包的全部审批历史
    pub async fn list_approval_history_impl(
        &self,
        package_id: i64,
    ) -> Result<Vec<ApprovalHistoryEntry>> {
        let rows = ApprovalHistory::find()
            .filter(Column::PackageId.eq(package_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SRSystemError::database_operation(format!("查询审批历史失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_history_entry()).collect())
    }
}
