//! 站内通知存储操作

use super::SeaOrmStorage;
use crate::entity::notifications::ActiveModel;
use crate::errors::{Result, SRSystemError};
use crate::models::notifications::{
    entities::Notification, requests::CreateNotificationRequest,
};
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 批量创建通知
    pub async fn create_notifications_batch_impl(
        &self,
        reqs: Vec<CreateNotificationRequest>,
    ) -> Result<Vec<Notification>> {
        let now = chrono::Utc::now().timestamp();
        let mut notifications = Vec::new();

        for req in reqs {
            let model = ActiveModel {
                user_id: Set(req.user_id),
                notification_type: Set(req.notification_type),
                title: Set(req.title),
                content: Set(req.content),
                reference_type: Set(req.reference_type),
                reference_id: Set(req.reference_id),
                is_read: Set(false),
                created_at: Set(now),
                ..Default::default()
            };

            let result = model
                .insert(&self.db)
                .await
                .map_err(|e| SRSystemError::database_operation(format!("批量创建通知失败: {e}")))?;

            notifications.push(result.into_notification());
        }

        Ok(notifications)
    }
}
