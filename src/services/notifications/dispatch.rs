//! 审批事件通知分发
//!
//! 尽力投递：通知只是提示，写入失败记一条 warn 即可，
//! 绝不让它影响已经成功的状态流转。

use std::sync::Arc;

use tracing::warn;

use crate::models::notifications::requests::CreateNotificationRequest;
use crate::models::packages::entities::QuarterPackage;
use crate::storage::Storage;

const REFERENCE_TYPE: &str = "quarter_package";

fn notification(
    user_id: i64,
    notification_type: &str,
    title: &str,
    content: String,
    package_id: i64,
) -> CreateNotificationRequest {
    CreateNotificationRequest {
        user_id,
        notification_type: notification_type.to_string(),
        title: title.to_string(),
        content,
        reference_type: Some(REFERENCE_TYPE.to_string()),
        reference_id: Some(package_id),
    }
}

async fn deliver(storage: &Arc<dyn Storage>, reqs: Vec<CreateNotificationRequest>) {
    if reqs.is_empty() {
        return;
    }
    if let Err(e) = storage.create_notifications_batch(reqs).await {
        warn!("通知投递失败（已忽略）: {}", e);
    }
}

/// 查出班级的班主任，用于提交/发布通知
async fn adviser_of(storage: &Arc<dyn Storage>, section_id: i64) -> Option<i64> {
    match storage.get_section_by_id(section_id).await {
        Ok(Some(section)) => Some(section.adviser_id),
        Ok(None) => None,
        Err(e) => {
            warn!("查询班主任失败，跳过通知: {}", e);
            None
        }
    }
}

/// 提交成功：通知班主任有包待审
pub async fn notify_submitted(storage: &Arc<dyn Storage>, pkg: &QuarterPackage) {
    let Some(adviser_id) = adviser_of(storage, pkg.section_id).await else {
        return;
    };
    let content = format!(
        "班级 {} 的 {} 成绩包已提交，等待审核",
        pkg.section_id, pkg.grading_period
    );
    deliver(
        storage,
        vec![notification(
            adviser_id,
            "package_submitted",
            "有成绩包待审核",
            content,
            pkg.id,
        )],
    )
    .await;
}

/// 退回：通知负责教师修改后重新提交
pub async fn notify_returned(storage: &Arc<dyn Storage>, pkg: &QuarterPackage) {
    let content = match &pkg.remarks {
        Some(remarks) => format!("成绩包被退回：{remarks}"),
        None => "成绩包被退回，请修改后重新提交".to_string(),
    };
    deliver(
        storage,
        vec![notification(
            pkg.owner_id,
            "package_returned",
            "成绩包被退回",
            content,
            pkg.id,
        )],
    )
    .await;
}

/// 发布：通知负责教师与班主任
pub async fn notify_published(storage: &Arc<dyn Storage>, pkg: &QuarterPackage) {
    let content = format!(
        "班级 {} 的 {} 成绩包已发布为正式记录",
        pkg.section_id, pkg.grading_period
    );

    let mut reqs = vec![notification(
        pkg.owner_id,
        "package_published",
        "成绩包已发布",
        content.clone(),
        pkg.id,
    )];
    if let Some(adviser_id) = adviser_of(storage, pkg.section_id).await
        && adviser_id != pkg.owner_id
    {
        reqs.push(notification(
            adviser_id,
            "package_published",
            "成绩包已发布",
            content,
            pkg.id,
        ));
    }

    deliver(storage, reqs).await;
}
