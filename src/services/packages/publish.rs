use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::{PackageService, load_actor, transitions, workflow_error_response};
use crate::errors::SRSystemError;
use crate::models::packages::entities::ApprovalAction;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::notifications::dispatch;

/// 发布成绩包
/// POST /packages/{id}/publish
///
/// 仅教务管理员可以发布，发布后成为班级的正式记录，不可再流转。
/// 路由层已有角色门槛，这里再校验一次作为业务层防线。
pub async fn publish_package(
    service: &PackageService,
    request: &HttpRequest,
    package_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let actor = match load_actor(&storage, request).await {
        Ok(actor) => actor,
        Err(resp) => return Ok(resp),
    };

    if actor.role != UserRole::Admin {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PackagePermissionDenied,
            "只有教务管理员可以发布成绩包",
        )));
    }

    let mut retried = false;
    loop {
        let pkg = match storage.get_package_by_id(package_id).await {
            Ok(Some(pkg)) => pkg,
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::PackageNotFound,
                    format!("成绩包 {package_id} 不存在"),
                )));
            }
            Err(e) => return Ok(workflow_error_response(&e)),
        };

        let ctx = transitions::TransitionContext {
            actor: &actor,
            package_section_id: pkg.section_id,
        };
        let target = match transitions::next_state(pkg.status, ApprovalAction::Publish, &ctx) {
            Ok(target) => target,
            Err(e) => return Ok(workflow_error_response(&e)),
        };

        match storage
            .transition_package(
                package_id,
                pkg.status,
                target,
                ApprovalAction::Publish,
                &actor,
                None,
                false,
            )
            .await
        {
            Ok(updated) => {
                info!("Package {} published by admin {}", package_id, actor.id);
                dispatch::notify_published(&storage, &updated).await;
                return Ok(HttpResponse::Ok()
                    .json(ApiResponse::success(updated, "成绩包已发布")));
            }
            Err(SRSystemError::ConcurrentModification(msg)) if !retried => {
                warn!("Publish lost a race, re-reading state and retrying once: {msg}");
                retried = true;
            }
            Err(e) => return Ok(workflow_error_response(&e)),
        }
    }
}
