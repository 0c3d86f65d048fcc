use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::{PackageService, load_actor, transitions, workflow_error_response};
use crate::errors::SRSystemError;
use crate::models::packages::entities::ApprovalAction;
use crate::models::packages::requests::SubmitPackageRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::notifications::dispatch;

/// 提交成绩包
/// POST /packages/submit
///
/// 成绩包行不存在时惰性创建。完整性校验、最终成绩重算、状态流转
/// 由存储层在一个事务里完成；这里只做授权与流转表预检，并在输掉
/// 并发竞争时重读后自动重试一次。
pub async fn submit_package(
    service: &PackageService,
    request: &HttpRequest,
    data: SubmitPackageRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let actor = match load_actor(&storage, request).await {
        Ok(actor) => actor,
        Err(resp) => return Ok(resp),
    };

    // 只有任课教师提交成绩包（班主任给自己班提交时同样是教师身份）
    if actor.role != UserRole::Teacher {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PackagePermissionDenied,
            "只有任课教师可以提交成绩包",
        )));
    }

    // 班级必须存在（成绩包行是惰性创建的，先把 404 从外键错误里分离出来）
    match storage.get_section_by_id(data.section_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SectionNotFound,
                format!("班级 {} 不存在", data.section_id),
            )));
        }
        Err(e) => return Ok(workflow_error_response(&e)),
    }

    let mut retried = false;
    loop {
        let pkg = match storage
            .find_or_create_package(
                data.section_id,
                data.subject_id,
                data.grading_period,
                actor.id,
            )
            .await
        {
            Ok(pkg) => pkg,
            Err(e) => return Ok(workflow_error_response(&e)),
        };

        // 只有负责人本人可以提交
        if pkg.owner_id != actor.id {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::PackagePermissionDenied,
                "只有成绩包负责人可以提交",
            )));
        }

        // 流转表预检，给出明确错误；存储层的 CAS 是最终防线
        let ctx = transitions::TransitionContext {
            actor: &actor,
            package_section_id: pkg.section_id,
        };
        if let Err(e) = transitions::next_state(pkg.status, ApprovalAction::Submit, &ctx) {
            return Ok(workflow_error_response(&e));
        }

        match storage.submit_package(pkg.id, &actor).await {
            Ok(updated) => {
                info!(
                    "Package {} submitted by teacher {} (section {}, period {})",
                    updated.id, actor.id, updated.section_id, updated.grading_period
                );
                dispatch::notify_submitted(&storage, &updated).await;
                return Ok(HttpResponse::Ok()
                    .json(ApiResponse::success(updated, "成绩包已提交，等待审核")));
            }
            Err(SRSystemError::ConcurrentModification(msg)) if !retried => {
                warn!("Submit lost a race, re-reading state and retrying once: {msg}");
                retried = true;
            }
            Err(e) => return Ok(workflow_error_response(&e)),
        }
    }
}
