use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::{PackageService, load_actor, transitions, workflow_error_response};
use crate::errors::SRSystemError;
use crate::models::packages::entities::{ApprovalAction, PackageStatus, QuarterPackage};
use crate::models::packages::requests::ReturnPackageRequest;
use crate::models::users::entities::{ActorContext, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::notifications::dispatch;
use crate::utils::validate::validate_remarks;

/// 审核权限：班主任或教务
///
/// 教师必须持有行政班（即担任班主任）才能参与审核；是否触发自动
/// 转交由流转表里的路由函数决定，这里不重复判断。
fn check_review_permission(
    actor: &ActorContext,
    pkg: &QuarterPackage,
) -> Result<(), HttpResponse> {
    match actor.role {
        UserRole::Admin => Ok(()),
        UserRole::Teacher if actor.advisory_section_id.is_some() => {
            // 转交教务后的包只能由教务继续审批
            if pkg.status == PackageStatus::ForwardedToAdmin {
                return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::PackagePermissionDenied,
                    "已转交教务的成绩包只能由教务管理员审批",
                )));
            }
            Ok(())
        }
        _ => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::PackagePermissionDenied,
            "只有班主任或教务管理员可以审核成绩包",
        ))),
    }
}

/// 审核通过成绩包
/// POST /packages/{id}/approve
///
/// 班主任审批自己行政班的包会自动转交教务（路由规则，见 transitions）。
/// CAS 失败时重读状态自动重试一次，仍失败则把冲突报给调用方。
pub async fn approve_package(
    service: &PackageService,
    request: &HttpRequest,
    package_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let actor = match load_actor(&storage, request).await {
        Ok(actor) => actor,
        Err(resp) => return Ok(resp),
    };

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

        if let Err(resp) = check_review_permission(&actor, &pkg) {
            return Ok(resp);
        }

        let ctx = transitions::TransitionContext {
            actor: &actor,
            package_section_id: pkg.section_id,
        };
        let target = match transitions::next_state(pkg.status, ApprovalAction::Approve, &ctx) {
            Ok(target) => target,
            Err(e) => return Ok(workflow_error_response(&e)),
        };

        match storage
            .transition_package(
                package_id,
                pkg.status,
                target,
                ApprovalAction::Approve,
                &actor,
                None,
                false,
            )
            .await
        {
            Ok(updated) => {
                info!(
                    "Package {} approved by {} ({} -> {})",
                    package_id, actor.id, pkg.status, updated.status
                );
                return Ok(HttpResponse::Ok().json(ApiResponse::success(
                    updated,
                    "审核完成",
                )));
            }
            Err(SRSystemError::ConcurrentModification(msg)) if !retried => {
                warn!("Approve lost a race, re-reading state and retrying once: {msg}");
                retried = true;
            }
            Err(e) => return Ok(workflow_error_response(&e)),
        }
    }
}

/// 退回成绩包（备注必填）
/// POST /packages/{id}/return
pub async fn return_package(
    service: &PackageService,
    request: &HttpRequest,
    package_id: i64,
    data: ReturnPackageRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 退回必须说明原因，且不超过长度上限
    if let Err(reason) = validate_remarks(&data.remarks) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::RemarksRequired,
            reason,
        )));
    }

    let actor = match load_actor(&storage, request).await {
        Ok(actor) => actor,
        Err(resp) => return Ok(resp),
    };

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

        if let Err(resp) = check_review_permission(&actor, &pkg) {
            return Ok(resp);
        }

        let ctx = transitions::TransitionContext {
            actor: &actor,
            package_section_id: pkg.section_id,
        };
        let target = match transitions::next_state(pkg.status, ApprovalAction::Return, &ctx) {
            Ok(target) => target,
            Err(e) => return Ok(workflow_error_response(&e)),
        };

        match storage
            .transition_package(
                package_id,
                pkg.status,
                target,
                ApprovalAction::Return,
                &actor,
                Some(data.remarks.clone()),
                true, // 退回后解锁编辑，submitted_at 清空
            )
            .await
        {
            Ok(updated) => {
                info!(
                    "Package {} returned by {} with remarks",
                    package_id, actor.id
                );
                dispatch::notify_returned(&storage, &updated).await;
                return Ok(HttpResponse::Ok().json(ApiResponse::success(
                    updated,
                    "成绩包已退回，教师可修改后重新提交",
                )));
            }
            Err(SRSystemError::ConcurrentModification(msg)) if !retried => {
                warn!("Return lost a race, re-reading state and retrying once: {msg}");
                retried = true;
            }
            Err(e) => return Ok(workflow_error_response(&e)),
        }
    }
}
