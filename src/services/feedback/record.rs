use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FeedbackService;
use crate::middlewares::RequireJWT;
use crate::models::feedback::requests::RecordFeedbackRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_remarks;

/// 录入/覆盖学生评语
/// PUT /feedback
///
/// 评语是提交完整性的一部分：每个在读学生都要有非空评语，
/// 成绩包才允许提交。锁定规则与成绩一致。
pub async fn record_feedback(
    service: &FeedbackService,
    request: &HttpRequest,
    data: RecordFeedbackRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    // 评语非空且不超长
    if let Err(reason) = validate_remarks(&data.content) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FeedbackInvalid,
            reason,
        )));
    }

    // 编辑锁
    match storage
        .get_package_by_scope(data.section_id, data.subject_id, data.grading_period)
        .await
    {
        Ok(Some(pkg)) if !pkg.status.is_editable() => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::PackageLocked,
                format!("成绩包当前状态为 {}，不允许修改评语", pkg.status),
            )));
        }
        Ok(_) => {}
        Err(e) => {
            error!("Failed to check package lock: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询成绩包失败: {e}"),
                )),
            );
        }
    }

    match storage.upsert_feedback(user_id, data).await {
        Ok(feedback) => Ok(HttpResponse::Ok().json(ApiResponse::success(feedback, "评语已保存"))),
        Err(e) => {
            error!("Failed to record feedback: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("保存评语失败: {e}"),
                )),
            )
        }
    }
}
