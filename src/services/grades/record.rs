use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GradeService;
use crate::middlewares::RequireJWT;
use crate::models::grades::requests::RecordGradeRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_score;

/// 录入/覆盖成绩分项
/// PUT /grades
///
/// 同一 (学生, 班级, 科目, 学期, 分项) 重复保存是幂等覆盖。
/// 成绩包脱离 draft/returned 后拒绝写入（PackageLocked）。
pub async fn record_grade(
    service: &GradeService,
    request: &HttpRequest,
    data: RecordGradeRequest,
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

    // 分数范围校验，非法输入不落库
    if let Err(reason) = validate_score(data.score) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ScoreOutOfRange,
            reason,
        )));
    }

    // 编辑锁：包在审批中或已发布时禁止改分
    match storage
        .get_package_by_scope(data.section_id, data.subject_id, data.grading_period)
        .await
    {
        Ok(Some(pkg)) if !pkg.status.is_editable() => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::PackageLocked,
                format!("成绩包当前状态为 {}，不允许修改成绩", pkg.status),
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

    match storage.upsert_grade_component(user_id, data).await {
        Ok(component) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(component, "成绩已保存")))
        }
        Err(e) => {
            error!("Failed to record grade component: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("保存成绩失败: {e}"),
                )),
            )
        }
    }
}
