use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GradeService;
use crate::models::grades::requests::{GradeListParams, GradeListQuery};
use crate::models::{ApiResponse, ErrorCode};

/// 查询成绩列表
/// GET /grades
pub async fn list_grades(
    service: &GradeService,
    request: &HttpRequest,
    params: GradeListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = GradeListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        section_id: params.section_id,
        subject_id: params.subject_id,
        grading_period: params.grading_period,
        student_id: params.student_id,
        component_type: params.component_type,
    };

    match storage.list_grade_components(query).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(list, "查询成功"))),
        Err(e) => {
            error!("Failed to list grade components: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询成绩失败: {e}"),
                )),
            )
        }
    }
}
