use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::PackageService;
use crate::models::packages::entities::QuarterPackage;
use crate::models::packages::requests::PackageQueryParams;
use crate::models::{ApiResponse, ErrorCode};

/// 按 (班级, 科目, 学期) 查询成绩包
/// GET /packages?section_id=&subject_id=&grading_period=
///
/// 没有成绩包行等同于草稿状态（包是惰性创建的），此时 data 为 null，
/// 前端按草稿渲染。
pub async fn get_package(
    service: &PackageService,
    request: &HttpRequest,
    query: PackageQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .get_package_by_scope(query.section_id, query.subject_id, query.grading_period)
        .await
    {
        Ok(pkg) => Ok(HttpResponse::Ok()
            .json(ApiResponse::<Option<QuarterPackage>>::success(pkg, "查询成功"))),
        Err(e) => {
            error!("Failed to query package: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询成绩包失败: {e}"),
                )),
            )
        }
    }
}
