use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::PackageService;
use crate::models::packages::responses::ApprovalHistoryResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 查询成绩包的审批历史
/// GET /packages/{id}/history
///
/// 按时间升序完整返回，前端用它还原整个审批过程。
pub async fn get_history(
    service: &PackageService,
    request: &HttpRequest,
    package_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 包必须存在，否则按 404 处理而不是返回空列表
    match storage.get_package_by_id(package_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::PackageNotFound,
                format!("成绩包 {package_id} 不存在"),
            )));
        }
        Err(e) => {
            error!("Failed to query package: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询成绩包失败: {e}"),
                )),
            );
        }
    }

    match storage.list_approval_history(package_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ApprovalHistoryResponse { items },
            "查询成功",
        ))),
        Err(e) => {
            error!("Failed to query approval history: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询审批历史失败: {e}"),
                )),
            )
        }
    }
}
