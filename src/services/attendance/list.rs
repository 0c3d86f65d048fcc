use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::models::attendance::requests::AttendanceQueryParams;
use crate::models::attendance::responses::AttendanceDayResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::parse_client_date;

/// 查询某班某日考勤
/// GET /attendance?section_id=&date=
///
/// 只返回显式录入过的记录；没有记录的学生不补默认值，
/// 空格子怎么显示由前端决定。
pub async fn list_day(
    service: &AttendanceService,
    request: &HttpRequest,
    query: AttendanceQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let date = match parse_client_date(&query.date) {
        Ok(date) => date,
        Err(reason) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                reason,
            )));
        }
    };

    match storage.list_attendance_for_day(query.section_id, date).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceDayResponse { items },
            "查询成功",
        ))),
        Err(e) => {
            error!("Failed to list attendance: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询考勤失败: {e}"),
                )),
            )
        }
    }
}
