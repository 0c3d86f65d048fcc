use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::config::AppConfig;
use crate::models::system::responses::SystemStatusResponse;
use crate::models::{ApiResponse, AppStartTime, ErrorCode};

/// 系统运行状态
/// GET /system/status
pub async fn get_status(request: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    let uptime_secs = match request.app_data::<web::Data<AppStartTime>>() {
        Some(start) => chrono::Utc::now()
            .signed_duration_since(start.start_datetime)
            .num_seconds(),
        None => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "启动时间不可用",
                )),
            );
        }
    };

    let status = SystemStatusResponse {
        system_name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        uptime_secs,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(status, "查询成功")))
}
