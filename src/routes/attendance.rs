use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit, RequireRole};
use crate::models::attendance::requests::{AttendanceQueryParams, RecordAttendanceDayRequest};
use crate::models::users::entities::UserRole;
use crate::services::AttendanceService;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

// 查询某班某日考勤
pub async fn list_day(
    req: HttpRequest,
    query: web::Query<AttendanceQueryParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.list_day(&req, query.into_inner()).await
}

// 整班单日考勤录入
pub async fn record_day(
    req: HttpRequest,
    body: web::Json<RecordAttendanceDayRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.record_day(&req, body.into_inner()).await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 查询考勤 - 所有登录用户可访问
                    .route(web::get().to(list_day)),
            )
            .service(
                web::resource("/days")
                    // 录入考勤 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(record_day)
                            .wrap(RateLimit::record_entry())
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
