use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit, RequireRole};
use crate::models::grades::requests::{GradeListParams, RecordGradeRequest};
use crate::models::users::entities::UserRole;
use crate::services::GradeService;

// 懒加载的全局 GradeService 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

// 查询成绩列表
pub async fn list_grades(
    req: HttpRequest,
    query: web::Query<GradeListParams>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(&req, query.into_inner()).await
}

// 录入/覆盖成绩分项
pub async fn record_grade(
    req: HttpRequest,
    body: web::Json<RecordGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.record_grade(&req, body.into_inner()).await
}

// 配置路由
pub fn configure_grades_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 查询成绩 - 所有登录用户可访问
                    .route(web::get().to(list_grades))
                    // 录入成绩 - 仅教师和管理员（锁定校验在业务层）
                    .route(
                        web::put()
                            .to(record_grade)
                            .wrap(RateLimit::record_entry())
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
