use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit, RequireRole};
use crate::models::feedback::requests::RecordFeedbackRequest;
use crate::models::users::entities::UserRole;
use crate::services::FeedbackService;

// 懒加载的全局 FeedbackService 实例
static FEEDBACK_SERVICE: Lazy<FeedbackService> = Lazy::new(FeedbackService::new_lazy);

// 录入/覆盖学生评语
pub async fn record_feedback(
    req: HttpRequest,
    body: web::Json<RecordFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE
        .record_feedback(&req, body.into_inner())
        .await
}

// 配置路由
pub fn configure_feedback_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/feedback")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 录入评语 - 仅教师和管理员
                    .route(
                        web::put()
                            .to(record_feedback)
                            .wrap(RateLimit::record_entry())
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
