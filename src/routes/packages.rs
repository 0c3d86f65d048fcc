use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit, RequireRole};
use crate::models::packages::requests::{
    PackageQueryParams, ReturnPackageRequest, SubmitPackageRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::PackageService;
use crate::utils::SafePackageIdI64;

// 懒加载的全局 PackageService 实例
static PACKAGE_SERVICE: Lazy<PackageService> = Lazy::new(PackageService::new_lazy);

// 查询成绩包
pub async fn get_package(
    req: HttpRequest,
    query: web::Query<PackageQueryParams>,
) -> ActixResult<HttpResponse> {
    PACKAGE_SERVICE.get_package(&req, query.into_inner()).await
}

// 提交成绩包
pub async fn submit_package(
    req: HttpRequest,
    body: web::Json<SubmitPackageRequest>,
) -> ActixResult<HttpResponse> {
    PACKAGE_SERVICE.submit_package(&req, body.into_inner()).await
}

// 审核通过成绩包
pub async fn approve_package(req: HttpRequest, path: SafePackageIdI64) -> ActixResult<HttpResponse> {
    PACKAGE_SERVICE.approve_package(&req, path.0).await
}

// 退回成绩包
pub async fn return_package(
    req: HttpRequest,
    path: SafePackageIdI64,
    body: web::Json<ReturnPackageRequest>,
) -> ActixResult<HttpResponse> {
    PACKAGE_SERVICE
        .return_package(&req, path.0, body.into_inner())
        .await
}

// 发布成绩包
pub async fn publish_package(req: HttpRequest, path: SafePackageIdI64) -> ActixResult<HttpResponse> {
    PACKAGE_SERVICE.publish_package(&req, path.0).await
}

// 查询审批历史
pub async fn get_history(req: HttpRequest, path: SafePackageIdI64) -> ActixResult<HttpResponse> {
    PACKAGE_SERVICE.get_history(&req, path.0).await
}

// 配置路由
pub fn configure_packages_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/packages")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 查询成绩包 - 所有登录用户可访问
                    .route(web::get().to(get_package)),
            )
            .service(
                web::resource("/submit")
                    .wrap(RateLimit::transition())
                    // 提交 - 仅教师（负责人校验在业务层）
                    .route(
                        web::post()
                            .to(submit_package)
                            .wrap(RequireRole::new(&UserRole::Teacher)),
                    ),
            )
            .service(
                web::resource("/{id}/approve")
                    .wrap(RateLimit::transition())
                    // 审核 - 班主任与管理员，与班级的关系在业务层校验
                    .route(
                        web::post()
                            .to(approve_package)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/return")
                    .wrap(RateLimit::transition())
                    // 退回 - 班主任与管理员
                    .route(
                        web::post()
                            .to(return_package)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/publish")
                    .wrap(RateLimit::transition())
                    // 发布 - 仅管理员
                    .route(
                        web::post()
                            .to(publish_package)
                            .wrap(RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/history")
                    // 审批历史 - 所有登录用户可访问
                    .route(web::get().to(get_history)),
            ),
    );
}
