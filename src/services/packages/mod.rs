pub mod get;
pub mod history;
pub mod publish;
pub mod review;
pub mod submit;
pub mod transitions;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use crate::errors::SRSystemError;
use crate::middlewares::RequireJWT;
use crate::models::packages::requests::{
    PackageQueryParams, ReturnPackageRequest, SubmitPackageRequest,
};
use crate::models::users::entities::ActorContext;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct PackageService {
    storage: Option<Arc<dyn Storage>>,
}

impl PackageService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 提交成绩包（草稿/退回状态）
    pub async fn submit_package(
        &self,
        request: &HttpRequest,
        data: SubmitPackageRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_package(self, request, data).await
    }

    // 审核通过（含班主任自动转交）
    pub async fn approve_package(
        &self,
        request: &HttpRequest,
        package_id: i64,
    ) -> ActixResult<HttpResponse> {
        review::approve_package(self, request, package_id).await
    }

    // 退回修改（备注必填）
    pub async fn return_package(
        &self,
        request: &HttpRequest,
        package_id: i64,
        data: ReturnPackageRequest,
    ) -> ActixResult<HttpResponse> {
        review::return_package(self, request, package_id, data).await
    }

    // 发布（终态，仅教务）
    pub async fn publish_package(
        &self,
        request: &HttpRequest,
        package_id: i64,
    ) -> ActixResult<HttpResponse> {
        publish::publish_package(self, request, package_id).await
    }

    // 按 (班级, 科目, 学期) 查询成绩包
    pub async fn get_package(
        &self,
        request: &HttpRequest,
        query: PackageQueryParams,
    ) -> ActixResult<HttpResponse> {
        get::get_package(self, request, query).await
    }

    // 查询审批历史
    pub async fn get_history(
        &self,
        request: &HttpRequest,
        package_id: i64,
    ) -> ActixResult<HttpResponse> {
        history::get_history(self, request, package_id).await
    }
}

/// 工作流错误到 HTTP 响应的唯一映射点
///
/// 前端只消费 code 和 message，不做状态推断。
pub(crate) fn workflow_error_response(e: &SRSystemError) -> HttpResponse {
    match e {
        SRSystemError::Validation(msg) => HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::IncompleteSubmission, msg.clone()),
        ),
        SRSystemError::InvalidTransition(msg) => HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::InvalidTransition, msg.clone()),
        ),
        SRSystemError::Authorization(msg) => HttpResponse::Forbidden().json(
            ApiResponse::error_empty(ErrorCode::PackagePermissionDenied, msg.clone()),
        ),
        SRSystemError::PackageLocked(msg) => HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::PackageLocked, msg.clone()),
        ),
        SRSystemError::ConcurrentModification(msg) => HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::ConcurrentModification, msg.clone()),
        ),
        SRSystemError::NotFound(msg) => HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PackageNotFound,
            msg.clone(),
        )),
        other => {
            error!("Workflow operation failed: {}", other);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "服务器内部错误",
            ))
        }
    }
}

/// 加载审批执行者上下文
///
/// 失败时直接给出可返回的 HTTP 响应，调用方原样返回。
pub(crate) async fn load_actor(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
) -> Result<ActorContext, HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    match storage.get_actor_context(user_id).await {
        Ok(Some(actor)) => Ok(actor),
        Ok(None) => Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "账号不存在",
        ))),
        Err(e) => {
            error!("Failed to load actor context: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "服务器内部错误",
                )),
            )
        }
    }
}
