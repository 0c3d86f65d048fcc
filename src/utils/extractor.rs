use actix_web::{
    FromRequest, HttpRequest, HttpResponse,
    dev::Payload,
    error::InternalError,
};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 定义安全的路径 ID 提取器
///
/// 路径参数必须是正整数，否则直接以统一响应格式返回 400，
/// 不进入业务处理。
macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal, $label:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let raw = req.match_info().query($param);
                let parsed = raw.parse::<i64>().ok().filter(|id| *id > 0);
                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => {
                        let resp = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::BadRequest,
                            format!("无效的{}ID: '{raw}'", $label),
                        ));
                        Err(InternalError::from_response(
                            format!("invalid path parameter '{}'", $param),
                            resp,
                        )
                        .into())
                    }
                })
            }
        }
    };
}

define_safe_id_extractor!(SafePackageIdI64, "id", "成绩包");
