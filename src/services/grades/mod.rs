pub mod aggregate;
pub mod list;
pub mod record;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grades::requests::{GradeListParams, RecordGradeRequest};
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
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

    // 录入/覆盖成绩分项
    pub async fn record_grade(
        &self,
        request: &HttpRequest,
        data: RecordGradeRequest,
    ) -> ActixResult<HttpResponse> {
        record::record_grade(self, request, data).await
    }

    // 查询成绩列表
    pub async fn list_grades(
        &self,
        request: &HttpRequest,
        params: GradeListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_grades(self, request, params).await
    }
}
