pub mod list;
pub mod record_day;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{AttendanceQueryParams, RecordAttendanceDayRequest};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    // 整班单日考勤录入
    pub async fn record_day(
        &self,
        request: &HttpRequest,
        data: RecordAttendanceDayRequest,
    ) -> ActixResult<HttpResponse> {
        record_day::record_day(self, request, data).await
    }

    // 查询某班某日考勤
    pub async fn list_day(
        &self,
        request: &HttpRequest,
        query: AttendanceQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_day(self, request, query).await
    }
}
