pub mod attendance;
pub mod common;
pub mod feedback;
pub mod grades;
pub mod notifications;
pub mod packages;
pub mod sections;
pub mod system;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

// 程序启动时间，用于 /system/status 的运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
