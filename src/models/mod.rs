pub mod ai;
pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod common;
pub mod courses;
pub mod documents;
pub mod enrollments;
pub mod faculty;
pub mod fees;
pub mod grades;
pub mod notifications;
pub mod students;
pub mod system;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 应用启动时间，注入到 app data 供运行状态查询使用
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
