pub mod attendance;
pub mod feedback;
pub mod grades;
pub mod notifications;
pub mod packages;
pub mod system;

pub use attendance::AttendanceService;
pub use feedback::FeedbackService;
pub use grades::GradeService;
pub use packages::PackageService;
pub use system::SystemService;
