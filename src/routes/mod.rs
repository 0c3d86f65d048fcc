pub mod attendance;

pub mod feedback;

pub mod grades;

pub mod packages;

pub mod system;

pub use attendance::configure_attendance_routes;
pub use feedback::configure_feedback_routes;
pub use grades::configure_grades_routes;
pub use packages::configure_packages_routes;
pub use system::configure_system_routes;
