pub use super::approval_history::Entity as ApprovalHistory;
pub use super::attendance_records::Entity as AttendanceRecords;
pub use super::enrollments::Entity as Enrollments;
pub use super::grade_components::Entity as GradeComponents;
pub use super::notifications::Entity as Notifications;
pub use super::quarter_packages::Entity as QuarterPackages;
pub use super::sections::Entity as Sections;
pub use super::student_feedback::Entity as StudentFeedback;
pub use super::students::Entity as Students;
pub use super::subjects::Entity as Subjects;
pub use super::users::Entity as Users;
