pub mod ai;

pub mod assignments;

pub mod attendance;

pub mod auth;

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

pub mod ws;

pub use ai::configure_ai_routes;
pub use assignments::configure_assignment_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_course_routes;
pub use documents::configure_document_routes;
pub use enrollments::configure_enrollment_routes;
pub use faculty::configure_faculty_routes;
pub use fees::configure_fee_routes;
pub use grades::configure_grade_routes;
pub use notifications::configure_notification_routes;
pub use students::configure_student_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
pub use ws::configure_ws_routes;
