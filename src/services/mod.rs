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
pub mod realtime;
pub mod students;
pub mod system;
pub mod users;

pub use ai::AiService;
pub use assignments::AssignmentService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use documents::DocumentService;
pub use enrollments::EnrollmentService;
pub use faculty::FacultyService;
pub use fees::FeeService;
pub use grades::GradeService;
pub use notifications::NotificationService;
pub use students::StudentService;
pub use system::SystemService;
pub use users::UserService;
