//! 预导入模块，方便使用

pub use super::ai_analytics::{
    ActiveModel as AiAnalyticsActiveModel, Entity as AiAnalytics, Model as AiAnalyticsModel,
};
pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::attendance::{
    ActiveModel as AttendanceActiveModel, Entity as Attendance, Model as AttendanceModel,
};
pub use super::chat_history::{
    ActiveModel as ChatHistoryActiveModel, Entity as ChatHistory, Model as ChatHistoryModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::documents::{
    ActiveModel as DocumentActiveModel, Entity as Documents, Model as DocumentModel,
};
pub use super::enrollments::{
    ActiveModel as EnrollmentActiveModel, Entity as Enrollments, Model as EnrollmentModel,
};
pub use super::faculty::{
    ActiveModel as FacultyActiveModel, Entity as Faculty, Model as FacultyModel,
};
pub use super::fees::{ActiveModel as FeeActiveModel, Entity as Fees, Model as FeeModel};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
