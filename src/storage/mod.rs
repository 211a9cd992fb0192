use std::sync::Arc;

use crate::models::{
    ai::{
        entities::{AiInsight, ChatMessage},
        requests::{ChatHistoryParams, InsightListParams},
        responses::{ChatHistoryResponse, InsightListResponse},
    },
    assignments::{
        entities::Assignment,
        requests::{AssignmentListParams, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    attendance::{
        entities::{AttendanceRecord, AttendanceStatus, CourseAttendanceSummary},
        requests::AttendanceListParams,
        responses::AttendanceListResponse,
    },
    courses::{
        entities::{Course, CourseDetail},
        requests::{CourseListParams, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    documents::{
        entities::Document, requests::DocumentListParams, responses::DocumentListResponse,
    },
    enrollments::{
        entities::{Enrollment, EnrollmentStatus},
        requests::EnrollmentListParams,
        responses::EnrollmentListResponse,
    },
    faculty::{
        entities::FacultyMember,
        requests::{CreateFacultyRequest, FacultyListParams, UpdateFacultyRequest},
        responses::FacultyListResponse,
    },
    fees::{
        entities::{Fee, FeeStatus},
        requests::{CreateFeeRequest, FeeListParams},
        responses::FeeListResponse,
    },
    grades::{
        entities::{CourseGradeSummary, Grade},
        requests::{GradeListParams, RecordGradeRequest, UpdateGradeRequest},
        responses::GradeListResponse,
    },
    notifications::{
        entities::{Notification, NotificationType, ReferenceType},
        requests::NotificationListParams,
        responses::NotificationListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListParams},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 新建通知的载荷，单发和批量投递共用
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub notification_type: NotificationType,
    pub title: String,
    pub content: Option<String>,
    pub reference_type: Option<ReferenceType>,
    pub reference_id: Option<i64>,
}

/// 各业务表行数，运行状态接口使用
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityCountSnapshot {
    pub users: u64,
    pub students: u64,
    pub faculty: u64,
    pub courses: u64,
    pub enrollments: u64,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 用户总数，用于启动时判断是否需要初始化管理员
    async fn count_users(&self) -> Result<u64>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, params: UserListParams) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;

    /// 学生档案方法
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>>;
    async fn get_student_by_roll_number(&self, roll_number: &str) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        params: StudentListParams,
    ) -> Result<StudentListResponse>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 教职工档案方法
    async fn create_faculty(&self, faculty: CreateFacultyRequest) -> Result<FacultyMember>;
    async fn get_faculty_by_id(&self, id: i64) -> Result<Option<FacultyMember>>;
    async fn get_faculty_by_user_id(&self, user_id: i64) -> Result<Option<FacultyMember>>;
    async fn get_faculty_by_employee_id(&self, employee_id: &str)
    -> Result<Option<FacultyMember>>;
    async fn list_faculty_with_pagination(
        &self,
        params: FacultyListParams,
    ) -> Result<FacultyListResponse>;
    async fn update_faculty(
        &self,
        id: i64,
        update: UpdateFacultyRequest,
    ) -> Result<Option<FacultyMember>>;
    async fn delete_faculty(&self, id: i64) -> Result<bool>;

    /// 课程方法
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>>;
    async fn get_course_detail(&self, id: i64) -> Result<Option<CourseDetail>>;
    async fn list_courses_with_pagination(
        &self,
        params: CourseListParams,
    ) -> Result<CourseListResponse>;
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 选课方法
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    async fn get_enrollment(&self, student_id: i64, course_id: i64) -> Result<Option<Enrollment>>;
    async fn create_enrollment(&self, student_id: i64, course_id: i64) -> Result<Enrollment>;
    async fn update_enrollment_status(
        &self,
        id: i64,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>>;
    async fn list_enrollments_with_pagination(
        &self,
        params: EnrollmentListParams,
    ) -> Result<EnrollmentListResponse>;
    // 在读学生对应的用户ID，用于课程广播通知
    async fn list_enrolled_user_ids(&self, course_id: i64) -> Result<Vec<i64>>;
    // 用户相关的课程ID（已选 + 所授），用于 WebSocket 课程房间
    async fn course_ids_for_user(&self, user_id: i64) -> Result<Vec<i64>>;

    /// 考勤方法
    // 按课程+学生+日期幂等写入，返回 (记录, 是否新建)
    async fn upsert_attendance(
        &self,
        course_id: i64,
        student_id: i64,
        date: &str,
        status: AttendanceStatus,
        marked_by: i64,
    ) -> Result<(AttendanceRecord, bool)>;
    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<AttendanceRecord>>;
    async fn update_attendance_status(
        &self,
        id: i64,
        status: AttendanceStatus,
        marked_by: i64,
    ) -> Result<Option<AttendanceRecord>>;
    async fn list_attendance_with_pagination(
        &self,
        params: AttendanceListParams,
    ) -> Result<AttendanceListResponse>;
    // 学生各课程的出勤汇总
    async fn attendance_summary(&self, student_id: i64) -> Result<Vec<CourseAttendanceSummary>>;

    /// 作业方法
    async fn create_assignment(
        &self,
        created_by: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    async fn delete_assignment(&self, id: i64) -> Result<bool>;
    async fn list_assignments_with_pagination(
        &self,
        params: AssignmentListParams,
    ) -> Result<AssignmentListResponse>;

    /// 成绩方法
    async fn record_grade(&self, graded_by: i64, grade: RecordGradeRequest) -> Result<Grade>;
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    async fn update_grade(
        &self,
        id: i64,
        graded_by: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>>;
    async fn list_grades_with_pagination(
        &self,
        params: GradeListParams,
    ) -> Result<GradeListResponse>;
    // 学生各课程的平均得分率
    async fn grade_summary(&self, student_id: i64) -> Result<Vec<CourseGradeSummary>>;

    /// 缴费方法
    async fn create_fee(&self, fee: CreateFeeRequest) -> Result<Fee>;
    async fn get_fee_by_id(&self, id: i64) -> Result<Option<Fee>>;
    // 覆盖已缴金额与状态，paid_at 只在缴清时写入
    async fn update_fee_payment(
        &self,
        id: i64,
        amount_paid: f64,
        status: FeeStatus,
        paid_at: Option<i64>,
    ) -> Result<Option<Fee>>;
    async fn list_fees_with_pagination(&self, params: FeeListParams) -> Result<FeeListResponse>;
    // 学生的全部缴费单，用于余额汇总
    async fn list_fees_by_student(&self, student_id: i64) -> Result<Vec<Fee>>;

    /// 文档方法
    async fn create_document(
        &self,
        owner_id: i64,
        file_token: &str,
        file_name: &str,
        file_size: i64,
        content_type: &str,
        category: &str,
    ) -> Result<Document>;
    async fn get_document_by_id(&self, id: i64) -> Result<Option<Document>>;
    async fn get_document_by_token(&self, token: &str) -> Result<Option<Document>>;
    async fn list_documents_with_pagination(
        &self,
        params: DocumentListParams,
    ) -> Result<DocumentListResponse>;
    async fn delete_document(&self, id: i64) -> Result<bool>;

    /// 通知方法
    async fn create_notification(
        &self,
        user_id: i64,
        notification: NewNotification,
    ) -> Result<Notification>;
    // 给多个用户投递同一条通知
    async fn create_notifications_bulk(
        &self,
        user_ids: &[i64],
        notification: NewNotification,
    ) -> Result<u64>;
    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        params: NotificationListParams,
    ) -> Result<NotificationListResponse>;
    async fn mark_notification_read(&self, user_id: i64, notification_id: i64) -> Result<bool>;
    async fn mark_all_notifications_read(&self, user_id: i64) -> Result<u64>;
    async fn count_unread_notifications(&self, user_id: i64) -> Result<i64>;

    /// AI 方法
    async fn insert_chat_message(
        &self,
        user_id: i64,
        provider: &str,
        prompt: &str,
        response: &str,
        fallback: bool,
    ) -> Result<ChatMessage>;
    async fn list_chat_history_with_pagination(
        &self,
        user_id: i64,
        params: ChatHistoryParams,
    ) -> Result<ChatHistoryResponse>;
    async fn insert_ai_insight(
        &self,
        student_id: i64,
        analysis_type: &str,
        provider: &str,
        content: &str,
        fallback: bool,
        requested_by: i64,
    ) -> Result<AiInsight>;
    async fn list_ai_insights_with_pagination(
        &self,
        student_id: i64,
        params: InsightListParams,
    ) -> Result<InsightListResponse>;

    /// 系统方法
    async fn entity_counts(&self) -> Result<EntityCountSnapshot>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
