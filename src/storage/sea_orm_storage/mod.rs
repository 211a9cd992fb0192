//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod ai;
mod assignments;
mod attendance;
mod courses;
mod documents;
mod enrollments;
mod faculty;
mod fees;
mod grades;
mod notifications;
mod students;
mod users;

use crate::config::AppConfig;
use crate::errors::{CampusError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CampusError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CampusError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CampusError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CampusError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CampusError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
        entities::Notification, requests::NotificationListParams,
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
use crate::storage::{EntityCountSnapshot, NewNotification, Storage};
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, params: UserListParams) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(params).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<Student>> {
        self.get_student_by_user_id_impl(user_id).await
    }

    async fn get_student_by_roll_number(&self, roll_number: &str) -> Result<Option<Student>> {
        self.get_student_by_roll_number_impl(roll_number).await
    }

    async fn list_students_with_pagination(
        &self,
        params: StudentListParams,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(params).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 教职工模块
    async fn create_faculty(&self, faculty: CreateFacultyRequest) -> Result<FacultyMember> {
        self.create_faculty_impl(faculty).await
    }

    async fn get_faculty_by_id(&self, id: i64) -> Result<Option<FacultyMember>> {
        self.get_faculty_by_id_impl(id).await
    }

    async fn get_faculty_by_user_id(&self, user_id: i64) -> Result<Option<FacultyMember>> {
        self.get_faculty_by_user_id_impl(user_id).await
    }

    async fn get_faculty_by_employee_id(
        &self,
        employee_id: &str,
    ) -> Result<Option<FacultyMember>> {
        self.get_faculty_by_employee_id_impl(employee_id).await
    }

    async fn list_faculty_with_pagination(
        &self,
        params: FacultyListParams,
    ) -> Result<FacultyListResponse> {
        self.list_faculty_with_pagination_impl(params).await
    }

    async fn update_faculty(
        &self,
        id: i64,
        update: UpdateFacultyRequest,
    ) -> Result<Option<FacultyMember>> {
        self.update_faculty_impl(id, update).await
    }

    async fn delete_faculty(&self, id: i64) -> Result<bool> {
        self.delete_faculty_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(code).await
    }

    async fn get_course_detail(&self, id: i64) -> Result<Option<CourseDetail>> {
        self.get_course_detail_impl(id).await
    }

    async fn list_courses_with_pagination(
        &self,
        params: CourseListParams,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(params).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    // 选课模块
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(id).await
    }

    async fn get_enrollment(&self, student_id: i64, course_id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_impl(student_id, course_id).await
    }

    async fn create_enrollment(&self, student_id: i64, course_id: i64) -> Result<Enrollment> {
        self.create_enrollment_impl(student_id, course_id).await
    }

    async fn update_enrollment_status(
        &self,
        id: i64,
        status: EnrollmentStatus,
    ) -> Result<Option<Enrollment>> {
        self.update_enrollment_status_impl(id, status).await
    }

    async fn list_enrollments_with_pagination(
        &self,
        params: EnrollmentListParams,
    ) -> Result<EnrollmentListResponse> {
        self.list_enrollments_with_pagination_impl(params).await
    }

    async fn list_enrolled_user_ids(&self, course_id: i64) -> Result<Vec<i64>> {
        self.list_enrolled_user_ids_impl(course_id).await
    }

    async fn course_ids_for_user(&self, user_id: i64) -> Result<Vec<i64>> {
        self.course_ids_for_user_impl(user_id).await
    }

    // 考勤模块
    async fn upsert_attendance(
        &self,
        course_id: i64,
        student_id: i64,
        date: &str,
        status: AttendanceStatus,
        marked_by: i64,
    ) -> Result<(AttendanceRecord, bool)> {
        self.upsert_attendance_impl(course_id, student_id, date, status, marked_by)
            .await
    }

    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<AttendanceRecord>> {
        self.get_attendance_by_id_impl(id).await
    }

    async fn update_attendance_status(
        &self,
        id: i64,
        status: AttendanceStatus,
        marked_by: i64,
    ) -> Result<Option<AttendanceRecord>> {
        self.update_attendance_status_impl(id, status, marked_by)
            .await
    }

    async fn list_attendance_with_pagination(
        &self,
        params: AttendanceListParams,
    ) -> Result<AttendanceListResponse> {
        self.list_attendance_with_pagination_impl(params).await
    }

    async fn attendance_summary(&self, student_id: i64) -> Result<Vec<CourseAttendanceSummary>> {
        self.attendance_summary_impl(student_id).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        created_by: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(created_by, assignment).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, update).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        params: AssignmentListParams,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(params).await
    }

    // 成绩模块
    async fn record_grade(&self, graded_by: i64, grade: RecordGradeRequest) -> Result<Grade> {
        self.record_grade_impl(graded_by, grade).await
    }

    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>> {
        self.get_grade_by_id_impl(id).await
    }

    async fn update_grade(
        &self,
        id: i64,
        graded_by: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>> {
        self.update_grade_impl(id, graded_by, update).await
    }

    async fn list_grades_with_pagination(
        &self,
        params: GradeListParams,
    ) -> Result<GradeListResponse> {
        self.list_grades_with_pagination_impl(params).await
    }

    async fn grade_summary(&self, student_id: i64) -> Result<Vec<CourseGradeSummary>> {
        self.grade_summary_impl(student_id).await
    }

    // 缴费模块
    async fn create_fee(&self, fee: CreateFeeRequest) -> Result<Fee> {
        self.create_fee_impl(fee).await
    }

    async fn get_fee_by_id(&self, id: i64) -> Result<Option<Fee>> {
        self.get_fee_by_id_impl(id).await
    }

    async fn update_fee_payment(
        &self,
        id: i64,
        amount_paid: f64,
        status: FeeStatus,
        paid_at: Option<i64>,
    ) -> Result<Option<Fee>> {
        self.update_fee_payment_impl(id, amount_paid, status, paid_at)
            .await
    }

    async fn list_fees_with_pagination(&self, params: FeeListParams) -> Result<FeeListResponse> {
        self.list_fees_with_pagination_impl(params).await
    }

    async fn list_fees_by_student(&self, student_id: i64) -> Result<Vec<Fee>> {
        self.list_fees_by_student_impl(student_id).await
    }

    // 文档模块
    async fn create_document(
        &self,
        owner_id: i64,
        file_token: &str,
        file_name: &str,
        file_size: i64,
        content_type: &str,
        category: &str,
    ) -> Result<Document> {
        self.create_document_impl(
            owner_id,
            file_token,
            file_name,
            file_size,
            content_type,
            category,
        )
        .await
    }

    async fn get_document_by_id(&self, id: i64) -> Result<Option<Document>> {
        self.get_document_by_id_impl(id).await
    }

    async fn get_document_by_token(&self, token: &str) -> Result<Option<Document>> {
        self.get_document_by_token_impl(token).await
    }

    async fn list_documents_with_pagination(
        &self,
        params: DocumentListParams,
    ) -> Result<DocumentListResponse> {
        self.list_documents_with_pagination_impl(params).await
    }

    async fn delete_document(&self, id: i64) -> Result<bool> {
        self.delete_document_impl(id).await
    }

    // 通知模块
    async fn create_notification(
        &self,
        user_id: i64,
        notification: NewNotification,
    ) -> Result<Notification> {
        self.create_notification_impl(user_id, notification).await
    }

    async fn create_notifications_bulk(
        &self,
        user_ids: &[i64],
        notification: NewNotification,
    ) -> Result<u64> {
        self.create_notifications_bulk_impl(user_ids, notification)
            .await
    }

    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        params: NotificationListParams,
    ) -> Result<NotificationListResponse> {
        self.list_notifications_with_pagination_impl(user_id, params)
            .await
    }

    async fn mark_notification_read(&self, user_id: i64, notification_id: i64) -> Result<bool> {
        self.mark_notification_read_impl(user_id, notification_id)
            .await
    }

    async fn mark_all_notifications_read(&self, user_id: i64) -> Result<u64> {
        self.mark_all_notifications_read_impl(user_id).await
    }

    async fn count_unread_notifications(&self, user_id: i64) -> Result<i64> {
        self.count_unread_notifications_impl(user_id).await
    }

    // AI 模块
    async fn insert_chat_message(
        &self,
        user_id: i64,
        provider: &str,
        prompt: &str,
        response: &str,
        fallback: bool,
    ) -> Result<ChatMessage> {
        self.insert_chat_message_impl(user_id, provider, prompt, response, fallback)
            .await
    }

    async fn list_chat_history_with_pagination(
        &self,
        user_id: i64,
        params: ChatHistoryParams,
    ) -> Result<ChatHistoryResponse> {
        self.list_chat_history_with_pagination_impl(user_id, params)
            .await
    }

    async fn insert_ai_insight(
        &self,
        student_id: i64,
        analysis_type: &str,
        provider: &str,
        content: &str,
        fallback: bool,
        requested_by: i64,
    ) -> Result<AiInsight> {
        self.insert_ai_insight_impl(
            student_id,
            analysis_type,
            provider,
            content,
            fallback,
            requested_by,
        )
        .await
    }

    async fn list_ai_insights_with_pagination(
        &self,
        student_id: i64,
        params: InsightListParams,
    ) -> Result<InsightListResponse> {
        self.list_ai_insights_with_pagination_impl(student_id, params)
            .await
    }

    // 系统模块
    async fn entity_counts(&self) -> Result<EntityCountSnapshot> {
        self.entity_counts_impl().await
    }
}
