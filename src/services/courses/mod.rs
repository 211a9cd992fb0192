pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::courses::entities::Course;
use crate::models::courses::requests::{CourseListParams, CreateCourseRequest, UpdateCourseRequest};
use crate::models::users::entities::{User, UserRole};
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

/// 当前用户是否有权管理该课程：管理员，或该课程的授课教师
pub(crate) async fn can_manage_course(
    storage: &Arc<dyn Storage>,
    user: &User,
    course: &Course,
) -> Result<bool> {
    match user.role {
        UserRole::Admin => Ok(true),
        UserRole::Faculty => {
            let faculty = storage.get_faculty_by_user_id(user.id).await?;
            Ok(matches!(
                (faculty, course.faculty_id),
                (Some(f), Some(fid)) if f.id == fid
            ))
        }
        UserRole::Student => Ok(false),
    }
}

impl CourseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 课程列表
    pub async fn list_courses(
        &self,
        query: CourseListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, query, request).await
    }

    // 创建课程
    pub async fn create_course(
        &self,
        course_data: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, course_data, request).await
    }

    // 课程详情（含授课教师与选课人数）
    pub async fn get_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_course(self, course_id, request).await
    }

    // 更新课程
    pub async fn update_course(
        &self,
        course_id: i64,
        update_data: UpdateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, course_id, update_data, request).await
    }

    // 删除课程
    pub async fn delete_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course(self, course_id, request).await
    }
}
