//! 路径参数安全提取器
//!
//! 直接用 web::Path<i64> 时，非法输入会返回 actix 默认的错误页。
//! 这里统一解析并返回标准的 ApiResponse 错误体。

use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_param(param: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("路径参数 {param} 无效"),
    ));
    InternalError::from_response(format!("invalid path parameter: {param}"), response).into()
}

macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);
                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(bad_param($param)),
                })
            }
        }
    };
}

define_safe_id_extractor!(SafeIDI64, "id");
define_safe_id_extractor!(SafeStudentIdI64, "student_id");
define_safe_id_extractor!(SafeFacultyIdI64, "faculty_id");
define_safe_id_extractor!(SafeCourseIdI64, "course_id");
define_safe_id_extractor!(SafeEnrollmentIdI64, "enrollment_id");
define_safe_id_extractor!(SafeAttendanceIdI64, "attendance_id");
define_safe_id_extractor!(SafeAssignmentIdI64, "assignment_id");
define_safe_id_extractor!(SafeGradeIdI64, "grade_id");
define_safe_id_extractor!(SafeFeeIdI64, "fee_id");
define_safe_id_extractor!(SafeNotificationIdI64, "notification_id");

/// 文件下载令牌，UUID 格式
#[derive(Debug, Clone)]
pub struct SafeFileToken(pub String);

impl FromRequest for SafeFileToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = req
            .match_info()
            .get("token")
            .filter(|raw| {
                !raw.is_empty()
                    && raw.len() <= 64
                    && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            })
            .map(|raw| raw.to_string());
        ready(match token {
            Some(token) => Ok(SafeFileToken(token)),
            None => Err(bad_param("token")),
        })
    }
}
