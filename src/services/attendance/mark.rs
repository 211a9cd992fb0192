use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{
        requests::{AttendanceEntry, MarkAttendanceRequest},
        responses::MarkAttendanceResponse,
    },
};
use crate::services::courses::can_manage_course;
use crate::services::realtime;
use crate::utils::validate::validate_date;

/// 去重后的待校验学号，保持首次出现的顺序
fn distinct_student_ids(entries: &[AttendanceEntry]) -> Vec<i64> {
    let mut seen = std::collections::HashSet::new();
    entries
        .iter()
        .map(|e| e.student_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

pub async fn mark_attendance(
    service: &AttendanceService,
    mark_request: MarkAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    if let Err(msg) = validate_date(&mark_request.date) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    if mark_request.entries.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Attendance entries must not be empty",
        )));
    }

    let course = match storage.get_course_by_id(mark_request.course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to mark attendance: {e}"),
                )),
            );
        }
    };

    // 只有授课教师和管理员能点名
    match can_manage_course(&storage, &user, &course).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::CoursePermissionDenied,
                "You can only mark attendance for courses you teach",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to mark attendance: {e}"),
                )),
            );
        }
    }

    // 先整体校验学号，避免写到一半才发现学生不存在
    for student_id in distinct_student_ids(&mark_request.entries) {
        match storage.get_student_by_id(student_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::StudentNotFound,
                    format!("Student {student_id} not found"),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to mark attendance: {e}"),
                    )),
                );
            }
        }
    }

    // 逐条幂等写入，重复点名覆盖旧状态
    let mut marked = 0i64;
    let mut updated = 0i64;
    for entry in &mark_request.entries {
        match storage
            .upsert_attendance(
                mark_request.course_id,
                entry.student_id,
                &mark_request.date,
                entry.status.clone(),
                user.id,
            )
            .await
        {
            Ok((_, true)) => marked += 1,
            Ok((_, false)) => updated += 1,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to mark attendance: {e}"),
                    )),
                );
            }
        }
    }

    // 广播到课程房间
    realtime::push_event_to_course(
        mark_request.course_id,
        "attendance_marked",
        serde_json::json!({
            "course_id": mark_request.course_id,
            "date": mark_request.date,
        }),
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MarkAttendanceResponse { marked, updated },
        "Attendance marked successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::AttendanceStatus;

    fn entry(student_id: i64) -> AttendanceEntry {
        AttendanceEntry {
            student_id,
            status: AttendanceStatus::Present,
        }
    }

    #[test]
    fn test_distinct_student_ids_dedups_and_keeps_order() {
        let entries = vec![entry(3), entry(1), entry(3), entry(2), entry(1)];
        assert_eq!(distinct_student_ids(&entries), vec![3, 1, 2]);
        assert!(distinct_student_ids(&[]).is_empty());
    }
}
