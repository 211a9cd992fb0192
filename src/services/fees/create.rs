use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::{
    ApiResponse, ErrorCode,
    fees::requests::CreateFeeRequest,
    notifications::entities::{NotificationType, ReferenceType},
};
use crate::services::realtime;
use crate::storage::NewNotification;
use crate::utils::validate::validate_semester;

pub async fn create_fee(
    service: &FeeService,
    fee_data: CreateFeeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_semester(fee_data.semester) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    if fee_data.amount_due <= 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Amount due must be positive",
        )));
    }

    if fee_data.due_date <= chrono::Utc::now() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::DueDateInPast,
            "Due date must be in the future",
        )));
    }

    let student = match storage.get_student_by_id(fee_data.student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create fee: {e}"),
                )),
            );
        }
    };

    let fee = match storage.create_fee(fee_data).await {
        Ok(fee) => fee,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to create fee: {e}"),
                )),
            );
        }
    };

    // 通知学生缴费
    let notification = NewNotification {
        notification_type: NotificationType::FeeInvoice,
        title: format!("新缴费单：{}", fee.description),
        content: Some(format!(
            "应缴 {:.2}，截止 {}",
            fee.amount_due,
            fee.due_date.format("%Y-%m-%d")
        )),
        reference_type: Some(ReferenceType::Fee),
        reference_id: Some(fee.id),
    };
    match storage.create_notification(student.user_id, notification).await {
        Ok(saved) => realtime::push_notification_to_user(student.user_id, saved),
        Err(e) => tracing::warn!("Failed to create fee notification: {}", e),
    }

    Ok(HttpResponse::Created().json(ApiResponse::success(fee, "Fee created successfully")))
}
