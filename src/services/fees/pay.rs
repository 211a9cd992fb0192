use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    fees::entities::{FeeStatus, derive_fee_status},
    fees::requests::PayFeeRequest,
    notifications::entities::{NotificationType, ReferenceType},
    users::entities::UserRole,
};
use crate::services::realtime;
use crate::storage::NewNotification;

pub async fn pay_fee(
    service: &FeeService,
    fee_id: i64,
    payment: PayFeeRequest,
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

    if payment.amount <= 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Payment amount must be positive",
        )));
    }

    let fee = match storage.get_fee_by_id(fee_id).await {
        Ok(Some(fee)) => fee,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FeeNotFound,
                "Fee not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to pay fee: {e}"),
                )),
            );
        }
    };

    // 学生只能缴自己的费用
    let student = match storage.get_student_by_id(fee.student_id).await {
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
                    format!("Failed to pay fee: {e}"),
                )),
            );
        }
    };
    if user.role == UserRole::Student && student.user_id != user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Students can only pay their own fees",
        )));
    }

    let new_paid = fee.amount_paid + payment.amount;
    if new_paid > fee.amount_due {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PaymentExceedsBalance,
            format!("Payment exceeds outstanding balance of {:.2}", fee.balance()),
        )));
    }

    let status = derive_fee_status(fee.amount_due, new_paid);
    let paid_at = if status == FeeStatus::Paid {
        Some(chrono::Utc::now().timestamp())
    } else {
        None
    };

    let updated = match storage.update_fee_payment(fee_id, new_paid, status, paid_at).await {
        Ok(Some(fee)) => fee,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FeeNotFound,
                "Fee not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to pay fee: {e}"),
                )),
            );
        }
    };

    // 缴费回执通知
    let notification = NewNotification {
        notification_type: NotificationType::FeePayment,
        title: format!("缴费成功：{}", updated.description),
        content: Some(format!(
            "本次缴纳 {:.2}，剩余 {:.2}",
            payment.amount,
            updated.balance()
        )),
        reference_type: Some(ReferenceType::Fee),
        reference_id: Some(updated.id),
    };
    match storage.create_notification(student.user_id, notification).await {
        Ok(saved) => realtime::push_notification_to_user(student.user_id, saved),
        Err(e) => tracing::warn!("Failed to create payment notification: {}", e),
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(updated, "Payment recorded successfully")))
}
