use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    fees::responses::{FeeSummaryResponse, FeeView},
    users::entities::UserRole,
};

pub async fn fee_summary(
    service: &FeeService,
    student_id: i64,
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

    // 学生只能查自己的汇总
    if user.role == UserRole::Student {
        match storage.get_student_by_user_id(user.id).await {
            Ok(Some(own)) if own.id == student_id => {}
            Ok(_) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "Students can only view their own fee summary",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to retrieve fee summary: {e}"),
                    )),
                );
            }
        }
    }

    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
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
                    format!("Failed to retrieve fee summary: {e}"),
                )),
            );
        }
    }

    match storage.list_fees_by_student(student_id).await {
        Ok(fees) => {
            let now = chrono::Utc::now();
            let total_due: f64 = fees.iter().map(|f| f.amount_due).sum();
            let total_paid: f64 = fees.iter().map(|f| f.amount_paid).sum();
            let balance: f64 = fees.iter().map(|f| f.balance()).sum();

            let items: Vec<FeeView> = fees
                .into_iter()
                .map(|fee| {
                    let overdue = fee.is_overdue(now);
                    FeeView { fee, overdue }
                })
                .collect();
            let overdue_count = items.iter().filter(|v| v.overdue).count() as i64;

            let response = FeeSummaryResponse {
                student_id,
                total_due,
                total_paid,
                balance,
                overdue_count,
                items,
            };

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Fee summary retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve fee summary: {e}"),
            )),
        ),
    }
}
