use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AiService;
use super::providers;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    ai::{
        requests::{InsightListParams, InsightRequest},
        responses::InsightResponse,
    },
};

const ANALYSIS_TYPES: &[&str] = &["performance", "attendance"];

// 上游不可用时的兜底文案
const INSIGHT_FALLBACK: &str =
    "学情分析服务暂时不可用。请根据成绩与考勤汇总数据自行评估，或稍后重试。";

pub async fn generate_insight(
    service: &AiService,
    insight_data: InsightRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    if !ANALYSIS_TYPES.contains(&insight_data.analysis_type.as_str()) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Analysis type must be one of: performance, attendance",
        )));
    }

    let student = match storage.get_student_by_id(insight_data.student_id).await {
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
                    format!("Failed to generate insight: {e}"),
                )),
            );
        }
    };

    // 用成绩和考勤汇总拼装提示词
    let prompt = match build_prompt(&storage, &student, &insight_data.analysis_type).await {
        Ok(prompt) => prompt,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to generate insight: {e}"),
                )),
            );
        }
    };

    let provider_name = super::provider_name(&insight_data.provider);
    let provider = match providers::resolve(&provider_name) {
        Ok(provider) => provider,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("Unknown AI provider: {provider_name}"),
            )));
        }
    };

    let (content, fallback) = match provider.complete(&prompt).await {
        Ok(content) => (content, false),
        Err(e) => {
            tracing::warn!("AI provider {} unavailable: {}", provider_name, e);
            (INSIGHT_FALLBACK.to_string(), true)
        }
    };

    match storage
        .insert_ai_insight(
            student.id,
            &insight_data.analysis_type,
            &provider_name,
            &content,
            fallback,
            user_id,
        )
        .await
    {
        Ok(insight) => Ok(HttpResponse::Created().json(ApiResponse::success(
            InsightResponse { insight },
            "Insight generated successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to persist insight: {e}"),
            )),
        ),
    }
}

async fn build_prompt(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    student: &crate::models::students::entities::Student,
    analysis_type: &str,
) -> crate::errors::Result<String> {
    let mut prompt = format!(
        "你是一名教务分析助手。请针对学号 {} 的学生给出简明的{}分析与改进建议。\n",
        student.roll_number,
        if analysis_type == "attendance" {
            "出勤"
        } else {
            "学业表现"
        }
    );

    if analysis_type == "attendance" {
        let courses = storage.attendance_summary(student.id).await?;
        for course in &courses {
            prompt.push_str(&format!(
                "- {}（{}）：{} 次课到课 {} 次，出勤率 {:.2}%\n",
                course.course_name,
                course.course_code,
                course.total_classes,
                course.attended,
                course.percentage
            ));
        }
        if courses.is_empty() {
            prompt.push_str("（暂无考勤记录）\n");
        }
    } else {
        let courses = storage.grade_summary(student.id).await?;
        for course in &courses {
            prompt.push_str(&format!(
                "- {}（{}）：{} 条成绩，平均得分率 {:.2}%，等第 {}\n",
                course.course_name,
                course.course_code,
                course.grade_count,
                course.average_percentage,
                course.letter_grade
            ));
        }
        if courses.is_empty() {
            prompt.push_str("（暂无成绩记录）\n");
        }
    }

    Ok(prompt)
}

pub async fn list_insights(
    service: &AiService,
    student_id: i64,
    query: InsightListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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
                    format!("Failed to retrieve insights: {e}"),
                )),
            );
        }
    }

    match storage
        .list_ai_insights_with_pagination(student_id, query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Insight list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve insights: {e}"),
            )),
        ),
    }
}
