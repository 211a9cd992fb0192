use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::{fs::File, path::Path};
use uuid::Uuid;

use super::DocumentService;
use crate::config::AppConfig;
use crate::errors::CampusError;
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::models::{ApiResponse, documents::responses::DocumentUploadResponse};
use crate::utils::validate_magic_bytes;

/// 扩展名白名单比较，配置项带不带前导点都接受
fn extension_allowed(allowed_types: &[String], extension: &str) -> bool {
    let ext = extension.trim_start_matches('.');
    if ext.is_empty() {
        return false;
    }
    allowed_types
        .iter()
        .any(|t| t.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

pub async fn handle_upload(
    service: &DocumentService,
    req: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let upload_dir = &config.upload.dir;
    let max_size = config.upload.max_size;
    let allowed_types = &config.upload.allowed_types;

    // 确保上传目录存在
    if !Path::new(upload_dir).exists()
        && let Err(e) = fs::create_dir_all(upload_dir)
    {
        tracing::error!("{}", CampusError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::FileUploadFailed,
                "创建上传目录失败",
            )),
        );
    }

    // 文件相关信息
    let mut file_name = String::new();
    let mut file_size: i64 = 0;
    let mut file_uploaded = false;
    let mut content_type = String::new();
    let mut file_token = String::new();
    let mut category = String::from("general");

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name == "category" {
            let mut buf = Vec::new();
            while let Some(chunk) = field.next().await {
                buf.extend_from_slice(&chunk?);
            }
            if let Ok(value) = String::from_utf8(buf)
                && !value.trim().is_empty()
            {
                category = value.trim().to_string();
            }
            continue;
        }

        if name == "file" {
            if file_uploaded {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Only one file can be uploaded at a time",
                )));
            }
            file_uploaded = true;

            // 先获取原始文件名
            file_name = content_disposition
                .and_then(|cd| cd.get_filename())
                .map(|s| s.to_string())
                .unwrap_or_default();

            // 提取扩展名并校验
            let extension = Path::new(&file_name)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| format!(".{}", ext.to_lowercase()))
                .unwrap_or_default();

            if !extension_allowed(allowed_types, &extension) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileTypeNotAllowed,
                    "File type not allowed",
                )));
            }

            // MIME 类型只作记录，不作校验依据
            content_type = field
                .content_type()
                .map(|ct| ct.to_string())
                .unwrap_or_default();

            file_token = Uuid::new_v4().to_string();
            let file_path = format!("{upload_dir}/{file_token}.bin");
            let mut f = match File::create(&file_path) {
                Ok(file) => file,
                Err(e) => {
                    tracing::error!("{}", CampusError::file_operation(format!("{e}")));
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::<()>::error_empty(ErrorCode::FileUploadFailed, "文件创建失败"),
                    ));
                }
            };

            let mut total_size: usize = 0;
            let mut first_chunk = true;
            while let Some(chunk) = field.next().await {
                let data = chunk?;

                // 第一个 chunk 时验证魔术字节
                if first_chunk {
                    first_chunk = false;
                    if !validate_magic_bytes(&data, &extension) {
                        let _ = fs::remove_file(&file_path);
                        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::FileTypeNotAllowed,
                            "文件内容与扩展名不匹配",
                        )));
                    }
                }

                total_size += data.len();
                // 校验大小
                if total_size > max_size {
                    let _ = fs::remove_file(&file_path);
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileSizeExceeded,
                        "File size exceeds the limit",
                    )));
                }
                f.write_all(&data)?;
            }
            file_size = total_size as i64;
        }
    }

    if !file_uploaded {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "No file found in upload payload",
        )));
    }

    let storage = service.get_storage(req);

    let user_id = match RequireJWT::extract_user_id(req) {
        Some(id) => id,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                    ErrorCode::Unauthorized,
                    "用户未登录",
                )),
            );
        }
    };

    match storage
        .create_document(
            user_id,
            &file_token,
            &file_name,
            file_size,
            &content_type,
            &category,
        )
        .await
    {
        Ok(document) => {
            let response = DocumentUploadResponse {
                download_url: format!("/api/v1/documents/{}/download", document.file_token),
                document,
            };
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(response, "Document uploaded successfully")))
        }
        Err(e) => {
            // 元数据落库失败时清理孤儿文件
            let _ = fs::remove_file(format!("{upload_dir}/{file_token}.bin"));
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::FileUploadFailed,
                    format!("Failed to upload document: {e}"),
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::extension_allowed;

    fn types(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extension_allowed_ignores_leading_dots() {
        let dotted = types(&[".pdf", ".png"]);
        let bare = types(&["pdf", "png"]);
        assert!(extension_allowed(&dotted, ".pdf"));
        assert!(extension_allowed(&bare, ".pdf"));
        assert!(extension_allowed(&bare, "pdf"));
        assert!(extension_allowed(&dotted, ".PNG"));
    }

    #[test]
    fn test_extension_allowed_rejects_unlisted_and_missing() {
        let bare = types(&["pdf", "png"]);
        assert!(!extension_allowed(&bare, ".exe"));
        assert!(!extension_allowed(&bare, ""));
        assert!(!extension_allowed(&bare, "."));
    }
}
