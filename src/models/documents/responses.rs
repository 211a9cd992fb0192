use super::entities::Document;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 上传结果响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/document.ts")]
pub struct DocumentUploadResponse {
    pub document: Document,
    pub download_url: String,
}

// 文档响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/document.ts")]
pub struct DocumentResponse {
    pub document: Document,
}

// 文档列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/document.ts")]
pub struct DocumentListResponse {
    pub items: Vec<Document>,
    pub pagination: PaginationInfo,
}
