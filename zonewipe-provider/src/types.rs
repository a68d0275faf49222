//! Cloudflare API 类型定义

use serde::Deserialize;

/// Cloudflare API 通用响应
#[derive(Debug, Deserialize)]
pub(crate) struct CloudflareResponse<T> {
    pub success: bool,
    pub result: Option<T>,
    pub errors: Option<Vec<ApiErrorBody>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub code: i64,
    pub message: String,
}

/// Cloudflare Zone 结构
#[derive(Debug, Clone, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub status: String,
}

/// `GET /user/tokens/verify` 的 result 字段
#[derive(Debug, Deserialize)]
pub(crate) struct TokenVerification {
    pub status: String,
}
