//! 响应写入。
//!
//! 所有响应都带 `Content-Type: text/plain`；仅 HEAD 成功时携带
//! 由元数据得到的 `Content-Length`。

use axum::{
    body::Body,
    http::{
        HeaderValue, StatusCode,
        header::{CONTENT_LENGTH, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use flatfs_core::GatewayError;

/// 写出纯文本响应。
pub fn text(status: StatusCode, body: impl Into<Body>) -> Response {
    (status, [(CONTENT_TYPE, HeaderValue::from_static("text/plain"))], body.into()).into_response()
}

/// HEAD 成功响应：只有头部，`Content-Length` 为文件大小，响应体为空。
pub fn head(size: u64) -> Response {
    (
        StatusCode::OK,
        [
            (
                CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (CONTENT_LENGTH, HeaderValue::from(size)),
        ],
        Body::empty(),
    )
        .into_response()
}

/// 将网关错误写成固定的状态码与正文。
pub fn failure(err: GatewayError) -> Response {
    let status =
        StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    text(status, err.body())
}
