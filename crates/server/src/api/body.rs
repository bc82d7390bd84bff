//! 请求体累积。
//!
//! PUT 与 PATCH 必须在请求体完整接收后才能落盘，
//! 这里把数据流逐块读入同一个缓冲区，直到流结束。

use axum::body::Body;
use futures_util::StreamExt;
use tracing::debug;

/// 完整接收的请求体。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccumulatedBody {
    bytes: Vec<u8>,
    chunks: usize,
}

impl AccumulatedBody {
    /// 请求体内容。
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// 读取整个请求体。
///
/// 只有在数据流给出结束信号后才返回；没有大小上限，也没有超时。
/// 传输层出错时返回错误，此时不应进行任何写入。
pub async fn accumulate(body: Body) -> Result<AccumulatedBody, axum::Error> {
    let mut stream = body.into_data_stream();
    let mut accumulated = AccumulatedBody::default();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        accumulated.chunks += 1;
        accumulated.bytes.extend_from_slice(&chunk);
    }

    debug!(
        chunks = accumulated.chunks,
        bytes = accumulated.bytes.len(),
        "request body accumulated"
    );
    Ok(accumulated)
}
