//! 文件操作路由。
//!
//! 每个请求按方法分发到一次文件存储操作：
//! GET 读取文件或列出目录，HEAD 查询大小，PUT 覆盖写入，
//! PATCH 追加写入，DELETE 删除。其他方法一律 404。

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    response::Response,
};
use flatfs_core::{
    FILE_DELETED, FILE_SAVED, FILE_UPDATED, FileMethod, GatewayError, ResolvedPath, StoreError,
};
use tracing::{debug, info, warn};

use super::body::{AccumulatedBody, accumulate};
use super::response;
use super::state::AppState;

/// 创建文件操作路由。
pub fn create_file_router() -> Router<Arc<AppState>> {
    // 任意方法、任意路径都进入同一个分发函数
    Router::new().fallback(dispatch)
}

async fn dispatch(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let method = FileMethod::from_name(request.method().as_str());
    let raw_path = request.uri().path().to_owned();

    let response = match handle(&state, method, &raw_path, request.into_body()).await {
        Ok(response) => response,
        Err(err) => response::failure(err),
    };

    info!(
        %method,
        path = %raw_path,
        status = response.status().as_u16(),
        "request handled"
    );
    response
}

async fn handle(
    state: &AppState,
    method: FileMethod,
    raw_path: &str,
    body: Body,
) -> Result<Response, GatewayError> {
    if method == FileMethod::Other {
        return Err(GatewayError::UnexpectedMethod);
    }

    let path = state.resolver.resolve(raw_path).inspect_err(|_| {
        warn!(%method, path = %raw_path, "rejected path outside root");
    })?;

    match method {
        FileMethod::Get => read(state, &path).await,
        FileMethod::Head => {
            let stat = state.store.stat(&path).await.map_err(store_failure)?;
            Ok(response::head(stat.size))
        }
        FileMethod::Put => {
            let body = receive(body).await?;
            state
                .store
                .write_file(&path, body.as_bytes())
                .await
                .map_err(store_failure)?;
            Ok(response::text(StatusCode::OK, FILE_SAVED))
        }
        FileMethod::Patch => {
            let body = receive(body).await?;
            state
                .store
                .append_file(&path, body.as_bytes())
                .await
                .map_err(store_failure)?;
            Ok(response::text(StatusCode::OK, FILE_UPDATED))
        }
        FileMethod::Delete => {
            state.store.remove_file(&path).await.map_err(store_failure)?;
            Ok(response::text(StatusCode::OK, FILE_DELETED))
        }
        FileMethod::Other => Err(GatewayError::UnexpectedMethod),
    }
}

/// 目录返回以换行分隔的条目名（无结尾换行），文件返回其内容。
async fn read(state: &AppState, path: &ResolvedPath) -> Result<Response, GatewayError> {
    let stat = state.store.stat_or_list(path).await.map_err(store_failure)?;

    if stat.is_directory {
        let listing = stat.entries.unwrap_or_default().join("\n");
        return Ok(response::text(StatusCode::OK, listing));
    }

    let contents = state.store.read_file(path).await.map_err(store_failure)?;
    Ok(response::text(StatusCode::OK, contents))
}

/// 等待请求体完整到达。读取中断视为写入失败，磁盘不会被触碰。
async fn receive(body: Body) -> Result<AccumulatedBody, GatewayError> {
    accumulate(body).await.map_err(|err| {
        warn!(error = %err, "failed to receive request body");
        GatewayError::WriteError
    })
}

fn store_failure(err: StoreError) -> GatewayError {
    match &err {
        StoreError::NotFound { .. } => debug!(error = ?err, "store lookup failed"),
        StoreError::Write { .. } => warn!(error = ?err, "store write failed"),
    }
    err.into()
}
