#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use flatfs_core::{FileStore, PathResolver, PathStat, ResolvedPath, StoreError};
use flatfs_server::{AppState, app};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Store that keeps everything in memory and records which operations ran.
#[derive(Clone, Default)]
pub struct RecordingStore {
    files: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingStore {
    pub fn with_file(path: &str, contents: &[u8]) -> Self {
        let store = Self::default();
        store
            .files
            .lock()
            .unwrap()
            .push((path.to_string(), contents.to_vec()));
        store
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn contents(&self, path: &str) -> Option<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, c)| c.clone())
    }

    fn record(&self, call: &str, path: &ResolvedPath) {
        self.calls.lock().unwrap().push(format!("{call} {path}"));
    }
}

#[async_trait]
impl FileStore for RecordingStore {
    async fn stat(&self, path: &ResolvedPath) -> Result<PathStat, StoreError> {
        self.record("stat", path);
        self.contents(&path.to_string())
            .map(|c| PathStat::file(c.len() as u64))
            .ok_or_else(|| StoreError::not_found(path, io::ErrorKind::NotFound.into()))
    }

    async fn list_directory(&self, path: &ResolvedPath) -> Result<Vec<String>, StoreError> {
        self.record("list", path);
        Err(StoreError::not_found(path, io::ErrorKind::NotFound.into()))
    }

    async fn read_file(&self, path: &ResolvedPath) -> Result<Vec<u8>, StoreError> {
        self.record("read", path);
        self.contents(&path.to_string())
            .ok_or_else(|| StoreError::not_found(path, io::ErrorKind::NotFound.into()))
    }

    async fn write_file(&self, path: &ResolvedPath, contents: &[u8]) -> Result<(), StoreError> {
        self.record("write", path);
        let mut files = self.files.lock().unwrap();
        files.retain(|(p, _)| *p != path.to_string());
        files.push((path.to_string(), contents.to_vec()));
        Ok(())
    }

    async fn append_file(&self, path: &ResolvedPath, contents: &[u8]) -> Result<(), StoreError> {
        self.record("append", path);
        let mut files = self.files.lock().unwrap();
        match files.iter_mut().find(|(p, _)| *p == path.to_string()) {
            Some((_, existing)) => existing.extend_from_slice(contents),
            None => files.push((path.to_string(), contents.to_vec())),
        }
        Ok(())
    }

    async fn remove_file(&self, path: &ResolvedPath) -> Result<(), StoreError> {
        self.record("remove", path);
        let mut files = self.files.lock().unwrap();
        let before = files.len();
        files.retain(|(p, _)| *p != path.to_string());
        if files.len() == before {
            return Err(StoreError::not_found(path, io::ErrorKind::NotFound.into()));
        }
        Ok(())
    }
}

pub fn recording_app(root: &str, store: RecordingStore) -> Router {
    app(AppState::new(PathResolver::new(root), Arc::new(store)))
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub async fn send(app: &Router, method: &str, uri: &str, body: impl Into<Body>) -> Reply {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body.into())
        .expect("request should build");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes()
        .to_vec();
    Reply {
        status,
        headers,
        body,
    }
}
