use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::GatewayError;

/// How a request path is turned into a filesystem path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathPolicy {
    /// Root and request path are concatenated verbatim. `..` segments are kept,
    /// so a request can address anything the process can reach.
    #[default]
    Raw,
    /// The path is normalized and must stay under the canonical root.
    Confined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath(PathBuf);

impl ResolvedPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.display().fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    root: String,
    policy: PathPolicy,
}

impl PathResolver {
    pub fn new(root: impl Into<String>) -> Self {
        Self::with_policy(root, PathPolicy::Raw)
    }

    pub fn with_policy(root: impl Into<String>, policy: PathPolicy) -> Self {
        Self {
            root: root.into(),
            policy,
        }
    }

    pub fn resolve(&self, raw_path: &str) -> Result<ResolvedPath, GatewayError> {
        match self.policy {
            PathPolicy::Raw => Ok(ResolvedPath(PathBuf::from(format!(
                "{}{}",
                self.root, raw_path
            )))),
            PathPolicy::Confined => self.confine(raw_path),
        }
    }

    fn confine(&self, raw_path: &str) -> Result<ResolvedPath, GatewayError> {
        let mut segments: Vec<&str> = Vec::new();
        for segment in raw_path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if segments.pop().is_none() {
                        return Err(GatewayError::OutsideRoot);
                    }
                }
                other => segments.push(other),
            }
        }

        let mut resolved = PathBuf::from(&self.root);
        resolved.extend(segments);

        if !self.is_under_root(&resolved) {
            return Err(GatewayError::OutsideRoot);
        }
        Ok(ResolvedPath(resolved))
    }

    /// Canonicalizes the nearest existing ancestor, so a symlink pointing out of
    /// the root is caught even when the final component does not exist yet.
    fn is_under_root(&self, resolved: &Path) -> bool {
        let Ok(root) = Path::new(&self.root).canonicalize() else {
            return false;
        };

        let mut probe = resolved;
        loop {
            match probe.canonicalize() {
                Ok(canonical) => return canonical.starts_with(&root),
                Err(_) => match probe.parent() {
                    Some(parent) => probe = parent,
                    None => return false,
                },
            }
        }
    }
}
