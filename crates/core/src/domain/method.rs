use std::fmt;

/// HTTP verbs the gateway understands. Everything else collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileMethod {
    Get,
    Head,
    Put,
    Patch,
    Delete,
    Other,
}

impl FileMethod {
    /// Method names are case-sensitive, as in HTTP.
    pub fn from_name(name: &str) -> Self {
        match name {
            "GET" => Self::Get,
            "HEAD" => Self::Head,
            "PUT" => Self::Put,
            "PATCH" => Self::Patch,
            "DELETE" => Self::Delete,
            _ => Self::Other,
        }
    }

    /// PUT and PATCH must see the whole request body before touching disk.
    pub fn needs_body(self) -> bool {
        matches!(self, Self::Put | Self::Patch)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for FileMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
