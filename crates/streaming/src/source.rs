use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum SourceError {
    Unavailable { origin: String, reason: String },
    Status { origin: String, code: u16 },
    Io { path: PathBuf, source: std::io::Error },
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::Unavailable { origin, reason } => {
                write!(f, "geometry source {origin} unavailable: {reason}")
            }
            SourceError::Status { origin, code } => {
                write!(f, "geometry source {origin} answered status {code}")
            }
            SourceError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// Where boundary geometry comes from.
///
/// The transport is deliberately out of scope here: implementations range
/// from in-memory payloads (tests) to files (offline) to HTTP (the viewer
/// app). Fetching returns the raw payload text; decoding is a separate stage.
pub trait GeometrySource {
    /// Stable identifier for logs and error messages (URL, path, label).
    fn origin(&self) -> &str;

    fn fetch(&self) -> Result<String, SourceError>;
}

/// In-memory source for tests and embedded payloads.
#[derive(Debug, Clone)]
pub struct StaticSource {
    origin: String,
    payload: String,
}

impl StaticSource {
    pub fn new(origin: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            payload: payload.into(),
        }
    }
}

impl GeometrySource for StaticSource {
    fn origin(&self) -> &str {
        &self.origin
    }

    fn fetch(&self) -> Result<String, SourceError> {
        Ok(self.payload.clone())
    }
}

/// Local-file source for offline use.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    origin: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let origin = path.display().to_string();
        Self { path, origin }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GeometrySource for FileSource {
    fn origin(&self) -> &str {
        &self.origin
    }

    fn fetch(&self) -> Result<String, SourceError> {
        std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FileSource, GeometrySource, SourceError, StaticSource};

    #[test]
    fn static_source_returns_its_payload() {
        let source = StaticSource::new("inline", "{}");
        assert_eq!(source.origin(), "inline");
        assert_eq!(source.fetch().unwrap(), "{}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = FileSource::new("/nonexistent/boundaries.json");
        let err = source.fetch().unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("boundaries.json"));
    }
}
