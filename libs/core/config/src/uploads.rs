use crate::{env_or_default, ConfigError, FromEnv};

/// Configuration for uploaded point photos.
///
/// The API stores only filenames; files live in a local directory that is
/// served statically under `/uploads`. Responses carry absolute URLs built
/// from `base_url`, so clients never have to know where files are mounted.
#[derive(Clone, Debug)]
pub struct UploadsConfig {
    /// Local directory the static file service reads from
    pub dir: String,
    /// Public base URL prefixed to stored filenames
    pub base_url: String,
}

impl UploadsConfig {
    pub fn new(dir: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_url: base_url.into(),
        }
    }

    /// Build the absolute URL for a stored filename.
    pub fn image_url(&self, filename: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), filename)
    }
}

impl FromEnv for UploadsConfig {
    /// Reads from environment variables with sensible defaults:
    /// - UPLOADS_DIR: defaults to "uploads"
    /// - UPLOADS_BASE_URL: defaults to "http://localhost:8080/uploads"
    fn from_env() -> Result<Self, ConfigError> {
        let dir = env_or_default("UPLOADS_DIR", "uploads");
        let base_url = env_or_default("UPLOADS_BASE_URL", "http://localhost:8080/uploads");

        Ok(Self { dir, base_url })
    }
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: "uploads".to_string(),
            base_url: "http://localhost:8080/uploads".to_string(),
        }
    }
}
