use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LauncherError>;

/// Everything that can go wrong between clicking Launch and the game
/// process starting.
#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("version {0} not found in the version manifest")]
    VersionNotFound(String),

    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("download url has no usable file name: {0}")]
    InvalidDownloadUrl(String),

    #[error("download failed after {attempts} attempts: {url}")]
    DownloadFailed { url: String, attempts: u32 },

    #[error("sign-in failed: {0}")]
    Auth(String),

    #[error("device code expired before sign-in completed")]
    AuthTimeout,

    #[error("no java runtime found (set JAVA_HOME or add java to PATH)")]
    JavaNotFound,

    #[error("path contains invalid unicode: {0}")]
    NonUtf8Path(PathBuf),
}
