use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("not initialized: no folio.yaml found at the site root")]
    NotInitialized,

    #[error("invalid slug '{0}': must be non-empty with no '/' or control characters")]
    InvalidSlug(String),

    #[error("unknown image slot: {0}")]
    InvalidImageSlot(String),

    #[error("project not found: {0}")]
    ProjectNotFound(String),

    #[error("content store unreachable: {0}")]
    ContentTransport(String),

    #[error("content query failed with status {status}: {body}")]
    ContentQuery { status: u16, body: String },

    #[error("invalid asset reference: {0}")]
    InvalidAssetRef(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FolioError {
    fn from(err: reqwest::Error) -> Self {
        FolioError::ContentTransport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
