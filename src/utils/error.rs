use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("request for service data failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("service data endpoint returned status {status}")]
    Status { status: u16 },

    #[error("service data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
