use thiserror::Error;

#[derive(Error, Debug)]
pub enum TckError {
    #[error("ticket '{0}' not found")]
    TicketNotFound(String),

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("invalid priority '{0}'")]
    InvalidPriority(String),

    #[error("invalid sort key '{0}'")]
    InvalidSortKey(String),

    #[error("not a ticket link: {0}")]
    InvalidLink(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TckError>;
