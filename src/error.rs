use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    // Input validation errors
    #[error("Failed to parse date: {input}")]
    DateParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Month out of range")]
    MonthOutOfRange(#[from] chrono::OutOfRange),

    #[error("Unsupported locale: {locale}")]
    UnsupportedLocale { locale: String },

    #[error("Page {current_page} is outside 1..={total_pages}")]
    InvalidPageRange { current_page: u32, total_pages: u32 },

    #[error("Revenue data is empty")]
    EmptyRevenue,

    // IO-related errors
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read from stdin")]
    StdinRead(#[from] std::io::Error),

    // Data processing errors
    #[error("Failed to parse JSON: {context}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    // Environment-related errors
    #[error("Home directory not found")]
    HomeDirNotFound,

    // Async processing
    #[error("Task failed")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, DashError>;
