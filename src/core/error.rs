use thiserror::Error;

/// Centralized error types for the application
///
/// All errors in the application are converted to this enum for consistent error handling.
/// Uses `thiserror` for automatic error conversion and display formatting.
#[derive(Error, Debug)]
pub enum AppError {
    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File download errors (Telegram file API)
    #[error("Download error: {0}")]
    Download(#[from] teloxide::DownloadError),

    /// YAML parsing errors (ui_strings.yml, referrals.yml)
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// OCR errors (tesseract missing, timed out, or failed)
    #[error("OCR error: {0}")]
    Ocr(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
