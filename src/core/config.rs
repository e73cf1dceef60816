use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the bot
/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Path to the UI strings file
/// Read from UI_STRINGS_PATH environment variable
/// Default: ui_strings.yml
pub static UI_STRINGS_PATH: Lazy<String> =
    Lazy::new(|| env::var("UI_STRINGS_PATH").unwrap_or_else(|_| "ui_strings.yml".to_string()));

/// Path to the referrals file
/// Read from REFERRALS_PATH environment variable
/// Default: referrals.yml
pub static REFERRALS_PATH: Lazy<String> =
    Lazy::new(|| env::var("REFERRALS_PATH").unwrap_or_else(|_| "referrals.yml".to_string()));

/// Directory where downloaded receipt photos are stored before OCR
/// Read from CONFIRMATIONS_DIR environment variable
/// Default: telebirr_confirmations
pub static CONFIRMATIONS_DIR: Lazy<String> =
    Lazy::new(|| env::var("CONFIRMATIONS_DIR").unwrap_or_else(|_| "telebirr_confirmations".to_string()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: logs/bot.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bot.log".to_string()));

/// Tesseract binary used for receipt OCR
/// Read once at startup from TESSERACT_BIN environment variable or defaults to "tesseract"
pub static TESSERACT_BIN: Lazy<String> =
    Lazy::new(|| env::var("TESSERACT_BIN").unwrap_or_else(|_| "tesseract".to_string()));

/// OCR configuration
pub mod ocr {
    use super::Duration;

    /// Maximum time a single tesseract invocation may take (in seconds)
    pub const TIMEOUT_SECONDS: u64 = 30;

    /// OCR timeout
    pub fn timeout() -> Duration {
        Duration::from_secs(TIMEOUT_SECONDS)
    }
}
