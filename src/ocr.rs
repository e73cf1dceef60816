//! OCR collaborator
//!
//! The extraction engine only sees recognized text; this module supplies it.
//! [`TesseractOcr`] shells out to the `tesseract` binary, the same way the
//! bot would wrap any external recognizer. Handlers depend on the [`Ocr`]
//! trait, so tests can substitute a canned implementation without images.

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use crate::core::config;
use crate::core::error::{AppError, AppResult};

/// Text recognition over a downloaded image file.
#[async_trait]
pub trait Ocr: Send + Sync {
    async fn recognize(&self, image_path: &Path) -> AppResult<String>;
}

/// OCR via the `tesseract` command-line binary.
pub struct TesseractOcr {
    bin: String,
}

impl TesseractOcr {
    /// Creates an instance using the configured binary path.
    pub fn new() -> Self {
        Self {
            bin: config::TESSERACT_BIN.clone(),
        }
    }

    /// Creates an instance with an explicit binary path.
    pub fn with_binary(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Ocr for TesseractOcr {
    async fn recognize(&self, image_path: &Path) -> AppResult<String> {
        log::info!("Running OCR on {}", image_path.display());

        // `stdout` as the output base makes tesseract print the recognized
        // text instead of writing a .txt file next to the image
        let output = timeout(
            config::ocr::timeout(),
            TokioCommand::new(&self.bin).arg(image_path).arg("stdout").output(),
        )
        .await
        .map_err(|_| AppError::Ocr(format!("{} timed out after {}s", self.bin, config::ocr::TIMEOUT_SECONDS)))?
        .map_err(|e| AppError::Ocr(format!("Failed to start {}: {}", self.bin, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Ocr(format!(
                "{} exited with {}: {}",
                self.bin,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_binary_reports_ocr_error() {
        let ocr = TesseractOcr::with_binary("definitely-not-a-real-binary");
        let result = ocr.recognize(Path::new("image.jpg")).await;

        match result {
            Err(AppError::Ocr(msg)) => assert!(msg.contains("Failed to start")),
            other => panic!("expected Ocr error, got {:?}", other.map(|_| ())),
        }
    }
}
