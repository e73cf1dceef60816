//! Handler types and dependencies

use std::sync::Arc;

use crate::ocr::Ocr;
use crate::settings::Settings;
use crate::verification::VerificationSink;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
///
/// All fields are immutable shared state; handlers never mutate them, so the
/// dispatcher can clone this freely per branch.
#[derive(Clone)]
pub struct HandlerDeps {
    pub settings: Arc<Settings>,
    pub ocr: Arc<dyn Ocr>,
    pub verification: Arc<dyn VerificationSink>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(settings: Arc<Settings>, ocr: Arc<dyn Ocr>, verification: Arc<dyn VerificationSink>) -> Self {
        Self {
            settings,
            ocr,
            verification,
        }
    }
}
