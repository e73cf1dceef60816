//! Payment verification collaborator
//!
//! Where an extracted receipt code ends up is owned by the storage/transport
//! layer, not by this bot's core: the upstream flows (writing the code to
//! shared storage, confirming to the group) are specified elsewhere. The
//! router only decides *which* flow applies; this trait is the seam those
//! flows plug into.

use async_trait::async_trait;

use crate::core::error::AppResult;

/// Receiver for image-derived verification codes.
#[async_trait]
pub trait VerificationSink: Send + Sync {
    /// Handles a code extracted in a private chat.
    async fn record_private(&self, chat_id: i64, code: &str) -> AppResult<()>;

    /// Handles a code extracted in a group chat.
    async fn confirm_group(&self, chat_id: i64, code: &str) -> AppResult<()>;
}

/// Placeholder sink that only logs the code.
///
/// Stands in until a real storage-backed implementation is wired up.
pub struct LoggingVerificationSink;

#[async_trait]
impl VerificationSink for LoggingVerificationSink {
    async fn record_private(&self, chat_id: i64, code: &str) -> AppResult<()> {
        log::info!("Verification code '{}' received in private chat {}", code, chat_id);
        Ok(())
    }

    async fn confirm_group(&self, chat_id: i64, code: &str) -> AppResult<()> {
        log::info!("Verification code '{}' received in group chat {}", code, chat_id);
        Ok(())
    }
}
