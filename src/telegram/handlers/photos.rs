//! Photographed receipt handling
//!
//! Downloads the incoming photo, runs OCR, and feeds the recognized text to
//! the extraction engine. When a receipt is recognized, the extracted code is
//! handed to the verification collaborator (private or group flow, depending
//! on the chat) and the record is echoed back to the user; otherwise the raw
//! OCR text is echoed, as the original flow did.

use std::path::PathBuf;

use chrono::Utc;
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::Message;

use super::messages::perform;
use super::types::HandlerDeps;
use super::chat_kind;
use crate::core::config;
use crate::core::error::{AppError, AppResult};
use crate::receipt;
use crate::router::verification_action;

/// Handles an incoming photo message end to end.
pub async fn handle_photo_message(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> AppResult<()> {
    log::info!("Responding to photo message from chat {}", msg.chat.id);

    let image_path = download_largest_photo(bot, msg).await?;
    let text = deps.ocr.recognize(&image_path).await?;

    match receipt::extract(&text) {
        Some(record) => {
            log::info!("Extracted transaction from photo in chat {}: {}", msg.chat.id, record);

            let code = record.code.as_deref().unwrap_or_default();
            let action = verification_action(chat_kind(&msg.chat), code);
            perform(bot, msg.chat.id, action, deps).await?;

            bot.send_message(msg.chat.id, format!("Extracted text reads: {}", record))
                .await?;
        }
        None => {
            log::info!(
                "Photo in chat {} doesn't contain the receipt key terms: {}",
                msg.chat.id,
                text
            );
            bot.send_message(msg.chat.id, format!("Extracted text reads: {}", text))
                .await?;
        }
    }

    Ok(())
}

/// Downloads the highest-resolution variant of the message photo into the
/// confirmations directory and returns its path.
async fn download_largest_photo(bot: &Bot, msg: &Message) -> AppResult<PathBuf> {
    // Telegram orders photo sizes ascending, the last one is the largest
    let photo = msg
        .photo()
        .and_then(|sizes| sizes.last())
        .ok_or_else(|| AppError::Validation("message carries no photo".to_string()))?;

    let file = bot.get_file(photo.file.id.clone()).await?;

    let dir = PathBuf::from(config::CONFIRMATIONS_DIR.as_str());
    tokio::fs::create_dir_all(&dir).await?;

    let image_path = dir.join(format!("{}_downloaded_image.jpg", Utc::now().format("%Y%m%d_%H%M%S%3f")));
    let mut dst = tokio::fs::File::create(&image_path).await?;
    bot.download_file(&file.path, &mut dst).await?;

    log::info!("Downloaded receipt photo to {}", image_path.display());
    Ok(image_path)
}
