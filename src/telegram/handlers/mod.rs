//! Update handlers: messages, photos, and callback queries

pub mod callbacks;
pub mod messages;
pub mod photos;
pub mod schema;
pub mod types;

use teloxide::prelude::*;
use teloxide::types::{Chat, MessageId};

use crate::router::ChatKind;

pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};

/// Maps a Telegram chat to the router's private/group branch.
pub(crate) fn chat_kind(chat: &Chat) -> ChatKind {
    if chat.is_private() {
        ChatKind::Private
    } else {
        ChatKind::Group
    }
}

/// Best-effort deletion of a previously sent message.
///
/// Used to clear the combo keyboard once a button was pressed. Deletion can
/// legitimately fail (message too old, already gone, missing rights), so
/// failures are logged and ignored.
pub(crate) async fn clear_screen(bot: &Bot, chat_id: ChatId, message_id: MessageId) {
    log::info!("Clearing the screen for chat {} - message id {}", chat_id, message_id.0);
    if let Err(e) = bot.delete_message(chat_id, message_id).await {
        log::warn!("Failed to clear screen for chat {}: {}", chat_id, e);
    }
}
