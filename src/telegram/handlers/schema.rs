//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::callbacks::handle_callback_query;
use super::messages::handle_text_message;
use super::photos::handle_photo_message;
use super::types::{HandlerDeps, HandlerError};

/// Creates the main dispatcher schema for the Telegram bot.
///
/// This function returns a handler tree that can be used with teloxide's
/// Dispatcher. The same schema is used in production and in tests.
///
/// # Arguments
/// * `deps` - Handler dependencies (settings, OCR, verification sink)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_photos = deps.clone();
    let deps_messages = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        // Photo handler must come before the text handler: a photo message
        // may carry a caption and must still go through OCR
        .branch(photo_handler(deps_photos))
        // Command and plain-text handler
        .branch(message_handler(deps_messages))
        // Callback query handler (combo buttons)
        .branch(callback_handler(deps_callback))
}

/// Handler for photographed receipts
fn photo_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.photo().is_some())
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                if let Err(e) = handle_photo_message(&bot, &msg, &deps).await {
                    log::error!("Photo handler failed for chat {}: {}", msg.chat.id, e);
                }
                Ok(())
            }
        })
}

/// Handler for text messages (commands and everything else)
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().is_some())
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                if let Err(e) = handle_text_message(&bot, &msg, &deps).await {
                    log::error!("Message handler failed for chat {}: {:?}", msg.chat.id, e);
                }
                Ok(())
            }
        })
}

/// Handler for callback queries (combo inline keyboard buttons)
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            let user_id = q.from.id;
            if let Err(e) = handle_callback_query(&bot, &q, &deps).await {
                log::error!("Callback handler failed for user {}: {:?}", user_id, e);
                let _ = bot
                    .send_message(ChatId(user_id.0 as i64), deps.settings.ui.get("request_error_info"))
                    .await;
            }
            Ok(())
        }
    })
}
