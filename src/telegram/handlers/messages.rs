//! Text message handling
//!
//! Builds a [`DispatchEvent`] from the incoming message, asks the pure
//! router for an [`Action`], and performs it. All network I/O lives here;
//! the routing decision itself is side-effect free.

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, Message};

use super::callbacks::deliver_combo;
use super::types::HandlerDeps;
use super::chat_kind;
use crate::combos::COMBOS;
use crate::router::{route, Action, DispatchEvent};

/// Handles an incoming text message.
pub async fn handle_text_message(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> ResponseResult<()> {
    let text = msg.text().unwrap_or_default();
    log::info!("Responding to message from chat {}: '{}'", msg.chat.id, text);

    let event = DispatchEvent::Text {
        text: text.to_string(),
        chat_kind: chat_kind(&msg.chat),
    };

    perform(bot, msg.chat.id, route(&event), deps).await
}

/// Executes a routed action. Total over [`Action`], like the router itself.
pub async fn perform(bot: &Bot, chat_id: ChatId, action: Action, deps: &HandlerDeps) -> ResponseResult<()> {
    let ui = &deps.settings.ui;

    match action {
        Action::Welcome => {
            bot.send_message(chat_id, ui.get("start_message")).await?;
        }
        Action::PresentCombos => {
            send_combo_menu(bot, chat_id, deps).await?;
        }
        Action::ShowPrivacy => {
            bot.send_message(chat_id, ui.get("privacy_policy")).await?;
        }
        Action::ShowTerms => {
            bot.send_message(chat_id, ui.get("terms_of_use")).await?;
        }
        Action::Help => {
            bot.send_message(chat_id, ui.get("help_message")).await?;
        }
        Action::DeliverCombo(combo) => {
            deliver_combo(bot, chat_id, combo, deps).await?;
        }
        Action::VerifyPrivate { code } => {
            if let Err(e) = deps.verification.record_private(chat_id.0, &code).await {
                log::error!("Private verification failed for chat {}: {}", chat_id, e);
            }
        }
        Action::VerifyGroup { code } => {
            if let Err(e) = deps.verification.confirm_group(chat_id.0, &code).await {
                log::error!("Group verification failed for chat {}: {}", chat_id, e);
            }
        }
        Action::NoOp => {}
    }

    Ok(())
}

/// Sends the combo selection keyboard, one button per registered combo.
async fn send_combo_menu(bot: &Bot, chat_id: ChatId, deps: &HandlerDeps) -> ResponseResult<()> {
    let buttons: Vec<InlineKeyboardButton> = COMBOS
        .iter()
        .map(|combo| InlineKeyboardButton::callback(combo.button_text, combo.label))
        .collect();
    let markup = InlineKeyboardMarkup::new(vec![buttons]);

    bot.send_message(chat_id, deps.settings.ui.get("combos_menu"))
        .reply_markup(markup)
        .await?;
    Ok(())
}
