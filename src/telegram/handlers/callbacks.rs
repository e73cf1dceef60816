//! Callback query handling and combo delivery

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, InputFile};
use url::Url;

use super::types::HandlerDeps;
use super::{chat_kind, clear_screen};
use crate::combos::Combo;
use crate::referrals::{pick_invites, INVITES_PER_COMBO};
use crate::router::{route, Action, ChatKind, DispatchEvent};

/// Handles a button press from the combo keyboard.
///
/// Unknown labels (stale keyboards, foreign clients) only get the callback
/// acknowledged — no error, no message.
pub async fn handle_callback_query(bot: &Bot, q: &CallbackQuery, deps: &HandlerDeps) -> ResponseResult<()> {
    let label = q.data.as_deref().unwrap_or_default();
    log::info!("Handling callback query from user {}: '{}'", q.from.id, label);

    let kind = q.message.as_ref().map(|m| chat_kind(m.chat())).unwrap_or(ChatKind::Private);
    let event = DispatchEvent::Callback {
        label: label.to_string(),
        chat_kind: kind,
    };

    match route(&event) {
        Action::DeliverCombo(combo) => {
            bot.answer_callback_query(q.id.clone()).await?;
            if let Some(message) = q.message.as_ref() {
                let chat_id = message.chat().id;
                clear_screen(bot, chat_id, message.id()).await;
                deliver_combo(bot, chat_id, combo, deps).await?;
            }
        }
        _ => {
            bot.answer_callback_query(q.id.clone()).await?;
        }
    }

    Ok(())
}

/// Delivers one combo: intro text, the daily image, then the referral invites.
pub async fn deliver_combo(bot: &Bot, chat_id: ChatId, combo: &Combo, deps: &HandlerDeps) -> ResponseResult<()> {
    let ui = &deps.settings.ui;
    log::info!("Delivering combo '{}' to chat {}", combo.label, chat_id);

    bot.send_message(chat_id, ui.get("combo_intro")).await?;

    bot.send_photo(chat_id, InputFile::file(combo.image_path))
        .caption(ui.get("combo_caption"))
        .await?;

    send_squad_invites(bot, chat_id, deps).await
}

/// Sends the squad invite message with 2 randomly selected referral buttons.
async fn send_squad_invites(bot: &Bot, chat_id: ChatId, deps: &HandlerDeps) -> ResponseResult<()> {
    let selected = pick_invites(&deps.settings.referrals, INVITES_PER_COMBO);
    if selected.is_empty() {
        log::warn!("No referrals configured, skipping squad invites for chat {}", chat_id);
        return Ok(());
    }

    let buttons: Vec<InlineKeyboardButton> = selected
        .iter()
        .filter_map(|referral| match Url::parse(&referral.url) {
            Ok(parsed) => Some(InlineKeyboardButton::url(referral.bot.clone(), parsed)),
            Err(e) => {
                log::warn!("Skipping referral '{}' with invalid URL '{}': {}", referral.bot, referral.url, e);
                None
            }
        })
        .collect();

    if buttons.is_empty() {
        return Ok(());
    }

    bot.send_message(chat_id, deps.settings.ui.get("squad_invite"))
        .reply_markup(InlineKeyboardMarkup::new(vec![buttons]))
        .await?;
    Ok(())
}
