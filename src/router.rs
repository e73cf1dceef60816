//! Event dispatch routing
//!
//! A pure mapping from an inbound event (text command or callback label) to a
//! named [`Action`]. The router performs no I/O and holds no state; the
//! transport layer builds a [`DispatchEvent`] from the incoming Telegram
//! update and executes whatever action comes back.

use crate::combos::{self, Combo};

/// Kind of the chat an event originated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatKind {
    Private,
    Group,
}

/// A normalized inbound event, consumed once and not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    /// An incoming text message.
    Text { text: String, chat_kind: ChatKind },
    /// A button press carrying an opaque label.
    Callback { label: String, chat_kind: ChatKind },
}

/// What the transport should do in response to an event.
///
/// The enum is closed and `route` is total, so every possible event resolves
/// to exactly one action — unknown input degrades to [`Action::Help`] or
/// [`Action::NoOp`], never to an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Greet the user (`/start`).
    Welcome,
    /// Show the combo selection keyboard (`/combos`).
    PresentCombos,
    /// Show the privacy policy (`/privacy`).
    ShowPrivacy,
    /// Show the terms of use (`/terms`).
    ShowTerms,
    /// Generic help response for anything unrecognized.
    Help,
    /// Deliver a combo and chain into the referral invites.
    DeliverCombo(&'static Combo),
    /// Hand an extracted receipt code to the private-chat verification collaborator.
    VerifyPrivate { code: String },
    /// Hand an extracted receipt code to the group-chat verification collaborator.
    VerifyGroup { code: String },
    /// Do nothing (empty text, stale or foreign callback payloads).
    NoOp,
}

/// Routes an event to its action.
pub fn route(event: &DispatchEvent) -> Action {
    match event {
        DispatchEvent::Text { text, .. } => route_text(text),
        DispatchEvent::Callback { label, .. } => route_callback(label),
    }
}

/// Selects the verification action for an image-derived receipt code.
///
/// Private chats get the private verification flow; everything else goes
/// through the group confirmation flow. Both flows are external collaborators.
pub fn verification_action(chat_kind: ChatKind, code: &str) -> Action {
    match chat_kind {
        ChatKind::Private => Action::VerifyPrivate { code: code.to_string() },
        ChatKind::Group => Action::VerifyGroup { code: code.to_string() },
    }
}

/// Routes a text message by its first whitespace-delimited token.
///
/// A `@BotName` suffix is stripped before matching (Telegram appends it when
/// a command is addressed by name in a group chat). Matching is otherwise
/// exact and case-sensitive; any nonempty text that is not a recognized
/// command gets the help response.
fn route_text(text: &str) -> Action {
    let Some(first) = text.split_whitespace().next() else {
        return Action::NoOp;
    };
    let command = first.split('@').next().unwrap_or(first);

    match command {
        "/start" => Action::Welcome,
        "/combos" => Action::PresentCombos,
        "/privacy" => Action::ShowPrivacy,
        "/terms" => Action::ShowTerms,
        _ => Action::Help,
    }
}

/// Routes a callback label against the registered combo table.
///
/// Unrecognized labels are a no-op, not an error — they may originate from
/// stale keyboards or foreign clients.
fn route_callback(label: &str) -> Action {
    match combos::find(label) {
        Some(combo) => Action::DeliverCombo(combo),
        None => Action::NoOp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_event(text: &str) -> DispatchEvent {
        DispatchEvent::Text {
            text: text.to_string(),
            chat_kind: ChatKind::Private,
        }
    }

    fn callback_event(label: &str) -> DispatchEvent {
        DispatchEvent::Callback {
            label: label.to_string(),
            chat_kind: ChatKind::Private,
        }
    }

    #[test]
    fn routes_known_commands() {
        assert_eq!(route(&text_event("/start")), Action::Welcome);
        assert_eq!(route(&text_event("/combos")), Action::PresentCombos);
        assert_eq!(route(&text_event("/privacy")), Action::ShowPrivacy);
        assert_eq!(route(&text_event("/terms")), Action::ShowTerms);
    }

    #[test]
    fn accepts_bot_username_suffix() {
        assert_eq!(route(&text_event("/start@BotName")), Action::Welcome);
        assert_eq!(route(&text_event("/combos@BotName")), Action::PresentCombos);
    }

    #[test]
    fn only_first_token_matters() {
        assert_eq!(route(&text_event("/start now please")), Action::Welcome);
        assert_eq!(route(&text_event("   /terms\textra")), Action::ShowTerms);
    }

    #[test]
    fn unrecognized_text_gets_help() {
        assert_eq!(route(&text_event("/unknown")), Action::Help);
        assert_eq!(route(&text_event("hello")), Action::Help);
        // case-sensitive, no fuzzy matching
        assert_eq!(route(&text_event("/Start")), Action::Help);
        assert_eq!(route(&text_event("/startx")), Action::Help);
    }

    #[test]
    fn empty_text_is_a_noop() {
        assert_eq!(route(&text_event("")), Action::NoOp);
        assert_eq!(route(&text_event("   ")), Action::NoOp);
    }

    #[test]
    fn known_callback_delivers_combo() {
        match route(&callback_event("Hamster")) {
            Action::DeliverCombo(combo) => assert_eq!(combo.label, "Hamster"),
            other => panic!("expected DeliverCombo, got {:?}", other),
        }
    }

    #[test]
    fn unknown_callback_is_a_noop() {
        assert_eq!(route(&callback_event("Unknown")), Action::NoOp);
        assert_eq!(route(&callback_event("")), Action::NoOp);
    }

    #[test]
    fn verification_branches_on_chat_kind() {
        assert_eq!(
            verification_action(ChatKind::Private, "BD12XQ7F9Z"),
            Action::VerifyPrivate {
                code: "BD12XQ7F9Z".to_string()
            }
        );
        assert_eq!(
            verification_action(ChatKind::Group, "BD12XQ7F9Z"),
            Action::VerifyGroup {
                code: "BD12XQ7F9Z".to_string()
            }
        );
    }
}
