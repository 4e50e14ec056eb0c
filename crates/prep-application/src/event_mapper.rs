//! Transport adapter: raw message text to tagged events.

use prep_core::session::{BotCommand, MenuItem, UserEvent};

/// Maps one inbound raw message to a tagged event.
///
/// Commands first, then selection identifiers (from inline-button
/// transports), then button labels (from reply-keyboard transports that
/// echo the label as text), and finally free text. The first applicable
/// mapping wins; there is no fallback chain after that.
pub fn map_incoming(text: &str) -> UserEvent {
    let trimmed = text.trim();

    match trimmed {
        "/start" => return UserEvent::Command(BotCommand::Start),
        "/menu" => return UserEvent::Command(BotCommand::Menu),
        _ => {}
    }
    if trimmed.eq_ignore_ascii_case("back to menu") {
        return UserEvent::Command(BotCommand::Menu);
    }

    if let Some(item) = MenuItem::from_id(trimmed).or_else(|| MenuItem::from_label(trimmed)) {
        return UserEvent::MenuSelection(item);
    }

    UserEvent::FreeText(trimmed.to_string())
}
