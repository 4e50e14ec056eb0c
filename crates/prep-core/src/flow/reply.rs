//! Outbound message types.
//!
//! Replies are transport-agnostic: a text body, or a text body with a
//! set of selectable options. The transport decides how to render a
//! menu (reply keyboard, inline buttons, numbered list).

use crate::session::MenuItem;
use serde::{Deserialize, Serialize};

/// One selectable option in an outbound menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOption {
    /// Stable identifier echoed back by selection events.
    pub id: String,
    /// Label shown to the user.
    pub label: String,
}

impl From<&MenuItem> for MenuOption {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id(),
            label: item.label(),
        }
    }
}

/// One outbound message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    /// Plain text.
    Text(String),
    /// Text accompanied by selectable options.
    Menu {
        text: String,
        options: Vec<MenuOption>,
    },
}

impl Reply {
    /// Creates a plain-text reply.
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text(body.into())
    }

    /// Creates a menu reply from the given items.
    pub fn menu(text: impl Into<String>, items: &[MenuItem]) -> Self {
        Self::Menu {
            text: text.into(),
            options: items.iter().map(MenuOption::from).collect(),
        }
    }
}
