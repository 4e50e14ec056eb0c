//! Stage types for session state management.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Represents where a user currently is in the practice flow.
///
/// The flow is a short walk: from the menu into either the writing track
/// (choose a topic, then submit an essay) or the tense-drill track
/// (answer one exercise), and back to the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Stage {
    /// At the top-level menu; no task in progress.
    #[default]
    Idle,
    /// A topic list was presented; waiting for the user to pick one.
    AwaitingTopicChoice,
    /// A topic and vocabulary were assigned; waiting for the essay text.
    AwaitingEssay,
    /// A tense exercise was presented; waiting for the user's answer.
    AwaitingTenseAnswer,
}
