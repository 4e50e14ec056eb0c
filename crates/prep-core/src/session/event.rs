//! Tagged inbound user events.
//!
//! The transport adapter turns raw message text into one of these
//! variants, so the flow controller matches on `(stage, event)` pairs
//! instead of branching on raw strings.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// One inbound user event, as produced by the transport adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {
    /// A direct command from the user.
    Command(BotCommand),
    /// A selection from a previously presented menu.
    MenuSelection(MenuItem),
    /// Free-form text (an essay, a drill answer, or noise).
    FreeText(String),
}

/// Commands recognized regardless of menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    /// Greet the user and show the top-level menu.
    Start,
    /// Abandon the current task and return to the top-level menu.
    Menu,
}

/// The kinds of tense drills the tutor can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum TenseDrillKind {
    #[strum(serialize = "Convert sentences to another tense")]
    ConvertTense,
    #[strum(serialize = "Fill in the blanks with the correct verb form")]
    FillInBlanks,
    #[strum(serialize = "Create a sentence using a given tense")]
    CreateSentence,
    #[strum(serialize = "Choose the correct tense in context")]
    ChooseCorrect,
    #[strum(serialize = "Practice tenses in dialogues")]
    Dialogue,
}

impl TenseDrillKind {
    /// Stable identifier used in menu option ids.
    pub fn id(&self) -> &'static str {
        match self {
            Self::ConvertTense => "convert",
            Self::FillInBlanks => "fill_blanks",
            Self::CreateSentence => "create_sentence",
            Self::ChooseCorrect => "choose_correct",
            Self::Dialogue => "dialogue",
        }
    }

    fn from_id(id: &str) -> Option<Self> {
        Self::iter().find(|kind| kind.id() == id)
    }
}

/// One selectable menu entry.
///
/// `Topic` carries the topic text itself; the other variants are the
/// static entries of the top-level and drill menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    /// Writing track: pick a topic from a generated list.
    WritingPractice,
    /// Writing track: let the tutor pick a topic at random.
    RandomTopic,
    /// Tense track: show the drill-kind menu.
    TensePractice,
    /// Tense track: generate one drill of this kind.
    TenseDrill(TenseDrillKind),
    /// A concrete essay topic chosen from the topic menu.
    Topic(String),
}

impl MenuItem {
    /// Stable identifier carried in menu options and echoed back by
    /// selection events.
    pub fn id(&self) -> String {
        match self {
            Self::WritingPractice => "writing_practice".to_string(),
            Self::RandomTopic => "random_topic".to_string(),
            Self::TensePractice => "tense_practice".to_string(),
            Self::TenseDrill(kind) => format!("tense:{}", kind.id()),
            Self::Topic(topic) => format!("topic:{topic}"),
        }
    }

    /// Human-readable label shown on the menu button.
    pub fn label(&self) -> String {
        match self {
            Self::WritingPractice => "Select a topic for an essay".to_string(),
            Self::RandomTopic => "🎲 Random topic".to_string(),
            Self::TensePractice => "Practice English tenses".to_string(),
            Self::TenseDrill(kind) => kind.to_string(),
            Self::Topic(topic) => topic.clone(),
        }
    }

    /// Parses a selection identifier coming back from the transport.
    pub fn from_id(id: &str) -> Option<Self> {
        if let Some(topic) = id.strip_prefix("topic:") {
            return (!topic.is_empty()).then(|| Self::Topic(topic.to_string()));
        }
        if let Some(kind) = id.strip_prefix("tense:") {
            return TenseDrillKind::from_id(kind).map(Self::TenseDrill);
        }
        match id {
            "writing_practice" => Some(Self::WritingPractice),
            "random_topic" => Some(Self::RandomTopic),
            "tense_practice" => Some(Self::TensePractice),
            _ => None,
        }
    }

    /// Matches the button label a reply-keyboard transport echoes back.
    ///
    /// Topic labels are not enumerable, so only the static entries match.
    pub fn from_label(label: &str) -> Option<Self> {
        let statics = [Self::WritingPractice, Self::RandomTopic, Self::TensePractice];
        if let Some(item) = statics.into_iter().find(|item| item.label() == label) {
            return Some(item);
        }
        TenseDrillKind::iter()
            .find(|kind| kind.to_string() == label)
            .map(Self::TenseDrill)
    }
}
