//! Session domain model.
//!
//! This module contains the core Session entity that represents one
//! user's conversational state in the application's domain layer.

use super::stage::Stage;
use serde::{Deserialize, Serialize};

/// Per-user conversational state, one per (user, chat) pair.
///
/// A session contains:
/// - The current stage in the practice flow
/// - The essay topic selected by (or assigned to) the user
/// - The vocabulary the user is required to use in the essay
/// - The last generated tense exercise, while an answer is pending
///
/// Sessions are created lazily on a user's first event, mutated in place
/// by each handled event, and never explicitly destroyed; a "back to menu"
/// command resets one to its default state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Current position in the practice flow.
    pub stage: Stage,
    /// Essay topic, set while the writing track is active.
    pub selected_topic: Option<String>,
    /// Vocabulary the essay must include, in presentation order.
    #[serde(default)]
    pub required_vocabulary: Vec<String>,
    /// The tense exercise awaiting an answer, if any.
    pub pending_exercise: Option<String>,
}

impl Session {
    /// Creates a fresh session at the top-level menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session to the top-level menu, clearing all task state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks the structural invariants of the session state.
    ///
    /// - `AwaitingEssay` requires a selected topic.
    /// - `Idle` carries no pending exercise.
    /// - `AwaitingTenseAnswer` requires a pending exercise.
    pub fn is_consistent(&self) -> bool {
        match self.stage {
            Stage::AwaitingEssay => self.selected_topic.is_some(),
            Stage::Idle => self.pending_exercise.is_none(),
            Stage::AwaitingTenseAnswer => self.pending_exercise.is_some(),
            Stage::AwaitingTopicChoice => true,
        }
    }
}
