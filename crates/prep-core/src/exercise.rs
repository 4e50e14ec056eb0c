//! Exam-exercise operations backed by the text generator.
//!
//! The flow controller speaks in domain terms (topics, vocabulary,
//! feedback); how those turn into prompts and parsed lists is the
//! implementor's concern (see `prep-interaction`).

use crate::error::Result;
use crate::session::TenseDrillKind;
use async_trait::async_trait;

/// Exercise material and feedback produced by the external generator.
///
/// Every method may fail with `PrepError::ExternalService`; the flow
/// controller then reports a recoverable error and leaves the session
/// stage unchanged so the user can retry.
#[async_trait]
pub trait ExerciseGenerator: Send + Sync {
    /// Returns a list of essay topics to offer the user.
    async fn essay_topics(&self) -> Result<Vec<String>>;

    /// Returns academic vocabulary the user must work into an essay
    /// on the given topic.
    async fn vocabulary_for(&self, topic: &str) -> Result<Vec<String>>;

    /// Reviews a submitted essay against the required vocabulary and
    /// returns free-form feedback.
    async fn essay_feedback(&self, essay: &str, required: &[String]) -> Result<String>;

    /// Produces one tense exercise of the given kind.
    async fn tense_exercise(&self, kind: TenseDrillKind) -> Result<String>;

    /// Judges a user's answer to a previously issued tense exercise.
    async fn tense_feedback(&self, exercise: &str, answer: &str) -> Result<String>;
}
