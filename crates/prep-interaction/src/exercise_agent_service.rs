//! Exercise operations implemented over a raw text generator.

use crate::prompts;
use async_trait::async_trait;
use prep_core::error::{PrepError, Result};
use prep_core::exercise::ExerciseGenerator;
use prep_core::generator::TextGenerator;
use prep_core::session::TenseDrillKind;
use std::sync::Arc;
use tracing::debug;

/// Bridges the core's domain-level exercise operations to any
/// [`TextGenerator`] backend: builds the prompt, sends it, and parses
/// list output back into domain shapes.
///
/// Empty parsed results are reported as external-service failures so the
/// flow controller can leave the session stage unchanged.
pub struct ExerciseAgentService {
    generator: Arc<dyn TextGenerator>,
}

impl ExerciseAgentService {
    /// Creates a service over the given backend.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl ExerciseGenerator for ExerciseAgentService {
    async fn essay_topics(&self) -> Result<Vec<String>> {
        let raw = self.generator.generate(prompts::essay_topics()).await?;
        let topics = prompts::parse_list(&raw, prompts::TOPIC_COUNT);
        debug!(count = topics.len(), "parsed topic list");
        if topics.is_empty() {
            return Err(PrepError::external("generator returned an empty topic list"));
        }
        Ok(topics)
    }

    async fn vocabulary_for(&self, topic: &str) -> Result<Vec<String>> {
        let raw = self.generator.generate(prompts::vocabulary(topic)).await?;
        let words = prompts::parse_list(&raw, prompts::VOCABULARY_COUNT);
        debug!(topic, count = words.len(), "parsed vocabulary list");
        if words.is_empty() {
            return Err(PrepError::external(
                "generator returned an empty vocabulary list",
            ));
        }
        Ok(words)
    }

    async fn essay_feedback(&self, essay: &str, required: &[String]) -> Result<String> {
        let feedback = self
            .generator
            .generate(prompts::essay_review(essay, required))
            .await?;
        Ok(feedback.trim().to_string())
    }

    async fn tense_exercise(&self, kind: TenseDrillKind) -> Result<String> {
        let exercise = self.generator.generate(prompts::tense_exercise(kind)).await?;
        Ok(exercise.trim().to_string())
    }

    async fn tense_feedback(&self, exercise: &str, answer: &str) -> Result<String> {
        let feedback = self
            .generator
            .generate(prompts::tense_review(exercise, answer))
            .await?;
        Ok(feedback.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::generator::GenerationRequest;
    use std::sync::Mutex;

    /// Backend that replays canned responses and records prompts.
    struct ScriptedGenerator {
        responses: Mutex<Vec<Result<String>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        fn new(responses: Vec<Result<String>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, request: GenerationRequest) -> Result<String> {
            self.prompts.lock().unwrap().push(request.prompt);
            self.responses.lock().unwrap().remove(0)
        }
    }

    fn service(responses: Vec<Result<String>>) -> ExerciseAgentService {
        ExerciseAgentService::new(Arc::new(ScriptedGenerator::new(responses)))
    }

    #[tokio::test]
    async fn test_topics_are_parsed_from_numbered_output() {
        let service = service(vec![Ok("1. Education\n2. Health\n3. Art".to_string())]);
        let topics = service.essay_topics().await.unwrap();
        assert_eq!(topics, vec!["Education", "Health", "Art"]);
    }

    #[tokio::test]
    async fn test_blank_topic_output_is_an_external_error() {
        let service = service(vec![Ok("\n\n   \n".to_string())]);
        assert!(service.essay_topics().await.unwrap_err().is_external());
    }

    #[tokio::test]
    async fn test_vocabulary_is_capped() {
        let lines: Vec<String> = (1..=15).map(|i| format!("word{i}")).collect();
        let service = service(vec![Ok(lines.join("\n"))]);
        let words = service.vocabulary_for("Health").await.unwrap();
        assert_eq!(words.len(), prompts::VOCABULARY_COUNT);
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let service = service(vec![Err(PrepError::external("down"))]);
        let err = service.vocabulary_for("Health").await.unwrap_err();
        assert!(err.is_external());
    }

    #[tokio::test]
    async fn test_feedback_is_trimmed() {
        let service = service(vec![Ok("\n  Good work.  \n".to_string())]);
        let feedback = service.essay_feedback("essay", &[]).await.unwrap();
        assert_eq!(feedback, "Good work.");
    }
}
