//! The flow controller state machine.

use super::feedback::{MIN_ESSAY_WORDS, missing_vocabulary, word_count};
use super::reply::Reply;
use crate::error::{PrepError, Result};
use crate::exercise::ExerciseGenerator;
use crate::session::{BotCommand, MenuItem, Session, Stage, TenseDrillKind, UserEvent};
use rand::seq::SliceRandom;
use std::sync::Arc;
use strum::IntoEnumIterator;

const WELCOME: &str = "Hello! I am your IELTS essay assistant bot. \
I can help you prepare for the writing part of the IELTS.\n\n\
Please choose a task:";

const USE_MENU_PROMPT: &str = "Please choose one of the provided options.";

/// Decides, for each `(stage, event)` pair, the next stage and which
/// external call (if any) to make.
///
/// The controller mutates the session only after an external call has
/// succeeded, so a generator failure always leaves the session exactly
/// where it was and the user can retry. It owns no state of its own;
/// one instance serves every user.
pub struct FlowController {
    generator: Arc<dyn ExerciseGenerator>,
}

impl FlowController {
    /// Creates a controller backed by the given exercise generator.
    pub fn new(generator: Arc<dyn ExerciseGenerator>) -> Self {
        Self { generator }
    }

    /// Handles one user event against the user's session.
    ///
    /// # Errors
    ///
    /// - `ExternalService` when the generator fails; the session is
    ///   untouched and the caller should report a recoverable error.
    /// - `InvalidInput` when the event does not fit the current stage;
    ///   the message is the re-prompt to show, the session is untouched.
    pub async fn handle(&self, session: &mut Session, event: UserEvent) -> Result<Vec<Reply>> {
        let replies = match event {
            UserEvent::Command(BotCommand::Start) => self.welcome(),
            UserEvent::Command(BotCommand::Menu) => {
                session.reset();
                self.welcome()
            }
            UserEvent::MenuSelection(item) => self.handle_selection(session, item).await?,
            UserEvent::FreeText(text) => self.handle_free_text(session, text).await?,
        };
        debug_assert!(session.is_consistent());
        Ok(replies)
    }

    fn welcome(&self) -> Vec<Reply> {
        vec![Reply::menu(WELCOME, &Self::top_menu())]
    }

    fn top_menu() -> Vec<MenuItem> {
        vec![
            MenuItem::WritingPractice,
            MenuItem::RandomTopic,
            MenuItem::TensePractice,
        ]
    }

    async fn handle_selection(&self, session: &mut Session, item: MenuItem) -> Result<Vec<Reply>> {
        match (session.stage, item) {
            (Stage::Idle, MenuItem::WritingPractice) => {
                let topics = self.generator.essay_topics().await?;
                let items: Vec<MenuItem> = topics.into_iter().map(MenuItem::Topic).collect();
                session.stage = Stage::AwaitingTopicChoice;
                Ok(vec![Reply::menu("Please choose a topic:", &items)])
            }
            (Stage::Idle, MenuItem::RandomTopic) => {
                let topics = self.generator.essay_topics().await?;
                let topic = topics
                    .choose(&mut rand::thread_rng())
                    .cloned()
                    .ok_or_else(|| PrepError::external("generator returned no topics"))?;
                self.assign_topic(session, topic).await
            }
            (Stage::Idle, MenuItem::TensePractice) => {
                let drills: Vec<MenuItem> =
                    TenseDrillKind::iter().map(MenuItem::TenseDrill).collect();
                Ok(vec![Reply::menu(
                    "Please choose a tenses practice task:",
                    &drills,
                )])
            }
            (Stage::Idle, MenuItem::TenseDrill(kind)) => {
                let exercise = self.generator.tense_exercise(kind).await?;
                session.stage = Stage::AwaitingTenseAnswer;
                session.pending_exercise = Some(exercise.clone());
                Ok(vec![Reply::text(format!("Task: {exercise}"))])
            }
            (Stage::AwaitingTopicChoice, MenuItem::Topic(topic)) => {
                self.assign_topic(session, topic).await
            }
            _ => Err(PrepError::invalid_input(USE_MENU_PROMPT)),
        }
    }

    async fn handle_free_text(&self, session: &mut Session, text: String) -> Result<Vec<Reply>> {
        match session.stage {
            Stage::Idle => Err(PrepError::invalid_input(USE_MENU_PROMPT)),
            // Topic menus double as free text on reply-keyboard transports.
            Stage::AwaitingTopicChoice => self.assign_topic(session, text).await,
            Stage::AwaitingEssay => self.review_essay(session, &text).await,
            Stage::AwaitingTenseAnswer => self.review_tense_answer(session, &text).await,
        }
    }

    /// Fetches vocabulary for the topic, then moves the session into the
    /// essay stage with topic and vocabulary recorded.
    async fn assign_topic(&self, session: &mut Session, topic: String) -> Result<Vec<Reply>> {
        let words = self.generator.vocabulary_for(&topic).await?;

        let word_list = words
            .iter()
            .map(|word| format!("- {word}"))
            .collect::<Vec<_>>()
            .join("\n");
        let instructions = format!(
            "Write an essay on '{topic}'. The minimum length is {MIN_ESSAY_WORDS} words.\n\n\
             Use the following words in the essay:\n{word_list}"
        );

        session.stage = Stage::AwaitingEssay;
        session.selected_topic = Some(topic);
        session.required_vocabulary = words;
        session.pending_exercise = None;
        Ok(vec![Reply::text(instructions)])
    }

    /// Local word-count and vocabulary checks first, generator feedback
    /// after, then back to the menu.
    async fn review_essay(&self, session: &mut Session, essay: &str) -> Result<Vec<Reply>> {
        let required = session.required_vocabulary.clone();
        let feedback = self.generator.essay_feedback(essay, &required).await?;

        let mut replies = Vec::new();
        let count = word_count(essay);
        if count < MIN_ESSAY_WORDS {
            replies.push(Reply::text(format!(
                "Your essay contains less than {MIN_ESSAY_WORDS} words. Word count: {count}"
            )));
        }
        let missing = missing_vocabulary(essay, &required);
        if !missing.is_empty() {
            replies.push(Reply::text(format!(
                "The following words were not used: {}",
                missing.join(", ")
            )));
        }
        replies.push(Reply::text(format!("Here is your feedback:\n\n{feedback}")));

        session.reset();
        Ok(replies)
    }

    async fn review_tense_answer(&self, session: &mut Session, answer: &str) -> Result<Vec<Reply>> {
        let exercise = session
            .pending_exercise
            .clone()
            .ok_or_else(|| PrepError::internal("tense answer arrived without an exercise"))?;
        let feedback = self.generator.tense_feedback(&exercise, answer).await?;

        session.reset();
        Ok(vec![Reply::text(feedback)])
    }
}
