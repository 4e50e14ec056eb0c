//! Generator backends and prompt construction for PREP.
//!
//! This crate turns the core's domain-level exercise operations into
//! concrete prompts, sends them to a language-model backend, and parses
//! the results back into domain shapes.

pub mod exercise_agent_service;
pub mod openai_generator;
pub mod prompts;

pub use exercise_agent_service::ExerciseAgentService;
pub use openai_generator::OpenAiGenerator;
