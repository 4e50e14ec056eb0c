//! Flow control module.
//!
//! The finite-state machine that drives each user through the practice
//! flow, plus the transport-agnostic reply types and the deterministic
//! local feedback computed without any external call.
//!
//! # Module Structure
//!
//! - `controller`: the `(stage, event)` state machine (`FlowController`)
//! - `feedback`: word count and missing-vocabulary checks
//! - `reply`: outbound message types (`Reply`, `MenuOption`)

mod controller;
mod feedback;
mod reply;

// Re-export public API
pub use controller::FlowController;
pub use feedback::{MIN_ESSAY_WORDS, missing_vocabulary, word_count};
pub use reply::{MenuOption, Reply};
