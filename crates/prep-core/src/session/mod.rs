//! Session domain module.
//!
//! This module contains the per-user conversational state and everything
//! needed to interpret incoming events against it.
//!
//! # Module Structure
//!
//! - `stage`: position in the practice flow (`Stage`)
//! - `model`: per-user session state (`Session`)
//! - `event`: tagged inbound events (`UserEvent`, `MenuItem`, ...)
//! - `store`: in-memory per-user store with per-key locking (`SessionStore`)

mod event;
mod model;
mod stage;
mod store;

// Re-export public API
pub use event::{BotCommand, MenuItem, TenseDrillKind, UserEvent};
pub use model::Session;
pub use stage::Stage;
pub use store::{SessionStore, UserId};
