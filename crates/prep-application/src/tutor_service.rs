//! Tutor service: per-user serialized event handling.

use crate::event_mapper::map_incoming;
use prep_core::error::PrepError;
use prep_core::exercise::ExerciseGenerator;
use prep_core::flow::{FlowController, Reply};
use prep_core::session::SessionStore;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

const EXTERNAL_FAILURE_REPLY: &str =
    "Something went wrong while preparing your exercise. Please try again.";

/// Front door for the messaging transport.
///
/// Holds the session store and the flow controller, and guarantees that
/// events for one user are handled one at a time (the per-user session
/// mutex is held across the whole event) while different users proceed
/// in parallel. Errors never escape: they become replies for the user
/// who caused them and cannot touch any other session.
pub struct TutorService {
    store: SessionStore,
    controller: FlowController,
}

impl TutorService {
    /// Creates a service backed by the given exercise generator.
    pub fn new(generator: Arc<dyn ExerciseGenerator>) -> Self {
        Self {
            store: SessionStore::new(),
            controller: FlowController::new(generator),
        }
    }

    /// Handles one raw inbound message and returns the replies to send.
    #[instrument(skip(self, raw_text), fields(user_id = %user_id))]
    pub async fn handle_message(&self, user_id: &str, raw_text: &str) -> Vec<Reply> {
        let event = map_incoming(raw_text);
        debug!(?event, "handling user event");

        let entry = self.store.entry(user_id).await;
        let mut session = entry.lock().await;

        match self.controller.handle(&mut session, event).await {
            Ok(replies) => replies,
            Err(PrepError::InvalidInput(prompt)) => vec![Reply::text(prompt)],
            Err(err) => {
                warn!(error = %err, stage = %session.stage, "event handling failed");
                vec![Reply::text(EXTERNAL_FAILURE_REPLY)]
            }
        }
    }

    /// The underlying session store.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}
