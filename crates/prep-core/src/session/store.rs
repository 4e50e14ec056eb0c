//! In-memory session store with per-user locking.

use super::model::Session;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Opaque user/chat identifier assigned by the transport.
pub type UserId = String;

/// In-memory store of one `Session` per user.
///
/// Each entry carries its own mutex, so events for the same user are
/// fully serialized while events for different users proceed in
/// parallel. The outer map lock is held only long enough to look up or
/// insert an entry, never across event handling.
///
/// No persistence beyond process lifetime.
pub struct SessionStore {
    sessions: RwLock<HashMap<UserId, Arc<Mutex<Session>>>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the entry for the given user, creating a default session
    /// if this is the user's first event.
    ///
    /// Lock the returned mutex for the duration of event handling to
    /// guarantee per-user serialization.
    pub async fn entry(&self, user_id: &str) -> Arc<Mutex<Session>> {
        {
            let sessions = self.sessions.read().await;
            if let Some(entry) = sessions.get(user_id) {
                return entry.clone();
            }
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(Session::default())))
            .clone()
    }

    /// Returns a copy of the user's current session, if one exists.
    pub async fn snapshot(&self, user_id: &str) -> Option<Session> {
        let entry = {
            let sessions = self.sessions.read().await;
            sessions.get(user_id).cloned()
        };
        match entry {
            Some(entry) => Some(entry.lock().await.clone()),
            None => None,
        }
    }

    /// Number of sessions created so far.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether no session has been created yet.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Stage;

    #[tokio::test]
    async fn test_entry_creates_default_session() {
        let store = SessionStore::new();
        assert!(store.is_empty().await);

        let entry = store.entry("alice").await;
        assert_eq!(*entry.lock().await, Session::default());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_entry_returns_same_session() {
        let store = SessionStore::new();
        {
            let entry = store.entry("alice").await;
            entry.lock().await.stage = Stage::AwaitingTopicChoice;
        }
        let entry = store.entry("alice").await;
        assert_eq!(entry.lock().await.stage, Stage::AwaitingTopicChoice);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_entries_are_independent_per_user() {
        let store = SessionStore::new();
        {
            let alice = store.entry("alice").await;
            let mut session = alice.lock().await;
            session.stage = Stage::AwaitingEssay;
            session.selected_topic = Some("Health".to_string());
        }

        let bob = store.snapshot("bob").await;
        assert!(bob.is_none());

        store.entry("bob").await;
        let bob = store.snapshot("bob").await.unwrap();
        assert_eq!(bob, Session::default());

        let alice = store.snapshot("alice").await.unwrap();
        assert_eq!(alice.selected_topic.as_deref(), Some("Health"));
    }

    #[tokio::test]
    async fn test_snapshot_is_a_copy() {
        let store = SessionStore::new();
        store.entry("alice").await;
        let mut snapshot = store.snapshot("alice").await.unwrap();
        snapshot.stage = Stage::AwaitingTenseAnswer;

        assert_eq!(
            store.snapshot("alice").await.unwrap().stage,
            Stage::Idle
        );
    }
}
