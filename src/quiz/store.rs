use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use super::session::QuizSession;

/// In-memory home of the active quiz sessions, keyed by the token carried
/// in the quiz cookie. Intents run under the lock, so the presentation
/// layer never observes a half-applied session. Nothing here is persisted;
/// abandoning a quiz just drops the entry.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, QuizSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fresh session and hand back its token.
    pub fn create(&self, session: QuizSession) -> String {
        let token = ulid::Ulid::new().to_string().to_lowercase();
        let mut sessions = self.inner.lock().expect("session store poisoned");
        sessions.insert(token.clone(), session);
        token
    }

    /// Run `f` against the session for `token`, if it still exists.
    pub fn with<R>(&self, token: &str, f: impl FnOnce(&mut QuizSession) -> R) -> Option<R> {
        let mut sessions = self.inner.lock().expect("session store poisoned");
        sessions.get_mut(token).map(f)
    }

    /// Clone of the session state for rendering.
    pub fn snapshot(&self, token: &str) -> Option<QuizSession> {
        let sessions = self.inner.lock().expect("session store poisoned");
        sessions.get(token).cloned()
    }

    pub fn remove(&self, token: &str) -> Option<QuizSession> {
        let mut sessions = self.inner.lock().expect("session store poisoned");
        sessions.remove(token)
    }
}
