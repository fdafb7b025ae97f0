//! Mutable state of one quiz attempt.
//!
//! The session is a small state machine driven by four intents. A question
//! goes through select → check (locks the answer and scores it exactly
//! once) → advance; once `current_index` reaches the question count the
//! session is complete and only `retry` remains valid. Every precondition
//! violation is a rejected no-op; the session never ends up half-applied.

use thiserror::Error;

use super::bank::QuestionRecord;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// An intent received an out-of-range option index.
    #[error("option index out of range for the current question")]
    InvalidArgument,
    /// An intent arrived while the session was not in the required state.
    #[error("intent is not valid in the current session state")]
    InvalidState,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    subject: String,
    topic: String,
    questions: Vec<QuestionRecord>,
    current_index: usize,
    selected: Option<usize>,
    locked: bool,
    correct_count: usize,
}

impl QuizSession {
    /// A session over an empty question list is complete from the start
    /// (`total == 0`), which the presentation layer shows as "no quiz
    /// available".
    pub fn new(subject: String, topic: String, questions: Vec<QuestionRecord>) -> Self {
        Self {
            subject,
            topic,
            questions,
            current_index: 0,
            selected: None,
            locked: false,
            correct_count: 0,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn is_complete(&self) -> bool {
        self.current_index == self.questions.len()
    }

    /// The question the user is currently looking at; `None` once complete.
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current_index)
    }

    /// Change the pending selection. Free while the question is unlocked;
    /// rejected once the answer has been checked.
    pub fn select(&mut self, option: usize) -> Result<(), SessionError> {
        if self.is_complete() || self.locked {
            return Err(SessionError::InvalidState);
        }
        let question = &self.questions[self.current_index];
        if option >= question.options.len() {
            return Err(SessionError::InvalidArgument);
        }
        self.selected = Some(option);
        Ok(())
    }

    /// Lock the current selection and score it. Scoring happens exactly
    /// here, so a repeated `check` cannot double count. Returns whether
    /// the locked answer was correct.
    pub fn check(&mut self) -> Result<bool, SessionError> {
        if self.is_complete() || self.locked {
            return Err(SessionError::InvalidState);
        }
        let chosen = self.selected.ok_or(SessionError::InvalidState)?;
        self.locked = true;
        let correct = chosen == self.questions[self.current_index].correct_index;
        if correct {
            self.correct_count += 1;
        }
        Ok(correct)
    }

    /// Move past a locked question, clearing the selection and the lock.
    /// Reaching `total` makes the session complete.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        if !self.locked {
            return Err(SessionError::InvalidState);
        }
        self.current_index += 1;
        self.selected = None;
        self.locked = false;
        Ok(())
    }

    /// Hard reset to the initial state. The question list is kept as
    /// resolved at creation; the session keeps its identity.
    pub fn retry(&mut self) {
        self.current_index = 0;
        self.selected = None;
        self.locked = false;
        self.correct_count = 0;
    }
}
