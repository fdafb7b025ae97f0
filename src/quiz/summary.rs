use super::session::{QuizSession, SessionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub correct: usize,
    pub total: usize,
    pub accuracy_percent: u32,
}

/// Derive the result of a finished session. Calling this before the
/// session is complete is a programming error, reported as `InvalidState`.
///
/// Accuracy rounds to the nearest integer; an empty session reports 0%
/// rather than dividing by zero.
pub fn summarize(session: &QuizSession) -> Result<ResultSummary, SessionError> {
    if !session.is_complete() {
        return Err(SessionError::InvalidState);
    }
    let correct = session.correct_count();
    let total = session.total();
    let accuracy_percent = if total == 0 {
        0
    } else {
        ((correct as f64 * 100.0) / total as f64).round() as u32
    };
    Ok(ResultSummary {
        correct,
        total,
        accuracy_percent,
    })
}
