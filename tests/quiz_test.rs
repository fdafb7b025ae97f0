use smart4edu::quiz::{self, QuizSession, SessionError};

fn session(subject: &str, topic: &str) -> QuizSession {
    QuizSession::new(
        subject.to_string(),
        topic.to_string(),
        quiz::resolve(subject, topic),
    )
}

/// Answer the current question correctly and move on.
fn solve_current(session: &mut QuizSession) {
    let correct = session
        .current_question()
        .expect("session should have a current question")
        .correct_index;
    session.select(correct).expect("select should succeed");
    assert_eq!(session.check(), Ok(true));
    session.advance().expect("advance should succeed");
}

#[test]
fn resolve_is_deterministic_and_every_answer_index_is_valid() {
    for subject in quiz::bank::subjects() {
        for topic in quiz::bank::topics(subject) {
            let first = quiz::resolve(subject, topic);
            let second = quiz::resolve(subject, topic);
            assert_eq!(first, second, "repeated resolve for {subject}/{topic}");

            assert!(!first.is_empty(), "empty bank for {subject}/{topic}");
            for question in &first {
                assert!(
                    question.correct_index < question.options.len(),
                    "answer index out of range in {subject}/{topic}: {}",
                    question.prompt
                );
                assert!(!question.explanation.is_empty());
            }
        }
    }
}

#[test]
fn topic_quizzes_include_their_topic_question() {
    let fractions = quiz::resolve(quiz::bank::SUBJECT_MATH, "Fracții");
    assert_eq!(fractions.len(), 5);
    assert!(fractions.last().unwrap().prompt.contains("5/4 - 3/8"));

    let summary = quiz::resolve(quiz::bank::SUBJECT_ROMANIAN, "Rezumat");
    assert_eq!(summary.len(), 6);
    assert!(summary.last().unwrap().prompt.contains("rezumat"));

    // An unknown topic falls back to the subject's shared list.
    let fallback = quiz::resolve(quiz::bank::SUBJECT_MATH, "Astrologie");
    assert_eq!(fallback.len(), 5);
    assert!(fallback.last().unwrap().prompt.contains("triunghi"));
}

#[test]
fn unknown_subject_resolves_to_an_empty_bank() {
    assert!(quiz::resolve("Fizică", "Optică").is_empty());
}

#[test]
fn checking_a_correct_answer_scores_once_and_advancing_clears_the_lock() {
    let mut session = session(quiz::bank::SUBJECT_MATH, "Fracții");
    assert_eq!(session.total(), 5);
    assert_eq!(session.current_index(), 0);

    let correct = session.current_question().unwrap().correct_index;
    session.select(correct).unwrap();
    assert_eq!(session.selected(), Some(correct));
    assert!(!session.locked());

    assert_eq!(session.check(), Ok(true));
    assert!(session.locked());
    assert_eq!(session.correct_count(), 1);

    session.advance().unwrap();
    assert_eq!(session.current_index(), 1);
    assert_eq!(session.selected(), None);
    assert!(!session.locked());
    assert_eq!(session.correct_count(), 1);
}

#[test]
fn selection_can_change_until_checked_but_not_after() {
    let mut session = session(quiz::bank::SUBJECT_ROMANIAN, "Gramatică");

    session.select(0).unwrap();
    session.select(3).unwrap();
    assert_eq!(session.selected(), Some(3));

    session.check().unwrap();
    assert_eq!(session.select(1), Err(SessionError::InvalidState));
    assert_eq!(session.selected(), Some(3));
}

#[test]
fn out_of_range_selection_is_rejected_without_touching_state() {
    let mut session = session(quiz::bank::SUBJECT_MATH, "Ecuații");
    let options = session.current_question().unwrap().options.len();

    assert_eq!(session.select(options), Err(SessionError::InvalidArgument));
    assert_eq!(session.selected(), None);
    assert!(!session.locked());
}

#[test]
fn check_requires_a_selection_and_cannot_double_count() {
    let mut session = session(quiz::bank::SUBJECT_MATH, "Fracții");

    assert_eq!(session.check(), Err(SessionError::InvalidState));

    let correct = session.current_question().unwrap().correct_index;
    session.select(correct).unwrap();
    assert_eq!(session.check(), Ok(true));
    assert_eq!(session.correct_count(), 1);

    // A second check on the same question is a rejected no-op.
    assert_eq!(session.check(), Err(SessionError::InvalidState));
    assert_eq!(session.correct_count(), 1);
}

#[test]
fn advance_requires_a_locked_question() {
    let mut session = session(quiz::bank::SUBJECT_ROMANIAN, "Vocabular");
    assert_eq!(session.advance(), Err(SessionError::InvalidState));

    session.select(0).unwrap();
    assert_eq!(session.advance(), Err(SessionError::InvalidState));
    assert_eq!(session.current_index(), 0);
}

#[test]
fn score_never_exceeds_the_number_of_questions_seen() {
    let mut session = session(quiz::bank::SUBJECT_MATH, "Geometrie");

    while !session.is_complete() {
        assert!(session.correct_count() <= session.current_index() + 1);
        solve_current(&mut session);
        assert!(session.correct_count() <= session.current_index());
    }
    assert_eq!(session.correct_count(), session.total());
}

#[test]
fn a_finished_session_rejects_further_intents_and_summarizes() {
    let mut session = session(quiz::bank::SUBJECT_ROMANIAN, "Rezumat");
    assert_eq!(session.total(), 6);

    // Miss the first two, then answer the remaining four correctly.
    for _ in 0..2 {
        let correct = session.current_question().unwrap().correct_index;
        let wrong = (correct + 1) % session.current_question().unwrap().options.len();
        session.select(wrong).unwrap();
        assert_eq!(session.check(), Ok(false));
        session.advance().unwrap();
    }
    while !session.is_complete() {
        solve_current(&mut session);
    }

    assert!(session.current_question().is_none());
    assert_eq!(session.select(0), Err(SessionError::InvalidState));
    assert_eq!(session.check(), Err(SessionError::InvalidState));
    assert_eq!(session.advance(), Err(SessionError::InvalidState));

    let summary = quiz::summarize(&session).expect("finished session should summarize");
    assert_eq!(summary.correct, 4);
    assert_eq!(summary.total, 6);
    // 4/6 rounds to 67, not truncates to 66.
    assert_eq!(summary.accuracy_percent, 67);
}

#[test]
fn summarize_rejects_a_session_still_in_progress() {
    let mut session = session(quiz::bank::SUBJECT_MATH, "Fracții");
    assert_eq!(quiz::summarize(&session), Err(SessionError::InvalidState));

    solve_current(&mut session);
    assert_eq!(quiz::summarize(&session), Err(SessionError::InvalidState));
}

#[test]
fn retry_restores_the_initial_state_with_the_same_questions() {
    let mut session = session(quiz::bank::SUBJECT_MATH, "Proporții & Procente");
    let questions_before: Vec<_> = (0..session.total())
        .map(|_| {
            let prompt = session.current_question().unwrap().prompt.clone();
            solve_current(&mut session);
            prompt
        })
        .collect();
    assert!(session.is_complete());

    session.retry();
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.selected(), None);
    assert!(!session.locked());
    assert_eq!(session.correct_count(), 0);
    assert_eq!(
        session.current_question().unwrap().prompt,
        questions_before[0]
    );

    // Retry is also valid mid-quiz.
    session.select(0).unwrap();
    session.retry();
    assert_eq!(session.selected(), None);
}

#[test]
fn an_empty_bank_makes_a_session_that_is_complete_from_the_start() {
    let session = session("Fizică", "Optică");
    assert_eq!(session.total(), 0);
    assert!(session.is_complete());
    assert!(session.current_question().is_none());

    let summary = quiz::summarize(&session).expect("empty session should summarize");
    assert_eq!(summary.correct, 0);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.accuracy_percent, 0);
}
