use chrono::Duration;
use quiz_pass::export::json::parse_quiz;
use quiz_pass::session::clock::fixed_clock;
use quiz_pass::session::{
    Action, ActionTable, QuizSession, SessionStatus, SubmitReason, TickOutcome, Ticker,
};
use quiz_pass::{FormEndpoint, PageElements, QuizError, QuizPassConfig, QuizSubmission};
use std::cell::RefCell;
use std::rc::Rc;

const QUIZ_JSON: &str = r#"{
  "id": 17,
  "title": "Planets",
  "pass": { "totalTime": 5 },
  "questions": [
    { "id": 101, "text": "Largest planet?", "position": 1,
      "options": [{ "id": 1, "text": "Jupiter" }, { "id": 2, "text": "Mars" }] },
    { "id": 102, "text": "Closest to the Sun?", "position": 2,
      "options": [{ "id": 3, "text": "Venus" }, { "id": 4, "text": "Mercury" }] },
    { "id": 103, "text": "Has the most moons?", "position": 3,
      "options": [{ "id": 5, "text": "Saturn" }, { "id": 6, "text": "Earth" }] }
  ]
}"#;

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<QuizSubmission>>>);

impl FormEndpoint for Recorder {
    fn submit(&mut self, submission: &QuizSubmission) -> Result<(), QuizError> {
        self.0.borrow_mut().push(submission.clone());
        Ok(())
    }
}

fn start_planets() -> (QuizSession, Recorder) {
    let quiz = parse_quiz(QUIZ_JSON).unwrap();
    let config = QuizPassConfig::from_value(&quiz.pass);
    let recorder = Recorder::default();
    let session = QuizSession::start(
        &quiz,
        config,
        PageElements::complete(Box::new(recorder.clone())),
        fixed_clock(),
    )
    .expect("planets quiz starts");
    (session, recorder)
}

#[test]
fn timer_expiry_submits_after_navigation() {
    let (mut session, recorder) = start_planets();
    let actions = ActionTable::default();
    let clock = session.clock().clone();

    assert_eq!(session.total_time(), 5);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.page().question_progress.width_percent, 0.0);

    session.select_answer(0);
    assert_eq!(session.current_index(), 1);

    actions.dispatch_id(&mut session, "prev");
    assert_eq!(session.current_index(), 0);

    let mut ticker = Ticker::starting_at(clock.now());
    let mut ticks = 0;
    while !ticker.is_stopped() {
        clock.advance(Duration::seconds(1));
        assert!(ticker.is_due(clock.now()));
        ticks += 1;
        match session.tick() {
            TickOutcome::Continue => ticker.schedule_after(clock.now()),
            TickOutcome::Expired | TickOutcome::Stopped => ticker.stop(),
        }
    }

    assert_eq!(ticks, 5);
    assert_eq!(session.time_remaining(), 0);
    assert_eq!(session.page().form.duration_seconds(), Some(5));
    assert_eq!(
        session.status(),
        SessionStatus::Submitted(SubmitReason::TimeExpired)
    );

    let submissions = recorder.0.borrow();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].quiz_id, 17);
    assert_eq!(submissions[0].duration_seconds, Some(5));
    assert_eq!(submissions[0].answers.get(&101), Some(&1));
    assert_eq!(submissions[0].answers.len(), 1);
}

#[test]
fn answering_everything_then_submitting() {
    let (mut session, recorder) = start_planets();
    let actions = ActionTable::default();

    for option in [0, 1, 0] {
        session.select_answer(option);
    }
    assert_eq!(session.current_index(), 2);
    assert!(!session.page().submit_button.as_ref().unwrap().disabled);

    session.clock().advance(Duration::milliseconds(3_400));
    assert!(actions.dispatch(&mut session, Action::Submit));

    let submissions = recorder.0.borrow();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].duration_seconds, Some(3));
    assert_eq!(
        submissions[0].answers.iter().map(|(q, o)| (*q, *o)).collect::<Vec<_>>(),
        vec![(101, 1), (102, 4), (103, 5)]
    );
}

#[test]
fn progress_runs_from_zero_to_full() {
    let (mut session, _) = start_planets();
    let actions = ActionTable::default();

    let mut widths = vec![session.page().question_progress.width_percent];
    for _ in 0..3 {
        actions.dispatch(&mut session, Action::Next);
        widths.push(session.page().question_progress.width_percent);
    }

    assert_eq!(widths, vec![0.0, 50.0, 100.0, 100.0]);
    assert_eq!(session.page().counter.text, "Question 3/3");
}
