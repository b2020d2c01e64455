//! Navigation, countdown and submission for one pass through a quiz.
//!
//! The session owns the question cards and the bound page. Every state
//! change writes straight through to the page elements, so the page always
//! reflects the session.

use super::clock::Clock;
use super::timer::{format_time, time_percent};
use crate::config::QuizPassConfig;
use crate::models::{QuestionCard, Quiz, QuizSubmission, Selection};
use crate::page::{BarStyle, PageElements, QuizPage, TIME_WARNING_PERCENT};
use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitReason {
    Manual,
    TimeExpired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Submitted(SubmitReason),
}

/// What the caller should do with the tick schedule after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Schedule the next tick one second from now.
    Continue,
    /// Time ran out and the form was submitted.
    Expired,
    /// The session had already been submitted; nothing happened.
    Stopped,
}

#[derive(Debug)]
pub struct QuizSession {
    quiz_id: i64,
    cards: Vec<QuestionCard>,
    page: QuizPage,
    current_index: usize,
    total_time: u32,
    time_remaining: u32,
    started_at: DateTime<Utc>,
    clock: Clock,
    status: SessionStatus,
    last_error: Option<String>,
}

impl QuizSession {
    /// Starts a session on the given page: shows the first question and
    /// runs the first tick.
    ///
    /// Returns `None` when the quiz has no questions or the page lacks a
    /// required element; such a page is not a quiz pass page.
    pub fn start(
        quiz: &Quiz,
        config: QuizPassConfig,
        elements: PageElements,
        clock: Clock,
    ) -> Option<Self> {
        let cards: Vec<QuestionCard> = quiz
            .ordered_questions()
            .into_iter()
            .map(QuestionCard::new)
            .collect();
        if cards.is_empty() {
            debug!("quiz {} has no question cards, nothing to run", quiz.id);
            return None;
        }

        let page = match QuizPage::bind(elements) {
            Ok(page) => page,
            Err(missing) => {
                let names: Vec<&str> = missing.iter().map(|id| id.as_str()).collect();
                warn!("quiz pass page is missing {}, session not started", names.join(", "));
                return None;
            }
        };

        let started_at = clock.now();
        let mut session = Self {
            quiz_id: quiz.id,
            cards,
            page,
            current_index: 0,
            total_time: config.total_time,
            time_remaining: config.total_time,
            started_at,
            clock,
            status: SessionStatus::Running,
            last_error: None,
        };
        info!(
            "started quiz {} with {} questions and {}s on the clock",
            session.quiz_id,
            session.total(),
            session.total_time
        );

        session.show(0);
        session.tick();
        Some(session)
    }

    /// Activates the card at `index`, clamped to the valid range.
    pub fn show(&mut self, index: isize) {
        let last = self.total() - 1;
        self.current_index = index.clamp(0, last as isize) as usize;

        for (k, card) in self.cards.iter_mut().enumerate() {
            card.active = k == self.current_index;
        }

        self.page.counter.text = format!("Question {}/{}", self.current_index + 1, self.total());

        let denominator = if last == 0 { 1 } else { last };
        let progress = (self.current_index as f64 * 100.0 / denominator as f64).round();
        self.page.question_progress.width_percent = progress as f32;

        debug!("showing question {}/{}", self.current_index + 1, self.total());
        self.check_submit_state();
    }

    pub fn previous(&mut self) {
        self.show(self.current_index as isize - 1);
    }

    pub fn next(&mut self) {
        self.show(self.current_index as isize + 1);
    }

    /// One second of the countdown.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != SessionStatus::Running {
            return TickOutcome::Stopped;
        }

        self.update_time_ui();

        if self.time_remaining == 0 {
            info!("time is up for quiz {}", self.quiz_id);
            self.finish(SubmitReason::TimeExpired);
            return TickOutcome::Expired;
        }

        self.time_remaining -= 1;
        TickOutcome::Continue
    }

    fn update_time_ui(&mut self) {
        self.page.timer.text = format_time(self.time_remaining);

        if let Some(bar) = &mut self.page.time_progress {
            let percent = time_percent(self.time_remaining, self.total_time);
            bar.width_percent = percent;
            if percent <= TIME_WARNING_PERCENT && bar.style != BarStyle::Warning {
                debug!("time bar switched to warning at {percent}%");
                bar.style = BarStyle::Warning;
            }
        }
    }

    /// Checks an option on the active question. A changed answer moves on to
    /// the next question unless this is the last one; clicking the option that
    /// is already checked does nothing.
    pub fn select_answer(&mut self, option_index: usize) -> Selection {
        if self.status != SessionStatus::Running {
            return Selection::Invalid;
        }
        let selection = self.cards[self.current_index].select(option_index);
        if selection != Selection::Changed {
            return selection;
        }
        debug!(
            "answered question {} with option {}",
            self.current_index + 1,
            option_index + 1
        );

        if self.current_index < self.total() - 1 {
            self.show(self.current_index as isize + 1);
        } else {
            self.check_submit_state();
        }
        selection
    }

    /// Submit is enabled only while the active question has an answer.
    pub fn check_submit_state(&mut self) {
        let answered = self.current_answered();
        if let Some(button) = &mut self.page.submit_button {
            button.disabled = !answered;
        }
    }

    pub fn current_answered(&self) -> bool {
        self.cards[self.current_index].is_answered()
    }

    /// Explicit form submission. Returns `false` if already submitted.
    pub fn submit(&mut self) -> bool {
        if self.status != SessionStatus::Running {
            return false;
        }
        self.finish(SubmitReason::Manual);
        true
    }

    fn finish(&mut self, reason: SubmitReason) {
        let elapsed = self.elapsed_seconds();
        self.page.form.write_duration(elapsed);
        self.status = SessionStatus::Submitted(reason);

        let submission = self.submission();
        match self.page.form.submit(&submission) {
            Ok(()) => info!(
                "submitted quiz {} ({:?}) after {}s with {}/{} answered",
                self.quiz_id,
                reason,
                elapsed,
                submission.answers.len(),
                self.total()
            ),
            Err(e) => {
                error!("submitting quiz {} failed: {}", self.quiz_id, e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Whole seconds since the session started, rounded to nearest.
    pub fn elapsed_seconds(&self) -> u64 {
        let millis = (self.clock.now() - self.started_at).num_milliseconds();
        (millis as f64 / 1000.0).round().max(0.0) as u64
    }

    /// The form payload as it stands now.
    pub fn submission(&self) -> QuizSubmission {
        QuizSubmission {
            quiz_id: self.quiz_id,
            answers: self
                .cards
                .iter()
                .filter_map(|card| {
                    card.selected_option()
                        .map(|option| (card.question.id, option.id))
                })
                .collect(),
            duration_seconds: self.page.form.duration_seconds(),
        }
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_card(&self) -> &QuestionCard {
        &self.cards[self.current_index]
    }

    pub fn cards(&self) -> &[QuestionCard] {
        &self.cards
    }

    pub fn page(&self) -> &QuizPage {
        &self.page
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn total_time(&self) -> u32 {
        self.total_time
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Message of the last failed submission, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
