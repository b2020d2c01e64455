//! Quiz pass window.
//! Renders the pass page from the session state and feeds it clicks and ticks.

use eframe::egui;
use quiz_pass::export::json::JsonFileEndpoint;
use quiz_pass::page::{BarStyle, ProgressBar};
use quiz_pass::session::{
    Action, ActionTable, Clock, QuizSession, SessionStatus, SubmitReason, TickOutcome, Ticker,
};
use quiz_pass::{PageElements, Quiz, QuizPassConfig};
use std::path::PathBuf;

const WARNING_FILL: egui::Color32 = egui::Color32::from_rgb(255, 77, 77);

/// Application screen states
#[derive(Default)]
enum AppScreen {
    #[default]
    Pass,
    Submitted,
    NotApplicable,
}

/// Main application state
pub struct QuizApp {
    quiz_title: String,
    quiz_subtitle: Option<String>,
    session: Option<QuizSession>,
    ticker: Ticker,
    actions: ActionTable,
    result_path: PathBuf,
    current_screen: AppScreen,
}

impl eframe::App for QuizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_timer(ctx);

        match self.current_screen {
            AppScreen::Pass => self.render_pass_screen(ctx),
            AppScreen::Submitted => self.render_submitted_screen(ctx),
            AppScreen::NotApplicable => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading(self.quiz_title.as_str());
                    ui.label("This quiz has nothing to answer yet.");
                });
            }
        }
    }
}

impl QuizApp {
    /// Starts the session for `quiz`; submissions go to `endpoint`.
    pub fn new(quiz: Quiz, endpoint: JsonFileEndpoint) -> Self {
        let clock = Clock::System;
        let result_path = endpoint.path_for(quiz.id);
        let config = QuizPassConfig::from_value(&quiz.pass);
        let session = QuizSession::start(
            &quiz,
            config,
            PageElements::complete(Box::new(endpoint)),
            clock.clone(),
        );
        let current_screen = if session.is_some() {
            AppScreen::Pass
        } else {
            AppScreen::NotApplicable
        };

        Self {
            quiz_title: quiz.title,
            quiz_subtitle: quiz.subtitle,
            session,
            ticker: Ticker::starting_at(clock.now()),
            actions: ActionTable::default(),
            result_path,
            current_screen,
        }
    }

    /// Runs the tick if it is due and asks egui to wake us for the next one.
    fn poll_timer(&mut self, ctx: &egui::Context) {
        let Some(session) = &mut self.session else {
            return;
        };
        let now = session.clock().now();

        if self.ticker.is_due(now) {
            match session.tick() {
                TickOutcome::Continue => self.ticker.schedule_after(session.clock().now()),
                TickOutcome::Expired | TickOutcome::Stopped => self.ticker.stop(),
            }
        }
        if !session.is_running() {
            self.ticker.stop();
            self.current_screen = AppScreen::Submitted;
        }

        if let Some(wait) = self.ticker.until_next(session.clock().now()) {
            ctx.request_repaint_after(wait);
        }
    }

    /// Renders the active question with navigation, timer and progress bars
    fn render_pass_screen(&mut self, ctx: &egui::Context) {
        let Some(session) = &mut self.session else {
            return;
        };

        // Store actions to execute after UI rendering
        let mut action_select: Option<usize> = None;
        let mut action_click: Option<Action> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = session.page();

            ui.heading(self.quiz_title.as_str());
            if let Some(subtitle) = &self.quiz_subtitle {
                ui.label(subtitle.as_str());
            }
            ui.separator();

            ui.horizontal(|ui| {
                ui.label(page.counter.text.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.monospace(page.timer.text.as_str());
                });
            });
            ui.add(egui::ProgressBar::new(page.question_progress.width_percent / 100.0));

            if let Some(bar) = &page.time_progress {
                ui.add(time_bar(bar));
            }

            ui.add_space(20.0);

            let card = session.current_card();
            ui.group(|ui| {
                ui.set_min_height(200.0);
                ui.vertical(|ui| {
                    ui.heading(card.question.text.as_str());
                    ui.add_space(10.0);

                    for (i, option) in card.question.options.iter().enumerate() {
                        let checked = card.selected_index() == Some(i);
                        if ui.radio(checked, option.text.as_str()).clicked() {
                            action_select = Some(i);
                        }
                    }
                });
            });

            ui.add_space(20.0);

            ui.horizontal(|ui| {
                if ui.button("Previous").clicked() {
                    action_click = Some(Action::Prev);
                }
                if ui.button("Next").clicked() {
                    action_click = Some(Action::Next);
                }
                if let Some(button) = &page.submit_button {
                    if ui
                        .add_enabled(!button.disabled, egui::Button::new("Submit"))
                        .clicked()
                    {
                        action_click = Some(Action::Submit);
                    }
                }
            });
        });

        // Execute deferred actions
        if let Some(i) = action_select {
            session.select_answer(i);
        }
        if let Some(action) = action_click {
            self.actions.dispatch(session, action);
        }
        if !session.is_running() {
            self.ticker.stop();
            self.current_screen = AppScreen::Submitted;
            ctx.request_repaint();
        }
    }

    /// Renders the confirmation after the form was sent
    fn render_submitted_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(session) = &self.session else {
                return;
            };

            ui.heading(self.quiz_title.as_str());
            ui.add_space(20.0);

            match session.status() {
                SessionStatus::Submitted(SubmitReason::TimeExpired) => {
                    ui.heading("Time is up!");
                }
                _ => {
                    ui.heading("Answers submitted");
                }
            }

            let submission = session.submission();
            ui.label(format!(
                "Answered {} of {} questions",
                submission.answers.len(),
                session.total()
            ));
            if let Some(seconds) = submission.duration_seconds {
                ui.label(format!("Time taken: {} s", seconds));
            }

            ui.add_space(10.0);
            match session.last_error() {
                Some(e) => {
                    ui.colored_label(WARNING_FILL, format!("Could not save answers: {}", e));
                }
                None => {
                    ui.label(format!("Saved to {}", self.result_path.display()));
                }
            }
        });
    }
}

fn time_bar(bar: &ProgressBar) -> egui::ProgressBar {
    let widget = egui::ProgressBar::new(bar.width_percent / 100.0);
    match bar.style {
        BarStyle::Warning => widget.fill(WARNING_FILL),
        BarStyle::Normal => widget,
    }
}
