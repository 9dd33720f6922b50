//! Desktop UI for reviewing, practicing and analysing recorded mistakes.

use eframe::egui;
use mistake_practice::analysis::MistakeAnalysis;
use mistake_practice::config::Config;
use mistake_practice::error::PracticeError;
use mistake_practice::models::{PracticeSession, PracticeState, QuestionBank, review};
use mistake_practice::storage::{MistakeStore, Mistakes, load_question_bank};

/// Application screen states
#[derive(Default, Clone, Copy, PartialEq, Eq)]
enum AppScreen {
    #[default]
    Review,
    Practice,
    Analysis,
}

/// Practice actions collected during rendering and applied afterwards.
enum PracticeAction {
    Toggle(String),
    Submit,
    Next,
    Restart,
}

pub struct MistakesApp {
    show_confirmation_dialog: bool,
    allowed_to_close: bool,
    config: Config,
    store: MistakeStore,
    bank: QuestionBank,
    mistakes: Mistakes,
    analysis: MistakeAnalysis,

    current_screen: AppScreen,
    practice: Option<PracticeSession>,
    /// Warning for the last rejected practice action.
    notice: Option<String>,

    show_result_dialog: bool,
    result_message: String,
}

impl eframe::App for MistakesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_navigation(ctx);

        match self.current_screen {
            AppScreen::Review => self.render_review_screen(ctx),
            AppScreen::Practice => self.render_practice_screen(ctx),
            AppScreen::Analysis => self.render_analysis_screen(ctx),
        }

        // Handle window close requests with confirmation dialog
        if ctx.input(|i| i.viewport().close_requested()) && !self.allowed_to_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.show_confirmation_dialog = true;
        }

        if self.show_confirmation_dialog {
            egui::Window::new("Do you want to quit?")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = false;
                        }

                        if ui.button("Yes").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = true;
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
        }

        if self.show_result_dialog {
            egui::Window::new("Open File")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&self.result_message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.show_result_dialog = false;
                    }
                });
        }
    }
}

impl MistakesApp {
    /// Creates the app and loads the mistake store named in `config`.
    pub fn new(config: Config, bank: QuestionBank) -> Self {
        let store = MistakeStore::new(config.mistakes_path.clone());
        let mut app = Self {
            show_confirmation_dialog: false,
            allowed_to_close: false,
            config,
            store,
            bank,
            mistakes: Mistakes::new(),
            analysis: MistakeAnalysis::default(),
            current_screen: AppScreen::Review,
            practice: None,
            notice: None,
            show_result_dialog: false,
            result_message: String::new(),
        };
        app.reload_mistakes();
        app
    }

    /// Re-reads the store and recomputes the analysis.
    fn reload_mistakes(&mut self) {
        self.mistakes = self.store.load();
        self.analysis = MistakeAnalysis::compute(&self.mistakes, &self.bank, self.config.top_n);
    }

    fn switch_to(&mut self, screen: AppScreen) {
        self.reload_mistakes();
        self.notice = None;
        if screen == AppScreen::Practice && self.practice.is_none() {
            self.practice = PracticeSession::start(&self.mistakes).ok();
        }
        self.current_screen = screen;
    }

    fn render_navigation(&mut self, ctx: &egui::Context) {
        let mut action_screen: Option<AppScreen> = None;
        let mut action_open_questions = false;
        let mut action_open_mistakes = false;

        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (screen, title) in [
                    (AppScreen::Review, "All Mistakes"),
                    (AppScreen::Practice, "Practice"),
                    (AppScreen::Analysis, "Analysis"),
                ] {
                    if ui.selectable_label(self.current_screen == screen, title).clicked() {
                        action_screen = Some(screen);
                    }
                }
                ui.separator();
                if ui.button("Open Questions...").clicked() {
                    action_open_questions = true;
                }
                if ui.button("Open Mistakes...").clicked() {
                    action_open_mistakes = true;
                }
            });
        });

        if action_open_questions {
            self.handle_open_questions();
        }
        if action_open_mistakes {
            self.handle_open_mistakes();
        }
        if let Some(screen) = action_screen {
            self.switch_to(screen);
        }
    }

    fn render_review_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("All Bulk Practice Mistakes");
            ui.label(format!("Store: {}", self.store.path().display()));
            ui.separator();

            if self.mistakes.is_empty() {
                ui.label("No bulk practice mistakes recorded yet.");
                return;
            }

            egui::ScrollArea::vertical()
                .id_source("review_list")
                .show(ui, |ui| {
                    for entry in review(&self.mistakes, &self.bank) {
                        match &entry.resolution {
                            Ok(resolved) => {
                                let question = resolved.question;
                                ui.group(|ui| {
                                    ui.strong(format!("{}. {}", resolved.key.label(), question.prompt));
                                    if !question.instruction.is_empty() {
                                        ui.label(&question.instruction);
                                    }
                                    for (label, text) in &question.options {
                                        ui.label(format!("- {}: {}", label, text));
                                    }
                                    ui.colored_label(
                                        egui::Color32::DARK_GREEN,
                                        format!(
                                            "Correct Answer(s): {}",
                                            entry.sorted_answers().unwrap_or_default().join(", ")
                                        ),
                                    );
                                    ui.colored_label(
                                        egui::Color32::from_rgb(200, 120, 0),
                                        format!("You answered this wrong {} time(s).", entry.count),
                                    );
                                });
                            }
                            Err(e) => {
                                ui.colored_label(
                                    egui::Color32::RED,
                                    format!("Error processing question {}: {}", entry.key, e),
                                );
                            }
                        }
                        ui.add_space(6.0);
                    }
                });
        });
    }

    fn render_practice_screen(&mut self, ctx: &egui::Context) {
        let mut action: Option<PracticeAction> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Practice Bulk Mistakes");

            let bank = &self.bank;
            let Some(session) = self.practice.as_mut() else {
                ui.label("No bulk mistakes to practice!");
                return;
            };

            if session.state() == PracticeState::Complete {
                let summary = session.summary();
                ui.heading("You've practiced all mistaken questions!");
                ui.add_space(10.0);
                ui.label("Round Summary:");
                ui.label(format!("- Correct answers: {}", summary.correct));
                ui.label(format!("- Wrong answers: {}", summary.wrong));
                ui.label(format!("- Accuracy: {:.1}%", summary.accuracy));
                ui.add_space(20.0);
                if ui.button("Restart Practice").clicked() {
                    action = Some(PracticeAction::Restart);
                }
                return;
            }

            let Some(item) = session.current(bank) else {
                // Trailing keys were unresolvable; the summary shows next frame.
                ui.ctx().request_repaint();
                return;
            };
            let question = item.resolved.question;
            let submitted = session.state() == PracticeState::Submitted;

            ui.strong(format!("Mistake {} / {}", session.position(), session.total()));
            ui.label(format!(
                "{} - Times missed: {}",
                item.resolved.key.label(),
                item.times_missed
            ));
            ui.add_space(10.0);

            ui.group(|ui| {
                ui.set_min_height(150.0);
                if !question.instruction.is_empty() {
                    ui.label(&question.instruction);
                }
                ui.heading(&question.prompt);
                ui.add_space(10.0);

                for (label, text) in &question.options {
                    let mut checked = session.is_selected(label);
                    let checkbox = ui.add_enabled(
                        !submitted,
                        egui::Checkbox::new(&mut checked, format!("{}: {}", label, text)),
                    );
                    if checkbox.changed() {
                        action = Some(PracticeAction::Toggle(label.clone()));
                    }
                }
            });

            ui.add_space(10.0);

            if !session.selection().is_empty() {
                let selected: Vec<&str> = session.selection().iter().map(String::as_str).collect();
                ui.label(format!("Selected: {}", selected.join(", ")));
            }

            if let Some(outcome) = session.last_outcome() {
                if outcome.correct {
                    ui.colored_label(egui::Color32::DARK_GREEN, "Correct!");
                } else {
                    ui.colored_label(egui::Color32::RED, "Incorrect.");
                    ui.label(format!("Correct Answer(s): {}", outcome.correct_answers.join(", ")));
                }
            }

            if let Some(notice) = &self.notice {
                ui.colored_label(egui::Color32::from_rgb(200, 120, 0), notice);
            }

            ui.horizontal(|ui| {
                if ui.button("Submit").clicked() {
                    action = Some(PracticeAction::Submit);
                }
                if ui.button("Next").clicked() {
                    action = Some(PracticeAction::Next);
                }
            });

            ui.add_space(10.0);
            ui.add(egui::ProgressBar::new(session.progress()).text(format!(
                "Progress: {} / {}",
                session.position(),
                session.total()
            )));
        });

        if let Some(action) = action {
            self.apply_practice_action(action);
        }
    }

    fn apply_practice_action(&mut self, action: PracticeAction) {
        let Some(session) = self.practice.as_mut() else {
            return;
        };

        let result = match action {
            PracticeAction::Toggle(label) => {
                session.toggle(&label);
                Ok(())
            }
            PracticeAction::Submit => session.submit(&self.bank, &self.store).map(|_| ()),
            PracticeAction::Next => session.next(&self.bank).map(|_| ()),
            PracticeAction::Restart => {
                let mistakes = self.store.load();
                session.restart(&mistakes).map(|_| ())
            }
        };

        match result {
            Ok(()) => self.notice = None,
            Err(PracticeError::NothingToPractice) => {
                self.practice = None;
                self.notice = None;
            }
            Err(e @ PracticeError::Storage(_)) => {
                log::error!("Practice action failed: {}", e);
                self.notice = Some(format!("Could not save mistake: {}", e));
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn render_analysis_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Bulk Mistake Analysis");

            let analysis = &self.analysis;
            if analysis.is_empty() {
                ui.label("No bulk mistakes found.");
                return;
            }

            egui::ScrollArea::vertical()
                .id_source("analysis")
                .show(ui, |ui| {
                    ui.separator();
                    ui.heading("Mistake Trend by Day");
                    let max_total = analysis.max_day_total().max(1) as f32;
                    for (day, total) in &analysis.per_day {
                        ui.horizontal(|ui| {
                            ui.label(format!("Day {:>3}", day));
                            ui.add(
                                egui::ProgressBar::new(*total as f32 / max_total)
                                    .desired_width(300.0)
                                    .text(total.to_string()),
                            );
                        });
                    }

                    ui.separator();
                    ui.heading("Top Mistaken Questions");
                    egui::Grid::new("top_questions")
                        .striped(true)
                        .num_columns(4)
                        .show(ui, |ui| {
                            ui.strong("Day");
                            ui.strong("Q");
                            ui.strong("Question");
                            ui.strong("Count");
                            ui.end_row();

                            for row in &analysis.top {
                                ui.label(row.day.map(|d| d.to_string()).unwrap_or_default());
                                ui.label(row.index.map(|i| (u64::from(i) + 1).to_string()).unwrap_or_default());
                                ui.label(&row.question);
                                ui.label(row.count.to_string());
                                ui.end_row();
                            }
                        });

                    ui.separator();
                    ui.heading("Mistake Distribution Insights");
                    ui.label(format!(
                        "Total unique questions with mistakes: {}",
                        analysis.distinct_keys
                    ));
                    ui.label(format!("Total recorded mistakes: {}", analysis.total_mistakes));
                    if let Some(day) = analysis.busiest_day {
                        ui.label(format!("Day with most mistakes: {}", day));
                    }
                });
        });
    }

    /// Handles loading a different question bank
    fn handle_open_questions(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return;
        };

        match load_question_bank(&path, self.config.questions_per_day) {
            Ok(bank) => {
                self.result_message = format!(
                    "Loaded {} questions from '{}'.",
                    bank.len(),
                    path.display()
                );
                self.bank = bank;
                self.config.questions_path = path;
                self.practice = None;
                self.switch_to(self.current_screen);
            }
            Err(e) => {
                self.result_message = format!(
                    "Failed to load questions: {}\n\nThe file must be a JSON array of objects with\n\"question\", \"instruction\", \"options\" and \"answers\".",
                    e
                );
            }
        }
        self.show_result_dialog = true;
    }

    /// Handles switching to a different mistakes file
    fn handle_open_mistakes(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return;
        };

        self.store = MistakeStore::new(path.clone());
        self.config.mistakes_path = path;
        self.practice = None;
        self.switch_to(self.current_screen);
        self.result_message = format!(
            "Using '{}' ({} mistakes).",
            self.store.path().display(),
            self.mistakes.len()
        );
        self.show_result_dialog = true;
    }
}
