use crate::actions::Action;
use crate::board::Board;
use crate::launcher::launch_action;
use crate::plugin::PluginManager;
use crate::schedule::RepeatingTimer;
use chrono::Local;
use eframe::egui;
use std::time::{Duration, Instant};

#[derive(Default)]
pub struct SaveDialog {
    pub open: bool,
    pub name: String,
}

/// An inline edit in progress: the stopwatch id and the text being typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineEdit {
    pub id: String,
    pub buffer: String,
}

pub struct StopwatchApp {
    pub board: Board,
    pub plugins: PluginManager,
    pub query: String,
    pub results: Vec<Action>,
    pub error: Option<String>,
    pub save_dialog: SaveDialog,
    pub editing_name: Option<InlineEdit>,
    pub editing_time: Option<InlineEdit>,
    timer: RepeatingTimer,
}

impl StopwatchApp {
    pub fn new(board: Board, plugins: PluginManager, tick: Duration) -> Self {
        let mut app = Self {
            board,
            plugins,
            query: String::new(),
            results: Vec::new(),
            error: None,
            save_dialog: SaveDialog::default(),
            editing_name: None,
            editing_time: None,
            timer: RepeatingTimer::new(tick, Instant::now()),
        };
        app.search();
        app
    }

    pub fn search(&mut self) {
        self.results = if self.query.trim().is_empty() {
            self.plugins.commands()
        } else {
            self.plugins.search(&self.query, &self.board)
        };
    }

    /// Run an action from the command box or a button.
    pub fn run_action(&mut self, action: &Action) {
        if let Some(q) = action.action.strip_prefix("query:") {
            self.query = q.to_string();
        } else if let Err(e) = launch_action(&mut self.board, action) {
            tracing::error!("action '{}' failed: {e}", action.action);
            self.error = Some(format!("Failed: {e}"));
            return;
        }
        self.error = None;
        self.search();
    }

    /// Tick the board when the schedule is due. Returns whether it ticked.
    pub fn poll_tick(&mut self, now: Instant) -> bool {
        if !self.timer.poll(now) {
            return false;
        }
        self.board.tick();
        if !self.query.trim().is_empty() {
            self.search();
        }
        true
    }

    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    /// Stop ticking and flush the registry to disk.
    pub fn shutdown(&mut self) {
        if self.timer.is_cancelled() {
            return;
        }
        self.timer.cancel();
        self.board.persist();
        tracing::info!("stopwatch board closed");
    }

    /// Create a stopwatch with the name typed into the save dialog.
    pub fn submit_save_dialog(&mut self) {
        let name = std::mem::take(&mut self.save_dialog.name);
        self.run_action(&Action::new(
            "Save stopwatch",
            "Stopwatch",
            format!("stopwatch:new:{name}"),
        ));
        self.save_dialog.open = false;
    }

    pub fn begin_rename(&mut self, id: &str) {
        if let Some(sw) = self.board.registry().get(id) {
            self.editing_name = Some(InlineEdit {
                id: sw.id.clone(),
                buffer: sw.name.clone(),
            });
        }
    }

    pub fn commit_rename(&mut self) {
        if let Some(edit) = self.editing_name.take() {
            self.run_action(&Action::new(
                "Rename stopwatch",
                "Stopwatch",
                format!("stopwatch:rename:{}|{}", edit.id, edit.buffer),
            ));
        }
    }

    pub fn begin_time_edit(&mut self, id: &str) {
        if let Some(sw) = self.board.registry().get(id) {
            self.editing_time = Some(InlineEdit {
                id: sw.id.clone(),
                buffer: self.board.format(sw.accumulated_ms),
            });
        }
    }

    /// Invalid input leaves the time as it was.
    pub fn commit_time_edit(&mut self) {
        if let Some(edit) = self.editing_time.take() {
            self.run_action(&Action::new(
                "Set stopwatch time",
                "Stopwatch",
                format!("stopwatch:set:{}|{}", edit.id, edit.buffer),
            ));
        }
    }

    fn header_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("⏱ Stopwatch");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("☰").on_hover_text("Save a named stopwatch").clicked() {
                    self.save_dialog.open = true;
                }
                if ui.button("+").on_hover_text("New stopwatch").clicked() {
                    self.run_action(&Action::new("New stopwatch", "Stopwatch", "stopwatch:new:"));
                }
            });
        });
        if self.save_dialog.open {
            let mut submit = false;
            ui.horizontal(|ui| {
                let input = ui.add(
                    egui::TextEdit::singleline(&mut self.save_dialog.name)
                        .hint_text("Enter stopwatch name"),
                );
                if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                if ui.button("Save").clicked() {
                    submit = true;
                }
                if ui.button("✖").clicked() {
                    self.save_dialog.open = false;
                }
            });
            if submit {
                self.submit_save_dialog();
            }
        }
    }

    fn main_display_ui(&self, ui: &mut egui::Ui) {
        ui.label("Main Stopwatch");
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(self.board.main_display()).monospace().size(36.0));
            });
        });
        ui.weak(format!(
            "Started on: {}",
            self.board.time_source().started_on()
        ));
    }

    fn list_ui(&mut self, ui: &mut egui::Ui) {
        let mut pending: Option<Action> = None;
        let mut rename_start = None;
        let mut time_start = None;
        let mut commit_rename = false;
        let mut commit_time = false;

        for sw in self.board.stopwatches() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                match self.editing_name.as_mut() {
                    Some(edit) if edit.id == sw.id => {
                        ui.horizontal(|ui| {
                            let input = ui.text_edit_singleline(&mut edit.buffer);
                            let enter =
                                input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                            if ui.button("Save Name").clicked() || enter {
                                commit_rename = true;
                            }
                        });
                    }
                    _ => {
                        let name = ui.add(
                            egui::Label::new(egui::RichText::new(&sw.name).strong())
                                .sense(egui::Sense::click()),
                        );
                        if name.clicked() {
                            rename_start = Some(sw.id.clone());
                        }
                    }
                }
                match self.editing_time.as_mut() {
                    Some(edit) if edit.id == sw.id => {
                        let input = ui.text_edit_singleline(&mut edit.buffer);
                        if input.lost_focus() {
                            commit_time = true;
                        }
                    }
                    _ => {
                        let time = ui.add(
                            egui::Label::new(
                                egui::RichText::new(self.board.format(sw.accumulated_ms))
                                    .monospace(),
                            )
                            .sense(egui::Sense::click()),
                        );
                        if time.on_hover_text("Click to set the time").clicked() {
                            time_start = Some(sw.id.clone());
                        }
                    }
                }
                ui.weak(
                    sw.created_at
                        .with_timezone(&Local)
                        .format("%Y-%m-%d")
                        .to_string(),
                );
                ui.horizontal(|ui| {
                    let toggle = if sw.is_running { "⏸" } else { "▶" };
                    if ui.button(toggle).clicked() {
                        pending = Some(Action::new(
                            "Toggle stopwatch",
                            "Stopwatch",
                            format!("stopwatch:toggle:{}", sw.id),
                        ));
                    }
                    if ui.button("⟲").on_hover_text("Reset").clicked() {
                        pending = Some(Action::new(
                            "Reset stopwatch",
                            "Stopwatch",
                            format!("stopwatch:reset:{}", sw.id),
                        ));
                    }
                    if ui.button("✖").on_hover_text("Delete").clicked() {
                        pending = Some(Action::new(
                            "Delete stopwatch",
                            "Stopwatch",
                            format!("stopwatch:delete:{}", sw.id),
                        ));
                    }
                });
            });
        }

        if commit_rename {
            self.commit_rename();
        }
        if commit_time {
            self.commit_time_edit();
        }
        if let Some(id) = rename_start {
            self.begin_rename(&id);
        }
        if let Some(id) = time_start {
            self.begin_time_edit(&id);
        }
        if let Some(action) = pending {
            self.run_action(&action);
        }
    }

    fn command_ui(&mut self, ui: &mut egui::Ui) {
        let input = ui.add(egui::TextEdit::singleline(&mut self.query).hint_text("sw list"));
        if input.changed() {
            self.search();
        }
        let mut chosen = None;
        egui::ScrollArea::vertical()
            .id_source("command_results")
            .max_height(150.0)
            .show(ui, |ui| {
                for a in &self.results {
                    if ui.button(format!("{} : {}", a.label, a.desc)).clicked() {
                        chosen = Some(a.clone());
                    }
                }
            });
        if let Some(action) = chosen {
            self.run_action(&action);
        }
    }

    /// One frame: tick if due, render, and schedule the next repaint.
    pub fn draw(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.poll_tick(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.header_ui(ui);
            if let Some(err) = &self.error {
                ui.colored_label(egui::Color32::RED, err);
            }
            ui.add_space(8.0);
            self.main_display_ui(ui);
            ui.add_space(8.0);
            egui::ScrollArea::vertical()
                .id_source("stopwatch_list")
                .max_height((ui.available_height() - 190.0).max(120.0))
                .show(ui, |ui| self.list_ui(ui));
            ui.separator();
            self.command_ui(ui);
        });

        if let Some(wait) = self.time_until_tick(now) {
            ctx.request_repaint_after(wait);
        }
    }
}

impl eframe::App for StopwatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.draw(ctx);
    }
}

impl Drop for StopwatchApp {
    fn drop(&mut self) {
        self.shutdown();
    }
}
