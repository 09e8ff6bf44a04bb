// src/gui/app.rs
use std::{error::Error, path::PathBuf};

use eframe::egui;

use crate::{
    config::{
        options::ReportOptions,
        settings::Settings,
        state::{GuiState, Tab},
    },
    engine::ObservationSet,
    report::Report,
    store,
};

use super::components::{metrics, project_panel, tables, tabs};

pub fn run(options: eframe::NativeOptions, settings: Settings) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Vote Monitor",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(settings.store.path)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only); filter lives in state.report
    pub state: GuiState,

    pub log_path: PathBuf,

    // loaded once per reload, never mutated in between
    pub data: ObservationSet,
    pub skipped: usize,

    // project list UI
    pub projects: Vec<String>,
    pub last_clicked: Option<usize>,

    // derived from data + state.report
    pub report: Option<Report>,

    pub status: String,
}

impl App {
    pub fn new(log_path: PathBuf) -> Self {
        let mut app = Self {
            state: GuiState::default(),
            log_path,
            data: ObservationSet::default(),
            skipped: 0,
            projects: Vec::new(),
            last_clicked: None,
            report: None,
            status: s!("Idle"),
        };
        app.reload();
        logf!("Init: projects={}, log={}", app.projects.len(), app.log_path.display());
        app
    }

    /// Re-read the log. A filter that covered everything keeps covering
    /// everything; narrowed projects or dates stay as the user set them.
    pub fn reload(&mut self) {
        let previous = match store::load_observations(&self.log_path) {
            Ok(loaded) => {
                self.skipped = loaded.skipped();
                let previous = std::mem::replace(&mut self.data, loaded.observations);
                self.status = if self.skipped > 0 {
                    format!("Loaded {} observation(s), {} malformed row(s) skipped", self.data.len(), self.skipped)
                } else {
                    format!("Loaded {} observation(s)", self.data.len())
                };
                previous
            }
            Err(e) => {
                loge!("Reload: {}", e);
                self.status = format!("Failed to read {}: {}", self.log_path.display(), e);
                return;
            }
        };

        self.projects = self.data.titles().into_iter().collect();
        self.last_clicked = None;

        self.state.report = match self.state.report.take() {
            Some(mut opts) if !self.data.is_empty() => {
                opts.follow_reload(&previous, &self.data);
                Some(opts)
            }
            _ => ReportOptions::defaults_for(&self.data),
        };

        self.rebuild_report();
    }

    /// Recompute every derived view from the loaded set and current filter.
    pub fn rebuild_report(&mut self) {
        self.report = self
            .state
            .report
            .as_ref()
            .map(|opts| Report::build(&self.data, opts, self.skipped));
    }

    #[inline]
    pub fn selection_len(&self) -> usize {
        self.state.report.as_ref().map_or(0, |o| o.selection.len())
    }

    #[inline]
    pub fn set_selection_message(&mut self) {
        let n = self.selection_len();
        let rows = self.report.as_ref().map_or(0, |r| r.details.len());
        self.status = format!("Selection: {} of {} project(s), {} observation(s)", n, self.projects.len(), rows);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("projects")
            .resizable(false)
            .show(ctx, |ui| {
                project_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.data.is_empty() {
                ui.heading("No data to display");
                ui.label(format!(
                    "{} has no observations yet. Record some with the CLI (`cli record`) and press Reload.",
                    self.log_path.display()
                ));
                return;
            }

            metrics::draw(ui, self);

            ui.separator();

            tabs::draw(ui, self);

            ui.separator();

            match self.state.tab {
                Tab::Overview => tables::overview(ui, self),
                Tab::Standings => tables::standings(ui, self),
                Tab::Details => tables::details(ui, self),
            }
        });
    }
}
