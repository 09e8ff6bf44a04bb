// src/gui/components/tables.rs
//
// Tab bodies. Purely views over `app.report`; no engine calls here.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::DATE_DISPLAY_FORMAT;
use crate::gui::app::App;
use crate::report::{fmt_count, fmt_signed};

use super::metrics::growth_color;

const ROW_H: f32 = 20.0;

/// Cell text plus an optional color for the growth column.
struct Cell {
    text: String,
    color: Option<egui::Color32>,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self { Self { text: text.into(), color: None } }
    fn growth(v: i64) -> Self { Self { text: fmt_signed(v), color: Some(growth_color(v)) } }
}

pub fn overview(ui: &mut egui::Ui, app: &App) {
    let Some(report) = app.report.as_ref() else { return };
    if report.is_empty() {
        empty_filter_notice(ui);
        return;
    }

    egui::ScrollArea::vertical().id_salt("overview_scroll").show(ui, |ui| {
        if let Some(last) = report.last_date {
            ui.heading(format!("Total votes per project on {}", last.format(DATE_DISPLAY_FORMAT)));
            let rows: Vec<Vec<Cell>> = report.last_day.iter()
                .map(|s| vec![Cell::plain(s.project_title.clone()), Cell::plain(fmt_count(s.vote_count))])
                .collect();
            table(ui, "last_day", &["Project", "Votes"], &rows);
        }

        ui.add_space(12.0);

        if let Some(prev) = report.day_over_day.prev_date {
            ui.heading(format!("Growth since {}", prev.format(DATE_DISPLAY_FORMAT)));
            let rows: Vec<Vec<Cell>> = report.day_over_day.rows.iter()
                .map(|r| vec![
                    Cell::plain(r.project_title.clone()),
                    Cell::plain(fmt_count(r.last)),
                    Cell::plain(fmt_count(r.previous)),
                    Cell::growth(r.diff),
                ])
                .collect();
            table(ui, "day_over_day", &["Project", "Last", "Previous", "Growth"], &rows);
        }
    });
}

pub fn standings(ui: &mut egui::Ui, app: &App) {
    let Some(report) = app.report.as_ref() else { return };
    if report.is_empty() {
        empty_filter_notice(ui);
        return;
    }

    ui.heading("Current votes per project");
    let max = report.standings.iter().map(|o| o.vote_count).max().unwrap_or(0).max(1) as f64;

    egui::ScrollArea::vertical().id_salt("standings_scroll").show(ui, |ui| {
        for o in &report.standings {
            ui.horizontal(|ui| {
                ui.add_sized([260.0, ROW_H], egui::Label::new(o.project_title.as_str()).truncate());
                let frac = (o.vote_count as f64 / max) as f32;
                ui.add(
                    egui::ProgressBar::new(frac)
                        .desired_width(ui.available_width())
                        .text(fmt_count(o.vote_count)),
                );
            });
        }
    });
}

pub fn details(ui: &mut egui::Ui, app: &App) {
    let Some(report) = app.report.as_ref() else { return };
    if report.is_empty() {
        empty_filter_notice(ui);
        return;
    }

    ui.heading(format!("Observations ({})", report.details.len()));
    let rows: Vec<Vec<Cell>> = report.details.iter()
        .map(|o| vec![
            Cell::plain(o.project_title.clone()),
            Cell::plain(fmt_count(o.vote_count)),
            Cell::plain(o.observed_at.format("%Y-%m-%d %H:%M:%S").to_string()),
        ])
        .collect();
    egui::ScrollArea::vertical().id_salt("details_scroll").show(ui, |ui| {
        table(ui, "details", &["Project", "Votes", "Timestamp"], &rows);
    });
}

fn empty_filter_notice(ui: &mut egui::Ui) {
    ui.label("No observations match the current filter. Select projects or widen the period.");
}

/// Static table: first column left-aligned, the rest right-aligned.
fn table(ui: &mut egui::Ui, id: &str, headers: &[&str], rows: &[Vec<Cell>]) {
    let mut table = TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));

    for ci in 0..headers.len() {
        let col = if ci == 0 {
            Column::initial(260.0).resizable(true).clip(true).at_least(80.0)
        } else {
            Column::initial(120.0).resizable(true).clip(true).at_least(40.0)
        };
        table = table.column(col);
    }

    table
        .header(24.0, |mut header| {
            for (ci, h) in headers.iter().enumerate() {
                header.col(|ui| {
                    let text = RichText::new(*h).strong();
                    if ci == 0 {
                        ui.label(text);
                    } else {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(text); });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, rows.len(), |mut row| {
                let Some(cells) = rows.get(row.index()) else { return };
                for (ci, cell) in cells.iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let mut rt = RichText::new(cell.text.as_str());
                        if let Some(c) = cell.color {
                            rt = rt.color(c);
                        }
                        if ci == 0 {
                            ui.label(rt);
                        } else {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(rt); });
                        }
                    });
                }
            });
        });
}
