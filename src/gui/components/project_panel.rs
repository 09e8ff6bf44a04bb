// src/gui/components/project_panel.rs
//
// Renders the left project list and the date range, and applies changes
// directly to `app`. Handles ctrl/shift range behavior and rebuilds the
// report on any change.

use eframe::egui;
use egui_extras::DatePickerButton;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");

    if ui.button("Reload").on_hover_text("Re-read the observation log").clicked() {
        logf!("UI: Reload requested");
        app.reload();
    }

    ui.separator();

    // Apply current filter → report, set status.
    let apply_change = |app: &mut App| {
        app.rebuild_report();
        app.set_selection_message();
    };

    let Some(opts) = app.state.report.as_mut() else {
        ui.label("No projects yet");
        return;
    };

    ui.label("Period");
    let mut range_changed = false;
    egui::Grid::new("period_grid").num_columns(2).show(ui, |ui| {
        ui.label("From");
        range_changed |= ui.add(DatePickerButton::new(&mut opts.range.start).id_salt("range_start")).changed();
        ui.end_row();
        ui.label("To");
        range_changed |= ui.add(DatePickerButton::new(&mut opts.range.end).id_salt("range_end")).changed();
        ui.end_row();
    });
    if opts.range.is_inverted() {
        ui.colored_label(ui.visuals().warn_fg_color, "Start date is after end date");
    }
    if range_changed {
        logf!("UI: Range → {} .. {}", opts.range.start, opts.range.end);
        apply_change(app);
    }

    ui.separator();
    ui.heading("Projects");

    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            if let Some(opts) = app.state.report.as_mut() {
                opts.selection = app.projects.iter().cloned().collect();
            }
            apply_change(app);
        }
        if ui.button("None").clicked() {
            if let Some(opts) = app.state.report.as_mut() {
                opts.selection.clear();
            }
            apply_change(app);
        }
    });

    ui.separator();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    egui::ScrollArea::vertical()
        .id_salt("projects_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);
            let mut changed = false;

            let Some(opts) = app.state.report.as_mut() else { return };
            let sel = &mut opts.selection;

            for (idx, title) in app.projects.iter().enumerate() {
                let is_selected = sel.contains(title);
                let resp = ui.selectable_label(is_selected, title.as_str());

                if resp.clicked() {
                    let modifiers = ui.input(|i| i.modifiers);
                    let ctrl = modifiers.command || modifiers.ctrl;
                    let shift = modifiers.shift;
                    let anchor = app.last_clicked;

                    match (ctrl, shift, anchor) {
                        (true, true, Some(last)) => {
                            let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
                            sel.extend(app.projects[lo..=hi].iter().cloned());
                        }
                        (true, _, _) => {
                            if is_selected { sel.remove(title); } else { sel.insert(title.clone()); }
                        }
                        (false, true, Some(last)) => {
                            let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
                            sel.clear();
                            sel.extend(app.projects[lo..=hi].iter().cloned());
                        }
                        _ => {
                            sel.clear();
                            sel.insert(title.clone());
                        }
                    }
                    app.last_clicked = Some(idx);
                    changed = true;
                }
            }

            if changed {
                logf!("UI: Selection changed ({} projects)", sel.len());
                apply_change(app);
            }
        });
}
