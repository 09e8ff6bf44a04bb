// src/gui/components/metrics.rs
//
// Four-column strip with the summed growth per window. Computed from the
// full log, so it does not react to the project/date filter.

use eframe::egui::{self, Color32, RichText};

use crate::gui::app::App;
use crate::report::{fmt_signed, fmt_thousands};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(report) = app.report.as_ref() else { return };

    ui.columns(report.windows.len().max(1), |cols| {
        for (col, w) in cols.iter_mut().zip(&report.windows) {
            let total = w.total();
            col.label(w.window.label());
            col.label(RichText::new(fmt_thousands(total)).size(26.0).strong());
            col.label(RichText::new(fmt_signed(total)).color(growth_color(total)));
            if let Some(key) = w.current {
                col.weak(key.to_string());
            }
        }
    });
}

pub fn growth_color(v: i64) -> Color32 {
    match v.signum() {
        1 => Color32::from_rgb(0x4C, 0xAF, 0x50),
        -1 => Color32::from_rgb(0xDC, 0x61, 0x49),
        _ => Color32::GRAY,
    }
}
