// src/config/state.rs
use super::options::ReportOptions;

/// Dashboard tabs, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Standings,
    Details,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::Standings, Tab::Details];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Standings => "Standings",
            Tab::Details => "Details",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Current filter; None until the log has data.
    pub report: Option<ReportOptions>,

    /// Active tab
    pub tab: Tab,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            report: None,
            tab: Tab::default(),
            window_w: 1100,
            window_h: 700,
        }
    }
}
