/// UI widgets for LungAI.
use crate::theme::LungAiTheme;

pub mod disease_card;
pub mod nav_bar;
pub mod result_card;
pub mod stat_grid;
pub mod status_bar;
pub mod upload_zone;

/// Rounded surface frame shared by cards and panels.
pub fn card_frame(theme: &LungAiTheme) -> egui::Frame {
    egui::Frame::new()
        .fill(theme.surface)
        .stroke(egui::Stroke::new(1.0, theme.separator))
        .corner_radius(10.0)
        .inner_margin(16.0)
}
