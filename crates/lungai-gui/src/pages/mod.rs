/// Page bodies drawn inside the central panel.
use crate::theme::LungAiTheme;
use crate::widgets::disease_card::disease_card;
use egui::Ui;
use lungai_core::catalog::Disease;

pub mod about;
pub mod detail;
pub mod home;
pub mod library;

/// Minimum width of one card column.
const CARD_MIN_WIDTH: f32 = 280.0;

/// Lay `diseases` out in as many columns as fit. Returns the id of a
/// clicked card.
pub(crate) fn card_grid(
    ui: &mut Ui,
    theme: &LungAiTheme,
    diseases: &[&'static Disease],
) -> Option<&'static str> {
    let columns = ((ui.available_width() / CARD_MIN_WIDTH).floor() as usize).clamp(1, 3);
    let mut clicked = None;
    for row in diseases.chunks(columns) {
        ui.columns(columns, |cols| {
            for (col, disease) in cols.iter_mut().zip(row) {
                if disease_card(col, theme, disease) {
                    clicked = Some(disease.id);
                }
            }
        });
        ui.add_space(8.0);
    }
    clicked
}

/// Large centred page heading with an accented second part.
pub(crate) fn page_heading(ui: &mut Ui, theme: &LungAiTheme, plain: &str, accented: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(plain)
                .size(30.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.label(
            egui::RichText::new(accented)
                .size(30.0)
                .strong()
                .color(theme.accent),
        );
    });
}
