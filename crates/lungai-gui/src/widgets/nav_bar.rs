/// Top navigation bar -- branding, page links and the theme toggle.
use crate::state::{AppState, Page};
use egui::Ui;

/// Draw the navigation bar.
pub fn nav_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // Brand mark uses the accent colour so it adapts to dark and light mode.
        ui.label(
            egui::RichText::new("🫁 LungAI")
                .size(20.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );
        ui.label(
            egui::RichText::new("Lung Disease Detection")
                .size(12.0)
                .color(ui.visuals().weak_text_color()),
        );

        ui.separator();

        for page in Page::ALL {
            // The detail view lives under the library tab.
            let selected = state.page == page;
            let label = egui::RichText::new(page.title()).size(14.0);
            if ui.selectable_label(selected, label).clicked() {
                state.navigate(page);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.toggle_theme();
            }

            ui.separator();

            ui.label(
                egui::RichText::new(format!("Demo build v{}", env!("CARGO_PKG_VERSION")))
                    .size(11.0)
                    .color(ui.visuals().weak_text_color()),
            );
        });
    });
}
