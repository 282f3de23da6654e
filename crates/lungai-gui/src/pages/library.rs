/// Disease library -- searchable card grid, or the detail view when a
/// condition is open.
use crate::state::AppState;
use crate::theme::LungAiTheme;
use egui::Ui;

pub fn library_page(ui: &mut Ui, state: &mut AppState, theme: &LungAiTheme) {
    if state.selected_disease().is_some() {
        super::detail::detail_page(ui, state, theme);
        return;
    }

    ui.add_space(16.0);
    super::page_heading(ui, theme, "Lung Disease", "Library");
    ui.add_space(12.0);

    ui.vertical_centered(|ui| {
        ui.set_max_width(560.0);
        let mut search = state.search.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("🔍 Search diseases or symptoms...")
                .desired_width(f32::INFINITY)
                .margin(egui::vec2(10.0, 8.0)),
        );
        if response.changed() {
            state.set_search(&search);
        }
    });

    if !state.symptom_filter.is_empty() {
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("Matching symptoms:").color(theme.text_muted));
            for term in &state.symptom_filter {
                ui.label(
                    egui::RichText::new(term)
                        .color(theme.accent)
                        .background_color(LungAiTheme::tint(theme.accent)),
                );
            }
            if ui.small_button("✕ Clear").clicked() {
                state.set_search("");
            }
        });
    }

    ui.add_space(16.0);
    let diseases = state.visible_diseases();
    if diseases.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(
                egui::RichText::new("No diseases found matching your search.")
                    .italics()
                    .color(theme.text_muted),
            );
        });
        return;
    }

    if let Some(id) = super::card_grid(ui, theme, &diseases) {
        state.open_disease(id);
    }
}
