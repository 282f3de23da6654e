/// Condition detail view -- description, symptoms, severity, age groups and
/// the X-ray analysis panel.
use crate::state::AppState;
use crate::theme::LungAiTheme;
use crate::widgets::{card_frame, disease_card::severity_badge, result_card, upload_zone};
use egui::Ui;
use lungai_core::workflow::AnalysisState;

pub fn detail_page(ui: &mut Ui, state: &mut AppState, theme: &LungAiTheme) {
    let Some(disease) = state.selected_disease() else {
        return;
    };
    let accent = theme.accent_color(disease.accent);

    ui.add_space(8.0);
    if ui.button("← Back to Library").clicked() {
        state.close_disease();
        return;
    }
    ui.add_space(8.0);

    ui.columns(2, |cols| {
        // ── Left: information ─────────────────────────────────────
        card_frame(theme).show(&mut cols[0], |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(disease.name)
                    .size(26.0)
                    .strong()
                    .color(accent),
            );
            ui.label(egui::RichText::new(disease.description).color(theme.text_secondary));
            ui.add_space(10.0);
            ui.label(egui::RichText::new(disease.details).color(theme.text_primary));

            ui.add_space(14.0);
            ui.label(
                egui::RichText::new("Common Symptoms")
                    .strong()
                    .color(theme.text_primary),
            );
            for symptom in disease.symptoms {
                ui.label(egui::RichText::new(format!("• {symptom}")).color(theme.text_secondary));
            }

            ui.add_space(14.0);
            egui::Grid::new("disease_facts")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Severity").color(theme.text_muted));
                    severity_badge(ui, theme, disease);
                    ui.end_row();
                    ui.label(egui::RichText::new("Common Age Groups").color(theme.text_muted));
                    ui.label(egui::RichText::new(disease.common_age).color(theme.text_secondary));
                    ui.end_row();
                });
        });

        // ── Right: analysis ───────────────────────────────────────
        card_frame(theme).show(&mut cols[1], |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("X-Ray Analysis")
                    .size(18.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(8.0);
            upload_zone::upload_zone(ui, state, theme);

            match state.workflow.state() {
                AnalysisState::Analyzing => {
                    ui.add_space(14.0);
                    ui.vertical_centered(|ui| {
                        ui.spinner();
                        ui.label(
                            egui::RichText::new("Analyzing X-ray...")
                                .color(theme.text_secondary),
                        );
                    });
                }
                AnalysisState::Completed(result) => {
                    ui.add_space(14.0);
                    result_card::result_card(ui, theme, result, state.show_mock_banner);
                }
                AnalysisState::Idle | AnalysisState::FileSelected => {}
            }
        });
    });
}
