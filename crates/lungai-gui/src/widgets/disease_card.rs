/// Catalog card -- name, summary, severity badge and the leading symptoms.
use crate::theme::LungAiTheme;
use egui::Ui;
use lungai_core::catalog::Disease;

/// Symptoms listed on a card before collapsing into "+n more".
const CARD_SYMPTOMS: usize = 3;

/// Draw one card. Returns `true` when the card was clicked.
pub fn disease_card(ui: &mut Ui, theme: &LungAiTheme, disease: &Disease) -> bool {
    let accent = theme.accent_color(disease.accent);

    let inner = super::card_frame(theme).show(ui, |ui| {
        ui.set_min_height(150.0);
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            let (dot, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter().circle_filled(dot.center(), 6.0, accent);
            ui.label(
                egui::RichText::new(disease.name)
                    .size(16.0)
                    .strong()
                    .color(theme.text_primary),
            );
        });
        ui.add_space(4.0);
        ui.label(egui::RichText::new(disease.description).color(theme.text_secondary));
        ui.add_space(6.0);

        severity_badge(ui, theme, disease);
        ui.add_space(6.0);

        ui.horizontal_wrapped(|ui| {
            for symptom in disease.symptoms.iter().take(CARD_SYMPTOMS) {
                ui.label(
                    egui::RichText::new(*symptom)
                        .size(11.0)
                        .color(theme.text_secondary)
                        .background_color(LungAiTheme::tint(accent)),
                );
            }
            let more = disease.symptoms.len().saturating_sub(CARD_SYMPTOMS);
            if more > 0 {
                ui.label(
                    egui::RichText::new(format!("+{more} more"))
                        .size(11.0)
                        .color(theme.text_muted),
                );
            }
        });
    });

    let response = inner
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text("Open details and X-ray analysis");
    if response.hovered() {
        ui.painter().rect_stroke(
            response.rect,
            10.0,
            egui::Stroke::new(1.5, accent),
            egui::StrokeKind::Inside,
        );
    }
    response.clicked()
}

/// Coloured "Severity: ..." label.
pub fn severity_badge(ui: &mut Ui, theme: &LungAiTheme, disease: &Disease) {
    let color = theme.severity_color(disease.severity);
    ui.label(
        egui::RichText::new(disease.severity.label())
            .size(11.0)
            .strong()
            .color(color)
            .background_color(LungAiTheme::tint(color)),
    );
}
