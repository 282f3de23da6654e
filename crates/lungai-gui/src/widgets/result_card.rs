/// Analysis result card -- score tiles, recommendations and technical details.
use crate::content::MOCK_BANNER;
use crate::theme::LungAiTheme;
use egui::Ui;
use lungai_core::analysis::AnalysisResult;

/// Draw a completed analysis.
pub fn result_card(ui: &mut Ui, theme: &LungAiTheme, result: &AnalysisResult, show_banner: bool) {
    if show_banner {
        egui::Frame::new()
            .fill(theme.disclaimer_bg)
            .corner_radius(6.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    egui::RichText::new(format!("⚠ {MOCK_BANNER}"))
                        .size(12.0)
                        .color(theme.disclaimer_text),
                );
            });
        ui.add_space(8.0);
    }

    ui.columns(2, |cols| {
        score_tile(
            &mut cols[0],
            theme,
            "Confidence Score",
            result.confidence,
            theme.accent,
        );
        score_tile(
            &mut cols[1],
            theme,
            "Likelihood",
            result.likelihood,
            theme.success,
        );
    });

    ui.add_space(10.0);
    ui.label(
        egui::RichText::new("Recommendations")
            .strong()
            .color(theme.text_primary),
    );
    for rec in result.recommendations {
        ui.label(egui::RichText::new(format!("• {rec}")).color(theme.text_secondary));
    }

    ui.add_space(10.0);
    egui::Frame::new()
        .fill(theme.background)
        .corner_radius(6.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("Technical Details")
                    .strong()
                    .color(theme.text_primary),
            );
            let details = &result.technical_details;
            egui::Grid::new("technical_details")
                .num_columns(2)
                .spacing([16.0, 2.0])
                .show(ui, |ui| {
                    for (key, value) in [
                        ("Image Quality", details.image_quality),
                        ("Analysis Time", details.analysis_time),
                        ("Model Version", details.model_version),
                    ] {
                        ui.label(egui::RichText::new(key).size(12.0).color(theme.text_muted));
                        ui.label(
                            egui::RichText::new(value)
                                .size(12.0)
                                .color(theme.text_secondary),
                        );
                        ui.end_row();
                    }
                });
        });
}

fn score_tile(ui: &mut Ui, theme: &LungAiTheme, title: &str, percent: u8, color: egui::Color32) {
    egui::Frame::new()
        .fill(LungAiTheme::tint(color))
        .corner_radius(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(title).strong().color(theme.text_primary));
            ui.label(
                egui::RichText::new(format!("{percent}%"))
                    .size(26.0)
                    .strong()
                    .color(color),
            );
            ui.add(
                egui::ProgressBar::new(f32::from(percent) / 100.0)
                    .desired_height(6.0)
                    .fill(color),
            );
        });
}
