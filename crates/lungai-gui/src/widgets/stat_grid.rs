/// Statistics grid and numbered step list used on the home and about pages.
use crate::content::{Stat, Step};
use crate::theme::LungAiTheme;
use egui::Ui;

/// Draw "Platform Statistics": one column per stat.
pub fn stat_grid(ui: &mut Ui, theme: &LungAiTheme, stats: &[Stat]) {
    super::card_frame(theme).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Platform Statistics")
                    .size(20.0)
                    .strong()
                    .color(theme.text_primary),
            );
        });
        ui.add_space(12.0);
        ui.columns(stats.len().max(1), |cols| {
            for (col, stat) in cols.iter_mut().zip(stats) {
                col.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(stat.value)
                            .size(28.0)
                            .strong()
                            .color(theme.accent_color(stat.accent)),
                    );
                    ui.label(egui::RichText::new(stat.label).color(theme.text_secondary));
                });
            }
        });
    });
}

/// Draw "How It Works": numbered circles with a title and description.
pub fn step_list(ui: &mut Ui, theme: &LungAiTheme, steps: &[Step]) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("How It Works")
                .size(20.0)
                .strong()
                .color(theme.text_primary),
        );
    });
    ui.add_space(12.0);
    ui.columns(steps.len().max(1), |cols| {
        for (col, step) in cols.iter_mut().zip(steps) {
            col.vertical_centered(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(48.0, 48.0), egui::Sense::hover());
                let painter = ui.painter();
                painter.circle_filled(rect.center(), 24.0, theme.accent);
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    step.number.to_string(),
                    egui::FontId::proportional(20.0),
                    egui::Color32::WHITE,
                );
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(step.title)
                        .size(15.0)
                        .strong()
                        .color(theme.text_primary),
                );
                ui.label(egui::RichText::new(step.description).color(theme.text_secondary));
            });
        }
    });
}
