/// About page -- mission, features, stats, steps and the medical disclaimer.
use crate::content;
use crate::state::{AppState, Page};
use crate::theme::LungAiTheme;
use crate::widgets::card_frame;
use crate::widgets::stat_grid::{stat_grid, step_list};
use egui::Ui;

pub fn about_page(ui: &mut Ui, state: &mut AppState, theme: &LungAiTheme) {
    ui.add_space(16.0);
    super::page_heading(ui, theme, "About", "LungAI");
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.set_max_width(720.0);
        ui.label(
            egui::RichText::new(content::ABOUT_INTRO)
                .size(15.0)
                .color(theme.text_secondary),
        );
    });

    ui.add_space(24.0);
    card_frame(theme).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new("Our Mission")
                .size(20.0)
                .strong()
                .color(theme.text_primary),
        );
        for paragraph in content::MISSION {
            ui.add_space(6.0);
            ui.label(egui::RichText::new(*paragraph).color(theme.text_secondary));
        }
    });

    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Key Features")
                .size(20.0)
                .strong()
                .color(theme.text_primary),
        );
    });
    ui.add_space(8.0);
    for pair in content::FEATURES.chunks(2) {
        ui.columns(2, |cols| {
            for (col, feature) in cols.iter_mut().zip(pair) {
                card_frame(theme).show(col, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(feature.icon).size(22.0).color(theme.accent));
                    ui.label(
                        egui::RichText::new(feature.title)
                            .size(15.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.label(egui::RichText::new(feature.description).color(theme.text_secondary));
                });
            }
        });
        ui.add_space(8.0);
    }

    ui.add_space(20.0);
    stat_grid(ui, theme, content::ABOUT_STATS);
    ui.add_space(24.0);
    step_list(ui, theme, content::ABOUT_STEPS);

    ui.add_space(24.0);
    egui::Frame::new()
        .fill(theme.disclaimer_bg)
        .stroke(egui::Stroke::new(1.0, theme.warning))
        .corner_radius(10.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(content::DISCLAIMER_TITLE)
                    .strong()
                    .color(theme.disclaimer_text),
            );
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(content::DISCLAIMER)
                    .size(12.0)
                    .color(theme.disclaimer_text),
            );
        });

    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Ready to Get Started?")
                .size(20.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.label(
            egui::RichText::new(
                "Begin your lung health analysis today with our AI-powered diagnostic tool.",
            )
            .color(theme.text_secondary),
        );
        ui.add_space(8.0);
        if ui
            .button(egui::RichText::new("Start Analysis").size(15.0))
            .clicked()
        {
            state.navigate(Page::Home);
        }
    });
    ui.add_space(16.0);
}
