/// Home page -- hero, symptom box, featured conditions, stats and steps.
use crate::content;
use crate::state::{AppState, Page};
use crate::theme::LungAiTheme;
use crate::widgets::stat_grid::{stat_grid, step_list};
use egui::Ui;
use lungai_core::catalog;

const FEATURED_COUNT: usize = 4;

pub fn home_page(ui: &mut Ui, state: &mut AppState, theme: &LungAiTheme) {
    ui.add_space(16.0);
    super::page_heading(ui, theme, content::HERO_TITLE, content::HERO_SUBTITLE);
    ui.add_space(10.0);

    ui.vertical_centered(|ui| {
        ui.set_max_width(720.0);
        ui.label(
            egui::RichText::new(content::HERO_BODY)
                .size(15.0)
                .color(theme.text_secondary),
        );
        ui.add_space(16.0);

        let input = ui.add(
            egui::TextEdit::singleline(&mut state.symptom_input)
                .hint_text(content::SYMPTOM_HINT)
                .desired_width(f32::INFINITY)
                .margin(egui::vec2(10.0, 10.0)),
        );
        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(8.0);
        if ui
            .button(egui::RichText::new("Find Matching Diseases").size(15.0))
            .on_hover_text("Separate several symptoms with commas")
            .clicked()
            || submitted
        {
            let text = state.symptom_input.clone();
            state.find_matching(&text);
        }
    });

    ui.add_space(28.0);
    ui.label(
        egui::RichText::new("Common Lung Conditions")
            .size(20.0)
            .strong()
            .color(theme.text_primary),
    );
    ui.add_space(8.0);
    let featured: Vec<_> = catalog::featured(FEATURED_COUNT).iter().collect();
    if let Some(id) = super::card_grid(ui, theme, &featured) {
        state.open_disease(id);
    }
    if ui.link("View all conditions →").clicked() {
        state.navigate(Page::Library);
    }

    ui.add_space(28.0);
    stat_grid(ui, theme, content::HOME_STATS);
    ui.add_space(28.0);
    step_list(ui, theme, content::HOME_STEPS);
    ui.add_space(16.0);
}
