/// Bottom status bar -- analysis progress and the current upload.
use crate::state::AppState;
use crate::theme::LungAiTheme;
use egui::Ui;
use lungai_core::workflow::AnalysisState;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState, theme: &LungAiTheme) {
    let wf = &state.workflow;

    ui.horizontal(|ui| {
        match wf.state() {
            AnalysisState::Idle => {
                ui.label(
                    egui::RichText::new(wf.state().label())
                        .size(12.0)
                        .color(theme.text_muted),
                );
            }
            AnalysisState::FileSelected => {
                ui.label(
                    egui::RichText::new(wf.state().label())
                        .size(12.0)
                        .color(theme.text_secondary),
                );
            }
            AnalysisState::Analyzing => {
                ui.spinner();
                ui.label(
                    egui::RichText::new(wf.state().label())
                        .size(12.0)
                        .color(theme.text_primary),
                );
                if let Some(id) = wf.current_submission() {
                    ui.label(
                        egui::RichText::new(id.to_string())
                            .size(11.0)
                            .color(theme.text_muted),
                    );
                }
            }
            AnalysisState::Completed(result) => {
                ui.label(
                    egui::RichText::new(format!("\u{2713} {}", wf.state().label()))
                        .size(12.0)
                        .color(theme.success),
                );
                ui.separator();
                ui.label(
                    egui::RichText::new(format!(
                        "{}% confidence, {}% likelihood",
                        result.confidence, result.likelihood
                    ))
                    .size(12.0)
                    .color(theme.accent),
                );
                if let Some(at) = wf.completed_at() {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(at.format("%H:%M:%S").to_string())
                            .size(12.0)
                            .color(theme.text_muted),
                    );
                }
            }
        }

        if let Some(upload) = wf.upload() {
            ui.separator();
            ui.label(
                egui::RichText::new(format!(
                    "{} ({})",
                    truncate_name(&upload.name, 40),
                    upload.display_size()
                ))
                .size(12.0)
                .color(theme.text_secondary),
            );
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new("Mock analysis -- no model, no network")
                    .size(11.0)
                    .color(theme.text_muted),
            );
        });
    });
}

/// Shorten a file name to at most `max_chars` characters, replacing the
/// middle with "..." if needed.
fn truncate_name(name: &str, max_chars: usize) -> String {
    let count = name.chars().count();
    if count <= max_chars {
        return name.to_string();
    }
    let half = (max_chars - 3) / 2;
    let head: String = name.chars().take(half).collect();
    let tail: String = name.chars().skip(count - half).collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::truncate_name;

    #[test]
    fn short_names_are_untouched() {
        assert_eq!(truncate_name("chest.png", 40), "chest.png");
    }

    #[test]
    fn long_names_keep_both_ends() {
        let out = truncate_name("a-very-long-radiograph-file-name-from-the-clinic.png", 21);
        assert_eq!(out, "a-very-lo...linic.png");
        assert_eq!(out.chars().count(), 21);
    }

    #[test]
    fn multibyte_names_do_not_panic() {
        let out = truncate_name("röntgenbild-ärztliche-überweisung.png", 11);
        assert!(out.contains("..."));
    }
}
