/// X-ray upload area -- file picker, drop target, preview and the
/// "Analyze X-Ray" button for the guided flow.
use crate::state::AppState;
use crate::theme::LungAiTheme;
use egui::Ui;
use lungai_core::upload::{UploadedImage, IMAGE_EXTENSIONS, SIZE_GUIDELINE_BYTES};

/// Draw the upload area and, below it, the selected file.
pub fn upload_zone(ui: &mut Ui, state: &mut AppState, theme: &LungAiTheme) {
    let analyzing = state.is_analyzing();
    let (fill, stroke_color) = if state.drag_hover {
        (theme.drop_highlight, theme.accent)
    } else {
        (theme.background, theme.separator)
    };

    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(2.0, stroke_color))
        .corner_radius(8.0)
        .inner_margin(20.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("🖼").size(36.0).color(theme.text_muted));
                ui.label(
                    egui::RichText::new("Drag and drop your chest X-ray here, or click to select")
                        .color(theme.text_secondary),
                );
                ui.label(
                    egui::RichText::new(format!(
                        "PNG, JPG, BMP, GIF, TIFF or WebP, up to {} MB",
                        SIZE_GUIDELINE_BYTES / (1024 * 1024)
                    ))
                    .size(11.0)
                    .color(theme.text_muted),
                );
                ui.add_space(8.0);
                if ui
                    .add_enabled(!analyzing, egui::Button::new("Choose File"))
                    .clicked()
                {
                    if let Some(path) = rfd::FileDialog::new()
                        .set_title("Select a chest X-ray")
                        .add_filter("Images", IMAGE_EXTENSIONS)
                        .pick_file()
                    {
                        state.upload_from_path(&path);
                    }
                }
            });
        });

    let Some(upload) = state.workflow.upload().cloned() else {
        return;
    };

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Uploaded:").color(theme.text_muted));
        ui.label(
            egui::RichText::new(upload.name.as_str())
                .strong()
                .color(theme.text_primary),
        );
        ui.label(egui::RichText::new(upload.display_size()).color(theme.text_muted));
    });
    if upload.exceeds_size_guideline() {
        ui.label(
            egui::RichText::new(
                "⚠ This file is larger than the recommended 10 MB; analysis may be slower.",
            )
            .size(12.0)
            .color(theme.warning),
        );
    }

    if let Some(path) = &upload.path {
        ui.add_space(4.0);
        ui.add(
            egui::Image::new(format!("file://{}", path.display()))
                .max_height(220.0)
                .maintain_aspect_ratio(true),
        );
    }

    if !state.profile().auto_analyze() {
        ui.add_space(8.0);
        let label = if analyzing {
            "Analyzing..."
        } else {
            "Analyze X-Ray"
        };
        let button = egui::Button::new(egui::RichText::new(label).strong())
            .min_size(egui::vec2(ui.available_width(), 32.0));
        if ui.add_enabled(!analyzing, button).clicked() {
            state.start_analysis();
        }
    }
}

/// Describe a file dropped onto the window.
///
/// Native drops carry a path but usually no name, MIME type or bytes; web
/// drops carry bytes and a name. Returns `None` when the event has neither a
/// path nor a name.
pub fn upload_from_drop(file: &egui::DroppedFile) -> Option<UploadedImage> {
    let name = if file.name.is_empty() {
        file.path
            .as_ref()?
            .file_name()?
            .to_string_lossy()
            .into_owned()
    } else {
        file.name.clone()
    };

    let size = match (&file.bytes, &file.path) {
        (Some(bytes), _) => bytes.len() as u64,
        (None, Some(path)) => std::fs::metadata(path).map(|m| m.len()).unwrap_or(0),
        (None, None) => 0,
    };

    Some(UploadedImage::from_dropped(
        &name,
        &file.mime,
        size,
        file.path.clone(),
    ))
}
