/// Main `eframe::App` implementation for LungAI.
///
/// This is the top-level UI layout that composes the navigation bar, the
/// status bar and the current page.
use crate::pages;
use crate::state::{AppState, NoticeLevel, Page};
use crate::theme::LungAiTheme;
use crate::widgets;
use lungai_core::settings::Settings;
use std::time::Duration;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so the first
/// rendered frame arrives immediately after the window opens.
pub struct LungAiState {
    pub(crate) inner: AppState,
}

impl LungAiState {
    /// Build state from the loaded settings.
    pub fn build(settings: &Settings) -> Self {
        tracing::info!(
            "Analysis profile {:?}, delay {:?}",
            settings.profile,
            settings.analysis_delay()
        );
        Self {
            inner: AppState::new(settings),
        }
    }
}

/// The LungAI application.
pub struct LungAiApp {
    state: AppState,
}

impl LungAiApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: LungAiState) -> Self {
        // Needed for `file://` previews of uploaded X-rays.
        egui_extras::install_image_loaders(&cc.egui_ctx);
        LungAiTheme::for_dark_mode(state.inner.dark_mode).apply(&cc.egui_ctx);

        Self { state: state.inner }
    }

    /// Track drag hover and hand the first dropped file to the state.
    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });
        self.state.drag_hover = hovering;

        if dropped.len() > 1 {
            tracing::debug!("{} files dropped; analysing the first", dropped.len());
        }
        if let Some(upload) = dropped.first().and_then(widgets::upload_zone::upload_from_drop) {
            self.state.submit_upload(upload);
        }
    }
}

impl eframe::App for LungAiApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        let theme = LungAiTheme::for_dark_mode(self.state.dark_mode);
        theme.apply(ctx);

        // ── Process background messages ───────────────────────────────────
        self.state.process_messages();
        self.handle_file_drops(ctx);

        // Keep polling for the timer result while an analysis is pending.
        if self.state.is_analyzing() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // ── Top navigation bar ────────────────────────────────────────────
        egui::TopBottomPanel::top("nav_bar")
            .min_height(44.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                widgets::nav_bar::nav_bar(ui, &mut self.state);
                ui.add_space(6.0);
            });

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state, &theme);
                ui.add_space(2.0);
            });

        // ── Notice strip ──────────────────────────────────────────────────
        if let Some(notice) = self.state.notice.clone() {
            let color = match notice.level {
                NoticeLevel::Info => theme.accent,
                NoticeLevel::Error => theme.error,
            };
            egui::TopBottomPanel::top("notice")
                .frame(
                    egui::Frame::new()
                        .fill(LungAiTheme::tint(color))
                        .inner_margin(8.0),
                )
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&notice.message).color(color));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✕").on_hover_text("Dismiss").clicked() {
                                self.state.dismiss_notice();
                            }
                        });
                    });
                });
        }

        // ── Central panel (current page) ──────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_max_width(1200.0);
                    match self.state.page {
                        Page::Home => pages::home::home_page(ui, &mut self.state, &theme),
                        Page::Library => pages::library::library_page(ui, &mut self.state, &theme),
                        Page::About => pages::about::about_page(ui, &mut self.state, &theme),
                    }
                });
        });
    }
}
