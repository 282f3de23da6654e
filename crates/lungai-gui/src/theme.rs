/// Colour scheme and visual theme for LungAI.
///
/// All colour constants are defined here so the rest of the UI code
/// references semantically-named values rather than raw hex codes.
use egui::{Color32, Stroke, Visuals};
use lungai_core::catalog::{Accent, Severity};

/// Semantic colour palette for LungAI.
pub struct LungAiTheme {
    pub background: Color32,
    pub surface: Color32,
    pub surface_hover: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub separator: Color32,
    pub selection: Color32,
    pub drop_highlight: Color32,
    pub disclaimer_bg: Color32,
    pub disclaimer_text: Color32,
    /// Card tints, indexed by [`Accent`].
    accents: [Color32; 6],
}

impl LungAiTheme {
    /// Dark theme, the default.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x14, 0x1a, 0x26),
            surface: Color32::from_rgb(0x1e, 0x26, 0x36),
            surface_hover: Color32::from_rgb(0x28, 0x32, 0x46),
            text_primary: Color32::from_rgb(0xe6, 0xea, 0xf0),
            text_secondary: Color32::from_rgb(0xb4, 0xbc, 0xc8),
            text_muted: Color32::from_rgb(0x6e, 0x78, 0x8a),
            accent: Color32::from_rgb(0x60, 0xa5, 0xfa),
            error: Color32::from_rgb(0xf8, 0x71, 0x71),
            warning: Color32::from_rgb(0xfb, 0xbf, 0x24),
            success: Color32::from_rgb(0x4a, 0xde, 0x80),
            separator: Color32::from_rgb(0x2e, 0x38, 0x4c),
            selection: Color32::from_rgb(0x1e, 0x3a, 0x5f),
            drop_highlight: Color32::from_rgb(0x1a, 0x2e, 0x4a),
            disclaimer_bg: Color32::from_rgb(0x33, 0x2b, 0x12),
            disclaimer_text: Color32::from_rgb(0xfd, 0xe6, 0x8a),
            accents: [
                Color32::from_rgb(0xf8, 0x71, 0x71),
                Color32::from_rgb(0xc0, 0x84, 0xfc),
                Color32::from_rgb(0xfb, 0x92, 0x3c),
                Color32::from_rgb(0x60, 0xa5, 0xfa),
                Color32::from_rgb(0x4a, 0xde, 0x80),
                Color32::from_rgb(0xfa, 0xcc, 0x15),
            ],
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xf4, 0xf7, 0xfb),
            surface: Color32::from_rgb(0xff, 0xff, 0xff),
            surface_hover: Color32::from_rgb(0xe8, 0xee, 0xf6),
            text_primary: Color32::from_rgb(0x11, 0x18, 0x27),
            text_secondary: Color32::from_rgb(0x4b, 0x55, 0x63),
            text_muted: Color32::from_rgb(0x9c, 0xa3, 0xaf),
            accent: Color32::from_rgb(0x25, 0x63, 0xeb),
            error: Color32::from_rgb(0xdc, 0x26, 0x26),
            warning: Color32::from_rgb(0xd9, 0x77, 0x06),
            success: Color32::from_rgb(0x16, 0xa3, 0x4a),
            separator: Color32::from_rgb(0xd1, 0xd5, 0xdb),
            selection: Color32::from_rgba_premultiplied(0x25, 0x63, 0xeb, 0x30),
            drop_highlight: Color32::from_rgb(0xef, 0xf6, 0xff),
            disclaimer_bg: Color32::from_rgb(0xfe, 0xfc, 0xe8),
            disclaimer_text: Color32::from_rgb(0x85, 0x4d, 0x0e),
            accents: [
                Color32::from_rgb(0xdc, 0x26, 0x26),
                Color32::from_rgb(0x93, 0x33, 0xea),
                Color32::from_rgb(0xea, 0x58, 0x0c),
                Color32::from_rgb(0x25, 0x63, 0xeb),
                Color32::from_rgb(0x16, 0xa3, 0x4a),
                Color32::from_rgb(0xca, 0x8a, 0x04),
            ],
        }
    }

    pub fn for_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.background.r() < 128 {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.surface;
        visuals.faint_bg_color = self.surface;
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.separator);

        visuals.widgets.inactive.bg_fill = self.surface_hover;
        visuals.widgets.inactive.weak_bg_fill = self.surface_hover;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.hovered.bg_fill = self.surface_hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.background);

        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);

        ctx.set_style(style);
    }

    /// Tint for a catalog accent.
    pub fn accent_color(&self, accent: Accent) -> Color32 {
        let idx = match accent {
            Accent::Red => 0,
            Accent::Purple => 1,
            Accent::Orange => 2,
            Accent::Blue => 3,
            Accent::Green => 4,
            Accent::Yellow => 5,
        };
        self.accents[idx]
    }

    pub fn severity_color(&self, severity: Severity) -> Color32 {
        match severity {
            Severity::MildToModerate => self.success,
            Severity::MildToSevere | Severity::ModerateToSevere => self.warning,
            Severity::Severe => self.error,
        }
    }

    /// Low-alpha version of `color` for card and badge backgrounds.
    pub fn tint(color: Color32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 0x26)
    }
}
