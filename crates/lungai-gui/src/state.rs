/// Application state management.
///
/// Centralises all mutable state that the pages read and write. The
/// analysis timer reports back through the workflow's channel; results are
/// applied in `process_messages()`, which runs once per frame.
use lungai_core::analysis::AnalysisProfile;
use lungai_core::catalog::{self, Disease};
use lungai_core::settings::Settings;
use lungai_core::upload::UploadedImage;
use lungai_core::workflow::AnalysisWorkflow;
use std::path::Path;
use tracing::{info, warn};

/// Top-level pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Library,
    About,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Library, Page::About];

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Library => "Disease Library",
            Self::About => "About",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A dismissible message shown above the page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// All application state.
pub struct AppState {
    // ── Navigation ─────────────────────────────────────
    pub page: Page,
    /// Identifier of the condition whose detail view is open.
    selected_disease: Option<&'static str>,

    // ── Library search ─────────────────────────────────
    /// Substring filter typed into the library search box.
    pub search: String,
    /// Symptom list handed over from the home page (comma-separated input).
    pub symptom_filter: Vec<String>,
    /// Text in the home page symptom box.
    pub symptom_input: String,

    // ── Analysis ───────────────────────────────────────
    pub workflow: AnalysisWorkflow,
    /// True while files are dragged over the window.
    pub drag_hover: bool,

    // ── UI state ───────────────────────────────────────
    pub notice: Option<Notice>,
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
    pub show_mock_banner: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl AppState {
    /// Create initial application state from the loaded settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            page: Page::Home,
            selected_disease: None,
            search: String::new(),
            symptom_filter: Vec::new(),
            symptom_input: String::new(),
            workflow: AnalysisWorkflow::from_settings(settings),
            drag_hover: false,
            notice: None,
            dark_mode: settings.dark_mode,
            show_mock_banner: settings.show_mock_banner,
        }
    }

    // ── Navigation ─────────────────────────────────────

    /// Switch to `page`. Leaving an open detail view discards its upload and
    /// any pending analysis.
    pub fn navigate(&mut self, page: Page) {
        if self.selected_disease.is_some() {
            self.close_disease();
        }
        if self.page != page {
            info!("Navigating to {}", page.title());
        }
        self.page = page;
        self.notice = None;
    }

    /// Open the detail view for `id`. Returns `false` for an unknown id.
    pub fn open_disease(&mut self, id: &str) -> bool {
        let Some(disease) = catalog::find(id) else {
            warn!("Unknown condition id {id}");
            return false;
        };
        if self.selected_disease != Some(disease.id) {
            self.workflow.reset();
        }
        self.selected_disease = Some(disease.id);
        self.workflow.set_condition(Some(disease.id));
        self.page = Page::Library;
        self.notice = None;
        info!("Opened {}", disease.name);
        true
    }

    /// Back to the library grid.
    pub fn close_disease(&mut self) {
        self.workflow.reset();
        self.workflow.set_condition(None);
        self.selected_disease = None;
    }

    pub fn selected_disease(&self) -> Option<&'static Disease> {
        self.selected_disease.and_then(catalog::find)
    }

    // ── Search ─────────────────────────────────────────

    /// Replace the library search text. Clears any symptom filter.
    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_owned();
        self.symptom_filter.clear();
    }

    /// Home page "Find Matching Diseases".
    ///
    /// Several comma-separated symptoms become a symptom filter; a single
    /// term becomes the library search text.
    pub fn find_matching(&mut self, text: &str) {
        let terms = catalog::split_symptoms(text);
        self.navigate(Page::Library);
        if terms.len() > 1 {
            self.search.clear();
            self.symptom_filter = terms;
        } else {
            self.set_search(terms.first().map(String::as_str).unwrap_or(""));
        }
    }

    /// Catalog entries for the library grid, in catalog order.
    pub fn visible_diseases(&self) -> Vec<&'static Disease> {
        if self.symptom_filter.is_empty() {
            catalog::filter(&self.search)
        } else {
            catalog::filter_by_symptoms(&self.symptom_filter)
        }
    }

    // ── Analysis ───────────────────────────────────────

    /// Hand a picked or dropped file to the workflow.
    ///
    /// The drop-zone profile starts analysing immediately; the guided
    /// profile waits for `start_analysis`. Returns `true` if the file was
    /// accepted.
    pub fn submit_upload(&mut self, file: UploadedImage) -> bool {
        if self.selected_disease.is_none() {
            self.notice = Some(Notice::info(
                "Open a condition in the Disease Library to analyze an X-ray",
            ));
            return false;
        }

        let outcome = if self.workflow.profile().auto_analyze() {
            self.workflow.submit_file(file).map(|_| ())
        } else {
            self.workflow.select_file(file)
        };
        match outcome {
            Ok(()) => {
                self.notice = None;
                true
            }
            Err(e) => {
                self.notice = Some(Notice::error(e.to_string()));
                false
            }
        }
    }

    /// Describe the file at `path` and submit it.
    pub fn upload_from_path(&mut self, path: &Path) -> bool {
        match UploadedImage::from_path(path) {
            Ok(file) => self.submit_upload(file),
            Err(e) => {
                warn!("{e}");
                self.notice = Some(Notice::error(e.to_string()));
                false
            }
        }
    }

    /// "Analyze X-Ray" button.
    pub fn start_analysis(&mut self) -> bool {
        match self.workflow.start_analysis() {
            Ok(_) => {
                self.notice = None;
                true
            }
            Err(e) => {
                self.notice = Some(Notice::error(e.to_string()));
                false
            }
        }
    }

    /// Apply finished analyses. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint.
    pub fn process_messages(&mut self) -> bool {
        self.workflow.process_messages()
    }

    pub fn is_analyzing(&self) -> bool {
        self.workflow.is_analyzing()
    }

    pub fn profile(&self) -> AnalysisProfile {
        self.workflow.profile()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home_with_settings_applied() {
        let settings = Settings {
            dark_mode: false,
            show_mock_banner: false,
            ..Settings::default()
        };
        let state = AppState::new(&settings);
        assert_eq!(state.page, Page::Home);
        assert!(!state.dark_mode);
        assert!(!state.show_mock_banner);
        assert!(state.selected_disease().is_none());
    }

    #[test]
    fn single_term_becomes_search() {
        let mut state = AppState::default();
        state.find_matching("  wheezing ");
        assert_eq!(state.page, Page::Library);
        assert_eq!(state.search, "wheezing");
        assert!(state.symptom_filter.is_empty());
    }

    #[test]
    fn several_terms_become_symptom_filter() {
        let mut state = AppState::default();
        state.set_search("fever");
        state.find_matching("night sweats, chest tightness");
        assert!(state.search.is_empty());
        let ids: Vec<_> = state.visible_diseases().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["tuberculosis", "asthma", "copd"]);

        state.set_search("");
        assert!(state.symptom_filter.is_empty());
        assert_eq!(state.visible_diseases().len(), catalog::all().len());
    }

    #[test]
    fn unknown_disease_is_ignored() {
        let mut state = AppState::default();
        assert!(!state.open_disease("flu"));
        assert_eq!(state.page, Page::Home);
    }

    #[test]
    fn upload_requires_open_disease() {
        let mut state = AppState::default();
        assert!(!state.submit_upload(UploadedImage::new("a.png", "image/png", 1)));
        assert!(state.notice.is_some());
        assert!(state.workflow.upload().is_none());
    }

    #[test]
    fn theme_toggle() {
        let mut state = AppState::default();
        assert!(state.dark_mode);
        state.toggle_theme();
        assert!(!state.dark_mode);
    }
}
