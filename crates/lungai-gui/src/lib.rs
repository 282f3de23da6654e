/// LungAI GUI -- egui-based desktop frontend.
///
/// This crate contains all UI code. The catalog and the mock analysis
/// workflow live in `lungai-core`.
pub mod app;
pub mod content;
pub mod icon;
pub mod pages;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{LungAiApp, LungAiState};
