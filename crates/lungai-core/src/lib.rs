//! LungAI Core -- disease catalog, upload checks and the mock analysis workflow.
//!
//! This crate contains all business logic with zero UI dependencies.
//! Nothing here performs inference: every analysis result is synthesized
//! from a random source after a fixed delay, for demonstration only.
//!
//! # Modules
//!
//! - [`catalog`]: Static lung-condition catalog and search predicates.
//! - [`upload`]: Uploaded image references and MIME-type checks.
//! - [`analysis`]: Mock result synthesis behind an injectable random source.
//! - [`workflow`]: The analysis state machine and its cancellable timer.
//! - [`settings`]: Optional JSON settings file.
//! - [`error`]: Error types shared by the modules above.
pub mod analysis;
pub mod catalog;
pub mod error;
pub mod settings;
pub mod upload;
pub mod workflow;
