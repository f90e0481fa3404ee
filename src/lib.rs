//! Krado UI
//!
//! Button and input components for Leptos, built on native elements, with a
//! stable CSS class contract and a bundled stylesheet.
//!
//! ```rust,ignore
//! use krado_ui::{KradoButton, KradoInput, STYLESHEET};
//! ```
//!
//! # Modules
//!
//! - [`ui`]: Components, class composition, pass-through attributes, validation
//! - [`gallery`]: Showcase page rendering every component state
//! - [`server`]: Axum server for the gallery
//! - [`config`]: Gallery configuration

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::needless_pass_by_value)]

pub mod config;
pub mod gallery;
pub mod server;
pub mod ui;

use std::sync::Arc;

use crate::config::GalleryConfig;

pub use ui::components::{KradoButton, KradoInput};

/// The bundled stylesheet: design tokens and every class the components emit.
pub const STYLESHEET: &str = include_str!("../styles/krado-ui.css");

/// File name the stylesheet is published under.
pub const STYLESHEET_FILE_NAME: &str = "krado-ui.css";

/// Application state shared across all gallery handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<GalleryConfig>,
}
