//! UI module for the launcher
//!
//! This module handles the home screen components, rendering, and user interactions.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;
pub mod skin;

pub use app::LauncherApp;
pub use layout::LayoutManager;
pub use renderer::run_app;
pub use skin::Skin;
