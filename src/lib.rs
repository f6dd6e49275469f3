//! devlauncher - a terminal launcher for local development servers
//!
//! This library finds development servers running on the local machine,
//! lists them in a terminal UI and hands the selected URL to an app loader.
//! Every screen element is styled through a variant engine whose styles react
//! to the terminal's color scheme, accessibility settings and size.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`discovery`] - Probing ports for live servers and polling for new ones
//! * [`style`] - Style variants, condition selectors and the condition notifier
//! * [`primitives`] - Themed text, view and button components
//! * [`ui`] - Terminal user interface components and rendering
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Local development server discovery
pub mod discovery;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Themed building blocks built on the style engine
pub mod primitives;

/// Style variants, selectors and condition tracking
pub mod style;

/// Light and dark palettes and the spacing scale
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for colors and other helpers
pub mod utils;
