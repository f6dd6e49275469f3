//! Utility modules for the launcher.
//!
//! # Available Utilities
//!
//! - [`color`] - Parsing CSS-style color strings into terminal colors

pub mod color;
