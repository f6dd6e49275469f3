//! Core UI functionality for the launcher.
//!
//! This module contains the building blocks every screen is made of:
//! the [`Component`] trait, the [`Action`] vocabulary components use to talk
//! to the application, terminal event plumbing and the [`AppLoader`] seam
//! that receives the URL the user picked.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod loader;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use loader::{AppLoader, RecordingLoader};
