//! Style-variant engine.
//!
//! A [`StyleSpec`] describes a component skin: a base style, named variant
//! tables selected by props, and selectors that override styles while an
//! environment condition holds (dark mode, accessibility toggles, viewport
//! breakpoints). Resolution merges, in order:
//!
//! 1. `base`
//! 2. variant tables matching the supplied props, in prop order
//! 3. selector tables for every active condition
//! 4. the caller's explicit style
//!
//! and then flattens the result. See [`merge_deep`] for the merge rules.
//!
//! # Modules
//!
//! - [`value`] - attribute values, merging and flattening
//! - [`spec`] - skins, props and selector tables
//! - [`query`] - `"> 400"` style dimension expressions
//! - [`conditions`] - condition flags and state snapshots
//! - [`notifier`] - the shared observable feeding mounted components
//! - [`source`] - terminal/OS backed condition source
//! - [`component`] - the component factory
//! - [`render`] - projection onto ratatui styles

pub mod component;
pub mod conditions;
pub mod notifier;
pub mod query;
pub mod render;
pub mod source;
pub mod spec;
pub mod value;

pub use component::{create_component, ElementKind, MountedComponent, RedrawRequest, StyledComponent};
pub use conditions::{AccessibilityFlags, ColorScheme, Condition, ConditionKey, ConditionState, Dimension};
pub use notifier::{ConditionNotifier, ConditionSource, Subscription};
pub use query::{Comparison, DimensionQuery, QueryError};
pub use render::Attributes;
pub use source::{ColorSchemePreference, TerminalConditionSource};
pub use spec::{Props, SelectorTable, Selectors, StyleSpec, VariantTable};
pub use value::{flatten, merge_deep, merged, StyleMap, StyleValue};
