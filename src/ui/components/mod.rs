//! Reusable UI components

pub mod app_header;
pub mod debug_panel;
pub mod fetch_packagers_row;
pub mod instructions;
pub mod packagers_list;
pub mod status_bar;
pub mod url_dropdown;

// Component exports
pub use app_header::AppHeader;
pub use debug_panel::DebugPanel;
pub use fetch_packagers_row::FetchPackagersRow;
pub use instructions::ServerInstructions;
pub use packagers_list::PackagersList;
pub use status_bar::StatusBar;
pub use url_dropdown::UrlDropdown;

use crate::constants::{GLYPH_CHEVRON_DOWN, GLYPH_CHEVRON_RIGHT};
use crate::style::{StyleMap, StyleValue};

/// Picks the chevron glyph for a resolved icon style.
///
/// The glyph points right when the accumulated `transform` list contains a
/// `rotate` of `-90deg`, and down otherwise. The last rotate wins.
#[must_use]
pub fn chevron_glyph(style: &StyleMap) -> &'static str {
    let rotation = match style.get("transform") {
        Some(StyleValue::List(steps)) => steps
            .iter()
            .filter_map(|step| match step {
                StyleValue::Map(step) => step.get("rotate").and_then(StyleValue::as_str),
                _ => None,
            })
            .last(),
        _ => None,
    };

    match rotation {
        Some("-90deg") => GLYPH_CHEVRON_RIGHT,
        _ => GLYPH_CHEVRON_DOWN,
    }
}

/// `transform: [{ rotate: <angle> }]`
#[must_use]
pub fn rotate(angle: &str) -> StyleMap {
    crate::style! { "transform" => vec![StyleValue::Map(crate::style! { "rotate" => angle })] }
}
