//! Style attribute values and layered merging.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered attribute map. Declaration order is kept so that tables which
/// depend on it (dimension queries) evaluate predictably.
pub type StyleMap = IndexMap<String, StyleValue>;

/// A single style attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<StyleValue>),
    Map(StyleMap),
}

impl StyleValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StyleValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::String(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::String(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<u16> for StyleValue {
    fn from(value: u16) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<Vec<StyleValue>> for StyleValue {
    fn from(value: Vec<StyleValue>) -> Self {
        StyleValue::List(value)
    }
}

impl From<StyleMap> for StyleValue {
    fn from(value: StyleMap) -> Self {
        StyleValue::Map(value)
    }
}

/// Builds a [`StyleMap`] from `key => value` pairs.
///
/// ```
/// use devlauncher::style;
///
/// let s = style! { "color" => "#fff", "padding" => 4 };
/// assert_eq!(s.len(), 2);
/// ```
#[macro_export]
macro_rules! style {
    () => { $crate::style::StyleMap::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::style::StyleMap::new();
        $( map.insert(::std::string::String::from($key), $crate::style::StyleValue::from($value)); )+
        map
    }};
}

/// Merges `source` on top of `target`, key by key.
///
/// Lists on both sides are concatenated (target first), maps on both sides
/// are merged recursively, anything else is replaced by the source value.
/// A box shorthand in `source` (`padding`, `marginVertical`, ...) also clears
/// the longhands it covers from `target`, unless `source` sets them itself.
pub fn merge_deep(target: &mut StyleMap, source: &StyleMap) {
    for key in source.keys() {
        for covered in covered_by(key) {
            if !source.contains_key(*covered) {
                target.shift_remove(*covered);
            }
        }
    }

    for (key, source_value) in source {
        let merged_in_place = match (target.get_mut(key), source_value) {
            (Some(StyleValue::List(existing)), StyleValue::List(incoming)) => {
                existing.extend(incoming.iter().cloned());
                true
            }
            (Some(StyleValue::Map(existing)), StyleValue::Map(incoming)) => {
                merge_deep(existing, incoming);
                true
            }
            _ => false,
        };

        if !merged_in_place {
            target.insert(key.clone(), source_value.clone());
        }
    }
}

/// Returns a new map equal to `base` with `layer` merged on top.
#[must_use]
pub fn merged(base: &StyleMap, layer: &StyleMap) -> StyleMap {
    let mut out = base.clone();
    merge_deep(&mut out, layer);
    out
}

/// Flattens a merged style into the concrete attribute set handed to an
/// element.
///
/// Shorthand attributes are expanded into their longhand forms
/// (`padding` → `paddingTop`/`paddingRight`/..., `paddingHorizontal` →
/// `paddingLeft`/`paddingRight`, and the same for `margin`). Within one map
/// the more specific attribute wins; across layers [`merge_deep`] has already
/// dropped longhands that a later shorthand replaced.
#[must_use]
pub fn flatten(style: &StyleMap) -> StyleMap {
    let mut out = StyleMap::new();

    for (key, value) in style {
        if !is_box_shorthand(key) {
            out.insert(key.clone(), value.clone());
        }
    }

    for prefix in ["padding", "margin"] {
        let all = style.get(prefix);
        let horizontal = style.get(&format!("{prefix}Horizontal"));
        let vertical = style.get(&format!("{prefix}Vertical"));

        let sides = [
            ("Top", vertical),
            ("Bottom", vertical),
            ("Left", horizontal),
            ("Right", horizontal),
        ];
        for (side, axis) in sides {
            let key = format!("{prefix}{side}");
            if out.contains_key(&key) {
                continue;
            }
            if let Some(value) = axis.or(all) {
                out.insert(key, value.clone());
            }
        }
    }

    out
}

/// Attributes a box shorthand overrides when merged on top of them.
fn covered_by(key: &str) -> &'static [&'static str] {
    match key {
        "padding" => &[
            "paddingTop",
            "paddingBottom",
            "paddingLeft",
            "paddingRight",
            "paddingHorizontal",
            "paddingVertical",
        ],
        "paddingHorizontal" => &["paddingLeft", "paddingRight"],
        "paddingVertical" => &["paddingTop", "paddingBottom"],
        "margin" => &[
            "marginTop",
            "marginBottom",
            "marginLeft",
            "marginRight",
            "marginHorizontal",
            "marginVertical",
        ],
        "marginHorizontal" => &["marginLeft", "marginRight"],
        "marginVertical" => &["marginTop", "marginBottom"],
        _ => &[],
    }
}

fn is_box_shorthand(key: &str) -> bool {
    matches!(
        key,
        "padding" | "paddingHorizontal" | "paddingVertical" | "margin" | "marginHorizontal" | "marginVertical"
    )
}
