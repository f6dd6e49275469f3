//! Themed building blocks for the launcher screens.
//!
//! Every primitive is a [`StyledComponent`] whose light values live in the
//! base/variant tables and whose dark values live in a `dark` selector.

use once_cell::sync::Lazy;

use crate::style;
use crate::style::{create_component, Condition, ElementKind, SelectorTable, StyleMap, StyleSpec, StyledComponent};
use crate::theme::{scale, Palette, DARK, LIGHT};

const WEIGHTS: [(&str, &str); 9] = [
    ("thin", "100"),
    ("extralight", "200"),
    ("light", "300"),
    ("normal", "400"),
    ("medium", "500"),
    ("semibold", "600"),
    ("bold", "700"),
    ("extrabold", "800"),
    ("black", "900"),
];

fn with_weights(mut spec: StyleSpec) -> StyleSpec {
    for (name, weight) in WEIGHTS {
        spec = spec.variant("weight", name, style! { "fontWeight" => weight });
    }
    spec
}

fn with_spacing(mut spec: StyleSpec, prefix: &str) -> StyleSpec {
    let axes = [
        (prefix.to_string(), prefix.to_string()),
        (format!("{}x", &prefix[..1]), format!("{prefix}Horizontal")),
        (format!("{}y", &prefix[..1]), format!("{prefix}Vertical")),
    ];
    for (variant, attribute) in axes {
        for (step, cells) in scale::STEPS {
            spec = spec.variant(&variant, step, style! { attribute.as_str() => cells });
        }
    }
    spec
}

fn text_colors(palette: &Palette) -> [(&'static str, StyleMap); 4] {
    [
        ("error", style! { "color" => palette.text.error }),
        ("warning", style! { "color" => palette.text.warning }),
        ("success", style! { "color" => palette.text.success }),
        ("secondary", style! { "color" => palette.text.secondary }),
    ]
}

fn dark_text_selector() -> SelectorTable {
    let mut table = SelectorTable::new().base(style! { "color" => DARK.text.default });
    for (name, color) in text_colors(&DARK) {
        table = table.variant("color", name, color);
    }
    table
}

pub static HEADING: Lazy<StyledComponent> = Lazy::new(|| {
    let mut spec = StyleSpec::new()
        .base(style! { "fontWeight" => "600", "color" => LIGHT.text.default })
        .default_prop("accessibilityRole", "header")
        .variant("size", "small", style! { "fontSize" => 18 })
        .variant("size", "medium", style! { "fontSize" => 22 })
        .variant("size", "large", style! { "fontSize" => 28, "textDecorationLine" => "underline" });
    spec = with_weights(spec);
    for (name, color) in text_colors(&LIGHT) {
        spec = spec.variant("color", name, color);
    }
    create_component(ElementKind::Text, spec.selector(Condition::Dark, dark_text_selector()))
});

pub static TEXT: Lazy<StyledComponent> = Lazy::new(|| {
    let mut spec = StyleSpec::new()
        .base(style! { "fontWeight" => "normal", "color" => LIGHT.text.default, "fontSize" => 16 })
        .default_prop("accessibilityRole", "text")
        .variant("align", "center", style! { "textAlign" => "center" })
        .variant("size", "small", style! { "fontSize" => 12 })
        .variant("size", "medium", style! { "fontSize" => 16 })
        .variant("size", "large", style! { "fontSize" => 18 })
        .variant("type", "mono", style! { "fontFamily" => "Menlo", "fontStyle" => "italic" })
        .variant("color", "secondary", style! { "color" => LIGHT.text.secondary })
        .variant("button", "primary", style! { "color" => LIGHT.primary.foreground })
        .variant("button", "tertiary", style! { "color" => LIGHT.tertiary.foreground });
    spec = with_weights(spec);

    let dark = dark_text_selector()
        .variant("button", "primary", style! { "color" => DARK.primary.foreground })
        .variant("button", "tertiary", style! { "color" => DARK.tertiary.foreground });

    let spec = spec
        .selector(Condition::Dark, dark)
        .selector(Condition::BoldText, SelectorTable::flat(style! { "fontWeight" => "bold" }))
        .selector(Condition::Grayscale, SelectorTable::flat(style! { "color" => "reset" }));
    create_component(ElementKind::Text, spec)
});

pub static TEXT_INPUT: Lazy<StyledComponent> = Lazy::new(|| {
    let spec = StyleSpec::new()
        .base(style! { "fontWeight" => "normal", "color" => LIGHT.text.default, "fontSize" => 16 })
        .variant("type", "mono", style! { "fontFamily" => "Menlo" })
        .variant("color", "secondary", style! { "color" => LIGHT.text.secondary })
        .selector(Condition::Dark, dark_text_selector());
    create_component(ElementKind::TextInput, with_weights(spec))
});

pub static VIEW: Lazy<StyledComponent> = Lazy::new(|| {
    let mut spec = StyleSpec::new()
        .variant("flex", "1", style! { "flex" => 1 })
        .variant("flex", "0", style! { "flex" => 0 })
        .variant("bg", "default", style! { "backgroundColor" => LIGHT.background.default })
        .variant("bg", "secondary", style! { "backgroundColor" => LIGHT.background.secondary })
        .variant("bg", "info", style! { "backgroundColor" => LIGHT.status.info })
        .variant("bg", "success", style! { "backgroundColor" => LIGHT.status.success })
        .variant("border", "default", style! { "borderColor" => LIGHT.border, "borderWidth" => 1 })
        .variant("rounded", "small", style! { "borderRadius" => 1 })
        .variant("rounded", "medium", style! { "borderRadius" => 2 })
        .variant("rounded", "large", style! { "borderRadius" => 3 })
        .variant("rounded", "full", style! { "borderRadius" => 99999 })
        .variant("width", "micro", style! { "width" => 1 })
        .variant("width", "tiny", style! { "width" => 2 })
        .variant("width", "small", style! { "width" => 3 })
        .variant("height", "micro", style! { "height" => 1 })
        .variant("height", "tiny", style! { "height" => 1 })
        .variant("height", "small", style! { "height" => 2 });
    spec = with_spacing(spec, "padding");

    let dark = SelectorTable::new()
        .variant("bg", "default", style! { "backgroundColor" => DARK.background.default })
        .variant("bg", "secondary", style! { "backgroundColor" => DARK.background.secondary })
        .variant("bg", "info", style! { "backgroundColor" => DARK.status.info })
        .variant("border", "default", style! { "borderColor" => DARK.border, "borderWidth" => 1 });

    let spec = spec
        .selector(Condition::Dark, dark)
        // Narrow terminals drop horizontal padding.
        .width_query("< 60", SelectorTable::flat(style! { "paddingHorizontal" => 0 }));
    create_component(ElementKind::View, spec)
});

pub static ROW: Lazy<StyledComponent> = Lazy::new(|| {
    let spec = StyleSpec::new()
        .base(style! { "flexDirection" => "row" })
        .variant("align", "center", style! { "alignItems" => "center" })
        .variant("align", "start", style! { "alignItems" => "flex-start" })
        .variant("align", "end", style! { "alignItems" => "flex-end" });
    create_component(ElementKind::View, with_spacing(spec, "padding"))
});

pub static DIVIDER: Lazy<StyledComponent> = Lazy::new(|| {
    let mut spec = StyleSpec::new()
        .base(style! { "borderWidth" => 0.5, "borderColor" => LIGHT.border })
        .variant("weight", "thin", style! { "borderWidth" => 0.5 })
        .variant("weight", "normal", style! { "borderWidth" => 1 })
        .variant("weight", "heavy", style! { "borderWidth" => 2 });
    spec = with_spacing(spec, "margin");
    let spec = spec.selector(Condition::Dark, SelectorTable::flat(style! { "borderColor" => DARK.border }));
    create_component(ElementKind::View, spec)
});

pub static BUTTON: Lazy<StyledComponent> = Lazy::new(|| {
    let mut spec = StyleSpec::new()
        .variant("bg", "default", style! { "backgroundColor" => LIGHT.background.default })
        .variant("bg", "primary", style! { "backgroundColor" => LIGHT.primary.background })
        .variant("bg", "tertiary", style! { "backgroundColor" => LIGHT.tertiary.background })
        .variant("rounded", "medium", style! { "borderRadius" => 2 })
        .variant("disabled", "true", style! { "opacity" => 0.5 });
    spec = with_spacing(spec, "padding");
    let dark = SelectorTable::new()
        .variant("bg", "default", style! { "backgroundColor" => DARK.background.default })
        .variant("bg", "primary", style! { "backgroundColor" => DARK.primary.background })
        .variant("bg", "tertiary", style! { "backgroundColor" => DARK.tertiary.background });
    create_component(ElementKind::Pressable, spec.selector(Condition::Dark, dark))
});

/// Horizontal and vertical gaps.
pub mod spacer {
    use super::*;

    fn spacer_spec(attribute: &str) -> StyleSpec {
        let mut spec = StyleSpec::new().variant("size", "flex", style! { "flex" => 1 });
        for (step, cells) in scale::STEPS {
            spec = spec.variant("size", step, style! { attribute => cells });
        }
        spec
    }

    pub static HORIZONTAL: Lazy<StyledComponent> =
        Lazy::new(|| create_component(ElementKind::View, spacer_spec("width")));

    pub static VERTICAL: Lazy<StyledComponent> =
        Lazy::new(|| create_component(ElementKind::View, spacer_spec("height")));
}
