use devlauncher::style;
use devlauncher::style::{Condition, ConditionState, DimensionQuery, Props, SelectorTable, StyleSpec, StyleValue};

fn themed_spec() -> StyleSpec {
    StyleSpec::new()
        .base(style! { "color" => "#000000" })
        .variant("color", "secondary", style! { "color" => "#666666" })
        .selector(
            Condition::Dark,
            SelectorTable::new()
                .base(style! { "color" => "#ffffff" })
                .variant("color", "secondary", style! { "color" => "#aaaaaa" }),
        )
}

fn color(style: &devlauncher::style::StyleMap) -> Option<&str> {
    style.get("color").and_then(StyleValue::as_str)
}

#[test]
fn test_inactive_selector_leaves_variants_alone() {
    let state = ConditionState::new(100.0, 40.0).with_flag(Condition::Dark, false);
    let style = themed_spec().resolve(&Props::new().with("color", "secondary"), &state, None);
    assert_eq!(color(&style), Some("#666666"));
}

#[test]
fn test_dark_selector_overrides_base_and_variant() {
    let state = ConditionState::new(100.0, 40.0).with_flag(Condition::Dark, true);
    let spec = themed_spec();

    assert_eq!(color(&spec.resolve(&Props::new(), &state, None)), Some("#ffffff"));
    assert_eq!(
        color(&spec.resolve(&Props::new().with("color", "secondary"), &state, None)),
        Some("#aaaaaa")
    );
}

#[test]
fn test_conditions_merge_in_declaration_order() {
    // BoldText follows Dark in condition order, so its override lands last.
    let spec = themed_spec().selector(Condition::BoldText, SelectorTable::flat(style! { "color" => "#123456" }));
    let state = ConditionState::default()
        .with_flag(Condition::BoldText, true)
        .with_flag(Condition::Dark, true);

    assert_eq!(color(&spec.resolve(&Props::new(), &state, None)), Some("#123456"));
}

#[test]
fn test_width_queries_match_in_order() {
    let spec = StyleSpec::new()
        .base(style! { "paddingHorizontal" => 4 })
        .width_query("< 60", SelectorTable::flat(style! { "paddingHorizontal" => 0 }))
        .width_query(">= 40", SelectorTable::flat(style! { "paddingHorizontal" => 1 }));

    let narrow = spec.resolve(&Props::new(), &ConditionState::new(30.0, 24.0), None);
    assert_eq!(narrow.get("paddingLeft"), Some(&StyleValue::from(0)));

    let medium = spec.resolve(&Props::new(), &ConditionState::new(50.0, 24.0), None);
    assert_eq!(medium.get("paddingLeft"), Some(&StyleValue::from(1)));

    let wide = spec.resolve(&Props::new(), &ConditionState::new(120.0, 24.0), None);
    assert_eq!(wide.get("paddingLeft"), Some(&StyleValue::from(1)));
}

#[test]
fn test_height_query_applies_to_height() {
    let spec = StyleSpec::new().height_query("<= 20", SelectorTable::flat(style! { "display" => "compact" }));

    let short = spec.resolve(&Props::new(), &ConditionState::new(200.0, 20.0), None);
    assert_eq!(short.get("display").and_then(StyleValue::as_str), Some("compact"));

    let tall = spec.resolve(&Props::new(), &ConditionState::new(20.0, 50.0), None);
    assert!(tall.get("display").is_none());
}

#[test]
fn test_invalid_query_is_skipped() {
    let spec = StyleSpec::new()
        .base(style! { "color" => "#000000" })
        .width_query("wide", SelectorTable::flat(style! { "color" => "#ff0000" }))
        .width_query("> abc", SelectorTable::flat(style! { "color" => "#00ff00" }))
        .width_query("> 10", SelectorTable::flat(style! { "fontSize" => 12 }));

    let style = spec.resolve(&Props::new(), &ConditionState::new(100.0, 40.0), None);

    assert_eq!(color(&style), Some("#000000"));
    assert_eq!(style.get("fontSize"), Some(&StyleValue::from(12)));
}

#[test]
fn test_query_parsing() {
    let query: DimensionQuery = "<=320".parse().unwrap();
    assert!(query.matches(320.0));
    assert!(!query.matches(320.5));

    assert!(">".parse::<DimensionQuery>().is_err());
    assert!("400".parse::<DimensionQuery>().is_err());
    assert!("".parse::<DimensionQuery>().is_err());
}

#[test]
fn test_explicit_style_beats_selectors() {
    let state = ConditionState::default().with_flag(Condition::Dark, true);
    let explicit = style! { "color" => "#00ff00" };

    let style = themed_spec().resolve(&Props::new(), &state, Some(&explicit));

    assert_eq!(color(&style), Some("#00ff00"));
}
