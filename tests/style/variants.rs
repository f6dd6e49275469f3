use devlauncher::style;
use devlauncher::style::{ConditionState, Props, StyleSpec, StyleValue};

fn text_spec() -> StyleSpec {
    StyleSpec::new()
        .base(style! { "color" => "#000000", "fontSize" => 16 })
        .variant("size", "large", style! { "fontSize" => 18 })
        .variant("color", "secondary", style! { "color" => "#666666" })
        .variant("weight", "bold", style! { "fontWeight" => "bold" })
}

#[test]
fn test_base_style_without_props() {
    let style = text_spec().resolve(&Props::new(), &ConditionState::default(), None);

    assert_eq!(style.get("color"), Some(&StyleValue::from("#000000")));
    assert_eq!(style.get("fontSize"), Some(&StyleValue::from(16)));
    assert_eq!(style.len(), 2);
}

#[test]
fn test_unknown_variant_values_are_ignored() {
    let spec = text_spec();
    let props = Props::new().with("size", "gigantic").with("shape", "round");

    let style = spec.resolve(&props, &ConditionState::default(), None);

    assert_eq!(style, spec.resolve(&Props::new(), &ConditionState::default(), None));
}

#[test]
fn test_variant_overrides_base_scalar() {
    let props = Props::new().with("size", "large").with("weight", "bold");

    let style = text_spec().resolve(&props, &ConditionState::default(), None);

    assert_eq!(style.get("fontSize"), Some(&StyleValue::from(18)));
    assert_eq!(style.get("fontWeight"), Some(&StyleValue::from("bold")));
    assert_eq!(style.get("color"), Some(&StyleValue::from("#000000")));
}

#[test]
fn test_later_props_win_on_conflicts() {
    let spec = StyleSpec::new()
        .variant("tone", "warm", style! { "color" => "red" })
        .variant("emphasis", "strong", style! { "color" => "black" });

    let warm_last = Props::new().with("emphasis", "strong").with("tone", "warm");
    let strong_last = Props::new().with("tone", "warm").with("emphasis", "strong");

    let state = ConditionState::default();
    assert_eq!(spec.resolve(&warm_last, &state, None).get("color"), Some(&StyleValue::from("red")));
    assert_eq!(spec.resolve(&strong_last, &state, None).get("color"), Some(&StyleValue::from("black")));
}

#[test]
fn test_list_attributes_concatenate_across_layers() {
    let rotate = |angle: &str| StyleValue::Map(style! { "rotate" => angle });
    let spec = StyleSpec::new()
        .base(style! { "transform" => vec![rotate("0deg")] })
        .variant("open", "false", style! { "transform" => vec![rotate("-90deg")] });

    let explicit = style! { "transform" => vec![StyleValue::Map(style! { "translateX" => -1 })] };
    let style = spec.resolve(&Props::new().with("open", "false"), &ConditionState::default(), Some(&explicit));

    match style.get("transform") {
        Some(StyleValue::List(steps)) => {
            assert_eq!(steps.len(), 3);
            assert_eq!(steps[0], rotate("0deg"));
            assert_eq!(steps[1], rotate("-90deg"));
            assert_eq!(steps[2], StyleValue::Map(style! { "translateX" => -1 }));
        }
        other => panic!("expected a transform list, got {other:?}"),
    }
}

#[test]
fn test_explicit_style_is_applied_last() {
    let explicit = style! { "color" => "hotpink" };
    let props = Props::new().with("color", "secondary");

    let style = text_spec().resolve(&props, &ConditionState::default(), Some(&explicit));

    assert_eq!(style.get("color"), Some(&StyleValue::from("hotpink")));
}

#[test]
fn test_default_props_apply_before_call_site_props() {
    let spec = text_spec().default_prop("size", "large");
    let state = ConditionState::default();

    let defaulted = spec.resolve(&Props::new(), &state, None);
    assert_eq!(defaulted.get("fontSize"), Some(&StyleValue::from(18)));

    let overridden = spec.resolve(&Props::new().with("size", "missing"), &state, None);
    assert_eq!(overridden.get("fontSize"), Some(&StyleValue::from(18)));
}

#[test]
fn test_padding_shorthand_is_flattened() {
    let spec = StyleSpec::new().variant("px", "medium", style! { "paddingHorizontal" => 2 });

    let style = spec.resolve(&Props::new().with("px", "medium"), &ConditionState::default(), None);

    assert_eq!(style.get("paddingLeft"), Some(&StyleValue::from(2)));
    assert_eq!(style.get("paddingRight"), Some(&StyleValue::from(2)));
    assert!(style.get("paddingHorizontal").is_none());
}

#[test]
fn test_explicit_shorthand_overrides_variant_longhand() {
    let spec = StyleSpec::new()
        .variant("py", "small", style! { "paddingVertical" => 1 })
        .variant("pt", "large", style! { "paddingTop" => 3 });
    let props = Props::new().with("py", "small").with("pt", "large");

    let style = spec.resolve(&props, &ConditionState::default(), Some(&style! { "padding" => 0 }));

    for side in ["paddingTop", "paddingBottom", "paddingLeft", "paddingRight"] {
        assert_eq!(style.get(side), Some(&StyleValue::from(0)), "{side}");
    }
}

#[test]
fn test_later_variant_shorthand_overrides_earlier_longhand() {
    let spec = StyleSpec::new()
        .variant("pt", "large", style! { "paddingTop" => 3 })
        .variant("py", "small", style! { "paddingVertical" => 1 });

    let longhand_last = Props::new().with("py", "small").with("pt", "large");
    let style = spec.resolve(&longhand_last, &ConditionState::default(), None);
    assert_eq!(style.get("paddingTop"), Some(&StyleValue::from(3)));
    assert_eq!(style.get("paddingBottom"), Some(&StyleValue::from(1)));

    let shorthand_last = Props::new().with("pt", "large").with("py", "small");
    let style = spec.resolve(&shorthand_last, &ConditionState::default(), None);
    assert_eq!(style.get("paddingTop"), Some(&StyleValue::from(1)));
}
