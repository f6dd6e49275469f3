use devlauncher::style;
use devlauncher::style::{
    create_component, ColorScheme, Condition, ConditionNotifier, ConditionState, ElementKind, Props,
    SelectorTable, StyleSpec, StyleValue,
};
use ratatui::style::{Color, Modifier};
use tokio::sync::mpsc;

fn label() -> devlauncher::style::StyledComponent {
    let spec = StyleSpec::new()
        .base(style! { "color" => "#000000" })
        .selector(Condition::Dark, SelectorTable::flat(style! { "color" => "#ffffff" }))
        .selector(Condition::BoldText, SelectorTable::flat(style! { "fontWeight" => "bold" }));
    create_component(ElementKind::Text, spec)
}

#[test]
fn test_mounted_component_tracks_conditions() {
    let notifier = ConditionNotifier::default();
    let mounted = label().mount(&notifier);

    let color = |m: &devlauncher::style::MountedComponent| {
        m.resolve(&Props::new(), None).get("color").and_then(StyleValue::as_str).map(str::to_string)
    };
    assert_eq!(color(&mounted).as_deref(), Some("#000000"));

    notifier.set_color_scheme(Some(ColorScheme::Dark));
    assert_eq!(color(&mounted).as_deref(), Some("#ffffff"));

    notifier.set_accessibility(Condition::BoldText, true);
    let attributes = mounted.attributes(&Props::new(), None);
    assert_eq!(attributes.style.fg, Some(Color::Rgb(255, 255, 255)));
    assert!(attributes.style.add_modifier.contains(Modifier::BOLD));
}

#[test]
fn test_redraw_only_when_selector_layer_changes() {
    let notifier = ConditionNotifier::default();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mounted = label().mount_with_redraw(&notifier, tx);

    // Dimensions and unrelated flags leave the selector layer untouched.
    notifier.set_dimensions(120.0, 40.0);
    notifier.set_accessibility(Condition::ReduceMotion, true);
    assert!(!mounted.take_dirty());
    assert!(rx.try_recv().is_err());

    notifier.set_color_scheme(Some(ColorScheme::Dark));
    assert!(mounted.take_dirty());
    assert!(rx.try_recv().is_ok());

    // Same scheme again: nothing to redraw.
    notifier.set_color_scheme(Some(ColorScheme::Dark));
    assert!(!mounted.take_dirty());
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_unmount_releases_subscription() {
    let notifier = ConditionNotifier::default();
    let mut first = label().mount(&notifier);
    let second = label().mount(&notifier);
    assert_eq!(notifier.listener_count(), 2);

    first.unmount();
    assert!(!first.is_mounted());
    assert_eq!(notifier.listener_count(), 1);

    // An unmounted instance keeps its last layer.
    notifier.set_color_scheme(Some(ColorScheme::Dark));
    assert!(first.active_selectors().is_empty());
    assert!(!second.active_selectors().is_empty());

    drop(second);
    assert_eq!(notifier.listener_count(), 0);
}

#[test]
fn test_unmounted_resolve_matches_mounted() {
    let component = label();
    let state = ConditionState::default().with_flag(Condition::Dark, true);
    let notifier = ConditionNotifier::new(state.clone());
    let mounted = component.mount(&notifier);

    assert_eq!(
        component.resolve(&Props::new(), &state, None),
        mounted.resolve(&Props::new(), None)
    );
}

#[test]
fn test_mount_seeds_layer_without_redraw() {
    let notifier = ConditionNotifier::new(ConditionState::default().with_flag(Condition::Dark, true));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mounted = label().mount_with_redraw(&notifier, tx);

    assert!(!mounted.active_selectors().is_empty());
    assert!(!mounted.take_dirty());
    assert!(rx.try_recv().is_err());

    notifier.set_accessibility(Condition::BoldText, true);
    let request = rx.try_recv().unwrap();
    assert_eq!(Some(request.subscription), mounted.subscription_id());
    assert_ne!(request.subscription, 0);
}
