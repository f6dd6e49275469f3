use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use devlauncher::constants::{
    GLYPH_CHEVRON_DOWN, GLYPH_CHEVRON_RIGHT, STATUS_HINTS, STATUS_URL_HINTS, TEXT_NOT_FOUND, TEXT_REFETCH,
};
use devlauncher::discovery::{Packager, PollSnapshot, QueryStatus};
use devlauncher::style::{merged, ConditionNotifier, StyleValue};
use devlauncher::ui::components::{chevron_glyph, rotate, AppHeader, FetchPackagersRow, PackagersList, StatusBar, UrlDropdown};
use devlauncher::ui::core::{Action, Component};
use devlauncher::ui::Skin;
use ratatui::{backend::TestBackend, Terminal};

fn skin() -> Arc<Skin> {
    Arc::new(Skin::mount(&ConditionNotifier::default(), None))
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_chevron_follows_last_rotation() {
    assert_eq!(chevron_glyph(&rotate("-90deg")), GLYPH_CHEVRON_RIGHT);
    assert_eq!(chevron_glyph(&rotate("0deg")), GLYPH_CHEVRON_DOWN);

    let reopened = merged(&rotate("-90deg"), &rotate("0deg"));
    assert_eq!(chevron_glyph(&reopened), GLYPH_CHEVRON_DOWN);

    let nudged = merged(
        &rotate("-90deg"),
        &devlauncher::style! { "transform" => vec![StyleValue::Map(devlauncher::style! { "translateX" => -1 })] },
    );
    assert_eq!(chevron_glyph(&nudged), GLYPH_CHEVRON_RIGHT);
}

#[test]
fn test_packagers_list_selection_wraps() {
    let mut list = PackagersList::new(skin());
    assert_eq!(list.handle_key_events(press(KeyCode::Enter)), Action::None);

    list.update_data(vec![
        Packager::local("http://localhost:8081"),
        Packager::local("http://localhost:8082"),
    ]);
    assert_eq!(list.selected_index(), Some(0));

    let up = list.handle_key_events(press(KeyCode::Char('k')));
    list.update(up);
    assert_eq!(list.selected_index(), Some(1));

    let down = list.handle_key_events(press(KeyCode::Down));
    list.update(down);
    assert_eq!(list.selected_index(), Some(0));
    assert_eq!(
        list.handle_key_events(press(KeyCode::Enter)),
        Action::OpenUrl("http://localhost:8081".to_string())
    );

    list.update(single_entry_update());
    assert_eq!(list.selected_index(), Some(0));
    assert_eq!(list.height(), 1);
}

fn single_entry_update() -> Action {
    Action::PollUpdated(PollSnapshot {
        data: vec![Packager::local("http://localhost:19000")],
        status: QueryStatus::Success,
        ..PollSnapshot::default()
    })
}

#[test]
fn test_url_dropdown_submit() {
    let mut dropdown = UrlDropdown::new(skin());
    assert_eq!(dropdown.handle_key_events(press(KeyCode::Char('x'))), Action::None);

    dropdown.update(Action::ToggleUrlInput);
    assert!(dropdown.is_open());
    assert_eq!(dropdown.height(), UrlDropdown::EXPANDED_HEIGHT);

    let submit = dropdown.handle_key_events(press(KeyCode::Enter));
    assert!(matches!(dropdown.update(submit), Action::ShowError(_)));

    for c in " exp://10.0.0.1:8081 ".chars() {
        let typed = dropdown.handle_key_events(press(KeyCode::Char(c)));
        dropdown.update(typed);
    }
    assert_eq!(
        dropdown.update(Action::SubmitUrl),
        Action::OpenUrl("exp://10.0.0.1:8081".to_string())
    );
}

#[test]
fn test_url_dropdown_chevron_reflects_state() {
    let mut dropdown = UrlDropdown::new(skin());
    let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();

    let first_row = |terminal: &Terminal<TestBackend>| {
        let buffer = terminal.backend().buffer();
        buffer.content()[..buffer.area.width as usize]
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    };

    terminal.draw(|f| dropdown.render(f, f.area())).unwrap();
    assert!(first_row(&terminal).starts_with(GLYPH_CHEVRON_RIGHT));

    dropdown.update(Action::ToggleUrlInput);
    terminal.draw(|f| dropdown.render(f, f.area())).unwrap();
    assert!(first_row(&terminal).starts_with(GLYPH_CHEVRON_DOWN));
}

#[test]
fn test_fetch_row_reports_not_found() {
    let mut row = FetchPackagersRow::new(skin());
    assert_eq!(row.handle_key_events(press(KeyCode::Char('r'))), Action::Refetch);

    row.update(Action::PollUpdated(PollSnapshot {
        status: QueryStatus::Success,
        passes: 1,
        ..PollSnapshot::default()
    }));
    assert_eq!(row.label(), TEXT_REFETCH);

    let mut terminal = Terminal::new(TestBackend::new(60, 4)).unwrap();
    terminal.draw(|f| row.render(f, f.area())).unwrap();
    let screen: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
    assert!(screen.contains(TEXT_NOT_FOUND));

    row.update(Action::PollUpdated(PollSnapshot {
        polling: true,
        ..PollSnapshot::default()
    }));
    assert!(row.is_fetching());
    assert_eq!(row.handle_key_events(press(KeyCode::Char('r'))), Action::None);
}

#[test]
fn test_status_bar_messages() {
    let mut bar = StatusBar::new(skin());
    assert_eq!(bar.text(), STATUS_HINTS);

    bar.set_url_input_open(true);
    assert_eq!(bar.text(), STATUS_URL_HINTS);

    assert_eq!(bar.update(Action::ShowError("boom".to_string())), Action::None);
    assert_eq!(bar.text(), "boom");
    assert_eq!(bar.handle_key_events(press(KeyCode::Char('x'))), Action::DismissMessage);

    bar.update(Action::DismissMessage);
    assert!(bar.error_message().is_none());
}

#[test]
fn test_header_divider_is_inset_by_margin() {
    let mut header = AppHeader::new(skin());
    let mut terminal = Terminal::new(TestBackend::new(20, AppHeader::HEIGHT)).unwrap();
    terminal.draw(|f| header.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    let rule: Vec<&str> = (0..20u16).map(|x| buffer[(x, 1u16)].symbol()).collect();
    assert_eq!(rule[0], " ");
    assert_eq!(rule[1], "─");
    assert_eq!(rule[18], "─");
    assert_eq!(rule[19], " ");
}
