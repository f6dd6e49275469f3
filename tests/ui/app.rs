use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use devlauncher::config::PollingConfig;
use devlauncher::constants::{ERROR_EMPTY_URL, TEXT_REFETCH, TEXT_SEARCHING, TEXT_START_SERVER};
use devlauncher::discovery::{Packager, PackagerSource};
use devlauncher::style::{ColorScheme, ConditionNotifier};
use devlauncher::ui::core::{Component, EventType, RecordingLoader};
use devlauncher::ui::LauncherApp;
use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::Semaphore;

struct FixedSource(Vec<Packager>);

#[async_trait]
impl PackagerSource for FixedSource {
    async fn fetch(&self) -> Vec<Packager> {
        self.0.clone()
    }
}

fn polling() -> PollingConfig {
    PollingConfig {
        poll_amount: 2,
        poll_interval_ms: 0,
    }
}

fn launcher(packagers: Vec<Packager>) -> (LauncherApp, Arc<RecordingLoader>, ConditionNotifier) {
    let notifier = ConditionNotifier::default();
    let loader = Arc::new(RecordingLoader::new());
    let app = LauncherApp::new(
        notifier.clone(),
        Arc::new(FixedSource(packagers)),
        loader.clone(),
        polling(),
    );
    (app, loader, notifier)
}

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn render(app: &mut LauncherApp) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Waits for the poller to go idle, then applies its events.
async fn settle(app: &mut LauncherApp) {
    for _ in 0..200 {
        if app.poller().snapshot().passes > 0 && !app.poller().is_fetching() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    for action in app.process_background_actions() {
        app.dispatch(action);
    }
}

#[tokio::test]
async fn test_empty_state_shows_instructions() {
    let (mut app, _, _) = launcher(vec![]);

    let screen = render(&mut app);

    assert!(screen.contains("Development servers"));
    assert!(screen.contains(TEXT_START_SERVER));
    assert!(screen.contains("expo start"));
    assert!(screen.contains(TEXT_REFETCH));
    assert!(screen.contains("Enter URL manually"));
}

#[tokio::test]
async fn test_discovered_server_is_listed_and_opened() {
    let (mut app, loader, _) = launcher(vec![
        Packager::local("http://localhost:8081"),
        Packager::local("http://localhost:19000"),
    ]);
    app.mount();
    settle(&mut app).await;

    let screen = render(&mut app);
    assert!(screen.contains("http://localhost:8081"));
    assert!(screen.contains("http://localhost:19000"));
    assert!(!screen.contains(TEXT_START_SERVER));

    app.handle_event(key(KeyCode::Down)).unwrap();
    app.handle_event(key(KeyCode::Enter)).unwrap();

    assert_eq!(loader.loaded(), vec!["http://localhost:19000".to_string()]);
    assert_eq!(app.selected_url(), Some("http://localhost:19000"));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_typed_url_is_opened() {
    let (mut app, loader, _) = launcher(vec![]);

    app.handle_event(key(KeyCode::Char('u'))).unwrap();
    assert!(app.url_dropdown().is_open());
    for c in "exp://192.168.1.2:8081".chars() {
        app.handle_event(key(KeyCode::Char(c))).unwrap();
    }
    app.handle_event(key(KeyCode::Backspace)).unwrap();
    app.handle_event(key(KeyCode::Char('2'))).unwrap();
    assert!(render(&mut app).contains("exp://192.168.1.2:8082"));

    app.handle_event(key(KeyCode::Enter)).unwrap();

    assert_eq!(loader.last().as_deref(), Some("exp://192.168.1.2:8082"));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_empty_url_shows_error() {
    let (mut app, loader, _) = launcher(vec![]);

    app.handle_event(key(KeyCode::Char('u'))).unwrap();
    app.handle_event(key(KeyCode::Enter)).unwrap();

    assert!(loader.loaded().is_empty());
    assert_eq!(app.status_bar().error_message(), Some(ERROR_EMPTY_URL));
    assert!(!app.should_quit());

    // Esc closes the entry and clears the error
    app.handle_event(key(KeyCode::Esc)).unwrap();
    assert!(!app.url_dropdown().is_open());
    assert!(app.status_bar().error_message().is_none());
}

/// Each fetch waits for a permit.
struct GatedSource(Arc<Semaphore>);

#[async_trait]
impl PackagerSource for GatedSource {
    async fn fetch(&self) -> Vec<Packager> {
        if let Ok(permit) = self.0.acquire().await {
            permit.forget();
        }
        vec![Packager::local("http://localhost:8081")]
    }
}

#[tokio::test]
async fn test_refetch_polls_and_updates_label() {
    let gate = Arc::new(Semaphore::new(0));
    let loader = Arc::new(RecordingLoader::new());
    let mut app = LauncherApp::new(
        ConditionNotifier::default(),
        Arc::new(GatedSource(gate.clone())),
        loader,
        polling(),
    );

    app.handle_event(key(KeyCode::Char('r'))).unwrap();
    while !app.poller().is_fetching() {
        tokio::task::yield_now().await;
    }
    app.sync_poll_state();
    assert!(app.fetch_row().is_fetching());
    assert!(render(&mut app).contains(TEXT_SEARCHING));

    // The button is disabled while searching
    app.handle_event(key(KeyCode::Char('r'))).unwrap();

    gate.add_permits(2);
    settle(&mut app).await;
    assert_eq!(app.poller().snapshot().passes, 2);
    assert!(!app.fetch_row().is_fetching());
    assert_eq!(app.packagers().packagers().len(), 1);
    assert!(render(&mut app).contains(TEXT_REFETCH));
}

#[tokio::test]
async fn test_environment_changes_reach_the_skin() {
    let (mut app, _, notifier) = launcher(vec![]);
    let _ = app.take_redraw();

    app.handle_event(EventType::Resize(50, 20)).unwrap();
    assert_eq!(notifier.state().width, 50.0);
    assert_eq!(notifier.state().height, 20.0);

    notifier.set_color_scheme(Some(ColorScheme::Dark));
    assert!(app.take_redraw());
    assert!(!app.take_redraw());
}

#[tokio::test]
async fn test_logs_panel_and_quit() {
    let (mut app, _, notifier) = launcher(vec![]);
    assert!(notifier.listener_count() > 0);

    app.handle_event(key(KeyCode::Char('G'))).unwrap();
    assert!(app.debug_panel().is_visible());
    assert!(render(&mut app).contains("Debug Logs"));

    // 'q' closes the panel before it quits
    app.handle_event(key(KeyCode::Char('q'))).unwrap();
    assert!(!app.debug_panel().is_visible());
    assert!(!app.should_quit());

    app.handle_event(key(KeyCode::Char('q'))).unwrap();
    assert!(app.should_quit());

    let poller = app.poller().clone();
    drop(app);
    assert!(!poller.is_mounted());
    assert_eq!(notifier.listener_count(), 0);
}
