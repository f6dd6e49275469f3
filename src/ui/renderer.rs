//! Terminal setup and the main event loop

use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::config::Config;
use crate::discovery::PackagerSource;
use crate::style::ConditionNotifier;
use crate::ui::app::LauncherApp;
use crate::ui::core::{AppLoader, Component, EventHandler, EventType};

/// Run the launcher until the user quits or picks a server.
///
/// Returns the URL that was handed to `loader`, if any.
pub async fn run_app(
    config: &Config,
    notifier: ConditionNotifier,
    source: Arc<dyn PackagerSource>,
    loader: Arc<dyn AppLoader>,
) -> Result<Option<String>> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = LauncherApp::new(notifier.clone(), source, loader, config.polling.clone());
    if let Ok((width, height)) = terminal::size() {
        notifier.set_dimensions(f64::from(width), f64::from(height));
    }
    app.mount();

    let mut event_handler = EventHandler::new();
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;
    let selected = app.selected_url().map(str::to_string);
    drop(app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result.map(|()| selected)
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut LauncherApp,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;
        match event {
            EventType::Key(_) | EventType::Resize(_, _) => {
                app.handle_event(event)?;
                needs_render = true;
            }
            EventType::Tick => {
                for action in app.process_background_actions() {
                    app.dispatch(action);
                    needs_render = true;
                }
                if app.take_redraw() {
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
