use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::{Config, LazyConfig};
use crate::ui::app::{App, UiCommand};
use crate::ui::context::{AppContext, Profile};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::lazy::{load_lazy_panel, LazyLoader};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Build the context every view reads from configuration.
pub fn build_context(config: &Config) -> AppContext {
    AppContext::new(
        config.context.user.clone(),
        Profile {
            name: config.profile.name.clone(),
            role: config.profile.role.clone(),
        },
    )
}

fn build_app(config: &Config) -> App {
    App::new(build_context(config), config.ui.initial_route.clone())
}

pub fn run(config: Config) -> anyhow::Result<()> {
    let async_runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("showcase-async")
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate).context("Failed to start terminal reader")?;

    let loader = LazyLoader::new(async_runtime.handle().clone(), events.sender());
    let (command_tx, command_rx) = tokio::sync::mpsc::unbounded_channel();
    async_runtime.spawn(command_loop(command_rx, loader, config.lazy.clone()));

    let mut app = build_app(&config);
    app.set_command_sender(command_tx);
    app.request_lazy_load();
    tracing::info!(route = %app.route().path, "Session started");

    let outcome = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(anyhow::Error::from(err));
        }
        if app.should_quit() {
            break Ok(());
        }

        match events.next(tick_rate) {
            Ok(event) => {
                if let Err(err) = apply_event(&mut app, event) {
                    break Err(err);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break Ok(()),
        }
    };

    drop(guard);
    async_runtime.shutdown_timeout(Duration::from_millis(100));
    tracing::info!("Session ended");
    outcome
}

/// Feed one event into the app. Losing the terminal reader ends the session
/// with an error, since nothing could quit it afterwards.
fn apply_event(app: &mut App, event: AppEvent) -> anyhow::Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize(cols, rows) => {
            tracing::debug!(cols, rows, "Terminal resized");
        }
        AppEvent::LazyLoaded(outcome) => app.on_lazy_loaded(outcome),
        AppEvent::InputClosed(reason) => {
            anyhow::bail!("Terminal input closed: {reason}");
        }
    }
    Ok(())
}

/// Serves UI commands on the async runtime until the UI drops its sender.
async fn command_loop(
    mut commands: UnboundedReceiver<UiCommand>,
    loader: LazyLoader,
    lazy: LazyConfig,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::LoadLazyPanel => {
                tracing::debug!("Loading lazy panel");
                let _ = loader.spawn(load_lazy_panel(lazy.clone()));
            }
        }
    }
}
