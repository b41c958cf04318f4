use std::future::Future;
use std::sync::mpsc::Sender;
use std::time::Duration;

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::LazyConfig;
use crate::ui::events::AppEvent;

use super::state::LazyView;

const LAZY_PANEL_MODULE: &str = "lazy-panel";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("module '{module}' is unavailable")]
    Unavailable { module: String },
}

/// Runs load futures on a tokio runtime and posts each outcome to the UI
/// event channel as [`AppEvent::LazyLoaded`].
#[derive(Clone)]
pub struct LazyLoader {
    runtime: Handle,
    events: Sender<AppEvent>,
}

impl LazyLoader {
    pub fn new(runtime: Handle, events: Sender<AppEvent>) -> Self {
        Self { runtime, events }
    }

    pub fn spawn<F>(&self, load: F) -> JoinHandle<()>
    where
        F: Future<Output = Result<LazyView, LoadError>> + Send + 'static,
    {
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let outcome = load.await;
            match &outcome {
                Ok(_) => tracing::debug!("Lazy panel resolved"),
                Err(err) => tracing::warn!(error = %err, "Lazy panel failed to load"),
            }
            if events.send(AppEvent::LazyLoaded(outcome)).is_err() {
                tracing::trace!("Lazy outcome dropped (receiver gone)");
            }
        })
    }
}

/// The panel module itself: waits `delay_ms`, then resolves, or fails when
/// `simulate_failure` is set.
pub async fn load_lazy_panel(config: LazyConfig) -> Result<LazyView, LoadError> {
    if config.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(config.delay_ms)).await;
    }
    if config.simulate_failure {
        return Err(LoadError::Unavailable {
            module: LAZY_PANEL_MODULE.to_string(),
        });
    }
    Ok(LazyView::new("Lazy Loaded Component"))
}
