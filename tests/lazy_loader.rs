use std::sync::mpsc;
use std::time::Duration;

use showcase::config::LazyConfig;
use showcase::ui::events::AppEvent;
use showcase::ui::lazy::{load_lazy_panel, LazyLoader, LazyView, LoadError};
use tokio::runtime::Handle;

const WAIT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn panel_resolves_with_default_config() {
    let view = load_lazy_panel(LazyConfig::default()).await.expect("resolved");
    assert_eq!(view, LazyView::new("Lazy Loaded Component"));
}

#[tokio::test]
async fn panel_fails_when_simulated() {
    let config = LazyConfig {
        delay_ms: 0,
        simulate_failure: true,
    };
    let err = load_lazy_panel(config).await.expect_err("should fail");
    assert_eq!(err.to_string(), "module 'lazy-panel' is unavailable");
}

#[tokio::test(start_paused = true)]
async fn delay_is_honored() {
    let config = LazyConfig {
        delay_ms: 2_000,
        simulate_failure: false,
    };
    let load = tokio::spawn(load_lazy_panel(config));
    tokio::time::sleep(Duration::from_millis(1_999)).await;
    assert!(!load.is_finished());
    tokio::time::sleep(Duration::from_millis(2)).await;
    let view = load.await.expect("join").expect("resolved");
    assert_eq!(view.text, "Lazy Loaded Component");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn loader_posts_outcome_to_event_channel() {
    let (tx, rx) = mpsc::channel();
    let loader = LazyLoader::new(Handle::current(), tx);

    loader
        .spawn(async { Ok(LazyView::new("ready")) })
        .await
        .expect("join");

    match rx.recv_timeout(WAIT) {
        Ok(AppEvent::LazyLoaded(Ok(view))) => assert_eq!(view.text, "ready"),
        _ => panic!("expected a resolved lazy event"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn loader_forwards_failures() {
    let (tx, rx) = mpsc::channel();
    let loader = LazyLoader::new(Handle::current(), tx);

    loader
        .spawn(async {
            Err(LoadError::Unavailable {
                module: "charts".into(),
            })
        })
        .await
        .expect("join");

    match rx.recv_timeout(WAIT) {
        Ok(AppEvent::LazyLoaded(Err(err))) => {
            assert_eq!(err.to_string(), "module 'charts' is unavailable")
        }
        _ => panic!("expected a failed lazy event"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn dropped_receiver_does_not_panic_the_task() {
    let (tx, rx) = mpsc::channel();
    drop(rx);
    let loader = LazyLoader::new(Handle::current(), tx);
    loader
        .spawn(async { Ok(LazyView::new("nobody listening")) })
        .await
        .expect("task completes");
}
