use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::ui::lazy::{LazyView, LoadError};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Outcome of a lazy panel load task.
    LazyLoaded(Result<LazyView, LoadError>),
    /// The terminal reader stopped; no more input will arrive.
    InputClosed(String),
}

/// Single channel feeding the UI loop: terminal input and ticks from a reader
/// thread, plus anything posted through [`EventHandler::sender`].
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("terminal-events".to_string())
            .spawn(move || {
                read_terminal(
                    |timeout| {
                        if event::poll(timeout)? {
                            event::read().map(Some)
                        } else {
                            Ok(None)
                        }
                    },
                    &event_tx,
                    tick_rate,
                )
            })?;

        Ok(Self { rx, tx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Reader loop. `next_event` waits up to the given timeout and yields
/// `Ok(None)` when nothing arrived. Returns once the UI side is gone, or
/// after posting [`AppEvent::InputClosed`] when the terminal fails.
fn read_terminal<F>(mut next_event: F, tx: &Sender<AppEvent>, tick_rate: Duration)
where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        let forwarded = match next_event(timeout) {
            Ok(Some(Event::Key(key))) => tx.send(AppEvent::Key(key)),
            Ok(Some(Event::Resize(cols, rows))) => tx.send(AppEvent::Resize(cols, rows)),
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::error!(error = %err, "Terminal input failed");
                let _ = tx.send(AppEvent::InputClosed(err.to_string()));
                return;
            }
        };
        if forwarded.is_err() {
            return;
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn read_failure_posts_input_closed() {
        let (tx, rx) = mpsc::channel();
        let mut calls = 0;
        read_terminal(
            |_| {
                calls += 1;
                if calls == 1 {
                    Ok(Some(Event::Key(KeyEvent::new(
                        KeyCode::Char('a'),
                        KeyModifiers::NONE,
                    ))))
                } else {
                    Err(io::Error::other("tty gone"))
                }
            },
            &tx,
            Duration::from_secs(60),
        );

        assert!(matches!(rx.try_recv(), Ok(AppEvent::Key(_))));
        match rx.try_recv() {
            Ok(AppEvent::InputClosed(reason)) => assert_eq!(reason, "tty gone"),
            _ => panic!("expected InputClosed"),
        }
    }

    #[test]
    fn idle_reader_emits_ticks_and_stops_when_ui_is_gone() {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            read_terminal(
                |timeout| {
                    thread::sleep(timeout);
                    Ok(None)
                },
                &tx,
                Duration::from_millis(5),
            )
        });

        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(5)),
            Ok(AppEvent::Tick)
        ));
        drop(rx);
        handle.join().expect("reader exits");
    }
}
