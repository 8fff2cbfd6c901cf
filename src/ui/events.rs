use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::ui::password::FeedbackField;

/// Events consumed by the main loop.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// Result of an async clipboard write.
    /// Tagged with the copy epoch current when the action started, so a
    /// result from a superseded copy is ignored.
    CopyResult { widget: usize, ok: bool, epoch: u64 },
    /// A feedback reset delay elapsed.
    /// Tagged with the epoch it was scheduled under, so stale resets from
    /// superseded actions are ignored.
    FeedbackElapsed {
        widget: usize,
        field: FeedbackField,
        epoch: u64,
    },
}

pub type EventSender = mpsc::Sender<AppEvent>;

/// Input thread plus the channel that timers and copy workers feed into.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(_) => break,
                    },
                    Ok(false) => {
                        // Timeout — no event
                    }
                    Err(_) => break,
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender handle for auxiliary producers (reset timers, copy workers).
    pub fn sender(&self) -> EventSender {
        self.tx.clone()
    }
}
