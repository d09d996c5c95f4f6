//! Event thread feeding the main loop.
//!
//! One background thread owns `crossterm::event`: it forwards key presses,
//! collapses resizes into a bare redraw wake-up and emits a steady tick so
//! the loop re-reads the gauge channels even while the keyboard is idle.

use std::sync::mpsc::{self, Receiver, RecvError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as TermEvent, KeyEvent, KeyEventKind};

/// What the main loop wakes up for.
#[derive(Debug)]
pub enum Event {
    /// Render tick.
    Tick,
    /// A key press. Repeats and releases are filtered at the source.
    Key(KeyEvent),
    /// The terminal changed size; the next draw picks up the new area.
    Resize,
}

pub struct EventHandler {
    rx: Receiver<Event>,
}

impl EventHandler {
    /// Spawns the event thread. Ticks fire every `tick_rate` no matter how
    /// much input arrives in between.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut next_tick = Instant::now() + tick_rate;

            loop {
                let wait = next_tick.saturating_duration_since(Instant::now());

                let sent = if event::poll(wait).unwrap_or(false) {
                    match event::read() {
                        Ok(TermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            tx.send(Event::Key(key))
                        }
                        Ok(TermEvent::Resize(..)) => tx.send(Event::Resize),
                        _ => Ok(()),
                    }
                } else {
                    next_tick = Instant::now() + tick_rate;
                    tx.send(Event::Tick)
                };

                if sent.is_err() {
                    // Main loop is gone.
                    break;
                }
            }
        });

        Self { rx }
    }

    /// Blocks until the next event.
    pub fn next(&self) -> Result<Event, RecvError> {
        self.rx.recv()
    }
}
