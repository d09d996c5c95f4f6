//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::AppState;
use crate::collector::SnapshotSource;
use crate::gauge::{GaugeHandle, GaugeKind};
use crate::speedtest;

/// Cadence of render passes; the gauges run on their own cadence and the
/// render tick just consumes their latest state.
const RENDER_TICK: Duration = Duration::from_millis(200);

/// How long to wait for a gauge loop to acknowledge the stop flag before
/// abandoning it on exit.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Main TUI application.
pub struct App {
    source: Box<dyn SnapshotSource>,
    gauges: Vec<GaugeHandle>,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App over a snapshot source and already-running gauge
    /// loops.
    pub fn new(source: Box<dyn SnapshotSource>, gauges: Vec<GaugeHandle>, state: AppState) -> Self {
        Self {
            source,
            gauges,
            state,
            should_quit: false,
        }
    }

    /// Runs the TUI application until quit.
    pub fn run(mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(RENDER_TICK);

        // Initial snapshot
        self.refresh();

        // Main loop
        loop {
            self.consume_gauge_states();

            terminal.draw(|frame| render(frame, &self.state))?;

            match events.next() {
                Ok(Event::Tick) => {}
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Refresh => self.refresh(),
                    KeyAction::RunSpeedTest => {
                        self.state.speedtest = Some(speedtest::run());
                    }
                    KeyAction::None => {}
                },
                Ok(Event::Resize) => {}
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Stop the gauge loops before tearing the terminal down so no loop
        // outlives the window it was drawing into.
        self.stop_gauges();

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Takes a fresh snapshot (startup and the `r` key).
    fn refresh(&mut self) {
        self.state.snapshot = Some(self.source.sample());
    }

    /// Pulls the latest state each gauge loop has posted.
    fn consume_gauge_states(&mut self) {
        for gauge in &self.gauges {
            let Some(state) = gauge.latest() else {
                continue;
            };
            match gauge.kind() {
                GaugeKind::Cpu => self.state.cpu_gauge = Some(state),
                GaugeKind::Memory => self.state.mem_gauge = Some(state),
            }
        }
    }

    /// Cooperative shutdown of every gauge loop, bounded per loop.
    fn stop_gauges(&mut self) {
        for gauge in &self.gauges {
            gauge.request_stop();
        }
        for gauge in &mut self.gauges {
            gauge.shutdown(SHUTDOWN_TIMEOUT);
        }
    }
}
