//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::AppState;
use crate::config::Tab;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Re-sample the metrics snapshot.
    Refresh,
    /// Run the CPU speed stopwatch.
    RunSpeedTest,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Tab navigation
        KeyCode::Tab | KeyCode::Right => {
            state.next_tab();
            KeyAction::None
        }
        KeyCode::BackTab | KeyCode::Left => {
            state.prev_tab();
            KeyAction::None
        }
        KeyCode::Char(c @ '1'..='9') => {
            state.select_tab(c as usize - '0' as usize);
            KeyAction::None
        }

        // Manual snapshot reload
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Refresh,

        // Stopwatch, only on its own tab
        KeyCode::Char('s') | KeyCode::Char('S') => {
            if state.current_tab() == Tab::Speedtest {
                KeyAction::RunSpeedTest
            } else {
                KeyAction::None
            }
        }

        // Appearance
        KeyCode::Char('t') | KeyCode::Char('T') => {
            state.cycle_theme();
            KeyAction::None
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            state.cycle_accent();
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}
