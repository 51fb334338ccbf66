//! Keyboard → intent translation.
//!
//! The world only understands [`InputEvent`]s. [`KeyTranslator`] turns raw
//! crossterm key events into them and keeps track of which direction key is
//! held, so that terminals which never send key-release events still stop
//! the fighter once the key goes quiet.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::MoveDir;

/// Frames a direction key stays held without a fresh press/repeat event on
/// terminals that do not report releases. Long enough to bridge the OS
/// key-repeat delay at ~60 frames per second.
pub const DEFAULT_HOLD_FRAMES: u64 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    DirectionSet(MoveDir),
    DirectionClear,
    Fire,
    /// Stop the game from outside the simulation.
    EndGame,
    Quit,
}

#[derive(Clone, Debug)]
pub struct KeyTranslator {
    /// Held direction and the frame its key was last seen.
    held: Option<(MoveDir, u64)>,
    hold_frames: u64,
    release_events: bool,
}

impl Default for KeyTranslator {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD_FRAMES)
    }
}

impl KeyTranslator {
    pub fn new(hold_frames: u64) -> Self {
        Self {
            held: None,
            hold_frames,
            release_events: false,
        }
    }

    /// Trust key-release events instead of the hold window.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    /// Translate one key event seen during `frame`.
    pub fn translate(&mut self, key: KeyEvent, frame: u64) -> Option<InputEvent> {
        let pressed = matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat);

        if let Some(dir) = direction_for(key.code) {
            return if pressed {
                self.held = Some((dir, frame));
                Some(InputEvent::DirectionSet(dir))
            } else {
                self.held = None;
                Some(InputEvent::DirectionClear)
            };
        }

        if !pressed {
            return None;
        }
        match key.code {
            KeyCode::Char(' ') => Some(InputEvent::Fire),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::Quit)
            }
            KeyCode::Char('g') | KeyCode::Char('G') => Some(InputEvent::EndGame),
            _ => None,
        }
    }

    /// Release a direction key that has gone silent. Call once per frame.
    pub fn expire(&mut self, frame: u64) -> Option<InputEvent> {
        if self.release_events {
            return None;
        }
        match self.held {
            Some((_, last)) if frame.saturating_sub(last) > self.hold_frames => {
                self.held = None;
                Some(InputEvent::DirectionClear)
            }
            _ => None,
        }
    }
}

fn direction_for(code: KeyCode) -> Option<MoveDir> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(MoveDir::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(MoveDir::Right),
        _ => None,
    }
}
