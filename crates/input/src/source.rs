//! Key sources.
//!
//! The frame loop never waits for input: every call returns at most one key, or
//! `None` straight away when nothing is pending.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Non-blocking source of key presses
pub trait InputSource {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>>;
}

/// Reads key presses from the terminal via crossterm.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            // Release events only arrive with keyboard enhancement enabled; ignore them.
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

/// Replays a fixed list of keys, one per poll. Used by tests and demos.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedInput {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn push(&mut self, key: KeyEvent) {
        self.keys.push_back(key);
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        Ok(self.keys.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn scripted_input_yields_one_key_per_poll() {
        let mut input = ScriptedInput::new([
            KeyEvent::from(KeyCode::Char('w')),
            KeyEvent::from(KeyCode::Char('m')),
        ]);
        assert_eq!(input.poll_key().unwrap(), Some(KeyEvent::from(KeyCode::Char('w'))));
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.poll_key().unwrap(), Some(KeyEvent::from(KeyCode::Char('m'))));
        assert_eq!(input.poll_key().unwrap(), None);
    }
}
