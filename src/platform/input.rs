//! Keyboard input mapping and buffering
//!
//! Keys arrive asynchronously; they are queued and handed to the loop once per
//! frame, so a tick always sees a consistent player position.

use std::collections::VecDeque;

use crate::sim::Direction;

/// Commands understood by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

/// Map a browser-style key name to a command. Unknown keys map to `None`.
pub fn command_for_key(key: &str) -> Option<Command> {
    let command = match key {
        "ArrowUp" | "w" | "W" => Command::Move(Direction::Up),
        "ArrowDown" | "s" | "S" => Command::Move(Direction::Down),
        "ArrowLeft" | "a" | "A" => Command::Move(Direction::Left),
        "ArrowRight" | "d" | "D" => Command::Move(Direction::Right),
        "r" | "R" => Command::Restart,
        "q" | "Q" | "Escape" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Source of commands, polled once per frame
pub trait InputSource {
    /// Commands received since the last poll, oldest first
    fn poll(&mut self) -> Vec<Command>;
}

/// FIFO buffer between key events and the frame loop
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<Command>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a key by name; unrecognized keys are dropped
    pub fn push_key(&mut self, key: &str) {
        match command_for_key(key) {
            Some(command) => self.pending.push_back(command),
            None => log::trace!("Ignoring key {:?}", key),
        }
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl InputSource for InputQueue {
    fn poll(&mut self) -> Vec<Command> {
        self.pending.drain(..).collect()
    }
}
