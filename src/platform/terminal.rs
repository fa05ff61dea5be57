//! Terminal keyboard input (crossterm)

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use super::input::{InputQueue, InputSource};
use super::Command;

/// Non-blocking keyboard reader feeding an [`InputQueue`]
#[derive(Debug, Default)]
pub struct TerminalInput {
    queue: InputQueue,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move every pending terminal key event into the queue
    fn pump(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                match key_name(key.code) {
                    Some(name) => self.queue.push_key(&name),
                    None => log::trace!("Ignoring key {:?}", key.code),
                }
            }
        }
        Ok(())
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Vec<Command> {
        if let Err(e) = self.pump() {
            log::error!("Terminal input failed: {}", e);
            self.queue.push(Command::Quit);
        }
        self.queue.poll()
    }
}

/// Browser-style name for a terminal key
fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Char(c) => c.to_string(),
        _ => return None,
    };
    Some(name)
}
