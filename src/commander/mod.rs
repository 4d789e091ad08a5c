// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The command line at the foot of the screen.
//!
//! Activated with `:`, dismissed with escape. Commands are a single word
//! plus optional arguments:
//!
//!   q                 quit
//!   add               open the add-video prompt
//!   add <id> <title>  add a video directly
//!   p                 toggle play/pause
//!   cs                clear the stream

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::actions::commands::AppCommand;

pub(crate) struct Commander {
    active: bool,
    input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    pub(crate) fn cursor(&self) -> usize {
        self.input.visual_cursor()
    }

    pub(crate) fn process_key(&mut self, key: KeyEvent, command_tx: &Sender<AppCommand>) {
        if !self.active {
            if key.code == KeyCode::Char(':') {
                self.active = true;
                self.input.reset();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                if let Some(command) = parse_command(self.input.value()) {
                    let _ = command_tx.send(command);
                } else {
                    tracing::warn!(line = self.input.value(), "unrecognised command");
                }
                self.active = false;
                self.input.reset();
            }

            _ => {
                self.input.handle_event(&Event::Key(key));
            }
        }
    }
}

fn parse_command(line: &str) -> Option<AppCommand> {
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        ["q" | "quit"] => Some(AppCommand::ExitApplication),
        ["add"] => Some(AppCommand::ShowAddItemPrompt),
        ["add", video_id, title @ ..] if !title.is_empty() => Some(AppCommand::AddPlaylistItem {
            video_id: video_id.to_string(),
            title: title.join(" "),
        }),
        ["p"] => Some(AppCommand::TryTogglePlayerState),
        ["cs"] => Some(AppCommand::ClearStream),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn parses_known_commands() {
        assert_eq!(parse_command("q"), Some(AppCommand::ExitApplication));
        assert_eq!(parse_command("quit"), Some(AppCommand::ExitApplication));
        assert_eq!(parse_command("add"), Some(AppCommand::ShowAddItemPrompt));
        assert_eq!(parse_command("p"), Some(AppCommand::TryTogglePlayerState));
        assert_eq!(parse_command("cs"), Some(AppCommand::ClearStream));
        assert_eq!(parse_command("nonsense"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn add_with_arguments_joins_the_title_words() {
        assert_eq!(
            parse_command("add dQw4w9WgXcQ Never Gonna Give You Up"),
            Some(AppCommand::AddPlaylistItem {
                video_id: "dQw4w9WgXcQ".to_string(),
                title: "Never Gonna Give You Up".to_string(),
            })
        );
    }

    #[test]
    fn colon_activates_and_enter_runs_the_command() {
        let (command_tx, command_rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.process_key(key(KeyCode::Char(':')), &command_tx);
        assert!(commander.is_active());

        commander.process_key(key(KeyCode::Char('q')), &command_tx);
        commander.process_key(key(KeyCode::Enter), &command_tx);

        assert_eq!(
            command_rx.try_recv().ok(),
            Some(AppCommand::ExitApplication)
        );
        assert!(!commander.is_active());
    }

    #[test]
    fn escape_abandons_the_line() {
        let (command_tx, command_rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.process_key(key(KeyCode::Char(':')), &command_tx);
        commander.process_key(key(KeyCode::Char('q')), &command_tx);
        commander.process_key(key(KeyCode::Esc), &command_tx);

        assert!(!commander.is_active());
        assert_eq!(commander.value(), "");
        assert!(command_rx.try_iter().next().is_none());
    }
}
