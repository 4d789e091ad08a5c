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

//! Input handling for the modal prompt.
//!
//! While a prompt is mounted it owns the keyboard. Escape and the cancel and
//! close buttons all route through the same dismissal path, so nothing is
//! submitted on any of them.

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    actions::commands::AppCommand,
    components::prompt::{PromptFocus, PromptPhase, PromptView},
    config::Settings,
};

impl PromptView {
    pub(crate) fn process_key(
        &mut self,
        key: KeyEvent,
        command_tx: &Sender<AppCommand>,
        settings: &mut Settings,
    ) {
        // A prompt on its way out no longer reacts to input.
        if !matches!(
            self.phase(),
            PromptPhase::ShowRequested | PromptPhase::Visible
        ) {
            return;
        }

        match key.code {
            KeyCode::Esc => self.hide(),

            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),

            KeyCode::Enter => match self.focus() {
                PromptFocus::Ok => self.submit(command_tx),
                PromptFocus::Cancel | PromptFocus::Close => self.hide(),
                PromptFocus::Reminder => self.toggle_reminder(settings),
                PromptFocus::Field(index) => {
                    if self.field(index).is_some_and(|field| field.submittable) {
                        self.submit(command_tx);
                    }
                }
            },

            KeyCode::Char(' ') if self.focus() == PromptFocus::Reminder => {
                self.toggle_reminder(settings)
            }

            _ => {
                if let PromptFocus::Field(index) = self.focus() {
                    if let Some(field) = self.field_mut(index) {
                        field.input.handle_event(&Event::Key(key));
                        field.refresh_validity();
                    }
                }
            }
        }
    }
}
