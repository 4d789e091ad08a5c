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

//! Input handling for the context menu overlay.
//!
//! While the menu is open it owns the keyboard. Activating an enabled item
//! yields its command for dispatch and closes the menu; activating a disabled
//! item does nothing.

use crossterm::event::{KeyCode, KeyEvent};

use crate::{actions::commands::AppCommand, components::ContextMenu};

impl ContextMenu {
    pub(crate) fn process_key(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Esc => {
                self.hide();
                None
            }

            KeyCode::Char('j') | KeyCode::Down => {
                self.goto_next();
                None
            }

            KeyCode::Char('k') | KeyCode::Up => {
                self.goto_previous();
                None
            }

            KeyCode::Enter => {
                let command = self
                    .selected_item()
                    .filter(|item| !item.disabled)
                    .and_then(|item| item.command.clone());

                if command.is_some() {
                    self.hide();
                }

                command
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::{
        components::{ContextMenuGroup, ContextMenuItem, MenuAnchor},
        model::ItemId,
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn menu_with(items: Vec<ContextMenuItem>) -> ContextMenu {
        let mut menu = ContextMenu::new();
        menu.add_group(ContextMenuGroup { position: 0, items });
        menu.show(MenuAnchor::default());
        menu
    }

    #[test]
    fn activating_an_item_yields_its_command_and_closes() {
        let mut menu = menu_with(vec![ContextMenuItem::new(
            0,
            "Add video to stream",
            AppCommand::AddItemToStream(ItemId(1)),
        )]);

        let command = menu.process_key(key(KeyCode::Enter));
        assert_eq!(command, Some(AppCommand::AddItemToStream(ItemId(1))));
        assert!(!menu.is_open());
    }

    #[test]
    fn activating_a_disabled_item_is_a_noop() {
        let mut item = ContextMenuItem::new(0, "Add playlist to stream", AppCommand::AddPlaylistToStream);
        item.disabled = true;
        item.title = Some("Can't add an empty playlist to the stream".to_string());
        let mut menu = menu_with(vec![item]);

        let command = menu.process_key(key(KeyCode::Enter));
        assert_eq!(command, None);
        assert!(menu.is_open());
    }

    #[test]
    fn escape_dismisses_without_dispatch() {
        let mut menu = menu_with(vec![ContextMenuItem::new(
            0,
            "Copy URL",
            AppCommand::CopyToClipboard("http://youtu.be/abc".to_string()),
        )]);

        let command = menu.process_key(key(KeyCode::Esc));
        assert_eq!(command, None);
        assert!(!menu.is_open());
    }
}
