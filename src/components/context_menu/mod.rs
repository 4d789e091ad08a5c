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

//! The shared context menu overlay.
//!
//! Views do not run context-menu actions themselves; they assemble ordered
//! groups of labelled items and hand them to this single menu instance, which
//! dispatches the chosen item's command on the application command channel.
//! Opening a menu replaces whatever groups were shown before.

mod event;
mod render;

use crate::actions::commands::AppCommand;

/// Screen position a menu is anchored to, clamped to the frame at draw time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct MenuAnchor {
    pub(crate) top: u16,
    pub(crate) left: u16,
}

/// One selectable entry of a context menu group.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ContextMenuItem {
    pub(crate) position: u32,
    pub(crate) text: String,
    pub(crate) disabled: bool,
    /// Hint shown while a disabled item is highlighted.
    pub(crate) title: Option<String>,
    pub(crate) command: Option<AppCommand>,
}

impl ContextMenuItem {
    pub(crate) fn new(position: u32, text: impl Into<String>, command: AppCommand) -> Self {
        Self {
            position,
            text: text.into(),
            disabled: false,
            title: None,
            command: Some(command),
        }
    }
}

/// An ordered group of items, separated visually from its neighbours.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ContextMenuGroup {
    pub(crate) position: u32,
    pub(crate) items: Vec<ContextMenuItem>,
}

pub(crate) struct ContextMenu {
    groups: Vec<ContextMenuGroup>,
    anchor: MenuAnchor,
    open: bool,
    selected: usize,
}

impl ContextMenu {
    pub(crate) fn new() -> Self {
        Self {
            groups: vec![],
            anchor: MenuAnchor::default(),
            open: false,
            selected: 0,
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn anchor(&self) -> MenuAnchor {
        self.anchor
    }

    /// Adds a group, keeping groups and their items in `position` order.
    pub(crate) fn add_group(&mut self, mut group: ContextMenuGroup) {
        group.items.sort_by_key(|item| item.position);
        self.groups.push(group);
        self.groups.sort_by_key(|group| group.position);
    }

    pub(crate) fn show(&mut self, anchor: MenuAnchor) {
        self.anchor = anchor;
        self.selected = 0;
        self.open = true;
    }

    /// Closes the menu and discards its groups; the next caller starts from
    /// a clean slate.
    pub(crate) fn hide(&mut self) {
        self.open = false;
        self.groups.clear();
        self.selected = 0;
    }

    pub(crate) fn items(&self) -> impl Iterator<Item = &ContextMenuItem> {
        self.groups.iter().flat_map(|group| group.items.iter())
    }

    pub(crate) fn item_count(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }

    pub(crate) fn selected_index(&self) -> usize {
        self.selected
    }

    pub(crate) fn selected_item(&self) -> Option<&ContextMenuItem> {
        self.items().nth(self.selected)
    }

    fn goto_next(&mut self) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        self.selected = if self.selected >= count - 1 {
            0
        } else {
            self.selected + 1
        };
    }

    fn goto_previous(&mut self) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            count - 1
        } else {
            self.selected - 1
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;

    fn item(position: u32, text: &str) -> ContextMenuItem {
        ContextMenuItem::new(
            position,
            text,
            AppCommand::AddItemToStream(ItemId(u64::from(position))),
        )
    }

    #[test]
    fn groups_and_items_are_ordered_by_position() {
        let mut menu = ContextMenu::new();
        menu.add_group(ContextMenuGroup {
            position: 1,
            items: vec![item(0, "second group")],
        });
        menu.add_group(ContextMenuGroup {
            position: 0,
            items: vec![item(1, "b"), item(0, "a")],
        });
        menu.show(MenuAnchor { top: 0, left: 0 });

        let texts: Vec<&str> = menu.items().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "second group"]);
    }

    #[test]
    fn showing_a_new_menu_replaces_the_previous_groups() {
        let mut menu = ContextMenu::new();
        menu.add_group(ContextMenuGroup {
            position: 0,
            items: vec![item(0, "old")],
        });
        menu.show(MenuAnchor::default());

        menu.hide();
        menu.add_group(ContextMenuGroup {
            position: 0,
            items: vec![item(0, "new")],
        });
        menu.show(MenuAnchor { top: 3, left: 5 });

        let texts: Vec<&str> = menu.items().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["new"]);
        assert_eq!(menu.anchor(), MenuAnchor { top: 3, left: 5 });
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut menu = ContextMenu::new();
        menu.add_group(ContextMenuGroup {
            position: 0,
            items: vec![item(0, "a"), item(1, "b")],
        });
        menu.show(MenuAnchor::default());

        menu.goto_previous();
        assert_eq!(menu.selected_index(), 1);
        menu.goto_next();
        assert_eq!(menu.selected_index(), 0);
    }
}
