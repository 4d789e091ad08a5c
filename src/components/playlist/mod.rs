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

//! The playlist panel.
//!
//! The view keeps a flat row list projected from the playlist's circular
//! item chain. Incremental updates mirror the model's add and remove
//! notifications one row at a time; structural changes (reorder, emptied)
//! rebuild the whole list from the chain instead.
//!
//! Moving a row computes the would-be successor from the simulated row
//! order and hands the model a `moved before successor` intent; with the
//! chain being circular, moving past the tail naturally lands the row in
//! front of the head.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::{
    actions::commands::AppCommand,
    components::{ContextMenuGroup, ContextMenuItem, MenuAnchor},
    i18n::{Key, Messages},
    model::{
        ItemId, PlaylistItem,
        playlist::{Playlist, PlaylistError},
    },
};

/// One rendered row of the playlist panel.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlaylistRow {
    pub(crate) id: ItemId,
    pub(crate) title: String,
    pub(crate) video_id: String,
    pub(crate) duration: u64,
}

impl PlaylistRow {
    fn project(item: &PlaylistItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            video_id: item.video.id.0.clone(),
            duration: item.video.duration,
        }
    }
}

/// An intent raised by the playlist panel for the event loop to act on.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlaylistAction {
    MoveItem {
        moved_id: ItemId,
        next_id: ItemId,
        new_index: usize,
    },
    AddToStream(ItemId),
    Delete(ItemId),
    OpenItemMenu(ItemId),
    OpenPlaylistMenu,
}

pub(crate) struct PlaylistView {
    rows: Vec<PlaylistRow>,
    list_state: ListState,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self {
            rows: vec![],
            list_state: ListState::default(),
        }
    }

    pub(crate) fn rows(&self) -> &[PlaylistRow] {
        &self.rows
    }

    pub(crate) fn selected_row(&self) -> Option<&PlaylistRow> {
        self.list_state.selected().and_then(|i| self.rows.get(i))
    }

    /// Rebuilds every row from the playlist's chain order.
    pub(crate) fn render(&mut self, playlist: &Playlist) -> Result<(), PlaylistError> {
        self.rows = playlist
            .ordered_items()?
            .iter()
            .map(|item| PlaylistRow::project(item))
            .collect();
        self.clamp_selection();
        Ok(())
    }

    /// Splices a single new row in at its chain position.
    pub(crate) fn add_item(&mut self, item: &PlaylistItem) {
        let row = PlaylistRow::project(item);
        if self.rows.is_empty() {
            self.rows.push(row);
        } else {
            let at = self
                .rows
                .iter()
                .position(|r| r.id == item.previous_item_id)
                .map(|i| i + 1)
                .unwrap_or(self.rows.len());
            self.rows.insert(at, row);
        }
        let index = self
            .rows
            .iter()
            .position(|r| r.id == item.id)
            .unwrap_or(0);
        self.list_state.select(Some(index));
    }

    /// Drops the row for a removed item and keeps the selection in view.
    pub(crate) fn remove_item(&mut self, id: ItemId) {
        self.rows.retain(|row| row.id != id);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.rows.is_empty() {
            self.list_state.select(None);
            *self.list_state.offset_mut() = 0;
            return;
        }
        let last = self.rows.len() - 1;
        match self.list_state.selected() {
            None => self.list_state.select(Some(0)),
            Some(i) if i > last => self.list_state.select(Some(last)),
            Some(_) => {}
        }
        if self.list_state.offset() > last {
            *self.list_state.offset_mut() = last;
        }
    }

    pub(crate) fn goto_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            None => 0,
            Some(i) => (i + 1) % self.rows.len(),
        };
        self.list_state.select(Some(next));
    }

    pub(crate) fn goto_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let previous = match self.list_state.selected() {
            None => 0,
            Some(i) => (i + self.rows.len() - 1) % self.rows.len(),
        };
        self.list_state.select(Some(previous));
    }

    pub(crate) fn goto_first(&mut self) {
        if !self.rows.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub(crate) fn goto_last(&mut self) {
        if !self.rows.is_empty() {
            self.list_state.select(Some(self.rows.len() - 1));
        }
    }

    /// Computes the move intent for shifting the selected row by `offset`
    /// places. The successor is whatever row would follow the dropped row in
    /// the simulated order; dropping at the end wraps to the head row, which
    /// in a circular chain is the same position.
    pub(crate) fn move_selected(&mut self, offset: isize) -> Option<PlaylistAction> {
        if self.rows.len() < 2 {
            return None;
        }
        let from = self.list_state.selected()?;
        let to = from
            .saturating_add_signed(offset)
            .min(self.rows.len() - 1);
        if to == from {
            return None;
        }

        let mut order: Vec<ItemId> = self.rows.iter().map(|row| row.id).collect();
        let moved_id = order.remove(from);
        order.insert(to, moved_id);
        let next_id = *order.get(to + 1).unwrap_or(&order[0]);

        Some(PlaylistAction::MoveItem {
            moved_id,
            next_id,
            new_index: to,
        })
    }

    /// Anchor for a context menu opened from the selected row.
    pub(crate) fn menu_anchor(&self) -> MenuAnchor {
        let row = self
            .list_state
            .selected()
            .unwrap_or(0)
            .saturating_sub(self.list_state.offset());
        MenuAnchor {
            // Offset past the panel header.
            top: row as u16 + 3,
            left: 4,
        }
    }

    pub(crate) fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }
}

/// The menu opened from the panel background rather than from a row.
pub(crate) fn playlist_context_menu(playlist: &Playlist, messages: &Messages) -> ContextMenuGroup {
    let mut add_all = ContextMenuItem::new(
        0,
        messages.get(Key::AddPlaylistToStream),
        AppCommand::AddPlaylistToStream,
    );
    if playlist.is_empty() {
        add_all.disabled = true;
        add_all.title = Some(messages.get(Key::AddPlaylistNoAddStreamWarning).to_string());
    }
    ContextMenuGroup {
        position: 0,
        items: vec![add_all],
    }
}

/// The per-item menu: item actions first, then the playlist-wide action.
pub(crate) fn item_context_menu(item: &PlaylistItem, messages: &Messages) -> Vec<ContextMenuGroup> {
    let url = format!("http://youtu.be/{}", item.video.id);
    vec![
        ContextMenuGroup {
            position: 0,
            items: vec![
                ContextMenuItem::new(
                    0,
                    messages.get(Key::CopyUrl),
                    AppCommand::CopyToClipboard(url.clone()),
                ),
                ContextMenuItem::new(
                    1,
                    messages.get(Key::CopyTitleAndUrl),
                    AppCommand::CopyToClipboard(format!("\"{}\" - {url}", item.title)),
                ),
                ContextMenuItem::new(
                    2,
                    messages.get(Key::DeleteVideo),
                    AppCommand::RequestDeletePlaylistItem(item.id),
                ),
                ContextMenuItem::new(
                    3,
                    messages.get(Key::AddVideoToStream),
                    AppCommand::AddItemToStream(item.id),
                ),
            ],
        },
        ContextMenuGroup {
            position: 1,
            items: vec![ContextMenuItem::new(
                0,
                messages.get(Key::AddPlaylistToStream),
                AppCommand::AddPlaylistToStream,
            )],
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::model::{Video, VideoId};

    fn video(id: &str, title: &str) -> Video {
        Video {
            id: VideoId(id.to_string()),
            title: title.to_string(),
            duration: 180,
        }
    }

    fn playlist_with(titles: &[&str]) -> Playlist {
        let (event_tx, _event_rx) = mpsc::channel();
        let mut playlist = Playlist::new("Test playlist", event_tx);
        for (n, title) in titles.iter().enumerate() {
            playlist
                .add_item(*title, video(&format!("video{n}"), title))
                .unwrap();
        }
        playlist
    }

    #[test]
    fn render_projects_rows_in_chain_order() {
        let playlist = playlist_with(&["One", "Two", "Three"]);
        let mut view = PlaylistView::new();

        view.render(&playlist).unwrap();

        let titles: Vec<&str> = view.rows().iter().map(|row| row.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn rendering_an_empty_playlist_clears_rows_and_selection() {
        let mut playlist = playlist_with(&["One"]);
        let mut view = PlaylistView::new();
        view.render(&playlist).unwrap();

        let id = view.rows()[0].id;
        playlist.remove_item(id).unwrap();
        view.render(&playlist).unwrap();

        assert!(view.rows().is_empty());
        assert_eq!(view.selected_row(), None);
    }

    #[test]
    fn add_item_splices_at_the_chain_position_and_selects_it() {
        let mut playlist = playlist_with(&["One", "Two"]);
        let mut view = PlaylistView::new();
        view.render(&playlist).unwrap();

        let added_id = playlist
            .add_item("Three", video("video9", "Three"))
            .unwrap();
        let added = playlist.get(added_id).unwrap().clone();
        view.add_item(&added);

        let titles: Vec<&str> = view.rows().iter().map(|row| row.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two", "Three"]);
        assert_eq!(view.selected_row().map(|row| row.id), Some(added_id));
    }

    #[test]
    fn incremental_adds_match_a_full_rebuild() {
        let mut playlist = playlist_with(&[]);
        let mut view = PlaylistView::new();

        for title in ["One", "Two", "Three", "Four"] {
            let id = playlist
                .add_item(title, video(&format!("video-{title}"), title))
                .unwrap();
            let added = playlist.get(id).unwrap().clone();
            view.add_item(&added);
        }

        let mut rebuilt = PlaylistView::new();
        rebuilt.render(&playlist).unwrap();
        assert_eq!(view.rows(), rebuilt.rows());
    }

    #[test]
    fn removing_the_last_selected_row_moves_the_selection_up() {
        let playlist = playlist_with(&["One", "Two", "Three"]);
        let mut view = PlaylistView::new();
        view.render(&playlist).unwrap();
        view.goto_last();

        let last = view.rows()[2].id;
        view.remove_item(last);

        assert_eq!(view.selected_row().map(|row| row.title.as_str()), Some("Two"));
    }

    #[test]
    fn moving_down_targets_the_following_rows_successor() {
        let playlist = playlist_with(&["One", "Two", "Three"]);
        let mut view = PlaylistView::new();
        view.render(&playlist).unwrap();
        view.goto_first();

        let action = view.move_selected(1);

        let (one, three) = (view.rows()[0].id, view.rows()[2].id);
        assert_eq!(
            action,
            Some(PlaylistAction::MoveItem {
                moved_id: one,
                next_id: three,
                new_index: 1,
            })
        );
    }

    #[test]
    fn moving_past_the_tail_wraps_the_successor_to_the_head() {
        let playlist = playlist_with(&["One", "Two", "Three"]);
        let mut view = PlaylistView::new();
        view.render(&playlist).unwrap();
        view.goto_last();
        view.goto_previous();

        // Two dropped after Three; its successor wraps to One.
        let action = view.move_selected(1);

        let (one, two) = (view.rows()[0].id, view.rows()[1].id);
        assert_eq!(
            action,
            Some(PlaylistAction::MoveItem {
                moved_id: two,
                next_id: one,
                new_index: 2,
            })
        );
    }

    #[test]
    fn moving_a_sole_row_or_past_the_edge_is_a_noop() {
        let playlist = playlist_with(&["One"]);
        let mut view = PlaylistView::new();
        view.render(&playlist).unwrap();
        assert_eq!(view.move_selected(1), None);

        let playlist = playlist_with(&["One", "Two"]);
        view.render(&playlist).unwrap();
        view.goto_last();
        assert_eq!(view.move_selected(1), None);
    }

    #[test]
    fn empty_playlist_menu_disables_add_with_a_hint() {
        let playlist = playlist_with(&[]);
        let messages = Messages::default();

        let group = playlist_context_menu(&playlist, &messages);

        assert!(group.items[0].disabled);
        assert!(group.items[0].title.is_some());
    }

    #[test]
    fn item_menu_carries_copy_delete_and_stream_actions() {
        let playlist = playlist_with(&["One"]);
        let messages = Messages::default();
        let item = playlist.get(playlist.first_item_id().unwrap()).unwrap();

        let groups = item_context_menu(item, &messages);

        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups[0].items[0].command,
            Some(AppCommand::CopyToClipboard(
                "http://youtu.be/video0".to_string()
            ))
        );
        assert_eq!(
            groups[0].items[1].command,
            Some(AppCommand::CopyToClipboard(
                "\"One\" - http://youtu.be/video0".to_string()
            ))
        );
        assert_eq!(
            groups[0].items[2].command,
            Some(AppCommand::RequestDeletePlaylistItem(item.id))
        );
        assert_eq!(
            groups[1].items[0].command,
            Some(AppCommand::AddPlaylistToStream)
        );
    }
}
