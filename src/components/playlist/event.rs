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

//! Input handling for the playlist panel.
//!
//! The panel never mutates the model; every key resolves to either a local
//! selection change or a [`PlaylistAction`] intent for the event loop.

use crossterm::event::{KeyCode, KeyEvent};

use crate::components::playlist::{PlaylistAction, PlaylistView};

impl PlaylistView {
    pub(crate) fn process_key(&mut self, key: KeyEvent) -> Option<PlaylistAction> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.goto_next();
                None
            }

            KeyCode::Char('k') | KeyCode::Up => {
                self.goto_previous();
                None
            }

            KeyCode::Char('g') | KeyCode::Home => {
                self.goto_first();
                None
            }

            KeyCode::Char('G') | KeyCode::End => {
                self.goto_last();
                None
            }

            KeyCode::Char('J') => self.move_selected(1),
            KeyCode::Char('K') => self.move_selected(-1),

            KeyCode::Enter => self
                .selected_row()
                .map(|row| PlaylistAction::AddToStream(row.id)),

            KeyCode::Char('d') | KeyCode::Delete => self
                .selected_row()
                .map(|row| PlaylistAction::Delete(row.id)),

            KeyCode::Char('m') => Some(match self.selected_row() {
                Some(row) => PlaylistAction::OpenItemMenu(row.id),
                None => PlaylistAction::OpenPlaylistMenu,
            }),

            KeyCode::Char('M') => Some(PlaylistAction::OpenPlaylistMenu),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::model::{Video, VideoId, playlist::Playlist};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view_with(count: usize) -> PlaylistView {
        let (event_tx, _event_rx) = mpsc::channel();
        let mut playlist = Playlist::new("Test", event_tx);
        for n in 0..count {
            playlist
                .add_item(
                    format!("Video {n}"),
                    Video {
                        id: VideoId(format!("video{n}")),
                        title: format!("Video {n}"),
                        duration: 60,
                    },
                )
                .unwrap();
        }
        let mut view = PlaylistView::new();
        view.render(&playlist).unwrap();
        view
    }

    #[test]
    fn enter_requests_streaming_the_selected_row() {
        let mut view = view_with(2);
        view.goto_last();
        let id = view.selected_row().unwrap().id;

        assert_eq!(
            view.process_key(key(KeyCode::Enter)),
            Some(PlaylistAction::AddToStream(id))
        );
    }

    #[test]
    fn delete_requests_confirmation_not_removal() {
        let mut view = view_with(1);
        let id = view.selected_row().unwrap().id;

        assert_eq!(
            view.process_key(key(KeyCode::Char('d'))),
            Some(PlaylistAction::Delete(id))
        );
        assert_eq!(view.rows().len(), 1);
    }

    #[test]
    fn menu_key_targets_the_selection_or_the_panel() {
        let mut view = view_with(1);
        let id = view.selected_row().unwrap().id;
        assert_eq!(
            view.process_key(key(KeyCode::Char('m'))),
            Some(PlaylistAction::OpenItemMenu(id))
        );

        let mut empty = view_with(0);
        assert_eq!(
            empty.process_key(key(KeyCode::Char('m'))),
            Some(PlaylistAction::OpenPlaylistMenu)
        );
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut view = view_with(3);
        view.goto_last();
        view.process_key(key(KeyCode::Char('j')));
        assert_eq!(view.selected_row().unwrap().title, "Video 0");

        view.process_key(key(KeyCode::Char('k')));
        assert_eq!(view.selected_row().unwrap().title, "Video 2");
    }

    #[test]
    fn keys_on_an_empty_panel_do_nothing() {
        let mut view = view_with(0);
        assert_eq!(view.process_key(key(KeyCode::Enter)), None);
        assert_eq!(view.process_key(key(KeyCode::Char('d'))), None);
        assert_eq!(view.process_key(key(KeyCode::Char('J'))), None);
    }
}
