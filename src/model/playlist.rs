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

//! Playlist membership and ordering state.
//!
//! This module manages the collection of playlist items. Order is not held in
//! an array; it is derived from the circular doubly-linked sibling ids carried
//! by each item, with `first_item_id` as the traversal entry point. All
//! pointer surgery (append, unlink, relink) lives here—views only report
//! intent.
//!
//! Mutations publish typed [`AppEvent`]s on an injected channel so interested
//! views can patch themselves incrementally instead of polling.

use std::collections::HashMap;
use std::sync::mpsc::Sender;

use thiserror::Error;

use crate::{
    actions::events::AppEvent,
    model::{ItemId, PlaylistItem, Video},
};

/// Data-integrity failures of the circular item chain.
///
/// The chain invariant is not trusted blindly: every traversal is bounded by
/// the collection size, and an overrun or a dangling sibling id is reported
/// as one of these instead of looping forever.
#[derive(Debug, Error, PartialEq)]
pub(crate) enum PlaylistError {
    #[error("unknown playlist item {0}")]
    UnknownItem(ItemId),

    #[error("playlist chain references unknown item {to}")]
    DanglingLink { to: ItemId },

    #[error("playlist chain does not cycle back to item {first} within {size} steps")]
    BrokenChain { first: ItemId, size: usize },
}

/// Flat snapshot of playlist metadata for display purposes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlaylistSummary {
    pub(crate) name: String,
    pub(crate) item_count: usize,
}

pub(crate) struct Playlist {
    name: String,
    items: HashMap<ItemId, PlaylistItem>,
    first_item_id: Option<ItemId>,
    next_id: u64,
    event_tx: Sender<AppEvent>,
}

impl Playlist {
    pub(crate) fn new(name: impl Into<String>, event_tx: Sender<AppEvent>) -> Self {
        Self {
            name: name.into(),
            items: HashMap::new(),
            first_item_id: None,
            next_id: 1,
            event_tx,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn first_item_id(&self) -> Option<ItemId> {
        self.first_item_id
    }

    pub(crate) fn get(&self, id: ItemId) -> Option<&PlaylistItem> {
        self.items.get(&id)
    }

    pub(crate) fn summary(&self) -> PlaylistSummary {
        PlaylistSummary {
            name: self.name.clone(),
            item_count: self.items.len(),
        }
    }

    /// Returns the items in linked-list traversal order, starting from
    /// `first_item_id` and following `next_item_id` until the chain cycles.
    ///
    /// Iteration is bounded by the collection size; a chain that fails to
    /// cycle back within that bound, or that links to an id outside the
    /// collection, is a [`PlaylistError`].
    pub(crate) fn ordered_items(&self) -> Result<Vec<&PlaylistItem>, PlaylistError> {
        let Some(first) = self.first_item_id else {
            return Ok(vec![]);
        };

        let mut ordered = Vec::with_capacity(self.items.len());
        let mut cursor = first;

        for _ in 0..self.items.len() {
            let item = self
                .items
                .get(&cursor)
                .ok_or(PlaylistError::DanglingLink { to: cursor })?;
            ordered.push(item);

            cursor = item.next_item_id;
            if cursor == first {
                return Ok(ordered);
            }
        }

        Err(PlaylistError::BrokenChain {
            first,
            size: self.items.len(),
        })
    }

    /// Appends a new item at the tail of the circular order (linked just
    /// before the first item).
    pub(crate) fn add_item(
        &mut self,
        title: impl Into<String>,
        video: Video,
    ) -> Result<ItemId, PlaylistError> {
        let id = ItemId(self.next_id);
        self.next_id += 1;

        let (previous_item_id, next_item_id) = match self.first_item_id {
            // Sole member links to itself in both directions.
            None => (id, id),

            Some(first) => {
                let tail = self
                    .items
                    .get(&first)
                    .ok_or(PlaylistError::UnknownItem(first))?
                    .previous_item_id;

                self.items
                    .get_mut(&tail)
                    .ok_or(PlaylistError::UnknownItem(tail))?
                    .next_item_id = id;
                self.items
                    .get_mut(&first)
                    .ok_or(PlaylistError::UnknownItem(first))?
                    .previous_item_id = id;

                (tail, first)
            }
        };

        let item = PlaylistItem {
            id,
            title: title.into(),
            video,
            previous_item_id,
            next_item_id,
        };

        self.items.insert(id, item.clone());
        if self.first_item_id.is_none() {
            self.first_item_id = Some(id);
        }

        let _ = self.event_tx.send(AppEvent::PlaylistItemAdded(item));

        Ok(id)
    }

    /// Unlinks and removes an item, rewiring its neighbours around the gap.
    pub(crate) fn remove_item(&mut self, id: ItemId) -> Result<(), PlaylistError> {
        let item = self
            .items
            .remove(&id)
            .ok_or(PlaylistError::UnknownItem(id))?;

        if self.items.is_empty() {
            self.first_item_id = None;
        } else {
            let previous = item.previous_item_id;
            let next = item.next_item_id;

            self.items
                .get_mut(&previous)
                .ok_or(PlaylistError::DanglingLink { to: previous })?
                .next_item_id = next;
            self.items
                .get_mut(&next)
                .ok_or(PlaylistError::DanglingLink { to: next })?
                .previous_item_id = previous;

            if self.first_item_id == Some(id) {
                self.first_item_id = Some(next);
            }
        }

        let _ = self.event_tx.send(AppEvent::PlaylistItemRemoved(id));
        if self.items.is_empty() {
            let _ = self.event_tx.send(AppEvent::PlaylistEmptied);
        }

        Ok(())
    }

    /// Relinks `moved_id` so that its successor becomes `next_id`.
    ///
    /// Views report reorder intent as a (moved, successor) pair; the actual
    /// pointer surgery, including `first_item_id` maintenance when the first
    /// item moves away, happens here.
    pub(crate) fn move_item(&mut self, moved_id: ItemId, next_id: ItemId) -> Result<(), PlaylistError> {
        if moved_id == next_id {
            return Ok(());
        }

        let (old_previous, old_next) = {
            let moved = self
                .items
                .get(&moved_id)
                .ok_or(PlaylistError::UnknownItem(moved_id))?;
            (moved.previous_item_id, moved.next_item_id)
        };

        if !self.items.contains_key(&next_id) {
            return Err(PlaylistError::UnknownItem(next_id));
        }

        // Already in place.
        if old_next == next_id {
            return Ok(());
        }

        // Unlink from the current position.
        self.items
            .get_mut(&old_previous)
            .ok_or(PlaylistError::DanglingLink { to: old_previous })?
            .next_item_id = old_next;
        self.items
            .get_mut(&old_next)
            .ok_or(PlaylistError::DanglingLink { to: old_next })?
            .previous_item_id = old_previous;

        if self.first_item_id == Some(moved_id) {
            self.first_item_id = Some(old_next);
        }

        // Splice in just before the requested successor.
        let new_previous = self
            .items
            .get(&next_id)
            .ok_or(PlaylistError::UnknownItem(next_id))?
            .previous_item_id;

        self.items
            .get_mut(&new_previous)
            .ok_or(PlaylistError::DanglingLink { to: new_previous })?
            .next_item_id = moved_id;
        self.items
            .get_mut(&next_id)
            .ok_or(PlaylistError::UnknownItem(next_id))?
            .previous_item_id = moved_id;

        let moved = self
            .items
            .get_mut(&moved_id)
            .ok_or(PlaylistError::UnknownItem(moved_id))?;
        moved.previous_item_id = new_previous;
        moved.next_item_id = next_id;

        let _ = self.event_tx.send(AppEvent::PlaylistReordered);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use super::*;
    use crate::model::VideoId;

    fn video(id: &str) -> Video {
        Video {
            id: VideoId(id.to_string()),
            title: id.to_string(),
            duration: 180,
        }
    }

    fn playlist() -> (Playlist, Receiver<AppEvent>) {
        let (event_tx, event_rx) = mpsc::channel();
        (Playlist::new("Test", event_tx), event_rx)
    }

    fn titles(playlist: &Playlist) -> Vec<String> {
        playlist
            .ordered_items()
            .unwrap()
            .iter()
            .map(|i| i.title.clone())
            .collect()
    }

    #[test]
    fn empty_playlist_has_no_ordered_items() {
        let (playlist, _rx) = playlist();
        assert!(playlist.ordered_items().unwrap().is_empty());
        assert_eq!(playlist.first_item_id(), None);
    }

    #[test]
    fn items_traverse_in_insertion_order() {
        let (mut playlist, _rx) = playlist();
        playlist.add_item("A", video("a")).unwrap();
        playlist.add_item("B", video("b")).unwrap();
        playlist.add_item("C", video("c")).unwrap();

        assert_eq!(titles(&playlist), ["A", "B", "C"]);
    }

    #[test]
    fn sole_member_links_to_itself() {
        let (mut playlist, _rx) = playlist();
        let id = playlist.add_item("A", video("a")).unwrap();

        let item = playlist.get(id).unwrap();
        assert_eq!(item.previous_item_id, id);
        assert_eq!(item.next_item_id, id);
        assert_eq!(playlist.first_item_id(), Some(id));
    }

    #[test]
    fn chain_is_circular_in_both_directions() {
        let (mut playlist, _rx) = playlist();
        let a = playlist.add_item("A", video("a")).unwrap();
        let b = playlist.add_item("B", video("b")).unwrap();
        let c = playlist.add_item("C", video("c")).unwrap();

        assert_eq!(playlist.get(a).unwrap().previous_item_id, c);
        assert_eq!(playlist.get(c).unwrap().next_item_id, a);
        assert_eq!(playlist.get(b).unwrap().previous_item_id, a);
    }

    #[test]
    fn removing_middle_item_rewires_neighbours() {
        let (mut playlist, _rx) = playlist();
        let a = playlist.add_item("A", video("a")).unwrap();
        let b = playlist.add_item("B", video("b")).unwrap();
        let c = playlist.add_item("C", video("c")).unwrap();

        playlist.remove_item(b).unwrap();

        assert_eq!(titles(&playlist), ["A", "C"]);
        assert_eq!(playlist.get(a).unwrap().next_item_id, c);
        assert_eq!(playlist.get(c).unwrap().previous_item_id, a);
    }

    #[test]
    fn removing_first_item_advances_entry_point() {
        let (mut playlist, _rx) = playlist();
        let a = playlist.add_item("A", video("a")).unwrap();
        let b = playlist.add_item("B", video("b")).unwrap();

        playlist.remove_item(a).unwrap();

        assert_eq!(playlist.first_item_id(), Some(b));
        assert_eq!(titles(&playlist), ["B"]);
    }

    #[test]
    fn removing_last_item_empties_and_notifies() {
        let (mut playlist, rx) = playlist();
        let a = playlist.add_item("A", video("a")).unwrap();
        playlist.remove_item(a).unwrap();

        assert!(playlist.is_empty());
        assert_eq!(playlist.first_item_id(), None);

        let events: Vec<AppEvent> = rx.try_iter().collect();
        assert!(matches!(events[0], AppEvent::PlaylistItemAdded(_)));
        assert!(matches!(events[1], AppEvent::PlaylistItemRemoved(id) if id == a));
        assert!(matches!(events[2], AppEvent::PlaylistEmptied));
    }

    #[test]
    fn moving_first_item_behind_the_tail() {
        let (mut playlist, _rx) = playlist();
        let a = playlist.add_item("A", video("a")).unwrap();
        let b = playlist.add_item("B", video("b")).unwrap();
        playlist.add_item("C", video("c")).unwrap();

        // Place A before B; since A was first, traversal now starts at B.
        playlist.move_item(a, b).unwrap();

        assert_eq!(playlist.first_item_id(), Some(b));
        assert_eq!(titles(&playlist), ["B", "C", "A"]);
    }

    #[test]
    fn moving_before_an_existing_successor_is_a_noop() {
        let (mut playlist, _rx) = playlist();
        let a = playlist.add_item("A", video("a")).unwrap();
        playlist.add_item("B", video("b")).unwrap();
        let c = playlist.add_item("C", video("c")).unwrap();

        // The tail already precedes the head in the circular chain.
        playlist.move_item(c, a).unwrap();

        assert_eq!(playlist.first_item_id(), Some(a));
        assert_eq!(titles(&playlist), ["A", "B", "C"]);
    }

    #[test]
    fn moving_middle_item_behind_the_tail() {
        let (mut playlist, _rx) = playlist();
        let a = playlist.add_item("A", video("a")).unwrap();
        let b = playlist.add_item("B", video("b")).unwrap();
        playlist.add_item("C", video("c")).unwrap();

        playlist.move_item(b, a).unwrap();

        assert_eq!(playlist.first_item_id(), Some(a));
        assert_eq!(titles(&playlist), ["A", "C", "B"]);
    }

    #[test]
    fn moving_item_onto_itself_is_a_noop() {
        let (mut playlist, _rx) = playlist();
        let a = playlist.add_item("A", video("a")).unwrap();
        playlist.move_item(a, a).unwrap();
        assert_eq!(titles(&playlist), ["A"]);
    }

    #[test]
    fn move_to_unknown_successor_is_an_error() {
        let (mut playlist, _rx) = playlist();
        let a = playlist.add_item("A", video("a")).unwrap();
        playlist.add_item("B", video("b")).unwrap();

        let result = playlist.move_item(a, ItemId(99));
        assert_eq!(result, Err(PlaylistError::UnknownItem(ItemId(99))));
    }

    #[test]
    fn non_cyclic_chain_is_bounded_not_an_infinite_loop() {
        let (mut playlist, _rx) = playlist();
        let a = playlist.add_item("A", video("a")).unwrap();
        let b = playlist.add_item("B", video("b")).unwrap();

        // Corrupt the chain so B points back at itself instead of A.
        playlist.items.get_mut(&b).unwrap().next_item_id = b;

        let result = playlist.ordered_items();
        assert_eq!(
            result.unwrap_err(),
            PlaylistError::BrokenChain { first: a, size: 2 }
        );
    }

    #[test]
    fn dangling_link_is_reported() {
        let (mut playlist, _rx) = playlist();
        let a = playlist.add_item("A", video("a")).unwrap();
        playlist.add_item("B", video("b")).unwrap();

        playlist.items.get_mut(&a).unwrap().next_item_id = ItemId(42);

        let result = playlist.ordered_items();
        assert_eq!(
            result.unwrap_err(),
            PlaylistError::DanglingLink { to: ItemId(42) }
        );
    }

    #[test]
    fn summary_reflects_membership() {
        let (mut playlist, _rx) = playlist();
        playlist.add_item("A", video("a")).unwrap();
        playlist.add_item("B", video("b")).unwrap();

        let summary = playlist.summary();
        assert_eq!(summary.name, "Test");
        assert_eq!(summary.item_count, 2);
    }
}
