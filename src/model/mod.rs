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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application—playlist
//! items, the videos they reference, and the ephemeral stream projections
//! queued for playback—along with the collections that manage them.

pub(crate) mod player;
pub(crate) mod playlist;
pub(crate) mod stream;

use std::fmt;

/// Stable identifier of a playlist item.
///
/// Sibling links between playlist items are expressed through these ids
/// rather than references, so an item can be relinked without touching its
/// neighbours' ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ItemId(pub(crate) u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Externally-assigned identifier of a video on the streaming service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct VideoId(pub(crate) String);

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A video known to the streaming service.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Video {
    pub(crate) id: VideoId,
    pub(crate) title: String,
    pub(crate) duration: u64,
}

/// A single entry of a playlist.
///
/// Items form a circular doubly-linked order through `previous_item_id` and
/// `next_item_id`. An item that is the sole member of its playlist links to
/// itself in both directions.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlaylistItem {
    pub(crate) id: ItemId,
    pub(crate) title: String,
    pub(crate) video: Video,
    pub(crate) previous_item_id: ItemId,
    pub(crate) next_item_id: ItemId,
}
