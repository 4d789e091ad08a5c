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

//! The stream of items queued for playback.
//!
//! A stream item is an ephemeral projection of a playlist item taken at the
//! moment it is queued; its lifetime is independent of the source item, so
//! deleting a playlist entry leaves anything already streaming untouched.

use std::sync::mpsc::Sender;

use crate::{
    actions::events::AppEvent,
    model::{PlaylistItem, Video, VideoId},
};

/// A queued entry of the playback stream.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StreamItem {
    pub(crate) id: String,
    pub(crate) video: Video,
    pub(crate) title: String,
    pub(crate) video_image_url: String,
}

/// Derives the thumbnail location for a video. Deterministic: the same video
/// id always yields the same URL.
pub(crate) fn video_image_url(video_id: &VideoId) -> String {
    format!("http://img.youtube.com/vi/{video_id}/default.jpg")
}

pub(crate) struct StreamItems {
    items: Vec<StreamItem>,
    next_id: u64,
    event_tx: Sender<AppEvent>,
}

impl StreamItems {
    pub(crate) fn new(event_tx: Sender<AppEvent>) -> Self {
        Self {
            items: vec![],
            next_id: 1,
            event_tx,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn items(&self) -> &[StreamItem] {
        &self.items
    }

    /// Projects a playlist item into a stream item with a freshly synthesized
    /// unique id.
    pub(crate) fn project(&mut self, item: &PlaylistItem) -> StreamItem {
        let id = format!("streamItem_{}", self.next_id);
        self.next_id += 1;

        StreamItem {
            id,
            video: item.video.clone(),
            title: item.title.clone(),
            video_image_url: video_image_url(&item.video.id),
        }
    }

    pub(crate) fn add(&mut self, item: StreamItem) {
        self.items.push(item);
        self.notify();
    }

    pub(crate) fn add_multiple(&mut self, items: Vec<StreamItem>) {
        self.items.extend(items);
        self.notify();
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.notify();
    }

    fn notify(&self) {
        let _ = self
            .event_tx
            .send(AppEvent::StreamItemsChanged(self.items.len()));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use super::*;
    use crate::model::ItemId;

    fn stream() -> (StreamItems, Receiver<AppEvent>) {
        let (event_tx, event_rx) = mpsc::channel();
        (StreamItems::new(event_tx), event_rx)
    }

    fn playlist_item(id: u64, video_id: &str, title: &str) -> PlaylistItem {
        PlaylistItem {
            id: ItemId(id),
            title: title.to_string(),
            video: Video {
                id: VideoId(video_id.to_string()),
                title: title.to_string(),
                duration: 240,
            },
            previous_item_id: ItemId(id),
            next_item_id: ItemId(id),
        }
    }

    #[test]
    fn projection_synthesizes_unique_ids() {
        let (mut stream, _rx) = stream();
        let item = playlist_item(1, "abc123", "Song");

        let first = stream.project(&item);
        let second = stream.project(&item);

        assert_eq!(first.id, "streamItem_1");
        assert_eq!(second.id, "streamItem_2");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn projection_derives_thumbnail_from_video_id() {
        let (mut stream, _rx) = stream();
        let item = playlist_item(1, "abc123", "Song");

        let projected = stream.project(&item);
        assert_eq!(
            projected.video_image_url,
            "http://img.youtube.com/vi/abc123/default.jpg"
        );
        assert_eq!(projected.title, "Song");
        assert_eq!(projected.video, item.video);
    }

    #[test]
    fn adding_items_notifies_with_the_new_count() {
        let (mut stream, rx) = stream();
        let item = playlist_item(1, "abc", "One");

        let projected = stream.project(&item);
        stream.add(projected);

        let more: Vec<StreamItem> = (0..2).map(|_| stream.project(&item)).collect();
        stream.add_multiple(more);

        let counts: Vec<usize> = rx
            .try_iter()
            .filter_map(|e| match e {
                AppEvent::StreamItemsChanged(n) => Some(n),
                _ => None,
            })
            .collect();
        assert_eq!(counts, [1, 3]);
        assert_eq!(stream.len(), 3);
    }

    #[test]
    fn stream_items_outlive_their_source() {
        let (mut stream, _rx) = stream();
        let item = playlist_item(7, "xyz", "Ephemeral");

        let projected = stream.project(&item);
        stream.add(projected);
        drop(item);

        assert_eq!(stream.items()[0].title, "Ephemeral");
    }
}
