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

//! English translations.

use super::Key;

pub(super) fn message(key: Key) -> &'static str {
    match key {
        Key::PlaylistVideoCount => "videos",
        Key::EmptyPlaylistNotice => "This playlist is empty. Add a video to get started.",

        Key::AddPlaylistToStream => "Add playlist to stream",
        Key::AddPlaylistNoAddStreamWarning => "Can't add an empty playlist to the stream",
        Key::CopyUrl => "Copy URL",
        Key::CopyTitleAndUrl => "Copy title and URL",
        Key::DeleteVideo => "Delete video",
        Key::AddVideoToStream => "Add video to stream",

        Key::PromptOk => "OK",
        Key::PromptCancel => "Cancel",
        Key::PromptClose => "Close",
        Key::DontRemindAgain => "Don't remind me again",
        Key::DeleteItemPromptTitle => "Delete video",
        Key::DeleteItemPromptMessage => "Are you sure you want to delete",
        Key::AddItemPromptTitle => "Add video",
        Key::FieldVideoId => "Video id",
        Key::FieldTitle => "Title",

        Key::StreamItemCount => "stream items",
        Key::PlayerDisabledHint => "add something to the stream to enable playback",
    }
}
