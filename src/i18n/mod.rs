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

//! Internationalized message lookup.
//!
//! All user-facing labels go through a message key rather than a literal, so
//! translations can be added per language without touching the views.

mod en;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Language {
    #[default]
    English,
}

/// Message keys for every user-facing label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Key {
    // Playlist panel
    PlaylistVideoCount,
    EmptyPlaylistNotice,

    // Context menu actions
    AddPlaylistToStream,
    AddPlaylistNoAddStreamWarning,
    CopyUrl,
    CopyTitleAndUrl,
    DeleteVideo,
    AddVideoToStream,

    // Prompts
    PromptOk,
    PromptCancel,
    PromptClose,
    DontRemindAgain,
    DeleteItemPromptTitle,
    DeleteItemPromptMessage,
    AddItemPromptTitle,
    FieldVideoId,
    FieldTitle,

    // Player bar
    StreamItemCount,
    PlayerDisabledHint,
}

/// Message-key lookup scoped to a language.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Messages {
    language: Language,
}

impl Messages {
    pub(crate) fn new(language: Language) -> Self {
        Self { language }
    }

    pub(crate) fn get(&self, key: Key) -> &'static str {
        match self.language {
            Language::English => en::message(key),
        }
    }
}
