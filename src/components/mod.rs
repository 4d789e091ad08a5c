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

//! Interactive UI components.
//!
//! Each component keeps its state in `mod.rs`, maps input to actions in
//! `event.rs`, and draws itself in `render.rs`. Components never mutate the
//! domain models directly; they report intent through actions or commands and
//! patch themselves when the corresponding model events come back around.

pub(crate) mod context_menu;
pub(crate) mod play_pause;
pub(crate) mod playlist;
pub(crate) mod prompt;

pub(crate) use context_menu::{ContextMenu, ContextMenuGroup, ContextMenuItem, MenuAnchor};
pub(crate) use play_pause::PlayPauseButton;
pub(crate) use playlist::{PlaylistAction, PlaylistView};
pub(crate) use prompt::{
    FormField, PromptForm, PromptKind, PromptModel, PromptRequest, PromptView,
    REMIND_DELETE_PLAYLIST_ITEM,
};
