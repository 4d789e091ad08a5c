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

//! Commands issued by views and the commander.
//!
//! Commands are handled on a worker thread so the event loop never blocks on
//! side effects like spawning the clipboard helper. Most commands resolve to
//! an [`AppEvent`] that the event loop applies to the models.

use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::{
    actions::events::AppEvent,
    components::PromptRequest,
    model::ItemId,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppCommand {
    AddPlaylistItem { video_id: String, title: String },
    ShowAddItemPrompt,
    /// Ask for delete confirmation (or delete straight away when the
    /// reminder is switched off).
    RequestDeletePlaylistItem(ItemId),
    DeletePlaylistItem(ItemId),
    AddItemToStream(ItemId),
    AddPlaylistToStream,
    ClearStream,
    TryTogglePlayerState,
    CopyToClipboard(String),
    ExitApplication,
}

pub(crate) fn spawn_command_worker(
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            let Ok(command) = command_rx.recv() else {
                break;
            };
            tracing::debug!(?command, "processing command");

            let event = match command {
                AppCommand::AddPlaylistItem { video_id, title } => {
                    Some(AppEvent::AddPlaylistItem { video_id, title })
                }
                AppCommand::ShowAddItemPrompt => {
                    Some(AppEvent::ShowPrompt(PromptRequest::AddItem))
                }
                AppCommand::RequestDeletePlaylistItem(id) => {
                    Some(AppEvent::ShowPrompt(PromptRequest::DeleteItem(id)))
                }
                AppCommand::DeletePlaylistItem(id) => Some(AppEvent::DeletePlaylistItem(id)),
                AppCommand::AddItemToStream(id) => Some(AppEvent::AddItemToStream(id)),
                AppCommand::AddPlaylistToStream => Some(AppEvent::AddPlaylistToStream),
                AppCommand::ClearStream => Some(AppEvent::ClearStream),
                AppCommand::TryTogglePlayerState => Some(AppEvent::TryTogglePlayerState),
                AppCommand::CopyToClipboard(text) => {
                    copy_to_clipboard(&text);
                    None
                }
                AppCommand::ExitApplication => {
                    let _ = event_tx.send(AppEvent::ExitApplication);
                    break;
                }
            };

            if let Some(event) = event {
                let _ = event_tx.send(event);
            }
        }
    })
}

/// Pipes text to the first available platform clipboard helper,
/// fire-and-forget.
fn copy_to_clipboard(text: &str) {
    for helper in [
        &["wl-copy"][..],
        &["xclip", "-selection", "clipboard"][..],
        &["pbcopy"][..],
    ] {
        let spawned = Command::new(helper[0])
            .args(&helper[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        if let Ok(mut child) = spawned {
            if let Some(stdin) = child.stdin.as_mut() {
                if stdin.write_all(text.as_bytes()).is_err() {
                    tracing::warn!(helper = helper[0], "clipboard write failed");
                }
            }
            let _ = child.wait();
            return;
        }
    }

    tracing::warn!("no clipboard helper found");
}
