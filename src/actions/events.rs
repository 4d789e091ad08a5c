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

//! The application event loop.
//!
//! Every event ends with a frame draw, so views patched incrementally by
//! model notifications are always in sync with what is on screen. Keyboard
//! ownership is strictly layered: a mounted prompt swallows everything,
//! then an open context menu, then the commander, then the playlist panel,
//! and only then the global keys.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{
    App,
    actions::commands::AppCommand,
    components::{
        FormField, PlaylistAction, PromptForm, PromptKind, PromptModel, PromptRequest,
        PromptView, REMIND_DELETE_PLAYLIST_ITEM,
        playlist::{item_context_menu, playlist_context_menu},
    },
    i18n::Key,
    model::{ItemId, PlaylistItem, Video, VideoId, player::PlayerState},
    render,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Tick,

    PlaylistItemAdded(PlaylistItem),
    PlaylistItemRemoved(ItemId),
    PlaylistEmptied,
    PlaylistReordered,
    StreamItemsChanged(usize),
    PlayerStateChanged(PlayerState),
    PlayerEnabledChanged(bool),

    AddPlaylistItem { video_id: String, title: String },
    DeletePlaylistItem(ItemId),
    AddItemToStream(ItemId),
    AddPlaylistToStream,
    ClearStream,
    TryTogglePlayerState,
    ShowPrompt(PromptRequest),

    Error(String),
    ExitApplication,
}

pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        let event = app.event_rx.recv()?;

        match event {
            AppEvent::ExitApplication => break,

            AppEvent::Key(key) => process_key_event(app, key),

            AppEvent::Tick => {
                if let Some(prompt) = &mut app.prompt {
                    prompt.tick();
                    if prompt.is_hidden() {
                        app.prompt = None;
                    }
                }
            }

            AppEvent::PlaylistItemAdded(item) => app.playlist_view.add_item(&item),
            AppEvent::PlaylistItemRemoved(id) => app.playlist_view.remove_item(id),

            // Structural changes rebuild the panel from the chain.
            AppEvent::PlaylistEmptied | AppEvent::PlaylistReordered => {
                if let Err(e) = app.playlist_view.render(&app.playlist) {
                    report_error(app, e.to_string());
                }
            }

            AppEvent::StreamItemsChanged(count) => app.player.set_enabled(count > 0),

            AppEvent::PlayerStateChanged(_) | AppEvent::PlayerEnabledChanged(_) => {
                app.play_pause_button
                    .set_state(app.player.enabled(), app.player.is_pausable());
            }

            AppEvent::TryTogglePlayerState => app.player.try_toggle_player_state(),

            AppEvent::AddPlaylistItem { video_id, title } => {
                let video = Video {
                    id: VideoId(video_id),
                    title: title.clone(),
                    duration: 0,
                };
                if let Err(e) = app.playlist.add_item(title, video) {
                    report_error(app, e.to_string());
                }
            }

            AppEvent::DeletePlaylistItem(id) => {
                if let Err(e) = app.playlist.remove_item(id) {
                    report_error(app, e.to_string());
                }
            }

            AppEvent::AddItemToStream(id) => match app.playlist.get(id) {
                Some(item) => {
                    let projected = app.stream_items.project(item);
                    app.stream_items.add(projected);
                }
                None => report_error(app, format!("unknown playlist item {id}")),
            },

            AppEvent::AddPlaylistToStream => match app.playlist.ordered_items() {
                Ok(items) => {
                    let projected = items
                        .iter()
                        .map(|item| app.stream_items.project(item))
                        .collect();
                    app.stream_items.add_multiple(projected);
                }
                Err(e) => report_error(app, e.to_string()),
            },

            AppEvent::ClearStream => app.stream_items.clear(),

            AppEvent::ShowPrompt(request) => show_prompt(app, request),

            AppEvent::Error(message) => report_error(app, message),
        }

        terminal.draw(|f| render::draw(f, app))?;
    }

    Ok(())
}

fn report_error(app: &mut App, message: String) {
    tracing::error!("{message}");
    app.status = Some(message);
}

fn process_key_event(app: &mut App, key: KeyEvent) {
    app.status = None;

    if let Some(prompt) = &mut app.prompt {
        prompt.process_key(key, &app.command_tx, &mut app.settings);
        return;
    }

    if app.context_menu.is_open() {
        if let Some(command) = app.context_menu.process_key(key) {
            let _ = app.command_tx.send(command);
        }
        return;
    }

    if app.commander.is_active() || key.code == KeyCode::Char(':') {
        app.commander.process_key(key, &app.command_tx);
        return;
    }

    if let Some(action) = app.playlist_view.process_key(key) {
        handle_playlist_action(app, action);
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            let _ = app.command_tx.send(AppCommand::ExitApplication);
        }
        KeyCode::Char(' ') => {
            let _ = app.command_tx.send(AppCommand::TryTogglePlayerState);
        }
        KeyCode::Char('a') => {
            let _ = app.command_tx.send(AppCommand::ShowAddItemPrompt);
        }
        KeyCode::Char('A') => {
            let _ = app.command_tx.send(AppCommand::AddPlaylistToStream);
        }
        _ => {}
    }
}

fn handle_playlist_action(app: &mut App, action: PlaylistAction) {
    match action {
        PlaylistAction::MoveItem {
            moved_id,
            next_id,
            new_index,
        } => match app.playlist.move_item(moved_id, next_id) {
            Ok(()) => {
                // The reorder event rebuilds the rows; keep the selection on
                // the row that moved.
                app.playlist_view
                    .list_state_mut()
                    .select(Some(new_index));
            }
            Err(e) => report_error(app, e.to_string()),
        },

        PlaylistAction::AddToStream(id) => {
            let _ = app.command_tx.send(AppCommand::AddItemToStream(id));
        }

        PlaylistAction::Delete(id) => {
            let _ = app
                .command_tx
                .send(AppCommand::RequestDeletePlaylistItem(id));
        }

        PlaylistAction::OpenItemMenu(id) => {
            let Some(item) = app.playlist.get(id) else {
                return;
            };
            for group in item_context_menu(item, &app.messages) {
                app.context_menu.add_group(group);
            }
            app.context_menu.show(app.playlist_view.menu_anchor());
        }

        PlaylistAction::OpenPlaylistMenu => {
            let group = playlist_context_menu(&app.playlist, &app.messages);
            app.context_menu.add_group(group);
            app.context_menu.show(app.playlist_view.menu_anchor());
        }
    }
}

fn show_prompt(app: &mut App, request: PromptRequest) {
    let Some(mut prompt) = build_prompt(app, request) else {
        return;
    };

    // A switched-off reminder skips the confirmation and submits directly.
    if prompt.reminder_disabled(&app.settings) {
        prompt.submit(&app.command_tx);
        return;
    }

    app.prompt = Some(prompt);
}

fn build_prompt(app: &App, request: PromptRequest) -> Option<PromptView> {
    match request {
        PromptRequest::AddItem => Some(PromptView::new(
            PromptModel {
                title: app.messages.get(Key::AddItemPromptTitle).to_string(),
                reminder_property: None,
            },
            PromptKind::AddPlaylistItem,
            Some(PromptForm::new(vec![
                FormField::submittable(app.messages.get(Key::FieldVideoId)),
                FormField::submittable(app.messages.get(Key::FieldTitle)),
            ])),
            None,
        )),

        PromptRequest::DeleteItem(id) => {
            let item = app.playlist.get(id)?;
            Some(PromptView::new(
                PromptModel {
                    title: app.messages.get(Key::DeleteItemPromptTitle).to_string(),
                    reminder_property: Some(REMIND_DELETE_PLAYLIST_ITEM.to_string()),
                },
                PromptKind::DeletePlaylistItem(id),
                None,
                Some(format!(
                    "{}\n\n\"{}\"",
                    app.messages.get(Key::DeleteItemPromptMessage),
                    item.title
                )),
            ))
        }
    }
}
