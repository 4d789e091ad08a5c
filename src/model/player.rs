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

//! Playback state owned by the streaming backend.
//!
//! Views hold a read-only picture of this model and never flip state
//! themselves; they ask via [`Player::try_toggle_player_state`] and the model
//! decides what "toggle" means against the current state. State changes are
//! published on the application event channel.

use std::sync::mpsc::Sender;

use crate::actions::events::AppEvent;

/// Playback status of the remote player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Unstarted,
    Playing,
    Paused,
    Buffering,
    Ended,
}

pub(crate) struct Player {
    state: PlayerState,
    enabled: bool,
    event_tx: Sender<AppEvent>,
}

impl Player {
    pub(crate) fn new(event_tx: Sender<AppEvent>) -> Self {
        Self {
            state: PlayerState::Unstarted,
            enabled: false,
            event_tx,
        }
    }

    pub(crate) fn state(&self) -> PlayerState {
        self.state
    }

    pub(crate) fn enabled(&self) -> bool {
        self.enabled
    }

    /// True while playback can be paused, i.e. the player is playing or is
    /// about to be (buffering).
    pub(crate) fn is_pausable(&self) -> bool {
        matches!(self.state, PlayerState::Playing | PlayerState::Buffering)
    }

    /// Requests a play/pause flip. A disabled player ignores the request.
    pub(crate) fn try_toggle_player_state(&mut self) {
        if !self.enabled {
            return;
        }

        if self.is_pausable() {
            self.set_state(PlayerState::Paused);
        } else {
            self.set_state(PlayerState::Playing);
        }
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        let _ = self.event_tx.send(AppEvent::PlayerEnabledChanged(enabled));
    }

    fn set_state(&mut self, state: PlayerState) {
        if self.state == state {
            return;
        }
        self.state = state;
        let _ = self.event_tx.send(AppEvent::PlayerStateChanged(state));
    }
}
