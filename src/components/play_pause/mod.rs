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

//! The play/pause control of the player bar.
//!
//! The button mirrors two independent booleans from the player model: the
//! `enabled` attribute and whether the current state is pausable. Exactly one
//! of the two icons is showing at any time. Activation never flips state
//! locally; it requests a toggle and the player model decides what that
//! means.

mod render;

/// Which of the two mutually-exclusive icons is showing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PlaybackIcon {
    Play,
    Pause,
}

pub(crate) struct PlayPauseButton {
    disabled: bool,
    icon: PlaybackIcon,
}

impl PlayPauseButton {
    pub(crate) fn new() -> Self {
        Self {
            disabled: true,
            icon: PlaybackIcon::Play,
        }
    }

    /// Re-derives the visual state from the model booleans: the disabled
    /// styling mirrors `!enabled`, the pause icon shows iff the player is
    /// pausable, the play icon otherwise.
    pub(crate) fn set_state(&mut self, enabled: bool, pausable: bool) {
        self.disabled = !enabled;
        self.icon = if pausable {
            PlaybackIcon::Pause
        } else {
            PlaybackIcon::Play
        };
    }

    pub(crate) fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn icon(&self) -> PlaybackIcon {
        self.icon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_icon_for_every_state_combination() {
        let mut button = PlayPauseButton::new();

        for enabled in [false, true] {
            for pausable in [false, true] {
                button.set_state(enabled, pausable);

                let expected = if pausable {
                    PlaybackIcon::Pause
                } else {
                    PlaybackIcon::Play
                };
                assert_eq!(button.icon(), expected, "enabled={enabled} pausable={pausable}");
                assert_eq!(button.is_disabled(), !enabled);
            }
        }
    }

    #[test]
    fn starts_disabled_with_the_play_icon() {
        let button = PlayPauseButton::new();
        assert!(button.is_disabled());
        assert_eq!(button.icon(), PlaybackIcon::Play);
    }
}
