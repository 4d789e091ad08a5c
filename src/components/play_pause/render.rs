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

//! Icon rendering for the play/pause button.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::{
    components::play_pause::{PlaybackIcon, PlayPauseButton},
    render::icons::{ICON_PAUSE, ICON_PLAY},
    theme::Theme,
};

impl PlayPauseButton {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let glyph = match self.icon() {
            PlaybackIcon::Play => ICON_PLAY,
            PlaybackIcon::Pause => ICON_PAUSE,
        };

        let style = if self.is_disabled() {
            Style::default().fg(theme.disabled_fg)
        } else {
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD)
        };

        let button = Paragraph::new(glyph)
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(button, area);
    }
}
