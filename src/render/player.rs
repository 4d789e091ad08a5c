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

//! Render the player bar.
//!
//! This module renders the playback controls, the current playback state and
//! the stream queue summary.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, i18n::Key, model::player::PlayerState};

/// Renders the player bar including the play/pause control and stream info.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(30),
        ])
        .split(inner_area);

    app.play_pause_button.draw(f, chunks[0], &app.theme);

    let state_line = if app.player.enabled() {
        let state = match app.player.state() {
            PlayerState::Unstarted => "Unstarted",
            PlayerState::Playing => "Playing",
            PlayerState::Paused => "Paused",
            PlayerState::Buffering => "Buffering",
            PlayerState::Ended => "Ended",
        };
        Line::from(Span::styled(
            state,
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(
            Span::raw(app.messages.get(Key::PlayerDisabledHint)).fg(app.theme.disabled_fg),
        )
    };
    f.render_widget(Paragraph::new(state_line), chunks[1]);

    let count_line = Line::from(
        Span::raw(format!(
            "{} {}",
            app.stream_items.len(),
            app.messages.get(Key::StreamItemCount)
        ))
        .fg(app.theme.disabled_fg),
    );
    f.render_widget(
        Paragraph::new(count_line).alignment(Alignment::Right),
        chunks[2],
    );
}
