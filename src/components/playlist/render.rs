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

//! List rendering for the playlist panel.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::{
    components::playlist::PlaylistView,
    i18n::{Key, Messages},
    model::playlist::PlaylistSummary,
    theme::Theme,
    util,
};

impl PlaylistView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        summary: &PlaylistSummary,
        theme: &Theme,
        messages: &Messages,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header = Line::from(vec![
            Span::styled(
                format!(" {} ", summary.name),
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "| {} {}",
                    summary.item_count,
                    messages.get(Key::PlaylistVideoCount)
                ),
                Style::default().fg(theme.disabled_fg),
            ),
        ]);
        f.render_widget(
            Paragraph::new(header).block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(theme.border_colour)),
            ),
            chunks[0],
        );

        if self.rows().is_empty() {
            f.render_widget(
                Paragraph::new(messages.get(Key::EmptyPlaylistNotice))
                    .style(Style::default().fg(theme.disabled_fg)),
                chunks[1],
            );
            return;
        }

        let width = chunks[1].width as usize;
        let items: Vec<ListItem> = self
            .rows()
            .iter()
            .map(|row| {
                let duration = util::format::format_time(row.duration);
                let title_width = width.saturating_sub(duration.len() + 3);
                ListItem::new(Line::from(vec![
                    Span::raw(format!(" {:title_width$.title_width$}", row.title)),
                    Span::styled(duration, Style::default().fg(theme.disabled_fg)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::REVERSED),
            );
        f.render_stateful_widget(list, chunks[1], self.list_state_mut());
    }
}
