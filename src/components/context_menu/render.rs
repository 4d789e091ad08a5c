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

//! Popup rendering for the context menu.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::{components::ContextMenu, theme::Theme};

impl ContextMenu {
    pub(crate) fn draw(&self, f: &mut Frame, theme: &Theme) {
        if !self.is_open() {
            return;
        }

        let frame_area = f.area();

        let separators = self.groups.len().saturating_sub(1);
        let hint = self.selected_item().and_then(|item| item.title.as_deref());

        let width = self
            .items()
            .map(|item| item.text.len() as u16)
            .chain(hint.map(|h| h.len() as u16))
            .max()
            .unwrap_or(0)
            .saturating_add(4)
            .min(frame_area.width);
        let height = (self.item_count() as u16)
            .saturating_add(separators as u16)
            .saturating_add(if hint.is_some() { 1 } else { 0 })
            .saturating_add(2)
            .min(frame_area.height);

        let anchor = self.anchor();
        let left = anchor.left.min(frame_area.width.saturating_sub(width));
        let top = anchor.top.min(frame_area.height.saturating_sub(height));
        let area = Rect::new(left, top, width, height);

        let mut lines: Vec<Line> = vec![];
        let mut index = 0usize;
        let mut first_group = true;
        for group in &self.groups {
            if !first_group {
                lines.push(Line::from("─".repeat(width.saturating_sub(2) as usize)));
            }
            first_group = false;

            for item in &group.items {
                let mut style = Style::default().fg(theme.menu_fg);
                if item.disabled {
                    style = style.fg(theme.disabled_fg);
                }
                if index == self.selected_index() {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                lines.push(Line::styled(format!(" {} ", item.text), style));
                index += 1;
            }
        }

        if let Some(hint) = hint {
            lines.push(Line::styled(
                format!(" {hint} "),
                Style::default().fg(theme.disabled_fg),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::ZERO);

        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
