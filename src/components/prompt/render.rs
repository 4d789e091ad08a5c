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

//! Overlay rendering for the modal prompt.
//!
//! The whole frame is dimmed behind the panel. The panel border only takes
//! the accent colour once the prompt has reached its fully visible phase, so
//! the inward and outward transitions read as a fade.

use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    components::prompt::{PromptContent, PromptFocus, PromptPhase, PromptView},
    i18n::{Key, Messages},
    theme::Theme,
};

const PANEL_WIDTH: u16 = 52;

impl PromptView {
    pub(crate) fn draw(&self, f: &mut Frame, theme: &Theme, messages: &Messages) {
        if self.is_hidden() {
            return;
        }

        let frame_area = f.area();

        let backdrop = Block::default().style(Style::default().bg(theme.backdrop_colour));
        f.render_widget(backdrop, frame_area);

        let content_lines: u16 = match self.content() {
            PromptContent::Form(form) => form.fields.len() as u16,
            PromptContent::Text(text) => {
                let width = PANEL_WIDTH.saturating_sub(4).max(1) as usize;
                text.lines()
                    .map(|line| line.chars().count().div_ceil(width).max(1) as u16)
                    .sum()
            }
            PromptContent::Empty => 0,
        };
        let reminder_lines: u16 = if self.has_reminder() { 2 } else { 0 };

        // content + blank + buttons + borders and padding.
        let height = (content_lines + reminder_lines + 6).min(frame_area.height);
        let width = PANEL_WIDTH.min(frame_area.width);
        let area = Rect::new(
            frame_area.width.saturating_sub(width) / 2,
            frame_area.height.saturating_sub(height) / 2,
            width,
            height,
        );

        let border_colour = if self.phase() == PromptPhase::Visible {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let close = format!(" {} ", messages.get(Key::PromptClose));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(format!(" {} ", self.model.title))
            .title_top(Line::styled(close, self.button_style(PromptFocus::Close, theme)).right_aligned())
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(theme.panel_colour));
        let inner = block.inner(area);

        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let mut lines: Vec<Line> = vec![];

        match self.content() {
            PromptContent::Form(form) => {
                let label_width = form
                    .fields
                    .iter()
                    .map(|field| field.label.chars().count())
                    .max()
                    .unwrap_or(0);
                for (index, field) in form.fields.iter().enumerate() {
                    let focused = self.focus() == PromptFocus::Field(index);
                    let mut value_style = Style::default().fg(theme.menu_fg);
                    if field.invalid {
                        value_style = value_style.fg(theme.invalid_fg);
                    }
                    if focused {
                        value_style = value_style.add_modifier(Modifier::UNDERLINED);
                        let cursor_x = inner.x
                            + label_width as u16
                            + 2
                            + field.input.visual_cursor() as u16;
                        f.set_cursor_position(Position::new(
                            cursor_x.min(inner.right().saturating_sub(1)),
                            inner.y + index as u16,
                        ));
                    }
                    lines.push(Line::from(vec![
                        Span::raw(format!("{:label_width$}: ", field.label)),
                        Span::styled(field.input.value().to_string(), value_style),
                    ]));
                }
            }
            PromptContent::Text(text) => {
                for line in text.lines() {
                    lines.push(Line::from(line.to_string()));
                }
            }
            PromptContent::Empty => {}
        }

        if self.has_reminder() {
            let checkbox = if self.reminder_checked() { "[x]" } else { "[ ]" };
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("{checkbox} {}", messages.get(Key::DontRemindAgain)),
                self.button_style(PromptFocus::Reminder, theme),
            ));
        }

        lines.push(Line::default());
        lines.push(
            Line::from(vec![
                Span::styled(
                    format!("[ {} ]", messages.get(Key::PromptOk)),
                    self.button_style(PromptFocus::Ok, theme),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[ {} ]", messages.get(Key::PromptCancel)),
                    self.button_style(PromptFocus::Cancel, theme),
                ),
            ])
            .alignment(Alignment::Right),
        );

        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn button_style(&self, target: PromptFocus, theme: &Theme) -> Style {
        let style = Style::default().fg(theme.menu_fg);
        if self.focus() == target && self.phase() == PromptPhase::Visible {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }
}
