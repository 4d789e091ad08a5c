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

//! The modal prompt overlay.
//!
//! A prompt is shown over a dimmed backdrop and runs through a small
//! transition state machine driven by the application tick: it becomes fully
//! visible one tick after mounting, and on dismissal it keeps its DOM-like
//! state alive until the outward transition has played out, only then is it
//! torn down. Re-requesting the dismissal while the transition runs re-arms
//! the same countdown rather than stacking another one, so teardown happens
//! exactly once.
//!
//! Submission is validation-gated: an invalid submittable field silently
//! aborts the submit and leaves the prompt open for correction. Prompts may
//! carry a "don't show again" reminder checkbox whose state persists to the
//! user settings store under the key named by the prompt model.

mod event;
mod render;

use std::sync::mpsc::Sender;

use tui_input::Input;

use crate::{actions::commands::AppCommand, config::Settings, model::ItemId};

/// Settings key for the delete-item confirmation reminder.
pub(crate) const REMIND_DELETE_PLAYLIST_ITEM: &str = "remindDeletePlaylistItem";

/// Ticks the outward transition takes before the prompt is torn down.
const HIDE_TRANSITION_TICKS: u8 = 2;

/// A request for a prompt to be built and shown.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PromptRequest {
    AddItem,
    DeleteItem(ItemId),
}

/// Per-invocation prompt configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PromptModel {
    pub(crate) title: String,
    /// Settings key of the "skip this prompt" flag. `None` means the
    /// reminder concept does not apply and the prompt is never suppressed.
    pub(crate) reminder_property: Option<String>,
}

/// What a submitted prompt does. `Notice` prompts submit to a no-op.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PromptKind {
    Notice,
    AddPlaylistItem,
    DeletePlaylistItem(ItemId),
}

/// A single input row of a prompt form.
#[derive(Debug)]
pub(crate) struct FormField {
    pub(crate) label: String,
    pub(crate) input: Input,
    pub(crate) submittable: bool,
    pub(crate) invalid: bool,
}

impl FormField {
    /// A required field; empty input carries the invalid marker.
    pub(crate) fn submittable(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            input: Input::default(),
            submittable: true,
            invalid: true,
        }
    }

    pub(crate) fn refresh_validity(&mut self) {
        self.invalid = self.input.value().trim().is_empty();
    }
}

/// A child view mounted into the prompt's content region.
#[derive(Debug, Default)]
pub(crate) struct PromptForm {
    pub(crate) fields: Vec<FormField>,
}

impl PromptForm {
    pub(crate) fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    pub(crate) fn value(&self, index: usize) -> String {
        self.fields
            .get(index)
            .map(|field| field.input.value().trim().to_string())
            .unwrap_or_default()
    }
}

/// The prompt's content region: either a mounted child view or raw text.
#[derive(Debug)]
pub(crate) enum PromptContent {
    Form(PromptForm),
    Text(String),
    Empty,
}

/// Transition lifecycle of the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PromptPhase {
    /// Mounted; the visible styling applies on the next tick.
    ShowRequested,
    Visible,
    /// Dismissed; the outward transition is playing.
    HideRequested { ticks_remaining: u8 },
    /// Transition complete, ready for teardown.
    Hidden,
}

/// Which element of the prompt holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PromptFocus {
    Field(usize),
    Reminder,
    Ok,
    Cancel,
    Close,
}

pub(crate) struct PromptView {
    pub(crate) model: PromptModel,
    kind: PromptKind,
    content: PromptContent,
    phase: PromptPhase,
    focus: PromptFocus,
    reminder_checked: bool,
}

impl PromptView {
    /// Builds a prompt from exactly one content source.
    ///
    /// Providing both or neither is a developer-time contract violation: it
    /// is logged as a diagnostic and the prompt carries on with a
    /// best-effort choice.
    pub(crate) fn new(
        model: PromptModel,
        kind: PromptKind,
        content_view: Option<PromptForm>,
        content_text: Option<String>,
    ) -> Self {
        let content = match (content_view, content_text) {
            (Some(form), None) => PromptContent::Form(form),
            (None, Some(text)) => PromptContent::Text(text),
            (Some(form), Some(_)) => {
                tracing::error!("prompt has both a content view and content text; using the view");
                PromptContent::Form(form)
            }
            (None, None) => {
                tracing::error!("prompt has no content set");
                PromptContent::Empty
            }
        };

        let focus = match &content {
            PromptContent::Form(form) if !form.fields.is_empty() => PromptFocus::Field(0),
            _ => PromptFocus::Ok,
        };

        Self {
            model,
            kind,
            content,
            phase: PromptPhase::ShowRequested,
            focus,
            reminder_checked: false,
        }
    }

    pub(crate) fn phase(&self) -> PromptPhase {
        self.phase
    }

    pub(crate) fn focus(&self) -> PromptFocus {
        self.focus
    }

    pub(crate) fn content(&self) -> &PromptContent {
        &self.content
    }

    pub(crate) fn reminder_checked(&self) -> bool {
        self.reminder_checked
    }

    pub(crate) fn has_reminder(&self) -> bool {
        self.model.reminder_property.is_some()
    }

    pub(crate) fn is_hidden(&self) -> bool {
        self.phase == PromptPhase::Hidden
    }

    /// Advances the transition clock one tick.
    pub(crate) fn tick(&mut self) {
        self.phase = match self.phase {
            PromptPhase::ShowRequested => PromptPhase::Visible,
            PromptPhase::HideRequested { ticks_remaining } if ticks_remaining <= 1 => {
                PromptPhase::Hidden
            }
            PromptPhase::HideRequested { ticks_remaining } => PromptPhase::HideRequested {
                ticks_remaining: ticks_remaining - 1,
            },
            phase @ (PromptPhase::Visible | PromptPhase::Hidden) => phase,
        };
    }

    /// Starts the outward transition. Calling this again while the
    /// transition runs re-arms the countdown; it never stacks.
    pub(crate) fn hide(&mut self) {
        if self.phase == PromptPhase::Hidden {
            return;
        }
        self.phase = PromptPhase::HideRequested {
            ticks_remaining: HIDE_TRANSITION_TICKS,
        };
    }

    /// True iff no submittable element carries the invalid marker.
    pub(crate) fn validate(&self) -> bool {
        match &self.content {
            PromptContent::Form(form) => !form
                .fields
                .iter()
                .any(|field| field.submittable && field.invalid),
            PromptContent::Text(_) | PromptContent::Empty => true,
        }
    }

    /// Dispatches the submit command and starts hiding, unless validation
    /// fails—in which case nothing happens and the prompt stays open.
    pub(crate) fn submit(&mut self, command_tx: &Sender<AppCommand>) {
        if !self.validate() {
            return;
        }

        if let Some(command) = self.submit_command() {
            let _ = command_tx.send(command);
        }

        self.hide();
    }

    fn submit_command(&self) -> Option<AppCommand> {
        match &self.kind {
            PromptKind::Notice => None,
            PromptKind::DeletePlaylistItem(id) => Some(AppCommand::DeletePlaylistItem(*id)),
            PromptKind::AddPlaylistItem => match &self.content {
                PromptContent::Form(form) => Some(AppCommand::AddPlaylistItem {
                    video_id: form.value(0),
                    title: form.value(1),
                }),
                PromptContent::Text(_) | PromptContent::Empty => None,
            },
        }
    }

    /// Whether this prompt is suppressed by its reminder setting. Prompts
    /// without a `reminder_property` are never suppressed.
    pub(crate) fn reminder_disabled(&self, settings: &Settings) -> bool {
        match &self.model.reminder_property {
            None => false,
            Some(key) => !settings.get(key),
        }
    }

    /// Flips the checkbox and persists the negated checked state under the
    /// reminder key, fire-and-forget.
    pub(crate) fn toggle_reminder(&mut self, settings: &mut Settings) {
        self.reminder_checked = !self.reminder_checked;
        if let Some(key) = self.model.reminder_property.clone() {
            settings.save(&key, !self.reminder_checked);
        }
    }

    fn field(&self, index: usize) -> Option<&FormField> {
        match &self.content {
            PromptContent::Form(form) => form.fields.get(index),
            _ => None,
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match &mut self.content {
            PromptContent::Form(form) => form.fields.get_mut(index),
            _ => None,
        }
    }

    fn focus_targets(&self) -> Vec<PromptFocus> {
        let mut targets = vec![];
        if let PromptContent::Form(form) = &self.content {
            targets.extend((0..form.fields.len()).map(PromptFocus::Field));
        }
        if self.has_reminder() {
            targets.push(PromptFocus::Reminder);
        }
        targets.push(PromptFocus::Ok);
        targets.push(PromptFocus::Cancel);
        targets.push(PromptFocus::Close);
        targets
    }

    fn focus_next(&mut self) {
        let targets = self.focus_targets();
        let current = targets.iter().position(|t| *t == self.focus).unwrap_or(0);
        self.focus = targets[(current + 1) % targets.len()];
    }

    fn focus_previous(&mut self) {
        let targets = self.focus_targets();
        let current = targets.iter().position(|t| *t == self.focus).unwrap_or(0);
        self.focus = targets[(current + targets.len() - 1) % targets.len()];
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;

    fn model(reminder: Option<&str>) -> PromptModel {
        PromptModel {
            title: "Delete video".to_string(),
            reminder_property: reminder.map(str::to_string),
        }
    }

    fn notice(reminder: Option<&str>) -> PromptView {
        PromptView::new(
            model(reminder),
            PromptKind::Notice,
            None,
            Some("Are you sure?".to_string()),
        )
    }

    #[test]
    fn visible_styling_applies_one_tick_after_mount() {
        let mut prompt = notice(None);
        assert_eq!(prompt.phase(), PromptPhase::ShowRequested);

        prompt.tick();
        assert_eq!(prompt.phase(), PromptPhase::Visible);

        prompt.tick();
        assert_eq!(prompt.phase(), PromptPhase::Visible);
    }

    #[test]
    fn hide_waits_for_the_transition_then_settles_hidden() {
        let mut prompt = notice(None);
        prompt.tick();
        prompt.hide();
        assert!(!prompt.is_hidden());

        prompt.tick();
        assert!(!prompt.is_hidden());
        prompt.tick();
        assert!(prompt.is_hidden());

        // Stays settled under further ticks and hides.
        prompt.tick();
        prompt.hide();
        assert!(prompt.is_hidden());
    }

    #[test]
    fn repeated_hide_rearms_the_countdown_instead_of_stacking() {
        let mut prompt = notice(None);
        prompt.tick();
        prompt.hide();
        prompt.tick();
        prompt.hide();

        assert_eq!(
            prompt.phase(),
            PromptPhase::HideRequested { ticks_remaining: 2 }
        );
    }

    #[test]
    fn both_content_sources_is_a_diagnostic_not_a_failure() {
        let prompt = PromptView::new(
            model(None),
            PromptKind::Notice,
            Some(PromptForm::new(vec![FormField::submittable("Title")])),
            Some("unused".to_string()),
        );
        assert!(matches!(prompt.content(), PromptContent::Form(_)));
    }

    #[test]
    fn neither_content_source_is_a_diagnostic_not_a_failure() {
        let prompt = PromptView::new(model(None), PromptKind::Notice, None, None);
        assert!(matches!(prompt.content(), PromptContent::Empty));
        assert!(prompt.validate());
    }

    #[test]
    fn invalid_submittable_field_blocks_submission() {
        let (command_tx, command_rx) = mpsc::channel();
        let mut prompt = PromptView::new(
            model(None),
            PromptKind::AddPlaylistItem,
            Some(PromptForm::new(vec![FormField::submittable("Video id")])),
            None,
        );
        prompt.tick();

        assert!(!prompt.validate());
        prompt.submit(&command_tx);

        assert!(command_rx.try_iter().next().is_none());
        assert_eq!(prompt.phase(), PromptPhase::Visible);
    }

    #[test]
    fn valid_submission_dispatches_and_hides() {
        let (command_tx, command_rx) = mpsc::channel();
        let mut form = PromptForm::new(vec![
            FormField::submittable("Video id"),
            FormField::submittable("Title"),
        ]);
        for (field, value) in form.fields.iter_mut().zip(["abc123", "A Song"]) {
            field.input = Input::new(value.to_string());
            field.refresh_validity();
        }
        let mut prompt =
            PromptView::new(model(None), PromptKind::AddPlaylistItem, Some(form), None);
        prompt.tick();

        prompt.submit(&command_tx);

        assert_eq!(
            command_rx.try_recv().ok(),
            Some(AppCommand::AddPlaylistItem {
                video_id: "abc123".to_string(),
                title: "A Song".to_string(),
            })
        );
        assert!(matches!(
            prompt.phase(),
            PromptPhase::HideRequested { .. }
        ));
    }

    #[test]
    fn notice_prompts_submit_to_a_noop() {
        let (command_tx, command_rx) = mpsc::channel();
        let mut prompt = notice(None);
        prompt.tick();

        prompt.submit(&command_tx);

        assert!(command_rx.try_iter().next().is_none());
        assert!(matches!(prompt.phase(), PromptPhase::HideRequested { .. }));
    }

    #[test]
    fn reminder_never_applies_without_a_property() {
        let mut settings = Settings::ephemeral();
        settings.save(REMIND_DELETE_PLAYLIST_ITEM, false);

        let prompt = notice(None);
        assert!(!prompt.reminder_disabled(&settings));
    }

    #[test]
    fn reminder_disabled_negates_the_stored_value() {
        let mut settings = Settings::ephemeral();
        let prompt = notice(Some(REMIND_DELETE_PLAYLIST_ITEM));

        assert!(!prompt.reminder_disabled(&settings));

        settings.save(REMIND_DELETE_PLAYLIST_ITEM, false);
        assert!(prompt.reminder_disabled(&settings));

        settings.save(REMIND_DELETE_PLAYLIST_ITEM, true);
        assert!(!prompt.reminder_disabled(&settings));
    }

    #[test]
    fn toggling_the_checkbox_persists_the_negated_state() {
        let mut settings = Settings::ephemeral();
        let mut prompt = notice(Some(REMIND_DELETE_PLAYLIST_ITEM));

        prompt.toggle_reminder(&mut settings);
        assert!(prompt.reminder_checked());
        assert!(!settings.get(REMIND_DELETE_PLAYLIST_ITEM));

        prompt.toggle_reminder(&mut settings);
        assert!(!prompt.reminder_checked());
        assert!(settings.get(REMIND_DELETE_PLAYLIST_ITEM));
    }

    #[test]
    fn focus_cycles_through_fields_and_buttons() {
        let mut prompt = PromptView::new(
            model(Some(REMIND_DELETE_PLAYLIST_ITEM)),
            PromptKind::AddPlaylistItem,
            Some(PromptForm::new(vec![FormField::submittable("Video id")])),
            None,
        );

        assert_eq!(prompt.focus(), PromptFocus::Field(0));
        prompt.focus_next();
        assert_eq!(prompt.focus(), PromptFocus::Reminder);
        prompt.focus_next();
        assert_eq!(prompt.focus(), PromptFocus::Ok);
        prompt.focus_next();
        assert_eq!(prompt.focus(), PromptFocus::Cancel);
        prompt.focus_next();
        assert_eq!(prompt.focus(), PromptFocus::Close);
        prompt.focus_next();
        assert_eq!(prompt.focus(), PromptFocus::Field(0));
        prompt.focus_previous();
        assert_eq!(prompt.focus(), PromptFocus::Close);
    }
}
