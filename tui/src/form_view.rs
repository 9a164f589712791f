//! Contact Form View
//!
//! Renders the contact form block inside the page strip and routes keyboard
//! editing into the headless `ContactForm`. Focus cycles Name -> Email ->
//! Message -> Send; Esc releases focus back to the page.

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::{ContactForm, FormField, SubmitOutcome};
use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};

use crate::theme;

/// Rows the form block occupies in the page strip
pub const FORM_HEIGHT: usize = 6;

/// Widest a field's visible value gets before it scrolls
const VALUE_WIDTH: usize = 40;

/// What currently has focus inside the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    Submit,
}

const FOCUS_ORDER: [Focus; 4] = [
    Focus::Field(FormField::Name),
    Focus::Field(FormField::Email),
    Focus::Field(FormField::Message),
    Focus::Submit,
];

/// Outcome of a key handled by the form.
#[derive(Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// Key consumed, nothing notable happened
    Handled,
    /// A submission attempt ran
    Submitted(SubmitOutcome),
    /// Focus left the form
    Released,
}

/// Form state plus focus bookkeeping.
pub struct FormView {
    pub form: ContactForm,
    focus: Option<Focus>,
}

impl FormView {
    pub fn new() -> Self {
        Self {
            form: ContactForm::new(),
            focus: None,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focus.is_some()
    }

    /// Focus the first field (keyboard entry into the form).
    pub fn focus_first(&mut self) {
        self.focus = Some(FOCUS_ORDER[0]);
    }

    pub fn release(&mut self) {
        self.focus = None;
    }

    /// Map a click on a row within the form block to a focus target.
    pub fn hit(&mut self, row_in_block: usize) -> bool {
        let target = match row_in_block {
            0 => Some(Focus::Field(FormField::Name)),
            1 => Some(Focus::Field(FormField::Email)),
            2 => Some(Focus::Field(FormField::Message)),
            4 => Some(Focus::Submit),
            _ => None,
        };
        match target {
            Some(focus) => {
                self.focus = Some(focus);
                true
            }
            None => false,
        }
    }

    /// A click inside the form block: focuses the clicked target, and
    /// clicking Send submits directly.
    pub fn click(&mut self, row_in_block: usize) -> Option<SubmitOutcome> {
        if !self.hit(row_in_block) {
            return None;
        }
        if self.focus == Some(Focus::Submit) {
            return Some(self.form.submit());
        }
        None
    }

    /// Handle a key while the form has focus.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormEvent {
        let Some(focus) = self.focus else {
            return FormEvent::Released;
        };

        match key.code {
            KeyCode::Esc => {
                self.focus = None;
                FormEvent::Released
            }
            KeyCode::Tab => {
                self.cycle(1);
                FormEvent::Handled
            }
            KeyCode::BackTab => {
                self.cycle(-1);
                FormEvent::Handled
            }
            KeyCode::Enter => match focus {
                // Enter walks down the fields; on Send it submits.
                Focus::Field(_) => {
                    self.cycle(1);
                    FormEvent::Handled
                }
                Focus::Submit => FormEvent::Submitted(self.form.submit()),
            },
            KeyCode::Char(c) => {
                if let Focus::Field(field) = focus {
                    self.form.field_mut(field).push(c);
                }
                FormEvent::Handled
            }
            KeyCode::Backspace => {
                if let Focus::Field(field) = focus {
                    self.form.field_mut(field).pop();
                }
                FormEvent::Handled
            }
            _ => FormEvent::Handled,
        }
    }

    fn cycle(&mut self, direction: i32) {
        let current = self
            .focus
            .and_then(|f| FOCUS_ORDER.iter().position(|&o| o == f))
            .unwrap_or(0);
        let len = FOCUS_ORDER.len() as i32;
        let next = (current as i32 + direction).rem_euclid(len) as usize;
        self.focus = Some(FOCUS_ORDER[next]);
    }

    /// Paint the form block into the content layer, clipped to the viewport.
    pub fn render(&self, buf: &mut Buffer, form_top: usize, scroll_offset: usize) {
        let area = buf.area;
        let mut draw = |row_in_block: usize, x: u16, text: &str, style: Style| {
            let row = form_top + row_in_block;
            if row < scroll_offset {
                return;
            }
            let y = (row - scroll_offset) as u16;
            if y < area.height {
                buf.set_string(x, y, text, style);
            }
        };

        for (row, field) in FormField::ALL.iter().enumerate() {
            let focused = self.focus == Some(Focus::Field(*field));
            let label_style = if focused {
                Style::default()
                    .fg(theme::GOLD)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::BODY)
            };

            let value = self.form.field(*field);
            let shown: String = value
                .chars()
                .rev()
                .take(VALUE_WIDTH)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            let cursor = if focused { "_" } else { "" };

            draw(row, 2, &format!("{:<8}", format!("{}:", field.label())), label_style);
            draw(
                row,
                11,
                &format!("{}{}", shown, cursor),
                Style::default().fg(theme::GOLD_LIGHT),
            );
        }

        let submit_focused = self.focus == Some(Focus::Submit);
        let submit_style = if submit_focused {
            Style::default()
                .fg(theme::SUCCESS_FG)
                .bg(theme::GOLD)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::GOLD)
        };
        draw(4, 2, "[ Send Message ]", submit_style);
        draw(
            5,
            2,
            "tab: next field   enter: send",
            Style::default().fg(theme::DIM_GRAY),
        );
    }
}

impl Default for FormView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use folio_core::RejectReason;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_text(view: &mut FormView, text: &str) {
        for c in text.chars() {
            view.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn tab_cycles_through_fields_and_submit() {
        let mut view = FormView::new();
        view.focus_first();
        assert_eq!(view.focus, Some(Focus::Field(FormField::Name)));

        view.handle_key(key(KeyCode::Tab));
        assert_eq!(view.focus, Some(Focus::Field(FormField::Email)));
        view.handle_key(key(KeyCode::Tab));
        view.handle_key(key(KeyCode::Tab));
        assert_eq!(view.focus, Some(Focus::Submit));
        view.handle_key(key(KeyCode::Tab));
        assert_eq!(view.focus, Some(Focus::Field(FormField::Name)));
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut view = FormView::new();
        view.focus_first();
        type_text(&mut view, "Ada");
        view.handle_key(key(KeyCode::Backspace));
        assert_eq!(view.form.name, "Ad");
    }

    #[test]
    fn full_entry_submits_successfully() {
        let mut view = FormView::new();
        view.focus_first();
        type_text(&mut view, "Ada");
        view.handle_key(key(KeyCode::Enter));
        type_text(&mut view, "ada@example.com");
        view.handle_key(key(KeyCode::Enter));
        type_text(&mut view, "hello!");
        view.handle_key(key(KeyCode::Enter));

        let event = view.handle_key(key(KeyCode::Enter));
        assert_eq!(event, FormEvent::Submitted(SubmitOutcome::Accepted));
        assert_eq!(view.form.name, "");
    }

    #[test]
    fn submit_with_missing_message_reports_rejection() {
        let mut view = FormView::new();
        view.focus_first();
        type_text(&mut view, "Ada");
        view.handle_key(key(KeyCode::Tab));
        type_text(&mut view, "ada@example.com");

        view.focus = Some(Focus::Submit);
        let event = view.handle_key(key(KeyCode::Enter));
        assert_eq!(
            event,
            FormEvent::Submitted(SubmitOutcome::Rejected(RejectReason::MissingFields))
        );
        // Fields survive a rejection.
        assert_eq!(view.form.name, "Ada");
    }

    #[test]
    fn esc_releases_focus() {
        let mut view = FormView::new();
        view.focus_first();
        assert_eq!(view.handle_key(key(KeyCode::Esc)), FormEvent::Released);
        assert!(!view.is_focused());
    }

    #[test]
    fn clicks_map_rows_to_targets() {
        let mut view = FormView::new();
        assert!(view.hit(1));
        assert_eq!(view.focus, Some(Focus::Field(FormField::Email)));
        assert!(view.hit(4));
        assert_eq!(view.focus, Some(Focus::Submit));
        assert!(!view.hit(3));
    }
}
