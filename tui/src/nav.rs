//! Navigation Bar
//!
//! Inline section links on wide terminals. At or below the narrow-width
//! threshold the links collapse behind a menu toggle that opens a full-height
//! overlay; the overlay closes on activation, Esc, a click outside, or the
//! terminal growing wide again.

use crossterm::event::KeyCode;
use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::page::SectionId;
use crate::theme;

/// Overlay menu width in cells
pub const MENU_WIDTH: u16 = 22;

/// What a click on the bar landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavHit {
    /// The menu toggle (narrow terminals only)
    Toggle,
    /// A section link
    Link(SectionId),
}

/// Navigation state.
pub struct NavBar {
    menu_open: bool,
    /// Highlighted entry while the menu is open
    selected: usize,
    narrow_width: u16,
}

impl NavBar {
    pub fn new(narrow_width: u16) -> Self {
        Self {
            menu_open: false,
            selected: 0,
            narrow_width,
        }
    }

    /// Whether the given terminal width collapses the links into the menu.
    pub fn is_narrow(&self, width: u16) -> bool {
        width <= self.narrow_width
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn open_menu(&mut self) {
        debug!("opening nav menu");
        self.menu_open = true;
        self.selected = 0;
    }

    pub fn close_menu(&mut self) {
        if self.menu_open {
            debug!("closing nav menu");
            self.menu_open = false;
        }
    }

    /// Growing past the threshold force-closes the overlay.
    pub fn on_resize(&mut self, width: u16) {
        if !self.is_narrow(width) {
            self.close_menu();
        }
    }

    /// Keyboard navigation while the menu is open. Returns the activated
    /// section, if any; Esc and activation both close the menu.
    pub fn handle_menu_key(&mut self, code: KeyCode) -> Option<SectionId> {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self
                    .selected
                    .checked_sub(1)
                    .unwrap_or(SectionId::ALL.len() - 1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % SectionId::ALL.len();
                None
            }
            KeyCode::Enter => {
                self.close_menu();
                Some(SectionId::ALL[self.selected])
            }
            KeyCode::Esc => {
                self.close_menu();
                None
            }
            _ => None,
        }
    }

    /// Paint the one-row bar into its layer buffer.
    pub fn render_bar(&self, buf: &mut Buffer) {
        let width = buf.area.width;
        let brand_style = Style::default()
            .fg(theme::GOLD)
            .add_modifier(Modifier::BOLD);

        buf.set_string(1, 0, "✦ FOLIO", brand_style);

        if self.is_narrow(width) {
            let toggle = if self.menu_open { "× close" } else { "≡ menu" };
            let x = width.saturating_sub(toggle.width() as u16 + 1);
            buf.set_string(x, 0, toggle, Style::default().fg(theme::GOLD_LIGHT));
        } else {
            for (start, _end, section) in Self::link_spans(width) {
                buf.set_string(
                    start,
                    0,
                    section.label(),
                    Style::default().fg(theme::BODY),
                );
            }
        }
    }

    /// Paint the overlay menu into its layer buffer.
    pub fn render_menu(&self, buf: &mut Buffer) {
        let width = buf.area.width as usize;

        buf.set_string(
            1,
            0,
            &"─".repeat(width.saturating_sub(2)),
            Style::default().fg(theme::GOLD_DIM),
        );

        for (idx, section) in SectionId::ALL.iter().enumerate() {
            let y = Self::menu_entry_row(idx);
            if y >= buf.area.height {
                break;
            }
            let (marker, style) = if idx == self.selected {
                (
                    "▸ ",
                    Style::default()
                        .fg(theme::GOLD)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(theme::BODY))
            };
            buf.set_string(2, y, format!("{}{}", marker, section.label()), style);
        }
    }

    /// Resolve a click on the bar row.
    pub fn hit_bar(&self, x: u16, width: u16) -> Option<NavHit> {
        if self.is_narrow(width) {
            // Anywhere in the right-hand toggle zone counts.
            if x >= width.saturating_sub(9) {
                return Some(NavHit::Toggle);
            }
            return None;
        }
        Self::link_spans(width)
            .into_iter()
            .find(|&(start, end, _)| x >= start && x < end)
            .map(|(_, _, section)| NavHit::Link(section))
    }

    /// Resolve a click inside the overlay menu to a section.
    pub fn hit_menu(&self, y: u16) -> Option<SectionId> {
        SectionId::ALL
            .iter()
            .enumerate()
            .find(|(idx, _)| Self::menu_entry_row(*idx) == y)
            .map(|(_, section)| *section)
    }

    fn menu_entry_row(idx: usize) -> u16 {
        2 + idx as u16 * 2
    }

    /// Horizontal spans of the inline links, right-aligned on the bar.
    fn link_spans(width: u16) -> Vec<(u16, u16, SectionId)> {
        let total: u16 = SectionId::ALL
            .iter()
            .map(|s| s.label().len() as u16 + 2)
            .sum();
        let mut x = width.saturating_sub(total + 1);
        let mut spans = Vec::with_capacity(SectionId::ALL.len());
        for section in SectionId::ALL {
            let len = section.label().len() as u16;
            spans.push((x, x + len, section));
            x += len + 2;
        }
        spans
    }
}
