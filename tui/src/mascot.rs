//! Mascot
//!
//! The resident cat. It sits in a corner, occasionally flicks an ear, spins
//! when poked, and explains itself in a speech bubble with a typed-out
//! message. Clicking the bubble, or anywhere else on the page, dismisses it.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::style::Style;
use folio_core::Typewriter;

use crate::theme;

/// What the cat has to say for itself
const DIALOG: &str = "dont mind me.. im just an emotional support spinning cat.";

/// Per-character delay for the bubble text
const DIALOG_CHAR_DELAY: Duration = Duration::from_millis(50);

/// Short hold before the bubble starts typing
const DIALOG_LEAD_IN: Duration = Duration::from_millis(100);

/// How long the spin burst runs after activation
const SPIN_DURATION: Duration = Duration::from_millis(800);

/// Frame time for the idle tail-flick
const IDLE_FRAME: Duration = Duration::from_millis(600);

/// Frame time while spinning
const SPIN_FRAME: Duration = Duration::from_millis(100);

/// Sprite size in cells
pub const SPRITE_WIDTH: u16 = 7;
pub const SPRITE_HEIGHT: u16 = 3;

/// Maximum text width inside the bubble
pub const BUBBLE_TEXT_WIDTH: u16 = 26;

const IDLE_FRAMES: [[&str; 3]; 2] = [
    [" /\\_/\\ ", "( o.o )", " > ^ < "],
    [" /\\_/\\ ", "( o.o )", " > ^ <~"],
];

const SPIN_FRAMES: [[&str; 3]; 4] = [
    [" /\\_/\\ ", "( o.o )", " > ^ < "],
    [" /|_|\\ ", "( o.o-)", "  \\^/  "],
    [" \\/.\\/ ", "(-o.o )", " < ^ > "],
    [" /|_|\\ ", "(-o.o )", "  /^\\  "],
];

/// The animated mascot and its dialog state.
pub struct Mascot {
    /// Current frame within the active animation
    frame: usize,
    /// Time accumulated on the current frame
    frame_time: Duration,
    /// Remaining spin-burst time; zero means idle
    spin_left: Duration,
    /// Typed dialog; `Some` while the bubble is open
    bubble: Option<Typewriter>,
}

impl Mascot {
    pub fn new() -> Self {
        Self {
            frame: 0,
            frame_time: Duration::ZERO,
            spin_left: Duration::ZERO,
            bubble: None,
        }
    }

    /// Poke the cat: start the spin burst and the typed dialog. A poke while
    /// the dialog is still typing is a no-op.
    pub fn activate(&mut self) {
        if self.bubble.as_ref().is_some_and(|b| b.is_typing()) {
            return;
        }

        let mut typewriter = Typewriter::with_timings(DIALOG_CHAR_DELAY, DIALOG_LEAD_IN);
        typewriter.start(DIALOG);
        self.bubble = Some(typewriter);

        self.spin_left = SPIN_DURATION;
        self.frame = 0;
        self.frame_time = Duration::ZERO;
    }

    /// Close the bubble, cancelling any in-progress typing.
    pub fn dismiss(&mut self) {
        if let Some(mut bubble) = self.bubble.take() {
            bubble.cancel();
        }
    }

    pub fn is_dialog_open(&self) -> bool {
        self.bubble.is_some()
    }

    /// Advance the sprite animation and the dialog typewriter.
    pub fn update(&mut self, delta: Duration) {
        self.spin_left = self.spin_left.saturating_sub(delta);

        let (frame_duration, frame_count) = if self.spin_left.is_zero() {
            (IDLE_FRAME, IDLE_FRAMES.len())
        } else {
            (SPIN_FRAME, SPIN_FRAMES.len())
        };

        self.frame_time += delta;
        while self.frame_time >= frame_duration {
            self.frame_time -= frame_duration;
            self.frame = (self.frame + 1) % frame_count;
        }

        if let Some(bubble) = &mut self.bubble {
            bubble.update(delta);
        }
    }

    /// Paint the sprite into its layer buffer.
    pub fn render_sprite(&self, buf: &mut Buffer) {
        let rows = if self.spin_left.is_zero() {
            &IDLE_FRAMES[self.frame % IDLE_FRAMES.len()][..]
        } else {
            &SPIN_FRAMES[self.frame % SPIN_FRAMES.len()][..]
        };

        let style = Style::default().fg(theme::CAT);
        for (i, row) in rows.iter().enumerate() {
            if (i as u16) < buf.area.height {
                buf.set_string(0, i as u16, row, style);
            }
        }
    }

    /// Paint the speech bubble into its layer buffer. Shows the typed prefix
    /// plus a cursor while typing.
    pub fn render_bubble(&self, buf: &mut Buffer) {
        let Some(bubble) = &self.bubble else {
            return;
        };

        let width = buf.area.width.saturating_sub(2) as usize;
        if width == 0 {
            return;
        }

        let text = if bubble.is_typing() {
            format!("{}_", bubble.visible())
        } else {
            bubble.visible().to_string()
        };

        let style = Style::default().fg(theme::BUBBLE);
        for (i, line) in textwrap::wrap(&text, width).iter().enumerate() {
            let y = i as u16;
            if y >= buf.area.height {
                break;
            }
            buf.set_string(1, y, line, style);
        }
    }

    /// Rows the bubble needs for the full dialog at the standard width.
    pub fn bubble_height() -> u16 {
        textwrap::wrap(DIALOG, BUBBLE_TEXT_WIDTH as usize).len() as u16
    }
}

impl Default for Mascot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn activation_opens_dialog_and_spins() {
        let mut mascot = Mascot::new();
        assert!(!mascot.is_dialog_open());

        mascot.activate();
        assert!(mascot.is_dialog_open());
        assert!(!mascot.spin_left.is_zero());

        mascot.update(ms(900));
        assert!(mascot.spin_left.is_zero());
        // Dialog keeps typing after the spin burst ends.
        assert!(mascot.is_dialog_open());
    }

    #[test]
    fn poke_while_typing_is_a_noop() {
        let mut mascot = Mascot::new();
        mascot.activate();
        mascot.update(ms(300));
        let before = mascot.bubble.as_ref().unwrap().visible().len();

        mascot.activate();
        let after = mascot.bubble.as_ref().unwrap().visible().len();
        assert_eq!(before, after);
    }

    #[test]
    fn poke_after_completion_restarts_dialog() {
        let mut mascot = Mascot::new();
        mascot.activate();
        // Lead-in plus every character, generously.
        mascot.update(ms(10_000));
        assert!(mascot.bubble.as_ref().unwrap().is_complete());

        mascot.activate();
        assert_eq!(mascot.bubble.as_ref().unwrap().visible(), "");
    }

    #[test]
    fn dismiss_cancels_typing() {
        let mut mascot = Mascot::new();
        mascot.activate();
        mascot.update(ms(500));
        mascot.dismiss();
        assert!(!mascot.is_dialog_open());
    }

    #[test]
    fn bubble_renders_typed_prefix() {
        let mut mascot = Mascot::new();
        mascot.activate();
        // 100ms lead-in + 4 chars
        mascot.update(ms(100 + 4 * 50));

        let mut buf = Buffer::empty(Rect::new(0, 0, BUBBLE_TEXT_WIDTH + 2, 4));
        mascot.render_bubble(&mut buf);
        let row: String = (0..8).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(row.trim(), "dont_");
    }
}
