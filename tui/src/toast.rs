//! Toast Rendering
//!
//! Paints the Notifier's current notification into the toast layer with a
//! slide-in/slide-out offset derived from the lifecycle phase progress.

use folio_core::{ease_in_out_quad, Notifier, Severity};
use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};

use crate::theme;

/// Toast layer width in cells
pub const TOAST_WIDTH: u16 = 36;

/// Toast layer height in cells
pub const TOAST_HEIGHT: u16 = 4;

/// Opaque blank for the box body. The compositor treats plain spaces as
/// transparent holes, so the box is padded with no-break spaces instead.
const OPAQUE_BLANK: char = '\u{00a0}';

/// Paint the active notification, if any, into the toast layer buffer.
pub fn render(notifier: &Notifier, buf: &mut Buffer) {
    let Some((message, severity, _phase)) = notifier.current() else {
        return;
    };

    let area = buf.area;
    let (fg, bg) = match severity {
        Severity::Success => (theme::SUCCESS_FG, theme::SUCCESS_BG),
        Severity::Error => (theme::ERROR_FG, theme::ERROR_BG),
    };
    let style = Style::default().fg(fg).bg(bg);
    let text_style = style.add_modifier(Modifier::BOLD);

    // Slide from the right edge: progress 0.0 is fully off-layer.
    let progress = ease_in_out_quad(notifier.slide_progress());
    let offset = ((1.0 - progress) * area.width as f32).round() as u16;
    let box_width = area.width.saturating_sub(offset) as usize;
    if box_width < 4 {
        return;
    }

    let text_width = area.width.saturating_sub(4) as usize;
    let lines = textwrap::wrap(message, text_width);
    let blank: String = std::iter::repeat(OPAQUE_BLANK).take(box_width).collect();

    for y in 0..area.height {
        buf.set_string(offset, y, &blank, style);
    }
    for (i, line) in lines.iter().take(area.height.saturating_sub(2) as usize).enumerate() {
        let padded: String = line
            .chars()
            .map(|c| if c == ' ' { OPAQUE_BLANK } else { c })
            .chain(std::iter::repeat(OPAQUE_BLANK))
            .take(box_width.saturating_sub(2))
            .collect();
        buf.set_string(offset + 2, 1 + i as u16, &padded, text_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use std::time::Duration;

    fn buffer() -> Buffer {
        Buffer::empty(Rect::new(0, 0, TOAST_WIDTH, TOAST_HEIGHT))
    }

    fn cell_row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn empty_notifier_paints_nothing() {
        let notifier = Notifier::new();
        let mut buf = buffer();
        render(&notifier, &mut buf);
        assert!(cell_row(&buf, 1).trim().is_empty());
    }

    #[test]
    fn shown_toast_contains_the_message() {
        let mut notifier = Notifier::new();
        notifier.notify("Saved!", Severity::Success);
        notifier.update(Duration::from_millis(300));

        let mut buf = buffer();
        render(&notifier, &mut buf);
        let row = cell_row(&buf, 1).replace('\u{00a0}', " ");
        assert!(row.contains("Saved!"));
    }

    #[test]
    fn entering_toast_is_offset_to_the_right() {
        let mut notifier = Notifier::new();
        notifier.notify("Hello", Severity::Error);
        notifier.update(Duration::from_millis(30));

        let mut buf = buffer();
        render(&notifier, &mut buf);
        // Early in the slide the left half of the layer is still empty.
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
