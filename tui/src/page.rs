//! Page Content
//!
//! The portfolio page as one tall strip of styled lines. The viewport shows
//! a window of the strip at the current scroll offset; section top rows are
//! the anchor targets, and the cards inside Services, Blog, and Experience
//! are reveal targets that render as dim placeholders until scrolled into
//! view.

use folio_core::{RevealId, RevealTracker, Typewriter};
use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};
use tracing::warn;

use crate::theme;

/// Rows kept above a section heading when jumping to its anchor
const ANCHOR_MARGIN: usize = 1;

/// Left padding of the content column
const CONTENT_X: u16 = 2;

/// The page's sections, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Services,
    Blog,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Blog,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Services => "Services",
            SectionId::Blog => "Blog",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }
}

/// Headline revealed by the typewriter on the home section
pub const HEADLINE: &str = "Crafting small, sturdy software with care.";

const NAME_BANNER: &str = "N O V A   Q U I N T A N A";
const TAGLINE: &str = "systems tinkerer · terminal romantic · cat person";

const ABOUT_TEXT: &str = "I spend my days building command-line tools and long-running \
services, and my evenings convincing them to survive contact with real users. I like \
software that does one thing, says what it did, and gets out of the way. This page is \
a small tour of the work; the cat in the corner is load-bearing.";

const CONTACT_INTRO: &str = "Want to build something together? Leave a note below.";

const FOOTER: &str = "made with a terminal and too much coffee";

struct CardContent {
    title: &'static str,
    body: &'static str,
    meta: Option<&'static str>,
}

const SERVICE_CARDS: [CardContent; 3] = [
    CardContent {
        title: "CLI Tooling",
        body: "Sharp, scriptable command-line tools with sensible defaults and honest error messages.",
        meta: None,
    },
    CardContent {
        title: "Performance Tuning",
        body: "Profiling, flame graphs, and the patience to find the one allocation that matters.",
        meta: None,
    },
    CardContent {
        title: "Code Review",
        body: "A second pair of eyes on correctness, naming, and the tests you meant to write.",
        meta: None,
    },
];

const BLOG_CARDS: [CardContent; 3] = [
    CardContent {
        title: "The case for boring state machines",
        body: "Every flag you hoist into an enum is a bug you no longer have to reproduce at 2am.",
        meta: Some("2026-05-14"),
    },
    CardContent {
        title: "Debouncing is a promise to the future",
        body: "Rate limiting as an API contract, and why the trailing edge is usually the right one.",
        meta: Some("2026-02-03"),
    },
    CardContent {
        title: "Terminals are a rendering target",
        body: "What building a compositor for character cells taught me about dirty rectangles.",
        meta: Some("2025-11-20"),
    },
];

const EXPERIENCE_ITEMS: [CardContent; 3] = [
    CardContent {
        title: "Senior Systems Engineer — Driftwood Labs",
        body: "Owned the ingestion pipeline and its tooling; made the pager quieter year over year.",
        meta: Some("2022 — now"),
    },
    CardContent {
        title: "Backend Engineer — Quiet Harbor",
        body: "Built internal services and the CLI the whole team ended up living in.",
        meta: Some("2019 — 2022"),
    },
    CardContent {
        title: "Open Source — various",
        body: "Maintainer hat on a handful of terminal libraries; mostly saying no politely.",
        meta: Some("always"),
    },
];

/// One row of the content strip.
struct StripLine {
    text: String,
    style: Style,
    /// Card index when this row belongs to a reveal target
    card: Option<usize>,
}

/// The page strip, scroll state, and reveal wiring.
pub struct Page {
    lines: Vec<StripLine>,
    section_tops: Vec<(SectionId, usize)>,
    reveal: RevealTracker,
    /// Reveal handle per card, in document order
    card_reveals: Vec<RevealId>,
    pub scroll_offset: usize,
    /// Strip row where the contact form block starts
    form_top: usize,
    /// Strip row carrying the typewriter headline
    headline_row: usize,
    width: u16,
}

impl Page {
    pub fn new(width: u16) -> Self {
        let mut page = Self {
            lines: Vec::new(),
            section_tops: Vec::new(),
            reveal: RevealTracker::new(),
            card_reveals: Vec::new(),
            scroll_offset: 0,
            form_top: 0,
            headline_row: 0,
            width,
        };
        page.relayout(width);
        page
    }

    /// Rebuild the strip for a new width. Reveal state survives relayout;
    /// only extents are refreshed.
    pub fn relayout(&mut self, width: u16) {
        self.width = width;
        self.lines.clear();
        self.section_tops.clear();

        let body_width = (width.saturating_sub(CONTENT_X * 2)).max(24) as usize;
        let mut card_extents: Vec<(usize, usize)> = Vec::new();

        self.blank();
        self.begin_section(SectionId::Home);
        self.push(
            NAME_BANNER,
            Style::default()
                .fg(theme::GOLD)
                .add_modifier(Modifier::BOLD),
            None,
        );
        self.blank();
        self.headline_row = self.lines.len();
        // Placeholder row; the typewriter paints over it at render time.
        self.push("", Style::default().fg(theme::GOLD_LIGHT), None);
        self.push(TAGLINE, Style::default().fg(theme::DIM_GRAY), None);
        self.blank();
        self.blank();

        self.begin_section(SectionId::About);
        self.heading("About", body_width);
        self.paragraph(ABOUT_TEXT, body_width, None);
        self.blank();

        self.begin_section(SectionId::Services);
        self.heading("Services", body_width);
        for content in &SERVICE_CARDS {
            card_extents.push(self.card(content, body_width, card_extents.len()));
        }

        self.begin_section(SectionId::Blog);
        self.heading("Blog", body_width);
        for content in &BLOG_CARDS {
            card_extents.push(self.card(content, body_width, card_extents.len()));
        }

        self.begin_section(SectionId::Experience);
        self.heading("Experience", body_width);
        for content in &EXPERIENCE_ITEMS {
            card_extents.push(self.card(content, body_width, card_extents.len()));
        }

        self.begin_section(SectionId::Contact);
        self.heading("Contact", body_width);
        self.paragraph(CONTACT_INTRO, body_width, None);
        self.blank();
        self.form_top = self.lines.len();
        for _ in 0..crate::form_view::FORM_HEIGHT {
            self.push("", Style::default(), None);
        }
        self.blank();
        self.push(FOOTER, Style::default().fg(theme::DIM_GRAY), None);
        self.blank();

        // First layout registers the targets; later layouts refresh extents.
        if self.card_reveals.is_empty() {
            self.card_reveals = card_extents
                .iter()
                .map(|&(top, height)| self.reveal.register(top, height))
                .collect();
        } else {
            for (id, &(top, height)) in self.card_reveals.iter().zip(&card_extents) {
                self.reveal.set_extent(*id, top, height);
            }
        }
    }

    fn begin_section(&mut self, id: SectionId) {
        self.section_tops.push((id, self.lines.len()));
    }

    fn blank(&mut self) {
        self.push("", Style::default(), None);
    }

    fn push(&mut self, text: impl Into<String>, style: Style, card: Option<usize>) {
        self.lines.push(StripLine {
            text: text.into(),
            style,
            card,
        });
    }

    fn heading(&mut self, title: &str, body_width: usize) {
        self.push(
            title,
            Style::default()
                .fg(theme::GOLD)
                .add_modifier(Modifier::BOLD),
            None,
        );
        self.push(
            "─".repeat(body_width.min(32)),
            Style::default().fg(theme::GOLD_DIM),
            None,
        );
    }

    fn paragraph(&mut self, text: &str, body_width: usize, card: Option<usize>) {
        for line in textwrap::wrap(text, body_width) {
            self.push(line.to_string(), Style::default().fg(theme::BODY), card);
        }
    }

    /// Push one card block; returns its (top, height) extent.
    fn card(&mut self, content: &CardContent, body_width: usize, idx: usize) -> (usize, usize) {
        let top = self.lines.len();
        let title = match content.meta {
            Some(meta) => format!("▪ {}  ({})", content.title, meta),
            None => format!("▪ {}", content.title),
        };
        self.push(
            title,
            Style::default()
                .fg(theme::GOLD_LIGHT)
                .add_modifier(Modifier::BOLD),
            Some(idx),
        );
        for line in textwrap::wrap(content.body, body_width.saturating_sub(2)) {
            self.push(
                format!("  {}", line),
                Style::default().fg(theme::BODY),
                Some(idx),
            );
        }
        let height = self.lines.len() - top;
        self.blank();
        (top, height)
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn max_scroll(&self, viewport_height: usize) -> usize {
        self.lines.len().saturating_sub(viewport_height)
    }

    /// Apply a scroll delta, clamped to the strip.
    pub fn scroll_by(&mut self, delta: i32, viewport_height: usize) {
        let max = self.max_scroll(viewport_height) as i64;
        let next = (self.scroll_offset as i64 + delta as i64).clamp(0, max);
        self.scroll_offset = next as usize;
    }

    /// Jump directly to an offset, clamped to the strip.
    pub fn scroll_to(&mut self, offset: usize, viewport_height: usize) {
        self.scroll_offset = offset.min(self.max_scroll(viewport_height));
    }

    /// Resolve a section anchor to its scroll offset (section top minus a
    /// small margin). `None` if the section is missing from the layout.
    pub fn anchor_offset(&self, id: SectionId) -> Option<usize> {
        let found = self
            .section_tops
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, top)| top.saturating_sub(ANCHOR_MARGIN));
        if found.is_none() {
            warn!(section = id.label(), "anchor target missing, ignoring");
        }
        found
    }

    /// Strip row where the contact form block begins.
    pub fn form_top(&self) -> usize {
        self.form_top
    }

    // ------------------------------------------------------------------
    // Reveal
    // ------------------------------------------------------------------

    /// Run a reveal pass against the current viewport window.
    pub fn observe_reveals(&mut self, viewport_height: usize) {
        self.reveal.observe(self.scroll_offset, viewport_height);
    }

    /// Mark everything revealed (reduced motion / degraded host).
    pub fn reveal_everything(&mut self) {
        self.reveal.reveal_all();
    }

    fn card_revealed(&self, idx: usize) -> bool {
        self.card_reveals
            .get(idx)
            .is_some_and(|id| self.reveal.is_revealed(*id))
    }

    // ------------------------------------------------------------------
    // Render
    // ------------------------------------------------------------------

    /// Paint the visible window of the strip into the content layer.
    pub fn render(&self, buf: &mut Buffer, typewriter: &Typewriter) {
        let area = buf.area;

        for y in 0..area.height {
            let row = self.scroll_offset + y as usize;
            let Some(line) = self.lines.get(row) else {
                break;
            };

            if row == self.headline_row {
                let text = if typewriter.is_typing() {
                    format!("{}▌", typewriter.visible())
                } else {
                    typewriter.visible().to_string()
                };
                buf.set_string(CONTENT_X, y, text, line.style);
                continue;
            }

            // Unrevealed cards show as dim placeholders until scrolled in.
            let style = match line.card {
                Some(idx) if !self.card_revealed(idx) => Style::default().fg(theme::HIDDEN),
                _ => line.style,
            };
            buf.set_string(CONTENT_X, y, &line.text, style);
        }

        // Scroll hints at the edges of the window.
        let hint = Style::default().fg(theme::DIM_GRAY);
        if self.scroll_offset > 0 {
            buf.set_string(area.width.saturating_sub(2), 0, "▲", hint);
        }
        if self.scroll_offset < self.max_scroll(area.height as usize) {
            buf.set_string(
                area.width.saturating_sub(2),
                area.height.saturating_sub(1),
                "▼",
                hint,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;

    fn page() -> Page {
        Page::new(100)
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn sections_appear_in_document_order() {
        let page = page();
        let tops: Vec<usize> = page.section_tops.iter().map(|(_, top)| *top).collect();
        let mut sorted = tops.clone();
        sorted.sort_unstable();
        assert_eq!(tops, sorted);
        assert_eq!(page.section_tops.len(), SectionId::ALL.len());
    }

    #[test]
    fn anchors_resolve_with_margin() {
        let page = page();
        let about_top = page
            .section_tops
            .iter()
            .find(|(id, _)| *id == SectionId::About)
            .map(|(_, top)| *top)
            .unwrap();
        assert_eq!(page.anchor_offset(SectionId::About), Some(about_top - 1));
    }

    #[test]
    fn scroll_clamps_to_strip() {
        let mut page = page();
        page.scroll_by(-10, 30);
        assert_eq!(page.scroll_offset, 0);

        page.scroll_by(10_000, 30);
        assert_eq!(page.scroll_offset, page.max_scroll(30));
    }

    #[test]
    fn cards_start_hidden_and_reveal_on_scroll() {
        let mut page = page();
        assert!(!page.card_revealed(0));

        // Scroll the services cards into a 30-row viewport and observe.
        let services = page.anchor_offset(SectionId::Services).unwrap();
        page.scroll_to(services, 30);
        page.observe_reveals(30);
        assert!(page.card_revealed(0));

        // Scrolling away never hides it again.
        page.scroll_to(0, 30);
        page.observe_reveals(30);
        assert!(page.card_revealed(0));
    }

    #[test]
    fn relayout_preserves_reveal_state() {
        let mut page = page();
        page.reveal_everything();
        page.relayout(60);
        assert!(page.card_revealed(0));
        assert!(page.card_revealed(page.card_reveals.len() - 1));
    }

    #[test]
    fn headline_row_renders_typed_prefix() {
        let page = page();
        let mut typewriter = Typewriter::with_timings(
            std::time::Duration::from_millis(100),
            std::time::Duration::ZERO,
        );
        typewriter.start(HEADLINE);
        typewriter.update(std::time::Duration::from_millis(400));

        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 30));
        page.render(&mut buf, &typewriter);

        let y = (page.headline_row - page.scroll_offset) as u16;
        let row = row_text(&buf, y);
        assert_eq!(row.trim(), "Craf▌");
    }

    #[test]
    fn form_block_is_inside_contact_section() {
        let page = page();
        let contact_top = page
            .section_tops
            .iter()
            .find(|(id, _)| *id == SectionId::Contact)
            .map(|(_, top)| *top)
            .unwrap();
        assert!(page.form_top() > contact_top);
        assert!(page.form_top() + crate::form_view::FORM_HEIGHT <= page.total_lines());
    }
}
