//! Main Application
//!
//! The App owns the page, the decorative layers, and the event loop:
//! - Terminal events (keyboard, mouse, resize) route to the component that
//!   owns the clicked layer or the current focus.
//! - A frame tick advances every animation by the elapsed delta.
//! - Layers render independently and the compositor blits them z-ordered.
//!
//! No component talks to another directly; the App is the only wiring.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use folio_core::{
    Debouncer, FolioConfig, Notifier, ScrollAnimator, Severity, SubmitOutcome, Typewriter,
};

use crate::compositor::{Compositor, LayerId};
use crate::form_view::{FormEvent, FormView, FORM_HEIGHT};
use crate::mascot::{Mascot, BUBBLE_TEXT_WIDTH, SPRITE_HEIGHT, SPRITE_WIDTH};
use crate::nav::{NavBar, NavHit, MENU_WIDTH};
use crate::page::{Page, SectionId, HEADLINE};
use crate::starfield::Starfield;
use crate::toast::{self, TOAST_HEIGHT, TOAST_WIDTH};

/// Hold between the first presented frame and the headline starting to type
const HEADLINE_LEAD_IN: Duration = Duration::from_millis(200);

/// Wheel scroll step in rows
const WHEEL_SCROLL: i32 = 3;

/// Success message for the simulated submission
const SUBMIT_THANKS: &str = "Thank you for your message! I'll get back to you soon.";

/// Layer IDs for the UI stack
struct AppLayers {
    background: LayerId,
    content: LayerId,
    nav: LayerId,
    menu: LayerId,
    mascot: LayerId,
    bubble: LayerId,
    toast: LayerId,
}

/// Main application state
pub struct App {
    // === Core State ===
    /// Is the app still running?
    running: bool,
    config: FolioConfig,

    // === UI Components ===
    compositor: Compositor,
    layers: AppLayers,
    page: Page,
    nav: NavBar,
    starfield: Starfield,
    mascot: Mascot,
    form: FormView,

    // === Interaction Core ===
    notifier: Notifier,
    typewriter: Typewriter,
    scroll_anim: ScrollAnimator,
    resize_debounce: Debouncer<(u16, u16)>,

    // === Frame State ===
    /// Wheel/key scroll accumulated this frame, applied once per frame
    pending_scroll: i32,
    /// Counts down to the typewriter start once a frame has been presented
    headline_countdown: Option<Duration>,
    /// Whether at least one frame reached the terminal
    presented: bool,
    /// Last frame time (for animation deltas)
    last_frame: Instant,
    /// Terminal size
    size: (u16, u16),
}

impl App {
    /// Create a new App for the given terminal size.
    pub fn new(config: FolioConfig, size: (u16, u16)) -> Self {
        let area = Rect::new(0, 0, size.0, size.1);
        let mut compositor = Compositor::new(area);

        let background = compositor.create_layer(area, 0);
        let content = compositor.create_layer(Self::content_bounds(size), 10);
        let nav = compositor.create_layer(Rect::new(0, 0, size.0, 1), 20);
        let menu = compositor.create_layer(Self::menu_bounds(size), 30);
        let mascot_layer = compositor.create_layer(Self::mascot_bounds(size), 40);
        let bubble = compositor.create_layer(Self::bubble_bounds(size), 45);
        let toast_layer = compositor.create_layer(Self::toast_bounds(size), 50);

        compositor.set_visible(menu, false);
        compositor.set_visible(bubble, false);
        compositor.set_visible(toast_layer, false);

        let mut page = Page::new(size.0);
        if config.reduced_motion {
            page.reveal_everything();
        }

        Self {
            running: true,
            compositor,
            layers: AppLayers {
                background,
                content,
                nav,
                menu,
                mascot: mascot_layer,
                bubble,
                toast: toast_layer,
            },
            page,
            nav: NavBar::new(config.narrow_width),
            starfield: Starfield::new(size.0, size.1, !config.reduced_motion),
            mascot: Mascot::new(),
            form: FormView::new(),
            notifier: Notifier::with_display_duration(config.notification_display()),
            typewriter: Typewriter::with_timings(config.char_delay(), config.initial_delay()),
            scroll_anim: ScrollAnimator::new(),
            resize_debounce: Debouncer::new(config.resize_debounce()),
            pending_scroll: 0,
            headline_countdown: None,
            presented: false,
            last_frame: Instant::now(),
            size,
            config,
        }
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        // ~10 FPS floor for terminal-style animations
        let frame_duration = Duration::from_millis(100);
        let mut event_stream = EventStream::new();

        // Render the first frame immediately so the user sees the page.
        self.render(terminal)?;

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                // Terminal events first
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            // Only Press events (not Release or Repeat)
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key)
                            }
                            Event::Mouse(mouse) => self.handle_mouse(mouse),
                            Event::Resize(w, h) => self.handle_resize(w, h),
                            _ => {}
                        }
                    }
                }

                // Frame tick
                _ = tokio::time::sleep(Duration::from_millis(16)) => {}
            }

            self.update();
            self.render(terminal)?;

            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                tokio::time::sleep(frame_duration - elapsed).await;
            }
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Handle keyboard input
    fn handle_key(&mut self, key: event::KeyEvent) {
        // Ctrl-C quits no matter what has focus.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        // The overlay menu swallows keys while open.
        if self.nav.menu_open() {
            if let Some(section) = self.nav.handle_menu_key(key.code) {
                self.activate_section(section);
            }
            return;
        }

        // The form swallows keys while focused.
        if self.form.is_focused() {
            match self.form.handle_key(key) {
                FormEvent::Submitted(outcome) => self.report_submission(outcome),
                FormEvent::Released | FormEvent::Handled => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.mascot.is_dialog_open() {
                    self.mascot.dismiss();
                } else {
                    self.running = false;
                }
            }
            KeyCode::Char('q') => {
                self.running = false;
            }

            // Section anchors
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                self.activate_section(SectionId::ALL[idx]);
            }

            // The menu toggle, for keyboards
            KeyCode::Char('m') if self.nav.is_narrow(self.size.0) => {
                self.nav.open_menu();
            }

            // Poke the cat
            KeyCode::Char('p') | KeyCode::Char(' ') => {
                self.mascot.activate();
            }

            // Jump into the form
            KeyCode::Tab => {
                self.form.focus_first();
                self.activate_section(SectionId::Contact);
            }

            // Page scrolling
            KeyCode::Up => self.queue_scroll(-1),
            KeyCode::Down => self.queue_scroll(1),
            KeyCode::PageUp => self.queue_scroll(-(self.viewport_height() as i32 / 2)),
            KeyCode::PageDown => self.queue_scroll(self.viewport_height() as i32 / 2),
            KeyCode::Home => self.activate_section(SectionId::Home),
            KeyCode::End => {
                let bottom = self.page.max_scroll(self.viewport_height());
                if self.config.reduced_motion {
                    self.page.scroll_to(bottom, self.viewport_height());
                } else {
                    self.scroll_anim.start(self.page.scroll_offset, bottom);
                }
            }

            _ => {}
        }
    }

    /// Handle mouse input
    fn handle_mouse(&mut self, mouse: event::MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.queue_scroll(-WHEEL_SCROLL);
            }
            MouseEventKind::ScrollDown => {
                self.queue_scroll(WHEEL_SCROLL);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) {
        let hit = self.compositor.layer_at(x, y);

        // A click anywhere but the cat closes its dialog.
        if self.mascot.is_dialog_open() && hit != Some(self.layers.mascot) {
            self.mascot.dismiss();
        }

        // A click outside the overlay menu (and its toggle) closes it.
        if self.nav.menu_open()
            && hit != Some(self.layers.menu)
            && hit != Some(self.layers.nav)
        {
            self.nav.close_menu();
        }

        let Some(layer) = hit else {
            return;
        };

        if layer == self.layers.mascot {
            self.mascot.activate();
        } else if layer == self.layers.nav {
            match self.nav.hit_bar(x, self.size.0) {
                Some(NavHit::Toggle) => {
                    if self.nav.menu_open() {
                        self.nav.close_menu();
                    } else {
                        self.nav.open_menu();
                    }
                }
                Some(NavHit::Link(section)) => self.activate_section(section),
                None => {}
            }
        } else if layer == self.layers.menu {
            if let Some(bounds) = self.compositor.layer_bounds(self.layers.menu) {
                if let Some(section) = self.nav.hit_menu(y - bounds.y) {
                    self.nav.close_menu();
                    self.activate_section(section);
                }
            }
        } else if layer == self.layers.content {
            if let Some(bounds) = self.compositor.layer_bounds(self.layers.content) {
                let row = self.page.scroll_offset + (y - bounds.y) as usize;
                let form_top = self.page.form_top();
                if row >= form_top && row < form_top + FORM_HEIGHT {
                    if let Some(outcome) = self.form.click(row - form_top) {
                        self.report_submission(outcome);
                    }
                } else {
                    self.form.release();
                }
            }
        }
    }

    /// Handle terminal resize
    fn handle_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        let area = Rect::new(0, 0, width, height);

        self.compositor.resize(area);
        self.compositor
            .resize_layer(self.layers.background, width, height);

        let content = Self::content_bounds(self.size);
        self.compositor
            .move_layer(self.layers.content, content.x, content.y);
        self.compositor
            .resize_layer(self.layers.content, content.width, content.height);

        self.compositor.resize_layer(self.layers.nav, width, 1);

        for (id, bounds) in [
            (self.layers.menu, Self::menu_bounds(self.size)),
            (self.layers.mascot, Self::mascot_bounds(self.size)),
            (self.layers.bubble, Self::bubble_bounds(self.size)),
            (self.layers.toast, Self::toast_bounds(self.size)),
        ] {
            self.compositor.move_layer(id, bounds.x, bounds.y);
            self.compositor.resize_layer(id, bounds.width, bounds.height);
        }

        self.page.relayout(width);
        self.page.scroll_by(0, self.viewport_height());
        self.nav.on_resize(width);

        // Expensive size-dependent work waits for the resize to settle.
        self.resize_debounce.submit((width, height));
    }

    // ------------------------------------------------------------------
    // Per-frame update
    // ------------------------------------------------------------------

    /// Update animations and state
    fn update(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;

        // The headline starts typing shortly after the first real frame.
        if let Some(countdown) = self.headline_countdown.take() {
            let remaining = countdown.saturating_sub(delta);
            if remaining.is_zero() {
                self.typewriter.start(HEADLINE);
            } else {
                self.headline_countdown = Some(remaining);
            }
        }

        self.typewriter.update(delta);
        self.notifier.update(delta);
        self.mascot.update(delta);
        self.starfield.update(delta);

        if let Some((width, height)) = self.resize_debounce.update(delta) {
            tracing::debug!(width, height, "resize settled, reseeding starfield");
            self.starfield.reseed(width, height);
        }

        // Smooth scroll animation owns the offset while active.
        if let Some(offset) = self.scroll_anim.update(delta) {
            self.page.scroll_to(offset, self.viewport_height());
        }

        // Wheel/key scrolling, coalesced to one mutation per frame.
        if self.pending_scroll != 0 {
            self.page.scroll_by(self.pending_scroll, self.viewport_height());
            self.pending_scroll = 0;
        }

        self.page.observe_reveals(self.viewport_height());

        // Sync layer visibility with component state.
        self.compositor
            .set_visible(self.layers.menu, self.nav.menu_open());
        self.compositor
            .set_visible(self.layers.bubble, self.mascot.is_dialog_open());
        self.compositor
            .set_visible(self.layers.toast, self.notifier.current().is_some());
    }

    fn queue_scroll(&mut self, delta: i32) {
        self.scroll_anim.cancel();
        self.pending_scroll += delta;
    }

    /// Anchor activation: smooth-scroll to a section, or jump when the host
    /// prefers no motion.
    fn activate_section(&mut self, section: SectionId) {
        self.nav.close_menu();
        let Some(target) = self.page.anchor_offset(section) else {
            return;
        };
        let target = target.min(self.page.max_scroll(self.viewport_height()));
        if self.config.reduced_motion {
            self.page.scroll_to(target, self.viewport_height());
        } else {
            self.scroll_anim.start(self.page.scroll_offset, target);
        }
    }

    fn report_submission(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Accepted => self.notifier.notify(SUBMIT_THANKS, Severity::Success),
            SubmitOutcome::Rejected(reason) => {
                self.notifier.notify(reason.message(), Severity::Error)
            }
        }
    }

    // ------------------------------------------------------------------
    // Render
    // ------------------------------------------------------------------

    /// Render the UI
    fn render(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        self.render_layers();

        terminal.draw(|frame| {
            let output = self.compositor.composite();
            let area = frame.area();
            let buf = frame.buffer_mut();

            for y in 0..area.height.min(output.area.height) {
                for x in 0..area.width.min(output.area.width) {
                    let idx = output.index_of(x, y);
                    if idx < output.content.len() {
                        buf[(x, y)] = output.content[idx].clone();
                    }
                }
            }
        })?;

        if !self.presented {
            self.presented = true;
            self.headline_countdown = Some(HEADLINE_LEAD_IN);
        }

        Ok(())
    }

    /// Paint every layer buffer from its owning component.
    fn render_layers(&mut self) {
        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.background) {
            buf.reset();
            self.starfield.render(buf);
        }

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.content) {
            buf.reset();
            self.page.render(buf, &self.typewriter);
            self.form
                .render(buf, self.page.form_top(), self.page.scroll_offset);
        }

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.nav) {
            buf.reset();
            self.nav.render_bar(buf);
        }

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.menu) {
            buf.reset();
            self.nav.render_menu(buf);
        }

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.mascot) {
            buf.reset();
            self.mascot.render_sprite(buf);
        }

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.bubble) {
            buf.reset();
            self.mascot.render_bubble(buf);
        }

        if let Some(buf) = self.compositor.layer_buffer_mut(self.layers.toast) {
            buf.reset();
            toast::render(&self.notifier, buf);
        }
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    fn viewport_height(&self) -> usize {
        self.size.1.saturating_sub(1) as usize
    }

    fn content_bounds(size: (u16, u16)) -> Rect {
        Rect::new(0, 1, size.0, size.1.saturating_sub(1))
    }

    fn menu_bounds(size: (u16, u16)) -> Rect {
        Rect::new(
            size.0.saturating_sub(MENU_WIDTH),
            1,
            MENU_WIDTH.min(size.0),
            size.1.saturating_sub(1),
        )
    }

    fn mascot_bounds(size: (u16, u16)) -> Rect {
        Rect::new(
            size.0.saturating_sub(SPRITE_WIDTH + 2),
            size.1.saturating_sub(SPRITE_HEIGHT + 1),
            SPRITE_WIDTH,
            SPRITE_HEIGHT,
        )
    }

    fn bubble_bounds(size: (u16, u16)) -> Rect {
        let width = BUBBLE_TEXT_WIDTH + 2;
        let height = Mascot::bubble_height();
        Rect::new(
            size.0.saturating_sub(width + 1),
            size.1
                .saturating_sub(SPRITE_HEIGHT + 1)
                .saturating_sub(height + 1),
            width,
            height,
        )
    }

    fn toast_bounds(size: (u16, u16)) -> Rect {
        Rect::new(
            size.0.saturating_sub(TOAST_WIDTH + 1),
            1,
            TOAST_WIDTH.min(size.0),
            TOAST_HEIGHT,
        )
    }
}
