//! Starfield Background
//!
//! Decorative twinkling stars filling the back layer, with an occasional
//! shooting star streaking diagonally across the top half. Purely visual;
//! nothing else reads this state.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::style::Style;

use crate::theme;

/// Shooting star flight time
const SHOOTING_LIFETIME: Duration = Duration::from_secs(2);

/// How far a shooting star travels, in cells
const SHOOTING_TRAVEL: (f32, f32) = (24.0, 12.0);

/// One twinkling star
#[derive(Debug)]
struct Star {
    x: u16,
    y: u16,
    /// Full twinkle cycle length
    period: Duration,
    /// Position within the cycle
    phase: Duration,
    /// Larger stars render brighter glyphs
    large: bool,
}

impl Star {
    fn glyph_and_style(&self) -> (&'static str, Style) {
        // First half of the cycle is the bright phase.
        let bright = self.phase < self.period / 2;
        match (bright, self.large) {
            (true, true) => ("✦", Style::default().fg(theme::STAR_BRIGHT)),
            (true, false) => ("*", Style::default().fg(theme::STAR_BRIGHT)),
            (false, true) => ("·", Style::default().fg(theme::STAR_DIM)),
            (false, false) => (".", Style::default().fg(theme::STAR_DIM)),
        }
    }
}

/// A shooting star in flight
#[derive(Debug)]
struct ShootingStar {
    start: (f32, f32),
    elapsed: Duration,
}

/// The animated background
pub struct Starfield {
    stars: Vec<Star>,
    shooting: Option<ShootingStar>,
    /// Time until the next shooting star spawns
    next_shooting: Duration,
    width: u16,
    height: u16,
    /// Freeze all motion (reduced-motion hosts still get static stars)
    animate: bool,
}

impl Starfield {
    pub fn new(width: u16, height: u16, animate: bool) -> Self {
        let mut field = Self {
            stars: Vec::new(),
            shooting: None,
            next_shooting: Self::shooting_interval(),
            width,
            height,
            animate,
        };
        field.reseed(width, height);
        field
    }

    /// Regenerate the star population for a new size. Called on startup and
    /// after the resize debouncer settles.
    pub fn reseed(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;

        let cells = width as usize * height as usize;
        let count = (cells / 60).clamp(20, 120);

        self.stars = (0..count)
            .map(|_| Star {
                x: rand::random::<u16>() % width.max(1),
                y: rand::random::<u16>() % height.max(1),
                period: Duration::from_millis(2000 + rand::random::<u64>() % 2000),
                phase: Duration::from_millis(rand::random::<u64>() % 3000),
                large: rand::random::<u8>() % 4 == 0,
            })
            .collect();
        self.shooting = None;
    }

    /// Advance twinkle phases and the shooting-star flight.
    pub fn update(&mut self, delta: Duration) {
        if !self.animate {
            return;
        }

        for star in &mut self.stars {
            star.phase += delta;
            while star.phase >= star.period {
                star.phase -= star.period;
            }
        }

        if let Some(shooting) = &mut self.shooting {
            shooting.elapsed += delta;
            if shooting.elapsed >= SHOOTING_LIFETIME {
                self.shooting = None;
            }
        } else {
            self.next_shooting = self.next_shooting.saturating_sub(delta);
            if self.next_shooting.is_zero() {
                self.spawn_shooting();
                self.next_shooting = Self::shooting_interval();
            }
        }
    }

    /// Paint the field into the background layer buffer.
    pub fn render(&self, buf: &mut Buffer) {
        let area = buf.area;
        for star in &self.stars {
            if star.x < area.width && star.y < area.height {
                let (glyph, style) = star.glyph_and_style();
                buf.set_string(star.x, star.y, glyph, style);
            }
        }

        if let Some(shooting) = &self.shooting {
            let t = shooting.elapsed.as_secs_f32() / SHOOTING_LIFETIME.as_secs_f32();
            let x = shooting.start.0 + SHOOTING_TRAVEL.0 * t;
            let y = shooting.start.1 + SHOOTING_TRAVEL.1 * t;
            let head = (x.round() as i32, y.round() as i32);
            let trail = ((x - 1.5).round() as i32, (y - 0.75).round() as i32);

            for (pos, glyph, color) in [
                (head, "✦", theme::GOLD_LIGHT),
                (trail, "·", theme::GOLD_DIM),
            ] {
                if pos.0 >= 0 && pos.1 >= 0 {
                    let (px, py) = (pos.0 as u16, pos.1 as u16);
                    if px < area.width && py < area.height {
                        buf.set_string(px, py, glyph, Style::default().fg(color));
                    }
                }
            }
        }
    }

    fn spawn_shooting(&mut self) {
        // Start somewhere in the top half so the streak stays on screen.
        let x = rand::random::<u16>() % self.width.max(1);
        let y = rand::random::<u16>() % (self.height / 2).max(1);
        self.shooting = Some(ShootingStar {
            start: (x as f32, y as f32),
            elapsed: Duration::ZERO,
        });
    }

    /// Random 3-8s gap between shooting stars
    fn shooting_interval() -> Duration {
        Duration::from_millis(3000 + rand::random::<u64>() % 5000)
    }
}
