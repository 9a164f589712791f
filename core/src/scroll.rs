//! Eased scroll animation
//!
//! Animates a scroll offset between two positions over a fixed duration with
//! an ease-in-out quadratic curve. The interpolated position is a function of
//! elapsed time, and the animation lands exactly on the target when the
//! duration is reached.

use std::time::Duration;

/// Fixed animation duration
const SCROLL_DURATION_MS: u64 = 800;

/// Ease-in-out quadratic curve over `t` in 0.0..=1.0.
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[derive(Debug)]
struct Animation {
    from: f32,
    to: f32,
    elapsed: Duration,
}

/// Fixed-duration eased scroll animator.
#[derive(Debug)]
pub struct ScrollAnimator {
    animation: Option<Animation>,
    duration: Duration,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self {
            animation: None,
            duration: Duration::from_millis(SCROLL_DURATION_MS),
        }
    }

    /// Begin animating from one offset to another. Supersedes any running
    /// animation.
    pub fn start(&mut self, from: usize, to: usize) {
        self.animation = Some(Animation {
            from: from as f32,
            to: to as f32,
            elapsed: Duration::ZERO,
        });
    }

    /// Advance time and return the offset for this tick, or `None` when no
    /// animation is running. The final tick yields the exact target and
    /// clears the animation.
    pub fn update(&mut self, delta: Duration) -> Option<usize> {
        let animation = self.animation.as_mut()?;
        animation.elapsed += delta;

        if animation.elapsed >= self.duration {
            let target = animation.to as usize;
            self.animation = None;
            return Some(target);
        }

        let t = animation.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = ease_in_out_quad(t);
        let position = animation.from + (animation.to - animation.from) * eased;
        Some(position.round() as usize)
    }

    pub fn is_active(&self) -> bool {
        self.animation.is_some()
    }

    /// Stop without jumping to the target.
    pub fn cancel(&mut self) {
        self.animation = None;
    }
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new()
    }
}
