//! Transient notification lifecycle
//!
//! A single-slot toast: at most one notification exists at a time, and a new
//! `notify` replaces the current one immediately. The slot runs through
//! Entering -> Shown -> Leaving and is then removed. Because the dismissal
//! clock lives inside the slot, replacing the notification replaces the clock
//! and no stale auto-dismiss can fire for a superseded instance.

use std::time::Duration;

use tracing::debug;

/// How long the slide-in transition runs
const ENTER_DURATION_MS: u64 = 300;

/// How long a notification stays fully shown before dismissal starts
const DEFAULT_DISPLAY_DURATION_MS: u64 = 5000;

/// How long the slide-out transition runs before removal
const EXIT_DURATION_MS: u64 = 300;

/// Notification severity, selecting one of two fixed visual treatments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Positive outcome
    Success,
    /// Failure the user should act on
    Error,
}

/// Lifecycle phase of the active notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Sliding into view
    Entering,
    /// Fully visible
    Shown,
    /// Sliding out of view prior to removal
    Leaving,
}

/// The active notification slot.
#[derive(Clone, Debug)]
struct Slot {
    message: String,
    severity: Severity,
    phase: ToastPhase,
    /// Time spent in the current phase
    phase_elapsed: Duration,
}

/// Single-slot notification manager with auto-dismiss.
#[derive(Debug)]
pub struct Notifier {
    slot: Option<Slot>,
    enter_duration: Duration,
    display_duration: Duration,
    exit_duration: Duration,
}

impl Notifier {
    /// Create a notifier with the default display duration.
    pub fn new() -> Self {
        Self::with_display_duration(Duration::from_millis(DEFAULT_DISPLAY_DURATION_MS))
    }

    /// Create a notifier with a custom fully-shown duration.
    pub fn with_display_duration(display_duration: Duration) -> Self {
        Self {
            slot: None,
            enter_duration: Duration::from_millis(ENTER_DURATION_MS),
            display_duration,
            exit_duration: Duration::from_millis(EXIT_DURATION_MS),
        }
    }

    /// Show a notification, replacing any current one immediately.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        debug!(%message, ?severity, "notification shown");
        self.slot = Some(Slot {
            message,
            severity,
            phase: ToastPhase::Entering,
            phase_elapsed: Duration::ZERO,
        });
    }

    /// Advance the lifecycle clock. Phases chain without losing leftover
    /// time, so a large tick lands in the right phase.
    pub fn update(&mut self, delta: Duration) {
        let Some(slot) = self.slot.as_mut() else {
            return;
        };

        slot.phase_elapsed += delta;
        loop {
            let phase_duration = match slot.phase {
                ToastPhase::Entering => self.enter_duration,
                ToastPhase::Shown => self.display_duration,
                ToastPhase::Leaving => self.exit_duration,
            };
            if slot.phase_elapsed < phase_duration {
                break;
            }
            slot.phase_elapsed -= phase_duration;
            match slot.phase {
                ToastPhase::Entering => slot.phase = ToastPhase::Shown,
                ToastPhase::Shown => slot.phase = ToastPhase::Leaving,
                ToastPhase::Leaving => {
                    self.slot = None;
                    return;
                }
            }
        }
    }

    /// The active notification, if any: message, severity, phase.
    pub fn current(&self) -> Option<(&str, Severity, ToastPhase)> {
        self.slot
            .as_ref()
            .map(|s| (s.message.as_str(), s.severity, s.phase))
    }

    /// Slide progress for the renderer: 0.0 is fully off-screen, 1.0 fully
    /// in place. Entering ramps up, Shown holds 1.0, Leaving ramps down.
    pub fn slide_progress(&self) -> f32 {
        let Some(slot) = self.slot.as_ref() else {
            return 0.0;
        };
        let ratio = |elapsed: Duration, total: Duration| {
            if total.is_zero() {
                1.0
            } else {
                (elapsed.as_secs_f32() / total.as_secs_f32()).min(1.0)
            }
        };
        match slot.phase {
            ToastPhase::Entering => ratio(slot.phase_elapsed, self.enter_duration),
            ToastPhase::Shown => 1.0,
            ToastPhase::Leaving => 1.0 - ratio(slot.phase_elapsed, self.exit_duration),
        }
    }

    /// Start the dismissal transition now, skipping any remaining shown time.
    pub fn dismiss(&mut self) {
        if let Some(slot) = self.slot.as_mut() {
            if slot.phase != ToastPhase::Leaving {
                slot.phase = ToastPhase::Leaving;
                slot.phase_elapsed = Duration::ZERO;
            }
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn lifecycle_runs_to_removal() {
        let mut notifier = Notifier::with_display_duration(ms(1000));
        notifier.notify("saved", Severity::Success);

        assert_eq!(
            notifier.current(),
            Some(("saved", Severity::Success, ToastPhase::Entering))
        );

        notifier.update(ms(300));
        assert_eq!(
            notifier.current().map(|(_, _, p)| p),
            Some(ToastPhase::Shown)
        );

        notifier.update(ms(1000));
        assert_eq!(
            notifier.current().map(|(_, _, p)| p),
            Some(ToastPhase::Leaving)
        );

        notifier.update(ms(300));
        assert_eq!(notifier.current(), None);
    }

    #[test]
    fn rapid_notify_keeps_exactly_one() {
        let mut notifier = Notifier::new();
        notifier.notify("first", Severity::Success);
        notifier.update(ms(40));
        notifier.notify("second", Severity::Error);

        // The second call wins and starts a fresh lifecycle.
        let (message, severity, phase) = notifier.current().unwrap();
        assert_eq!(message, "second");
        assert_eq!(severity, Severity::Error);
        assert_eq!(phase, ToastPhase::Entering);
    }

    #[test]
    fn superseded_dismissal_does_not_fire_early() {
        let mut notifier = Notifier::with_display_duration(ms(500));
        notifier.notify("first", Severity::Success);
        // Run the first instance close to its dismissal.
        notifier.update(ms(700));

        notifier.notify("second", Severity::Success);
        // The first instance's clock is gone with its slot; the second is
        // unaffected by it.
        notifier.update(ms(400));
        assert_eq!(
            notifier.current().map(|(m, _, p)| (m.to_string(), p)),
            Some(("second".to_string(), ToastPhase::Shown))
        );
    }

    #[test]
    fn large_tick_chains_phases() {
        let mut notifier = Notifier::with_display_duration(ms(1000));
        notifier.notify("gone", Severity::Error);

        // One tick covering the entire lifecycle removes the slot.
        notifier.update(ms(300 + 1000 + 300));
        assert_eq!(notifier.current(), None);
    }

    #[test]
    fn slide_progress_tracks_phases() {
        let mut notifier = Notifier::with_display_duration(ms(1000));
        assert_eq!(notifier.slide_progress(), 0.0);

        notifier.notify("hi", Severity::Success);
        notifier.update(ms(150));
        let entering = notifier.slide_progress();
        assert!(entering > 0.4 && entering < 0.6);

        notifier.update(ms(150));
        assert_eq!(notifier.slide_progress(), 1.0);

        notifier.dismiss();
        notifier.update(ms(150));
        let leaving = notifier.slide_progress();
        assert!(leaving > 0.4 && leaving < 0.6);
    }
}
