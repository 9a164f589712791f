//! Typewriter animation
//!
//! Reveals a fixed string progressively, timed by accumulated elapsed time
//! rather than tick count, so the character rate is independent of how often
//! the host actually ticks. The revealed position is a pure function of
//! elapsed time: ticks can be skipped or throttled without characters being
//! skipped or duplicated.

use std::time::Duration;

/// Default delay between revealed characters
const DEFAULT_CHAR_DELAY_MS: u64 = 180;

/// Default hold before the first character appears
const DEFAULT_INITIAL_DELAY_MS: u64 = 1000;

/// Typewriter run phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterPhase {
    /// No run started
    Idle,
    /// Run started, waiting out the initial hold
    InitialDelay,
    /// Revealing characters
    Typing,
    /// Full text shown; terminal state
    Complete,
}

/// Elapsed-time-driven progressive text reveal.
#[derive(Debug)]
pub struct Typewriter {
    /// Full target text, captured once at start
    text: String,
    /// Total characters in the target text
    char_count: usize,
    /// Characters currently revealed; only ever grows
    revealed: usize,
    /// Byte length of the revealed prefix
    revealed_bytes: usize,
    /// Time accumulated since the run started
    elapsed: Duration,
    char_delay: Duration,
    initial_delay: Duration,
    phase: TypewriterPhase,
}

impl Typewriter {
    /// Create a typewriter with the default timings.
    pub fn new() -> Self {
        Self::with_timings(
            Duration::from_millis(DEFAULT_CHAR_DELAY_MS),
            Duration::from_millis(DEFAULT_INITIAL_DELAY_MS),
        )
    }

    /// Create a typewriter with explicit per-character and initial delays.
    pub fn with_timings(char_delay: Duration, initial_delay: Duration) -> Self {
        Self {
            text: String::new(),
            char_count: 0,
            revealed: 0,
            revealed_bytes: 0,
            elapsed: Duration::ZERO,
            char_delay,
            initial_delay,
            phase: TypewriterPhase::Idle,
        }
    }

    /// Begin a run for the given text. Captures the text once, clears the
    /// visible prefix, and enters the initial hold. Empty text completes
    /// immediately.
    pub fn start(&mut self, text: &str) {
        self.text = text.to_string();
        self.char_count = self.text.chars().count();
        self.revealed = 0;
        self.revealed_bytes = 0;
        self.elapsed = Duration::ZERO;
        self.phase = if self.char_count == 0 {
            TypewriterPhase::Complete
        } else {
            TypewriterPhase::InitialDelay
        };
    }

    /// Advance time. Returns whether the visible prefix changed this tick.
    pub fn update(&mut self, delta: Duration) -> bool {
        match self.phase {
            TypewriterPhase::Idle | TypewriterPhase::Complete => return false,
            TypewriterPhase::InitialDelay | TypewriterPhase::Typing => {}
        }

        self.elapsed += delta;
        if self.elapsed < self.initial_delay {
            return false;
        }

        let typing_elapsed = self.elapsed - self.initial_delay;
        let target = if self.char_delay.is_zero() {
            self.char_count
        } else {
            let steps = typing_elapsed.as_millis() / self.char_delay.as_millis();
            (steps as usize).min(self.char_count)
        };

        let changed = target > self.revealed;
        if changed {
            self.revealed = target;
            self.revealed_bytes = self
                .text
                .char_indices()
                .nth(target)
                .map_or(self.text.len(), |(idx, _)| idx);
        }

        self.phase = if self.revealed >= self.char_count {
            TypewriterPhase::Complete
        } else {
            TypewriterPhase::Typing
        };

        changed
    }

    /// The revealed prefix of the target text.
    pub fn visible(&self) -> &str {
        &self.text[..self.revealed_bytes]
    }

    /// The full target text of the current run.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the typing cursor should be shown (run active, not complete).
    pub fn is_typing(&self) -> bool {
        matches!(
            self.phase,
            TypewriterPhase::InitialDelay | TypewriterPhase::Typing
        )
    }

    /// Whether the run has reached its terminal state.
    pub fn is_complete(&self) -> bool {
        self.phase == TypewriterPhase::Complete
    }

    /// Current run phase.
    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    /// Abandon the current run, clearing the visible text.
    pub fn cancel(&mut self) {
        self.text.clear();
        self.char_count = 0;
        self.revealed = 0;
        self.revealed_bytes = 0;
        self.elapsed = Duration::ZERO;
        self.phase = TypewriterPhase::Idle;
    }
}

impl Default for Typewriter {
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

    fn hello_writer() -> Typewriter {
        let mut tw = Typewriter::with_timings(ms(180), ms(1000));
        tw.start("HELLO");
        tw
    }

    #[test]
    fn nothing_revealed_during_initial_delay() {
        let mut tw = hello_writer();
        assert!(!tw.update(ms(999)));
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.phase(), TypewriterPhase::InitialDelay);
        assert!(tw.is_typing());
    }

    #[test]
    fn reveal_is_pure_function_of_elapsed_time() {
        // At 1000 + 2*180 = 1360ms exactly two characters are visible.
        let mut tw = hello_writer();
        tw.update(ms(1360));
        assert_eq!(tw.visible(), "HE");
        assert_eq!(tw.phase(), TypewriterPhase::Typing);
    }

    #[test]
    fn completes_at_full_text() {
        let mut tw = hello_writer();
        tw.update(ms(1000 + 5 * 180));
        assert_eq!(tw.visible(), "HELLO");
        assert_eq!(tw.phase(), TypewriterPhase::Complete);
        assert!(!tw.is_typing());

        // Terminal state: further ticks change nothing.
        assert!(!tw.update(ms(1000)));
        assert_eq!(tw.visible(), "HELLO");
    }

    #[test]
    fn throttled_ticks_never_skip_characters() {
        // One coarse tick lands mid-run; the reveal catches up in a single
        // step rather than dropping characters.
        let mut tw = hello_writer();
        tw.update(ms(1100));
        assert_eq!(tw.visible(), "");
        tw.update(ms(620)); // elapsed 1720 -> floor(720/180) = 4
        assert_eq!(tw.visible(), "HELL");
    }

    #[test]
    fn revealed_length_is_monotonic_for_any_schedule() {
        let schedules: &[&[u64]] = &[
            &[16; 130],
            &[1, 999, 1, 359, 700, 5000],
            &[2500],
            &[100, 100, 1500, 3],
        ];
        for schedule in schedules {
            let mut tw = hello_writer();
            let mut last = 0;
            for &step in *schedule {
                tw.update(ms(step));
                let revealed = tw.visible().chars().count();
                assert!(revealed >= last, "revealed length went backwards");
                last = revealed;
            }
        }
    }

    #[test]
    fn multibyte_text_reveals_on_char_boundaries() {
        let mut tw = Typewriter::with_timings(ms(100), ms(0));
        tw.start("héllo");
        tw.update(ms(200));
        assert_eq!(tw.visible(), "hé");
    }

    #[test]
    fn empty_text_completes_immediately() {
        let mut tw = Typewriter::new();
        tw.start("");
        assert!(tw.is_complete());
        assert!(!tw.update(ms(100)));
    }

    #[test]
    fn restart_resets_the_run() {
        let mut tw = hello_writer();
        tw.update(ms(5000));
        assert!(tw.is_complete());

        tw.start("BYE");
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.phase(), TypewriterPhase::InitialDelay);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut tw = hello_writer();
        tw.update(ms(1360));
        tw.cancel();
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.phase(), TypewriterPhase::Idle);
        assert!(!tw.update(ms(1000)));
    }
}
