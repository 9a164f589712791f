//! Scroll-reveal tracking
//!
//! Marks registered row ranges "revealed" the first time enough of them
//! enters the viewport. Revealing is one-way and one-time: a revealed target
//! is skipped on later passes and never reverts to hidden.

/// Fraction of a target that must be inside the trigger window to reveal it
const REVEAL_THRESHOLD: f32 = 0.1;

/// Rows trimmed from the bottom of the viewport when intersecting, so
/// targets reveal slightly before they reach the very edge
const BOTTOM_INSET_ROWS: usize = 3;

/// Handle for a registered reveal target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealId(usize);

#[derive(Debug)]
struct Target {
    /// First row of the target in content coordinates
    top: usize,
    /// Height in rows
    height: usize,
    revealed: bool,
}

/// Tracks which targets have been revealed by scrolling.
#[derive(Debug, Default)]
pub struct RevealTracker {
    targets: Vec<Target>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target by its row extent in content coordinates.
    pub fn register(&mut self, top: usize, height: usize) -> RevealId {
        self.targets.push(Target {
            top,
            height,
            revealed: false,
        });
        RevealId(self.targets.len() - 1)
    }

    /// Update a target's extent after a relayout. Revealed state is kept.
    pub fn set_extent(&mut self, id: RevealId, top: usize, height: usize) {
        if let Some(target) = self.targets.get_mut(id.0) {
            target.top = top;
            target.height = height;
        }
    }

    /// Intersect all unrevealed targets with the viewport window and mark
    /// those whose visible fraction exceeds the threshold. Returns the ids
    /// newly revealed by this pass.
    pub fn observe(&mut self, viewport_top: usize, viewport_height: usize) -> Vec<RevealId> {
        // Degraded host: no usable viewport means no intersection data.
        if viewport_height == 0 {
            return self.reveal_all();
        }

        let window_top = viewport_top;
        let window_bottom = viewport_top + viewport_height.saturating_sub(BOTTOM_INSET_ROWS);

        let mut newly = Vec::new();
        for (idx, target) in self.targets.iter_mut().enumerate() {
            if target.revealed || target.height == 0 {
                continue;
            }
            let target_bottom = target.top + target.height;
            let overlap = window_bottom
                .min(target_bottom)
                .saturating_sub(window_top.max(target.top));
            let fraction = overlap as f32 / target.height as f32;
            if fraction > REVEAL_THRESHOLD {
                target.revealed = true;
                newly.push(RevealId(idx));
            }
        }
        newly
    }

    /// Mark every target revealed immediately. Used when intersection
    /// information is unavailable or reveal animation is disabled.
    pub fn reveal_all(&mut self) -> Vec<RevealId> {
        let mut newly = Vec::new();
        for (idx, target) in self.targets.iter_mut().enumerate() {
            if !target.revealed {
                target.revealed = true;
                newly.push(RevealId(idx));
            }
        }
        newly
    }

    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.targets.get(id.0).is_some_and(|t| t.revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reveals_when_enough_is_visible() {
        let mut tracker = RevealTracker::new();
        let card = tracker.register(20, 6);

        // Viewport rows 0..17 (20 rows minus bottom inset): no overlap.
        assert!(tracker.observe(0, 20).is_empty());
        assert!(!tracker.is_revealed(card));

        // Scrolled down: rows 10..27 cover the card.
        let newly = tracker.observe(10, 20);
        assert_eq!(newly, vec![card]);
        assert!(tracker.is_revealed(card));
    }

    #[test]
    fn reveal_is_one_way_and_one_time() {
        let mut tracker = RevealTracker::new();
        let card = tracker.register(5, 4);

        assert_eq!(tracker.observe(0, 20).len(), 1);
        // Scrolling away and back never re-reports or re-hides.
        assert!(tracker.observe(100, 20).is_empty());
        assert!(tracker.observe(0, 20).is_empty());
        assert!(tracker.is_revealed(card));
    }

    #[test]
    fn tiny_overlap_below_threshold_stays_hidden() {
        let mut tracker = RevealTracker::new();
        // 40-row target with a single row inside the window: 1/40 < 0.1.
        let block = tracker.register(16, 40);
        assert!(tracker.observe(0, 20).is_empty());
        assert!(!tracker.is_revealed(block));
    }

    #[test]
    fn zero_viewport_degrades_to_reveal_all() {
        let mut tracker = RevealTracker::new();
        let a = tracker.register(0, 5);
        let b = tracker.register(50, 5);

        let newly = tracker.observe(0, 0);
        assert_eq!(newly, vec![a, b]);
    }

    #[test]
    fn relayout_keeps_revealed_state() {
        let mut tracker = RevealTracker::new();
        let card = tracker.register(10, 4);
        tracker.observe(0, 20);
        assert!(tracker.is_revealed(card));

        tracker.set_extent(card, 200, 6);
        assert!(tracker.is_revealed(card));
    }
}
