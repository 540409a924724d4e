//! Continuous progress to discrete slide index, with change detection.

/// Progress within this distance of a slide boundary counts as past it, so
/// offsets computed from exact slide fractions (seek targets) land on the
/// upper side of their boundary despite float rounding.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// Map clamped progress to a slide index. Progress exactly 1.0 maps to the
/// last slide, never past the end of the deck.
pub fn map_index(raw_progress: f64, slide_count: usize) -> usize {
    if slide_count == 0 {
        return 0;
    }
    let idx = (raw_progress * slide_count as f64 + BOUNDARY_EPSILON)
        .floor()
        .max(0.0) as usize;
    idx.min(slide_count - 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub from: usize,
    pub to: usize,
}

/// Compares each mapped index against the previously returned one and
/// signals a change at most once per distinct index. Sub-pixel scroll
/// jitter inside a single slide's range produces no duplicate signals.
#[derive(Debug, Default)]
pub struct IndexTracker {
    current: usize,
}

impl IndexTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn observe(&mut self, raw_progress: f64, slide_count: usize) -> Option<IndexChange> {
        let next = map_index(raw_progress, slide_count);
        if next == self.current {
            return None;
        }
        let change = IndexChange {
            from: self.current,
            to: next,
        };
        self.current = next;
        Some(change)
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_stays_in_range() {
        for count in 1..=8usize {
            for step in 0..=100 {
                let p = step as f64 / 100.0;
                let idx = map_index(p, count);
                assert!(idx < count, "p={p} count={count} gave {idx}");
            }
        }
    }

    #[test]
    fn endpoints_map_to_first_and_last() {
        for count in 1..=8usize {
            assert_eq!(map_index(0.0, count), 0);
            assert_eq!(map_index(1.0, count), count - 1);
        }
    }

    #[test]
    fn mapping_is_monotone() {
        for count in 1..=8usize {
            let mut last = 0;
            for step in 0..=1000 {
                let idx = map_index(step as f64 / 1000.0, count);
                assert!(idx >= last);
                last = idx;
            }
        }
    }

    #[test]
    fn six_slides_over_1200px_span() {
        // Each slide occupies 200px of the 1200px span.
        let span = 1200.0;
        for (offset, expected) in [(0.0, 0), (199.0, 0), (201.0, 1), (999.0, 4), (1199.0, 5)] {
            assert_eq!(map_index(offset / span, 6), expected, "offset {offset}");
        }
    }

    #[test]
    fn jitter_within_one_slide_signals_once() {
        let mut tracker = IndexTracker::new();
        // Move into slide 1's range, then oscillate inside it.
        let mut signals = 0;
        for step in 0..50 {
            let p = 0.26 + (step % 5) as f64 * 0.001;
            if tracker.observe(p, 4).is_some() {
                signals += 1;
            }
        }
        assert_eq!(signals, 1);
        assert_eq!(tracker.current(), 1);
    }

    #[test]
    fn backward_scroll_is_a_legitimate_change() {
        let mut tracker = IndexTracker::new();
        assert_eq!(
            tracker.observe(0.9, 4),
            Some(IndexChange { from: 0, to: 3 })
        );
        assert_eq!(
            tracker.observe(0.1, 4),
            Some(IndexChange { from: 3, to: 0 })
        );
        assert_eq!(tracker.observe(0.1, 4), None);
    }
}
