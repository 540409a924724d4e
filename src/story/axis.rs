//! Horizontal translation mode: vertical scroll drives a sideways card row.

/// Total horizontal overflow of the row beyond the viewport. Zero when the
/// row already fits.
pub fn overflow_distance(row_width: f64, viewport_width: f64) -> f64 {
    (row_width - viewport_width).max(0.0)
}

/// Horizontal offset for the row at the given clamped progress. The row
/// moves left as the user scrolls down, traversing the full overflow
/// distance across the region.
pub fn offset_x(raw_progress: f64, distance: f64) -> f64 {
    -raw_progress * distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_spans_the_overflow_distance() {
        let d = overflow_distance(2400.0, 1000.0);
        assert_eq!(d, 1400.0);
        assert_eq!(offset_x(0.0, d), 0.0);
        assert_eq!(offset_x(0.5, d), -700.0);
        assert_eq!(offset_x(1.0, d), -1400.0);
    }

    #[test]
    fn fitting_row_never_moves() {
        let d = overflow_distance(800.0, 1000.0);
        assert_eq!(d, 0.0);
        assert_eq!(offset_x(0.7, d), 0.0);
    }

    #[test]
    fn distance_is_rederived_after_resize() {
        // A cached distance from the old viewport would stop 200px early.
        let before = overflow_distance(2400.0, 1000.0);
        let after = overflow_distance(2400.0, 1200.0);
        assert_eq!(before, 1400.0);
        assert_eq!(after, 1200.0);
        assert_ne!(offset_x(1.0, before), offset_x(1.0, after));
    }
}
