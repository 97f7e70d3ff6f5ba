//! Per-lane horizontal insertion cursors.

use fairway_core::geometry::Point;

use crate::config::LayoutConfig;

/// Tracks the next horizontal insertion position for every lane.
///
/// Each lane's cursor starts just right of the header column (header width
/// plus the left margin) at that lane's fixed top, and only its `x`
/// accumulates; the `y` never changes across calls. Lanes are independent:
/// advancing one never affects another.
#[derive(Debug, Clone)]
pub struct LayoutCursor {
    cursors: Vec<Point>,
    step: f32,
}

impl LayoutCursor {
    /// Creates cursors for `lane_count` lanes from the layout metrics.
    pub fn new(lane_count: usize, layout: &LayoutConfig) -> Self {
        let origin_x = layout.header_width() + layout.left_margin();
        let cursors = (0..lane_count)
            .map(|lane_index| Point::new(origin_x, lane_index as f32 * layout.lane_height()))
            .collect();

        Self {
            cursors,
            step: layout.horizontal_step(),
        }
    }

    /// Returns the current insertion position for a lane, then advances that
    /// lane's cursor by the fixed horizontal step.
    ///
    /// Lane indices come from [`super::LaneMap`] and are dense, so an
    /// out-of-range index is a caller bug.
    pub fn advance(&mut self, lane_index: usize) -> Point {
        let current = self.cursors[lane_index];
        self.cursors[lane_index] = current.translate(self.step, 0.0);
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn advance_returns_strictly_increasing_lefts_with_fixed_step() {
        let layout = LayoutConfig::default();
        let mut cursor = LayoutCursor::new(1, &layout);

        let first = cursor.advance(0);
        let second = cursor.advance(0);
        let third = cursor.advance(0);

        assert!(approx_eq!(f32, first.x(), 165.0));
        assert!(approx_eq!(f32, second.x(), first.x() + 175.0));
        assert!(approx_eq!(f32, third.x(), second.x() + 175.0));

        // top stays fixed across calls
        assert!(approx_eq!(f32, first.y(), 0.0));
        assert!(approx_eq!(f32, second.y(), 0.0));
        assert!(approx_eq!(f32, third.y(), 0.0));
    }

    #[test]
    fn lanes_are_independent() {
        let layout = LayoutConfig::default();
        let mut cursor = LayoutCursor::new(2, &layout);

        let lane0_first = cursor.advance(0);
        cursor.advance(0);
        let lane1_first = cursor.advance(1);

        // lane 1 starts at its own origin even after lane 0 advanced twice
        assert!(approx_eq!(f32, lane1_first.x(), lane0_first.x()));
        assert!(approx_eq!(f32, lane1_first.y(), layout.lane_height()));
    }

    #[test]
    fn lane_tops_are_spaced_by_lane_height() {
        let layout = LayoutConfig::default();
        let mut cursor = LayoutCursor::new(3, &layout);

        assert!(approx_eq!(f32, cursor.advance(0).y(), 0.0));
        assert!(approx_eq!(f32, cursor.advance(1).y(), 75.0));
        assert!(approx_eq!(f32, cursor.advance(2).y(), 150.0));
    }
}
