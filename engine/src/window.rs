//! Windowing math for a fixed-row-height virtualized list.
//!
//! The render surface materializes only the rows inside the viewport plus a
//! small overscan, and asks for more data when the window approaches the end
//! of what is loaded. Both decisions are pure functions of scroll geometry so
//! they can be tested without a DOM.

/// Half-open `[start, end)` row range to materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowWindow {
    pub start: usize,
    pub end: usize,
}

impl RowWindow {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Rows visible at the given scroll offset, widened by `overscan` on both
/// sides and clamped to `item_count`.
pub fn visible_range(
    scroll_top: f64,
    viewport_height: f64,
    row_height: f64,
    item_count: usize,
    overscan: usize,
) -> RowWindow {
    if item_count == 0 || row_height <= 0.0 {
        return RowWindow { start: 0, end: 0 };
    }
    let scroll_top = scroll_top.max(0.0);
    let first = (scroll_top / row_height).floor() as usize;
    let last = ((scroll_top + viewport_height) / row_height).ceil() as usize;

    let start = first.saturating_sub(overscan);
    let end = (last + overscan).min(item_count);
    RowWindow {
        start: start.min(end),
        end,
    }
}

/// Whether the window has come close enough to the unloaded tail to fetch the
/// next page: true when any row within `threshold` of the window's end is not
/// yet loaded.
pub fn should_load_more(window: RowWindow, loaded: usize, threshold: usize) -> bool {
    window.end + threshold > loaded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_range_at_top() {
        let w = visible_range(0.0, 800.0, 380.0, 21, 2);
        assert_eq!(w.start, 0);
        // ceil(800/380) = 3 visible rows, +2 overscan.
        assert_eq!(w.end, 5);
    }

    #[test]
    fn test_visible_range_mid_scroll() {
        let w = visible_range(3800.0, 800.0, 380.0, 100, 2);
        assert_eq!(w.start, 8); // row 10 visible, minus overscan
        assert_eq!(w.end, 15); // ceil(4600/380)=13, plus overscan
    }

    #[test]
    fn test_visible_range_clamps_to_item_count() {
        let w = visible_range(1e9, 800.0, 380.0, 21, 2);
        assert_eq!(w.end, 21);
        assert!(w.start <= w.end);
    }

    #[test]
    fn test_empty_list_yields_empty_window() {
        assert!(visible_range(0.0, 800.0, 380.0, 0, 2).is_empty());
    }

    #[test]
    fn test_load_more_trigger_near_tail() {
        // 20 loaded, window ends at row 19: threshold 2 reaches past the tail.
        assert!(should_load_more(RowWindow { start: 15, end: 19 }, 20, 2));
        // Deep in the middle of loaded rows: no trigger.
        assert!(!should_load_more(RowWindow { start: 0, end: 5 }, 20, 2));
        // Nothing loaded yet: always trigger.
        assert!(should_load_more(RowWindow { start: 0, end: 0 }, 0, 2));
    }
}
