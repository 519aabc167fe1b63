//! Scroll-offset driven page chrome: which of the sticky header, the
//! back-to-top button and the bottom navigation are on screen, which nav
//! item is active, and how far a section has been scrolled through.

use crate::config::{
    BACK_TO_TOP_THRESHOLD, BOTTOM_NAV_THRESHOLD, NAV_CLEAR_BELOW, NAV_ACTIVE_LINE,
    STICKY_HEADER_OFFSET,
};

/// Strict threshold: an offset equal to the limit is not past it.
pub fn is_past(offset: f64, limit: f64) -> bool {
    offset > limit
}

pub fn sticky_header_visible(scroll_y: f64, viewport_height: f64) -> bool {
    is_past(scroll_y, viewport_height - STICKY_HEADER_OFFSET)
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    is_past(scroll_y, BACK_TO_TOP_THRESHOLD)
}

/// The force-hide override wins over the offset threshold.
pub fn bottom_nav_visible(scroll_y: f64, force_hide: bool) -> bool {
    !force_hide && is_past(scroll_y, BOTTOM_NAV_THRESHOLD)
}

/// Remembers the last boolean so callers can react to flips only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flip {
    last: Option<bool>,
}

impl Flip {
    /// Returns the new value when it differs from the previous one.
    pub fn update(&mut self, value: bool) -> Option<bool> {
        if self.last == Some(value) {
            return None;
        }
        self.last = Some(value);
        Some(value)
    }
}

/// Picks the active nav item from the viewport rects (`top`, `bottom`) of
/// each item's section. A section is active while it spans the active line;
/// the last matching section wins. With no match the previous item stays
/// active, unless the page is back near the top.
pub fn active_section(
    previous: Option<usize>,
    rects: &[Option<(f64, f64)>],
    scroll_y: f64,
) -> Option<usize> {
    let current = rects
        .iter()
        .enumerate()
        .filter_map(|(index, rect)| rect.map(|rect| (index, rect)))
        .filter(|(_, (top, bottom))| *top <= NAV_ACTIVE_LINE && *bottom >= NAV_ACTIVE_LINE)
        .map(|(index, _)| index)
        .last();

    match current {
        Some(index) => Some(index),
        None if scroll_y < NAV_CLEAR_BELOW => None,
        None => previous,
    }
}

/// Scroll progress of an element from "its top at the viewport centre" to
/// "its bottom at the viewport centre", clamped to `[0, 1]`.
pub fn center_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    ((viewport_height / 2.0 - top) / height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_flip_exactly_on_crossing() {
        assert!(!back_to_top_visible(800.0));
        assert!(back_to_top_visible(800.5));
        assert!(!bottom_nav_visible(50.0, false));
        assert!(bottom_nav_visible(51.0, false));
        assert!(!is_past(500.0, 500.0));
        assert!(is_past(501.0, 500.0));
    }

    #[test]
    fn sticky_header_tracks_one_viewport_minus_offset() {
        let viewport = 900.0;
        let mut flip = Flip::default();
        let mut mounted = false;
        let offsets = [0.0, 400.0, 799.0, 800.0, 801.0, 1500.0, 801.0, 800.0, 0.0];
        let expected = [false, false, false, false, true, true, true, false, false];

        for (offset, want) in offsets.into_iter().zip(expected) {
            if let Some(visible) = flip.update(sticky_header_visible(offset, viewport)) {
                mounted = visible;
            }
            assert_eq!(mounted, want, "offset {offset}");
        }
    }

    #[test]
    fn force_hide_overrides_then_hands_back_authority() {
        let scroll = 3000.0;
        assert!(!bottom_nav_visible(scroll, true));
        assert!(back_to_top_visible(scroll));
        assert!(bottom_nav_visible(scroll, false));
        assert!(!bottom_nav_visible(10.0, false));
    }

    #[test]
    fn flip_reports_changes_only() {
        let mut flip = Flip::default();
        assert_eq!(flip.update(false), Some(false));
        assert_eq!(flip.update(false), None);
        assert_eq!(flip.update(true), Some(true));
        assert_eq!(flip.update(true), None);
    }

    #[test]
    fn active_section_follows_the_active_line() {
        let rects = [Some((-900.0, 100.0)), Some((100.0, 1200.0)), None];
        assert_eq!(active_section(None, &rects, 1500.0), Some(1));

        let between = [Some((-900.0, 100.0)), Some((350.0, 1200.0)), None];
        assert_eq!(active_section(Some(1), &between, 1500.0), Some(1));
        assert_eq!(active_section(Some(1), &between, 120.0), None);
    }

    #[test]
    fn progress_maps_centre_crossings_linearly() {
        assert_eq!(center_progress(500.0, 1000.0, 800.0), 0.0);
        assert!((center_progress(-100.0, 1000.0, 800.0) - 0.5).abs() < 1e-9);
        assert_eq!(center_progress(-2000.0, 1000.0, 800.0), 1.0);
        assert_eq!(center_progress(0.0, 0.0, 800.0), 0.0);
    }
}
