//! Viewport geometry and the active-section scan
//!
//! The browser's `window.scrollY`, element `offsetTop`/`offsetHeight` and
//! `window.scrollTo` sit behind [`ViewportGeometry`] so the scan can run
//! against a synthetic layout in tests.

use crate::section::SectionId;

/// Bias added to the scroll offset so a section highlights slightly before
/// its top reaches the viewport top.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;

/// Space reserved for the fixed header when scrolling to a section.
pub const HEADER_OFFSET: f64 = 80.0;

/// Vertical extent of a section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `[top, top + height)`
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }

    /// Scroll offset that puts this section just below the fixed header
    pub fn scroll_target(&self) -> f64 {
        self.top - HEADER_OFFSET
    }
}

/// Read access to document geometry plus the one scroll request we issue.
#[cfg_attr(test, mockall::automock)]
pub trait ViewportGeometry {
    /// Current vertical scroll offset of the document
    fn scroll_y(&self) -> f64;

    /// Bounds of the section element, or `None` if it is not in the document
    fn section_bounds(&self, section: SectionId) -> Option<SectionBounds>;

    /// Fire-and-forget smooth scroll to the given document offset
    fn smooth_scroll_to(&self, top: f64);
}

/// First section in declared order whose bounds contain `scroll_y + SCROLL_LOOKAHEAD`.
///
/// Sections missing from the document are skipped.
pub fn active_section_at<V>(viewport: &V) -> Option<SectionId>
where
    V: ViewportGeometry + ?Sized,
{
    let position = viewport.scroll_y() + SCROLL_LOOKAHEAD;

    SectionId::ALL.into_iter().find(|&section| {
        viewport
            .section_bounds(section)
            .is_some_and(|bounds| bounds.contains(position))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::StaticLayout;

    fn two_section_layout() -> StaticLayout {
        StaticLayout::new()
            .with_section(SectionId::About, 500.0, 500.0)
            .with_section(SectionId::Skills, 1000.0, 500.0)
    }

    #[test]
    fn test_bounds_half_open() {
        let bounds = SectionBounds::new(500.0, 500.0);
        assert!(bounds.contains(500.0));
        assert!(bounds.contains(999.9));
        assert!(!bounds.contains(1000.0));
        assert!(!bounds.contains(499.9));
    }

    #[test]
    fn test_zero_height_contains_nothing() {
        let bounds = SectionBounds::new(200.0, 0.0);
        assert!(!bounds.contains(200.0));
    }

    #[test]
    fn test_scroll_target_reserves_header() {
        assert_eq!(SectionBounds::new(1200.0, 300.0).scroll_target(), 1120.0);
        assert_eq!(SectionBounds::new(0.0, 300.0).scroll_target(), -80.0);
    }

    #[test]
    fn test_lookahead_selects_about() {
        let layout = two_section_layout();
        layout.set_scroll_y(850.0);
        assert_eq!(active_section_at(&layout), Some(SectionId::About));
    }

    #[test]
    fn test_lookahead_selects_skills() {
        let layout = two_section_layout();
        layout.set_scroll_y(950.0);
        assert_eq!(active_section_at(&layout), Some(SectionId::Skills));
    }

    #[test]
    fn test_boundary_goes_to_later_section() {
        let layout = two_section_layout();
        // 900 + 100 lands exactly on the skills top
        layout.set_scroll_y(900.0);
        assert_eq!(active_section_at(&layout), Some(SectionId::Skills));
    }

    #[test]
    fn test_overlap_prefers_earlier_section() {
        let layout = StaticLayout::new()
            .with_section(SectionId::Projects, 0.0, 2000.0)
            .with_section(SectionId::Skills, 500.0, 500.0);
        layout.set_scroll_y(600.0);
        assert_eq!(active_section_at(&layout), Some(SectionId::Skills));
    }

    #[test]
    fn test_no_match() {
        let layout = two_section_layout();
        layout.set_scroll_y(5000.0);
        assert_eq!(active_section_at(&layout), None);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let mut mock = MockViewportGeometry::new();
        mock.expect_scroll_y().return_const(0.0_f64);
        mock.expect_section_bounds().returning(|section| match section {
            SectionId::Contact => Some(SectionBounds::new(0.0, 400.0)),
            _ => None,
        });
        mock.expect_smooth_scroll_to().never();

        assert_eq!(active_section_at(&mock), Some(SectionId::Contact));
    }
}
