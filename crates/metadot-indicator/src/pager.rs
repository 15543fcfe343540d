#![forbid(unsafe_code)]

//! Bridge between an external pager and the dot field.
//!
//! The boundary is an explicit interface: the owning application forwards
//! notifications itself, and no subscription or registration bookkeeping
//! lives in the core.

use crate::field::DotField;

/// Read side of the external pager.
pub trait Pager {
    /// Number of pages currently available.
    fn page_count(&self) -> usize;

    /// Index of the active page.
    fn current_index(&self) -> usize;
}

impl DotField {
    /// Continuous scroll notification: `index` plus `offset` (nominally in
    /// `[0, 1)`) combine into the scalar scroll fraction.
    pub fn on_scroll(&mut self, index: usize, offset: f64) {
        self.set_scroll_fraction(index as f64 + offset);
    }

    /// Discrete page-selection notification.
    pub fn on_page_selected(&mut self, index: usize) {
        self.set_connected_index(index);
    }

    /// Page-count-changed notification: repopulate the dot count, the
    /// connected index, and the cursor position from the pager.
    pub fn sync_with_pager(&mut self, pager: &impl Pager) {
        self.set_dot_count(pager.page_count());
        let current = pager.current_index();
        self.set_connected_index(current);
        self.set_scroll_fraction(current as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndicatorConfig;
    use crate::field::Viewport;

    struct FakePager {
        pages: usize,
        current: usize,
    }

    impl Pager for FakePager {
        fn page_count(&self) -> usize {
            self.pages
        }

        fn current_index(&self) -> usize {
            self.current
        }
    }

    fn field() -> DotField {
        let mut field = DotField::new(IndicatorConfig::default()).unwrap();
        field.on_viewport_changed(Viewport::new(600.0, 80.0));
        field
    }

    #[test]
    fn sync_populates_count_index_and_fraction() {
        let mut field = field();
        field.sync_with_pager(&FakePager {
            pages: 5,
            current: 3,
        });
        assert_eq!(field.dots().len(), 5);
        assert_eq!(field.connected_index(), Some(3));
        assert_eq!(field.scroll_fraction(), 3.0);
    }

    #[test]
    fn sync_with_empty_pager_clears_the_field() {
        let mut field = field();
        field.sync_with_pager(&FakePager {
            pages: 0,
            current: 0,
        });
        assert!(field.dots().is_empty());
        assert_eq!(field.connected_index(), None);
        assert_eq!(field.scroll_fraction(), 0.0);
    }

    #[test]
    fn on_scroll_combines_index_and_offset() {
        let mut field = field();
        field.set_dot_count(4);
        field.on_scroll(1, 0.25);
        assert!((field.scroll_fraction() - 1.25).abs() < 1e-12);
    }

    #[test]
    fn on_page_selected_moves_the_connection() {
        let mut field = field();
        field.set_dot_count(4);
        field.on_page_selected(2);
        assert_eq!(field.connected_index(), Some(2));
    }

    #[test]
    fn stale_pager_index_is_clamped() {
        let mut field = field();
        field.sync_with_pager(&FakePager {
            pages: 2,
            current: 9,
        });
        assert_eq!(field.connected_index(), Some(1));
        assert_eq!(field.scroll_fraction(), 1.0);
    }
}
