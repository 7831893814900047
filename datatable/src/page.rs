//! Page bookkeeping types.
//!
//! The table tracks which page is active and how large pages are, but never
//! slices its data. Consumers use [`PageEvent::row_range`] to do that.

use std::ops::Range;

use serde::Deserialize;
use serde::Serialize;

/// The active page parameters, and the payload of `on_page_change`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEvent {
    /// 1-based active page.
    pub active_page: usize,
    /// Page size.
    pub rows_on_page: usize,
    /// Externally declared total row count.
    pub data_length: usize,
}

impl PageEvent {
    pub fn new(active_page: usize, rows_on_page: usize, data_length: usize) -> Self {
        Self {
            active_page,
            rows_on_page,
            data_length,
        }
    }

    /// Number of pages needed for `data_length` rows. Zero when there are no
    /// rows or the page size is zero.
    pub fn last_page(&self) -> usize {
        if self.rows_on_page == 0 {
            return 0;
        }
        self.data_length.div_ceil(self.rows_on_page)
    }

    /// 0-based, half-open row range covered by the active page, clamped to
    /// `data_length`.
    pub fn row_range(&self) -> Range<usize> {
        let start = self
            .active_page
            .saturating_sub(1)
            .saturating_mul(self.rows_on_page)
            .min(self.data_length);
        let end = start.saturating_add(self.rows_on_page).min(self.data_length);
        start..end
    }
}

/// Payload of `on_data_change`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEvent {
    pub length: usize,
}

/// Active page after a page-size change, keeping the first visible row on
/// screen.
///
/// The first visible row (1-based) is `(active_page - 1) * old_rows + 1`; the
/// result is the page that row lands on with `new_rows` per page. A zero
/// `new_rows` keeps `active_page` as is, and page 0 is read as page 1.
pub fn preserve_active_page(active_page: usize, old_rows: usize, new_rows: usize) -> usize {
    if new_rows == 0 {
        return active_page;
    }
    let first_row = active_page
        .saturating_sub(1)
        .saturating_mul(old_rows)
        .saturating_add(1);
    first_row.div_ceil(new_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserve_active_page() {
        // Rows 21-30 visible; row 21 is on page 2 of 20-row pages.
        assert_eq!(preserve_active_page(3, 10, 20), 2);
        assert_eq!(preserve_active_page(2, 20, 10), 3);
        assert_eq!(preserve_active_page(1, 10, 1000), 1);
        assert_eq!(preserve_active_page(7, 5, 7), 5);
    }

    #[test]
    fn test_preserve_active_page_contract_violations() {
        assert_eq!(preserve_active_page(4, 10, 0), 4);
        assert_eq!(preserve_active_page(0, 10, 5), 1);
        assert_eq!(preserve_active_page(3, 0, 5), 1);
        assert_eq!(preserve_active_page(usize::MAX, usize::MAX, 1), usize::MAX);
    }

    #[test]
    fn test_last_page() {
        assert_eq!(PageEvent::new(1, 10, 0).last_page(), 0);
        assert_eq!(PageEvent::new(1, 10, 10).last_page(), 1);
        assert_eq!(PageEvent::new(1, 10, 11).last_page(), 2);
        assert_eq!(PageEvent::new(1, 0, 11).last_page(), 0);
    }

    #[test]
    fn test_row_range() {
        assert_eq!(PageEvent::new(1, 10, 25).row_range(), 0..10);
        assert_eq!(PageEvent::new(3, 10, 25).row_range(), 20..25);
        assert_eq!(PageEvent::new(4, 10, 25).row_range(), 25..25);
        assert_eq!(PageEvent::new(0, 10, 25).row_range(), 0..10);
    }

    #[test]
    fn test_page_event_serializes_camel_case() {
        let json = serde_json::to_string(&PageEvent::new(2, 10, 42)).unwrap();
        assert_eq!(json, r#"{"activePage":2,"rowsOnPage":10,"dataLength":42}"#);
    }
}
