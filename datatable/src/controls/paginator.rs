//! Pager control.

use std::ops::Range;
use std::sync::{Arc, RwLock};

use crate::events::SubscriptionId;
use crate::model::Row;
use crate::page::PageEvent;
use crate::table::DataTable;

/// A pager bound to a table.
///
/// Mirrors the table's page parameters from `on_page_change` and requests
/// page changes through [`DataTable::set_page`].
#[derive(Debug)]
pub struct Paginator<R: Row> {
    table: DataTable<R>,
    page: Arc<RwLock<PageEvent>>,
    subscription: SubscriptionId,
}

impl<R: Row> Paginator<R> {
    /// Create a pager for `table`, seeded from its current page.
    pub fn new(table: &DataTable<R>) -> Self {
        let page = Arc::new(RwLock::new(table.get_page()));

        let shared = Arc::clone(&page);
        let subscription = table.on_page_change().subscribe(move |event| {
            let mut guard = shared.write().unwrap_or_else(|p| p.into_inner());
            *guard = *event;
        });

        Self {
            table: table.clone(),
            page,
            subscription,
        }
    }

    /// The page parameters as last announced by the table.
    pub fn page(&self) -> PageEvent {
        self.page
            .read()
            .map(|g| *g)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }

    pub fn active_page(&self) -> usize {
        self.page().active_page
    }

    pub fn rows_on_page(&self) -> usize {
        self.page().rows_on_page
    }

    pub fn data_length(&self) -> usize {
        self.page().data_length
    }

    /// Last page number, 0 when there are no rows.
    pub fn last_page(&self) -> usize {
        self.page().last_page()
    }

    /// Rows covered by the active page.
    pub fn row_range(&self) -> Range<usize> {
        self.page().row_range()
    }

    /// Navigate to `page`, keeping the page size.
    pub fn set_page(&self, page: usize) {
        self.table.set_page(page, self.rows_on_page());
    }

    /// Change the page size, keeping the first visible row on screen.
    pub fn set_rows_on_page(&self, rows_on_page: usize) {
        self.table.set_page(self.active_page(), rows_on_page);
    }

    /// Move to the next page. Returns `false` on the last page.
    pub fn next_page(&self) -> bool {
        let page = self.page();
        if page.active_page >= page.last_page() {
            return false;
        }
        self.set_page(page.active_page + 1);
        true
    }

    /// Move to the previous page. Returns `false` on the first page.
    pub fn previous_page(&self) -> bool {
        let page = self.page();
        if page.active_page <= 1 {
            return false;
        }
        // Past-the-end pages step back onto the last real page.
        let target = (page.active_page - 1).min(page.last_page().max(1));
        self.set_page(target);
        true
    }

    /// Page numbers for a pager strip of at most `window` buttons, centred on
    /// the active page where possible.
    pub fn page_numbers(&self, window: usize) -> Vec<usize> {
        let page = self.page();
        let last = page.last_page();
        if last == 0 || window == 0 {
            return Vec::new();
        }

        let window = window.min(last);
        let active = page.active_page.clamp(1, last);
        let mut start = active.saturating_sub(window / 2).max(1);
        if start + window - 1 > last {
            start = last + 1 - window;
        }
        (start..start + window).collect()
    }
}

impl<R: Row> Drop for Paginator<R> {
    fn drop(&mut self) {
        self.table.on_page_change().unsubscribe(self.subscription);
    }
}
