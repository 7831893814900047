//! Table configuration

use crate::error::TableError;
use crate::sort::SortOrder;

/// Initial inputs and sort for a [`DataTable`](crate::DataTable).
///
/// # Example
///
/// ```
/// use datatable::{SortOrder, TableConfig};
///
/// let config = TableConfig::default()
///     .with_rows_on_page(25)
///     .with_sort("name", SortOrder::Desc);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Page size.
    ///
    /// Default: 1000
    pub rows_on_page: usize,

    /// 1-based active page.
    ///
    /// Default: 1
    pub active_page: usize,

    /// Externally declared total row count.
    ///
    /// Default: 0
    pub amount_of_rows: usize,

    /// Initial sort field. Empty keeps input order.
    pub sort_by: String,

    /// Initial sort direction.
    pub sort_order: SortOrder,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_on_page: 1000,
            active_page: 1,
            amount_of_rows: 0,
            sort_by: String::new(),
            sort_order: SortOrder::Asc,
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn with_rows_on_page(mut self, rows_on_page: usize) -> Self {
        self.rows_on_page = rows_on_page;
        self
    }

    /// Sets the active page.
    pub fn with_active_page(mut self, active_page: usize) -> Self {
        self.active_page = active_page;
        self
    }

    /// Sets the declared total row count.
    pub fn with_amount_of_rows(mut self, amount_of_rows: usize) -> Self {
        self.amount_of_rows = amount_of_rows;
        self
    }

    /// Sets the initial sort.
    pub fn with_sort(mut self, sort_by: impl Into<String>, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by.into();
        self.sort_order = sort_order;
        self
    }

    /// Check the page parameters.
    ///
    /// The table accepts any values; this is for callers that validate
    /// upstream.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.rows_on_page == 0 {
            return Err(TableError::InvalidRowsOnPage(self.rows_on_page));
        }
        if self.active_page == 0 {
            return Err(TableError::InvalidActivePage(self.active_page));
        }
        Ok(())
    }
}
