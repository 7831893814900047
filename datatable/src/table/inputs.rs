//! Host-supplied input changes.

use std::sync::Arc;

/// One of the externally bound table inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// The source dataset.
    Data,
    /// Page size.
    RowsOnPage,
    /// 1-based active page.
    ActivePage,
    /// Declared total row count.
    AmountOfRows,
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InputField::Data => "data",
            InputField::RowsOnPage => "rows_on_page",
            InputField::ActivePage => "active_page",
            InputField::AmountOfRows => "amount_of_rows",
        };
        f.write_str(name)
    }
}

/// The inputs the host replaced since the last input-change hook.
///
/// Only the supplied fields count as changed.
///
/// # Example
///
/// ```
/// use datatable::InputChanges;
/// use datatable::model::Record;
///
/// let changes = InputChanges::<Record>::new()
///     .data(vec![Record::new().set("name", "a")])
///     .amount_of_rows(1);
/// ```
#[derive(Debug, Clone)]
pub struct InputChanges<R> {
    pub(super) data: Option<Arc<[R]>>,
    pub(super) rows_on_page: Option<usize>,
    pub(super) active_page: Option<usize>,
    pub(super) amount_of_rows: Option<usize>,
}

impl<R> InputChanges<R> {
    /// An empty change set.
    pub fn new() -> Self {
        Self {
            data: None,
            rows_on_page: None,
            active_page: None,
            amount_of_rows: None,
        }
    }

    /// Replace the dataset.
    ///
    /// Passing the table's current `Arc` again is not a change.
    pub fn data(mut self, data: impl Into<Arc<[R]>>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Replace the page size.
    pub fn rows_on_page(mut self, rows_on_page: usize) -> Self {
        self.rows_on_page = Some(rows_on_page);
        self
    }

    /// Replace the active page.
    pub fn active_page(mut self, active_page: usize) -> Self {
        self.active_page = Some(active_page);
        self
    }

    /// Replace the declared total row count.
    pub fn amount_of_rows(mut self, amount_of_rows: usize) -> Self {
        self.amount_of_rows = Some(amount_of_rows);
        self
    }

    /// Which inputs this change set carries.
    pub fn fields(&self) -> Vec<InputField> {
        let mut fields = Vec::new();
        if self.data.is_some() {
            fields.push(InputField::Data);
        }
        if self.rows_on_page.is_some() {
            fields.push(InputField::RowsOnPage);
        }
        if self.active_page.is_some() {
            fields.push(InputField::ActivePage);
        }
        if self.amount_of_rows.is_some() {
            fields.push(InputField::AmountOfRows);
        }
        fields
    }

    /// Returns `true` if nothing was supplied.
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Returns `true` if any page parameter was supplied.
    pub(super) fn touches_page(&self) -> bool {
        self.rows_on_page.is_some() || self.active_page.is_some() || self.amount_of_rows.is_some()
    }
}

impl<R> Default for InputChanges<R> {
    fn default() -> Self {
        Self::new()
    }
}
