//! Table state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, trace};

use crate::config::TableConfig;
use crate::events::EventEmitter;
use crate::model::Row;
use crate::page::{DataEvent, PageEvent, preserve_active_page};
use crate::sort::{SortEvent, SortOrder, order_by};

use super::inputs::InputChanges;

/// Internal state for a [`DataTable`].
#[derive(Debug)]
pub(super) struct TableInner<R: Row> {
    /// Source dataset, as last supplied by the host.
    pub input_data: Arc<[R]>,
    /// Sorted view of `input_data`.
    pub data: Arc<[R]>,
    /// Sort field (empty = input order).
    pub sort_by: String,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// 1-based active page.
    pub active_page: usize,
    /// Page size.
    pub rows_on_page: usize,
    /// Declared total row count.
    pub amount_of_rows: usize,
}

impl<R: Row> TableInner<R> {
    fn new(config: TableConfig) -> Self {
        let empty: Arc<[R]> = Arc::from(Vec::new());
        Self {
            input_data: Arc::clone(&empty),
            data: empty,
            sort_by: config.sort_by,
            sort_order: config.sort_order,
            active_page: config.active_page,
            rows_on_page: config.rows_on_page,
            amount_of_rows: config.amount_of_rows,
        }
    }

    fn sort_event(&self) -> SortEvent {
        SortEvent::new(self.sort_by.clone(), self.sort_order)
    }

    fn page_event(&self) -> PageEvent {
        PageEvent::new(self.active_page, self.rows_on_page, self.amount_of_rows)
    }
}

/// Sort and page state for one table, with a lazily sorted view of its data.
///
/// `DataTable<R>` is a cheap handle: clones share the same state and
/// notifications, so a pager or sort header keeps its own clone.
///
/// The host drives it through two hooks:
/// - [`on_inputs_changed`](Self::on_inputs_changed) whenever it replaced
///   bound inputs (dataset, page parameters)
/// - [`refresh`](Self::refresh) on every UI cycle; it re-sorts only when
///   something changed since the last call
///
/// # Example
///
/// ```
/// use datatable::{DataTable, InputChanges, SortOrder};
/// use datatable::model::{Record, Value};
///
/// let table = DataTable::<Record>::new();
/// table.on_inputs_changed(InputChanges::new().data(vec![
///     Record::new().set("name", "b"),
///     Record::new().set("name", "a"),
/// ]));
/// table.set_sort("name", SortOrder::Asc);
/// table.refresh();
///
/// assert_eq!(table.data()[0].get("name"), Some(&Value::from("a")));
/// ```
#[derive(Debug)]
pub struct DataTable<R: Row> {
    inner: Arc<RwLock<TableInner<R>>>,
    /// Set when the sorted view is stale.
    dirty: Arc<AtomicBool>,
    on_page_change: EventEmitter<PageEvent>,
    on_data_change: EventEmitter<DataEvent>,
    on_sort_change: EventEmitter<SortEvent>,
}

impl<R: Row> DataTable<R> {
    /// Create a table with default inputs: no rows, 1000 rows per page,
    /// page 1, no declared rows and no sort.
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    /// Create a table seeded from `config`.
    pub fn with_config(config: TableConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(TableInner::new(config))),
            dirty: Arc::new(AtomicBool::new(false)),
            on_page_change: EventEmitter::new(),
            on_data_change: EventEmitter::new(),
            on_sort_change: EventEmitter::new(),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, TableInner<R>> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, TableInner<R>> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    /// Fired when the page parameters change.
    pub fn on_page_change(&self) -> &EventEmitter<PageEvent> {
        &self.on_page_change
    }

    /// Fired when the host supplies a new dataset. Carries the declared
    /// total row count, not the dataset's length.
    pub fn on_data_change(&self) -> &EventEmitter<DataEvent> {
        &self.on_data_change
    }

    /// Fired when the sort changes.
    pub fn on_sort_change(&self) -> &EventEmitter<SortEvent> {
        &self.on_sort_change
    }

    // -------------------------------------------------------------------------
    // Data access
    // -------------------------------------------------------------------------

    /// The sorted view as of the last [`refresh`](Self::refresh).
    pub fn data(&self) -> Arc<[R]> {
        Arc::clone(&self.read().data)
    }

    /// The dataset as supplied by the host.
    pub fn input_data(&self) -> Arc<[R]> {
        Arc::clone(&self.read().input_data)
    }

    /// Number of rows in the sorted view.
    pub fn len(&self) -> usize {
        self.read().data.len()
    }

    /// Check if the sorted view is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the sorted view is stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort.
    pub fn get_sort(&self) -> SortEvent {
        self.read().sort_event()
    }

    /// Set the sort field and direction.
    ///
    /// Does nothing when both match the current sort. Otherwise marks the view
    /// stale and fires `on_sort_change`; the rows are re-sorted on the next
    /// [`refresh`](Self::refresh).
    pub fn set_sort(&self, sort_by: impl Into<String>, sort_order: SortOrder) {
        let sort_by = sort_by.into();
        let event = {
            let mut guard = self.write();
            if guard.sort_by == sort_by && guard.sort_order == sort_order {
                trace!("DataTable: sort unchanged ({:?} {})", sort_by, sort_order);
                return;
            }
            guard.sort_by = sort_by;
            guard.sort_order = sort_order;
            self.dirty.store(true, Ordering::SeqCst);
            guard.sort_event()
        };

        debug!("DataTable: sort -> {:?} {}", event.sort_by, event.sort_order);
        self.on_sort_change.emit(&event);
    }

    // -------------------------------------------------------------------------
    // Paging
    // -------------------------------------------------------------------------

    /// Get the current page parameters.
    pub fn get_page(&self) -> PageEvent {
        self.read().page_event()
    }

    /// Set the active page and page size.
    ///
    /// Does nothing when both match the current values. A new `active_page` is
    /// adopted as given. When only the page size changes, the active page moves
    /// so the first visible row stays visible. Fires `on_page_change`.
    pub fn set_page(&self, active_page: usize, rows_on_page: usize) {
        let event = {
            let mut guard = self.write();
            if guard.active_page == active_page && guard.rows_on_page == rows_on_page {
                trace!("DataTable: page unchanged ({}, {})", active_page, rows_on_page);
                return;
            }
            if guard.active_page == active_page {
                guard.active_page =
                    preserve_active_page(guard.active_page, guard.rows_on_page, rows_on_page);
            } else {
                guard.active_page = active_page;
            }
            guard.rows_on_page = rows_on_page;
            self.dirty.store(true, Ordering::SeqCst);
            guard.page_event()
        };

        debug!(
            "DataTable: page -> {} ({} rows per page, {} total)",
            event.active_page, event.rows_on_page, event.data_length
        );
        self.on_page_change.emit(&event);
    }

    // -------------------------------------------------------------------------
    // Host hooks
    // -------------------------------------------------------------------------

    /// Input-change hook: adopt the inputs the host replaced and notify.
    ///
    /// A new dataset fires `on_data_change` with the declared total row count
    /// and marks the view stale. Any supplied page parameter fires
    /// `on_page_change` with the resulting page parameters.
    pub fn on_inputs_changed(&self, changes: InputChanges<R>) {
        if changes.is_empty() {
            return;
        }
        trace!("DataTable: inputs changed {:?}", changes.fields());

        let touches_page = changes.touches_page();
        let (data_event, page_event) = {
            let mut guard = self.write();
            let mut data_changed = false;
            if let Some(data) = changes.data
                && !Arc::ptr_eq(&guard.input_data, &data)
            {
                guard.input_data = data;
                data_changed = true;
            }
            if let Some(rows_on_page) = changes.rows_on_page {
                guard.rows_on_page = rows_on_page;
            }
            if let Some(active_page) = changes.active_page {
                guard.active_page = active_page;
            }
            if let Some(amount_of_rows) = changes.amount_of_rows {
                guard.amount_of_rows = amount_of_rows;
            }

            let data_event = if data_changed {
                self.dirty.store(true, Ordering::SeqCst);
                Some(DataEvent {
                    length: guard.amount_of_rows,
                })
            } else {
                None
            };
            let page_event = touches_page.then(|| guard.page_event());
            (data_event, page_event)
        };

        if let Some(event) = data_event {
            debug!("DataTable: new data ({} declared rows)", event.length);
            self.on_data_change.emit(&event);
        }
        if let Some(event) = page_event {
            debug!(
                "DataTable: page inputs -> {} ({} rows per page, {} total)",
                event.active_page, event.rows_on_page, event.data_length
            );
            self.on_page_change.emit(&event);
        }
    }

    /// Check hook: re-sort the view if it is stale.
    ///
    /// Returns `true` if the view was recomputed.
    pub fn refresh(&self) -> bool {
        if !self.dirty.load(Ordering::SeqCst) {
            return false;
        }

        let mut guard = self.write();
        let data: Arc<[R]> = if guard.sort_by.is_empty() {
            Arc::clone(&guard.input_data)
        } else {
            order_by(&guard.input_data, &guard.sort_by, guard.sort_order).into()
        };
        guard.data = data;
        self.dirty.store(false, Ordering::SeqCst);

        debug!(
            "DataTable: recomputed {} rows (sort {:?} {})",
            guard.data.len(),
            guard.sort_by,
            guard.sort_order
        );
        true
    }
}

impl<R: Row> Clone for DataTable<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            on_page_change: self.on_page_change.clone(),
            on_data_change: self.on_data_change.clone(),
            on_sort_change: self.on_sort_change.clone(),
        }
    }
}

impl<R: Row> Default for DataTable<R> {
    fn default() -> Self {
        Self::new()
    }
}
