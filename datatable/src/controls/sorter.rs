//! Sort-indicator column header.

use std::sync::{Arc, RwLock};

use crate::events::SubscriptionId;
use crate::model::Row;
use crate::sort::{SortEvent, SortOrder};
use crate::table::DataTable;

/// A column header that sorts its table by one field.
///
/// The header shows an indicator only while the table is sorted by its own
/// field. Activating it sorts ascending, or flips to descending when already
/// ascending on this field.
#[derive(Debug)]
pub struct Sorter<R: Row> {
    table: DataTable<R>,
    sort_by: String,
    indicator: Arc<RwLock<Option<SortOrder>>>,
    subscription: SubscriptionId,
}

fn indicator_for(event: &SortEvent, sort_by: &str) -> Option<SortOrder> {
    (event.sort_by == sort_by).then_some(event.sort_order)
}

impl<R: Row> Sorter<R> {
    /// Create a header for `sort_by` bound to `table`.
    pub fn new(table: &DataTable<R>, sort_by: impl Into<String>) -> Self {
        let sort_by = sort_by.into();
        let indicator = Arc::new(RwLock::new(indicator_for(&table.get_sort(), &sort_by)));

        let field = sort_by.clone();
        let shared = Arc::clone(&indicator);
        let subscription = table.on_sort_change().subscribe(move |event| {
            let mut guard = shared.write().unwrap_or_else(|p| p.into_inner());
            *guard = indicator_for(event, &field);
        });

        Self {
            table: table.clone(),
            sort_by,
            indicator,
            subscription,
        }
    }

    /// The field this header sorts by.
    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }

    /// Direction the table is sorted in by this header's field, if any.
    pub fn indicator(&self) -> Option<SortOrder> {
        *self.indicator.read().unwrap_or_else(|p| p.into_inner())
    }

    /// Check if the table is sorted ascending by this field.
    pub fn is_sorted_asc(&self) -> bool {
        self.indicator() == Some(SortOrder::Asc)
    }

    /// Check if the table is sorted descending by this field.
    pub fn is_sorted_desc(&self) -> bool {
        self.indicator() == Some(SortOrder::Desc)
    }

    /// Activate the header.
    pub fn sort(&self) {
        let order = if self.is_sorted_asc() {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        self.table.set_sort(self.sort_by.clone(), order);
    }
}

impl<R: Row> Drop for Sorter<R> {
    fn drop(&mut self) {
        self.table.on_sort_change().unsubscribe(self.subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn test_indicator_survives_poisoned_lock() {
        let table = DataTable::<Record>::new();
        let header = Sorter::new(&table, "name");
        table.set_sort("name", SortOrder::Asc);

        let indicator = Arc::clone(&header.indicator);
        let _ = std::thread::spawn(move || {
            let _guard = indicator.write().unwrap();
            panic!("poison the indicator");
        })
        .join();
        assert!(header.indicator.is_poisoned());

        assert_eq!(header.indicator(), Some(SortOrder::Asc));
        table.set_sort("name", SortOrder::Desc);
        assert_eq!(header.indicator(), Some(SortOrder::Desc));
    }
}
