//! Sort and pagination state for a tabular data view.
//!
//! A [`DataTable`] holds the rows a host UI binds to it, the active sort and
//! the page parameters. It keeps a sorted view of the rows that is recomputed
//! lazily, and publishes sort, page and data changes to sibling controls such
//! as a [`Paginator`](controls::Paginator) or a sort header
//! ([`Sorter`](controls::Sorter)).

pub mod config;
pub mod controls;
pub mod error;
pub mod events;
pub mod model;
pub mod page;
pub mod sort;
pub mod table;

pub use config::TableConfig;
pub use error::TableError;
pub use events::{EventEmitter, SubscriptionId};
pub use page::{DataEvent, PageEvent};
pub use sort::{SortEvent, SortOrder};
pub use table::{DataTable, InputChanges, InputField};

pub mod prelude {
    pub use crate::config::TableConfig;
    pub use crate::controls::{Paginator, Sorter};
    pub use crate::error::TableError;
    pub use crate::events::{EventEmitter, SubscriptionId};
    pub use crate::model::{Record, Row, Value};
    pub use crate::page::{DataEvent, PageEvent};
    pub use crate::sort::{SortEvent, SortOrder};
    pub use crate::table::{DataTable, InputChanges, InputField};
}
