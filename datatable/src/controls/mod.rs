//! Sibling controls driven by a [`DataTable`](crate::DataTable)'s notifications.
//!
//! Both controls hold their own table handle, mirror the state they display
//! from the table's notifications, and unsubscribe when dropped.

mod paginator;
mod sorter;

pub use paginator::Paginator;
pub use sorter::Sorter;
