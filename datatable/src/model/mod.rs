//! Row model

mod record;
mod value;

pub use record::*;
pub use value::*;

/// Trait for rows a [`DataTable`](crate::DataTable) can hold.
///
/// The table never inspects a row beyond asking for the value of the active
/// sort field. Returning `None` marks the field as missing from this row.
///
/// # Example
///
/// ```
/// use datatable::model::Row;
///
/// #[derive(Clone)]
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// impl Row for User {
///     type Value = String;
///
///     fn field(&self, name: &str) -> Option<String> {
///         match name {
///             "name" => Some(self.name.clone()),
///             "age" => Some(format!("{:03}", self.age)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Row: Clone + Send + Sync + 'static {
    /// The orderable value a field lookup yields.
    type Value: Ord + Clone;

    /// Look up a field by name.
    fn field(&self, name: &str) -> Option<Self::Value>;
}
