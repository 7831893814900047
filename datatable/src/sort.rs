//! Sort parameters and the stable single-field sort.

use std::cmp::Reverse;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::TableError;
use crate::model::Row;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Lowercase name (`asc` / `desc`).
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(TableError::InvalidSortOrder(s.to_string()))
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active sort, and the payload of `on_sort_change`.
///
/// An empty `sort_by` means the rows keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortEvent {
    pub sort_by: String,
    pub sort_order: SortOrder,
}

impl SortEvent {
    pub fn new(sort_by: impl Into<String>, sort_order: SortOrder) -> Self {
        Self {
            sort_by: sort_by.into(),
            sort_order,
        }
    }

    /// Returns `true` if no sort field is set.
    pub fn is_unsorted(&self) -> bool {
        self.sort_by.is_empty()
    }
}

/// Sort key with missing values ranked after every present value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey<V> {
    Present(V),
    Missing,
}

impl<V> From<Option<V>> for SortKey<V> {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(v) => SortKey::Present(v),
            None => SortKey::Missing,
        }
    }
}

/// Stably reorder `rows` by the field `sort_by`.
///
/// An empty `sort_by` returns the rows in input order. Rows whose field is
/// missing rank above every present value: last when ascending, first when
/// descending. Equal keys keep their input order in both directions.
pub fn order_by<R: Row>(rows: &[R], sort_by: &str, order: SortOrder) -> Vec<R> {
    let mut sorted = rows.to_vec();
    if sort_by.is_empty() {
        return sorted;
    }

    // `sort_by_cached_key` is stable and extracts each key once.
    match order {
        SortOrder::Asc => sorted.sort_by_cached_key(|row| SortKey::from(row.field(sort_by))),
        SortOrder::Desc => {
            sorted.sort_by_cached_key(|row| Reverse(SortKey::from(row.field(sort_by))))
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Record, Value};

    fn rows(values: &[(&str, Option<i64>)]) -> Vec<Record> {
        values
            .iter()
            .map(|(id, v)| {
                let record = Record::new().set("id", *id);
                match v {
                    Some(n) => record.set("n", *n),
                    None => record,
                }
            })
            .collect()
    }

    fn ids(rows: &[Record]) -> Vec<String> {
        rows.iter()
            .map(|r| r.get("id").map(Value::to_string).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_parse_sort_order() {
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert_eq!("DESC".parse::<SortOrder>(), Ok(SortOrder::Desc));
        assert_eq!(
            "up".parse::<SortOrder>(),
            Err(TableError::InvalidSortOrder("up".to_string()))
        );
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.to_string(), "desc");
    }

    #[test]
    fn test_empty_field_keeps_input_order() {
        let input = rows(&[("a", Some(3)), ("b", Some(1)), ("c", Some(2))]);
        assert_eq!(ids(&order_by(&input, "", SortOrder::Desc)), ["a", "b", "c"]);
    }

    #[test]
    fn test_ties_keep_input_order_both_directions() {
        let input = rows(&[("a", Some(2)), ("b", Some(1)), ("c", Some(2)), ("d", Some(1))]);
        assert_eq!(ids(&order_by(&input, "n", SortOrder::Asc)), ["b", "d", "a", "c"]);
        assert_eq!(ids(&order_by(&input, "n", SortOrder::Desc)), ["a", "c", "b", "d"]);
    }

    #[test]
    fn test_missing_fields_last_ascending_first_descending() {
        let input = rows(&[("a", None), ("b", Some(1)), ("c", None), ("d", Some(0))]);
        assert_eq!(ids(&order_by(&input, "n", SortOrder::Asc)), ["d", "b", "a", "c"]);
        assert_eq!(ids(&order_by(&input, "n", SortOrder::Desc)), ["a", "c", "b", "d"]);
    }

    #[test]
    fn test_missing_ranks_after_null() {
        let input = vec![
            Record::new().set("id", "missing"),
            Record::new().set("id", "null").set("n", Value::Null),
            Record::new().set("id", "one").set("n", 1),
        ];
        assert_eq!(ids(&order_by(&input, "n", SortOrder::Asc)), ["one", "null", "missing"]);
    }

    #[test]
    fn test_sort_event_serializes_camel_case() {
        let json = serde_json::to_string(&SortEvent::new("name", SortOrder::Desc)).unwrap();
        assert_eq!(json, r#"{"sortBy":"name","sortOrder":"desc"}"#);
    }
}
