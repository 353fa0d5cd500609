//! Search parameters combined with applied filters at query time.

use chrono::NaiveDateTime;
use serde_json::{json, Map, Value};

use shotquery_filter_rs::qualify_field;

/// Timestamp format the record store expects inside conditions.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Datetime range restricting queried records.
///
/// Unlike user-composed filters, the range comes from the search bar and is
/// compiled here rather than by the filter engine. Either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DateRange {
    /// Exclusive lower bound on record timestamps.
    pub from_date: Option<NaiveDateTime>,
    /// Exclusive upper bound on record timestamps.
    pub to_date: Option<NaiveDateTime>,
}

impl DateRange {
    /// Creates a range between the given bounds.
    pub fn new(from_date: Option<NaiveDateTime>, to_date: Option<NaiveDateTime>) -> Self {
        Self { from_date, to_date }
    }

    /// Returns true when neither bound is set.
    pub fn is_empty(&self) -> bool {
        self.from_date.is_none() && self.to_date.is_none()
    }

    /// The timestamp condition sent alongside the applied filters, or `None`
    /// when no range is set.
    ///
    /// Shape: `{"$and":[{"metadata.timestamp":{"$gt":from,"$lt":to}}]}`, with
    /// an open bound omitted from the comparison object.
    pub fn timestamp_condition(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut bounds = Map::new();
        if let Some(from) = self.from_date {
            bounds.insert(
                "$gt".to_string(),
                Value::from(from.format(TIMESTAMP_FORMAT).to_string()),
            );
        }
        if let Some(to) = self.to_date {
            bounds.insert(
                "$lt".to_string(),
                Value::from(to.format(TIMESTAMP_FORMAT).to_string()),
            );
        }

        let mut predicate = Map::new();
        predicate.insert(qualify_field("timestamp"), Value::Object(bounds));

        Some(json!({ "$and": [predicate] }).to_string())
    }
}
