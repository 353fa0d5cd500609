//! Assembly of record query parameters.

use serde::{Deserialize, Serialize};

use shotquery_filter_rs::{qualify_field, AppliedFilters};

use crate::search::DateRange;

/// Sort direction for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// The direction as it appears in an `order` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Page-based pagination, translated to the API's skip/limit parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based page index.
    pub page: usize,
    /// Rows per page.
    pub results_per_page: usize,
}

impl Pagination {
    /// Number of records to skip.
    pub fn skip(&self) -> usize {
        self.page * self.results_per_page
    }

    /// Maximum number of records to return.
    pub fn limit(&self) -> usize {
        self.results_per_page
    }
}

/// A fully assembled record query.
///
/// Collects the table's sort state, the search date range, the applied
/// filters, and pagination into the ordered parameter list the API client
/// appends to `/records` requests. Issuing the request, caching, and retry
/// behavior belong to the client collaborator.
///
/// # Example
///
/// ```
/// use shotquery_filter_rs::{AppliedFilters, Operator, Token};
/// use shotquery_records_rs::{Pagination, RecordQuery, SortOrder};
///
/// let filters = AppliedFilters::from_clauses(vec![vec![
///     Token::channel("type"),
///     Token::operator(Operator::IsNotNull),
/// ]]);
///
/// let query = RecordQuery::new()
///     .sort_by("timestamp", SortOrder::Desc)
///     .with_filters(filters)
///     .with_pagination(Pagination { page: 2, results_per_page: 25 });
///
/// assert_eq!(
///     query.query_string().unwrap(),
///     "order=metadata.timestamp+desc\
///      &conditions=%7B%22channels.type%22%3A%7B%22%24exists%22%3Atrue%7D%7D\
///      &skip=50&limit=25"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordQuery {
    sort: Vec<(String, SortOrder)>,
    date_range: DateRange,
    filters: AppliedFilters,
    pagination: Option<Pagination>,
}

impl RecordQuery {
    /// Creates an unconstrained query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sort column; columns keep their insertion order.
    pub fn sort_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort.push((field.into(), order));
        self
    }

    /// Sets the search date range.
    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    /// Sets the applied filters.
    pub fn with_filters(mut self, filters: AppliedFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Sets pagination; count queries leave this unset.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// The `conditions` values alone: the date-range timestamp condition
    /// first, then each compiled non-empty filter clause.
    ///
    /// `/records/count` requests use exactly these parameters.
    pub fn condition_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(condition) = self.date_range.timestamp_condition() {
            params.push(("conditions".to_string(), condition));
        }
        for condition in self.filters.to_conditions() {
            params.push(("conditions".to_string(), condition));
        }

        params
    }

    /// Ordered query parameters for a `/records` request.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        for (field, order) in &self.sort {
            params.push((
                "order".to_string(),
                format!("{} {}", qualify_field(field), order.as_str()),
            ));
        }

        params.extend(self.condition_params());

        if let Some(pagination) = self.pagination {
            params.push(("skip".to_string(), pagination.skip().to_string()));
            params.push(("limit".to_string(), pagination.limit().to_string()));
        }

        params
    }

    /// The URL-encoded query string.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter value cannot be URL-encoded.
    pub fn query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self.params())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shotquery_filter_rs::{Operator, Token};

    #[test]
    fn test_empty_query_has_no_params() {
        assert!(RecordQuery::new().params().is_empty());
        assert_eq!(RecordQuery::new().query_string().unwrap(), "");
    }

    #[test]
    fn test_sort_params_qualify_field_names() {
        let query = RecordQuery::new()
            .sort_by("timestamp", SortOrder::Desc)
            .sort_by("N_COMP_FF_E", SortOrder::Asc);

        assert_eq!(
            query.params(),
            vec![
                ("order".to_string(), "metadata.timestamp desc".to_string()),
                ("order".to_string(), "channels.N_COMP_FF_E asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_pagination_translates_to_skip_and_limit() {
        let query = RecordQuery::new().with_pagination(Pagination {
            page: 3,
            results_per_page: 25,
        });

        assert_eq!(
            query.params(),
            vec![
                ("skip".to_string(), "75".to_string()),
                ("limit".to_string(), "25".to_string()),
            ]
        );
    }

    #[test]
    fn test_filters_become_repeated_conditions() {
        let filters = AppliedFilters::from_clauses(vec![
            vec![Token::channel("type"), Token::operator(Operator::IsNotNull)],
            vec![Token::channel("shotnum"), Token::operator(Operator::IsNull)],
        ]);
        let query = RecordQuery::new().with_filters(filters);

        assert_eq!(
            query.params(),
            vec![
                (
                    "conditions".to_string(),
                    r#"{"channels.type":{"$exists":true}}"#.to_string()
                ),
                (
                    "conditions".to_string(),
                    r#"{"metadata.shotnum":{"$exists":false}}"#.to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_count_query_uses_conditions_only() {
        let filters = AppliedFilters::from_clauses(vec![vec![
            Token::channel("type"),
            Token::operator(Operator::IsNotNull),
        ]]);
        let query = RecordQuery::new()
            .sort_by("timestamp", SortOrder::Asc)
            .with_filters(filters)
            .with_pagination(Pagination {
                page: 0,
                results_per_page: 10,
            });

        assert_eq!(
            query.condition_params(),
            vec![(
                "conditions".to_string(),
                r#"{"channels.type":{"$exists":true}}"#.to_string()
            )]
        );
    }
}
