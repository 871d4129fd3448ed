//! Listing request decoding and validation.
//!
//! Two classes of bad input are handled differently:
//!
//! - Pagination and search-term violations are caller-contract errors and
//!   are rejected with [`ListingError::InvalidRequest`] before any query runs.
//! - Sort column index and sort direction are only *hints*: grid UIs send
//!   stale indices after a column reorder, so anything unusable silently
//!   falls back to the spec default (see [`ListingRequest::resolve_sort`]).

use serde::{Deserialize, Serialize};

use super::spec::{ListingSpec, SortSpec};
use super::ListingError;

/// Page length used when the client omits `page_length`.
pub const DEFAULT_PAGE_LENGTH: i64 = 10;

/// Upper bound for `page_length`; larger values are capped.
pub const MAX_PAGE_LENGTH: i64 = 100;

/// Maximum search term length, in characters.
pub const MAX_SEARCH_TERM_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parse `asc` / `desc`, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Raw listing parameters as they arrive on the wire (`?page_start=...`).
///
/// `sort_column_index` stays text until [`ListingRequest::resolve_sort`], so
/// an empty, non-numeric or overflowing index falls back instead of failing
/// query-string decoding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    pub page_start: Option<i64>,
    pub page_length: Option<i64>,
    pub search_term: Option<String>,
    pub sort_column_index: Option<String>,
    pub sort_direction: Option<String>,
}

/// A validated listing request.
///
/// Construct through `TryFrom<ListingParams>`; the fields are private so an
/// instance always satisfies `page_start >= 0`, `1 <= page_length <=
/// MAX_PAGE_LENGTH` and a search term of at most `MAX_SEARCH_TERM_CHARS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    page_start: i64,
    page_length: i64,
    search_term: Option<String>,
    sort_column_index: Option<String>,
    sort_direction: Option<String>,
}

impl TryFrom<ListingParams> for ListingRequest {
    type Error = ListingError;

    fn try_from(params: ListingParams) -> Result<Self, Self::Error> {
        let page_start = params.page_start.unwrap_or(0);
        if page_start < 0 {
            return Err(ListingError::InvalidRequest(format!(
                "page_start must be >= 0, got {page_start}"
            )));
        }

        let page_length = params.page_length.unwrap_or(DEFAULT_PAGE_LENGTH);
        if page_length <= 0 {
            return Err(ListingError::InvalidRequest(format!(
                "page_length must be > 0, got {page_length}"
            )));
        }

        let search_term = match params.search_term {
            Some(term) if term.chars().count() > MAX_SEARCH_TERM_CHARS => {
                return Err(ListingError::InvalidRequest(format!(
                    "search_term must be at most {MAX_SEARCH_TERM_CHARS} characters"
                )));
            }
            Some(term) if term.contains('\0') => {
                return Err(ListingError::InvalidRequest(
                    "search_term must not contain NUL characters".into(),
                ));
            }
            Some(term) => Some(term.trim().to_string()).filter(|t| !t.is_empty()),
            None => None,
        };

        Ok(Self {
            page_start,
            page_length: page_length.min(MAX_PAGE_LENGTH),
            search_term,
            sort_column_index: params.sort_column_index,
            sort_direction: params.sort_direction,
        })
    }
}

impl ListingRequest {
    /// A first page of `page_length` rows with no search and default sort.
    pub fn first_page(page_length: i64) -> Result<Self, ListingError> {
        Self::try_from(ListingParams {
            page_length: Some(page_length),
            ..Default::default()
        })
    }

    pub fn page_start(&self) -> i64 {
        self.page_start
    }

    pub fn page_length(&self) -> i64 {
        self.page_length
    }

    /// The trimmed, non-empty search term, if any.
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    /// Map the requested sort onto `spec`.
    ///
    /// A missing, unparseable, out-of-range or non-sortable column index yields
    /// the spec default in full (column and direction), so `9999` orders
    /// exactly like an omitted index. For a usable index, a missing or
    /// unparseable direction takes the default direction.
    pub fn resolve_sort(&self, spec: &ListingSpec) -> SortSpec {
        let column = self
            .sort_column_index
            .as_deref()
            .and_then(|i| i.trim().parse::<usize>().ok())
            .filter(|&i| spec.sortable_column(i).is_some());

        match column {
            Some(column) => SortSpec {
                column,
                direction: self
                    .sort_direction
                    .as_deref()
                    .and_then(SortDirection::parse)
                    .unwrap_or(spec.default_sort.direction),
            },
            None => spec.default_sort,
        }
    }
}
