//! SQL composition for the three listing reads.
//!
//! Total, filtered total and page are all assembled from the same fragments
//! (base clause, scope predicate, search predicate) by [`compose`], so the
//! counts and the page cannot drift apart. Every value that does not come
//! from a validated [`ListingSpec`] is bound through a `$n` placeholder.

use super::request::ListingRequest;
use super::scope::ScopePredicate;
use super::spec::{Expr, ListingSpec, SearchMode, SortSpec};
use super::store::BindValue;

/// Incrementally builds SQL text with numbered `$n` placeholders.
#[derive(Debug, Default)]
pub struct SqlBuilder {
    sql: String,
    binds: Vec<BindValue>,
}

impl SqlBuilder {
    pub fn push(&mut self, sql: &str) -> &mut Self {
        self.sql.push_str(sql);
        self
    }

    /// Register `value` and return its placeholder. The placeholder may be
    /// pushed more than once; the value is bound only once.
    pub fn bind(&mut self, value: BindValue) -> String {
        self.binds.push(value);
        format!("${}", self.binds.len())
    }

    pub fn finish(self) -> ComposedQuery {
        ComposedQuery {
            sql: self.sql,
            binds: self.binds,
        }
    }
}

/// A SQL template plus the values for its placeholders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedQuery {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

/// The three reads of one listing call.
#[derive(Debug, Clone)]
pub struct ListingQueries {
    pub total: ComposedQuery,
    pub filtered: ComposedQuery,
    pub page: ComposedQuery,
    pub sort: SortSpec,
}

/// Turn a raw search term into a `LIKE` pattern matching it as a literal,
/// lower-cased substring.
pub fn search_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Write ` WHERE (<scope>)`, plus ` AND (<search>)` when `search` is set.
fn write_filter(
    b: &mut SqlBuilder,
    spec: &ListingSpec,
    scope: &ScopePredicate,
    search: Option<Option<&str>>,
) {
    b.push(" WHERE (");
    scope.write_sql(b);
    b.push(")");

    let Some(term) = search else { return };
    b.push(" AND (");
    write_search(b, spec, term);
    b.push(")");
}

/// The search disjunction. No term, or no searchable column, is `TRUE`
/// and binds nothing.
fn write_search(b: &mut SqlBuilder, spec: &ListingSpec, term: Option<&str>) {
    let Some(term) = term else {
        b.push("TRUE");
        return;
    };
    if spec.searchable_columns().next().is_none() {
        b.push("TRUE");
        return;
    }

    let placeholder = b.bind(BindValue::Text(search_pattern(term)));
    let branches: Vec<String> = spec
        .searchable_columns()
        .map(|(column, mode)| {
            let expr = column.expr.to_sql();
            let haystack = match mode {
                SearchMode::Text => format!("LOWER(CAST({expr} AS TEXT))"),
                SearchMode::Date => format!("to_char({expr}, 'YYYY-MM-DD')"),
                SearchMode::Numeric => format!("CAST({expr} AS TEXT)"),
            };
            format!("{haystack} LIKE {placeholder} ESCAPE '\\'")
        })
        .collect();
    b.push(&branches.join(" OR "));
}

/// Compose total, filtered and page queries for one request.
pub fn compose(
    spec: &ListingSpec,
    scope: &ScopePredicate,
    request: &ListingRequest,
) -> ListingQueries {
    let base = spec.base.to_sql();
    let search = request.search_term();

    let mut total = SqlBuilder::default();
    total.push(&format!("SELECT COUNT(*)::BIGINT {base}"));
    write_filter(&mut total, spec, scope, None);

    let mut filtered = SqlBuilder::default();
    filtered.push(&format!("SELECT COUNT(*)::BIGINT {base}"));
    write_filter(&mut filtered, spec, scope, Some(search));

    let sort = request.resolve_sort(spec);
    let projections: Vec<String> = spec
        .columns
        .iter()
        .map(|c| format!("{} AS \"{}\"", c.projection_sql(), c.name))
        .collect();

    let mut page = SqlBuilder::default();
    page.push(&format!("SELECT {} {base}", projections.join(", ")));
    write_filter(&mut page, spec, scope, Some(search));

    // The default sort is validated at registration, so the index is in range.
    let sort_column = &spec.columns[sort.column];
    let direction = sort.direction.as_sql();
    page.push(&format!(
        " ORDER BY {} {direction}",
        sort_column.expr.to_sql()
    ));
    for key in &sort_column.then_by {
        page.push(&format!(", {key} {direction}"));
    }
    if sort_column.expr != Expr::Column(spec.primary_key) {
        page.push(&format!(", {} {direction}", spec.primary_key));
    }

    let offset = page.bind(BindValue::BigInt(request.page_start()));
    let limit = page.bind(BindValue::BigInt(request.page_length()));
    page.push(&format!(" OFFSET {offset} ROWS FETCH NEXT {limit} ROWS ONLY"));

    ListingQueries {
        total: total.finish(),
        filtered: filtered.finish(),
        page: page.finish(),
        sort,
    }
}

/// Only the unfiltered total, for callers that just need a count.
pub fn compose_total(spec: &ListingSpec, scope: &ScopePredicate) -> ComposedQuery {
    let mut total = SqlBuilder::default();
    total.push(&format!("SELECT COUNT(*)::BIGINT {}", spec.base.to_sql()));
    write_filter(&mut total, spec, scope, None);
    total.finish()
}
