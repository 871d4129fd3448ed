//! Declarative per-entity listing metadata.
//!
//! A [`ListingSpec`] describes everything the engine needs to list one
//! entity: the base `FROM`/`JOIN` clause, the display columns (with their
//! sort and search behaviour), the primary key used as a sort tie-break,
//! and the owner column used for row-level scoping. Specs are built once at
//! startup and validated by [`ListingSpec::validate`] before registration.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::request::SortDirection;
use super::RegistryError;

/// Lower-case SQL identifier accepted for tables, aliases, columns and
/// display names.
static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_][a-z0-9_]*$").expect("valid regex"));

/// Whether `s` is an identifier that can be spliced into SQL text unquoted.
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER_RE.is_match(s)
}

// ---------------------------------------------------------------------------
// Column references and expressions
// ---------------------------------------------------------------------------

/// A table-qualified column reference, rendered as `alias.column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRef {
    pub table: &'static str,
    pub column: &'static str,
}

/// Build a [`ColumnRef`] from an alias and a column name.
pub const fn col(table: &'static str, column: &'static str) -> ColumnRef {
    ColumnRef { table, column }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

/// The underlying value of a display column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Column(ColumnRef),
    /// `CONCAT_WS(separator, parts...)`, e.g. an employee's full name.
    Concat {
        parts: Vec<ColumnRef>,
        separator: &'static str,
    },
}

impl Expr {
    /// Every column reference the expression touches.
    pub fn column_refs(&self) -> Vec<ColumnRef> {
        match self {
            Expr::Column(c) => vec![*c],
            Expr::Concat { parts, .. } => parts.clone(),
        }
    }

    /// Render the expression as SQL.
    pub fn to_sql(&self) -> String {
        match self {
            Expr::Column(c) => c.to_string(),
            Expr::Concat { parts, separator } => {
                let parts: Vec<String> = parts.iter().map(ToString::to_string).collect();
                format!("CONCAT_WS('{separator}', {})", parts.join(", "))
            }
        }
    }
}

impl From<ColumnRef> for Expr {
    fn from(c: ColumnRef) -> Self {
        Expr::Column(c)
    }
}

/// `first_name last_name` of the employee joined under `alias`.
pub fn full_name(alias: &'static str) -> Expr {
    Expr::Concat {
        parts: vec![col(alias, "first_name"), col(alias, "last_name")],
        separator: " ",
    }
}

// ---------------------------------------------------------------------------
// Display columns
// ---------------------------------------------------------------------------

/// How a display column's value is rendered in the result rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Integer,
    Decimal,
    /// Rendered as a `YYYY-MM-DD` string.
    Date,
}

/// How a searchable column is matched against the search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Case-insensitive substring on the text value.
    Text,
    /// Substring on the `YYYY-MM-DD` rendering.
    Date,
    /// Substring on the decimal text rendering.
    Numeric,
}

#[derive(Debug, Clone)]
pub struct DisplayColumn {
    /// Output key in result rows.
    pub name: &'static str,
    pub expr: Expr,
    pub kind: ValueKind,
    pub sortable: bool,
    pub search: Option<SearchMode>,
    /// Further keys ordered in the same direction when sorting by this
    /// column, ahead of the primary-key tie-break.
    pub then_by: Vec<ColumnRef>,
}

impl DisplayColumn {
    /// A sortable, non-searchable column.
    pub fn new(name: &'static str, expr: impl Into<Expr>, kind: ValueKind) -> Self {
        Self {
            name,
            expr: expr.into(),
            kind,
            sortable: true,
            search: None,
            then_by: Vec::new(),
        }
    }

    pub fn searchable(mut self, mode: SearchMode) -> Self {
        self.search = Some(mode);
        self
    }

    /// Sort by `column` next whenever this column is the sort key,
    /// e.g. month within year.
    pub fn then_by(mut self, column: ColumnRef) -> Self {
        self.then_by.push(column);
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// The select-list projection, already formatted for display.
    pub fn projection_sql(&self) -> String {
        let expr = self.expr.to_sql();
        match self.kind {
            ValueKind::Text => format!("CAST({expr} AS TEXT)"),
            ValueKind::Integer => format!("CAST({expr} AS BIGINT)"),
            ValueKind::Decimal => format!("CAST({expr} AS DOUBLE PRECISION)"),
            ValueKind::Date => format!("to_char({expr}, 'YYYY-MM-DD')"),
        }
    }
}

// ---------------------------------------------------------------------------
// Base clause
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
}

/// `JOIN table alias ON left = right`.
#[derive(Debug, Clone)]
pub struct Join {
    pub kind: JoinKind,
    pub table: &'static str,
    pub alias: &'static str,
    pub left: ColumnRef,
    pub right: ColumnRef,
}

impl Join {
    pub fn inner(table: &'static str, alias: &'static str, left: ColumnRef, right: ColumnRef) -> Self {
        Self {
            kind: JoinKind::Inner,
            table,
            alias,
            left,
            right,
        }
    }

    pub fn left(table: &'static str, alias: &'static str, left: ColumnRef, right: ColumnRef) -> Self {
        Self {
            kind: JoinKind::Left,
            ..Self::inner(table, alias, left, right)
        }
    }
}

/// The `FROM ... JOIN ...` part shared by all three listing reads.
#[derive(Debug, Clone)]
pub struct BaseClause {
    pub table: &'static str,
    pub alias: &'static str,
    pub joins: Vec<Join>,
}

impl BaseClause {
    pub fn new(table: &'static str, alias: &'static str) -> Self {
        Self {
            table,
            alias,
            joins: Vec::new(),
        }
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// Aliases introduced by this clause, in declaration order.
    pub fn aliases(&self) -> Vec<&'static str> {
        std::iter::once(self.alias)
            .chain(self.joins.iter().map(|j| j.alias))
            .collect()
    }

    pub fn to_sql(&self) -> String {
        let mut sql = format!("FROM {} {}", self.table, self.alias);
        for join in &self.joins {
            let keyword = match join.kind {
                JoinKind::Inner => "JOIN",
                JoinKind::Left => "LEFT JOIN",
            };
            sql.push_str(&format!(
                " {keyword} {} {} ON {} = {}",
                join.table, join.alias, join.left, join.right
            ));
        }
        sql
    }
}

// ---------------------------------------------------------------------------
// ListingSpec
// ---------------------------------------------------------------------------

/// Default ordering of a listing, by display column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: usize,
    pub direction: SortDirection,
}

#[derive(Debug, Clone)]
pub struct ListingSpec {
    pub entity: &'static str,
    pub base: BaseClause,
    /// Unique key appended to every `ORDER BY` for stable paging.
    pub primary_key: ColumnRef,
    /// Foreign key to the employee dimension, if rows have an owner.
    pub owner_column: Option<ColumnRef>,
    pub columns: Vec<DisplayColumn>,
    pub default_sort: SortSpec,
    /// Roles allowed to list this entity at all. `None` means any role.
    pub allowed_roles: Option<&'static [&'static str]>,
}

impl ListingSpec {
    /// Whether `role` may list this entity.
    pub fn allows_role(&self, role: &str) -> bool {
        self.allowed_roles
            .map_or(true, |roles| roles.contains(&role))
    }

    /// The display column at `index` if it exists and is sortable.
    pub fn sortable_column(&self, index: usize) -> Option<&DisplayColumn> {
        self.columns.get(index).filter(|c| c.sortable)
    }

    /// Columns that take part in the search disjunction.
    pub fn searchable_columns(&self) -> impl Iterator<Item = (&DisplayColumn, SearchMode)> {
        self.columns
            .iter()
            .filter_map(|c| c.search.map(|mode| (c, mode)))
    }

    /// Check every identifier and column reference once, at registration.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let entity = self.entity;
        let ident = |s: &'static str| -> Result<(), RegistryError> {
            if is_identifier(s) {
                Ok(())
            } else {
                Err(RegistryError::InvalidIdentifier {
                    entity,
                    identifier: s.to_string(),
                })
            }
        };

        ident(entity)?;
        ident(self.base.table)?;
        let mut aliases = HashSet::new();
        for join in &self.base.joins {
            ident(join.table)?;
        }
        for alias in self.base.aliases() {
            ident(alias)?;
            if !aliases.insert(alias) {
                return Err(RegistryError::DuplicateAlias { entity, alias });
            }
        }

        let check_ref = |c: &ColumnRef| -> Result<(), RegistryError> {
            ident(c.table)?;
            ident(c.column)?;
            if aliases.contains(c.table) {
                Ok(())
            } else {
                Err(RegistryError::UnknownAlias {
                    entity,
                    reference: c.to_string(),
                })
            }
        };

        for join in &self.base.joins {
            check_ref(&join.left)?;
            check_ref(&join.right)?;
        }
        check_ref(&self.primary_key)?;
        if let Some(owner) = &self.owner_column {
            check_ref(owner)?;
        }

        if self.columns.is_empty() {
            return Err(RegistryError::NoColumns(entity));
        }
        let mut names = HashSet::new();
        for column in &self.columns {
            ident(column.name)?;
            if !names.insert(column.name) {
                return Err(RegistryError::DuplicateColumn {
                    entity,
                    name: column.name,
                });
            }
            if let Expr::Concat { separator, .. } = &column.expr {
                if separator.contains(|c: char| c == '\'' || c == '\\') {
                    return Err(RegistryError::InvalidSeparator { entity });
                }
            }
            for c in column.expr.column_refs().iter().chain(&column.then_by) {
                check_ref(c)?;
            }
        }

        let index = self.default_sort.column;
        match self.columns.get(index) {
            None => Err(RegistryError::DefaultSortOutOfRange { entity, index }),
            Some(c) if !c.sortable => Err(RegistryError::DefaultSortNotSortable {
                entity,
                column: c.name,
            }),
            Some(_) => Ok(()),
        }
    }
}
