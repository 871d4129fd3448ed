//! Generic server-side listing: paging, search, sort and row-level scoping
//! for any registered entity.
//!
//! The flow for one request is:
//!
//! 1. decode [`ListingParams`] into a validated [`ListingRequest`];
//! 2. look up the entity's [`ListingSpec`] in the [`ListingRegistry`];
//! 3. resolve the actor's [`ScopePredicate`] through a [`ScopeResolver`];
//! 4. run [`ListingEngine::list`] against a [`RowStore`].

pub mod engine;
pub mod entities;
pub mod query;
pub mod registry;
pub mod request;
pub mod scope;
pub mod spec;
pub mod store;

pub use engine::{ListingEngine, ListingResult};
pub use registry::ListingRegistry;
pub use request::{ListingParams, ListingRequest, SortDirection};
pub use scope::{OwnerDirectory, ScopePredicate, ScopeResolver};
pub use spec::ListingSpec;
pub use store::{BindValue, Row, RowStore, StoreError};

/// Failure of a single listing call.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    /// Pagination or search input violates the caller contract. Raised
    /// before any storage access.
    #[error("Invalid listing request: {0}")]
    InvalidRequest(String),

    /// The row store failed or timed out. The source carries the detail
    /// for logs; callers only see that the listing is unavailable.
    #[error("Listing unavailable")]
    Unavailable(#[source] StoreError),

    #[error("Unknown listing entity: {0}")]
    UnknownEntity(String),
}

/// A [`ListingSpec`] rejected at registration.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("{entity}: `{identifier}` is not a valid SQL identifier")]
    InvalidIdentifier {
        entity: &'static str,
        identifier: String,
    },

    #[error("{entity}: alias `{alias}` is declared twice")]
    DuplicateAlias {
        entity: &'static str,
        alias: &'static str,
    },

    #[error("{entity}: `{reference}` uses an alias not declared in the base clause")]
    UnknownAlias {
        entity: &'static str,
        reference: String,
    },

    #[error("{0}: no display columns")]
    NoColumns(&'static str),

    #[error("{entity}: display column `{name}` is declared twice")]
    DuplicateColumn {
        entity: &'static str,
        name: &'static str,
    },

    #[error("{entity}: concatenation separator contains a quote or backslash")]
    InvalidSeparator { entity: &'static str },

    #[error("{entity}: default sort index {index} is out of range")]
    DefaultSortOutOfRange { entity: &'static str, index: usize },

    #[error("{entity}: default sort column `{column}` is not sortable")]
    DefaultSortNotSortable {
        entity: &'static str,
        column: &'static str,
    },

    #[error("{0}: entity is already registered")]
    DuplicateEntity(&'static str),
}
