//! Row-level visibility for listings.
//!
//! Privileged roles see every row. Everyone else sees only the rows whose
//! owner column equals their linked employee id. The owner id comes from the
//! authenticated session (user id -> `users.employee_id`), never from request
//! input, and an actor without a linked employee sees nothing.

use async_trait::async_trait;
use tokio::sync::OnceCell;

use super::query::SqlBuilder;
use super::spec::{ColumnRef, ListingSpec};
use super::store::{BindValue, StoreError};
use super::ListingError;
use crate::roles::is_privileged;
use crate::types::DbId;

/// Filter fragment restricting which rows of one entity an actor can see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopePredicate {
    /// `TRUE`.
    Unrestricted,
    /// `column = $n` with the actor's employee id bound.
    Owner { column: ColumnRef, owner_id: DbId },
    /// `FALSE`; used whenever ownership cannot be established.
    Nothing,
}

impl ScopePredicate {
    /// Decide the predicate for `spec` given the actor's role and resolved
    /// owner id. Pure; the lookup itself is done by [`ScopeResolver`].
    pub fn for_actor(spec: &ListingSpec, role: &str, owner_id: Option<DbId>) -> Self {
        if is_privileged(role) {
            return ScopePredicate::Unrestricted;
        }
        match (spec.owner_column, owner_id) {
            (Some(column), Some(owner_id)) => ScopePredicate::Owner { column, owner_id },
            _ => ScopePredicate::Nothing,
        }
    }

    pub(crate) fn write_sql(&self, builder: &mut SqlBuilder) {
        match self {
            ScopePredicate::Unrestricted => {
                builder.push("TRUE");
            }
            ScopePredicate::Owner { column, owner_id } => {
                let placeholder = builder.bind(BindValue::BigInt(*owner_id));
                builder.push(&format!("{column} = {placeholder}"));
            }
            ScopePredicate::Nothing => {
                builder.push("FALSE");
            }
        }
    }
}

/// Maps an authenticated user to the employee that owns their rows.
#[async_trait]
pub trait OwnerDirectory: Send + Sync {
    async fn owner_id_for_user(&self, user_id: DbId) -> Result<Option<DbId>, StoreError>;
}

/// Per-request scope resolution for one actor.
///
/// The owner lookup runs at most once per resolver, however many entities
/// are resolved, and never for privileged roles.
pub struct ScopeResolver<'a> {
    directory: &'a dyn OwnerDirectory,
    role: String,
    user_id: DbId,
    owner: OnceCell<Option<DbId>>,
}

impl<'a> ScopeResolver<'a> {
    pub fn new(directory: &'a dyn OwnerDirectory, role: impl Into<String>, user_id: DbId) -> Self {
        Self {
            directory,
            role: role.into(),
            user_id,
            owner: OnceCell::new(),
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn user_id(&self) -> DbId {
        self.user_id
    }

    /// The actor's linked employee id, looked up on first use.
    pub async fn owner_id(&self) -> Result<Option<DbId>, ListingError> {
        let owner = self
            .owner
            .get_or_try_init(|| async {
                let owner = self.directory.owner_id_for_user(self.user_id).await;
                if let Ok(None) = owner {
                    tracing::warn!(
                        user_id = self.user_id,
                        "No employee linked to user; listings fail closed"
                    );
                }
                owner
            })
            .await
            .map_err(|e| {
                tracing::error!(user_id = self.user_id, error = %e, "Owner lookup failed");
                ListingError::Unavailable(e)
            })?;
        Ok(*owner)
    }

    /// Resolve the predicate for `spec`.
    pub async fn resolve(&self, spec: &ListingSpec) -> Result<ScopePredicate, ListingError> {
        if is_privileged(&self.role) || spec.owner_column.is_none() {
            return Ok(ScopePredicate::for_actor(spec, &self.role, None));
        }
        let owner_id = self.owner_id().await?;
        Ok(ScopePredicate::for_actor(spec, &self.role, owner_id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use assert_matches::assert_matches;

    use super::*;
    use crate::listing::registry::ListingRegistry;
    use crate::roles::{ROLE_ADMIN, ROLE_EMPLOYEE, ROLE_HR_STAFF};

    /// Directory returning a fixed answer and counting lookups.
    struct FakeDirectory {
        owner: Result<Option<DbId>, ()>,
        calls: AtomicUsize,
    }

    impl FakeDirectory {
        fn new(owner: Result<Option<DbId>, ()>) -> Self {
            Self {
                owner,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl OwnerDirectory for FakeDirectory {
        async fn owner_id_for_user(&self, _user_id: DbId) -> Result<Option<DbId>, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.owner
                .map_err(|()| StoreError::Backend("connection refused".into()))
        }
    }

    fn registry() -> ListingRegistry {
        ListingRegistry::hr().expect("HR registry is valid")
    }

    #[tokio::test]
    async fn privileged_roles_are_unrestricted_without_lookup() {
        let registry = registry();
        let directory = FakeDirectory::new(Ok(Some(7)));
        for role in [ROLE_ADMIN, ROLE_HR_STAFF] {
            let resolver = ScopeResolver::new(&directory, role, 1);
            for entity in ["attendance", "penalties", "departments"] {
                let spec = registry.get(entity).unwrap();
                assert_eq!(
                    resolver.resolve(spec).await.unwrap(),
                    ScopePredicate::Unrestricted
                );
            }
        }
        assert_eq!(directory.calls(), 0);
    }

    #[tokio::test]
    async fn other_roles_are_owner_restricted() {
        let registry = registry();
        let directory = FakeDirectory::new(Ok(Some(7)));
        let resolver = ScopeResolver::new(&directory, ROLE_EMPLOYEE, 42);

        let spec = registry.get("attendance").unwrap();
        assert_matches!(
            resolver.resolve(spec).await.unwrap(),
            ScopePredicate::Owner { owner_id: 7, column } if column.to_string() == "a.employee_id"
        );
    }

    #[tokio::test]
    async fn owner_lookup_runs_once_per_resolver() {
        let registry = registry();
        let directory = FakeDirectory::new(Ok(Some(7)));
        let resolver = ScopeResolver::new(&directory, ROLE_EMPLOYEE, 42);

        for entity in ["attendance", "bonus_points", "penalties", "bp_log", "yearly_bonus"] {
            resolver.resolve(registry.get(entity).unwrap()).await.unwrap();
        }
        assert_eq!(directory.calls(), 1);
    }

    #[tokio::test]
    async fn missing_owner_fails_closed() {
        let registry = registry();
        let directory = FakeDirectory::new(Ok(None));
        let resolver = ScopeResolver::new(&directory, ROLE_EMPLOYEE, 42);

        let spec = registry.get("attendance").unwrap();
        assert_eq!(resolver.resolve(spec).await.unwrap(), ScopePredicate::Nothing);
    }

    #[tokio::test]
    async fn entity_without_owner_column_fails_closed() {
        let registry = registry();
        let directory = FakeDirectory::new(Ok(Some(7)));
        let resolver = ScopeResolver::new(&directory, "Auditor", 42);

        let spec = registry.get("departments").unwrap();
        assert_eq!(resolver.resolve(spec).await.unwrap(), ScopePredicate::Nothing);
        assert_eq!(directory.calls(), 0);
    }

    #[tokio::test]
    async fn lookup_failure_is_unavailable_not_unrestricted() {
        let registry = registry();
        let directory = FakeDirectory::new(Err(()));
        let resolver = ScopeResolver::new(&directory, ROLE_EMPLOYEE, 42);

        let spec = registry.get("attendance").unwrap();
        assert_matches!(
            resolver.resolve(spec).await,
            Err(ListingError::Unavailable(_))
        );
    }

    #[test]
    fn predicates_render_with_bound_owner() {
        let registry = registry();
        let spec = registry.get("penalties").unwrap();

        let mut b = SqlBuilder::default();
        ScopePredicate::for_actor(spec, ROLE_EMPLOYEE, Some(7)).write_sql(&mut b);
        let q = b.finish();
        assert_eq!(q.sql, "p.employee_id = $1");
        assert_eq!(q.binds, vec![BindValue::BigInt(7)]);

        let mut b = SqlBuilder::default();
        ScopePredicate::for_actor(spec, ROLE_EMPLOYEE, None).write_sql(&mut b);
        assert_eq!(b.finish().sql, "FALSE");

        let mut b = SqlBuilder::default();
        ScopePredicate::for_actor(spec, ROLE_ADMIN, None).write_sql(&mut b);
        let q = b.finish();
        assert_eq!(q.sql, "TRUE");
        assert!(q.binds.is_empty());
    }
}
