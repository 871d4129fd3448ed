use std::collections::HashMap;

use super::spec::ListingSpec;
use super::RegistryError;

/// Immutable-after-startup map from entity name to its [`ListingSpec`].
///
/// Built once (see [`ListingRegistry::hr`]) and shared read-only behind an
/// `Arc`; lookups need no synchronization.
#[derive(Debug, Default)]
pub struct ListingRegistry {
    specs: HashMap<&'static str, ListingSpec>,
}

impl ListingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add `spec`. Registering the same entity twice fails.
    pub fn register(&mut self, spec: ListingSpec) -> Result<(), RegistryError> {
        spec.validate()?;
        if self.specs.contains_key(spec.entity) {
            return Err(RegistryError::DuplicateEntity(spec.entity));
        }
        self.specs.insert(spec.entity, spec);
        Ok(())
    }

    pub fn get(&self, entity: &str) -> Option<&ListingSpec> {
        self.specs.get(entity)
    }

    /// Registered entity names, sorted.
    pub fn entities(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.specs.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::listing::request::SortDirection;
    use crate::listing::spec::{col, BaseClause, DisplayColumn, SortSpec, ValueKind};

    fn roles_spec() -> ListingSpec {
        ListingSpec {
            entity: "roles",
            base: BaseClause::new("roles", "r"),
            primary_key: col("r", "id"),
            owner_column: None,
            columns: vec![
                DisplayColumn::new("id", col("r", "id"), ValueKind::Integer),
                DisplayColumn::new("name", col("r", "name"), ValueKind::Text),
            ],
            default_sort: SortSpec {
                column: 0,
                direction: SortDirection::Asc,
            },
            allowed_roles: None,
        }
    }

    #[test]
    fn register_and_get() {
        let mut registry = ListingRegistry::new();
        registry.register(roles_spec()).unwrap();
        assert_eq!(registry.get("roles").map(|s| s.entity), Some("roles"));
        assert!(registry.get("salaries").is_none());
        assert_eq!(registry.entities(), vec!["roles"]);
    }

    #[test]
    fn duplicate_entity_is_rejected() {
        let mut registry = ListingRegistry::new();
        registry.register(roles_spec()).unwrap();
        assert_matches!(
            registry.register(roles_spec()),
            Err(RegistryError::DuplicateEntity("roles"))
        );
    }

    #[test]
    fn invalid_spec_is_not_registered() {
        let mut registry = ListingRegistry::new();
        let mut spec = roles_spec();
        spec.columns.clear();
        assert_matches!(registry.register(spec), Err(RegistryError::NoColumns("roles")));
        assert!(registry.get("roles").is_none());
    }
}
