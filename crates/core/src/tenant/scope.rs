//! Role-based scope enforcement.

use gymledger_shared::Role;
use thiserror::Error;

use super::types::{Caller, TenantScope};

/// Errors raised while resolving the scope of a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// A gym owner arrived without a gym.
    #[error("Gym owner has no gym assigned")]
    MissingTenant,
}

/// Resolves the gyms a caller may read for a requested scope.
///
/// - `Admin` → the requested scope, `All` when nothing was requested
/// - `GymOwner` → always their own gym; the requested scope is ignored
///
/// # Errors
///
/// Returns `ScopeError::MissingTenant` for a gym owner without a gym.
pub fn resolve_scope(
    caller: &Caller,
    requested: Option<TenantScope>,
) -> Result<TenantScope, ScopeError> {
    match caller.role {
        Role::Admin => Ok(requested.unwrap_or_default()),
        Role::GymOwner => caller
            .tenant_id
            .map(TenantScope::One)
            .ok_or(ScopeError::MissingTenant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gymledger_shared::types::TenantId;
    use proptest::prelude::*;

    fn requested_strategy() -> impl Strategy<Value = Option<TenantScope>> {
        prop_oneof![
            Just(None),
            Just(Some(TenantScope::All)),
            any::<u128>().prop_map(|n| Some(TenantScope::One(TenantId::from_uuid(
                uuid::Uuid::from_u128(n)
            )))),
        ]
    }

    #[test]
    fn test_admin_defaults_to_all() {
        assert_eq!(
            resolve_scope(&Caller::admin(), None).unwrap(),
            TenantScope::All
        );
    }

    #[test]
    fn test_admin_may_pick_any_gym() {
        let gym = TenantId::new();
        assert_eq!(
            resolve_scope(&Caller::admin(), Some(TenantScope::One(gym))).unwrap(),
            TenantScope::One(gym)
        );
    }

    #[test]
    fn test_gym_owner_requesting_all_is_coerced() {
        let own = TenantId::new();
        let scope = resolve_scope(&Caller::gym_owner(own), Some(TenantScope::All)).unwrap();
        assert_eq!(scope, TenantScope::One(own));
    }

    #[test]
    fn test_gym_owner_requesting_other_gym_is_coerced() {
        let own = TenantId::new();
        let other = TenantId::new();
        let scope = resolve_scope(&Caller::gym_owner(own), Some(TenantScope::One(other))).unwrap();
        assert_eq!(scope, TenantScope::One(own));
    }

    #[test]
    fn test_gym_owner_without_gym_is_rejected() {
        let caller = Caller {
            role: Role::GymOwner,
            tenant_id: None,
        };
        assert_eq!(
            resolve_scope(&caller, Some(TenantScope::All)),
            Err(ScopeError::MissingTenant)
        );
    }

    proptest! {
        /// A gym owner's scope is their own gym whatever they ask for.
        #[test]
        fn prop_gym_owner_never_widens(requested in requested_strategy()) {
            let own = TenantId::new();
            let scope = resolve_scope(&Caller::gym_owner(own), requested).unwrap();
            prop_assert_eq!(scope, TenantScope::One(own));
        }
    }
}
