//! Tenant domain types.

use gymledger_shared::Role;
use gymledger_shared::types::TenantId;
use serde::{Deserialize, Serialize};

/// A gym location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    /// Gym identifier.
    pub id: TenantId,
    /// Display name.
    pub name: String,
}

impl Tenant {
    /// Creates a new tenant.
    #[must_use]
    pub fn new(id: TenantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The set of gyms a query reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "tenant_id", rename_all = "snake_case")]
pub enum TenantScope {
    /// Every known gym.
    #[default]
    All,
    /// A single gym.
    One(TenantId),
}

impl TenantScope {
    /// Returns true if data owned by `tenant_id` is visible in this scope.
    #[must_use]
    pub fn contains(&self, tenant_id: TenantId) -> bool {
        match self {
            Self::All => true,
            Self::One(id) => *id == tenant_id,
        }
    }
}

impl From<Option<TenantId>> for TenantScope {
    fn from(tenant_id: Option<TenantId>) -> Self {
        tenant_id.map_or(Self::All, Self::One)
    }
}

impl std::fmt::Display for TenantScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::One(id) => write!(f, "{id}"),
        }
    }
}

/// Who is asking.
///
/// Built from verified token claims; never from request parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    /// Caller role.
    pub role: Role,
    /// The caller's own gym.
    pub tenant_id: Option<TenantId>,
}

impl Caller {
    /// An administrator.
    #[must_use]
    pub const fn admin() -> Self {
        Self {
            role: Role::Admin,
            tenant_id: None,
        }
    }

    /// The owner of `tenant_id`.
    #[must_use]
    pub const fn gym_owner(tenant_id: TenantId) -> Self {
        Self {
            role: Role::GymOwner,
            tenant_id: Some(tenant_id),
        }
    }
}
