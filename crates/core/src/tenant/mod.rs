//! Gyms (tenants), callers and scope enforcement.
//!
//! A gym is the unit of data isolation. Every read goes through
//! [`resolve_scope`] so a gym owner can never widen their own scope.

pub mod scope;
pub mod types;

pub use scope::{ScopeError, resolve_scope};
pub use types::{Caller, Tenant, TenantScope};
