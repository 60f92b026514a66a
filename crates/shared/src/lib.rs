//! Shared types, errors, and configuration for GymLedger.
//!
//! This crate provides common types used across all other crates:
//! - Money type with decimal precision
//! - Typed IDs for tenants, trainers and ledger entries
//! - Caller roles and JWT claims
//! - Application-wide error types
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use auth::{Claims, Role};
pub use config::{AppConfig, CollectorConfig, JwtConfig, LedgerConfig};
pub use error::{AppError, AppResult};
pub use jwt::{JwtError, JwtService};
