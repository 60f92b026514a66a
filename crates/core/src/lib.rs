//! Core business logic for GymLedger.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Data arrives through the async traits in [`source`]; everything else is a
//! pure function of what those sources return for one call.
//!
//! # Modules
//!
//! - `tenant` - Gyms, caller roles and scope enforcement
//! - `roster` - Trainer roster entries
//! - `ledger` - Ledger entries, payment history, filters and aggregation
//! - `source` - Traits for the external gym, roster and ledger stores
//! - `collector` - Concurrent fan-out across gyms with failure isolation
//! - `finance` - Finance summary and salary view read models

pub mod collector;
pub mod finance;
pub mod ledger;
pub mod roster;
pub mod source;
pub mod tenant;
