//! `SeaORM` entities.

pub mod gyms;
pub mod ledger_entries;
pub mod sea_orm_active_enums;
pub mod trainers;
