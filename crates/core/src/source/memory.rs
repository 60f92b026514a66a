//! In-memory sources with failure injection.
//!
//! Used by tests here and in dependent crates (`test-support` feature).

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use gymledger_shared::types::TenantId;

use super::{LedgerSource, RosterSource, SourceError, TenantDirectory};
use crate::ledger::{LedgerEntry, LedgerQuery};
use crate::roster::Trainer;
use crate::tenant::Tenant;

/// A store holding gyms, rosters and ledgers in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tenants: Vec<Tenant>,
    trainers: Vec<(TenantId, Trainer)>,
    entries: Vec<(TenantId, LedgerEntry)>,
    directory_down: bool,
    failing_ledgers: HashSet<TenantId>,
    failing_rosters: HashSet<TenantId>,
    delays: HashMap<TenantId, Duration>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
    ledger_calls: AtomicUsize,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a gym.
    #[must_use]
    pub fn with_tenant(mut self, tenant: Tenant) -> Self {
        self.tenants.push(tenant);
        self
    }

    /// Adds a trainer to its own gym's roster.
    #[must_use]
    pub fn with_trainer(mut self, trainer: Trainer) -> Self {
        self.trainers.push((trainer.tenant_id, trainer));
        self
    }

    /// Adds an entry to its own gym's ledger.
    #[must_use]
    pub fn with_entry(mut self, entry: LedgerEntry) -> Self {
        self.entries.push((entry.tenant_id, entry));
        self
    }

    /// Adds entries to their own gyms' ledgers.
    #[must_use]
    pub fn with_entries(self, entries: impl IntoIterator<Item = LedgerEntry>) -> Self {
        entries.into_iter().fold(self, Self::with_entry)
    }

    /// Files `entry` under `filed_under` whatever gym the entry names.
    #[must_use]
    pub fn with_misfiled_entry(mut self, filed_under: TenantId, entry: LedgerEntry) -> Self {
        self.entries.push((filed_under, entry));
        self
    }

    /// Makes the gym directory fail.
    #[must_use]
    pub fn with_directory_down(mut self) -> Self {
        self.directory_down = true;
        self
    }

    /// Makes ledger fetches for `tenant_id` fail.
    #[must_use]
    pub fn with_failing_ledger(mut self, tenant_id: TenantId) -> Self {
        self.failing_ledgers.insert(tenant_id);
        self
    }

    /// Makes roster fetches for `tenant_id` fail.
    #[must_use]
    pub fn with_failing_roster(mut self, tenant_id: TenantId) -> Self {
        self.failing_rosters.insert(tenant_id);
        self
    }

    /// Delays every fetch for `tenant_id`.
    #[must_use]
    pub fn with_delay(mut self, tenant_id: TenantId, delay: Duration) -> Self {
        self.delays.insert(tenant_id, delay);
        self
    }

    /// Highest number of ledger fetches observed running at once.
    #[must_use]
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    /// Number of ledger fetches started.
    #[must_use]
    pub fn ledger_calls(&self) -> usize {
        self.ledger_calls.load(Ordering::SeqCst)
    }

    /// Number of ledger fetches currently running.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    async fn wait(&self, tenant_id: TenantId) {
        if let Some(delay) = self.delays.get(&tenant_id) {
            tokio::time::sleep(*delay).await;
        }
    }
}

/// Decrements the in-flight counter when a fetch ends or is dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize, peak: &AtomicUsize) -> Self {
        let now = counter.fetch_add(1, Ordering::SeqCst) + 1;
        peak.fetch_max(now, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl TenantDirectory for InMemoryStore {
    async fn list_tenants(&self) -> Result<Vec<Tenant>, SourceError> {
        if self.directory_down {
            return Err(SourceError::unavailable("gym directory is down"));
        }
        Ok(self.tenants.clone())
    }
}

#[async_trait]
impl LedgerSource for InMemoryStore {
    async fn list_entries(
        &self,
        tenant_id: TenantId,
        query: &LedgerQuery,
    ) -> Result<Vec<LedgerEntry>, SourceError> {
        self.ledger_calls.fetch_add(1, Ordering::SeqCst);
        let _guard = InFlight::enter(&self.in_flight, &self.peak_in_flight);
        self.wait(tenant_id).await;

        if self.failing_ledgers.contains(&tenant_id) {
            return Err(SourceError::unavailable(format!(
                "ledger store unreachable for gym {tenant_id}"
            )));
        }

        Ok(self
            .entries
            .iter()
            .filter(|(filed_under, entry)| *filed_under == tenant_id && query.matches(entry))
            .map(|(_, entry)| entry.clone())
            .collect())
    }
}

#[async_trait]
impl RosterSource for InMemoryStore {
    async fn list_trainers(&self, tenant_id: TenantId) -> Result<Vec<Trainer>, SourceError> {
        self.wait(tenant_id).await;

        if self.failing_rosters.contains(&tenant_id) {
            return Err(SourceError::unavailable(format!(
                "roster store unreachable for gym {tenant_id}"
            )));
        }

        Ok(self
            .trainers
            .iter()
            .filter(|(filed_under, _)| *filed_under == tenant_id)
            .map(|(_, trainer)| trainer.clone())
            .collect())
    }
}
