//! Concurrent per-gym fetching.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use gymledger_shared::CollectorConfig;
use tracing::{debug, info, warn};

use super::error::CollectError;
use super::types::{Collection, FailedTenant, FetchFailure};
use crate::ledger::{FilterCriteria, LedgerEntry, LedgerQuery, validate_entry, validate_trainer};
use crate::roster::Trainer;
use crate::source::{LedgerSource, RosterSource, TenantDirectory};
use crate::tenant::{Tenant, TenantScope};

/// Outcome of fetching one gym.
enum TenantFetch {
    Fetched {
        tenant: Tenant,
        entries: Vec<LedgerEntry>,
        trainers: Vec<Trainer>,
        rejected_entries: usize,
        rejected_trainers: usize,
    },
    Failed(FailedTenant),
}

/// Fetches ledgers and rosters across gyms.
///
/// Gyms are fetched concurrently, at most `max_concurrent_fetches` at a
/// time. A finished gym frees its slot at once, even while a slower gym
/// ahead of it in the directory is still running. Results are merged in
/// directory order, so the output does not depend on which gym answers
/// first. The ledger and roster of one gym are
/// fetched together and share the per-gym timeout.
///
/// Dropping the future returned by [`collect`](Self::collect) cancels every
/// outstanding fetch.
#[derive(Clone)]
pub struct MultiTenantCollector {
    directory: Arc<dyn TenantDirectory>,
    ledger: Arc<dyn LedgerSource>,
    roster: Arc<dyn RosterSource>,
    max_concurrent_fetches: usize,
    fetch_timeout: Duration,
}

impl MultiTenantCollector {
    /// Creates a collector with the default limits.
    #[must_use]
    pub fn new(
        directory: Arc<dyn TenantDirectory>,
        ledger: Arc<dyn LedgerSource>,
        roster: Arc<dyn RosterSource>,
    ) -> Self {
        Self {
            directory,
            ledger,
            roster,
            max_concurrent_fetches: 0,
            fetch_timeout: Duration::ZERO,
        }
        .with_config(&CollectorConfig::default())
    }

    /// Creates a collector reading all three kinds of data from one store.
    #[must_use]
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: TenantDirectory + LedgerSource + RosterSource + 'static,
    {
        Self::new(store.clone(), store.clone(), store)
    }

    /// Applies concurrency and timeout limits.
    ///
    /// Both limits are raised to at least one (fetch, millisecond).
    #[must_use]
    pub fn with_config(mut self, config: &CollectorConfig) -> Self {
        self.max_concurrent_fetches = config.max_concurrent_fetches.max(1);
        self.fetch_timeout = Duration::from_millis(config.fetch_timeout_ms.max(1));
        self
    }

    /// Maximum number of gyms fetched at once.
    #[must_use]
    pub const fn max_concurrent_fetches(&self) -> usize {
        self.max_concurrent_fetches
    }

    /// Per-gym fetch timeout.
    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    /// Collects the ledger entries and trainers of every gym in `scope`.
    ///
    /// The kind and category of `criteria` are handed to the ledger source;
    /// the remaining predicates are left to the caller.
    ///
    /// # Errors
    ///
    /// Returns `CollectError::Directory` if the gym list cannot be read and
    /// `CollectError::UnknownTenant` if a single requested gym does not exist.
    /// A gym whose own fetch fails is reported in `failed_tenants` instead.
    pub async fn collect(
        &self,
        scope: TenantScope,
        criteria: &FilterCriteria,
    ) -> Result<Collection, CollectError> {
        let tenants = self.tenants_in_scope(scope).await?;
        let query = criteria.ledger_query();

        debug!(
            scope = %scope,
            tenants = tenants.len(),
            limit = self.max_concurrent_fetches,
            "Collecting gym data"
        );

        let query = &query;
        let mut fetches: Vec<(usize, TenantFetch)> = stream::iter(tenants.into_iter().enumerate())
            .map(move |(position, tenant)| async move {
                (position, self.fetch_tenant(tenant, query).await)
            })
            .buffer_unordered(self.max_concurrent_fetches)
            .collect()
            .await;
        fetches.sort_unstable_by_key(|(position, _)| *position);

        let collection = fetches
            .into_iter()
            .map(|(_, fetch)| fetch)
            .fold(Collection::default(), |mut collection, fetch| {
                match fetch {
                    TenantFetch::Fetched {
                        tenant,
                        entries,
                        trainers,
                        rejected_entries,
                        rejected_trainers,
                    } => {
                        collection.tenants.push(tenant);
                        collection.entries.extend(entries);
                        collection.trainers.extend(trainers);
                        collection.rejected_entries += rejected_entries;
                        collection.rejected_trainers += rejected_trainers;
                    }
                    TenantFetch::Failed(failed) => collection.failed_tenants.push(failed),
                }
                collection
            });

        info!(
            scope = %scope,
            collected = collection.tenants.len(),
            failed = collection.failed_tenants.len(),
            entries = collection.entries.len(),
            trainers = collection.trainers.len(),
            rejected_entries = collection.rejected_entries,
            rejected_trainers = collection.rejected_trainers,
            "Gym data collected"
        );

        Ok(collection)
    }

    async fn tenants_in_scope(&self, scope: TenantScope) -> Result<Vec<Tenant>, CollectError> {
        match scope {
            TenantScope::All => self.directory.list_tenants().await.map_err(|e| {
                warn!(error = %e, "Gym directory unavailable");
                CollectError::Directory(e)
            }),
            TenantScope::One(id) => {
                let tenant = self.directory.find_tenant(id).await.map_err(|e| {
                    warn!(tenant_id = %id, error = %e, "Gym directory unavailable");
                    CollectError::Directory(e)
                })?;
                tenant
                    .map(|tenant| vec![tenant])
                    .ok_or(CollectError::UnknownTenant(id))
            }
        }
    }

    async fn fetch_tenant(&self, tenant: Tenant, query: &LedgerQuery) -> TenantFetch {
        let both = async {
            tokio::join!(
                self.ledger.list_entries(tenant.id, query),
                self.roster.list_trainers(tenant.id),
            )
        };

        let failure = match tokio::time::timeout(self.fetch_timeout, both).await {
            Ok((Ok(entries), Ok(trainers))) => return Self::accept(tenant, entries, trainers),
            Ok((Err(e), _)) => FetchFailure::Ledger {
                message: e.to_string(),
            },
            Ok((Ok(_), Err(e))) => FetchFailure::Roster {
                message: e.to_string(),
            },
            Err(_) => FetchFailure::Timeout {
                after_ms: u64::try_from(self.fetch_timeout.as_millis()).unwrap_or(u64::MAX),
            },
        };

        warn!(
            tenant_id = %tenant.id,
            tenant_name = %tenant.name,
            reason = %failure,
            "Gym excluded from collection"
        );

        TenantFetch::Failed(FailedTenant {
            tenant_id: tenant.id,
            tenant_name: tenant.name,
            reason: failure,
        })
    }

    /// Drops records that fail boundary validation.
    fn accept(tenant: Tenant, entries: Vec<LedgerEntry>, trainers: Vec<Trainer>) -> TenantFetch {
        let fetched_entries = entries.len();
        let fetched_trainers = trainers.len();

        let entries: Vec<LedgerEntry> = entries
            .into_iter()
            .filter(|entry| match validate_entry(entry, tenant.id) {
                Ok(()) => true,
                Err(e) => {
                    warn!(tenant_id = %tenant.id, error = %e, "Ledger entry rejected");
                    false
                }
            })
            .collect();

        let trainers: Vec<Trainer> = trainers
            .into_iter()
            .filter(|trainer| match validate_trainer(trainer, tenant.id) {
                Ok(()) => true,
                Err(e) => {
                    warn!(tenant_id = %tenant.id, error = %e, "Trainer rejected");
                    false
                }
            })
            .collect();

        debug!(
            tenant_id = %tenant.id,
            entries = entries.len(),
            trainers = trainers.len(),
            "Gym fetched"
        );

        TenantFetch::Fetched {
            rejected_entries: fetched_entries - entries.len(),
            rejected_trainers: fetched_trainers - trainers.len(),
            tenant,
            entries,
            trainers,
        }
    }
}

impl std::fmt::Debug for MultiTenantCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiTenantCollector")
            .field("max_concurrent_fetches", &self.max_concurrent_fetches)
            .field("fetch_timeout", &self.fetch_timeout)
            .finish_non_exhaustive()
    }
}
