// In memory activity registry.
//
// Purpose
// - Own the process-wide roster state without a database.
//
// Responsibilities
// - Store activities in seed order, keyed by name.
// - Run decide and evolve under the write lock so updates never interleave.
// - Restore the seed set on demand so tests start from a known state.

use crate::modules::activities::core::activity::{Activity, ActivityCatalog};
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::identifiers::ActivityName;
use crate::modules::activities::core::seed::seed_activities;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::shared::infrastructure::activity_store::{
    ActivityStore, ActivityStoreError, LoadedActivity, UpdateOutcome,
};
use indexmap::IndexMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct Entry {
    activity: Activity,
    version: i64,
}

fn versioned(catalog: &ActivityCatalog) -> IndexMap<String, Entry> {
    catalog
        .iter()
        .map(|(name, activity)| {
            (
                name.clone(),
                Entry {
                    activity: activity.clone(),
                    version: 0,
                },
            )
        })
        .collect()
}

pub struct InMemoryActivityRegistry {
    entries: RwLock<IndexMap<String, Entry>>,
    seed: ActivityCatalog,
    is_offline: bool,
    delay_update_ms: AtomicU64,
}

impl InMemoryActivityRegistry {
    pub fn new(seed: ActivityCatalog) -> Self {
        Self {
            entries: RwLock::new(versioned(&seed)),
            seed,
            is_offline: false,
            delay_update_ms: AtomicU64::new(0),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    /// Drops every change made since construction.
    pub async fn reset(&self) {
        *self.entries.write().await = versioned(&self.seed);
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Stalls every update between deciding and writing, with the write lock held.
    pub fn set_delay_update_ms(&self, ms: u64) {
        self.delay_update_ms.store(ms, Ordering::Relaxed);
    }
}

#[async_trait::async_trait]
impl ActivityStore for InMemoryActivityRegistry {
    async fn load(
        &self,
        name: &ActivityName,
    ) -> Result<Option<LoadedActivity>, ActivityStoreError> {
        if self.is_offline {
            return Err(ActivityStoreError::Backend("Activity registry offline".into()));
        }

        let guard = self.entries.read().await;
        Ok(guard.get(name.as_str()).map(|entry| LoadedActivity {
            activity: entry.activity.clone(),
            version: entry.version,
        }))
    }

    async fn update<F>(
        &self,
        name: &ActivityName,
        decide: F,
    ) -> Result<UpdateOutcome, ActivityStoreError>
    where
        F: FnOnce(&Activity) -> Decision + Send + 'static,
    {
        if self.is_offline {
            return Err(ActivityStoreError::Backend("Activity registry offline".into()));
        }

        let mut guard = self.entries.write().await;
        let Some(entry) = guard.get_mut(name.as_str()) else {
            return Ok(UpdateOutcome::Rejected {
                reason: DecideError::ActivityNotFound,
            });
        };

        let events = match decide(&entry.activity) {
            Decision::Accepted { events } => events,
            Decision::Rejected { reason } => return Ok(UpdateOutcome::Rejected { reason }),
        };

        let delay = self.delay_update_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        entry.activity = events.iter().fold(entry.activity.clone(), evolve);
        entry.version += 1;
        Ok(UpdateOutcome::Applied {
            activity: entry.activity.clone(),
            version: entry.version,
        })
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityRegistry {
    async fn list_activities(&self) -> anyhow::Result<ActivityCatalog> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity registry offline"));
        }

        let guard = self.entries.read().await;
        Ok(guard
            .iter()
            .map(|(name, entry)| (name.clone(), entry.activity.clone()))
            .collect())
    }
}
