//! The course service.
//!
//! Holds the three course sources and hands out one `ResolutionCoordinator` per
//! consuming view (an HTTP request, a CLI run). It also exposes the store
//! administration used by the binaries: schema creation, seeding, health.

use crate::domain::catalog::StaticCatalog;
use crate::domain::resolve::{CourseSource, Resolution, ResolutionCoordinator, UnconfiguredSource};
use crate::infra::remote::RemoteCourseClient;
use crate::storage::documents::{SecondaryCourseStore, SeedReport};
use std::sync::Arc;
use tracing::{info, warn};

/// Reachability of the secondary document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreHealth {
    NotConfigured,
    Reachable,
    Unreachable(String),
}

pub struct CourseService {
    catalog: Arc<StaticCatalog>,
    remote: Arc<dyn CourseSource>,
    secondary: Arc<dyn CourseSource>,
    store: Option<SecondaryCourseStore>,
}

impl CourseService {
    /// Builds a service over arbitrary sources (no store administration).
    pub fn new(
        catalog: Arc<StaticCatalog>,
        remote: Arc<dyn CourseSource>,
        secondary: Arc<dyn CourseSource>,
    ) -> Self {
        Self {
            catalog,
            remote,
            secondary,
            store: None,
        }
    }

    /// Builds a service whose secondary source is the Postgres document store.
    pub fn with_store(
        catalog: Arc<StaticCatalog>,
        remote: Arc<dyn CourseSource>,
        store: SecondaryCourseStore,
    ) -> Self {
        Self {
            catalog,
            remote,
            secondary: Arc::new(store.clone()),
            store: Some(store),
        }
    }

    /// Builds the service from the environment (`.env` is loaded first).
    ///
    /// Missing remote or store settings are not fatal: the affected source is
    /// replaced by an `UnconfiguredSource` and every cycle falls through past it.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let catalog = Arc::new(StaticCatalog::bundled());
        info!(courses = catalog.len(), "Loaded bundled course catalog");

        let remote: Arc<dyn CourseSource> = match RemoteCourseClient::from_env()? {
            Some(client) => {
                info!(base_url = %client.base_url(), "Remote course API configured");
                Arc::new(client)
            }
            None => {
                warn!("REMOTE_API_BASE_URL not set; remote lookups will fall through");
                Arc::new(UnconfiguredSource::new("remote-api"))
            }
        };

        match SecondaryCourseStore::from_env()? {
            Some(store) => Ok(Self::with_store(catalog, remote, store)),
            None => {
                warn!("DATABASE_URL not set; document store lookups will fall through");
                Ok(Self::new(
                    catalog,
                    remote,
                    Arc::new(UnconfiguredSource::new("document-store")),
                ))
            }
        }
    }

    pub fn catalog(&self) -> &Arc<StaticCatalog> {
        &self.catalog
    }

    pub fn store(&self) -> Option<&SecondaryCourseStore> {
        self.store.as_ref()
    }

    /// A fresh coordinator with its own displayed-course slot.
    pub fn coordinator(&self) -> ResolutionCoordinator {
        ResolutionCoordinator::new(
            self.catalog.clone(),
            self.remote.clone(),
            self.secondary.clone(),
        )
    }

    /// Runs a single resolution cycle on a fresh coordinator.
    pub async fn resolve(&self, identifier: &str) -> Resolution {
        self.coordinator().resolve(identifier).await
    }

    pub async fn store_health(&self) -> StoreHealth {
        match &self.store {
            None => StoreHealth::NotConfigured,
            Some(store) => match store.documents().ping().await {
                Ok(()) => StoreHealth::Reachable,
                Err(e) => StoreHealth::Unreachable(e.to_string()),
            },
        }
    }

    /// Creates the document table if needed and upserts the bundled catalog into it.
    pub async fn seed_store(&self) -> anyhow::Result<SeedReport> {
        let store = self
            .store
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set to seed the document store"))?;
        store.ensure_schema().await?;
        let report = store.seed_from_catalog(&self.catalog).await;
        info!(
            written = report.written,
            failed = report.failed.len(),
            "Seeded document store from bundled catalog"
        );
        Ok(report)
    }
}
