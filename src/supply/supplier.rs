//! Job supply boundary: the one external call the engine depends on

use crate::error::{CareerCompassError, Result};
use crate::model::{JobOpportunity, RawJobRecord, SearchCriteria};
use async_trait::async_trait;
use std::path::PathBuf;

/// External source of job opportunities. Implementations must tolerate
/// records with missing optional fields; the [`RawJobRecord`] adapter
/// applies the documented defaults.
#[async_trait]
pub trait JobSupplier: Send + Sync {
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<JobOpportunity>>;
}

/// In-memory supplier. Stands in for the external job-board crawler and
/// backs the test suites.
pub struct StaticJobSupplier {
    jobs: Vec<JobOpportunity>,
}

impl StaticJobSupplier {
    pub fn new(jobs: Vec<JobOpportunity>) -> Self {
        Self { jobs }
    }
}

#[async_trait]
impl JobSupplier for StaticJobSupplier {
    async fn search(&self, _criteria: &SearchCriteria) -> Result<Vec<JobOpportunity>> {
        Ok(self.jobs.clone())
    }
}

/// Reads a JSON array of raw job records from disk. This is what the CLI
/// uses; each record is normalized through the ingestion adapter.
pub struct JsonFileSupplier {
    path: PathBuf,
}

impl JsonFileSupplier {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl JobSupplier for JsonFileSupplier {
    async fn search(&self, _criteria: &SearchCriteria) -> Result<Vec<JobOpportunity>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CareerCompassError::Supply(format!(
                "Failed to read job pool {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let raw_records: Vec<RawJobRecord> = serde_json::from_str(&content).map_err(|e| {
            CareerCompassError::Supply(format!("Failed to parse job pool: {}", e))
        })?;

        log::info!(
            "Loaded {} job records from {}",
            raw_records.len(),
            self.path.display()
        );

        Ok(raw_records.into_iter().map(JobOpportunity::from).collect())
    }
}

/// Supplier that always fails; used to exercise degraded-supply handling
pub struct FailingJobSupplier;

#[async_trait]
impl JobSupplier for FailingJobSupplier {
    async fn search(&self, _criteria: &SearchCriteria) -> Result<Vec<JobOpportunity>> {
        Err(CareerCompassError::Supply(
            "job supply unreachable".to_string(),
        ))
    }
}
