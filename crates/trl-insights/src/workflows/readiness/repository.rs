use std::fs::{self, File};
use std::future::Future;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::service::ReadinessError;
use crate::config::FormApiConfig;
use crate::workflows::dataset::DatasetError;
use crate::workflows::survey::{FetchError, FormApiClient, SurveySnapshot};

/// Upstream that can produce a fresh snapshot, so the store can be exercised
/// without the network.
pub trait SnapshotSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<SurveySnapshot, FetchError>> + Send;
}

/// Form API source built from configuration. Missing settings surface when a
/// fetch is attempted, not at startup.
#[derive(Debug, Clone)]
pub struct FormApiSource {
    config: FormApiConfig,
}

impl FormApiSource {
    pub fn new(config: FormApiConfig) -> Self {
        Self { config }
    }
}

impl SnapshotSource for FormApiSource {
    async fn fetch(&self) -> Result<SurveySnapshot, FetchError> {
        let (client, credentials) = FormApiClient::from_config(&self.config)?;
        client.fetch_snapshot(&credentials).await
    }
}

/// When the store goes to the upstream source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Fetch only when no snapshot exists on disk.
    #[default]
    LoadIfAbsent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Materialization {
    Reused { records: usize },
    Fetched { records: usize },
}

impl Materialization {
    pub fn records(&self) -> usize {
        match self {
            Self::Reused { records } | Self::Fetched { records } => *records,
        }
    }
}

/// Flat-file snapshot store. Reads are independent; materialization is
/// serialized through a single-writer guard.
#[derive(Debug)]
pub struct SnapshotStore {
    path: PathBuf,
    policy: RefreshPolicy,
    writer: Mutex<()>,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_policy(path, RefreshPolicy::default())
    }

    pub fn with_policy(path: impl Into<PathBuf>, policy: RefreshPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn load(&self) -> Result<SurveySnapshot, DatasetError> {
        SurveySnapshot::from_path(&self.path)
    }

    /// Make sure a snapshot is on disk. Under `LoadIfAbsent` an existing file
    /// is reused as is; otherwise the source is fetched once and written.
    pub async fn ensure_materialized<S>(&self, source: &S) -> Result<Materialization, ReadinessError>
    where
        S: SnapshotSource,
    {
        let _guard = self.writer.lock().await;

        match self.policy {
            RefreshPolicy::LoadIfAbsent if self.exists() => {
                let records = self.load()?.len();
                info!(path = %self.path.display(), records, "reusing existing snapshot");
                Ok(Materialization::Reused { records })
            }
            RefreshPolicy::LoadIfAbsent => {
                let snapshot = source.fetch().await?;
                self.write(&snapshot)?;
                info!(
                    path = %self.path.display(),
                    records = snapshot.len(),
                    "snapshot materialized from form API"
                );
                Ok(Materialization::Fetched {
                    records: snapshot.len(),
                })
            }
        }
    }

    /// Write through a sibling temp file so readers never see a partial CSV.
    fn write(&self, snapshot: &SurveySnapshot) -> Result<(), DatasetError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let staging = self.staging_path();
        let written = File::create(&staging)
            .map_err(DatasetError::from)
            .and_then(|file| snapshot.write_csv(BufWriter::new(file)))
            .and_then(|()| fs::rename(&staging, &self.path).map_err(DatasetError::from));

        if written.is_err() && staging.exists() {
            if let Err(err) = fs::remove_file(&staging) {
                warn!(path = %staging.display(), error = %err, "could not remove staging snapshot");
            }
        }
        written
    }

    fn staging_path(&self) -> PathBuf {
        self.path.with_extension("csv.partial")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingSource {
        calls: AtomicUsize,
        snapshot: SurveySnapshot,
    }

    impl CountingSource {
        fn new(rows: usize) -> Self {
            let headers = vec!["1".to_string(), "14".to_string()];
            let rows = (0..rows)
                .map(|index| vec![format!("Project {index}"), "5".to_string()])
                .collect();
            Self {
                calls: AtomicUsize::new(0),
                snapshot: SurveySnapshot::new(headers, rows),
            }
        }
    }

    impl SnapshotSource for CountingSource {
        async fn fetch(&self) -> Result<SurveySnapshot, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.snapshot.clone())
        }
    }

    struct FailingSource;

    impl SnapshotSource for FailingSource {
        async fn fetch(&self) -> Result<SurveySnapshot, FetchError> {
            Err(FetchError::MissingConfiguration("URL (TRL_FORM_API_URL)"))
        }
    }

    #[tokio::test]
    async fn fetches_once_then_reuses() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SnapshotStore::new(dir.path().join("nested").join("snapshot.csv"));
        let source = CountingSource::new(3);

        let first = store.ensure_materialized(&source).await.expect("fetch");
        let second = store.ensure_materialized(&source).await.expect("reuse");

        assert_eq!(first, Materialization::Fetched { records: 3 });
        assert_eq!(second, Materialization::Reused { records: 3 });
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.load().expect("loads").len(), 3);
    }

    #[tokio::test]
    async fn concurrent_refreshes_fetch_a_single_time() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Arc::new(SnapshotStore::new(dir.path().join("snapshot.csv")));
        let source = Arc::new(CountingSource::new(2));

        let tasks: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                let source = Arc::clone(&source);
                tokio::spawn(async move { store.ensure_materialized(source.as_ref()).await })
            })
            .collect();

        for task in tasks {
            let outcome = task.await.expect("task joins").expect("materializes");
            assert_eq!(outcome.records(), 2);
        }
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn fetch_failure_leaves_no_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SnapshotStore::new(dir.path().join("snapshot.csv"));

        let err = store
            .ensure_materialized(&FailingSource)
            .await
            .expect_err("fetch fails");

        assert!(matches!(err, ReadinessError::Fetch(_)));
        assert!(!store.exists());
    }

    #[tokio::test]
    async fn failed_write_removes_staging_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("snapshot.csv");
        fs::create_dir(&target).expect("directory in the way");
        fs::write(target.join("keep.txt"), "occupied").expect("seed directory");
        let store = SnapshotStore::new(target.clone());

        let err = store
            .ensure_materialized(&CountingSource::new(2))
            .await
            .expect_err("rename onto a directory fails");

        assert!(matches!(err, ReadinessError::Dataset(DatasetError::Io(_))));
        assert!(!store.staging_path().exists());
    }

    #[test]
    fn load_reports_missing_snapshot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SnapshotStore::new(dir.path().join("absent.csv"));

        let err = store.load().expect_err("no file");
        assert!(matches!(err, DatasetError::NotFound { .. }));
    }
}
