use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;
use tempfile::TempDir;

use crate::workflows::readiness::repository::{SnapshotSource, SnapshotStore};
use crate::workflows::readiness::{readiness_router, ReadinessService};
use crate::workflows::survey::{FetchError, SurveySnapshot};

pub(super) const RUBRIC_CSV: &str = "\
pregunta,respuesta,segmento,puntaje
22,Idea on paper,TRL 1-3,45
22,Prototype tested,TRL 4-7,30
23,Market launch,TRL 8-9,60
24,Pilot with users,TRL 8-9,20
";

pub(super) const SNAPSHOT_CSV: &str = "\
1,14,15,17,30,3,22,23,24
Solar Dryer,5,Si,Avanzado,bogota,,Something else,,
Water Sensor,9,No,,MEDELLIN,Agro,Idea on paper,,
Market Platform,8,no,Intermedio,nan,Fintech,,Market launch,Pilot with users
Solar Kiln,2,,Básico,,Energy,Idea on paper,,
";

/// Source that hands out a fixed snapshot.
pub(super) struct FixedSource {
    snapshot: SurveySnapshot,
}

impl FixedSource {
    pub(super) fn new(csv: &str) -> Self {
        Self {
            snapshot: SurveySnapshot::from_reader(csv.as_bytes()).expect("fixture parses"),
        }
    }
}

impl SnapshotSource for FixedSource {
    async fn fetch(&self) -> Result<SurveySnapshot, FetchError> {
        Ok(self.snapshot.clone())
    }
}

pub(super) struct UnreachableSource;

impl SnapshotSource for UnreachableSource {
    async fn fetch(&self) -> Result<SurveySnapshot, FetchError> {
        Err(FetchError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        })
    }
}

pub(super) struct Fixture {
    pub(super) dir: TempDir,
}

impl Fixture {
    pub(super) fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub(super) fn snapshot_path(&self) -> std::path::PathBuf {
        self.dir.path().join("datos_formularios.csv")
    }

    pub(super) fn rubric_path(&self) -> std::path::PathBuf {
        self.dir.path().join("diccionario.csv")
    }

    pub(super) fn with_snapshot(self, csv: &str) -> Self {
        write(&self.snapshot_path(), csv);
        self
    }

    pub(super) fn with_rubric(self, csv: &str) -> Self {
        write(&self.rubric_path(), csv);
        self
    }

    pub(super) fn service<S>(&self, source: S) -> ReadinessService<S>
    where
        S: SnapshotSource + 'static,
    {
        ReadinessService::new(
            SnapshotStore::new(self.snapshot_path()),
            source,
            self.rubric_path(),
        )
    }

    pub(super) fn router(&self) -> axum::Router {
        readiness_router(Arc::new(self.service(UnreachableSource)))
    }
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).expect("fixture writes");
}

pub(super) fn seeded() -> Fixture {
    Fixture::new()
        .with_snapshot(SNAPSHOT_CSV)
        .with_rubric(RUBRIC_CSV)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
