use crate::cli::DataArgs;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use trl_insights::config::DataConfig;
use trl_insights::workflows::readiness::{FormApiSource, ReadinessService, SnapshotStore};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn apply_data_overrides(mut data: DataConfig, args: DataArgs) -> DataConfig {
    if let Some(snapshot) = args.snapshot {
        data.snapshot_path = snapshot;
    }
    if let Some(rubric) = args.rubric {
        data.rubric_path = rubric;
    }
    data
}

pub(crate) fn readiness_service(data: &DataConfig) -> ReadinessService<FormApiSource> {
    ReadinessService::new(
        SnapshotStore::new(data.snapshot_path.clone()),
        FormApiSource::new(data.form_api.clone()),
        data.rubric_path.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use trl_insights::config::FormApiConfig;

    fn data() -> DataConfig {
        DataConfig {
            snapshot_path: PathBuf::from(DataConfig::DEFAULT_SNAPSHOT_PATH),
            rubric_path: PathBuf::from(DataConfig::DEFAULT_RUBRIC_PATH),
            form_api: FormApiConfig {
                url: None,
                username: None,
                password: None,
                page_size: 100,
            },
        }
    }

    #[test]
    fn overrides_replace_only_given_paths() {
        let data = apply_data_overrides(
            data(),
            DataArgs {
                snapshot: Some(PathBuf::from("/tmp/snapshot.csv")),
                rubric: None,
            },
        );

        assert_eq!(data.snapshot_path, PathBuf::from("/tmp/snapshot.csv"));
        assert_eq!(data.rubric_path, PathBuf::from("diccionario.csv"));
    }

    #[test]
    fn service_points_at_configured_files() {
        let service = readiness_service(&data());

        assert_eq!(service.snapshot_path(), PathBuf::from("datos_formularios.csv"));
        assert_eq!(service.rubric_path(), PathBuf::from("diccionario.csv"));
    }
}
