use std::path::PathBuf;

/// Failure to read one of the tabular inputs (survey snapshot or rubric).
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("{source_name} not found at {}", path.display())]
    NotFound {
        source_name: &'static str,
        path: PathBuf,
    },
    #[error("{source_name} is missing required column '{column}'")]
    MissingColumn {
        source_name: &'static str,
        column: String,
    },
    #[error("{source_name} row {row}: invalid {column} value '{value}'")]
    InvalidValue {
        source_name: &'static str,
        row: u64,
        column: &'static str,
        value: String,
    },
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to access dataset: {0}")]
    Io(#[from] std::io::Error),
}

impl DatasetError {
    /// Whether the failure stems from the shape of the input rather than its
    /// availability.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn { .. } | Self::InvalidValue { .. } | Self::Csv(_)
        )
    }
}
