use serde::{Deserialize, Serialize};

/// Raw question identifiers of the intake form, mapped onto the fields the
/// scoring pipeline understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyColumns {
    pub name: String,
    pub readiness_level: String,
    pub mentor: String,
    pub english_level: String,
    pub location: String,
    pub industry: String,
}

impl Default for SurveyColumns {
    fn default() -> Self {
        Self {
            name: "1".to_string(),
            readiness_level: "14".to_string(),
            mentor: "15".to_string(),
            english_level: "17".to_string(),
            location: "30".to_string(),
            industry: "3".to_string(),
        }
    }
}

impl SurveyColumns {
    /// Columns without which a snapshot cannot be scored.
    pub fn required(&self) -> [&str; 2] {
        [self.name.as_str(), self.readiness_level.as_str()]
    }
}

/// Header positions resolved once per snapshot.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnIndex {
    pub(crate) name: usize,
    pub(crate) readiness_level: usize,
    pub(crate) mentor: Option<usize>,
    pub(crate) english_level: Option<usize>,
    pub(crate) location: Option<usize>,
    pub(crate) industry: Option<usize>,
}

impl ColumnIndex {
    /// Resolve the mapped columns against the snapshot headers. Returns the
    /// first missing required column on failure.
    pub(crate) fn resolve(headers: &[String], columns: &SurveyColumns) -> Result<Self, String> {
        let find = |column: &str| headers.iter().position(|header| header == column);
        let require = |column: &str| find(column).ok_or_else(|| column.to_string());

        let [name, readiness_level] = columns.required();
        let name = require(name)?;
        let readiness_level = require(readiness_level)?;

        Ok(Self {
            name,
            readiness_level,
            mentor: find(&columns.mentor),
            english_level: find(&columns.english_level),
            location: find(&columns.location),
            industry: find(&columns.industry),
        })
    }
}
