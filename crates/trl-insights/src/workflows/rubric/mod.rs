//! Rubric dictionary: survey answer -> (TRL segment, points).

mod parser;

use crate::workflows::dataset::DatasetError;
use crate::workflows::readiness::segment::TrlSegment;
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

pub(crate) const SOURCE_NAME: &str = "rubric dictionary";

/// Points an exact answer earns toward a segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RubricAward {
    pub segment: TrlSegment,
    pub points: f64,
}

/// Immutable lookup table keyed by `(question, answer)`. Answers match
/// exactly, case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct RubricTable {
    awards: HashMap<(String, String), RubricAward>,
}

impl RubricTable {
    /// A table with no entries; scoring falls back to the bonus-only path.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DatasetError::NotFound {
                source_name: SOURCE_NAME,
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut awards = HashMap::new();
        for entry in parser::parse_entries(reader)? {
            let key = (entry.question, entry.answer);
            if let Some(previous) = awards.insert(key.clone(), entry.award) {
                warn!(
                    question = %key.0,
                    answer = %key.1,
                    ?previous,
                    "duplicate rubric entry; keeping the later row"
                );
            }
        }
        Ok(Self { awards })
    }

    pub fn lookup(&self, question: &str, answer: &str) -> Option<RubricAward> {
        self.awards
            .get(&(question.to_string(), answer.to_string()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.awards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.awards.is_empty()
    }
}

impl FromIterator<(String, String, RubricAward)> for RubricTable {
    fn from_iter<I: IntoIterator<Item = (String, String, RubricAward)>>(iter: I) -> Self {
        Self {
            awards: iter
                .into_iter()
                .map(|(question, answer, award)| ((question, answer), award))
                .collect(),
        }
    }
}
