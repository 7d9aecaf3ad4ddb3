//! Survey snapshot ingestion: the flat table of form submissions, its
//! column mapping, and the upstream form API that materializes it.

mod fetch;
mod mapping;
mod normalizer;
mod parser;

pub use fetch::{FetchError, FormApiClient, FormCredentials};
pub use mapping::SurveyColumns;

use crate::workflows::dataset::DatasetError;
use crate::workflows::readiness::domain::EnglishLevel;
use mapping::ColumnIndex;
use parser::RawTable;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

const SOURCE_NAME: &str = "survey snapshot";

/// Flat tabular snapshot of form submissions, columns keyed by raw question
/// identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveySnapshot {
    table: RawTable,
}

impl SurveySnapshot {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self {
            table: RawTable { headers, rows },
        }
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
        let table = parser::read_table(reader)?;
        Ok(Self { table })
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), DatasetError> {
        parser::write_table(&self.table, writer)?;
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.table.headers
    }

    pub fn len(&self) -> usize {
        self.table.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.rows.is_empty()
    }

    /// Normalize every row into a [`SurveyResponse`]. Fails only when a
    /// required column is absent; per-field problems coerce to defaults.
    pub fn responses(&self, columns: &SurveyColumns) -> Result<Vec<SurveyResponse>, DatasetError> {
        let index = ColumnIndex::resolve(&self.table.headers, columns).map_err(|column| {
            DatasetError::MissingColumn {
                source_name: SOURCE_NAME,
                column,
            }
        })?;

        Ok(self
            .table
            .rows
            .iter()
            .map(|row| SurveyResponse::from_row(&self.table.headers, row, &index))
            .collect())
    }
}

/// One submission with its raw answers and the normalized fields used by
/// scoring and insight generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyResponse {
    pub answers: Vec<(String, String)>,
    pub name: String,
    pub readiness_level: f64,
    pub mentor: bool,
    pub english_level: EnglishLevel,
    pub industry: String,
    pub location: String,
}

impl SurveyResponse {
    fn from_row(headers: &[String], row: &[String], index: &ColumnIndex) -> Self {
        let cell = |position: usize| row.get(position).map(String::as_str).unwrap_or("");
        let optional = |position: Option<usize>| position.map(|position| cell(position));

        let answers = headers
            .iter()
            .zip(row.iter())
            .filter(|(_, answer)| !answer.is_empty())
            .map(|(column, answer)| (column.clone(), answer.clone()))
            .collect();

        Self {
            answers,
            name: normalizer::clean_text(cell(index.name)),
            readiness_level: normalizer::readiness_level(cell(index.readiness_level)),
            mentor: optional(index.mentor)
                .map(normalizer::mentor_flag)
                .unwrap_or(false),
            english_level: optional(index.english_level)
                .map(EnglishLevel::parse)
                .unwrap_or(EnglishLevel::Unspecified),
            industry: normalizer::industry(optional(index.industry)),
            location: normalizer::location(optional(index.location)),
        }
    }

    /// Build a response from field values directly, bypassing the column
    /// mapping. Handy for callers that already hold normalized data.
    pub fn builder(name: impl Into<String>, readiness_level: f64) -> SurveyResponseBuilder {
        SurveyResponseBuilder {
            response: Self {
                answers: Vec::new(),
                name: name.into(),
                readiness_level,
                mentor: false,
                english_level: EnglishLevel::Unspecified,
                industry: normalizer::UNSPECIFIED.to_string(),
                location: normalizer::UNSPECIFIED.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct SurveyResponseBuilder {
    response: SurveyResponse,
}

impl SurveyResponseBuilder {
    pub fn answer(mut self, column: impl Into<String>, answer: impl Into<String>) -> Self {
        self.response.answers.push((column.into(), answer.into()));
        self
    }

    pub fn mentor(mut self, mentor: bool) -> Self {
        self.response.mentor = mentor;
        self
    }

    pub fn english_level(mut self, level: EnglishLevel) -> Self {
        self.response.english_level = level;
        self
    }

    pub fn build(self) -> SurveyResponse {
        self.response
    }
}
