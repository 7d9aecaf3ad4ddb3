use super::{RubricAward, SOURCE_NAME};
use crate::workflows::dataset::DatasetError;
use crate::workflows::readiness::segment::TrlSegment;
use serde::Deserialize;
use std::io::Read;

/// Accepted header spellings per required column.
const COLUMNS: [(&str, &str); 4] = [
    ("question", "pregunta"),
    ("answer", "respuesta"),
    ("segment", "segmento"),
    ("points", "puntaje"),
];

#[derive(Debug, Deserialize)]
struct RubricRow {
    #[serde(alias = "pregunta")]
    question: String,
    #[serde(alias = "respuesta")]
    answer: String,
    #[serde(alias = "segmento")]
    segment: String,
    #[serde(alias = "puntaje")]
    points: String,
}

pub(crate) struct ParsedEntry {
    pub(crate) question: String,
    pub(crate) answer: String,
    pub(crate) award: RubricAward,
}

pub(crate) fn parse_entries<R: Read>(reader: R) -> Result<Vec<ParsedEntry>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').to_lowercase())
        .collect();
    for (column, alias) in COLUMNS {
        if !headers.iter().any(|header| header == column || header == alias) {
            return Err(DatasetError::MissingColumn {
                source_name: SOURCE_NAME,
                column: column.to_string(),
            });
        }
    }
    let headers = csv::StringRecord::from(headers);

    let mut entries = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|position| position.line()).unwrap_or_default();
        let row: RubricRow = record.deserialize(Some(&headers))?;

        if row.answer.is_empty() {
            continue;
        }

        let segment =
            TrlSegment::from_label(&row.segment).ok_or_else(|| DatasetError::InvalidValue {
                source_name: SOURCE_NAME,
                row: line,
                column: "segment",
                value: row.segment.clone(),
            })?;

        let points = row
            .points
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|points| points.is_finite())
            .ok_or_else(|| DatasetError::InvalidValue {
                source_name: SOURCE_NAME,
                row: line,
                column: "points",
                value: row.points.clone(),
            })?;

        entries.push(ParsedEntry {
            question: row.question,
            answer: row.answer,
            award: RubricAward { segment, points },
        });
    }

    Ok(entries)
}
