//! Chart-ready datasets for the dashboard. Rendering is left to the client;
//! these are the counts and bins a chart library consumes.

use super::domain::ScoredProject;
use super::segment::TrlSegment;
use serde::Serialize;
use std::collections::HashMap;

pub const HISTOGRAM_BINS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentApproval {
    pub segment: TrlSegment,
    pub segment_label: &'static str,
    pub approved: usize,
    pub not_approved: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDatasets {
    pub segment_distribution: Vec<CategoryCount>,
    pub approval_share: Vec<CategoryCount>,
    pub approval_by_segment: Vec<SegmentApproval>,
    pub early_score_histogram: Vec<HistogramBin>,
    pub industry_distribution: Vec<CategoryCount>,
    pub english_distribution: Vec<CategoryCount>,
    pub location_distribution: Vec<CategoryCount>,
}

impl ChartDatasets {
    pub fn build(projects: &[ScoredProject]) -> Self {
        Self {
            segment_distribution: category_counts(
                projects.iter().map(|project| project.segment.label()),
            ),
            approval_share: category_counts(
                projects
                    .iter()
                    .map(|project| approval_label(project.approved)),
            ),
            approval_by_segment: approval_by_segment(projects),
            early_score_histogram: histogram(
                projects.iter().map(|project| project.scores.early),
                HISTOGRAM_BINS,
            ),
            industry_distribution: category_counts(
                projects.iter().map(|project| project.industry.as_str()),
            ),
            english_distribution: category_counts(
                projects.iter().map(|project| project.english_level.label()),
            ),
            location_distribution: category_counts(
                projects.iter().map(|project| project.location.as_str()),
            ),
        }
    }
}

fn approval_label(approved: bool) -> &'static str {
    if approved {
        "Approved"
    } else {
        "Not approved"
    }
}

/// Count occurrences, highest first. Ties keep first-appearance order.
pub(crate) fn category_counts<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for label in labels {
        match positions.get(label) {
            Some(&position) => counts[position].count += 1,
            None => {
                positions.insert(label, counts.len());
                counts.push(CategoryCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Segments that occur in the cohort, in band order.
fn approval_by_segment(projects: &[ScoredProject]) -> Vec<SegmentApproval> {
    TrlSegment::ordered()
        .into_iter()
        .filter_map(|segment| {
            let (approved, not_approved) = projects
                .iter()
                .filter(|project| project.segment == segment)
                .fold((0, 0), |(yes, no), project| {
                    if project.approved {
                        (yes + 1, no)
                    } else {
                        (yes, no + 1)
                    }
                });

            (approved + not_approved > 0).then_some(SegmentApproval {
                segment,
                segment_label: segment.label(),
                approved,
                not_approved,
            })
        })
        .collect()
}

/// Equal-width bins spanning the observed range. A zero-width range gets
/// unit-width bins starting at the single observed value.
pub(crate) fn histogram(values: impl Iterator<Item = f64>, bins: usize) -> Vec<HistogramBin> {
    let values: Vec<f64> = values.filter(|value| value.is_finite()).collect();
    let (Some(min), Some(max)) = (
        values.iter().copied().reduce(f64::min),
        values.iter().copied().reduce(f64::max),
    ) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }

    let span = max - min;
    let width = if span > 0.0 { span / bins as f64 } else { 1.0 };

    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|index| HistogramBin {
            start: min + width * index as f64,
            end: min + width * (index + 1) as f64,
            count: 0,
        })
        .collect();

    for value in values {
        let index = (((value - min) / width).floor() as usize).min(bins - 1);
        histogram[index].count += 1;
    }

    histogram
}
