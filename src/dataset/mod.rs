//! Labeled dataset loading.
//!
//! The input format is plain text, one sample per line, comma-separated
//! floating-point fields with the label in the last field and no header row.

use std::path::Path;

use csv::ReaderBuilder;
use log::debug;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::{ParseError, Result};

/// A rectangular labeled dataset: one row per sample, the label split off
/// from the trailing field of each input line.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Array2<f64>,
    labels: Array1<f64>,
}

impl Dataset {
    /// Assembles a dataset from an already-parsed feature block and labels.
    ///
    /// # Panics
    /// Panics when `features` and `labels` disagree on the sample count.
    pub fn new(features: Array2<f64>, labels: Array1<f64>) -> Self {
        assert_eq!(
            features.nrows(),
            labels.len(),
            "feature rows and labels must match"
        );
        Dataset { features, labels }
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.features.nrows() == 0
    }

    pub fn features(&self) -> ArrayView2<f64> {
        self.features.view()
    }

    pub fn labels(&self) -> ArrayView1<f64> {
        self.labels.view()
    }
}

/// Reads a labeled CSV dataset from `path`.
///
/// Each line is split on commas; the final field is the label, everything
/// before it is a feature. A line with fewer than two fields, a field that is
/// not a number, or a row whose width differs from earlier rows is a
/// [`ParseError`]. An empty file yields an empty dataset.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut values: Vec<f64> = Vec::new();
    let mut labels: Vec<f64> = Vec::new();
    let mut n_features: Option<usize> = None;

    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let line = idx + 1;
        let found = record.len();

        if found < 2 {
            return Err(ParseError::TooFewFields { line, found }.into());
        }
        match n_features {
            None => n_features = Some(found - 1),
            Some(expected) if expected + 1 != found => {
                return Err(ParseError::RaggedRow {
                    line,
                    expected: expected + 1,
                    found,
                }
                .into());
            }
            Some(_) => {}
        }

        for (col, field) in record.iter().enumerate() {
            let value: f64 = field.parse().map_err(|_| ParseError::NotANumber {
                line,
                value: field.to_string(),
            })?;
            if col < found - 1 {
                values.push(value);
            } else {
                labels.push(value);
            }
        }
    }

    let n_features = n_features.unwrap_or(0);
    let n_samples = labels.len();
    let features = Array2::from_shape_vec((n_samples, n_features), values)
        .expect("row width is enforced per record");

    debug!("loaded {} samples with {} features", n_samples, n_features);

    Ok(Dataset {
        features,
        labels: Array1::from(labels),
    })
}
