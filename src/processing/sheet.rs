//! Annotated sheet layout.
//!
//! An annotated CSV holds, for each model, a column with the model output
//! and a score column named `<model><suffix>`.
use csv::StringRecord;

use crate::error::Error;

pub const DEFAULT_MODELS: [&str; 4] = ["模型A", "模型B", "模型C", "模型D"];
pub const SCORE_SUFFIX: &str = "得分";

/// Model names and score column naming.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelColumns {
    models: Vec<String>,
    score_suffix: String,
}

/// Positions of the output and score columns of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelIndex {
    pub output: usize,
    pub score: usize,
}

impl ModelColumns {
    pub fn new(models: Vec<String>, score_suffix: String) -> Self {
        Self {
            models,
            score_suffix,
        }
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn score_suffix(&self) -> &str {
        &self.score_suffix
    }

    pub fn score_column(&self, model: &str) -> String {
        format!("{}{}", model, self.score_suffix)
    }

    /// Find the columns of each model, in model order.
    pub fn locate(&self, headers: &StringRecord) -> Result<Vec<ModelIndex>, Error> {
        self.models
            .iter()
            .map(|model| {
                Ok(ModelIndex {
                    output: column_index(headers, model)?,
                    score: column_index(headers, &self.score_column(model))?,
                })
            })
            .collect()
    }
}

impl Default for ModelColumns {
    fn default() -> Self {
        Self {
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            score_suffix: SCORE_SUFFIX.to_string(),
        }
    }
}

/// Get the position of a named column.
pub fn column_index(headers: &StringRecord, name: &str) -> Result<usize, Error> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| Error::MissingColumn(name.to_string()))
}

/// Parse a score cell. Empty, non numeric and NaN cells have no score.
pub fn parse_score(field: Option<&str>) -> Option<f64> {
    field
        .and_then(|f| f.trim().parse::<f64>().ok())
        .filter(|score| !score.is_nan())
}
