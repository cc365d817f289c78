/*! Model ranking

Aggregates the human scores of each model of an annotated sheet and ranks models by average score.

Only rows where every model has a valid score are counted, so that all models are compared on the same rows.
!*/
use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use super::sheet::{parse_score, ModelColumns};
use crate::error::Error;

/// Score scale used to compute [ModelStats::percent].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
}

impl Default for Scale {
    /// 1 to 5
    fn default() -> Self {
        Self { min: 1.0, max: 5.0 }
    }
}

/// Aggregated scores of a model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelStats {
    pub model: String,
    pub total: f64,
    pub count: u64,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub average: f64,
    /// Position of the total between the lowest and highest possible totals (0 to 1).
    pub percent: f64,
}

impl ModelStats {
    fn new(model: String) -> Self {
        Self {
            model,
            total: 0.0,
            count: 0,
            high: None,
            low: None,
            average: 0.0,
            percent: 0.0,
        }
    }

    fn add(&mut self, score: f64) {
        self.total += score;
        self.count += 1;
        self.high = Some(self.high.map_or(score, |h| h.max(score)));
        self.low = Some(self.low.map_or(score, |l| l.min(score)));
    }

    /// Compute average and percent. Both stay at 0 if there is no score.
    fn finish(&mut self, scale: Scale) {
        if self.count == 0 {
            return;
        }
        let count = self.count as f64;
        self.average = self.total / count;
        self.percent = (self.total - count * scale.min) / (count * (scale.max - scale.min));
    }
}

/// Compute statistics for each model, in model order.
pub fn model_stats<R: Read>(
    reader: R,
    columns: &ModelColumns,
    scale: Scale,
) -> Result<Vec<ModelStats>, Error> {
    let mut reader = csv::Reader::from_reader(reader);
    let indices = columns.locate(reader.headers()?)?;

    let mut stats: Vec<ModelStats> = columns
        .models()
        .iter()
        .cloned()
        .map(ModelStats::new)
        .collect();

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let scores: Option<Vec<f64>> = indices
            .iter()
            .map(|idx| parse_score(record.get(idx.score)))
            .collect();

        match scores {
            Some(scores) => {
                for (stat, score) in stats.iter_mut().zip(scores) {
                    stat.add(score);
                }
            }
            None => warn!("row {}: missing or invalid score, skipping", row + 1),
        }
    }

    for stat in stats.iter_mut() {
        stat.finish(scale);
    }

    Ok(stats)
}

/// Sort by average score, best first. Ties keep their order.
pub fn ranking(mut stats: Vec<ModelStats>) -> Vec<ModelStats> {
    stats.sort_by(|a, b| b.average.total_cmp(&a.average));
    stats
}

fn fmt_score(score: Option<f64>) -> String {
    score.map_or_else(|| "-".to_string(), |s| format!("{:.2}", s))
}

/// Human readable ranking.
pub fn report(ranked: &[ModelStats]) -> String {
    let mut out = String::new();
    out.push_str("Model Performance Ranking (Best to Worst):\n");
    out.push_str("----------------------------------------");
    for (rank, s) in ranked.iter().enumerate() {
        // writing into a String does not fail
        let _ = write!(
            out,
            "\n{}. {}: Avg Score = {:.2}, Percent Score = {:.4}\n\t(Total={:.2}, Count={}, High={}, Low={})",
            rank + 1,
            s.model,
            s.average,
            s.percent,
            s.total,
            s.count,
            fmt_score(s.high),
            fmt_score(s.low),
        );
    }
    out
}

/// Rank the models of `src` and write the ranking to `dst`, as text or JSON.
/// Returns the ranking.
pub fn rank_models(
    src: &Path,
    dst: &Path,
    columns: &ModelColumns,
    scale: Scale,
    json: bool,
) -> Result<Vec<ModelStats>, Error> {
    let f = std::fs::File::open(src)?;
    let ranked = ranking(model_stats(f, columns, scale)?);

    crate::io::create_parent_dir(dst)?;
    if json {
        let out = std::fs::File::create(dst)?;
        serde_json::to_writer_pretty(out, &ranked)?;
    } else {
        std::fs::write(dst, report(&ranked))?;
    }

    if let Some(best) = ranked.first() {
        info!("best model: {} ({:.2})", best.model, best.average);
    }
    Ok(ranked)
}
