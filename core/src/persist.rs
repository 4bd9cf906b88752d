use crate::Summary;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufReader, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub source: String,
    pub depth: i64,
    pub created_at: String,
    pub sentence_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub took_s: Option<f64>,
    pub sentences: Vec<String>,
}

impl SummaryReport {
    pub fn from_summary(source: impl Into<String>, summary: &Summary, created_at: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            depth: summary.depth,
            created_at: created_at.into(),
            sentence_count: summary.sentence_count,
            took_s: summary.elapsed.map(|d| d.as_secs_f64()),
            sentences: summary.sentences.clone(),
        }
    }
}

pub fn save_reports(path: &Path, reports: &[SummaryReport]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir)?;
    }
    let mut f = File::create(path)?;
    let json = match reports {
        [single] => serde_json::to_string_pretty(single)?,
        many => serde_json::to_string_pretty(many)?,
    };
    f.write_all(json.as_bytes())?;
    Ok(())
}

/// Load a report file holding either one report object or an array of them.
pub fn load_reports(path: &Path) -> Result<Vec<SummaryReport>> {
    let reader = BufReader::new(File::open(path)?);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    let reports = match json {
        serde_json::Value::Array(arr) => arr.into_iter().map(serde_json::from_value).collect::<Result<Vec<_>, _>>()?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(reports)
}
