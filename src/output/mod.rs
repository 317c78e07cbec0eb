//! Rendering transposed tables and intermediate stages

use crate::error::Result;
use crate::pipeline::{RunStats, TransposeRun};
use crate::transpose::{EmittedPair, Group, OutputRecord};
use serde::{Deserialize, Serialize};

/// How output records are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One delimited line per record, in index order
    #[default]
    Csv,
    /// A JSON array of `{ index, text }` objects
    Json,
}

/// Render output records in the requested format
///
/// Records are written in ascending index order whatever order they
/// arrive in.
pub fn render(records: &[OutputRecord], format: OutputFormat) -> Result<String> {
    let mut ordered: Vec<&OutputRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.index);

    match format {
        OutputFormat::Csv => {
            let mut out = String::new();
            for record in ordered {
                out.push_str(&record.text);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&ordered)?;
            out.push('\n');
            Ok(out)
        }
    }
}

#[derive(Serialize)]
struct Intermediate<'a> {
    map: &'a [Vec<EmittedPair>],
    groups: &'a [Group],
}

/// Pretty JSON of the mapper output and the groups of a run
pub fn render_intermediate(run: &TransposeRun) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Intermediate {
        map: &run.map_output,
        groups: &run.groups,
    })?)
}

/// One-line summary of a run
pub fn format_summary(stats: &RunStats) -> String {
    format!(
        "Transposed {} {} into {} {} ({} cells) in {:.2?}",
        stats.rows,
        pluralize(stats.rows, "row"),
        stats.groups,
        pluralize(stats.groups, "row"),
        stats.pairs,
        stats.duration
    )
}

fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
