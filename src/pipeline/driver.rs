//! Harness that runs map, shuffle and reduce over a whole table
//!
//! The sequential path maps every record, hands all pairs to the grouper
//! and reduces each group in turn. The concurrent path runs the map and
//! reduce steps as tokio tasks bounded by a semaphore; both produce the
//! same output.

use super::grouper::{Grouper, KeyGrouper};
use super::reader::{InputReader, MemoryReader};
use crate::error::{ErrorCode, PivotError, Result};
use crate::transpose::{
    map_record, reduce_group, EmittedPair, Group, InputRecord, OutputRecord, SizingPolicy,
};
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::{debug, info, trace};

/// Counters for one transpose run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    pub rows: usize,
    pub pairs: usize,
    pub groups: usize,
    pub duration: Duration,
}

/// Everything a run produced, intermediate stages included
#[derive(Debug, Clone)]
pub struct TransposeRun {
    /// Mapper output per input record, in input order
    pub map_output: Vec<Vec<EmittedPair>>,
    /// Groups as delivered by the grouper
    pub groups: Vec<Group>,
    /// Transposed rows in ascending index order
    pub output: Vec<OutputRecord>,
    pub stats: RunStats,
}

impl TransposeRun {
    /// Output lines in index order
    pub fn lines(&self) -> Vec<&str> {
        self.output.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Runs the transpose pipeline with a pluggable grouper
pub struct Transposer {
    grouper: Box<dyn Grouper>,
    pad_to_row_count: bool,
}

impl Default for Transposer {
    fn default() -> Self {
        Self::new(KeyGrouper)
    }
}

impl Transposer {
    pub fn new(grouper: impl Grouper + 'static) -> Self {
        Self {
            grouper: Box::new(grouper),
            pad_to_row_count: false,
        }
    }

    /// Pad every output line to the number of input rows
    pub fn with_padding(mut self, pad_to_row_count: bool) -> Self {
        self.pad_to_row_count = pad_to_row_count;
        self
    }

    /// Sizing policy for a table made of `records`
    pub fn policy_for(&self, records: &[InputRecord]) -> SizingPolicy {
        if self.pad_to_row_count {
            let total_rows = records
                .iter()
                .map(|r| r.index.saturating_add(1))
                .max()
                .unwrap_or(0);
            SizingPolicy::Padded { total_rows }
        } else {
            SizingPolicy::Sparse
        }
    }

    /// Read every record from `reader` and transpose it
    pub fn run(&self, reader: &mut dyn InputReader) -> Result<TransposeRun> {
        let records = reader.read_records()?;
        self.run_records(records)
    }

    /// Transpose records that are already in memory
    pub fn run_records(&self, records: Vec<InputRecord>) -> Result<TransposeRun> {
        let started = Instant::now();
        let policy = self.policy_for(&records);
        info!("Transposing {} rows ({:?})", records.len(), policy);

        let map_output: Vec<Vec<EmittedPair>> = records
            .iter()
            .map(|record| {
                trace!("Mapping row {}", record.index);
                map_record(record)
            })
            .collect();

        let groups = self.shuffle(&map_output);

        let mut output = Vec::with_capacity(groups.len());
        for group in &groups {
            trace!("Reducing column {} ({} cells)", group.key, group.len());
            output.push(reduce_group(group, policy)?);
        }

        Ok(finish(records.len(), map_output, groups, output, started))
    }

    /// Transpose with map and reduce tasks running concurrently
    ///
    /// At most `max_parallel` tasks are in flight per phase.
    pub async fn run_concurrent(
        &self,
        records: Vec<InputRecord>,
        max_parallel: usize,
    ) -> Result<TransposeRun> {
        if max_parallel == 0 {
            return Err(PivotError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "max_parallel must be at least 1",
                None,
            ));
        }

        let started = Instant::now();
        let policy = self.policy_for(&records);
        let rows = records.len();
        info!(
            "Transposing {} rows with up to {} parallel tasks ({:?})",
            rows, max_parallel, policy
        );

        let semaphore = Arc::new(Semaphore::new(max_parallel));

        let mut futures = FuturesUnordered::new();
        for (position, record) in records.into_iter().enumerate() {
            let permit = acquire(&semaphore).await?;
            futures.push(tokio::spawn(async move {
                let pairs = map_record(&record);
                drop(permit);
                (position, pairs)
            }));
        }

        let mut map_output = vec![Vec::new(); rows];
        while let Some(joined) = futures.next().await {
            let (position, pairs) = joined?;
            map_output[position] = pairs;
        }

        let groups = self.shuffle(&map_output);

        let mut futures = FuturesUnordered::new();
        for group in groups.iter().cloned() {
            let permit = acquire(&semaphore).await?;
            futures.push(tokio::spawn(async move {
                let reduced = reduce_group(&group, policy);
                drop(permit);
                reduced
            }));
        }

        let mut output = Vec::with_capacity(groups.len());
        while let Some(joined) = futures.next().await {
            output.push(joined??);
        }

        Ok(finish(rows, map_output, groups, output, started))
    }

    fn shuffle(&self, map_output: &[Vec<EmittedPair>]) -> Vec<Group> {
        let pairs: Vec<EmittedPair> = map_output.iter().flatten().cloned().collect();
        debug!("Map phase emitted {} pairs", pairs.len());

        let groups = self.grouper.group(pairs);
        debug!("Shuffle produced {} groups", groups.len());
        groups
    }
}

async fn acquire(semaphore: &Arc<Semaphore>) -> Result<tokio::sync::OwnedSemaphorePermit> {
    semaphore.clone().acquire_owned().await.map_err(|e| {
        PivotError::execution_with_code(ErrorCode::EXEC_SEMAPHORE_CLOSED, e.to_string())
            .with_source(e)
    })
}

fn finish(
    rows: usize,
    map_output: Vec<Vec<EmittedPair>>,
    groups: Vec<Group>,
    mut output: Vec<OutputRecord>,
    started: Instant,
) -> TransposeRun {
    output.sort_by_key(|r| r.index);

    let stats = RunStats {
        rows,
        pairs: map_output.iter().map(Vec::len).sum(),
        groups: groups.len(),
        duration: started.elapsed(),
    };
    debug!(
        "Reduce phase produced {} rows in {:?}",
        output.len(),
        stats.duration
    );

    TransposeRun {
        map_output,
        groups,
        output,
        stats,
    }
}

/// Transpose plain lines, returning the output lines in order
///
/// # Examples
///
/// ```
/// use csv_pivot::pipeline::transpose_lines;
///
/// let lines = transpose_lines(&["a,b", "c,d"]).unwrap();
/// assert_eq!(lines, vec!["a,c", "b,d"]);
/// ```
pub fn transpose_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<String>> {
    let run = Transposer::default().run(&mut MemoryReader::from_lines(lines))?;
    Ok(run.output.into_iter().map(|r| r.text).collect())
}
