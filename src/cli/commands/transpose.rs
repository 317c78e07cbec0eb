//! The `transpose` command

use crate::config::PivotConfig;
use crate::error::{common, ErrorExt};
use crate::output::{format_summary, render, render_intermediate, OutputFormat};
use crate::pipeline::{InputReader, LineReader, ShuffledGrouper, Transposer};
use crate::transpose::InputRecord;
use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options for one `transpose` invocation
#[derive(Debug, Clone, Default)]
pub struct TransposeCommand {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub pad: bool,
    pub parallel: Option<usize>,
    pub show_intermediate: bool,
    pub shuffle_seed: Option<u64>,
    pub summary: bool,
}

impl TransposeCommand {
    /// Layer command line flags over the loaded configuration
    pub fn apply_to(&self, config: &mut PivotConfig) {
        if let Some(format) = self.format {
            config.output_format = format;
        }
        if self.pad {
            config.pad_to_row_count = true;
        }
        if let Some(parallel) = self.parallel {
            config.max_parallel = parallel;
        }
        if self.show_intermediate {
            config.show_intermediate = true;
        }
    }

    fn reads_stdin(&self) -> bool {
        match &self.input {
            None => true,
            Some(path) => path.as_os_str() == "-",
        }
    }
}

pub async fn run_transpose(cmd: TransposeCommand, mut config: PivotConfig) -> Result<()> {
    cmd.apply_to(&mut config);
    config.validate()?;
    debug!("Effective configuration: {:?}", config);

    let records = read_input(&cmd)?;

    let transposer = match cmd.shuffle_seed {
        Some(seed) => {
            info!("Shuffling groups with seed {}", seed);
            Transposer::new(ShuffledGrouper::new(seed))
        }
        None => Transposer::default(),
    }
    .with_padding(config.pad_to_row_count);

    let run = transposer
        .run_concurrent(records, config.max_parallel)
        .await?;

    if config.show_intermediate {
        eprintln!("{}", render_intermediate(&run)?);
    }

    let rendered = render(&run.output, config.output_format)?;
    match &cmd.output {
        Some(path) => write_output(path, &rendered)?,
        None => write_to(&mut std::io::stdout().lock(), &rendered)?,
    }

    if cmd.summary {
        eprintln!("{}", format_summary(&run.stats));
    }

    Ok(())
}

fn read_input(cmd: &TransposeCommand) -> Result<Vec<InputRecord>> {
    let records = if cmd.reads_stdin() {
        debug!("Reading table from stdin");
        LineReader::new(std::io::stdin().lock()).read_records()?
    } else {
        let path = cmd.input.as_deref().unwrap_or(Path::new("-"));
        debug!("Reading table from {}", path.display());
        LineReader::open(path)?.read_records()?
    };
    Ok(records)
}

fn write_output(path: &Path, rendered: &str) -> Result<()> {
    std::fs::write(path, rendered).map_err(|e| common::output_write_error(path).with_source(e))?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn write_to<W: Write>(out: &mut W, rendered: &str) -> crate::error::Result<()> {
    out.write_all(rendered.as_bytes())
        .to_io_error("Failed to write to stdout")?;
    out.flush().to_io_error("Failed to write to stdout")
}
