//! The `demo` command: the sample table, one stage at a time

use crate::output::{render, render_intermediate, OutputFormat};
use crate::pipeline::{sample_table, MemoryReader, Transposer};
use anyhow::Result;

pub fn run_demo(format: OutputFormat) -> Result<()> {
    let records = sample_table();

    println!("Input:");
    for record in &records {
        println!("  {}: {}", record.index, record.text);
    }

    let run = Transposer::default().run(&mut MemoryReader::new(records))?;

    println!();
    println!("Map output and groups:");
    println!("{}", render_intermediate(&run)?);

    println!();
    println!("Transposed:");
    print!("{}", render(&run.output, format)?);

    Ok(())
}
