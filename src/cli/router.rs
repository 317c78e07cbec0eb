//! Command routing and execution

use crate::cli::args::Commands;
use crate::cli::commands::{run_demo, run_transpose, TransposeCommand};
use crate::config::PivotConfig;
use anyhow::Result;

/// Execute a CLI command with the resolved configuration
pub async fn execute_command(command: Commands, config: PivotConfig) -> Result<()> {
    match command {
        Commands::Transpose {
            input,
            output,
            format,
            pad,
            parallel,
            show_intermediate,
            shuffle_seed,
            summary,
        } => {
            let cmd = TransposeCommand {
                input,
                output,
                format,
                pad,
                parallel,
                show_intermediate,
                shuffle_seed,
                summary,
            };
            run_transpose(cmd, config).await
        }
        Commands::Demo { format } => run_demo(format),
    }
}
