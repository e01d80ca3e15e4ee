//! CLI command definitions and execution
//!
//! sitepush is single-purpose, so there are no subcommands: the top-level
//! invocation is the deploy.

use clap::Parser;

use crate::exit_code::ExitCode;
use crate::output::OutputConfig;

pub mod deploy;

/// sitepush - deploy a built static site to S3-compatible object storage
///
/// Uploads every file under the configured source directory to the
/// environment's bucket, mirroring relative paths under the remote
/// prefix. Destination settings come from `.<ENVIRONMENT>.s3.json` in
/// the working directory.
#[derive(Parser, Debug)]
#[command(name = "sitepush")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub deploy: deploy::DeployArgs,

    /// Output format: human-readable or JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Disable progress display
    #[arg(long)]
    pub no_progress: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let output_config = OutputConfig {
        json: cli.json,
        no_color: cli.no_color,
        no_progress: cli.no_progress,
        quiet: cli.quiet,
    };

    deploy::execute(cli.deploy, output_config).await
}
