//! deploy command - push the built site to an environment's bucket
//!
//! Reads `.<environment>.s3.json` from the working directory, walks the
//! configured source tree, and uploads every file that no ignore pattern
//! matches.

use std::sync::Arc;

use clap::{Args, CommandFactory};
use serde::Serialize;

use sitepush_core::{dispatch, Config, ConfigFile, Error, ObjectStore, Summary};
use sitepush_s3::S3Client;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig, ProgressBar};

/// Deploy the site to an environment
#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Environment to deploy to
    #[arg(long, default_value = "production")]
    pub to: String,

    /// Number of concurrent uploads
    #[arg(short = 'n', long, default_value_t = sitepush_core::DEFAULT_CONCURRENCY)]
    pub concurrency: u32,
}

#[derive(Debug, Serialize)]
struct DeployOutput {
    status: &'static str,
    environment: String,
    bucket: String,
    #[serde(flatten)]
    summary: Summary,
}

/// Execute the deploy command
pub async fn execute(args: DeployArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config.clone());

    // An empty environment cannot name a config file
    if args.to.is_empty() {
        let mut cmd = super::Cli::command();
        cmd.print_help().ok();
        return ExitCode::Success;
    }

    tracing::debug!("deploying environment {}", args.to);

    let config_file = match ConfigFile::for_environment(&args.to) {
        Ok(file) => file,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::GeneralError;
        }
    };

    let mut config = match config_file.load_or_create() {
        Ok(config) => config,
        Err(e @ Error::ConfigCreated(_)) => {
            formatter.success(&e.to_string());
            return ExitCode::ConfigCreated;
        }
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::GeneralError;
        }
    };

    config.concurrency = args.concurrency;

    // An unfilled config reports the gap but exits clean
    if let Err(e) = config.validate() {
        formatter.error(&e.to_string());
        return ExitCode::Success;
    }

    let client = match S3Client::new(&config).await {
        Ok(client) => client,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::GeneralError;
        }
    };

    let spinner = ProgressBar::spinner(output_config, "Uploading...");
    let store: Arc<dyn ObjectStore> = Arc::new(client);

    let mut done: u64 = 0;
    let result = dispatch::run(store, &config, |task| {
        done += 1;
        spinner.println(&format!(
            "{} -> {} ({})",
            task.path.display(),
            task.key,
            humansize::format_size(task.size, humansize::BINARY)
        ));
        spinner.set_message(&format!("Uploading... {done} file(s) sent"));
    })
    .await;

    spinner.finish_and_clear();

    match result {
        Ok(summary) => report(&formatter, &args.to, &config, summary),
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::GeneralError
        }
    }
}

fn report(formatter: &Formatter, environment: &str, config: &Config, summary: Summary) -> ExitCode {
    let failed = summary.failed.len();

    if formatter.is_json() {
        let output = DeployOutput {
            status: if failed == 0 { "success" } else { "failed" },
            environment: environment.to_string(),
            bucket: config.bucket.clone(),
            summary,
        };
        formatter.json(&output);
    } else {
        for failure in &summary.failed {
            formatter.error(&format!("{}: {}", failure.path, failure.error));
        }

        let line = format!(
            "Uploaded {} file(s) ({}) to {}, skipped {}, failed {}.",
            summary.uploaded,
            humansize::format_size(summary.bytes, humansize::BINARY),
            config.bucket,
            summary.skipped,
            failed
        );
        if failed == 0 {
            formatter.success(&line);
        } else {
            formatter.warning(&line);
        }
    }

    if failed == 0 {
        ExitCode::Success
    } else {
        ExitCode::UploadsFailed
    }
}
