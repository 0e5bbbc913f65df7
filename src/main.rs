// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing
    )
)]

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use std::path::PathBuf;
use suite_checklist::config::{
    DEFAULT_GH_PROGRAM, DEFAULT_ISSUE_LIMIT, DEFAULT_OUTPUT_DIR, DEFAULT_TITLE_PREFIX,
};
use suite_checklist::logging::{init_logging, parse_rotation, LogConfig};
use suite_checklist::{
    generate_checklists, ChecklistTemplate, ChecklistWriter, GenerateConfig, GhIssueSource,
};
use tracing::info;
use tracing_appender::rolling::Rotation;

/// Suite Checklist - create QA checklists for simulation suites announced as issues
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding one checklist file per suite id (must already exist)
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Maximum number of issues to request from the tracker
    #[arg(short = 'L', long, default_value_t = DEFAULT_ISSUE_LIMIT)]
    limit: u32,

    /// Only issues whose title starts with this text are considered
    #[arg(long, default_value = DEFAULT_TITLE_PREFIX)]
    title_prefix: String,

    /// Repository to query as owner/repo (default: the repository of the working directory)
    #[arg(short = 'R', long)]
    repo: Option<String>,

    /// GitHub CLI executable
    #[arg(long = "gh", default_value = DEFAULT_GH_PROGRAM)]
    gh_program: String,

    /// Report which checklists would be created without writing them
    #[arg(long, default_value = "false")]
    dry_run: bool,

    /// Enable JSON log format
    #[arg(long, env = "SUITE_CHECKLIST_LOG_JSON", default_value = "false")]
    log_json: bool,

    /// Also write logs to a rolling file in this directory
    #[arg(long, env = "SUITE_CHECKLIST_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log rotation period: daily, hourly, or never
    #[arg(
        long,
        env = "SUITE_CHECKLIST_LOG_ROTATION",
        default_value = "daily",
        value_parser = parse_rotation
    )]
    log_rotation: Rotation,
}

impl Args {
    fn generate_config(&self) -> GenerateConfig {
        GenerateConfig {
            output_dir: self.output_dir.clone(),
            limit: self.limit,
            title_prefix: self.title_prefix.clone(),
            repo: self.repo.clone(),
            gh_program: self.gh_program.clone(),
            dry_run: self.dry_run,
        }
    }

    fn log_config(&self) -> LogConfig {
        LogConfig {
            log_dir: self.log_dir.clone(),
            json_format: self.log_json,
            rotation: self.log_rotation.clone(),
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.log_config()).wrap_err("Failed to initialize logging")?;

    let config = args.generate_config();
    let mut source = GhIssueSource::new(config.gh_program.clone(), config.limit);
    if let Some(repo) = &config.repo {
        source = source.with_repo(repo.clone());
    }
    let writer = ChecklistWriter::new(config.output_dir.clone(), ChecklistTemplate::new()?)
        .dry_run(config.dry_run);

    info!(
        output_dir = %config.output_dir.display(),
        limit = config.limit,
        dry_run = config.dry_run,
        "Generating suite checklists"
    );

    let report = generate_checklists(&source, &writer, &config.title_prefix).await?;

    for suite_id in &report.created {
        info!("Created {}", writer.checklist_path(suite_id).display());
    }
    for suite_id in &report.planned {
        info!("Would create {}", writer.checklist_path(suite_id).display());
    }
    Ok(())
}
