/*
cargo run --bin generate_splits

cargo run --bin generate_splits -- \
    --base-dir   data/gf-7-building-3bands \
    --output-dir UniMatch-V2/splits/gf7-building-3bands
*/

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::info;
use simplelog::*;
use std::fs::{create_dir_all, File};
use std::path::PathBuf;

use seg_splits::constants::{DEFAULT_BASE_DIR, DEFAULT_LOG_DIR, DEFAULT_OUTPUT_DIR};
use seg_splits::{run_splits, SplitPlan};

#[derive(Parser, Debug)]
#[command(name = "generate_splits", version, about = "Generate semi-supervised split manifests")]
struct Cli {
    // Dataset root holding Train/, Val/ and Test/
    #[arg(long, default_value = DEFAULT_BASE_DIR)]
    base_dir: PathBuf,

    // Root for the manifests
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    // Run log and summary go here
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // logging setup
    create_dir_all(&cli.log_dir)
        .with_context(|| format!("creating log dir {}", cli.log_dir.display()))?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = cli.log_dir.join(format!("generate_splits_{ts}.log"));
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            ConfigBuilder::new().build(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            LevelFilter::Info,
            ConfigBuilder::new().build(),
            File::create(&log_path)
                .with_context(|| format!("creating log file {}", log_path.display()))?,
        ),
    ])?;

    info!("Starting split generation");
    info!("Base dir: {:?}", cli.base_dir);
    info!("Output dir: {:?}", cli.output_dir);

    let plan = SplitPlan::new(&cli.base_dir, &cli.output_dir).with_progress(true);
    let summary = run_splits(&plan)
        .with_context(|| format!("generating splits into {}", cli.output_dir.display()))?;

    summary.log();
    println!("{}", summary.render_table());

    let summary_path = cli.log_dir.join(format!("split_summary_{ts}.json"));
    summary
        .write_json(&summary_path)
        .with_context(|| format!("writing summary {}", summary_path.display()))?;
    info!("Wrote run summary to {:?}", summary_path);

    info!("All done successfully.");
    Ok(())
}
