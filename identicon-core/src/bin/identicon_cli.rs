//! Identicon CLI
//!
//! Writes `<seed>.png` for every seed given.
//! Outputs JSON to stdout, logs to stderr
//! Returns non-zero if any seed failed

use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use identicon_core::{IdenticonPipeline, PipelineError, ENGINE_VERSION};

#[derive(Parser)]
#[command(name = "identicon-cli")]
#[command(about = "Identicon CLI - deterministic avatar generator")]
#[command(version = ENGINE_VERSION)]
struct Cli {
    /// Seed strings; each becomes <seed>.png
    #[arg(required = true)]
    seeds: Vec<String>,

    /// Directory the PNG files are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Print every pipeline stage as JSON instead of writing files
    #[arg(long)]
    inspect: bool,
}

fn run_seed(pipeline: &IdenticonPipeline, seed: &str, inspect: bool) -> Result<String, PipelineError> {
    if inspect {
        return Ok(serde_json::to_string_pretty(&pipeline.inspect(seed))?);
    }

    let outcome = pipeline.create(seed)?;
    let output = serde_json::json!({
        "success": outcome.success,
        "outcome": outcome,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    info!("identicon-cli {} writing to {}", ENGINE_VERSION, cli.out_dir.display());

    let pipeline = IdenticonPipeline::with_out_dir(&cli.out_dir);
    let mut code = ExitCode::SUCCESS;

    for seed in &cli.seeds {
        match run_seed(&pipeline, seed, cli.inspect) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("seed {:?} failed: {}", seed, e);
                let output = serde_json::json!({
                    "success": false,
                    "seed": seed,
                    "error": e.to_string(),
                });
                println!("{}", output);
                code = match e {
                    PipelineError::Serialization(_) => ExitCode::FAILURE,
                    _ => ExitCode::from(2),
                };
            }
        }
    }

    code
}
