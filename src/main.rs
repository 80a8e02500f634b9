use anyhow::{Context, Result};
use clap::Parser;
use std::time::Instant;
use tracing::debug;

use ah_trace_stats::args::Args;
use ah_trace_stats::logging::init_logging;
use ah_trace_stats::{analyze_file, Report};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let t0 = Instant::now();
    let data = analyze_file(&args.log_path)
        .with_context(|| format!("analyze {}", args.log_path.display()))?;
    debug!(elapsed_s = t0.elapsed().as_secs_f64(), "analysis done");

    let report = Report::from_data(&data)
        .with_context(|| format!("summarize {}", args.log_path.display()))?;
    print!("{}", report);

    Ok(())
}
