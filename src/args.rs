use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Summarize AI/RI statistics from 802.11ah simulation trace logs")]
pub struct Args {
    /// Trace log written by the simulation
    pub log_path: PathBuf,
}
