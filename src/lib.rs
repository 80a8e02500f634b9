//! Summaries of AI (`NodeID`) and RI (`receivedACK`) values from 802.11ah
//! simulation trace logs.

pub mod analyzer;
pub mod args;
pub mod config;
pub mod error;
pub mod io_utils;
pub mod logging;
pub mod model;
pub mod report;
pub mod tokenizer;

pub use analyzer::{analyze_reader, classify_tokens, process_line};
pub use error::AnalysisError;
pub use io_utils::analyze_file;
pub use model::{Accumulator, AnalysisData, TraceEvent};
pub use report::Report;
pub use tokenizer::tokenize_line;
