use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::analyzer::analyze_reader;
use crate::error::{AnalysisError, Result};
use crate::model::AnalysisData;

pub fn open_trace_log(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| AnalysisError::io(path, e))?;
    debug!(path = %path.display(), "opened trace log");
    Ok(BufReader::new(file))
}

/// Scan the whole file. The handle is dropped before returning, on error too.
pub fn analyze_file(path: &Path) -> Result<AnalysisData> {
    let reader = open_trace_log(path)?;
    let mut data = AnalysisData::default();
    analyze_reader(reader, &mut data)?;
    Ok(data)
}
