use std::io::BufRead;
use tracing::{debug, trace};

use crate::config::{shape_for, EventKind, DISCRIMINATOR_INDEX};
use crate::error::{AnalysisError, Result};
use crate::model::{AnalysisData, TraceEvent};
use crate::tokenizer::tokenize_line;

fn token_at<'a>(tokens: &[&'a str], idx: usize, line_no: usize) -> Result<&'a str> {
    tokens
        .get(idx)
        .copied()
        .ok_or(AnalysisError::MalformedLine {
            line_no,
            needed: idx + 1,
            found: tokens.len(),
        })
}

/// Turn the tokens of an `At` line into an event.
///
/// `Ok(None)` means the line is well formed but carries an event we do not
/// track. A line too short to hold the discriminator or the payload is an error.
pub fn classify_tokens(tokens: &[&str], line_no: usize) -> Result<Option<TraceEvent>> {
    let discriminator = token_at(tokens, DISCRIMINATOR_INDEX, line_no)?;
    let Some(shape) = shape_for(discriminator) else {
        return Ok(None);
    };

    let raw = token_at(tokens, shape.payload_index, line_no)?;
    let value = raw.parse::<i64>().map_err(|_| AnalysisError::InvalidNumber {
        line_no,
        token: raw.to_string(),
    })?;

    Ok(Some(match shape.kind {
        EventKind::ReceivedAck => TraceEvent::ReceivedAck { size: value },
        EventKind::NodeId => TraceEvent::NodeId { value },
    }))
}

/// Feed one raw line into `data`. `line_no` is 1-based and only used in errors.
pub fn process_line(data: &mut AnalysisData, line: &str, line_no: usize) -> Result<()> {
    data.counters.lines += 1;
    let tokens = tokenize_line(line);
    if tokens.is_empty() {
        return Ok(());
    }
    data.counters.marker_lines += 1;

    match classify_tokens(&tokens, line_no)? {
        Some(event) => data.apply(event),
        None => {
            data.counters.unrecognized += 1;
            trace!(line_no, discriminator = tokens[DISCRIMINATOR_INDEX], "skipping untracked event");
        }
    }
    Ok(())
}

/// Single pass over a trace. Stops at the first malformed line.
pub fn analyze_reader<R: BufRead>(mut reader: R, data: &mut AnalysisData) -> Result<()> {
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        line_no += 1;
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| AnalysisError::Read { line_no, source })?;
        if n == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        process_line(data, &line, line_no)?;
    }

    debug!(
        lines = data.counters.lines,
        marker_lines = data.counters.marker_lines,
        unrecognized = data.counters.unrecognized,
        ai_samples = data.ai.count,
        ri_samples = data.ri.count,
        "trace scan finished"
    );
    Ok(())
}
