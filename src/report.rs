use std::fmt;

use crate::error::{AnalysisError, Result};
use crate::model::{Accumulator, AnalysisData};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub max: f64,
    pub min: f64,
    pub avg: f64,
}

impl SeriesSummary {
    fn from_acc(acc: &Accumulator, series: &'static str) -> Result<Self> {
        let avg = acc.average().ok_or(AnalysisError::NoData { series })?;
        Ok(Self {
            max: acc.max as f64,
            min: acc.min as f64,
            avg,
        })
    }
}

/// Final numbers of a trace, computed before anything is printed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub ai: SeriesSummary,
    pub ri: SeriesSummary,
    /// Literal `riCnt * 100 * 8 / 100.0`: scales with the ACK count only.
    pub throughput: f64,
    pub send: f64,
    pub recv: f64,
    pub loss: f64,
}

impl Report {
    pub fn from_data(data: &AnalysisData) -> Result<Self> {
        let ai = SeriesSummary::from_acc(&data.ai, "ai")?;
        let ri = SeriesSummary::from_acc(&data.ri, "ri")?;

        let send = data.ai.count as f64;
        let recv = data.ri.count as f64;
        Ok(Self {
            ai,
            ri,
            throughput: recv * 100.0 * 8.0 / 100.0,
            send,
            recv,
            loss: 100.0 - recv / send * 100.0,
        })
    }

    pub fn ai_line(&self) -> String {
        format!(
            "ai max {:.6} min {:.6} avg {:.6}",
            self.ai.max, self.ai.min, self.ai.avg
        )
    }

    pub fn ri_line(&self) -> String {
        format!(
            "ri max {:.6} min {:.6} avg {:.6} thr {:.6} send {:.6} recv {:.6} loss {:.6}",
            self.ri.max, self.ri.min, self.ri.avg, self.throughput, self.send, self.recv, self.loss
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.ai_line())?;
        writeln!(f, "{}", self.ri_line())
    }
}
