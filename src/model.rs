use crate::config::{MAX_INIT, MIN_SENTINEL};

/// Running min/max/total/count over one series of trace values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accumulator {
    pub max: i64,
    pub min: i64,
    pub total: i128,
    pub count: u64,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self {
            max: MAX_INIT,
            min: MIN_SENTINEL,
            total: 0,
            count: 0,
        }
    }
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero still counts towards `total` and `count` but never becomes `min`.
    pub fn update(&mut self, value: i64) {
        if value > self.max {
            self.max = value;
        }
        if value < self.min && value != 0 {
            self.min = value;
        }
        self.total += value as i128;
        self.count += 1;
    }

    /// `None` when nothing has been fed yet.
    pub fn average(&self) -> Option<f64> {
        match self.count {
            0 => None,
            n => Some(self.total as f64 / n as f64),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// `receivedACK` line, payload feeds the RI series.
    ReceivedAck { size: i64 },
    /// `NodeID` line, payload feeds the AI series.
    NodeId { value: i64 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCounters {
    pub lines: usize,
    pub marker_lines: usize,
    pub unrecognized: usize,
}

#[derive(Debug, Default)]
pub struct AnalysisData {
    pub ai: Accumulator,
    pub ri: Accumulator,
    pub counters: ScanCounters,
}

impl AnalysisData {
    pub fn apply(&mut self, event: TraceEvent) {
        match event {
            TraceEvent::ReceivedAck { size } => self.ri.update(size),
            TraceEvent::NodeId { value } => self.ai.update(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let acc = Accumulator::new();
        assert_eq!(acc.max, -1);
        assert_eq!(acc.min, 100_000_000_000_000);
        assert_eq!(acc.total, 0);
        assert_eq!(acc.count, 0);
        assert_eq!(acc.average(), None);
    }

    #[test]
    fn test_zero_never_becomes_min() {
        let mut acc = Accumulator::new();
        acc.update(4);
        acc.update(0);
        acc.update(9);
        assert_eq!(acc.min, 4);
        assert_eq!(acc.max, 9);
        assert_eq!(acc.total, 13);
        assert_eq!(acc.count, 3);

        let mut zeros = Accumulator::new();
        zeros.update(0);
        zeros.update(0);
        assert_eq!(zeros.min, MIN_SENTINEL);
        assert_eq!(zeros.max, 0);
        assert_eq!(zeros.count, 2);
        assert_eq!(zeros.average(), Some(0.0));
    }

    #[test]
    fn test_max_and_total_track_every_value() {
        let values = [12, 3, 40, 40, 7, 1, 0, 25];
        let mut acc = Accumulator::new();
        for v in values {
            acc.update(v);
        }
        assert_eq!(acc.max, *values.iter().max().unwrap());
        assert_eq!(acc.total, values.iter().map(|v| *v as i128).sum::<i128>());
        assert_eq!(acc.count, values.len() as u64);
        assert_eq!(acc.min, 1);
    }

    #[test]
    fn test_negative_values_update_min_but_not_initial_max() {
        let mut acc = Accumulator::new();
        acc.update(-5);
        assert_eq!(acc.min, -5);
        assert_eq!(acc.max, -1);
    }

    #[test]
    fn test_total_does_not_overflow_i64() {
        let mut acc = Accumulator::new();
        acc.update(i64::MAX);
        acc.update(i64::MAX);
        assert_eq!(acc.total, 2 * (i64::MAX as i128));
    }

    #[test]
    fn test_events_route_to_their_series() {
        let mut data = AnalysisData::default();
        data.apply(TraceEvent::NodeId { value: 5 });
        assert_eq!(data.ai.count, 1);
        assert_eq!(data.ri, Accumulator::new());

        data.apply(TraceEvent::ReceivedAck { size: 100 });
        assert_eq!(data.ri.count, 1);
        assert_eq!(data.ai.count, 1);
        assert_eq!(data.ai.total, 5);
        assert_eq!(data.ri.total, 100);
    }
}
