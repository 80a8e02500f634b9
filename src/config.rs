/// First word of every line the analyzer looks at.
pub const MARKER_WORD: &str = "At";

/// Token position holding the event name on an `At` line.
pub const DISCRIMINATOR_INDEX: usize = 3;

/// Starting `max` of an accumulator.
pub const MAX_INIT: i64 = -1;
/// Starting `min` of an accumulator; printed as-is when no non-zero value was seen.
pub const MIN_SENTINEL: i64 = 100_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    ReceivedAck,
    NodeId,
}

/// Where the numeric payload of a known event sits in the token sequence.
#[derive(Debug, Clone, Copy)]
pub struct LineShape {
    pub kind: EventKind,
    pub discriminator: &'static str,
    pub payload_index: usize,
}

pub fn line_shapes() -> &'static [LineShape] {
    &[
        LineShape {
            kind: EventKind::ReceivedAck,
            discriminator: "receivedACK",
            payload_index: 5,
        },
        LineShape {
            kind: EventKind::NodeId,
            discriminator: "NodeID",
            payload_index: 8,
        },
    ]
}

pub fn shape_for(discriminator: &str) -> Option<&'static LineShape> {
    line_shapes().iter().find(|s| s.discriminator == discriminator)
}
