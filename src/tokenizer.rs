use crate::config::MARKER_WORD;

macro_rules! regex {
    ($pattern:expr) => {{
        use regex::Regex;
        use std::sync::OnceLock;

        static REGEX: OnceLock<Regex> = OnceLock::new();
        REGEX.get_or_init(|| Regex::new($pattern).unwrap())
    }};
}

/// Split a trace line into word tokens (`[0-9A-Za-z_]+` runs).
///
/// Returns an empty vector unless the first word is exactly `At`; such lines
/// are not trace events and are dropped without error.
pub fn tokenize_line(line: &str) -> Vec<&str> {
    let mut words = regex!(r"[0-9A-Za-z_]+").find_iter(line).map(|m| m.as_str());
    match words.next() {
        Some(first) if first == MARKER_WORD => {
            let mut tokens = vec![first];
            tokens.extend(words);
            tokens
        }
        _ => Vec::new(),
    }
}
