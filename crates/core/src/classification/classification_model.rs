use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way verdict on a value measured against a benchmark band.
///
/// Derived on demand from a value/benchmark pair, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Undervalued,
    Fair,
    Overvalued,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Undervalued => "undervalued",
            Verdict::Fair => "fair",
            Verdict::Overvalued => "overvalued",
        };
        write!(f, "{}", label)
    }
}
