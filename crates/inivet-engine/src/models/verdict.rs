use serde::{Deserialize, Serialize};

use super::{ConfigModel, Diagnostic};

/// Outcome of one validation run.
///
/// The model is populated even when the run failed, so callers can inspect
/// the parts that did parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseVerdict {
    /// Number of lines read from the input.
    pub total_lines: usize,
    /// Number of `Error`-severity diagnostics.
    pub error_count: usize,
    /// All diagnostics, in line order.
    pub diagnostics: Vec<Diagnostic>,
    pub model: ConfigModel,
}

impl ParseVerdict {
    pub fn passed(&self) -> bool {
        self.error_count == 0
    }
}
