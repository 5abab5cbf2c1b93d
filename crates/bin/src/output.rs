//! Output formatting for documents and leaf listings.

use deeptree::{LeafPair, Value};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Compact,
    Pretty,
}

impl OutputFormat {
    pub fn from_flag(pretty: bool) -> Self {
        if pretty {
            OutputFormat::Pretty
        } else {
            OutputFormat::Compact
        }
    }

    /// Render a value as JSON text in this format.
    pub fn render(self, value: &Value) -> deeptree::Result<String> {
        match self {
            OutputFormat::Compact => value.to_json_string(),
            OutputFormat::Pretty => value.to_json_string_pretty(),
        }
    }
}

/// Render leaf pairs one per line as `<dot path>\t<compact json>`.
///
/// Leaf values are always compact so each leaf stays on one line.
pub fn render_leaves(pairs: &[LeafPair<'_>]) -> String {
    pairs
        .iter()
        .map(|pair| format!("{}\t{}", pair.key, pair.value))
        .collect::<Vec<_>>()
        .join("\n")
}
