use crate::models::ProxyNode;
use crate::parser::explodes::ss::{explode_ss, DecodeOptions};
use log::{debug, info};

/// Nodes decoded from a link list, plus how many lines were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplodeResult {
    pub nodes: Vec<ProxyNode>,
    pub skipped: usize,
}

impl ExplodeResult {
    /// Display names of the decoded nodes, in input order.
    pub fn names(&self) -> Vec<String> {
        self.nodes.iter().map(|node| node.name.clone()).collect()
    }
}

/// Explode newline-separated share-links into nodes
///
/// Lines are trimmed and blank lines ignored. A line that fails to decode is
/// counted in `skipped` and does not stop the remaining lines.
pub fn explode_sub(sub: &str, options: &DecodeOptions) -> ExplodeResult {
    let mut result = ExplodeResult::default();

    for (index, line) in sub.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match explode_ss(line, options) {
            Ok(node) => result.nodes.push(node),
            Err(e) => {
                debug!("Skipping line {}: {}", index + 1, e);
                result.skipped += 1;
            }
        }
    }

    if result.skipped > 0 {
        info!(
            "Decoded {} node(s), skipped {} line(s)",
            result.nodes.len(),
            result.skipped
        );
    }

    result
}
