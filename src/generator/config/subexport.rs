use crate::error::GenError;
use crate::generator::config::formats::clash::proxy_to_clash;
use crate::parser::explodes::explode_sub;
use crate::settings::GenSettings;
use crate::utils::{file_get, file_write};
use log::info;

/// Summary of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenReport {
    /// Nodes written to the output.
    pub nodes: usize,
    /// Non-blank input lines that did not decode.
    pub skipped: usize,
    /// Path of the written document.
    pub output: String,
}

/// Read the link list and template named by `settings`, merge, and write the
/// result to `settings.output`.
///
/// Both inputs are read before anything is written, so a missing input or
/// a broken template leaves the output file untouched.
pub fn generate(settings: &GenSettings) -> Result<GenReport, GenError> {
    let links = file_get(&settings.input)?;
    let base_conf = file_get(&settings.template)?;

    let exploded = explode_sub(&links, &settings.decode_options());
    info!(
        "Loaded {} node(s) from {}",
        exploded.nodes.len(),
        settings.input
    );

    let content = proxy_to_clash(&exploded.nodes, &base_conf)?;
    file_write(&settings.output, &content)?;

    Ok(GenReport {
        nodes: exploded.nodes.len(),
        skipped: exploded.skipped,
        output: settings.output.clone(),
    })
}
