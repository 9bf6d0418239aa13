use serde::Deserialize;

use crate::error::GenError;
use crate::models::SS_DEFAULT_NAME;
use crate::parser::explodes::DecodeOptions;
use crate::utils::file_get;

pub const DEFAULT_INPUT: &str = "ss.txt";
pub const DEFAULT_TEMPLATE: &str = "template.yaml";
pub const DEFAULT_OUTPUT: &str = "config.yaml";

fn default_input() -> String {
    DEFAULT_INPUT.to_string()
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_name() -> String {
    SS_DEFAULT_NAME.to_string()
}

fn default_true() -> bool {
    true
}

/// Everything one generation run needs to know.
///
/// Loaded from a TOML file where every key is optional:
///
/// ```toml
/// input = "ss.txt"
/// template = "template.yaml"
/// output = "config.yaml"
/// udp = true
/// default_name = "SS"
/// decode_remarks = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenSettings {
    /// Newline-separated `ss://` links.
    #[serde(default = "default_input")]
    pub input: String,
    /// Clash document the nodes are merged into.
    #[serde(default = "default_template")]
    pub template: String,
    /// Destination, overwritten on every run.
    #[serde(default = "default_output")]
    pub output: String,
    /// Emit `udp: true` on every node.
    #[serde(default = "default_true")]
    pub udp: bool,
    /// Name for links without a `#fragment`.
    #[serde(default = "default_name")]
    pub default_name: String,
    /// Percent-decode `#fragment` names.
    #[serde(default)]
    pub decode_remarks: bool,
}

impl Default for GenSettings {
    fn default() -> Self {
        GenSettings {
            input: default_input(),
            template: default_template(),
            output: default_output(),
            udp: default_true(),
            default_name: default_name(),
            decode_remarks: false,
        }
    }
}

impl GenSettings {
    pub fn load_from_content(content: &str) -> Result<Self, GenError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from_file(path: &str) -> Result<Self, GenError> {
        let content = file_get(path)?;
        let settings = Self::load_from_content(&content)?;
        log::info!("Loaded settings from {}", path);
        Ok(settings)
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            default_name: self.default_name.clone(),
            udp: self.udp,
            url_decode_remark: self.decode_remarks,
        }
    }
}
