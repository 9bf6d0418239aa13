use serde_yaml::{self, Value};

/// Wrapper around serde_yaml::Value for easier manipulation
#[derive(Debug, Clone)]
pub struct YamlNode {
    pub value: Value,
}

impl YamlNode {
    /// Create a new empty YAML node
    pub fn new() -> Self {
        YamlNode { value: Value::Null }
    }

    /// Create a YamlNode from a YAML string
    pub fn from_str(content: &str) -> Result<Self, serde_yaml::Error> {
        let value = serde_yaml::from_str(content)?;
        Ok(YamlNode { value })
    }

    /// Convert the YAML node to a string
    pub fn to_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.value)
    }

    /// Get a value from a dotted path, e.g. `proxy-groups.0.proxies`
    pub fn get_value(&self, path: &str) -> Option<&Value> {
        let mut current = &self.value;

        for part in path.split('.') {
            if part.is_empty() {
                continue;
            }

            current = match current {
                Value::Mapping(map) => map.get(part)?,
                Value::Sequence(seq) => seq.get(part.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Some(current)
    }
}

impl Default for YamlNode {
    fn default() -> Self {
        Self::new()
    }
}
