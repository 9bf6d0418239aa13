pub mod base64;
pub mod file;
pub mod url;
pub mod yaml;

// Re-export common utilities
pub use file::{file_get, file_write};
pub use yaml::YamlNode;
