pub mod config;

// Re-export format converters
pub use config::formats::clash::{proxy_to_clash, proxy_to_clash_yaml};

// Re-export the generation pipeline
pub use config::subexport::{generate, GenReport};
