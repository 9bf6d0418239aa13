pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

pub use error::GenError;

// Re-export the main proxy types for easier access
pub use models::{ProxyNode, ProxyType};

// Re-export the run configuration
pub use settings::GenSettings;
