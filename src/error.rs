use thiserror::Error;

/// File-level failures. Any of these ends the run.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Settings error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}
