use thiserror::Error;

/// Things that can go wrong while finding, reading or checking the
/// configuration file.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// The file exists (or was named explicitly) but could not be read.
    #[error("Unable to read configuration file {path}: {reason}")]
    CannotRead {
        /// Path we tried to read
        path: String,
        /// The underlying I/O failure
        reason: String,
    },
    /// The file is not valid TOML, or does not match the schema.
    #[error("Unable to parse configuration: {0}")]
    CannotParse(String),
    /// The file parsed, but a value is out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
