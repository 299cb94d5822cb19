use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrmError {
    /// Error opening a connection through the transport
    #[error("Connection error: {0}")]
    Connection(String),

    /// Error preparing a statement
    #[error("Prepare error: {0}")]
    Prepare(String),

    /// Error executing a prepared statement
    #[error("Execution error: {0}")]
    Execution(String),

    /// Error reading a row into its scan slots
    #[error("Row scan error: {0}")]
    RowScan(String),

    /// Error mapping a scanned value onto a record field
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Error parsing connection configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Error reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OrmError {
    /// Short name of the stage that failed, used as a structured log field.
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Connection(_) => "connection",
            Self::Prepare(_) => "prepare",
            Self::Execution(_) => "execution",
            Self::RowScan(_) => "row_scan",
            Self::Mapping(_) => "mapping",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
        }
    }
}

impl From<toml::de::Error> for OrmError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<core::num::TryFromIntError> for OrmError {
    fn from(err: core::num::TryFromIntError) -> Self {
        Self::Mapping(err.to_string())
    }
}

impl From<core::convert::Infallible> for OrmError {
    fn from(err: core::convert::Infallible) -> Self {
        match err {}
    }
}

/// Result type for data store operations
pub type Result<T> = std::result::Result<T, OrmError>;
