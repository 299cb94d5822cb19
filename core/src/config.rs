//! Connection settings handed to a [`Transport`](crate::traits::Transport).
//!
//! Loaded from a TOML file or built in code:
//!
//! ```toml
//! host = "db.internal"
//! user = "reporter"
//! password = "secret"
//! database = "catalog"
//! # driver = "SQL Server"
//! ```

use core::fmt;
use serde::Deserialize;
use std::path::Path;

use crate::error::{OrmError, Result};

pub const DEFAULT_DRIVER: &str = "SQL Server";

fn default_driver() -> String {
    DEFAULT_DRIVER.to_string()
}

/// Host, credentials and database name for one server.
///
/// No validation is performed: empty values are passed through to the driver.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default = "default_driver")]
    pub driver: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub database: String,
}

impl ConnectionConfig {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            driver: default_driver(),
            host: host.into(),
            user: user.into(),
            password: password.into(),
            database: database.into(),
        }
    }

    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = driver.into();
        self
    }

    /// ODBC-style connection string.
    pub fn connection_string(&self) -> String {
        format!(
            "driver={{{}}};SERVER={};UID={};PWD={};DATABASE={}",
            self.driver, self.host, self.user, self.password, self.database
        )
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| OrmError::Config(format!("{}: {e}", path.display())))
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::new("", "", "", "")
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("driver", &self.driver)
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}
