//! # Envhub
//!
//! Environment registry wire types and injection-safe search clause building.
//!
//! Envhub models "environments" (remote API endpoints registered with a
//! management backend) and per-user saved filters over them, and turns the
//! free text typed into a search box into a SQL WHERE-clause fragment that is
//! safe to embed into a larger parameterized statement.
//!
//! The crate deliberately stops at the SQL boundary: it produces clause text
//! and bind parameters, and the caller owns statement assembly, execution,
//! and connection handling.
//!
//! ## Example
//!
//! ```rust
//! use envhub::models::Environment;
//! use envhub::search::{Dialect, build_search};
//!
//! let query = build_search("stag", Dialect::Sqlite, Environment::SEARCH_COLUMNS);
//! assert_eq!(query.clause, "LOWER(name) LIKE ? OR LOWER(api_url) LIKE ?");
//! assert_eq!(query.args, vec!["%s%t%a%g%", "%s%t%a%g%"]);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod models;
pub mod search;

// Re-exports for convenience
pub use config::{DatabaseConfig, DatabaseDriver, EnvhubConfig};
pub use models::{
    ConnectionTest, CreateEnvironment, CreateEnvironmentFilter, Environment, EnvironmentFilter,
    EnvironmentStatus, GroupBy, StatusFilter, TagMode, UpdateEnvironment, UpdateEnvironmentFilter,
};
pub use search::{Dialect, SearchQuery, build_search};

/// Error type for envhub operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
/// The search builder itself is total over its input domain and never raises
/// these; they come from the configuration layer.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - The configuration file is not valid TOML
    ///
    /// Malformed database driver strings do NOT raise this; they fall back to
    /// the postgres pattern syntax (see [`search::Dialect::parse`]).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - The configuration file cannot be read
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for envhub operations.
pub type Result<T> = std::result::Result<T, Error>;
