//! Connection decorator that applies a fixed fetch size to every statement.
//!
//! Drivers stream large result sets in chunks; the fetch size is the number
//! of rows pulled per network round-trip. [`FetchSizeConnection`] wraps any
//! [`Connection`] and sets the same fetch size on every statement, prepared
//! statement and callable statement it hands out, so callers cannot forget
//! to.
//!
//! # Features
//!
//! - Composition over any [`Connection`]: owned, borrowed, boxed or `Arc`
//! - Driver errors returned untouched, never wrapped
//! - Fetch size from code, a TOML file, or `DB_FETCH_SIZE`
//! - `test-utils`: an in-memory recording driver in [`mock`]
//!
//! # Example
//!
//! ```rust,ignore
//! use fetchsize_connection::{config, Connection, Statement};
//!
//! let config = config::load_config()?.build();
//! let conn = config.wrap(driver_conn);
//!
//! let stmt = conn.prepare_statement("SELECT * FROM ORDERS")?;
//! assert_eq!(stmt.fetch_size()?, config.fetch_size());
//! ```

pub mod config;
pub mod connection;
pub mod driver;
pub mod error;
pub mod fetch_size;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

// Re-export main types for convenience
pub use config::{ConfigBuilder, DEFAULT_FETCH_SIZE, FetchSizeConfig};
pub use connection::FetchSizeConnection;
pub use driver::{
    AutoGeneratedKeys, Connection, ResultSetConcurrency, ResultSetHoldability, ResultSetType,
    Statement, TransactionIsolation,
};
pub use error::{Error, Result};
pub use fetch_size::FetchSize;
