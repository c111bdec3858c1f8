//! Configuration builder

use crate::connection::FetchSizeConnection;
use crate::fetch_size::FetchSize;

/// Fetch size used when nothing else is configured.
pub const DEFAULT_FETCH_SIZE: FetchSize = FetchSize::new(1000);

/// Resolved fetch-size configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSizeConfig {
    pub fetch_size: FetchSize,
}

impl FetchSizeConfig {
    #[must_use]
    pub const fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    #[must_use]
    pub const fn fetch_size(&self) -> FetchSize {
        self.fetch_size
    }

    /// Wrap `conn` so its statements use this configuration's fetch size.
    pub const fn wrap<C>(&self, conn: C) -> FetchSizeConnection<C> {
        FetchSizeConnection::new(conn, self.fetch_size)
    }
}

impl Default for FetchSizeConfig {
    fn default() -> Self {
        ConfigBuilder::new().build()
    }
}

/// Configuration builder with fluent API
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    fetch_size: FetchSize,
}

impl ConfigBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fetch_size: DEFAULT_FETCH_SIZE,
        }
    }

    #[must_use]
    pub const fn fetch_size(mut self, fetch_size: FetchSize) -> Self {
        self.fetch_size = fetch_size;
        self
    }

    /// Build the configuration.
    ///
    /// Any fetch size is accepted; its meaning is up to the driver.
    #[must_use]
    pub const fn build(self) -> FetchSizeConfig {
        FetchSizeConfig {
            fetch_size: self.fetch_size,
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{Connection, Statement};
    use crate::mock::MockConnection;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build();
        assert_eq!(config.fetch_size(), DEFAULT_FETCH_SIZE);
        assert_eq!(config, FetchSizeConfig::default());
    }

    #[test]
    fn test_builder_fetch_size() {
        let config = FetchSizeConfig::builder()
            .fetch_size(FetchSize::new(250))
            .build();
        assert_eq!(config.fetch_size, FetchSize::new(250));
    }

    #[test]
    fn test_builder_accepts_driver_default() {
        let config = ConfigBuilder::default()
            .fetch_size(FetchSize::DRIVER_DEFAULT)
            .build();
        assert!(config.fetch_size().is_driver_default());
    }

    #[test]
    fn test_wrap_uses_configured_fetch_size() {
        let config = FetchSizeConfig::builder()
            .fetch_size(FetchSize::new(64))
            .build();
        let conn = config.wrap(MockConnection::new());
        assert_eq!(conn.fetch_size(), FetchSize::new(64));
        let stmt = conn.prepare_statement("SELECT 1").unwrap();
        assert_eq!(stmt.fetch_size().unwrap(), FetchSize::new(64));
    }
}
