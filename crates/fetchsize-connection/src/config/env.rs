//! Environment variable loading for configuration

use std::env;

use super::builder::ConfigBuilder;
use crate::Result;
use crate::fetch_size::FetchSize;

/// Environment variable names
mod vars {
    pub const DB_FETCH_SIZE: &str = "DB_FETCH_SIZE";
}

/// Load configuration from environment variables
///
/// Unlike unset variables, a set but unparsable `DB_FETCH_SIZE` is an error.
pub fn load_from_env(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    if let Ok(value) = env::var(vars::DB_FETCH_SIZE) {
        let fetch_size: FetchSize = value.parse()?;
        tracing::debug!(
            fetch_size = fetch_size.get(),
            "fetch size from {}",
            vars::DB_FETCH_SIZE
        );
        builder = builder.fetch_size(fetch_size);
    }

    Ok(builder)
}
