//! Configuration management
//!
//! Supports configuration loading with precedence: env > file > defaults

mod builder;
mod env;
mod file;

pub use builder::{ConfigBuilder, DEFAULT_FETCH_SIZE, FetchSizeConfig};

use crate::Result;

#[cfg(test)]
static ENV_MUTEX: parking_lot::Mutex<()> = parking_lot::Mutex::new(());

/// Load configuration with precedence: env > file > defaults
pub fn load_config() -> Result<ConfigBuilder> {
    let mut builder = ConfigBuilder::new();

    // Load from config file if exists
    if let Some(path) = file::find_config_file() {
        tracing::info!("Loading configuration from {}", path.display());
        builder = file::load_from_file(&path, builder)?;
    }

    // Override with environment variables
    builder = env::load_from_env(builder)?;

    Ok(builder)
}

/// Load configuration from a specific file path
pub fn load_config_from_path(path: &std::path::Path) -> Result<ConfigBuilder> {
    let mut builder = ConfigBuilder::new();

    builder = file::load_from_file(path, builder)?;

    // Override with environment variables
    builder = env::load_from_env(builder)?;

    Ok(builder)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::env::tests::{clear_env_vars, with_env_vars};
    use super::*;
    use crate::fetch_size::FetchSize;

    fn config_file(fetch_size: u32) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[connection]\nfetch_size = {fetch_size}").unwrap();
        file
    }

    #[test]
    fn test_load_config_no_env() {
        clear_env_vars(&["DB_FETCH_SIZE"], || {
            // A config file may exist on the host; loading must still succeed.
            assert!(load_config().is_ok());
        });
    }

    #[test]
    fn test_load_config_from_path() {
        let file = config_file(300);
        clear_env_vars(&["DB_FETCH_SIZE"], || {
            let config = load_config_from_path(file.path()).unwrap().build();
            assert_eq!(config.fetch_size, FetchSize::new(300));
        });
    }

    #[test]
    fn test_env_overrides_file() {
        let file = config_file(300);
        with_env_vars(&[("DB_FETCH_SIZE", "900")], || {
            let config = load_config_from_path(file.path()).unwrap().build();
            assert_eq!(config.fetch_size, FetchSize::new(900));
        });
    }

    #[test]
    fn test_bad_env_fails_even_with_valid_file() {
        let file = config_file(300);
        with_env_vars(&[("DB_FETCH_SIZE", "-1")], || {
            assert!(load_config_from_path(file.path()).is_err());
        });
    }
}
