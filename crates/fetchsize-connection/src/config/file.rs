//! TOML configuration file loading

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::builder::ConfigBuilder;
use crate::Result;
use crate::error::Error;
use crate::fetch_size::FetchSize;

/// Configuration file locations checked in order
const CONFIG_PATHS: &[&str] = &[
    "./fetchsize-connection.toml",
    "~/.config/fetchsize-connection/config.toml",
    "/etc/fetchsize-connection/config.toml",
];

/// Find the first existing configuration file
pub fn find_config_file() -> Option<PathBuf> {
    for path_str in CONFIG_PATHS {
        let path = if path_str.starts_with('~') {
            if let Ok(home) = std::env::var("HOME") {
                PathBuf::from(path_str.replacen('~', &home, 1))
            } else {
                continue;
            }
        } else {
            PathBuf::from(path_str)
        };

        if path.exists() {
            return Some(path);
        }
    }
    None
}

/// Load configuration from a TOML file
pub fn load_from_file(path: &Path, builder: ConfigBuilder) -> Result<ConfigBuilder> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let file_config: FileConfig =
        toml::from_str(&content).map_err(|e| Error::parse(path, e.to_string()))?;

    Ok(apply_file_config(builder, file_config))
}

fn apply_file_config(mut builder: ConfigBuilder, config: FileConfig) -> ConfigBuilder {
    if let Some(conn) = config.connection
        && let Some(fetch_size) = conn.fetch_size
    {
        builder = builder.fetch_size(fetch_size);
    }

    builder
}

/// TOML file structure
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    connection: Option<ConnectionSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConnectionSection {
    fetch_size: Option<FetchSize>,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_fetch_size() {
        let file = write_config(
            r"
[connection]
fetch_size = 5000
",
        );

        let config = load_from_file(file.path(), ConfigBuilder::new())
            .unwrap()
            .build();
        assert_eq!(config.fetch_size, FetchSize::new(5000));
    }

    #[test]
    fn test_empty_file_keeps_defaults() {
        let file = write_config("");
        let config = load_from_file(file.path(), ConfigBuilder::new())
            .unwrap()
            .build();
        assert_eq!(config.fetch_size, crate::config::DEFAULT_FETCH_SIZE);
    }

    #[test]
    fn test_section_without_fetch_size() {
        let file = write_config("[connection]\n");
        let builder = ConfigBuilder::new().fetch_size(FetchSize::new(7));
        let config = load_from_file(file.path(), builder).unwrap().build();
        assert_eq!(config.fetch_size, FetchSize::new(7));
    }

    #[test]
    fn test_negative_fetch_size_is_parse_error() {
        let file = write_config("[connection]\nfetch_size = -1\n");
        let err = load_from_file(file.path(), ConfigBuilder::new()).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_string_fetch_size_is_parse_error() {
        let file = write_config("[connection]\nfetch_size = \"many\"\n");
        let err = load_from_file(file.path(), ConfigBuilder::new()).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let file = write_config("[connection]\nfetchsize = 10\n");
        let err = load_from_file(file.path(), ConfigBuilder::new()).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("fetchsize"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_from_file(
            Path::new("/nonexistent/fetchsize-connection.toml"),
            ConfigBuilder::new(),
        )
        .unwrap_err();
        assert!(err.is_io());
    }
}
