use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use docmirror::config::load_config;
///
/// let config = load_config(Path::new("docmirror.toml")).unwrap();
/// println!("Workers: {}", config.crawler.max_workers);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            [crawler]
            max-workers = 4
            request-timeout-secs = 5

            [output]
            docs-dir = "/tmp/docs"
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.crawler.max_workers, 4);
        assert_eq!(config.crawler.request_timeout_secs, 5);
        assert_eq!(config.output.docs_dir, "/tmp/docs");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.crawler.max_workers, 10);
        assert_eq!(config.crawler.request_timeout_secs, 10);
        assert_eq!(config.output.docs_dir, ".docmirror/docs");
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let file = write_config("[crawler]\nmax-workers = 2\n");

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.crawler.max_workers, 2);
        assert_eq!(config.crawler.request_timeout_secs, 10);
    }

    #[test]
    fn test_invalid_toml() {
        let file = write_config("[crawler\nmax-workers = 2");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config(Path::new("/nonexistent/docmirror.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config("[crawler]\nmax-workers = 0\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
