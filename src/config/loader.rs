use std::path::Path;

use super::{AppConfig, ConfigError};

/// Load configuration from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_config() {
        let result = load_config("/nonexistent/config.yaml");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let temp_file = temp_dir.path().join("config.yaml");
        std::fs::write(&temp_file, "invalid: yaml: content: [").unwrap();

        let result = load_config(&temp_file);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_valid() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let temp_file = temp_dir.path().join("config.yaml");

        let config_content = r#"
server:
  port: 3000
  host: "0.0.0.0"
  static_dir: "public"

upstream:
  url: "https://generativelanguage.googleapis.com"
  model: "gemini-2.0-flash"
  timeout_seconds: 120
"#;
        std::fs::write(&temp_file, config_content).unwrap();

        let config = load_config(&temp_file).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.upstream.model, "gemini-2.0-flash");
        assert_eq!(config.upstream.timeout_seconds, 120);
        assert!(config.upstream.api_key.is_none());
    }

    #[test]
    fn test_load_config_minimal() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let temp_file = temp_dir.path().join("config.yaml");

        // Empty mapping: every field has a default
        std::fs::write(&temp_file, "{}").unwrap();

        let config = load_config(&temp_file).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.upstream.base_url(),
            "https://generativelanguage.googleapis.com"
        );
    }

    #[test]
    fn test_config_from_file() {
        let result = AppConfig::from_file("/nonexistent/path.yaml");
        assert!(result.is_err());
    }
}
