// Service Configuration
// YAML settings for the listen address, log level and seed records

use crate::error::{ServiceError, ServiceResult};
use crate::models::User;
use crate::validation::validate;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LISTEN_ADDR: &str = "[::1]:50061";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Socket address the gRPC server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Default tracing filter directive, e.g. `info` or `user_service=debug`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Records the store starts with, in order
    #[serde(default)]
    pub seed_users: Vec<User>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            log_level: default_log_level(),
            seed_users: Vec::new(),
        }
    }
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ServiceConfig {
    pub fn from_yaml(content: &str) -> ServiceResult<Self> {
        let config: ServiceConfig = serde_yaml::from_str(content)?;
        config.check_seeds()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Load `path` when given, otherwise the default location if it exists,
    /// otherwise built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> ServiceResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    fn check_seeds(&self) -> ServiceResult<()> {
        for (index, user) in self.seed_users.iter().enumerate() {
            let errors = validate(user);
            if !errors.is_empty() {
                return Err(ServiceError::Config(format!(
                    "seed_users[{}] (id {}): {}",
                    index, user.id, errors
                )));
            }
        }
        Ok(())
    }
}

/// `~/.usersctl/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".usersctl").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = ServiceConfig::from_yaml("{}").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_seed_users_keep_order() {
        let yaml = r#"
listen_addr: "127.0.0.1:6000"
seed_users:
  - { id: 1, name: John Doe, email: john@example.com }
  - { id: 2, name: Jane Doe, email: jane@example.com }
"#;
        let config = ServiceConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:6000");
        assert_eq!(
            config.seed_users,
            vec![
                User::new(1, "John Doe", "john@example.com"),
                User::new(2, "Jane Doe", "jane@example.com"),
            ]
        );
    }

    #[test]
    fn test_seed_without_name_is_rejected() {
        let yaml = "seed_users:\n  - { id: 3, email: nobody@example.com }\n";
        let err = ServiceConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));
        assert!(err.to_string().contains("seed_users[0]"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level: debug").unwrap();

        let config = ServiceConfig::load_or_default(Some(file.path())).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.seed_users.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServiceConfig::load(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ServiceError::Io(_)));
    }
}
