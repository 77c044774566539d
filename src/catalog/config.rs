//! # Configuration
//!
//! Server settings, resolved by the CLI from flags, then environment
//! variables, then the compiled defaults below.
//!
//! | Key | Env | Default |
//! |-----|-----|---------|
//! | `host` | `CATALOG_HOST` | `127.0.0.1` |
//! | `port` | `PORT` | `3001` |
//! | `db_file` | `DB_FILE` | `./db.json` |
//! | `prefix` | `API_PREFIX` | `/api/games` |

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_DB_FILE: &str = "./db.json";
pub const DEFAULT_PREFIX: &str = "/api/games";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_file: PathBuf,
    /// Resource prefix, always with one leading slash and no trailing slash.
    pub prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_file: PathBuf::from(DEFAULT_DB_FILE),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl ServerConfig {
    /// Set the resource prefix (normalizes slashes)
    pub fn set_prefix(&mut self, prefix: &str) {
        self.prefix = normalize_prefix(prefix);
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.set_prefix(prefix);
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `api/games/` and `/api/games` both become `/api/games`. A prefix made only
/// of slashes becomes empty, which routes the collection at the server root.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3001);
        assert_eq!(config.prefix, "/api/games");
        assert_eq!(config.db_file, PathBuf::from("./db.json"));
        assert_eq!(config.bind_addr(), "127.0.0.1:3001");
    }

    #[test]
    fn test_prefix_normalization_adds_leading_slash() {
        let config = ServerConfig::default().with_prefix("v2/games");
        assert_eq!(config.prefix, "/v2/games");
    }

    #[test]
    fn test_prefix_normalization_strips_trailing_slash() {
        let config = ServerConfig::default().with_prefix("/api/games/");
        assert_eq!(config.prefix, "/api/games");
    }

    #[test]
    fn test_root_prefix() {
        assert_eq!(normalize_prefix("/"), "");
    }
}
