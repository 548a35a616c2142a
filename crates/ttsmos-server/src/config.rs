use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub ratings_table_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source; missing keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT").unwrap_or_else(|| "3001".to_string());
        let port = port
            .parse::<u16>()
            .with_context(|| format!("Invalid PORT: {}", port))?;

        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| "./dist".to_string());
        let ratings_table_path =
            lookup("RATINGS_TABLE_PATH").unwrap_or_else(|| "./data/ratings-table.json".to_string());

        Ok(Self {
            port,
            static_dir: PathBuf::from(static_dir),
            ratings_table_path: PathBuf::from(ratings_table_path),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.static_dir, PathBuf::from("./dist"));
        assert_eq!(config.ratings_table_path, PathBuf::from("./data/ratings-table.json"));
        assert_eq!(config.bind_addr(), "0.0.0.0:3001");
    }

    #[test]
    fn test_overrides() {
        let vars = HashMap::from([
            ("PORT", "8080"),
            ("RATINGS_TABLE_PATH", "/srv/mos/table.json"),
        ]);
        let config = ServerConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.ratings_table_path, PathBuf::from("/srv/mos/table.json"));
    }

    #[test]
    fn test_bad_port() {
        let err = ServerConfig::from_lookup(|k| (k == "PORT").then(|| "http".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid PORT"));
    }
}
