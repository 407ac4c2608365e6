use std::num::ParseIntError;
use std::path::PathBuf;

use flatmap_shared::models::{MapConfig, DEFAULT_STYLE_URL};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub assets_dir: PathBuf,
    pub dist_dir: PathBuf,
    pub map: MapConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// Separated from `from_env` so tests don't have to touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let access_token = lookup("MAPBOX_TOKEN").unwrap_or_default();
        if access_token.trim().is_empty() {
            tracing::warn!("MAPBOX_TOKEN is not set; the map will not load tiles");
        }
        let style_url = lookup("MAP_STYLE_URL").unwrap_or_else(|| DEFAULT_STYLE_URL.to_string());

        Ok(ServerConfig {
            port,
            assets_dir: PathBuf::from(lookup("ASSETS_DIR").unwrap_or_else(|| "assets".to_string())),
            dist_dir: PathBuf::from(lookup("DIST_DIR").unwrap_or_else(|| "dist".to_string())),
            map: MapConfig {
                access_token,
                style_url,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.assets_dir, PathBuf::from("assets"));
        assert_eq!(cfg.dist_dir, PathBuf::from("dist"));
        assert_eq!(cfg.map.style_url, "mapbox://styles/mapbox/streets-v9");
        assert!(!cfg.map.has_token());
    }

    #[test]
    fn test_overrides() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("MAPBOX_TOKEN", "pk.abc"),
            ("ASSETS_DIR", "/srv/assets"),
            ("MAP_STYLE_URL", "mapbox://styles/mapbox/light-v11"),
        ]))
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.map.access_token, "pk.abc");
        assert_eq!(cfg.assets_dir, PathBuf::from("/srv/assets"));
        assert_eq!(cfg.map.style_url, "mapbox://styles/mapbox/light-v11");
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
        assert!(err.to_string().starts_with("invalid PORT \"eighty\""));
    }
}
