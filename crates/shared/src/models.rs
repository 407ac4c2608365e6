use serde::{Deserialize, Serialize};

/// Tile style used when no override is configured.
pub const DEFAULT_STYLE_URL: &str = "mapbox://styles/mapbox/streets-v9";

/// A rental listing with a geographic position and a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flat {
    pub id: String,
    pub lat: f64,
    pub long: f64,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

/// Runtime configuration for the map widget.
///
/// Served by the backend from its process environment and handed to the
/// viewer as a prop, so nothing on the client reads ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub access_token: String,
    #[serde(default = "default_style_url")]
    pub style_url: String,
}

fn default_style_url() -> String {
    DEFAULT_STYLE_URL.to_string()
}

impl MapConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            style_url: default_style_url(),
        }
    }

    pub fn has_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_wire_names() {
        let flat: Flat =
            serde_json::from_str(r#"{"id":"a1","lat":47.1,"long":8.2,"price":1850}"#).unwrap();
        assert_eq!(flat.id, "a1");
        assert!((flat.long - 8.2).abs() < 1e-9);
        assert!((flat.price - 1850.0).abs() < 1e-9);
    }

    #[test]
    fn test_map_config_camel_case() {
        let json = serde_json::to_value(MapConfig::new("pk.test")).unwrap();
        assert_eq!(json["accessToken"], "pk.test");
        assert_eq!(json["styleUrl"], DEFAULT_STYLE_URL);
    }

    #[test]
    fn test_map_config_style_defaults_when_missing() {
        let cfg: MapConfig = serde_json::from_str(r#"{"accessToken":"pk.x"}"#).unwrap();
        assert_eq!(cfg.style_url, DEFAULT_STYLE_URL);
        assert!(cfg.has_token());
    }

    #[test]
    fn test_blank_token_is_not_a_token() {
        assert!(!MapConfig::new("  ").has_token());
        assert!(!MapConfig::default().has_token());
    }
}
