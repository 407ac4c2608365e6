//! Fixed styling for the isochrone overlay layer.

pub use geojson::GeoJson;
use serde::Serialize;

pub const SOURCE_ID: &str = "my-data";
pub const LAYER_ID: &str = "isoLayer";
pub const FILL_COLOR: &str = "#5a3fc0";
pub const FILL_OPACITY: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillPaint {
    #[serde(rename = "fill-color")]
    pub fill_color: &'static str,
    #[serde(rename = "fill-opacity")]
    pub fill_opacity: f64,
}

/// Layer description in the shape the map widget's `addLayer` expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillLayer {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub layer_type: &'static str,
    pub source: &'static str,
    pub paint: FillPaint,
}

/// The overlay as handed to the renderer: the GeoJSON untouched, plus the
/// layer style, which never depends on the content.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayData {
    pub geo_json: GeoJson,
    pub layer: FillLayer,
}

pub fn fill_layer() -> FillLayer {
    FillLayer {
        id: LAYER_ID,
        layer_type: "fill",
        source: SOURCE_ID,
        paint: FillPaint {
            fill_color: FILL_COLOR,
            fill_opacity: FILL_OPACITY,
        },
    }
}

pub fn derive_overlay(geo_json: Option<&GeoJson>) -> Option<OverlayData> {
    geo_json.map(|g| OverlayData {
        geo_json: g.clone(),
        layer: fill_layer(),
    })
}

/// Parse raw text into GeoJSON; anything unparsable means "no overlay".
pub fn parse_overlay(raw: &str) -> Option<GeoJson> {
    raw.parse::<GeoJson>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"contour": 15},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[8.5, 47.3], [8.6, 47.3], [8.6, 47.4], [8.5, 47.4], [8.5, 47.3]]]
            }
        }]
    }"#;

    #[test]
    fn test_absent_geojson_has_no_overlay() {
        assert!(derive_overlay(None).is_none());
    }

    #[test]
    fn test_overlay_passes_geojson_through() {
        let geo = parse_overlay(SQUARE).unwrap();
        let overlay = derive_overlay(Some(&geo)).unwrap();
        assert_eq!(overlay.geo_json, geo);
    }

    #[test]
    fn test_style_is_fixed_regardless_of_content() {
        let square = parse_overlay(SQUARE).unwrap();
        let point = parse_overlay(r#"{"type":"Point","coordinates":[8.5,47.3]}"#).unwrap();
        let a = derive_overlay(Some(&square)).unwrap();
        let b = derive_overlay(Some(&point)).unwrap();
        assert_eq!(a.layer, b.layer);
        assert_eq!(a.layer.paint.fill_color, "#5a3fc0");
        assert!((a.layer.paint.fill_opacity - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_layer_serializes_with_widget_keys() {
        let json = serde_json::to_value(fill_layer()).unwrap();
        assert_eq!(json["id"], "isoLayer");
        assert_eq!(json["type"], "fill");
        assert_eq!(json["source"], "my-data");
        assert_eq!(json["paint"]["fill-color"], "#5a3fc0");
    }

    #[test]
    fn test_malformed_input_is_ignored() {
        assert!(parse_overlay("not json").is_none());
        assert!(parse_overlay(r#"{"type":"Nonsense"}"#).is_none());
    }
}
