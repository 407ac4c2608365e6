use flatmap_shared::models::Flat;
use std::path::Path;

pub const FLATS_FILE: &str = "flats.json";
pub const ISOCHRONE_FILE: &str = "isochrone.geojson";

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Summary of the demo data the frontend will fetch from `/static`.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoData {
    pub flats: usize,
    pub has_isochrone: bool,
}

impl DemoData {
    /// Check the static demo data up front so a broken file shows up in the
    /// server log instead of as an empty map.
    pub fn inspect(assets_dir: &Path) -> Result<Self, AssetError> {
        let flats_path = assets_dir.join(FLATS_FILE);
        let flats_data = std::fs::read_to_string(&flats_path).map_err(|source| AssetError::Read {
            path: flats_path.display().to_string(),
            source,
        })?;
        let flats: Vec<Flat> =
            serde_json::from_str(&flats_data).map_err(|source| AssetError::Parse {
                path: flats_path.display().to_string(),
                source,
            })?;

        let has_isochrone = assets_dir.join(ISOCHRONE_FILE).is_file();

        tracing::info!(flats = flats.len(), has_isochrone, "Loaded demo data");

        Ok(DemoData {
            flats: flats.len(),
            has_isochrone,
        })
    }
}
