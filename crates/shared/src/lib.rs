pub mod markers;
pub mod models;
#[cfg(feature = "geojson-support")]
pub mod overlay;
pub mod routes;
pub mod viewport;
