//! Web Mercator math for placing markers over the map canvas.
//!
//! The widget renders 512px world tiles, so the world is
//! `TILE_SIZE * 2^zoom` pixels wide at a given zoom level.
//! Rotation and pitch are disabled on the widget, which keeps this
//! projection exact.

use std::f64::consts::PI;

pub const DEFAULT_LATITUDE: f64 = 47.3983;
pub const DEFAULT_LONGITUDE: f64 = 8.5417;
pub const DEFAULT_ZOOM: f64 = 8.0;

pub const TILE_SIZE: f64 = 512.0;

/// Latitude limit of the Web Mercator square.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    /// Project a lat/long to pixel coordinates relative to the top-left corner
    /// of a `width` x `height` container centered on this viewport.
    pub fn project(&self, lat: f64, long: f64, width: f64, height: f64) -> (f64, f64) {
        let scale = world_size(self.zoom);
        let (cx, cy) = mercator_xy(self.latitude, self.longitude);
        let (px, py) = mercator_xy(lat, long);
        (
            (px - cx) * scale + width / 2.0,
            (py - cy) * scale + height / 2.0,
        )
    }
}

/// World width in pixels at `zoom`.
pub fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * 2f64.powf(zoom)
}

/// Normalized mercator coordinates in [0, 1]; origin is the north-west corner.
pub fn mercator_xy(lat: f64, long: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = (180.0 + long) / 360.0;
    let y = (180.0 - (180.0 / PI) * (PI / 4.0 + lat * PI / 360.0).tan().ln()) / 360.0;
    (x, y)
}

/// Whether a projected point lies inside the container, widened by `margin` pixels
/// on every side.
pub fn within_container(x: f64, y: f64, width: f64, height: f64, margin: f64) -> bool {
    x >= -margin && y >= -margin && x <= width + margin && y <= height + margin
}
