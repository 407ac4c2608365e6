use dioxus::logger::tracing::{debug, warn};
use flatmap_shared::models::{Coordinates, Flat, MapConfig};
use flatmap_shared::overlay::{self, GeoJson};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub const CONFIG_PATH: &str = "/api/config";
pub const FLATS_PATH: &str = "/static/flats.json";
pub const ISOCHRONE_PATH: &str = "/static/isochrone.geojson";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unreadable response: {0}")]
    Decode(String),
    #[error("no browser window")]
    NoWindow,
    #[error("browser error: {0}")]
    Browser(String),
}

fn browser_error(value: JsValue) -> FetchError {
    FetchError::Browser(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Join the page origin and an absolute path.
pub fn endpoint_url(origin: &str, path: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), path)
}

fn origin() -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    window.location().origin().map_err(browser_error)
}

async fn get(path: &str) -> Result<reqwest::Response, FetchError> {
    let url = endpoint_url(&origin()?, path);
    debug!("GET {}", url);
    let resp = reqwest::get(&url).await?.error_for_status()?;
    Ok(resp)
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let result: Result<T, FetchError> = async { Ok(get(path).await?.json::<T>().await?) }.await;
    if let Err(e) = &result {
        warn!("fetching {} failed: {}", path, e);
    }
    result
}

pub async fn fetch_config() -> Result<MapConfig, FetchError> {
    get_json(CONFIG_PATH).await
}

pub async fn fetch_flats() -> Result<Vec<Flat>, FetchError> {
    get_json(FLATS_PATH).await
}

pub async fn fetch_isochrone() -> Result<GeoJson, FetchError> {
    let text = get(ISOCHRONE_PATH).await?.text().await?;
    overlay::parse_overlay(&text).ok_or_else(|| {
        warn!("{} is not valid GeoJSON, skipping overlay", ISOCHRONE_PATH);
        FetchError::Decode("not valid GeoJSON".to_string())
    })
}

/// Ask the browser for the user's position. Rejection by the user is an error
/// like any other; callers treat it as "no user marker".
pub async fn locate_user() -> Result<Coordinates, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let geolocation = window.navigator().geolocation().map_err(browser_error)?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    let position: web_sys::Position = JsFuture::from(promise)
        .await
        .map_err(|e| {
            warn!("geolocation unavailable");
            browser_error(e)
        })?
        .unchecked_into();
    let coords = position.coords();

    Ok(Coordinates {
        lat: coords.latitude(),
        long: coords.longitude(),
    })
}
