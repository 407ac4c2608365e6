use dioxus::prelude::*;
use flatmap_shared::models::{Coordinates, Flat, MapConfig};
use flatmap_shared::overlay::GeoJson;

use crate::api;
use crate::components::flat_list::FlatList;
use crate::components::map_viewer::MapViewer;

#[component]
pub fn Listings() -> Element {
    // Each layer is fetched independently; a failure only hides that layer.
    let config_resource = use_resource(|| api::fetch_config());
    let flats_resource = use_resource(|| api::fetch_flats());
    let isochrone_resource = use_resource(|| api::fetch_isochrone());
    let location_resource = use_resource(|| api::locate_user());

    let selected_flat = use_signal(|| None::<Flat>);

    let config: Option<Result<MapConfig, String>> = match &*config_resource.read() {
        Some(Ok(c)) => Some(Ok(c.clone())),
        Some(Err(e)) => Some(Err(e.to_string())),
        None => None,
    };
    let flats: Option<Vec<Flat>> = match &*flats_resource.read() {
        Some(Ok(f)) => Some(f.clone()),
        _ => None,
    };
    let geo_json: Option<GeoJson> = match &*isochrone_resource.read() {
        Some(Ok(g)) => Some(g.clone()),
        _ => None,
    };
    let user_coordinates: Option<Coordinates> = match &*location_resource.read() {
        Some(Ok(c)) => Some(*c),
        _ => None,
    };

    let map = match config {
        Some(Ok(config)) => rsx! {
            MapViewer {
                config: config,
                flats: flats.clone(),
                selected_flat: selected_flat,
                user_coordinates: user_coordinates,
                geo_json: geo_json,
            }
        },
        Some(Err(e)) => rsx! {
            div { class: "map-container map-unavailable", "Map unavailable: {e}" }
        },
        None => rsx! {
            div { class: "map-container map-loading", "Loading map…" }
        },
    };

    rsx! {
        div { class: "app",
            div { class: "header",
                h1 { "Flats" }
                if user_coordinates.is_some() {
                    span { class: "located", "Location found" }
                }
            }

            div { class: "sidebar",
                FlatList {
                    flats: flats.unwrap_or_default(),
                    selected_flat: selected_flat,
                }
            }

            {map}
        }
    }
}
