use dioxus::prelude::*;
use flatmap_shared::models::Flat;

use crate::api;
use crate::Route;

fn find_flat<'a>(flats: &'a [Flat], id: &str) -> Option<&'a Flat> {
    flats.iter().find(|f| f.id == id)
}

#[component]
pub fn FlatDetail(id: String) -> Element {
    let flats_resource = use_resource(|| api::fetch_flats());

    let body = match &*flats_resource.read() {
        None => rsx! { p { "Loading…" } },
        Some(Err(e)) => rsx! { p { class: "error", "Could not load flat: {e}" } },
        Some(Ok(flats)) => match find_flat(flats, &id) {
            Some(flat) => {
                let position = format!("{:.5}, {:.5}", flat.lat, flat.long);
                rsx! {
                    h2 { "Flat #{flat.id}" }
                    dl {
                        dt { "Rent" }
                        dd { "€{flat.price}" }
                        dt { "Position" }
                        dd { "{position}" }
                    }
                }
            }
            None => rsx! { p { "No flat with id {id}." } },
        },
    };

    rsx! {
        div { class: "app detail",
            div { class: "header",
                Link { to: Route::Listings {}, "← Back to map" }
            }
            div { class: "panel", {body} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_flat() {
        let flats = vec![
            Flat { id: "1".into(), lat: 47.0, long: 8.0, price: 1000.0 },
            Flat { id: "2".into(), lat: 47.1, long: 8.1, price: 1200.0 },
        ];
        assert_eq!(find_flat(&flats, "2").map(|f| f.price), Some(1200.0));
        assert!(find_flat(&flats, "3").is_none());
    }
}
