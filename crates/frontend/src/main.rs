mod api;
mod components;
mod mapbox;
mod pages;

use dioxus::prelude::*;

use pages::flat_detail::FlatDetail;
use pages::listings::Listings;

/// Marker links resolve against the current path, so a flat's detail page
/// lives at `/<flat id>` under the listings root.
#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Listings {},
    #[route("/:id")]
    FlatDetail { id: String },
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    launch(App);
}
