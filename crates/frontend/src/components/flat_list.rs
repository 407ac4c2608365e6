use dioxus::prelude::*;
use flatmap_shared::models::Flat;

/// Clicking the selected flat again clears the selection.
fn next_selection(current: Option<&Flat>, clicked: &Flat) -> Option<Flat> {
    match current {
        Some(flat) if flat.id == clicked.id => None,
        _ => Some(clicked.clone()),
    }
}

#[component]
pub fn FlatList(flats: Vec<Flat>, selected_flat: Signal<Option<Flat>>) -> Element {
    let selected_id = (*selected_flat.read()).as_ref().map(|f| f.id.clone());

    rsx! {
        div { class: "panel",
            h3 { "Flats" }
            if flats.is_empty() {
                p { class: "muted", "No flats to show." }
            }
            ul { class: "flat-list",
                for flat in flats {
                    li {
                        key: "{flat.id}",
                        class: if selected_id.as_deref() == Some(flat.id.as_str()) { "selected" } else { "" },
                        onclick: {
                            let flat = flat.clone();
                            move |_| {
                                let next = next_selection((*selected_flat.read()).as_ref(), &flat);
                                selected_flat.set(next);
                            }
                        },
                        span { class: "flat-price", "€{flat.price}" }
                        span { class: "flat-id", "#{flat.id}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(id: &str) -> Flat {
        Flat {
            id: id.to_string(),
            lat: 47.4,
            long: 8.5,
            price: 1700.0,
        }
    }

    #[test]
    fn test_select_from_nothing() {
        assert_eq!(next_selection(None, &flat("1")), Some(flat("1")));
    }

    #[test]
    fn test_select_other_flat() {
        assert_eq!(next_selection(Some(&flat("1")), &flat("2")), Some(flat("2")));
    }

    #[test]
    fn test_click_selected_clears() {
        assert_eq!(next_selection(Some(&flat("1")), &flat("1")), None);
    }
}
