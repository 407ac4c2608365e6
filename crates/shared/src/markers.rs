use crate::models::{Coordinates, Flat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    Blue,
    Yellow,
}

/// A flat tagged with the color it is drawn in. Rebuilt on every change
/// of the flats or the selection, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerViewModel {
    pub id: String,
    pub lat: f64,
    pub long: f64,
    pub price: f64,
    pub color: MarkerColor,
}

impl MarkerViewModel {
    fn tagged(flat: &Flat, color: MarkerColor) -> Self {
        Self {
            id: flat.id.clone(),
            lat: flat.lat,
            long: flat.long,
            price: flat.price,
            color,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.color == MarkerColor::Yellow
    }
}

/// Position of the user on the map. `key` is derived from the coordinates,
/// so the same location always renders under the same key.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMarker {
    pub key: String,
    pub lat: f64,
    pub long: f64,
}

/// Tag every flat blue, then move the selected flat (if any) to the end
/// as a yellow marker. Each id appears at most once for the selected flat.
pub fn derive_flat_markers(flats: Option<&[Flat]>, selected: Option<&Flat>) -> Vec<MarkerViewModel> {
    let mut markers: Vec<MarkerViewModel> = flats
        .unwrap_or_default()
        .iter()
        .map(|flat| MarkerViewModel::tagged(flat, MarkerColor::Blue))
        .collect();

    if let Some(selected) = selected {
        markers.retain(|marker| marker.id != selected.id);
        markers.push(MarkerViewModel::tagged(selected, MarkerColor::Yellow));
    }

    markers
}

pub fn derive_user_marker(coordinates: Option<Coordinates>) -> Option<UserMarker> {
    coordinates.map(|c| UserMarker {
        key: user_marker_key(c),
        lat: c.lat,
        long: c.long,
    })
}

fn user_marker_key(c: Coordinates) -> String {
    format!("user-{:x}-{:x}", c.lat.to_bits(), c.long.to_bits())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(id: &str, price: f64) -> Flat {
        Flat {
            id: id.to_string(),
            lat: 47.0 + price / 10_000.0,
            long: 8.5,
            price,
        }
    }

    fn summary(markers: &[MarkerViewModel]) -> Vec<(&str, MarkerColor)> {
        markers.iter().map(|m| (m.id.as_str(), m.color)).collect()
    }

    #[test]
    fn test_no_selection_all_blue() {
        let flats = vec![flat("1", 1200.0), flat("2", 1500.0)];
        let markers = derive_flat_markers(Some(flats.as_slice()), None);
        assert_eq!(
            summary(&markers),
            vec![("1", MarkerColor::Blue), ("2", MarkerColor::Blue)]
        );
    }

    #[test]
    fn test_selected_flat_replaces_blue_variant() {
        let flats = vec![flat("1", 1200.0), flat("2", 1500.0)];
        let markers = derive_flat_markers(Some(flats.as_slice()), Some(&flats[1]));
        assert_eq!(
            summary(&markers),
            vec![("1", MarkerColor::Blue), ("2", MarkerColor::Yellow)]
        );
    }

    #[test]
    fn test_selected_flat_moves_to_end() {
        let flats = vec![flat("1", 1200.0), flat("2", 1500.0), flat("3", 900.0)];
        let markers = derive_flat_markers(Some(flats.as_slice()), Some(&flats[0]));
        assert_eq!(
            summary(&markers),
            vec![
                ("2", MarkerColor::Blue),
                ("3", MarkerColor::Blue),
                ("1", MarkerColor::Yellow),
            ]
        );
    }

    #[test]
    fn test_unknown_selection_is_appended() {
        let flats = vec![flat("1", 1200.0), flat("2", 1500.0)];
        let other = flat("9", 2000.0);
        let markers = derive_flat_markers(Some(flats.as_slice()), Some(&other));
        assert_eq!(markers.len(), 3);
        assert_eq!(markers[2].id, "9");
        assert!(markers[2].is_selected());
        assert!(!markers[0].is_selected() && !markers[1].is_selected());
    }

    #[test]
    fn test_absent_flats_with_selection() {
        let selected = flat("4", 1100.0);
        let markers = derive_flat_markers(None, Some(&selected));
        assert_eq!(summary(&markers), vec![("4", MarkerColor::Yellow)]);
        assert!((markers[0].price - 1100.0).abs() < 1e-9);
    }

    #[test]
    fn test_absent_flats_without_selection() {
        assert!(derive_flat_markers(None, None).is_empty());
        assert!(derive_flat_markers(Some(&[][..]), None).is_empty());
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let flats = vec![flat("1", 1200.0), flat("2", 1500.0)];
        let first = derive_flat_markers(Some(flats.as_slice()), Some(&flats[0]));
        let second = derive_flat_markers(Some(flats.as_slice()), Some(&flats[0]));
        assert_eq!(first, second);
    }

    #[test]
    fn test_user_marker_absent() {
        assert!(derive_user_marker(None).is_none());
    }

    #[test]
    fn test_user_marker_position() {
        let marker = derive_user_marker(Some(Coordinates { lat: 47.37, long: 8.54 })).unwrap();
        assert!((marker.lat - 47.37).abs() < 1e-9);
        assert!((marker.long - 8.54).abs() < 1e-9);
    }

    #[test]
    fn test_user_marker_key_is_stable() {
        let here = Coordinates { lat: 47.37, long: 8.54 };
        let there = Coordinates { lat: 47.38, long: 8.54 };
        let a = derive_user_marker(Some(here)).unwrap();
        let b = derive_user_marker(Some(here)).unwrap();
        let c = derive_user_marker(Some(there)).unwrap();
        assert_eq!(a.key, b.key);
        assert_ne!(a.key, c.key);
    }
}
