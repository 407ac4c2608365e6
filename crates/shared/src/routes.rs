/// Path of the detail view for `flat_id`, nested under `current`.
pub fn flat_detail_path(current: &str, flat_id: &str) -> String {
    let base = current.trim_end_matches('/');
    format!("{}/{}", base, flat_id)
}

/// Strip any query string or fragment from a route string.
pub fn path_only(route: &str) -> &str {
    route.split(['?', '#']).next().unwrap_or(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_path_from_root() {
        assert_eq!(flat_detail_path("/", "7"), "/7");
    }

    #[test]
    fn test_detail_path_nested() {
        assert_eq!(flat_detail_path("/flats", "7"), "/flats/7");
        assert_eq!(flat_detail_path("/flats/", "7"), "/flats/7");
    }

    #[test]
    fn test_path_only() {
        assert_eq!(path_only("/flats?sort=price#top"), "/flats");
        assert_eq!(path_only("/"), "/");
    }
}
