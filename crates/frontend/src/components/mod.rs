pub mod flat_list;
pub mod map_viewer;
