pub mod flat_detail;
pub mod listings;
