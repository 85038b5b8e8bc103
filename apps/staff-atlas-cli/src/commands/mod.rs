pub mod export;
pub mod fill_coordinates;
pub mod generate_fixtures;
pub mod geocode;
pub mod import;
pub mod search;
