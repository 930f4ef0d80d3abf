pub mod algorithm;
pub mod colour_map;
pub mod generator;
pub mod params;
