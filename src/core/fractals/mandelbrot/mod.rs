pub mod algorithm;
pub mod colour_map;
pub mod errors;
pub mod limits;
pub mod normalize;
pub mod palette;
pub mod params;
