pub mod colour_map;
pub mod data;
pub mod input;
