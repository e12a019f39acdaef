pub use harvest_crop::*;
pub use plant_crop::*;
pub use plow_tile::*;

mod harvest_crop;
mod plant_crop;
mod plow_tile;
