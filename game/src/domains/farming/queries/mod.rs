pub use get_tile::*;

mod get_tile;
