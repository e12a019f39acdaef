pub use buy_seed::*;
pub use interact_tile::*;

mod buy_seed;
mod interact_tile;
