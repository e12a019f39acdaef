pub use add_seed::*;
pub use buy_seed::*;
pub use earn::*;
pub use use_seed::*;

mod add_seed;
mod buy_seed;
mod earn;
mod use_seed;
