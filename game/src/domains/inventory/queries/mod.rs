pub use quantity_of::*;

mod quantity_of;
