pub mod farming;
pub mod inventory;
