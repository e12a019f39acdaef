use serde::{Deserialize, Serialize};

use crate::farming::SeedKey;

#[derive(Default)]
pub struct InventoryDomain {
    pub slots: Vec<Slot>,
    pub money: i32,
}

/// Unique per seed kind, kept even when drained to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub seed: SeedKey,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inventory {
    SeedsChanged { seed: SeedKey, quantity: u32 },
    MoneyChanged { money: i32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryError {
    NoSeeds { seed: SeedKey },
    NotEnoughMoney { cost: u32, money: i32 },
}
