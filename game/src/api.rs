use serde::{Deserialize, Serialize};

use crate::collections::DictionaryError;
use crate::farming::{Farming, FarmingError, SeedKey, TileId};
use crate::inventory::{Inventory, InventoryError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Action {
    InteractTile {
        tile: TileId,
        selection: Option<SeedKey>,
    },
    BuySeed {
        seed: SeedKey,
    },
    CheatGrowUpCrops,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Farming(Vec<Farming>),
    Inventory(Vec<Inventory>),
}

impl From<Vec<Farming>> for Event {
    fn from(events: Vec<Farming>) -> Self {
        Event::Farming(events)
    }
}

impl From<Vec<Inventory>> for Event {
    fn from(events: Vec<Inventory>) -> Self {
        Event::Inventory(events)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionError {
    NoSeedSelected,
    Farming(FarmingError),
    Inventory(InventoryError),
    Knowledge(DictionaryError),
}

impl From<FarmingError> for ActionError {
    fn from(error: FarmingError) -> Self {
        ActionError::Farming(error)
    }
}

impl From<InventoryError> for ActionError {
    fn from(error: InventoryError) -> Self {
        ActionError::Inventory(error)
    }
}

impl From<DictionaryError> for ActionError {
    fn from(error: DictionaryError) -> Self {
        ActionError::Knowledge(error)
    }
}
