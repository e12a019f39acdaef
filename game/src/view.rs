use crate::api::Event;
use crate::farming::{Farming, TileState};
use crate::inventory::Inventory;
use crate::{occur, Game};

impl Game {
    /// Initial sync for a freshly connected view, one appearance
    /// event per tile plus the current inventory.
    pub fn look_around(&self) -> Vec<Event> {
        let mut tiles = vec![];
        for tile in &self.farming.tiles {
            let stage = match &tile.state {
                TileState::Planted { crop } => Some(crop.stage),
                _ => None,
            };
            tiles.push(Farming::TileAppeared {
                tile: tile.id,
                place: tile.place,
                phase: tile.phase(),
                stage,
            });
        }
        let mut inventory = vec![Inventory::MoneyChanged {
            money: self.inventory.money,
        }];
        for slot in &self.inventory.slots {
            inventory.push(Inventory::SeedsChanged {
                seed: slot.seed,
                quantity: slot.quantity,
            });
        }
        occur![tiles, inventory,]
    }
}
