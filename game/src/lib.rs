pub use domains::*;

use crate::api::{Action, ActionError, Event};
use crate::farming::FarmingDomain;
use crate::inventory::InventoryDomain;
use crate::model::Knowledge;

pub mod api;
pub mod collections;
pub mod data;
pub mod math;
pub mod model;
pub mod targeting;

mod actions;
mod cheats;
mod domains;
mod update;
mod view;

#[macro_export]
macro_rules! occur {
    ($($event:expr,)*) => {
        vec![$($event.into(),)*]
    };
}

pub struct Game {
    pub known: Knowledge,
    pub farming: FarmingDomain,
    pub inventory: InventoryDomain,
}

impl Game {
    pub fn new(known: Knowledge) -> Self {
        Self {
            known,
            farming: FarmingDomain::default(),
            inventory: InventoryDomain::default(),
        }
    }

    pub fn perform_action(&mut self, action: Action) -> Result<Vec<Event>, ActionError> {
        let mut events = vec![];
        match action {
            Action::InteractTile { tile, selection } => {
                events.extend(self.interact_tile(tile, selection)?)
            }
            Action::BuySeed { seed } => events.extend(self.buy_seed(seed)?),
            Action::CheatGrowUpCrops => events.extend(self.cheat_grow_up_crops()?),
        }
        Ok(events)
    }
}
