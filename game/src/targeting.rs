use log::warn;

use crate::api::{Action, ActionError, Event};
use crate::farming::{FarmingError, SeedKey, TileId, TilePrompt};
use crate::inventory::InventoryError;
use crate::math::{TileMath, VectorMath};
use crate::Game;

pub const DEFAULT_INTERACT_DISTANCE: f32 = 2.0;
pub const WARNING_DURATION: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    NoSeedSelected,
    OutOfSeeds,
    StillGrowing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prompt {
    Action(TilePrompt),
    Warning(Warning),
}

pub struct Interactor {
    pub range: f32,
    pub target: Option<TileId>,
    warning: Option<(Warning, f32)>,
}

impl Interactor {
    pub fn new(range: f32) -> Self {
        Self {
            range,
            target: None,
            warning: None,
        }
    }

    /// Retargets to the nearest tile in range, measured to tile centers.
    pub fn aim(&mut self, game: &Game, position: [f32; 2]) -> Option<TileId> {
        let mut nearest: Option<(TileId, f32)> = None;
        for tile in &game.farming.tiles {
            let distance = position.distance(tile.place.position());
            if distance > self.range {
                continue;
            }
            match nearest {
                Some((_, best)) if best <= distance => {}
                _ => nearest = Some((tile.id, distance)),
            }
        }
        self.target = nearest.map(|(id, _)| id);
        self.target
    }

    pub fn interact(&mut self, game: &mut Game, selection: Option<SeedKey>) -> Vec<Event> {
        let tile = match self.target {
            Some(tile) => tile,
            None => return vec![],
        };
        match game.perform_action(Action::InteractTile { tile, selection }) {
            Ok(events) => events,
            Err(error) => {
                self.report(error);
                vec![]
            }
        }
    }

    fn report(&mut self, error: ActionError) {
        let warning = match &error {
            ActionError::NoSeedSelected => Some(Warning::NoSeedSelected),
            ActionError::Inventory(InventoryError::NoSeeds { .. }) => Some(Warning::OutOfSeeds),
            ActionError::Farming(FarmingError::CropNotReady { .. }) => Some(Warning::StillGrowing),
            _ => None,
        };
        match warning {
            Some(warning) => {
                warn!("Interaction denied: {:?}", error);
                self.warning = Some((warning, WARNING_DURATION));
            }
            None => warn!("Interaction failed: {:?}", error),
        }
    }

    pub fn update(&mut self, time: f32) {
        if let Some((_, remaining)) = &mut self.warning {
            *remaining -= time;
            if *remaining <= 0.0 {
                self.warning = None;
            }
        }
    }

    /// Pulled by the UI layer every tick, an active warning
    /// overrides the tile prompt until it expires.
    pub fn prompt(&self, game: &Game) -> Option<Prompt> {
        if let Some((warning, _)) = self.warning {
            return Some(Prompt::Warning(warning));
        }
        let target = self.target?;
        let tile = game.farming.get_tile(target).ok()?;
        Some(Prompt::Action(tile.prompt()))
    }
}
