use crate::api::{ActionError, Event};
use crate::farming::{SeedKey, TileId, TilePhase};
use crate::{occur, Game};

impl Game {
    pub(crate) fn interact_tile(
        &mut self,
        tile: TileId,
        selection: Option<SeedKey>,
    ) -> Result<Vec<Event>, ActionError> {
        let events = match self.farming.get_tile(tile)?.phase() {
            TilePhase::Bare => {
                let plow_tile = self.farming.plow_tile(tile)?;
                occur![plow_tile(),]
            }
            TilePhase::Plowed => {
                let seed = selection.ok_or(ActionError::NoSeedSelected)?;
                let kind = self.known.seeds.get(seed)?;
                let use_seed = self.inventory.use_seed(seed)?;
                let plant_crop = self.farming.plant_crop(tile, &kind)?;
                occur![use_seed(), plant_crop(),]
            }
            TilePhase::Planted => {
                let (sell_value, harvest_crop) = self.farming.harvest_crop(tile)?;
                occur![harvest_crop(), self.inventory.earn(sell_value),]
            }
        };
        Ok(events)
    }
}
