use crate::farming::{Farming, FarmingDomain, FarmingError, TileId, TilePhase, TileState};

impl FarmingDomain {
    pub fn harvest_crop(
        &mut self,
        id: TileId,
    ) -> Result<(u32, impl FnOnce() -> Vec<Farming> + '_), FarmingError> {
        let tile = self.get_tile_mut(id)?;
        let (seed, sell_value) = match &tile.state {
            TileState::Planted { crop } => {
                if !crop.is_ready() {
                    return Err(FarmingError::CropNotReady { tile: id });
                }
                (crop.kind.id, crop.kind.sell_value)
            }
            _ => return Err(FarmingError::NothingPlanted { id }),
        };
        let command = move || {
            tile.state = TileState::Bare;
            vec![
                Farming::CropHarvested { tile: id, seed },
                Farming::TilePhaseChanged {
                    tile: id,
                    phase: TilePhase::Bare,
                },
            ]
        };
        Ok((sell_value, command))
    }
}
