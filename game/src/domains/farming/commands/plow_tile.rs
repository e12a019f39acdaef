use crate::farming::{Farming, FarmingDomain, FarmingError, TileId, TilePhase, TileState};

impl FarmingDomain {
    pub fn plow_tile(
        &mut self,
        id: TileId,
    ) -> Result<impl FnOnce() -> Vec<Farming> + '_, FarmingError> {
        let tile = self.get_tile_mut(id)?;
        if !matches!(tile.state, TileState::Bare) {
            return Err(FarmingError::TileNotBare { id });
        }
        let command = move || {
            tile.state = TileState::Plowed { idle: 0.0 };
            vec![
                Farming::TilePlowed { tile: id },
                Farming::TilePhaseChanged {
                    tile: id,
                    phase: TilePhase::Plowed,
                },
            ]
        };
        Ok(command)
    }
}
