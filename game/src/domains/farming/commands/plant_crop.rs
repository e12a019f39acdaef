use crate::collections::Shared;
use crate::farming::{
    Crop, Farming, FarmingDomain, FarmingError, SeedKind, TileId, TilePhase, TileState,
};

impl FarmingDomain {
    pub fn plant_crop<'operation>(
        &'operation mut self,
        id: TileId,
        kind: &Shared<SeedKind>,
    ) -> Result<impl FnOnce() -> Vec<Farming> + 'operation, FarmingError> {
        if kind.stages < 1 || kind.grow_time <= 0.0 {
            return Err(FarmingError::InvalidGrowthStages { seed: kind.id });
        }
        let tile = self.get_tile_mut(id)?;
        if !matches!(tile.state, TileState::Plowed { .. }) {
            return Err(FarmingError::TileNotPlowed { id });
        }
        let kind = kind.clone();
        let command = move || {
            let seed = kind.id;
            tile.state = TileState::Planted {
                crop: Crop::new(kind),
            };
            vec![
                Farming::CropPlanted { tile: id, seed },
                Farming::TilePhaseChanged {
                    tile: id,
                    phase: TilePhase::Planted,
                },
                Farming::CropStageChanged { tile: id, stage: 0 },
            ]
        };
        Ok(command)
    }
}
