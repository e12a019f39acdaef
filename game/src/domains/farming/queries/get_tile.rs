use crate::farming::{FarmingDomain, FarmingError, Tile, TileId};

impl FarmingDomain {
    pub fn get_tile(&self, id: TileId) -> Result<&Tile, FarmingError> {
        self.tiles
            .iter()
            .find(|tile| tile.id == id)
            .ok_or(FarmingError::TileNotFound { id })
    }

    pub fn get_tile_mut(&mut self, id: TileId) -> Result<&mut Tile, FarmingError> {
        self.tiles
            .iter_mut()
            .find(|tile| tile.id == id)
            .ok_or(FarmingError::TileNotFound { id })
    }
}
