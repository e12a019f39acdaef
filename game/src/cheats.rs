use crate::api::{ActionError, Event};
use crate::farming::{Farming, TileState};
use crate::{occur, Game};

impl Game {
    pub(crate) fn cheat_grow_up_crops(&mut self) -> Result<Vec<Event>, ActionError> {
        let mut events = vec![];
        for tile in self.farming.tiles.iter_mut() {
            if let TileState::Planted { crop } = &mut tile.state {
                if !crop.is_ready() {
                    crop.age = crop.kind.grow_time;
                    crop.stage = crop.kind.stages - 1;
                    events.push(Farming::CropStageChanged {
                        tile: tile.id,
                        stage: crop.stage,
                    });
                }
            }
        }
        Ok(occur![events,])
    }
}
