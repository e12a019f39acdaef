use log::info;

use crate::farming::{Farming, FarmingDomain, TilePhase, TileState};

impl FarmingDomain {
    pub fn update(&mut self, time: f32) -> Vec<Farming> {
        let mut events = vec![];
        let timeout = self.plow_decay_timeout;
        for tile in self.tiles.iter_mut() {
            match &mut tile.state {
                TileState::Bare => {}
                TileState::Plowed { idle } => {
                    *idle += time;
                    if *idle >= timeout {
                        info!("Plowed soil of tile {:?} decays back to bare ground", tile.id);
                        tile.state = TileState::Bare;
                        events.push(Farming::TilePhaseChanged {
                            tile: tile.id,
                            phase: TilePhase::Bare,
                        });
                    }
                }
                TileState::Planted { crop } => {
                    if let Some(stage) = crop.advance(time) {
                        events.push(Farming::CropStageChanged {
                            tile: tile.id,
                            stage,
                        });
                    }
                }
            }
        }
        events
    }
}
