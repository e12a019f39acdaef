use serde::{Deserialize, Serialize};

use crate::collections::Shared;

pub const DEFAULT_PLOW_DECAY_TIMEOUT: f32 = 30.0;

pub struct FarmingDomain {
    pub tiles: Vec<Tile>,
    pub tiles_sequence: usize,
    pub plow_decay_timeout: f32,
}

impl Default for FarmingDomain {
    fn default() -> Self {
        Self {
            tiles: vec![],
            tiles_sequence: 0,
            plow_decay_timeout: DEFAULT_PLOW_DECAY_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeedKey(pub usize);

#[derive(Debug)]
pub struct SeedKind {
    pub id: SeedKey,
    pub name: String,
    pub grow_time: f32,
    pub stages: usize,
    pub cost: u32,
    pub sell_value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub usize);

pub struct Tile {
    pub id: TileId,
    pub place: [usize; 2],
    pub state: TileState,
}

/// A crop exists if and only if the tile is planted.
pub enum TileState {
    Bare,
    Plowed { idle: f32 },
    Planted { crop: Crop },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TilePhase {
    Bare,
    Plowed,
    Planted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TilePrompt {
    Plow,
    Plant,
    Harvest,
    Growing,
}

impl Tile {
    pub fn phase(&self) -> TilePhase {
        match self.state {
            TileState::Bare => TilePhase::Bare,
            TileState::Plowed { .. } => TilePhase::Plowed,
            TileState::Planted { .. } => TilePhase::Planted,
        }
    }

    pub fn prompt(&self) -> TilePrompt {
        match &self.state {
            TileState::Bare => TilePrompt::Plow,
            TileState::Plowed { .. } => TilePrompt::Plant,
            TileState::Planted { crop } if crop.is_ready() => TilePrompt::Harvest,
            TileState::Planted { .. } => TilePrompt::Growing,
        }
    }
}

pub struct Crop {
    pub kind: Shared<SeedKind>,
    pub age: f32,
    pub stage: usize,
}

impl Crop {
    pub fn new(kind: Shared<SeedKind>) -> Self {
        Self {
            kind,
            age: 0.0,
            stage: 0,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.age >= self.kind.grow_time
    }

    /// Accrues grow time and returns the new stage when the crop
    /// moves to another one.
    ///
    /// Entering the last stage marks the crop fully grown immediately,
    /// growth never waits inside the last stage.
    pub fn advance(&mut self, time: f32) -> Option<usize> {
        if self.is_ready() {
            return None;
        }
        self.age += time;
        let stage_duration = self.kind.grow_time / self.kind.stages as f32;
        let target = ((self.age / stage_duration) as usize).min(self.kind.stages - 1);
        if target != self.stage {
            self.stage = target;
            if target == self.kind.stages - 1 {
                self.age = self.kind.grow_time;
            }
            Some(target)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Farming {
    TileAppeared {
        tile: TileId,
        place: [usize; 2],
        phase: TilePhase,
        stage: Option<usize>,
    },
    TilePhaseChanged {
        tile: TileId,
        phase: TilePhase,
    },
    CropStageChanged {
        tile: TileId,
        stage: usize,
    },
    TilePlowed {
        tile: TileId,
    },
    CropPlanted {
        tile: TileId,
        seed: SeedKey,
    },
    CropHarvested {
        tile: TileId,
        seed: SeedKey,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FarmingError {
    TileNotFound { id: TileId },
    TileNotBare { id: TileId },
    TileNotPlowed { id: TileId },
    NothingPlanted { id: TileId },
    CropNotReady { tile: TileId },
    InvalidGrowthStages { seed: SeedKey },
}

impl FarmingDomain {
    pub fn load_tiles(&mut self, tiles: Vec<Tile>, sequence: usize) {
        self.tiles_sequence = sequence;
        self.tiles.extend(tiles);
    }
}
