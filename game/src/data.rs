use log::info;
use serde::Deserialize;

use crate::farming::{SeedKey, SeedKind};
use crate::model::Knowledge;

#[derive(Debug)]
pub enum DataError {
    Json(serde_json::Error),
    InvalidSeedKind { name: String },
    DuplicateSeedName { name: String },
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        DataError::Json(error)
    }
}

#[derive(Debug, Deserialize)]
pub struct SeedKindConfig {
    pub name: String,
    pub grow_time: f32,
    pub stages: usize,
    pub cost: u32,
    pub sell_value: u32,
}

pub fn load_knowledge(text: &str) -> Result<Knowledge, DataError> {
    let configs: Vec<SeedKindConfig> = serde_json::from_str(text)?;
    let mut knowledge = Knowledge::default();
    for (index, config) in configs.into_iter().enumerate() {
        if config.stages < 1 || config.grow_time <= 0.0 {
            return Err(DataError::InvalidSeedKind { name: config.name });
        }
        if knowledge.seeds.find(&config.name).is_ok() {
            return Err(DataError::DuplicateSeedName { name: config.name });
        }
        let id = SeedKey(index + 1);
        let name = config.name;
        let kind = SeedKind {
            id,
            name: name.clone(),
            grow_time: config.grow_time,
            stages: config.stages,
            cost: config.cost,
            sell_value: config.sell_value,
        };
        knowledge.seeds.insert(id, name, kind);
    }
    info!("Loaded {} seed kinds", knowledge.seeds.len());
    Ok(knowledge)
}
