#![allow(dead_code)]

use std::collections::HashMap;

use game::api::{Action, ActionError, Event};
use game::farming::{Farming, SeedKey, SeedKind, Tile, TileId, TilePhase, TilePrompt, TileState};
use game::model::Knowledge;
use game::Game;

pub fn at<T>(x: T, y: T) -> [T; 2] {
    [x, y]
}

pub struct FarmScenario {
    pub game: Game,
    seeds: HashMap<String, SeedKey>,
    tiles: HashMap<String, TileId>,
    last_action_result: Result<Vec<Event>, ActionError>,
    last_update_events: Vec<Event>,
}

impl FarmScenario {
    pub fn new() -> Self {
        Self {
            game: Game::new(Knowledge::default()),
            seeds: Default::default(),
            tiles: Default::default(),
            last_action_result: Ok(vec![]),
            last_update_events: vec![],
        }
    }

    pub fn seed(&self, name: &str) -> SeedKey {
        *self.seeds.get(name).unwrap()
    }

    pub fn tile(&self, name: &str) -> TileId {
        *self.tiles.get(name).unwrap()
    }

    pub fn given_seed_kind(self, name: &str, grow_time: f32, stages: usize) -> Self {
        self.given_priced_seed_kind(name, grow_time, stages, 5, 10)
    }

    pub fn given_priced_seed_kind(
        mut self,
        name: &str,
        grow_time: f32,
        stages: usize,
        cost: u32,
        sell_value: u32,
    ) -> Self {
        let id = SeedKey(self.seeds.len() + 1);
        let kind = SeedKind {
            id,
            name: name.to_string(),
            grow_time,
            stages,
            cost,
            sell_value,
        };
        self.game.known.seeds.insert(id, name.to_string(), kind);
        self.seeds.insert(name.to_string(), id);
        self
    }

    pub fn given_tile(mut self, name: &str, place: [usize; 2]) -> Self {
        let id = TileId(self.game.farming.tiles_sequence + 1);
        let tile = Tile {
            id,
            place,
            state: TileState::Bare,
        };
        self.game.farming.load_tiles(vec![tile], id.0);
        self.tiles.insert(name.to_string(), id);
        self
    }

    pub fn given_seeds(mut self, seed: &str, amount: u32) -> Self {
        let seed = self.seed(seed);
        self.game.inventory.add_seed(seed, amount);
        self
    }

    pub fn given_money(mut self, money: i32) -> Self {
        self.game.inventory.money = money;
        self
    }

    pub fn given_plow_decay_timeout(mut self, timeout: f32) -> Self {
        self.game.farming.plow_decay_timeout = timeout;
        self
    }

    pub fn when_interact(mut self, tile: &str, selection: Option<&str>) -> Self {
        let tile = self.tile(tile);
        let selection = selection.map(|name| self.seed(name));
        self.last_action_result = self
            .game
            .perform_action(Action::InteractTile { tile, selection });
        self
    }

    pub fn when_buy(mut self, seed: &str) -> Self {
        let seed = self.seed(seed);
        self.last_action_result = self.game.perform_action(Action::BuySeed { seed });
        self
    }

    pub fn when_update(mut self, time: f32) -> Self {
        self.last_update_events = self.game.update(time);
        self
    }

    pub fn then_action_succeeded(self) -> Self {
        assert!(
            self.last_action_result.is_ok(),
            "expected action to succeed, got {:?}",
            self.last_action_result
        );
        self
    }

    pub fn then_action_failed(self, error: ActionError) -> Self {
        assert_eq!(self.last_action_result, Err(error));
        self
    }

    pub fn then_phase(self, tile: &str, phase: TilePhase) -> Self {
        let actual = self.game.farming.get_tile(self.tile(tile)).unwrap().phase();
        assert_eq!(actual, phase, "tile '{}' phase", tile);
        self
    }

    pub fn then_prompt(self, tile: &str, prompt: TilePrompt) -> Self {
        let actual = self
            .game
            .farming
            .get_tile(self.tile(tile))
            .unwrap()
            .prompt();
        assert_eq!(actual, prompt, "tile '{}' prompt", tile);
        self
    }

    pub fn then_stage(self, tile: &str, stage: usize) -> Self {
        match &self.game.farming.get_tile(self.tile(tile)).unwrap().state {
            TileState::Planted { crop } => assert_eq!(crop.stage, stage, "tile '{}' stage", tile),
            _ => panic!("tile '{}' has no crop", tile),
        }
        self
    }

    pub fn then_ready(self, tile: &str, ready: bool) -> Self {
        match &self.game.farming.get_tile(self.tile(tile)).unwrap().state {
            TileState::Planted { crop } => {
                assert_eq!(crop.is_ready(), ready, "tile '{}' readiness", tile)
            }
            _ => panic!("tile '{}' has no crop", tile),
        }
        self
    }

    pub fn then_quantity(self, seed: &str, quantity: u32) -> Self {
        let actual = self.game.inventory.quantity_of(self.seed(seed));
        assert_eq!(actual, quantity, "seed '{}' quantity", seed);
        self
    }

    pub fn then_money(self, money: i32) -> Self {
        assert_eq!(self.game.inventory.money, money);
        self
    }

    pub fn then_update_emitted(self, event: Farming) -> Self {
        assert!(
            self.farming_update_events().contains(&event),
            "expected {:?} in {:?}",
            event,
            self.last_update_events
        );
        self
    }

    pub fn then_update_emitted_nothing(self) -> Self {
        assert!(
            self.farming_update_events().is_empty(),
            "expected no farming events, got {:?}",
            self.last_update_events
        );
        self
    }

    fn farming_update_events(&self) -> Vec<Farming> {
        let mut farming = vec![];
        for event in &self.last_update_events {
            if let Event::Farming(events) = event {
                farming.extend(events.iter().cloned());
            }
        }
        farming
    }
}
