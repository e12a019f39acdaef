use crate::api::{ActionError, Event};
use crate::farming::SeedKey;
use crate::{occur, Game};

impl Game {
    pub(crate) fn buy_seed(&mut self, seed: SeedKey) -> Result<Vec<Event>, ActionError> {
        let kind = self.known.seeds.get(seed)?;
        let purchase = self.inventory.buy_seed(seed, kind.cost)?;
        Ok(occur![purchase(),])
    }
}
