use crate::farming::SeedKey;
use crate::inventory::InventoryDomain;

impl InventoryDomain {
    pub fn quantity_of(&self, seed: SeedKey) -> u32 {
        self.slots
            .iter()
            .find(|slot| slot.seed == seed)
            .map(|slot| slot.quantity)
            .unwrap_or(0)
    }
}
