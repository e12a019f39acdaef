use crate::farming::SeedKey;
use crate::inventory::{Inventory, InventoryDomain, InventoryError};

impl InventoryDomain {
    pub fn use_seed(
        &mut self,
        seed: SeedKey,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + '_, InventoryError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.seed == seed)
            .filter(|slot| slot.quantity > 0)
            .ok_or(InventoryError::NoSeeds { seed })?;
        let operation = move || {
            slot.quantity -= 1;
            vec![Inventory::SeedsChanged {
                seed,
                quantity: slot.quantity,
            }]
        };
        Ok(operation)
    }
}
