use crate::farming::SeedKey;
use crate::inventory::{Inventory, InventoryDomain, InventoryError, Slot};

impl InventoryDomain {
    pub fn buy_seed(
        &mut self,
        seed: SeedKey,
        cost: u32,
    ) -> Result<impl FnOnce() -> Vec<Inventory> + '_, InventoryError> {
        if self.money < cost as i32 {
            return Err(InventoryError::NotEnoughMoney {
                cost,
                money: self.money,
            });
        }
        let operation = move || {
            self.money -= cost as i32;
            let quantity = match self.slots.iter_mut().find(|slot| slot.seed == seed) {
                Some(slot) => {
                    slot.quantity += 1;
                    slot.quantity
                }
                None => {
                    self.slots.push(Slot { seed, quantity: 1 });
                    1
                }
            };
            vec![
                Inventory::MoneyChanged { money: self.money },
                Inventory::SeedsChanged { seed, quantity },
            ]
        };
        Ok(operation)
    }
}
