use crate::farming::SeedKey;
use crate::inventory::{Inventory, InventoryDomain, Slot};

impl InventoryDomain {
    pub fn add_seed(&mut self, seed: SeedKey, amount: u32) -> Vec<Inventory> {
        if amount == 0 {
            return vec![];
        }
        let quantity = match self.slots.iter_mut().find(|slot| slot.seed == seed) {
            Some(slot) => {
                slot.quantity += amount;
                slot.quantity
            }
            None => {
                self.slots.push(Slot {
                    seed,
                    quantity: amount,
                });
                amount
            }
        };
        vec![Inventory::SeedsChanged { seed, quantity }]
    }
}
