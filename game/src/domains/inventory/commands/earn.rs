use crate::inventory::{Inventory, InventoryDomain};

impl InventoryDomain {
    pub fn earn(&mut self, amount: u32) -> Vec<Inventory> {
        self.money += amount as i32;
        vec![Inventory::MoneyChanged { money: self.money }]
    }
}
