use crate::collections::Dictionary;
use crate::farming::{SeedKey, SeedKind};

#[derive(Debug, Default)]
pub struct Knowledge {
    pub seeds: Dictionary<SeedKey, SeedKind>,
}
