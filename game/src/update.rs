use crate::api::Event;
use crate::{occur, Game};

impl Game {
    pub fn update(&mut self, time: f32) -> Vec<Event> {
        occur![self.farming.update(time),]
    }
}
