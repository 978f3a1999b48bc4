use serde::{Deserialize, Serialize};

/// Temple minigame state. Slots hold a canonical god name, or the empty
/// string for an unoccupied slot (`-1` on the wire).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pantheon {
    pub diamond_slot: String,
    pub ruby_slot: String,
    pub jade_slot: String,
    pub swaps: f64,
    pub swap_t: f64,
    pub on_minigame: bool,
}

impl Default for Pantheon {
    fn default() -> Self {
        Self {
            diamond_slot: String::new(),
            ruby_slot: String::new(),
            jade_slot: String::new(),
            // A fresh pantheon starts with all three swaps available.
            swaps: 3.0,
            swap_t: 0.0,
            on_minigame: false,
        }
    }
}

impl Pantheon {
    pub fn slots(&self) -> [&str; 3] {
        [&self.diamond_slot, &self.ruby_slot, &self.jade_slot]
    }
}
