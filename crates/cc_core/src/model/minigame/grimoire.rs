use serde::{Deserialize, Serialize};

/// Wizard tower minigame state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Grimoire {
    pub magic: f64,
    pub spells_cast: f64,
    pub spells_cast_total: f64,
    pub on_minigame: bool,
}
