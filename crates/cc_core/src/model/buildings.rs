use serde::{Deserialize, Serialize};

use super::minigame::{Garden, Grimoire, Market, Pantheon};

/// Per-building counters shared by all 18 slots.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub amount: f64,
    pub bought: f64,
    pub total_cookies: f64,
    pub level: f64,
    pub muted: bool,
    pub highest: f64,
}

/// A building slot that can host a minigame. `minigame` is `None` when the
/// building has never been leveled (or when the caller explicitly supplied
/// none); the validator's presence rules decide which.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MinigameHost<M> {
    #[serde(flatten)]
    pub building: Building,
    pub minigame: Option<M>,
}

/// The 18 fixed building slots. Field order is canonical encoding order and
/// matches `ids::BUILDINGS`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Buildings {
    #[serde(rename = "Cursor")]
    pub cursor: Building,
    #[serde(rename = "Grandma")]
    pub grandma: Building,
    #[serde(rename = "Farm")]
    pub farm: MinigameHost<Garden>,
    #[serde(rename = "Mine")]
    pub mine: Building,
    #[serde(rename = "Factory")]
    pub factory: Building,
    #[serde(rename = "Bank")]
    pub bank: MinigameHost<Market>,
    #[serde(rename = "Temple")]
    pub temple: MinigameHost<Pantheon>,
    #[serde(rename = "Wizard tower")]
    pub wizard_tower: MinigameHost<Grimoire>,
    #[serde(rename = "Shipment")]
    pub shipment: Building,
    #[serde(rename = "Alchemy lab")]
    pub alchemy_lab: Building,
    #[serde(rename = "Portal")]
    pub portal: Building,
    #[serde(rename = "Time machine")]
    pub time_machine: Building,
    #[serde(rename = "Antimatter condenser")]
    pub antimatter_condenser: Building,
    #[serde(rename = "Prism")]
    pub prism: Building,
    #[serde(rename = "Chancemaker")]
    pub chancemaker: Building,
    #[serde(rename = "Fractal engine")]
    pub fractal_engine: Building,
    #[serde(rename = "Javascript console")]
    pub javascript_console: Building,
    #[serde(rename = "Idleverse")]
    pub idleverse: Building,
}

impl Buildings {
    /// Plain counters of the slot at canonical building id, in table order.
    pub fn base(&self, id: usize) -> Option<&Building> {
        Some(match id {
            0 => &self.cursor,
            1 => &self.grandma,
            2 => &self.farm.building,
            3 => &self.mine,
            4 => &self.factory,
            5 => &self.bank.building,
            6 => &self.temple.building,
            7 => &self.wizard_tower.building,
            8 => &self.shipment,
            9 => &self.alchemy_lab,
            10 => &self.portal,
            11 => &self.time_machine,
            12 => &self.antimatter_condenser,
            13 => &self.prism,
            14 => &self.chancemaker,
            15 => &self.fractal_engine,
            16 => &self.javascript_console,
            17 => &self.idleverse,
            _ => return None,
        })
    }

    pub fn base_mut(&mut self, id: usize) -> Option<&mut Building> {
        Some(match id {
            0 => &mut self.cursor,
            1 => &mut self.grandma,
            2 => &mut self.farm.building,
            3 => &mut self.mine,
            4 => &mut self.factory,
            5 => &mut self.bank.building,
            6 => &mut self.temple.building,
            7 => &mut self.wizard_tower.building,
            8 => &mut self.shipment,
            9 => &mut self.alchemy_lab,
            10 => &mut self.portal,
            11 => &mut self.time_machine,
            12 => &mut self.antimatter_condenser,
            13 => &mut self.prism,
            14 => &mut self.chancemaker,
            15 => &mut self.fractal_engine,
            16 => &mut self.javascript_console,
            17 => &mut self.idleverse,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::BUILDINGS;

    #[test]
    fn slot_accessors_cover_the_whole_table() {
        let buildings = Buildings::default();
        for id in 0..BUILDINGS.len() {
            assert!(buildings.base(id).is_some(), "no accessor for building id {}", id);
        }
        assert!(buildings.base(BUILDINGS.len()).is_none());
    }

    #[test]
    fn fresh_buildings_have_no_minigames() {
        let buildings = Buildings::default();
        assert!(buildings.farm.minigame.is_none());
        assert!(buildings.bank.minigame.is_none());
        assert!(buildings.temple.minigame.is_none());
        assert!(buildings.wizard_tower.minigame.is_none());
    }
}
