use serde::{Deserialize, Serialize};

use super::buff::Buff;
use super::buildings::Buildings;
use super::mod_data::ModSaveData;
use super::preferences::Preferences;
use crate::{CURRENT_GAME_VERSION, DEFAULT_BAKERY_NAME, DEFAULT_SEED};

/// Wrinkler aggregate. The save tracks totals, not per-wrinkler instances.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Wrinklers {
    pub amount: f64,
    pub number: f64,
    pub shinies: f64,
    pub amount_shinies: f64,
}

/// The full save state.
///
/// Field order of the general-stats block below mirrors the wire's canonical
/// field order; `codec::stats` reads and writes them in declaration order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Save {
    /// Game version that wrote the save; gates the preferences width and the
    /// trailing general-stats field.
    pub version: f64,

    // Run metadata
    pub start_date: f64,
    pub full_date: f64,
    pub last_date: f64,
    pub bakery_name: String,
    pub seed: String,

    pub preferences: Preferences,

    // General stats, wire order.
    pub cookies: f64,
    pub cookies_earned: f64,
    pub cookie_clicks: f64,
    pub golden_clicks: f64,
    pub handmade_cookies: f64,
    pub missed_golden_clicks: f64,
    pub bg_type: f64,
    pub milk_type: f64,
    pub cookies_reset: f64,
    pub elder_wrath: f64,
    pub pledges: f64,
    pub pledge_t: f64,
    pub next_research: f64,
    pub research_t: f64,
    pub resets: f64,
    pub golden_clicks_local: f64,
    pub cookies_sucked: f64,
    pub wrinklers_popped: f64,
    pub santa_level: f64,
    pub reindeer_clicked: f64,
    pub season_t: f64,
    pub season_uses: f64,
    pub season: String,
    pub wrinklers: Wrinklers,
    pub prestige: f64,
    pub heavenly_chips: f64,
    pub heavenly_chips_spent: f64,
    pub heavenly_cookies: f64,
    pub ascension_mode: f64,
    /// Exactly 5 slots; empty string means the slot is empty (`-1` on the
    /// wire).
    pub permanent_upgrades: [String; 5],
    pub dragon_level: f64,
    pub dragon_aura: f64,
    pub dragon_aura2: f64,
    pub chime_type: f64,
    pub volume: f64,
    pub lumps: f64,
    pub lumps_total: f64,
    pub lump_t: f64,
    pub lump_refill: f64,
    /// Canonical sugar-lump kind name.
    pub lump_current_type: String,
    /// Vaulted upgrade names, sorted by canonical id.
    pub vault: Vec<String>,
    pub heralds: f64,
    #[serde(rename = "fortuneGC")]
    pub fortune_gc: bool,
    #[serde(rename = "fortuneCPS")]
    pub fortune_cps: bool,
    /// Only serialized to the wire when `version >= 2.04`.
    pub cookies_ps_raw_highest: f64,

    pub buildings: Buildings,

    /// Sorted by canonical id; disjoint from `unlocked_upgrades`.
    pub owned_upgrades: Vec<String>,
    /// Unlocked but not owned, sorted by canonical id.
    pub unlocked_upgrades: Vec<String>,
    /// Sorted by canonical id.
    pub achievements: Vec<String>,

    pub buffs: Vec<Buff>,

    pub mod_save_data: ModSaveData,
}

impl Default for Save {
    fn default() -> Self {
        Self {
            version: CURRENT_GAME_VERSION,
            start_date: 0.0,
            full_date: 0.0,
            last_date: 0.0,
            bakery_name: DEFAULT_BAKERY_NAME.to_string(),
            seed: DEFAULT_SEED.to_string(),
            preferences: Preferences::default(),
            cookies: 0.0,
            cookies_earned: 0.0,
            cookie_clicks: 0.0,
            golden_clicks: 0.0,
            handmade_cookies: 0.0,
            missed_golden_clicks: 0.0,
            bg_type: 0.0,
            milk_type: 0.0,
            cookies_reset: 0.0,
            elder_wrath: 0.0,
            pledges: 0.0,
            pledge_t: 0.0,
            next_research: 0.0,
            research_t: 0.0,
            resets: 0.0,
            golden_clicks_local: 0.0,
            cookies_sucked: 0.0,
            wrinklers_popped: 0.0,
            santa_level: 0.0,
            reindeer_clicked: 0.0,
            season_t: 0.0,
            season_uses: 0.0,
            season: String::new(),
            wrinklers: Wrinklers::default(),
            prestige: 0.0,
            heavenly_chips: 0.0,
            heavenly_chips_spent: 0.0,
            heavenly_cookies: 0.0,
            ascension_mode: 0.0,
            permanent_upgrades: Default::default(),
            dragon_level: 0.0,
            dragon_aura: 0.0,
            dragon_aura2: 0.0,
            chime_type: 0.0,
            volume: 50.0,
            lumps: -1.0,
            lumps_total: -1.0,
            lump_t: 0.0,
            lump_refill: 0.0,
            lump_current_type: "normal".to_string(),
            vault: Vec::new(),
            heralds: 0.0,
            fortune_gc: false,
            fortune_cps: false,
            cookies_ps_raw_highest: 0.0,
            buildings: Buildings::default(),
            owned_upgrades: Vec::new(),
            unlocked_upgrades: Vec::new(),
            achievements: Vec::new(),
            buffs: Vec::new(),
            mod_save_data: ModSaveData::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_save_is_a_fresh_run() {
        let save = Save::default();
        assert_eq!(save.version, CURRENT_GAME_VERSION);
        assert_eq!(save.bakery_name, DEFAULT_BAKERY_NAME);
        assert!(save.owned_upgrades.is_empty());
        assert!(save.buffs.is_empty());
        assert!(save.buildings.farm.minigame.is_none());
        assert_eq!(save.permanent_upgrades, <[String; 5]>::default());
    }
}
