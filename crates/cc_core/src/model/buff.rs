use serde::{Deserialize, Serialize};

use crate::ids::BUFFS;

/// A time-limited gameplay modifier, tagged by kind.
///
/// One variant per canonical buff kind (see `ids::BUFFS`; the variant's wire
/// type id is its index there) plus an `Unknown` fallback that preserves the
/// original type id and raw arguments of records this codec does not know.
/// All kinds carry `maxTime`/`time`; the rest of the payload is
/// kind-specific.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "name")]
pub enum Buff {
    #[serde(rename = "frenzy", rename_all = "camelCase")]
    Frenzy {
        max_time: f64,
        time: f64,
        #[serde(rename = "multCpS")]
        mult_cps: f64,
    },
    #[serde(rename = "blood frenzy", rename_all = "camelCase")]
    BloodFrenzy {
        max_time: f64,
        time: f64,
        #[serde(rename = "multCpS")]
        mult_cps: f64,
    },
    #[serde(rename = "clot", rename_all = "camelCase")]
    Clot {
        max_time: f64,
        time: f64,
        #[serde(rename = "multCpS")]
        mult_cps: f64,
    },
    #[serde(rename = "dragon harvest", rename_all = "camelCase")]
    DragonHarvest {
        max_time: f64,
        time: f64,
        #[serde(rename = "multCpS")]
        mult_cps: f64,
    },
    #[serde(rename = "everything must go", rename_all = "camelCase")]
    EverythingMustGo { max_time: f64, time: f64, power: f64 },
    #[serde(rename = "cursed finger", rename_all = "camelCase")]
    CursedFinger { max_time: f64, time: f64, power: f64 },
    #[serde(rename = "click frenzy", rename_all = "camelCase")]
    ClickFrenzy {
        max_time: f64,
        time: f64,
        mult_click: f64,
    },
    #[serde(rename = "dragonflight", rename_all = "camelCase")]
    Dragonflight {
        max_time: f64,
        time: f64,
        mult_click: f64,
    },
    #[serde(rename = "cookie storm", rename_all = "camelCase")]
    CookieStorm { max_time: f64, time: f64, power: f64 },
    #[serde(rename = "building buff", rename_all = "camelCase")]
    BuildingBuff {
        max_time: f64,
        time: f64,
        #[serde(rename = "multCpS")]
        mult_cps: f64,
        /// Canonical building name.
        building: String,
    },
    #[serde(rename = "building debuff", rename_all = "camelCase")]
    BuildingDebuff {
        max_time: f64,
        time: f64,
        #[serde(rename = "multCpS")]
        mult_cps: f64,
        /// Canonical building name.
        building: String,
    },
    #[serde(rename = "sugar blessing", rename_all = "camelCase")]
    SugarBlessing { max_time: f64, time: f64 },
    #[serde(rename = "haggler luck", rename_all = "camelCase")]
    HagglerLuck { max_time: f64, time: f64, power: f64 },
    #[serde(rename = "haggler misery", rename_all = "camelCase")]
    HagglerMisery { max_time: f64, time: f64, power: f64 },
    #[serde(rename = "pixie luck", rename_all = "camelCase")]
    PixieLuck { max_time: f64, time: f64, power: f64 },
    #[serde(rename = "pixie misery", rename_all = "camelCase")]
    PixieMisery { max_time: f64, time: f64, power: f64 },
    #[serde(rename = "magic adept", rename_all = "camelCase")]
    MagicAdept { max_time: f64, time: f64, power: f64 },
    #[serde(rename = "magic inept", rename_all = "camelCase")]
    MagicInept { max_time: f64, time: f64, power: f64 },
    #[serde(rename = "devastation", rename_all = "camelCase")]
    Devastation {
        max_time: f64,
        time: f64,
        mult_click: f64,
    },
    #[serde(rename = "sugar frenzy", rename_all = "camelCase")]
    SugarFrenzy {
        max_time: f64,
        time: f64,
        #[serde(rename = "multCpS")]
        mult_cps: f64,
    },
    #[serde(rename = "loan 1", rename_all = "camelCase")]
    Loan1 {
        max_time: f64,
        time: f64,
        #[serde(rename = "multCpS")]
        mult_cps: f64,
    },
    #[serde(rename = "loan 1 (interest)", rename_all = "camelCase")]
    Loan1Interest {
        max_time: f64,
        time: f64,
        #[serde(rename = "multCpS")]
        mult_cps: f64,
    },
    #[serde(rename = "loan 2", rename_all = "camelCase")]
    Loan2 {
        max_time: f64,
        time: f64,
        #[serde(rename = "multCpS")]
        mult_cps: f64,
    },
    #[serde(rename = "loan 2 (interest)", rename_all = "camelCase")]
    Loan2Interest {
        max_time: f64,
        time: f64,
        #[serde(rename = "multCpS")]
        mult_cps: f64,
    },
    #[serde(rename = "loan 3", rename_all = "camelCase")]
    Loan3 {
        max_time: f64,
        time: f64,
        #[serde(rename = "multCpS")]
        mult_cps: f64,
    },
    #[serde(rename = "loan 3 (interest)", rename_all = "camelCase")]
    Loan3Interest {
        max_time: f64,
        time: f64,
        #[serde(rename = "multCpS")]
        mult_cps: f64,
    },
    #[serde(rename = "unknown", rename_all = "camelCase")]
    Unknown {
        /// Original wire type id.
        id: u32,
        max_time: f64,
        time: f64,
        arg1: f64,
        arg2: f64,
        arg3: f64,
    },
}

impl Buff {
    /// Canonical kind name (`"unknown"` for the fallback variant).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Buff::Frenzy { .. } => "frenzy",
            Buff::BloodFrenzy { .. } => "blood frenzy",
            Buff::Clot { .. } => "clot",
            Buff::DragonHarvest { .. } => "dragon harvest",
            Buff::EverythingMustGo { .. } => "everything must go",
            Buff::CursedFinger { .. } => "cursed finger",
            Buff::ClickFrenzy { .. } => "click frenzy",
            Buff::Dragonflight { .. } => "dragonflight",
            Buff::CookieStorm { .. } => "cookie storm",
            Buff::BuildingBuff { .. } => "building buff",
            Buff::BuildingDebuff { .. } => "building debuff",
            Buff::SugarBlessing { .. } => "sugar blessing",
            Buff::HagglerLuck { .. } => "haggler luck",
            Buff::HagglerMisery { .. } => "haggler misery",
            Buff::PixieLuck { .. } => "pixie luck",
            Buff::PixieMisery { .. } => "pixie misery",
            Buff::MagicAdept { .. } => "magic adept",
            Buff::MagicInept { .. } => "magic inept",
            Buff::Devastation { .. } => "devastation",
            Buff::SugarFrenzy { .. } => "sugar frenzy",
            Buff::Loan1 { .. } => "loan 1",
            Buff::Loan1Interest { .. } => "loan 1 (interest)",
            Buff::Loan2 { .. } => "loan 2",
            Buff::Loan2Interest { .. } => "loan 2 (interest)",
            Buff::Loan3 { .. } => "loan 3",
            Buff::Loan3Interest { .. } => "loan 3 (interest)",
            Buff::Unknown { .. } => "unknown",
        }
    }

    /// Numeric wire type id. For `Unknown` this is the preserved original id.
    pub fn type_id(&self) -> u32 {
        match self {
            Buff::Unknown { id, .. } => *id,
            _ => BUFFS.id_of(self.kind_name()).expect("kind in canonical table") as u32,
        }
    }

    pub fn times(&self) -> (f64, f64) {
        match *self {
            Buff::Frenzy { max_time, time, .. }
            | Buff::BloodFrenzy { max_time, time, .. }
            | Buff::Clot { max_time, time, .. }
            | Buff::DragonHarvest { max_time, time, .. }
            | Buff::EverythingMustGo { max_time, time, .. }
            | Buff::CursedFinger { max_time, time, .. }
            | Buff::ClickFrenzy { max_time, time, .. }
            | Buff::Dragonflight { max_time, time, .. }
            | Buff::CookieStorm { max_time, time, .. }
            | Buff::BuildingBuff { max_time, time, .. }
            | Buff::BuildingDebuff { max_time, time, .. }
            | Buff::SugarBlessing { max_time, time }
            | Buff::HagglerLuck { max_time, time, .. }
            | Buff::HagglerMisery { max_time, time, .. }
            | Buff::PixieLuck { max_time, time, .. }
            | Buff::PixieMisery { max_time, time, .. }
            | Buff::MagicAdept { max_time, time, .. }
            | Buff::MagicInept { max_time, time, .. }
            | Buff::Devastation { max_time, time, .. }
            | Buff::SugarFrenzy { max_time, time, .. }
            | Buff::Loan1 { max_time, time, .. }
            | Buff::Loan1Interest { max_time, time, .. }
            | Buff::Loan2 { max_time, time, .. }
            | Buff::Loan2Interest { max_time, time, .. }
            | Buff::Loan3 { max_time, time, .. }
            | Buff::Loan3Interest { max_time, time, .. }
            | Buff::Unknown { max_time, time, .. } => (max_time, time),
        }
    }

    /// Zeroed buff of the kind at canonical id `id`, or `None` if the id is
    /// outside the table (callers then build `Unknown` themselves).
    pub fn default_for_id(id: u32) -> Option<Buff> {
        BUFFS.name_of(id as usize).and_then(Buff::default_for_name)
    }

    /// Zeroed buff of the named kind (accepts `"unknown"`).
    pub fn default_for_name(name: &str) -> Option<Buff> {
        let buff = match name {
            "frenzy" => Buff::Frenzy { max_time: 0.0, time: 0.0, mult_cps: 0.0 },
            "blood frenzy" => Buff::BloodFrenzy { max_time: 0.0, time: 0.0, mult_cps: 0.0 },
            "clot" => Buff::Clot { max_time: 0.0, time: 0.0, mult_cps: 0.0 },
            "dragon harvest" => Buff::DragonHarvest { max_time: 0.0, time: 0.0, mult_cps: 0.0 },
            "everything must go" => {
                Buff::EverythingMustGo { max_time: 0.0, time: 0.0, power: 0.0 }
            }
            "cursed finger" => Buff::CursedFinger { max_time: 0.0, time: 0.0, power: 0.0 },
            "click frenzy" => Buff::ClickFrenzy { max_time: 0.0, time: 0.0, mult_click: 0.0 },
            "dragonflight" => Buff::Dragonflight { max_time: 0.0, time: 0.0, mult_click: 0.0 },
            "cookie storm" => Buff::CookieStorm { max_time: 0.0, time: 0.0, power: 0.0 },
            "building buff" => Buff::BuildingBuff {
                max_time: 0.0,
                time: 0.0,
                mult_cps: 0.0,
                building: String::new(),
            },
            "building debuff" => Buff::BuildingDebuff {
                max_time: 0.0,
                time: 0.0,
                mult_cps: 0.0,
                building: String::new(),
            },
            "sugar blessing" => Buff::SugarBlessing { max_time: 0.0, time: 0.0 },
            "haggler luck" => Buff::HagglerLuck { max_time: 0.0, time: 0.0, power: 0.0 },
            "haggler misery" => Buff::HagglerMisery { max_time: 0.0, time: 0.0, power: 0.0 },
            "pixie luck" => Buff::PixieLuck { max_time: 0.0, time: 0.0, power: 0.0 },
            "pixie misery" => Buff::PixieMisery { max_time: 0.0, time: 0.0, power: 0.0 },
            "magic adept" => Buff::MagicAdept { max_time: 0.0, time: 0.0, power: 0.0 },
            "magic inept" => Buff::MagicInept { max_time: 0.0, time: 0.0, power: 0.0 },
            "devastation" => Buff::Devastation { max_time: 0.0, time: 0.0, mult_click: 0.0 },
            "sugar frenzy" => Buff::SugarFrenzy { max_time: 0.0, time: 0.0, mult_cps: 0.0 },
            "loan 1" => Buff::Loan1 { max_time: 0.0, time: 0.0, mult_cps: 0.0 },
            "loan 1 (interest)" => Buff::Loan1Interest { max_time: 0.0, time: 0.0, mult_cps: 0.0 },
            "loan 2" => Buff::Loan2 { max_time: 0.0, time: 0.0, mult_cps: 0.0 },
            "loan 2 (interest)" => Buff::Loan2Interest { max_time: 0.0, time: 0.0, mult_cps: 0.0 },
            "loan 3" => Buff::Loan3 { max_time: 0.0, time: 0.0, mult_cps: 0.0 },
            "loan 3 (interest)" => Buff::Loan3Interest { max_time: 0.0, time: 0.0, mult_cps: 0.0 },
            "unknown" => Buff::Unknown {
                id: 0,
                max_time: 0.0,
                time: 0.0,
                arg1: 0.0,
                arg2: 0.0,
                arg3: 0.0,
            },
            _ => return None,
        };
        Some(buff)
    }
}
