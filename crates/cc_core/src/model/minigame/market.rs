use serde::{Deserialize, Serialize};

/// Price movement regime of one market good.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum GoodMode {
    #[default]
    Stable,
    SlowRise,
    SlowFall,
    FastRise,
    FastFall,
    Chaotic,
}

impl From<GoodMode> for u8 {
    fn from(mode: GoodMode) -> u8 {
        match mode {
            GoodMode::Stable => 0,
            GoodMode::SlowRise => 1,
            GoodMode::SlowFall => 2,
            GoodMode::FastRise => 3,
            GoodMode::FastFall => 4,
            GoodMode::Chaotic => 5,
        }
    }
}

impl TryFrom<u8> for GoodMode {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(GoodMode::Stable),
            1 => Ok(GoodMode::SlowRise),
            2 => Ok(GoodMode::SlowFall),
            3 => Ok(GoodMode::FastRise),
            4 => Ok(GoodMode::FastFall),
            5 => Ok(GoodMode::Chaotic),
            _ => Err(format!("{} is not a market mode", id)),
        }
    }
}

/// State of one traded commodity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoodState {
    pub value: f64,
    pub mode: GoodMode,
    pub delta: f64,
    pub duration_ticks: f64,
    pub stock_held: f64,
    pub hidden: bool,
    pub last_action: f64,
}

/// The 16 commodities, by ticker, in canonical order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MarketGoods {
    #[serde(rename = "CRL")]
    pub crl: GoodState,
    #[serde(rename = "CHC")]
    pub chc: GoodState,
    #[serde(rename = "BTR")]
    pub btr: GoodState,
    #[serde(rename = "SUG")]
    pub sug: GoodState,
    #[serde(rename = "NUT")]
    pub nut: GoodState,
    #[serde(rename = "SLT")]
    pub slt: GoodState,
    #[serde(rename = "VNL")]
    pub vnl: GoodState,
    #[serde(rename = "EGG")]
    pub egg: GoodState,
    #[serde(rename = "CNM")]
    pub cnm: GoodState,
    #[serde(rename = "CRM")]
    pub crm: GoodState,
    #[serde(rename = "JAM")]
    pub jam: GoodState,
    #[serde(rename = "WCH")]
    pub wch: GoodState,
    #[serde(rename = "HNY")]
    pub hny: GoodState,
    #[serde(rename = "CKI")]
    pub cki: GoodState,
    #[serde(rename = "RCP")]
    pub rcp: GoodState,
    #[serde(rename = "SBD")]
    pub sbd: GoodState,
}

impl MarketGoods {
    /// Good at canonical id, in table order.
    pub fn by_id(&self, id: usize) -> Option<&GoodState> {
        self.all().into_iter().nth(id)
    }

    pub fn by_id_mut(&mut self, id: usize) -> Option<&mut GoodState> {
        self.all_mut().into_iter().nth(id)
    }

    pub fn all(&self) -> [&GoodState; 16] {
        [
            &self.crl, &self.chc, &self.btr, &self.sug, &self.nut, &self.slt, &self.vnl,
            &self.egg, &self.cnm, &self.crm, &self.jam, &self.wch, &self.hny, &self.cki,
            &self.rcp, &self.sbd,
        ]
    }

    pub fn all_mut(&mut self) -> [&mut GoodState; 16] {
        [
            &mut self.crl, &mut self.chc, &mut self.btr, &mut self.sug, &mut self.nut,
            &mut self.slt, &mut self.vnl, &mut self.egg, &mut self.cnm, &mut self.crm,
            &mut self.jam, &mut self.wch, &mut self.hny, &mut self.cki, &mut self.rcp,
            &mut self.sbd,
        ]
    }
}

/// Bank minigame state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub office_level: f64,
    pub brokers: f64,
    pub graph_lines: f64,
    pub profit: f64,
    pub graph_cols: f64,
    pub on_minigame: bool,
    pub goods: MarketGoods,
}
