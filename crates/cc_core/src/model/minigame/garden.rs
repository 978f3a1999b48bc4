use serde::{Deserialize, Serialize};

use crate::ids::PLANTS;

/// Plot side length. The plot is always exactly 6x6; absent cells default to
/// empty.
pub const PLOT_SIZE: usize = 6;

/// One plot tile: plant name (`"empty"` for none) and age.
pub type PlotCell = (String, u32);

/// Farm minigame state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Garden {
    pub next_step: f64,
    /// Soil name, one of the canonical soils.
    pub soil: String,
    pub next_soil: f64,
    pub freeze: bool,
    pub harvests: f64,
    pub harvests_total: f64,
    pub on_minigame: bool,
    pub convert_times: f64,
    pub next_freeze: f64,
    /// Unlocked plant names in canonical order. Always contains the base
    /// plant (`bakerWheat`) first.
    pub unlocked_plants: Vec<String>,
    /// 6x6 grid, row-major.
    pub plot: [[PlotCell; PLOT_SIZE]; PLOT_SIZE],
}

impl Default for Garden {
    fn default() -> Self {
        Self {
            next_step: 0.0,
            soil: "dirt".to_string(),
            next_soil: 0.0,
            freeze: false,
            harvests: 0.0,
            harvests_total: 0.0,
            on_minigame: false,
            convert_times: 0.0,
            next_freeze: 0.0,
            unlocked_plants: vec![PLANTS.name_of(0).unwrap().to_string()],
            plot: std::array::from_fn(|_| std::array::from_fn(|_| Garden::empty_cell())),
        }
    }
}

impl Garden {
    pub fn empty_cell() -> PlotCell {
        ("empty".to_string(), 0)
    }

    /// Sorts the unlocked set by canonical plant id and force-prepends the
    /// base plant if it is missing. Unknown names are the caller's problem;
    /// they sort last and should have been filtered already.
    pub fn canonicalize_plants(&mut self) {
        self.unlocked_plants.sort_by_key(|name| PLANTS.id_of(name).unwrap_or(u16::MAX));
        self.unlocked_plants.dedup();
        if self.unlocked_plants.first().map(String::as_str) != Some("bakerWheat") {
            self.unlocked_plants.insert(0, "bakerWheat".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_garden_has_base_plant_and_empty_plot() {
        let garden = Garden::default();
        assert_eq!(garden.unlocked_plants, vec!["bakerWheat".to_string()]);
        for row in &garden.plot {
            for cell in row {
                assert_eq!(cell.0, "empty");
                assert_eq!(cell.1, 0);
            }
        }
    }

    #[test]
    fn canonicalize_sorts_and_prepends_base_plant() {
        let mut garden = Garden::default();
        garden.unlocked_plants = vec!["clover".to_string(), "thumbcorn".to_string()];
        garden.canonicalize_plants();
        assert_eq!(garden.unlocked_plants, vec!["bakerWheat", "thumbcorn", "clover"]);
    }
}
