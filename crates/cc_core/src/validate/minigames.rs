//! Per-minigame validation. Each validator returns a complete minigame,
//! defaulting anything the source got wrong.

use serde_json::{Map, Value};

use super::{assign_bool, assign_f64, assign_string, check_unknown_keys, Reporter};
use crate::ids::{GODS, PLANTS, SOILS};
use crate::model::{Garden, GoodMode, GoodState, Grimoire, Market, Pantheon, PLOT_SIZE};

const GARDEN_KEYS: &[&str] = &[
    "nextStep",
    "soil",
    "nextSoil",
    "freeze",
    "harvests",
    "harvestsTotal",
    "onMinigame",
    "convertTimes",
    "nextFreeze",
    "unlockedPlants",
    "plot",
];
const MARKET_KEYS: &[&str] =
    &["officeLevel", "brokers", "graphLines", "profit", "graphCols", "onMinigame", "goods"];
const GOOD_KEYS: &[&str] =
    &["value", "mode", "delta", "durationTicks", "stockHeld", "hidden", "lastAction"];
const PANTHEON_KEYS: &[&str] =
    &["diamondSlot", "rubySlot", "jadeSlot", "swaps", "swapT", "onMinigame"];
const GRIMOIRE_KEYS: &[&str] = &["magic", "spellsCast", "spellsCastTotal", "onMinigame"];

fn as_object<'v>(
    value: &'v Value,
    r: &mut Reporter<'_>,
    path: &str,
) -> Option<&'v Map<String, Value>> {
    match value.as_object() {
        Some(obj) => Some(obj),
        None => {
            r.report(&format!("source{} is not an object", path));
            None
        }
    }
}

pub(super) fn validate_garden(value: &Value, r: &mut Reporter<'_>, path: &str) -> Garden {
    let mut garden = Garden::default();
    let Some(obj) = as_object(value, r, path) else { return garden };
    check_unknown_keys(r, obj, path, GARDEN_KEYS);

    assign_f64(r, obj, path, "nextStep", &mut garden.next_step);
    assign_string(r, obj, path, "soil", &mut garden.soil);
    if !SOILS.contains(&garden.soil) {
        r.report(&format!("source{}.soil is not a soil", path));
        garden.soil = "dirt".to_string();
    }
    assign_f64(r, obj, path, "nextSoil", &mut garden.next_soil);
    assign_bool(r, obj, path, "freeze", &mut garden.freeze);
    assign_f64(r, obj, path, "harvests", &mut garden.harvests);
    assign_f64(r, obj, path, "harvestsTotal", &mut garden.harvests_total);
    assign_bool(r, obj, path, "onMinigame", &mut garden.on_minigame);
    assign_f64(r, obj, path, "convertTimes", &mut garden.convert_times);
    assign_f64(r, obj, path, "nextFreeze", &mut garden.next_freeze);

    if let Some(plants) = obj.get("unlockedPlants") {
        validate_unlocked_plants(plants, r, path, &mut garden);
    }
    if let Some(plot) = obj.get("plot") {
        validate_plot(plot, r, path, &mut garden);
    }
    garden
}

fn validate_unlocked_plants(value: &Value, r: &mut Reporter<'_>, path: &str, garden: &mut Garden) {
    let Some(items) = value.as_array() else {
        r.report(&format!("source{}.unlockedPlants is not an array", path));
        return;
    };
    garden.unlocked_plants.clear();
    for (i, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(name) if PLANTS.contains(name) => {
                garden.unlocked_plants.push(name.to_string());
            }
            _ => r.report(&format!("source{}.unlockedPlants[{}] is not a plant", path, i)),
        }
    }
    garden.canonicalize_plants();
}

fn validate_plot(value: &Value, r: &mut Reporter<'_>, path: &str, garden: &mut Garden) {
    let Some(rows) = value.as_array() else {
        r.report(&format!("source{}.plot is not an array", path));
        return;
    };
    if rows.len() > PLOT_SIZE {
        r.report(&format!("source{}.plot has more than {} rows", path, PLOT_SIZE));
    }
    for (row_idx, row) in rows.iter().take(PLOT_SIZE).enumerate() {
        let Some(cells) = row.as_array() else {
            r.report(&format!("source{}.plot[{}] is not an array", path, row_idx));
            continue;
        };
        if cells.len() > PLOT_SIZE {
            r.report(&format!(
                "source{}.plot[{}] has more than {} cells",
                path, row_idx, PLOT_SIZE
            ));
        }
        for (col_idx, cell) in cells.iter().take(PLOT_SIZE).enumerate() {
            let cell_path = format!("{}.plot[{}][{}]", path, row_idx, col_idx);
            garden.plot[row_idx][col_idx] = validate_cell(cell, r, &cell_path);
        }
    }
}

/// One plot tuple: `[plantName, age]`, both optional, extra elements reported.
fn validate_cell(value: &Value, r: &mut Reporter<'_>, path: &str) -> (String, u32) {
    let mut cell = Garden::empty_cell();
    let Some(parts) = value.as_array() else {
        r.report(&format!("source{} is not an array", path));
        return cell;
    };
    if parts.len() > 2 {
        r.report(&format!("source{} has more than 2 elements", path));
    }
    if let Some(plant) = parts.first() {
        match plant.as_str() {
            Some(name) if name == "empty" || PLANTS.contains(name) => cell.0 = name.to_string(),
            Some(_) => r.report(&format!("source{}[0] is not a plant", path)),
            None => r.report(&format!("source{}[0] is not a string", path)),
        }
    }
    if let Some(age) = parts.get(1) {
        match age.as_u64() {
            Some(age) => cell.1 = age as u32,
            None => r.report(&format!("source{}[1] is not a number", path)),
        }
    }
    cell
}

pub(super) fn validate_market(value: &Value, r: &mut Reporter<'_>, path: &str) -> Market {
    let mut market = Market::default();
    let Some(obj) = as_object(value, r, path) else { return market };
    check_unknown_keys(r, obj, path, MARKET_KEYS);

    assign_f64(r, obj, path, "officeLevel", &mut market.office_level);
    assign_f64(r, obj, path, "brokers", &mut market.brokers);
    assign_f64(r, obj, path, "graphLines", &mut market.graph_lines);
    assign_f64(r, obj, path, "profit", &mut market.profit);
    assign_f64(r, obj, path, "graphCols", &mut market.graph_cols);
    assign_bool(r, obj, path, "onMinigame", &mut market.on_minigame);

    if let Some(goods) = obj.get("goods") {
        validate_goods(goods, r, path, &mut market);
    }
    market
}

fn validate_goods(value: &Value, r: &mut Reporter<'_>, path: &str, market: &mut Market) {
    let goods_path = format!("{}.goods", path);
    let Some(obj) = as_object(value, r, &goods_path) else { return };
    for key in obj.keys() {
        if !crate::ids::GOODS.contains(key) {
            r.report(&format!("target{}.{} does not exist (typo?)", goods_path, key));
        }
    }
    for (id, ticker) in crate::ids::GOODS.names().iter().enumerate() {
        let Some(good) = obj.get(*ticker) else { continue };
        let good_path = format!("{}[{:?}]", goods_path, ticker);
        if let Some(good_obj) = as_object(good, r, &good_path) {
            check_unknown_keys(r, good_obj, &good_path, GOOD_KEYS);
            let slot = market.goods.by_id_mut(id).unwrap();
            validate_good(good_obj, r, &good_path, slot);
        }
    }
}

fn validate_good(obj: &Map<String, Value>, r: &mut Reporter<'_>, path: &str, good: &mut GoodState) {
    assign_f64(r, obj, path, "value", &mut good.value);
    if let Some(mode) = obj.get("mode") {
        match mode.as_u64().and_then(|id| u8::try_from(id).ok()).and_then(|id| GoodMode::try_from(id).ok()) {
            Some(mode) => good.mode = mode,
            None => r.report(&format!("source{}.mode is not a market mode", path)),
        }
    }
    assign_f64(r, obj, path, "delta", &mut good.delta);
    assign_f64(r, obj, path, "durationTicks", &mut good.duration_ticks);
    assign_f64(r, obj, path, "stockHeld", &mut good.stock_held);
    assign_bool(r, obj, path, "hidden", &mut good.hidden);
    assign_f64(r, obj, path, "lastAction", &mut good.last_action);
}

pub(super) fn validate_pantheon(value: &Value, r: &mut Reporter<'_>, path: &str) -> Pantheon {
    let mut pantheon = Pantheon::default();
    let Some(obj) = as_object(value, r, path) else { return pantheon };
    check_unknown_keys(r, obj, path, PANTHEON_KEYS);

    validate_god_slot(obj, r, path, "diamondSlot", &mut pantheon.diamond_slot);
    validate_god_slot(obj, r, path, "rubySlot", &mut pantheon.ruby_slot);
    validate_god_slot(obj, r, path, "jadeSlot", &mut pantheon.jade_slot);
    assign_f64(r, obj, path, "swaps", &mut pantheon.swaps);
    assign_f64(r, obj, path, "swapT", &mut pantheon.swap_t);
    assign_bool(r, obj, path, "onMinigame", &mut pantheon.on_minigame);
    pantheon
}

fn validate_god_slot(
    obj: &Map<String, Value>,
    r: &mut Reporter<'_>,
    path: &str,
    key: &str,
    slot: &mut String,
) {
    let Some(value) = obj.get(key) else { return };
    match value.as_str() {
        Some(name) if name.is_empty() || GODS.contains(name) => *slot = name.to_string(),
        Some(_) => r.report(&format!("source{}.{} is not a god", path, key)),
        None => r.report(&format!("source{}.{} is not a string", path, key)),
    }
}

pub(super) fn validate_grimoire(value: &Value, r: &mut Reporter<'_>, path: &str) -> Grimoire {
    let mut grimoire = Grimoire::default();
    let Some(obj) = as_object(value, r, path) else { return grimoire };
    check_unknown_keys(r, obj, path, GRIMOIRE_KEYS);

    assign_f64(r, obj, path, "magic", &mut grimoire.magic);
    assign_f64(r, obj, path, "spellsCast", &mut grimoire.spells_cast);
    assign_f64(r, obj, path, "spellsCastTotal", &mut grimoire.spells_cast_total);
    assign_bool(r, obj, path, "onMinigame", &mut grimoire.on_minigame);
    grimoire
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::from_object_with;
    use serde_json::json;

    fn collect(input: &Value) -> (crate::model::Save, Vec<String>) {
        let mut diagnostics = Vec::new();
        let save = from_object_with(input, &mut |m| diagnostics.push(m.to_string()));
        (save, diagnostics)
    }

    #[test]
    fn unknown_plants_are_dropped_and_the_base_plant_returns() {
        let (save, diagnostics) = collect(&json!({"buildings": {"Farm": {"level": 1,
            "minigame": {"unlockedPlants": ["clover", "tulip", "thumbcorn"]}}}}));
        let garden = save.buildings.farm.minigame.unwrap();
        assert_eq!(garden.unlocked_plants, vec!["bakerWheat", "thumbcorn", "clover"]);
        assert_eq!(
            diagnostics,
            vec!["source.buildings[\"Farm\"].minigame.unlockedPlants[1] is not a plant"]
        );
    }

    #[test]
    fn short_plot_rows_default_to_empty_cells() {
        let (save, diagnostics) = collect(&json!({"buildings": {"Farm": {"minigame":
            {"plot": [[["bakerWheat", 12]]]}}}}));
        assert!(diagnostics.is_empty());
        let garden = save.buildings.farm.minigame.unwrap();
        assert_eq!(garden.plot[0][0], ("bakerWheat".to_string(), 12));
        assert_eq!(garden.plot[0][1], ("empty".to_string(), 0));
        assert_eq!(garden.plot[5][5], ("empty".to_string(), 0));
    }

    #[test]
    fn oversized_plot_is_reported_and_clipped() {
        let rows: Vec<Value> = (0..7).map(|_| json!([])).collect();
        let (_, diagnostics) =
            collect(&json!({"buildings": {"Farm": {"minigame": {"plot": rows}}}}));
        assert_eq!(
            diagnostics,
            vec!["source.buildings[\"Farm\"].minigame.plot has more than 6 rows"]
        );
    }

    #[test]
    fn bad_cell_contents_keep_defaults() {
        let (save, diagnostics) = collect(&json!({"buildings": {"Farm": {"minigame":
            {"plot": [[["martianWeed", "old", 3]]]}}}}));
        let garden = save.buildings.farm.minigame.unwrap();
        assert_eq!(garden.plot[0][0], ("empty".to_string(), 0));
        assert_eq!(
            diagnostics,
            vec![
                "source.buildings[\"Farm\"].minigame.plot[0][0] has more than 2 elements",
                "source.buildings[\"Farm\"].minigame.plot[0][0][0] is not a plant",
                "source.buildings[\"Farm\"].minigame.plot[0][0][1] is not a number",
            ]
        );
    }

    #[test]
    fn market_rejects_unknown_tickers_and_bad_modes() {
        let (save, diagnostics) = collect(&json!({"buildings": {"Bank": {"minigame":
            {"goods": {"CRL": {"value": 21.57, "mode": 9}, "XYZ": {}}}}}}));
        let market = save.buildings.bank.minigame.unwrap();
        assert_eq!(market.goods.crl.value, 21.57);
        assert_eq!(market.goods.crl.mode, GoodMode::Stable);
        assert_eq!(
            diagnostics,
            vec![
                "target.buildings[\"Bank\"].minigame.goods.XYZ does not exist (typo?)",
                "source.buildings[\"Bank\"].minigame.goods[\"CRL\"].mode is not a market mode",
            ]
        );
    }

    #[test]
    fn pantheon_slots_accept_gods_and_empties_only() {
        let (save, diagnostics) = collect(&json!({"buildings": {"Temple": {"minigame":
            {"diamondSlot": "godzamok", "rubySlot": "", "jadeSlot": "zeus"}}}}));
        let pantheon = save.buildings.temple.minigame.unwrap();
        assert_eq!(pantheon.diamond_slot, "godzamok");
        assert_eq!(pantheon.ruby_slot, "");
        assert_eq!(pantheon.jade_slot, "");
        assert_eq!(
            diagnostics,
            vec!["source.buildings[\"Temple\"].minigame.jadeSlot is not a god"]
        );
    }

    #[test]
    fn grimoire_scalars_assign() {
        let (save, diagnostics) = collect(&json!({"buildings": {"Wizard tower": {"minigame":
            {"magic": 34.5, "spellsCast": 9, "onMinigame": true}}}}));
        assert!(diagnostics.is_empty());
        let grimoire = save.buildings.wizard_tower.minigame.unwrap();
        assert_eq!(grimoire.magic, 34.5);
        assert_eq!(grimoire.spells_cast, 9.0);
        assert!(grimoire.on_minigame);
    }
}
