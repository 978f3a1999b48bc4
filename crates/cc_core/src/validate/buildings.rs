//! Building slot validation, including the minigame presence rules.
//!
//! Presence is decided per host from two inputs: whether the source
//! explicitly supplied a `minigame` key (`null` counts as supplied) and the
//! building's resolved level. An explicit key always wins; without one, a
//! leveled host gets a default-constructed minigame and an unleveled host
//! gets none.

use serde_json::{Map, Value};

use super::minigames::{
    validate_garden, validate_grimoire, validate_market, validate_pantheon,
};
use super::{assign_bool, assign_f64, check_unknown_keys, Reporter};
use crate::ids::BUILDINGS;
use crate::model::{Building, Buildings, MinigameHost};

const BASE_KEYS: &[&str] = &["amount", "bought", "totalCookies", "level", "muted", "highest"];
const HOST_KEYS: &[&str] =
    &["amount", "bought", "totalCookies", "level", "muted", "highest", "minigame"];

pub(super) fn validate(value: &Value, r: &mut Reporter<'_>, buildings: &mut Buildings) {
    let Some(obj) = value.as_object() else {
        r.report("source.buildings is not an object");
        return;
    };
    for key in obj.keys() {
        if !BUILDINGS.contains(key) {
            r.report(&format!("target.buildings.{} does not exist", key));
        }
    }
    for (id, name) in BUILDINGS.names().iter().enumerate() {
        let Some(slot) = obj.get(*name) else { continue };
        let path = format!(".buildings[{:?}]", name);
        match id {
            2 => validate_host(slot, r, &path, &mut buildings.farm, validate_garden),
            5 => validate_host(slot, r, &path, &mut buildings.bank, validate_market),
            6 => validate_host(slot, r, &path, &mut buildings.temple, validate_pantheon),
            7 => validate_host(slot, r, &path, &mut buildings.wizard_tower, validate_grimoire),
            _ => {
                let base = buildings.base_mut(id).unwrap();
                if let Some(slot_obj) = as_object(slot, r, &path) {
                    check_unknown_keys(r, slot_obj, &path, BASE_KEYS);
                    validate_base(slot_obj, r, &path, base);
                }
            }
        }
    }
}

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

fn validate_base(obj: &Map<String, Value>, r: &mut Reporter<'_>, path: &str, base: &mut Building) {
    assign_f64(r, obj, path, "amount", &mut base.amount);
    assign_f64(r, obj, path, "bought", &mut base.bought);
    assign_f64(r, obj, path, "totalCookies", &mut base.total_cookies);
    assign_f64(r, obj, path, "level", &mut base.level);
    assign_bool(r, obj, path, "muted", &mut base.muted);
    if obj.contains_key("highest") {
        assign_f64(r, obj, path, "highest", &mut base.highest);
    } else {
        base.highest = base.amount;
    }
}

fn validate_host<M: Default>(
    value: &Value,
    r: &mut Reporter<'_>,
    path: &str,
    host: &mut MinigameHost<M>,
    validate_minigame: fn(&Value, &mut Reporter<'_>, &str) -> M,
) {
    let Some(obj) = as_object(value, r, path) else { return };
    check_unknown_keys(r, obj, path, HOST_KEYS);
    validate_base(obj, r, path, &mut host.building);

    match obj.get("minigame") {
        // Explicit key wins, even null with a level or an object without one.
        Some(Value::Null) => host.minigame = None,
        Some(supplied) => {
            let minigame_path = format!("{}.minigame", path);
            host.minigame = Some(validate_minigame(supplied, r, &minigame_path));
        }
        None => {
            host.minigame = if host.building.level > 0.0 { Some(M::default()) } else { None };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Save;
    use crate::validate::from_object_with;
    use serde_json::json;

    fn collect(input: &Value) -> (Save, Vec<String>) {
        let mut diagnostics = Vec::new();
        let save = from_object_with(input, &mut |m| diagnostics.push(m.to_string()));
        (save, diagnostics)
    }

    #[test]
    fn unleveled_farm_has_no_minigame() {
        let (save, diagnostics) = collect(&json!({"buildings": {"Farm": {"level": 0}}}));
        assert!(diagnostics.is_empty());
        assert!(save.buildings.farm.minigame.is_none());
    }

    #[test]
    fn leveled_farm_gets_a_default_garden() {
        let (save, diagnostics) = collect(&json!({"buildings": {"Farm": {"level": 1}}}));
        assert!(diagnostics.is_empty());
        let garden = save.buildings.farm.minigame.as_ref().unwrap();
        assert_eq!(garden.unlocked_plants, vec!["bakerWheat"]);
        for row in &garden.plot {
            for cell in row {
                assert_eq!(cell, &("empty".to_string(), 0));
            }
        }
    }

    #[test]
    fn explicit_null_minigame_overrides_the_level() {
        let (save, diagnostics) =
            collect(&json!({"buildings": {"Farm": {"level": 1, "minigame": null}}}));
        assert!(diagnostics.is_empty());
        assert!(save.buildings.farm.minigame.is_none());
    }

    #[test]
    fn explicit_minigame_object_survives_level_zero() {
        let (save, diagnostics) = collect(&json!({"buildings": {"Temple": {"minigame": {}}}}));
        assert!(diagnostics.is_empty());
        assert!(save.buildings.temple.minigame.is_some());
    }

    #[test]
    fn unknown_building_key_is_reported() {
        let (_, diagnostics) = collect(&json!({"buildings": {"Moon base": {"amount": 1}}}));
        assert_eq!(diagnostics, vec!["target.buildings.Moon base does not exist"]);
    }

    #[test]
    fn highest_defaults_to_the_resolved_amount() {
        let (save, _) = collect(&json!({"buildings": {"Cursor": {"amount": 42}}}));
        assert_eq!(save.buildings.cursor.amount, 42.0);
        assert_eq!(save.buildings.cursor.highest, 42.0);

        let (save, _) = collect(&json!({"buildings": {"Cursor": {"amount": 42, "highest": 60}}}));
        assert_eq!(save.buildings.cursor.highest, 60.0);
    }

    #[test]
    fn unknown_sub_field_is_reported_with_the_building_path() {
        let (_, diagnostics) = collect(&json!({"buildings": {"Mine": {"amout": 3}}}));
        assert_eq!(diagnostics, vec!["target.buildings[\"Mine\"].amout does not exist (typo?)"]);
    }
}
