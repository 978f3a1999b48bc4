//! Buff list validation. Each element dispatches on its `name` tag to a
//! canonical kind; the kind then demands its own field set. Unlike the rest
//! of the schema, a kind's fields are required: a missing one is reported as
//! `target.buffs[i].<field> does not exist` and defaults to zero.

use serde_json::{Map, Value};

use super::{check_unknown_keys, Reporter};
use crate::ids::BUILDINGS;
use crate::model::Buff;

pub(super) fn validate(value: &Value, r: &mut Reporter<'_>) -> Vec<Buff> {
    let Some(items) = value.as_array() else {
        r.report("source.buffs is not an array");
        return Vec::new();
    };
    let mut buffs = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let path = format!(".buffs[{}]", i);
        if let Some(buff) = validate_buff(item, r, &path) {
            buffs.push(buff);
        }
    }
    buffs
}

fn validate_buff(value: &Value, r: &mut Reporter<'_>, path: &str) -> Option<Buff> {
    let Some(obj) = value.as_object() else {
        r.report(&format!("source{} is not an object", path));
        return None;
    };
    let Some(name) = obj.get("name").and_then(Value::as_str) else {
        r.report(&format!("source{}.name is not a string", path));
        return None;
    };
    let Some(template) = Buff::default_for_name(name) else {
        r.report(&format!("source{}.name is not a buff kind", path));
        return None;
    };

    let max_time = required_f64(obj, r, path, "maxTime");
    let time = required_f64(obj, r, path, "time");

    let buff = match template {
        Buff::Frenzy { .. } => Buff::Frenzy { max_time, time, mult_cps: mult_cps(obj, r, path) },
        Buff::BloodFrenzy { .. } => {
            Buff::BloodFrenzy { max_time, time, mult_cps: mult_cps(obj, r, path) }
        }
        Buff::Clot { .. } => Buff::Clot { max_time, time, mult_cps: mult_cps(obj, r, path) },
        Buff::DragonHarvest { .. } => {
            Buff::DragonHarvest { max_time, time, mult_cps: mult_cps(obj, r, path) }
        }
        Buff::EverythingMustGo { .. } => {
            Buff::EverythingMustGo { max_time, time, power: power(obj, r, path) }
        }
        Buff::CursedFinger { .. } => {
            Buff::CursedFinger { max_time, time, power: power(obj, r, path) }
        }
        Buff::ClickFrenzy { .. } => {
            Buff::ClickFrenzy { max_time, time, mult_click: mult_click(obj, r, path) }
        }
        Buff::Dragonflight { .. } => {
            Buff::Dragonflight { max_time, time, mult_click: mult_click(obj, r, path) }
        }
        Buff::CookieStorm { .. } => {
            Buff::CookieStorm { max_time, time, power: power(obj, r, path) }
        }
        Buff::BuildingBuff { .. } => Buff::BuildingBuff {
            max_time,
            time,
            mult_cps: mult_cps(obj, r, path),
            building: required_building(obj, r, path),
        },
        Buff::BuildingDebuff { .. } => Buff::BuildingDebuff {
            max_time,
            time,
            mult_cps: mult_cps(obj, r, path),
            building: required_building(obj, r, path),
        },
        Buff::SugarBlessing { .. } => Buff::SugarBlessing { max_time, time },
        Buff::HagglerLuck { .. } => {
            Buff::HagglerLuck { max_time, time, power: power(obj, r, path) }
        }
        Buff::HagglerMisery { .. } => {
            Buff::HagglerMisery { max_time, time, power: power(obj, r, path) }
        }
        Buff::PixieLuck { .. } => Buff::PixieLuck { max_time, time, power: power(obj, r, path) },
        Buff::PixieMisery { .. } => {
            Buff::PixieMisery { max_time, time, power: power(obj, r, path) }
        }
        Buff::MagicAdept { .. } => Buff::MagicAdept { max_time, time, power: power(obj, r, path) },
        Buff::MagicInept { .. } => Buff::MagicInept { max_time, time, power: power(obj, r, path) },
        Buff::Devastation { .. } => {
            Buff::Devastation { max_time, time, mult_click: mult_click(obj, r, path) }
        }
        Buff::SugarFrenzy { .. } => {
            Buff::SugarFrenzy { max_time, time, mult_cps: mult_cps(obj, r, path) }
        }
        Buff::Loan1 { .. } => Buff::Loan1 { max_time, time, mult_cps: mult_cps(obj, r, path) },
        Buff::Loan1Interest { .. } => {
            Buff::Loan1Interest { max_time, time, mult_cps: mult_cps(obj, r, path) }
        }
        Buff::Loan2 { .. } => Buff::Loan2 { max_time, time, mult_cps: mult_cps(obj, r, path) },
        Buff::Loan2Interest { .. } => {
            Buff::Loan2Interest { max_time, time, mult_cps: mult_cps(obj, r, path) }
        }
        Buff::Loan3 { .. } => Buff::Loan3 { max_time, time, mult_cps: mult_cps(obj, r, path) },
        Buff::Loan3Interest { .. } => {
            Buff::Loan3Interest { max_time, time, mult_cps: mult_cps(obj, r, path) }
        }
        Buff::Unknown { .. } => Buff::Unknown {
            id: required_f64(obj, r, path, "id") as u32,
            max_time,
            time,
            arg1: required_f64(obj, r, path, "arg1"),
            arg2: required_f64(obj, r, path, "arg2"),
            arg3: required_f64(obj, r, path, "arg3"),
        },
    };

    check_unknown_keys(r, obj, path, declared_keys(&buff));
    Some(buff)
}

fn declared_keys(buff: &Buff) -> &'static [&'static str] {
    const BASE: &[&str] = &["name", "maxTime", "time"];
    const CPS: &[&str] = &["name", "maxTime", "time", "multCpS"];
    const CLICK: &[&str] = &["name", "maxTime", "time", "multClick"];
    const POWER: &[&str] = &["name", "maxTime", "time", "power"];
    const BUILDING: &[&str] = &["name", "maxTime", "time", "multCpS", "building"];
    const UNKNOWN: &[&str] = &["name", "id", "maxTime", "time", "arg1", "arg2", "arg3"];
    match buff {
        Buff::SugarBlessing { .. } => BASE,
        Buff::Frenzy { .. }
        | Buff::BloodFrenzy { .. }
        | Buff::Clot { .. }
        | Buff::DragonHarvest { .. }
        | Buff::SugarFrenzy { .. }
        | Buff::Loan1 { .. }
        | Buff::Loan1Interest { .. }
        | Buff::Loan2 { .. }
        | Buff::Loan2Interest { .. }
        | Buff::Loan3 { .. }
        | Buff::Loan3Interest { .. } => CPS,
        Buff::ClickFrenzy { .. } | Buff::Dragonflight { .. } | Buff::Devastation { .. } => CLICK,
        Buff::EverythingMustGo { .. }
        | Buff::CursedFinger { .. }
        | Buff::CookieStorm { .. }
        | Buff::HagglerLuck { .. }
        | Buff::HagglerMisery { .. }
        | Buff::PixieLuck { .. }
        | Buff::PixieMisery { .. }
        | Buff::MagicAdept { .. }
        | Buff::MagicInept { .. } => POWER,
        Buff::BuildingBuff { .. } | Buff::BuildingDebuff { .. } => BUILDING,
        Buff::Unknown { .. } => UNKNOWN,
    }
}

fn required_f64(obj: &Map<String, Value>, r: &mut Reporter<'_>, path: &str, key: &str) -> f64 {
    match obj.get(key) {
        Some(value) => match value.as_f64() {
            Some(x) => x,
            None => {
                r.report(&format!("source{}.{} is not a number", path, key));
                0.0
            }
        },
        None => {
            r.report(&format!("target{}.{} does not exist", path, key));
            0.0
        }
    }
}

fn mult_cps(obj: &Map<String, Value>, r: &mut Reporter<'_>, path: &str) -> f64 {
    required_f64(obj, r, path, "multCpS")
}

fn mult_click(obj: &Map<String, Value>, r: &mut Reporter<'_>, path: &str) -> f64 {
    required_f64(obj, r, path, "multClick")
}

fn power(obj: &Map<String, Value>, r: &mut Reporter<'_>, path: &str) -> f64 {
    required_f64(obj, r, path, "power")
}

fn required_building(obj: &Map<String, Value>, r: &mut Reporter<'_>, path: &str) -> String {
    match obj.get("building") {
        Some(value) => match value.as_str() {
            Some(name) if BUILDINGS.contains(name) => name.to_string(),
            _ => {
                r.report(&format!("source{}.building is not a building", path));
                BUILDINGS.name_of(0).unwrap().to_string()
            }
        },
        None => {
            r.report(&format!("target{}.building does not exist", path));
            BUILDINGS.name_of(0).unwrap().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::from_object_with;
    use serde_json::json;

    fn collect(input: &Value) -> (Vec<Buff>, Vec<String>) {
        let mut diagnostics = Vec::new();
        let save = from_object_with(input, &mut |m| diagnostics.push(m.to_string()));
        (save.buffs, diagnostics)
    }

    #[test]
    fn dragonflight_dispatches_and_assigns() {
        let (buffs, diagnostics) = collect(&json!({"buffs":
            [{"name": "dragonflight", "maxTime": 20000, "time": 5000, "multClick": 1223}]}));
        assert!(diagnostics.is_empty());
        assert_eq!(
            buffs,
            vec![Buff::Dragonflight { max_time: 20000.0, time: 5000.0, mult_click: 1223.0 }]
        );
    }

    #[test]
    fn missing_required_field_is_reported() {
        let (buffs, diagnostics) = collect(&json!({"buffs":
            [{"name": "dragonflight", "maxTime": 20000, "time": 5000}]}));
        assert_eq!(diagnostics, vec!["target.buffs[0].multClick does not exist"]);
        assert_eq!(
            buffs,
            vec![Buff::Dragonflight { max_time: 20000.0, time: 5000.0, mult_click: 0.0 }]
        );
    }

    #[test]
    fn unknown_kind_name_drops_the_element() {
        let (buffs, diagnostics) = collect(&json!({"buffs":
            [{"name": "hyperfrenzy", "maxTime": 1, "time": 1}]}));
        assert!(buffs.is_empty());
        assert_eq!(diagnostics, vec!["source.buffs[0].name is not a buff kind"]);
    }

    #[test]
    fn extraneous_field_gets_a_typo_hint() {
        let (_, diagnostics) = collect(&json!({"buffs":
            [{"name": "frenzy", "maxTime": 1, "time": 1, "multCpS": 7, "poower": 2}]}));
        assert_eq!(diagnostics, vec!["target.buffs[0].poower does not exist (typo?)"]);
    }

    #[test]
    fn building_buff_requires_a_canonical_building() {
        let (buffs, diagnostics) = collect(&json!({"buffs":
            [{"name": "building buff", "maxTime": 1, "time": 1, "multCpS": 3,
              "building": "Moon base"}]}));
        assert_eq!(diagnostics, vec!["source.buffs[0].building is not a building"]);
        assert!(matches!(&buffs[0], Buff::BuildingBuff { building, .. } if building == "Cursor"));
    }

    #[test]
    fn unknown_variant_validates_by_name() {
        let (buffs, diagnostics) = collect(&json!({"buffs":
            [{"name": "unknown", "id": 99, "maxTime": 1, "time": 2,
              "arg1": 3, "arg2": 4, "arg3": 5}]}));
        assert!(diagnostics.is_empty());
        assert_eq!(
            buffs,
            vec![Buff::Unknown {
                id: 99,
                max_time: 1.0,
                time: 2.0,
                arg1: 3.0,
                arg2: 4.0,
                arg3: 5.0
            }]
        );
    }
}
