//! Top-level save validation: scalar assigns plus the structural rules for
//! upgrade lists, permanent slots, and mod data.

use serde_json::Value;

use super::{
    assign_bool, assign_f64, assign_string, buffs, buildings, check_unknown_keys, Reporter,
};
use crate::ids::{IdTable, ACHIEVEMENTS, UPGRADES};
use crate::model::{ModData, Preferences, Save, Wrinklers};

const SAVE_KEYS: &[&str] = &[
    "version",
    "startDate",
    "fullDate",
    "lastDate",
    "bakeryName",
    "seed",
    "preferences",
    "cookies",
    "cookiesEarned",
    "cookieClicks",
    "goldenClicks",
    "handmadeCookies",
    "missedGoldenClicks",
    "bgType",
    "milkType",
    "cookiesReset",
    "elderWrath",
    "pledges",
    "pledgeT",
    "nextResearch",
    "researchT",
    "resets",
    "goldenClicksLocal",
    "cookiesSucked",
    "wrinklersPopped",
    "santaLevel",
    "reindeerClicked",
    "seasonT",
    "seasonUses",
    "season",
    "wrinklers",
    "prestige",
    "heavenlyChips",
    "heavenlyChipsSpent",
    "heavenlyCookies",
    "ascensionMode",
    "permanentUpgrades",
    "dragonLevel",
    "dragonAura",
    "dragonAura2",
    "chimeType",
    "volume",
    "lumps",
    "lumpsTotal",
    "lumpT",
    "lumpRefill",
    "lumpCurrentType",
    "vault",
    "heralds",
    "fortuneGC",
    "fortuneCPS",
    "cookiesPsRawHighest",
    "buildings",
    "ownedUpgrades",
    "unlockedUpgrades",
    "achievements",
    "buffs",
    "modSaveData",
];

const PREFERENCE_KEYS: &[&str] = &[
    "particles",
    "numbers",
    "autosave",
    "autoupdate",
    "milk",
    "fancy",
    "warn",
    "cursors",
    "focus",
    "format",
    "notifs",
    "wobbly",
    "monospace",
    "filters",
    "cookiesound",
    "crates",
    "showBackupWarning",
    "extraButtons",
    "askLumps",
    "customGrandmas",
    "timeout",
    "cloudSave",
    "bgMusic",
    "notScary",
    "fullscreen",
    "screenreader",
];

pub(super) fn validate(input: &Value, r: &mut Reporter<'_>) -> Save {
    let mut save = Save::default();
    let Some(obj) = input.as_object() else {
        r.report("source is not an object");
        return save;
    };

    check_unknown_keys(r, obj, "", SAVE_KEYS);

    assign_f64(r, obj, "", "version", &mut save.version);
    assign_f64(r, obj, "", "startDate", &mut save.start_date);
    assign_f64(r, obj, "", "fullDate", &mut save.full_date);
    assign_f64(r, obj, "", "lastDate", &mut save.last_date);
    assign_string(r, obj, "", "bakeryName", &mut save.bakery_name);
    assign_string(r, obj, "", "seed", &mut save.seed);

    if let Some(value) = obj.get("preferences") {
        validate_preferences(value, r, &mut save.preferences);
    }

    assign_f64(r, obj, "", "cookies", &mut save.cookies);
    assign_f64(r, obj, "", "cookiesEarned", &mut save.cookies_earned);
    assign_f64(r, obj, "", "cookieClicks", &mut save.cookie_clicks);
    assign_f64(r, obj, "", "goldenClicks", &mut save.golden_clicks);
    assign_f64(r, obj, "", "handmadeCookies", &mut save.handmade_cookies);
    assign_f64(r, obj, "", "missedGoldenClicks", &mut save.missed_golden_clicks);
    assign_f64(r, obj, "", "bgType", &mut save.bg_type);
    assign_f64(r, obj, "", "milkType", &mut save.milk_type);
    assign_f64(r, obj, "", "cookiesReset", &mut save.cookies_reset);
    assign_f64(r, obj, "", "elderWrath", &mut save.elder_wrath);
    assign_f64(r, obj, "", "pledges", &mut save.pledges);
    assign_f64(r, obj, "", "pledgeT", &mut save.pledge_t);
    assign_f64(r, obj, "", "nextResearch", &mut save.next_research);
    assign_f64(r, obj, "", "researchT", &mut save.research_t);
    assign_f64(r, obj, "", "resets", &mut save.resets);
    assign_f64(r, obj, "", "goldenClicksLocal", &mut save.golden_clicks_local);
    assign_f64(r, obj, "", "cookiesSucked", &mut save.cookies_sucked);
    assign_f64(r, obj, "", "wrinklersPopped", &mut save.wrinklers_popped);
    assign_f64(r, obj, "", "santaLevel", &mut save.santa_level);
    assign_f64(r, obj, "", "reindeerClicked", &mut save.reindeer_clicked);
    assign_f64(r, obj, "", "seasonT", &mut save.season_t);
    assign_f64(r, obj, "", "seasonUses", &mut save.season_uses);
    assign_string(r, obj, "", "season", &mut save.season);

    if let Some(value) = obj.get("wrinklers") {
        validate_wrinklers(value, r, &mut save.wrinklers);
    }

    assign_f64(r, obj, "", "prestige", &mut save.prestige);
    assign_f64(r, obj, "", "heavenlyChips", &mut save.heavenly_chips);
    assign_f64(r, obj, "", "heavenlyChipsSpent", &mut save.heavenly_chips_spent);
    assign_f64(r, obj, "", "heavenlyCookies", &mut save.heavenly_cookies);
    assign_f64(r, obj, "", "ascensionMode", &mut save.ascension_mode);

    if let Some(value) = obj.get("permanentUpgrades") {
        validate_permanent_upgrades(value, r, &mut save.permanent_upgrades);
    }

    assign_f64(r, obj, "", "dragonLevel", &mut save.dragon_level);
    assign_f64(r, obj, "", "dragonAura", &mut save.dragon_aura);
    assign_f64(r, obj, "", "dragonAura2", &mut save.dragon_aura2);
    assign_f64(r, obj, "", "chimeType", &mut save.chime_type);
    assign_f64(r, obj, "", "volume", &mut save.volume);
    assign_f64(r, obj, "", "lumps", &mut save.lumps);
    assign_f64(r, obj, "", "lumpsTotal", &mut save.lumps_total);
    assign_f64(r, obj, "", "lumpT", &mut save.lump_t);
    assign_f64(r, obj, "", "lumpRefill", &mut save.lump_refill);
    assign_string(r, obj, "", "lumpCurrentType", &mut save.lump_current_type);

    if let Some(value) = obj.get("vault") {
        save.vault = validate_name_list(value, r, ".vault", &UPGRADES, "an upgrade");
    }

    assign_f64(r, obj, "", "heralds", &mut save.heralds);
    assign_bool(r, obj, "", "fortuneGC", &mut save.fortune_gc);
    assign_bool(r, obj, "", "fortuneCPS", &mut save.fortune_cps);
    assign_f64(r, obj, "", "cookiesPsRawHighest", &mut save.cookies_ps_raw_highest);

    if let Some(value) = obj.get("buildings") {
        buildings::validate(value, r, &mut save.buildings);
    }

    if let Some(value) = obj.get("ownedUpgrades") {
        save.owned_upgrades =
            validate_name_list(value, r, ".ownedUpgrades", &UPGRADES, "an upgrade");
    }
    if let Some(value) = obj.get("unlockedUpgrades") {
        save.unlocked_upgrades =
            validate_name_list(value, r, ".unlockedUpgrades", &UPGRADES, "an upgrade");
    }
    resolve_upgrade_conflicts(r, &save.owned_upgrades, &mut save.unlocked_upgrades);

    if let Some(value) = obj.get("achievements") {
        save.achievements =
            validate_name_list(value, r, ".achievements", &ACHIEVEMENTS, "an achievement");
    }

    if let Some(value) = obj.get("buffs") {
        save.buffs = buffs::validate(value, r);
    }

    if let Some(value) = obj.get("modSaveData") {
        validate_mod_save_data(value, r, &mut save);
    }

    save
}

fn validate_preferences(value: &Value, r: &mut Reporter<'_>, prefs: &mut Preferences) {
    let Some(obj) = value.as_object() else {
        r.report("source.preferences is not an object");
        return;
    };
    check_unknown_keys(r, obj, ".preferences", PREFERENCE_KEYS);
    let path = ".preferences";
    assign_bool(r, obj, path, "particles", &mut prefs.particles);
    assign_bool(r, obj, path, "numbers", &mut prefs.numbers);
    assign_bool(r, obj, path, "autosave", &mut prefs.autosave);
    assign_bool(r, obj, path, "autoupdate", &mut prefs.autoupdate);
    assign_bool(r, obj, path, "milk", &mut prefs.milk);
    assign_bool(r, obj, path, "fancy", &mut prefs.fancy);
    assign_bool(r, obj, path, "warn", &mut prefs.warn);
    assign_bool(r, obj, path, "cursors", &mut prefs.cursors);
    assign_bool(r, obj, path, "focus", &mut prefs.focus);
    assign_bool(r, obj, path, "format", &mut prefs.format);
    assign_bool(r, obj, path, "notifs", &mut prefs.notifs);
    assign_bool(r, obj, path, "wobbly", &mut prefs.wobbly);
    assign_bool(r, obj, path, "monospace", &mut prefs.monospace);
    assign_bool(r, obj, path, "filters", &mut prefs.filters);
    assign_bool(r, obj, path, "cookiesound", &mut prefs.cookiesound);
    assign_bool(r, obj, path, "crates", &mut prefs.crates);
    assign_bool(r, obj, path, "showBackupWarning", &mut prefs.show_backup_warning);
    assign_bool(r, obj, path, "extraButtons", &mut prefs.extra_buttons);
    assign_bool(r, obj, path, "askLumps", &mut prefs.ask_lumps);
    assign_bool(r, obj, path, "customGrandmas", &mut prefs.custom_grandmas);
    assign_bool(r, obj, path, "timeout", &mut prefs.timeout);
    assign_bool(r, obj, path, "cloudSave", &mut prefs.cloud_save);
    assign_bool(r, obj, path, "bgMusic", &mut prefs.bg_music);
    assign_bool(r, obj, path, "notScary", &mut prefs.not_scary);
    assign_bool(r, obj, path, "fullscreen", &mut prefs.fullscreen);
    assign_bool(r, obj, path, "screenreader", &mut prefs.screenreader);
}

fn validate_wrinklers(value: &Value, r: &mut Reporter<'_>, wrinklers: &mut Wrinklers) {
    let Some(obj) = value.as_object() else {
        r.report("source.wrinklers is not an object");
        return;
    };
    let path = ".wrinklers";
    check_unknown_keys(r, obj, path, &["amount", "number", "shinies", "amountShinies"]);
    assign_f64(r, obj, path, "amount", &mut wrinklers.amount);
    assign_f64(r, obj, path, "number", &mut wrinklers.number);
    assign_f64(r, obj, path, "shinies", &mut wrinklers.shinies);
    assign_f64(r, obj, path, "amountShinies", &mut wrinklers.amount_shinies);
}

/// Resolves one list element to a canonical table id. Accepts a canonical
/// name or an in-range numeric id.
fn resolve_id(value: &Value, table: &IdTable) -> Option<u16> {
    match value {
        Value::String(name) => table.id_of(name),
        Value::Number(n) => {
            let id = n.as_f64()?;
            if id.fract() == 0.0 && id >= 0.0 && (id as usize) < table.len() {
                Some(id as u16)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Name-or-id list: invalid elements are dropped with a diagnostic, and the
/// survivors come back sorted by canonical id, de-duplicated.
fn validate_name_list(
    value: &Value,
    r: &mut Reporter<'_>,
    path: &str,
    table: &IdTable,
    noun: &str,
) -> Vec<String> {
    let Some(items) = value.as_array() else {
        r.report(&format!("source{} is not an array", path));
        return Vec::new();
    };
    let mut ids: Vec<u16> = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match resolve_id(item, table) {
            Some(id) => ids.push(id),
            None => r.report(&format!("source{}[{}] is not {}", path, i, noun)),
        }
    }
    ids.sort_unstable();
    ids.dedup();
    ids.iter().map(|id| table.name_of(*id as usize).unwrap().to_string()).collect()
}

/// Any name in both lists stays owned and is dropped from the unlocked list.
fn resolve_upgrade_conflicts(
    r: &mut Reporter<'_>,
    owned: &[String],
    unlocked: &mut Vec<String>,
) {
    unlocked.retain(|name| {
        if owned.contains(name) {
            r.report(&format!(
                "source.unlockedUpgrades contains already-owned upgrade {:?}",
                name
            ));
            false
        } else {
            true
        }
    });
}

fn validate_permanent_upgrades(
    value: &Value,
    r: &mut Reporter<'_>,
    slots: &mut [String; 5],
) {
    let Some(items) = value.as_array() else {
        r.report("source.permanentUpgrades is not an array");
        return;
    };
    if items.len() > 5 {
        r.report("source.permanentUpgrades has more than 5 slots");
    }
    for (i, item) in items.iter().take(5).enumerate() {
        match item {
            Value::String(name) if name.is_empty() => slots[i] = String::new(),
            Value::Number(n) if n.as_f64() == Some(-1.0) => slots[i] = String::new(),
            _ => match resolve_id(item, &UPGRADES) {
                Some(id) => slots[i] = UPGRADES.name_of(id as usize).unwrap().to_string(),
                None => r.report(&format!("source.permanentUpgrades[{}] is not an upgrade", i)),
            },
        }
    }
}

fn validate_mod_save_data(value: &Value, r: &mut Reporter<'_>, save: &mut Save) {
    let Some(obj) = value.as_object() else {
        r.report("source.modSaveData is not an object");
        return;
    };
    for (name, entry) in obj {
        match entry {
            Value::String(text) => {
                save.mod_save_data.insert(name.clone(), ModData::Text(text.clone()));
            }
            Value::Object(_) => {
                save.mod_save_data.insert(name.clone(), ModData::Json(entry.clone()));
            }
            _ => r.report(&format!(
                "source.modSaveData.{} is not a string or an object",
                name
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::from_object_with;
    use serde_json::json;

    fn collect(input: &Value) -> (Save, Vec<String>) {
        let mut diagnostics = Vec::new();
        let save = from_object_with(input, &mut |m| diagnostics.push(m.to_string()));
        (save, diagnostics)
    }

    #[test]
    fn scalars_and_preferences_assign() {
        let (save, diagnostics) = collect(&json!({
            "cookies": 1.5e22,
            "bakeryName": "Ortiel",
            "preferences": {"warn": true, "particles": false}
        }));
        assert!(diagnostics.is_empty());
        assert_eq!(save.cookies, 1.5e22);
        assert_eq!(save.bakery_name, "Ortiel");
        assert!(save.preferences.warn);
        assert!(!save.preferences.particles);
    }

    #[test]
    fn vault_sorts_names_and_ids_canonically() {
        let (save, diagnostics) = collect(&json!({"vault": [10, "Kitten helpers"]}));
        assert!(diagnostics.is_empty());
        assert_eq!(save.vault, vec!["Cheap hoes", "Kitten helpers"]);
    }

    #[test]
    fn invalid_list_elements_are_filtered_with_a_diagnostic() {
        let (save, diagnostics) =
            collect(&json!({"achievements": ["Wake and bake", "Not a thing", true]}));
        assert_eq!(save.achievements, vec!["Wake and bake"]);
        assert_eq!(
            diagnostics,
            vec![
                "source.achievements[1] is not an achievement",
                "source.achievements[2] is not an achievement",
            ]
        );
    }

    #[test]
    fn owned_wins_over_unlocked_with_one_diagnostic() {
        let (save, diagnostics) = collect(&json!({
            "ownedUpgrades": ["Cheap hoes"],
            "unlockedUpgrades": ["Cheap hoes", "Kitten helpers"]
        }));
        assert_eq!(save.owned_upgrades, vec!["Cheap hoes"]);
        assert_eq!(save.unlocked_upgrades, vec!["Kitten helpers"]);
        assert_eq!(
            diagnostics,
            vec!["source.unlockedUpgrades contains already-owned upgrade \"Cheap hoes\""]
        );
    }

    #[test]
    fn permanent_upgrade_slots() {
        let (save, diagnostics) = collect(&json!({
            "permanentUpgrades": ["Cheap hoes", -1, 31, "", "nonsense", "overflow"]
        }));
        assert_eq!(save.permanent_upgrades[0], "Cheap hoes");
        assert_eq!(save.permanent_upgrades[1], "");
        assert_eq!(save.permanent_upgrades[2], "Kitten helpers");
        assert_eq!(save.permanent_upgrades[3], "");
        assert_eq!(save.permanent_upgrades[4], "");
        assert_eq!(
            diagnostics,
            vec![
                "source.permanentUpgrades has more than 5 slots",
                "source.permanentUpgrades[4] is not an upgrade",
            ]
        );
    }

    #[test]
    fn mod_save_data_drops_non_string_non_object_entries() {
        let (save, diagnostics) = collect(&json!({
            "modSaveData": {"good": "text", "meta": {"x": 1}, "bad": [1, 2]}
        }));
        assert_eq!(save.mod_save_data.len(), 2);
        assert!(save.mod_save_data.get("bad").is_none());
        assert_eq!(diagnostics, vec!["source.modSaveData.bad is not a string or an object"]);
    }

    #[test]
    fn mod_save_data_must_not_be_an_array() {
        let (save, diagnostics) = collect(&json!({"modSaveData": ["a"]}));
        assert!(save.mod_save_data.is_empty());
        assert_eq!(diagnostics, vec!["source.modSaveData is not an object"]);
    }
}
