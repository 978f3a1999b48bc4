//! Lenient object validator.
//!
//! Takes an arbitrary JSON-like value and produces a fully defaulted
//! [`Save`], reporting every violation through a caller-supplied callback
//! instead of aborting. The core primitive is a strict shallow assign: a
//! declared field is copied only when the source supplies it with the right
//! type; mismatches keep the default and report
//! `source<path>.<key> is not a <type>`, and source keys the schema does not
//! declare report `target<path>.<key> does not exist (typo?)`.

mod buffs;
mod buildings;
mod minigames;
mod save;

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::model::Save;

/// Validates `input`, failing on the first batch of diagnostics.
///
/// The returned error carries every diagnostic found, in encounter order.
pub fn from_object(input: &Value) -> Result<Save, ValidationError> {
    let mut diagnostics = Vec::new();
    let save = from_object_with(input, &mut |message| diagnostics.push(message.to_string()));
    if diagnostics.is_empty() {
        Ok(save)
    } else {
        Err(ValidationError::new(diagnostics))
    }
}

/// Validates `input`, invoking `on_error` once per diagnostic and always
/// returning a complete best-effort save.
pub fn from_object_with(input: &Value, on_error: &mut dyn FnMut(&str)) -> Save {
    let mut reporter = Reporter { on_error };
    save::validate(input, &mut reporter)
}

pub(crate) struct Reporter<'a> {
    on_error: &'a mut dyn FnMut(&str),
}

impl Reporter<'_> {
    pub(crate) fn report(&mut self, message: &str) {
        (self.on_error)(message);
    }
}

pub(crate) fn assign_f64(
    r: &mut Reporter<'_>,
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
    slot: &mut f64,
) {
    if let Some(value) = obj.get(key) {
        match value.as_f64() {
            Some(x) => *slot = x,
            None => r.report(&format!("source{}.{} is not a number", path, key)),
        }
    }
}

pub(crate) fn assign_bool(
    r: &mut Reporter<'_>,
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
    slot: &mut bool,
) {
    if let Some(value) = obj.get(key) {
        match value.as_bool() {
            Some(b) => *slot = b,
            None => r.report(&format!("source{}.{} is not a boolean", path, key)),
        }
    }
}

pub(crate) fn assign_string(
    r: &mut Reporter<'_>,
    obj: &Map<String, Value>,
    path: &str,
    key: &str,
    slot: &mut String,
) {
    if let Some(value) = obj.get(key) {
        match value.as_str() {
            Some(s) => *slot = s.to_string(),
            None => r.report(&format!("source{}.{} is not a string", path, key)),
        }
    }
}

/// Reports every source key the target schema does not declare.
pub(crate) fn check_unknown_keys(
    r: &mut Reporter<'_>,
    obj: &Map<String, Value>,
    path: &str,
    declared: &[&str],
) {
    for key in obj.keys() {
        if !declared.contains(&key.as_str()) {
            r.report(&format!("target{}.{} does not exist (typo?)", path, key));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collect(input: &Value) -> (Save, Vec<String>) {
        let mut diagnostics = Vec::new();
        let save = from_object_with(input, &mut |m| diagnostics.push(m.to_string()));
        (save, diagnostics)
    }

    #[test]
    fn empty_object_is_a_default_save() {
        let (save, diagnostics) = collect(&json!({}));
        assert_eq!(save, Save::default());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn non_object_input_reports_and_defaults() {
        let (save, diagnostics) = collect(&json!([1, 2, 3]));
        assert_eq!(save, Save::default());
        assert_eq!(diagnostics, vec!["source is not an object"]);
        assert!(from_object(&Value::Null).is_err());
    }

    #[test]
    fn type_mismatch_keeps_default_and_reports() {
        let (save, diagnostics) = collect(&json!({"cookies": "lots"}));
        assert_eq!(save.cookies, 0.0);
        assert_eq!(diagnostics, vec!["source.cookies is not a number"]);
    }

    #[test]
    fn unknown_key_reports_a_typo_hint() {
        let (_, diagnostics) = collect(&json!({"cokies": 5}));
        assert_eq!(diagnostics, vec!["target.cokies does not exist (typo?)"]);
    }

    #[test]
    fn from_object_fails_with_the_first_diagnostic_up_front() {
        let err = from_object(&json!({"cookies": "lots", "volume": "loud"})).unwrap_err();
        assert_eq!(err.diagnostics.len(), 2);
        assert_eq!(err.to_string(), "source.cookies is not a number");
    }

    #[test]
    fn revalidating_a_validated_save_is_clean() {
        // Messy input: typos, conflicts, partial minigames, bad buffs.
        let input = json!({
            "cookies": 100,
            "cokies": 5,
            "ownedUpgrades": ["Cheap hoes"],
            "unlockedUpgrades": ["Cheap hoes", "Kitten helpers"],
            "vault": [10, "Kitten helpers"],
            "buildings": {
                "Farm": {"level": 1, "minigame": {"unlockedPlants": ["clover", "tulip"]}},
                "Bank": {"level": 2},
                "Temple": {"level": 1, "minigame": null},
                "Moon base": {}
            },
            "buffs": [
                {"name": "dragonflight", "maxTime": 20000, "time": 5000, "multClick": 1223},
                {"name": "hyperfrenzy"}
            ],
            "modSaveData": {"meta": {"x": 1}, "bad": 7}
        });

        let (first, diagnostics) = collect(&input);
        assert!(!diagnostics.is_empty());

        let normalized = serde_json::to_value(&first).unwrap();
        let (second, rerun_diagnostics) = collect(&normalized);
        assert_eq!(second, first);
        assert_eq!(rerun_diagnostics, Vec::<String>::new());
    }
}
