//! Mod-data segment: `name:escapedValue;` per entry.
//!
//! Values escape the frame's own delimiters (`|` becomes `[P]`, `;` becomes
//! `[S]`) so extension payloads cannot corrupt segment boundaries. The
//! substitution is lossy when a payload already contains a literal `[P]` or
//! `[S]`; that matches the established format and is accepted as-is.

use crate::error::DecodeError;
use crate::model::{ModData, ModSaveData};

pub(super) fn encode(bag: &ModSaveData) -> String {
    let mut out = String::new();
    for (name, data) in bag.iter() {
        let text = match data {
            ModData::Text(text) => text.clone(),
            // Object payloads travel as compact JSON.
            ModData::Json(value) => value.to_string(),
        };
        out.push_str(name);
        out.push(':');
        out.push_str(&escape(&text));
        out.push(';');
    }
    out
}

pub(super) fn decode(segment: &str) -> Result<ModSaveData, DecodeError> {
    let mut bag = ModSaveData::new();
    for record in segment.split(';').filter(|record| !record.is_empty()) {
        let (name, escaped) = record
            .split_once(':')
            .ok_or(DecodeError::MissingSegment { segment: "mod data value" })?;
        let text = unescape(escaped);
        bag.insert(name, parse_value(&text));
    }
    Ok(bag)
}

/// Payloads that look like a JSON object and parse as one come back as
/// `Json`; everything else stays opaque text.
fn parse_value(text: &str) -> ModData {
    if text.starts_with('{') {
        if let Ok(value @ serde_json::Value::Object(_)) = serde_json::from_str(text) {
            return ModData::Json(value);
        }
    }
    ModData::Text(text.to_string())
}

fn escape(text: &str) -> String {
    text.replace('|', "[P]").replace(';', "[S]")
}

fn unescape(text: &str) -> String {
    text.replace("[P]", "|").replace("[S]", ";")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn delimiters_are_escaped_in_flight() {
        let mut bag = ModSaveData::new();
        bag.insert("notes", ModData::Text("a|b;c".into()));

        let segment = encode(&bag);
        assert_eq!(segment, "notes:a[P]b[S]c;");
        assert_eq!(decode(&segment).unwrap(), bag);
    }

    #[test]
    fn object_payloads_round_trip_as_json() {
        let mut bag = ModSaveData::new();
        bag.insert("meta", ModData::Json(json!({"launches": 3, "tag": "v1"})));

        let decoded = decode(&encode(&bag)).unwrap();
        assert_eq!(decoded.get("meta"), bag.get("meta"));
    }

    #[test]
    fn non_object_text_stays_text() {
        let decoded = decode("m:[1,2,3];").unwrap();
        assert_eq!(decoded.get("m"), Some(&ModData::Text("[1,2,3]".into())));
    }

    #[test]
    fn entry_without_a_colon_is_an_error() {
        assert!(matches!(decode("justaname;"), Err(DecodeError::MissingSegment { .. })));
    }

    #[test]
    fn empty_segment_is_an_empty_bag() {
        assert!(decode("").unwrap().is_empty());
    }
}
