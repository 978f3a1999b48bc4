//! Native save-format codec.
//!
//! A wire string is the pipe-joined frame described in `stats`/`flags`/
//! `buildings`/`buffs`/`mod_data`, UTF-8 encoded, base64-encoded,
//! percent-encoded, and suffixed with the literal terminator `%21END%21`.
//!
//! Decoding fails closed: truncated or corrupted frames produce a typed
//! [`DecodeError`] instead of a half-filled save. The one lenient spot is
//! the game version, which only logs when outside the supported range.

mod buffs;
mod buildings;
mod flags;
mod minigames;
mod mod_data;
pub(crate) mod numbers;
mod stats;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::DecodeError;
use crate::model::Save;
use crate::{MAX_GAME_VERSION, MIN_GAME_VERSION};

/// Literal terminator appended after the encoded payload.
pub const TERMINATOR: &str = "%21END%21";

/// Encodes a save to its native wire string.
pub fn encode(save: &Save) -> String {
    let frame = build_frame(save);
    let b64 = STANDARD.encode(frame.as_bytes());
    let mut out = percent_encode(&b64);
    out.push_str(TERMINATOR);
    out
}

/// Decodes a native wire string into a save.
pub fn decode(wire: &str) -> Result<Save, DecodeError> {
    let body = match wire.find(TERMINATOR) {
        Some(pos) => &wire[..pos],
        None => return Err(DecodeError::MissingTerminator),
    };
    let b64 = percent_decode(body)?;
    let frame_bytes = STANDARD.decode(&b64)?;
    let frame = String::from_utf8(frame_bytes)?;
    parse_frame(&frame)
}

const SEGMENTS: [&str; 10] = [
    "version",
    "reserved",
    "run details",
    "preferences",
    "general stats",
    "buildings",
    "upgrades",
    "achievements",
    "buffs",
    "mod data",
];

fn build_frame(save: &Save) -> String {
    let segments = [
        numbers::js_number(save.version),
        String::new(),
        stats::encode_run_details(save),
        flags::encode_preferences(&save.preferences, save.version),
        stats::encode_general(save),
        buildings::encode(save),
        flags::encode_upgrades(save),
        flags::encode_achievements(save),
        buffs::encode(&save.buffs),
        mod_data::encode(&save.mod_save_data),
    ];
    segments.join("|")
}

fn parse_frame(frame: &str) -> Result<Save, DecodeError> {
    let parts: Vec<&str> = frame.split('|').collect();
    if parts.len() < SEGMENTS.len() {
        return Err(DecodeError::MissingSegment { segment: SEGMENTS[parts.len()] });
    }

    let mut save = Save::default();
    save.version = numbers::parse_f64("version", parts[0])?;
    if save.version < MIN_GAME_VERSION || save.version > MAX_GAME_VERSION {
        log::warn!(
            "save version {} outside supported range [{}, {}]",
            save.version,
            MIN_GAME_VERSION,
            MAX_GAME_VERSION
        );
    }
    // parts[1] is the reserved segment; its contents are ignored.
    stats::decode_run_details(&mut save, parts[2])?;
    flags::decode_preferences(&mut save, parts[3])?;
    stats::decode_general(&mut save, parts[4])?;
    buildings::decode(&mut save, parts[5])?;
    flags::decode_upgrades(&mut save, parts[6])?;
    flags::decode_achievements(&mut save, parts[7])?;
    save.buffs = buffs::decode(parts[8])?;
    save.mod_save_data = mod_data::decode(parts[9])?;
    Ok(save)
}

/// Cursor over a `;`- or `:`-delimited segment that turns a missing field
/// into a typed error naming the segment.
pub(crate) struct Fields<'a> {
    context: &'static str,
    expected: usize,
    found: usize,
    iter: std::str::Split<'a, char>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(
        context: &'static str,
        text: &'a str,
        separator: char,
        expected: usize,
    ) -> Self {
        Self { context, expected, found: 0, iter: text.split(separator) }
    }

    pub(crate) fn next(&mut self) -> Result<&'a str, DecodeError> {
        match self.iter.next() {
            Some(field) => {
                self.found += 1;
                Ok(field)
            }
            None => Err(DecodeError::FieldCount {
                context: self.context,
                expected: self.expected,
                found: self.found,
            }),
        }
    }

    pub(crate) fn next_f64(&mut self) -> Result<f64, DecodeError> {
        let context = self.context;
        numbers::parse_f64(context, self.next()?)
    }

    pub(crate) fn next_flag(&mut self) -> Result<bool, DecodeError> {
        let context = self.context;
        numbers::parse_flag(context, self.next()?)
    }
}

/// `encodeURIComponent`-exact percent-encoding. Unreserved characters are
/// ASCII alphanumerics and `-_.!~*'()`; everything else is emitted as
/// uppercase `%XX` per UTF-8 byte.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'!' | b'~' | b'*'
            | b'\'' | b'(' | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn percent_decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes
                .get(i + 1..i + 3)
                .and_then(|pair| std::str::from_utf8(pair).ok())
                .and_then(|pair| u8::from_str_radix(pair, 16).ok());
            match hex {
                Some(byte) => {
                    out.push(byte);
                    i += 3;
                }
                None => return Err(DecodeError::BadPercentEncoding { offset: i }),
            }
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_encoding_matches_encode_uri_component() {
        assert_eq!(percent_encode("abcXYZ019-_.!~*'()"), "abcXYZ019-_.!~*'()");
        assert_eq!(percent_encode("a+b/c="), "a%2Bb%2Fc%3D");
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    #[test]
    fn percent_round_trip() {
        let input = "SGVsbG8+world/=+";
        let encoded = percent_encode(input);
        assert_eq!(percent_decode(&encoded).unwrap(), input.as_bytes());
    }

    #[test]
    fn decode_requires_the_terminator() {
        let wire = encode(&Save::default());
        let truncated = wire.trim_end_matches(TERMINATOR);
        assert!(matches!(decode(truncated), Err(DecodeError::MissingTerminator)));
    }

    #[test]
    fn decode_rejects_corrupt_base64() {
        let wire = format!("not-base64-at-all{}", TERMINATOR);
        assert!(matches!(decode(&wire), Err(DecodeError::Base64(_))));
    }

    #[test]
    fn decode_rejects_short_frames() {
        let frame = "2.052||0;0;0;name;seed";
        let b64 = base64::engine::general_purpose::STANDARD.encode(frame.as_bytes());
        let wire = format!("{}{}", percent_encode(&b64), TERMINATOR);
        assert!(matches!(decode(&wire), Err(DecodeError::MissingSegment { .. })));
    }

    #[test]
    fn bad_percent_escape_is_reported_with_offset() {
        assert!(matches!(
            percent_decode("abc%zz"),
            Err(DecodeError::BadPercentEncoding { offset: 3 })
        ));
    }

    #[test]
    fn default_save_round_trips() {
        let save = Save::default();
        let wire = encode(&save);
        assert!(wire.ends_with(TERMINATOR));
        assert_eq!(decode(&wire).unwrap(), save);
    }

    fn populated_save() -> Save {
        use crate::model::{Buff, Garden, Grimoire, Market, ModData, Pantheon};

        let mut save = Save::default();
        save.start_date = 1_654_000_000_000.0;
        save.full_date = 1_654_000_000_000.0;
        save.last_date = 1_656_000_000_000.0;
        save.bakery_name = "Methuselah".to_string();
        save.seed = "jwmfd".to_string();
        save.cookies = 1.5e22;
        save.cookies_earned = 2.5e22;
        save.prestige = 1_000_000.0;
        save.heavenly_chips = 250_000.0;
        save.lumps = 14.0;
        save.lumps_total = 80.0;
        save.lump_current_type = "golden".to_string();
        save.cookies_ps_raw_highest = 4.2e9;
        save.preferences.warn = true;
        save.preferences.particles = false;
        save.permanent_upgrades[0] = "Kitten helpers".to_string();
        save.vault = vec!["Cheap hoes".to_string()];
        // Canonical id order, disjoint lists: the decoder reproduces both.
        save.owned_upgrades = vec!["Cheap hoes".to_string()];
        save.unlocked_upgrades = vec!["Kitten helpers".to_string()];
        save.achievements = vec!["Wake and bake".to_string()];

        save.buildings.cursor.amount = 300.0;
        save.buildings.cursor.highest = 300.0;
        save.buildings.farm.building.amount = 120.0;
        save.buildings.farm.building.level = 9.0;
        save.buildings.farm.building.highest = 120.0;
        let mut garden = Garden::default();
        garden.soil = "woodchips".to_string();
        garden.unlocked_plants = vec!["bakerWheat".to_string(), "thumbcorn".to_string()];
        garden.plot[2][3] = ("thumbcorn".to_string(), 41);
        save.buildings.farm.minigame = Some(garden);

        save.buildings.bank.building.level = 1.0;
        let mut market = Market::default();
        market.office_level = 2.0;
        market.goods.crl.value = 21.57;
        market.goods.crl.stock_held = 40.0;
        save.buildings.bank.minigame = Some(market);

        save.buildings.temple.building.level = 1.0;
        let mut pantheon = Pantheon::default();
        pantheon.diamond_slot = "godzamok".to_string();
        pantheon.swaps = 2.0;
        save.buildings.temple.minigame = Some(pantheon);

        save.buildings.wizard_tower.building.level = 1.0;
        save.buildings.wizard_tower.minigame =
            Some(Grimoire { magic: 34.0, spells_cast: 9.0, spells_cast_total: 140.0, on_minigame: false });

        save.buffs = vec![
            Buff::Frenzy { max_time: 77000.0, time: 30000.0, mult_cps: 7.0 },
            Buff::BuildingBuff {
                max_time: 30000.0,
                time: 10000.0,
                mult_cps: 3.5,
                building: "Grandma".to_string(),
            },
        ];

        save.mod_save_data.insert("helper", ModData::Text("a|b;c".into()));
        save.mod_save_data
            .insert("meta", ModData::Json(serde_json::json!({"launches": 3})));
        save
    }

    #[test]
    fn populated_save_round_trips() {
        let save = populated_save();
        assert_eq!(decode(&encode(&save)).unwrap(), save);
    }

    #[test]
    fn version_gated_fields_are_dropped_by_older_layouts() {
        let mut save = Save::default();
        save.version = 2.031;
        save.cookies_ps_raw_highest = 4.2e9;
        save.preferences.cloud_save = false; // bit 21, outside the 2.031 layout

        let decoded = decode(&encode(&save)).unwrap();
        assert_eq!(decoded.cookies_ps_raw_highest, 0.0);
        assert!(decoded.preferences.cloud_save);
    }
}
