//! Bitstring segments: preferences, upgrades (bit pairs), achievements.

use std::collections::HashSet;

use crate::error::DecodeError;
use crate::ids::{ACHIEVEMENTS, UPGRADES};
use crate::model::{preference_count, Preferences, Save};

pub(super) fn encode_preferences(prefs: &Preferences, version: f64) -> String {
    prefs
        .bits()
        .iter()
        .take(preference_count(version))
        .map(|on| if *on { '1' } else { '0' })
        .collect()
}

pub(super) fn decode_preferences(save: &mut Save, segment: &str) -> Result<(), DecodeError> {
    let count = preference_count(save.version);
    if segment.len() > count {
        return Err(DecodeError::FlagOverflow {
            context: "preferences",
            len: segment.len(),
            max: count,
        });
    }
    for (i, c) in segment.chars().enumerate() {
        save.preferences.set_bit(i, c == '1');
    }
    Ok(())
}

/// Two characters per canonical upgrade id: first char unlocked, second char
/// owned (`"11"` owned, `"10"` unlocked-not-owned, `"00"` neither).
pub(super) fn encode_upgrades(save: &Save) -> String {
    let owned: HashSet<&str> = save.owned_upgrades.iter().map(String::as_str).collect();
    let unlocked: HashSet<&str> = save.unlocked_upgrades.iter().map(String::as_str).collect();
    let mut out = String::with_capacity(UPGRADES.len() * 2);
    for name in UPGRADES.names() {
        if owned.contains(name) {
            out.push_str("11");
        } else if unlocked.contains(name) {
            out.push_str("10");
        } else {
            out.push_str("00");
        }
    }
    out
}

pub(super) fn decode_upgrades(save: &mut Save, segment: &str) -> Result<(), DecodeError> {
    let chars: Vec<char> = segment.chars().collect();
    if chars.len() > UPGRADES.len() * 2 {
        return Err(DecodeError::FlagOverflow {
            context: "upgrades",
            len: chars.len(),
            max: UPGRADES.len() * 2,
        });
    }
    save.owned_upgrades.clear();
    save.unlocked_upgrades.clear();
    // A shorter string than the table is a save from an older game version;
    // ids past its end stay neither unlocked nor owned.
    for (id, pair) in chars.chunks(2).enumerate() {
        let unlocked = pair.first() == Some(&'1');
        let owned = pair.get(1) == Some(&'1');
        let name = UPGRADES.name_of(id).unwrap().to_string();
        if owned {
            save.owned_upgrades.push(name);
        } else if unlocked {
            save.unlocked_upgrades.push(name);
        }
    }
    Ok(())
}

/// One character per canonical achievement id.
pub(super) fn encode_achievements(save: &Save) -> String {
    let won: HashSet<&str> = save.achievements.iter().map(String::as_str).collect();
    ACHIEVEMENTS.names().iter().map(|name| if won.contains(name) { '1' } else { '0' }).collect()
}

pub(super) fn decode_achievements(save: &mut Save, segment: &str) -> Result<(), DecodeError> {
    let chars: Vec<char> = segment.chars().collect();
    if chars.len() > ACHIEVEMENTS.len() {
        return Err(DecodeError::FlagOverflow {
            context: "achievements",
            len: chars.len(),
            max: ACHIEVEMENTS.len(),
        });
    }
    save.achievements.clear();
    for (id, c) in chars.iter().enumerate() {
        if *c == '1' {
            save.achievements.push(ACHIEVEMENTS.name_of(id).unwrap().to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn preferences_bitstring_width_follows_version() {
        let prefs = Preferences::default();
        assert_eq!(encode_preferences(&prefs, 2.031).len(), 21);
        assert_eq!(encode_preferences(&prefs, 2.04).len(), 25);
        assert_eq!(encode_preferences(&prefs, 2.052).len(), 26);
    }

    #[test]
    fn preferences_round_trip() {
        let mut save = Save::default();
        save.preferences.warn = true;
        save.preferences.particles = false;
        let segment = encode_preferences(&save.preferences, save.version);

        let mut decoded = Save::default();
        decoded.version = save.version;
        decode_preferences(&mut decoded, &segment).unwrap();
        assert_eq!(decoded.preferences, save.preferences);
    }

    #[test]
    fn upgrade_bit_pairs_round_trip_sorted() {
        let mut save = Save::default();
        save.owned_upgrades = vec!["Cheap hoes".to_string()];
        save.unlocked_upgrades = vec!["Kitten helpers".to_string()];
        let segment = encode_upgrades(&save);
        assert_eq!(segment.len(), UPGRADES.len() * 2);

        let mut decoded = Save::default();
        decode_upgrades(&mut decoded, &segment).unwrap();
        assert_eq!(decoded.owned_upgrades, vec!["Cheap hoes"]);
        assert_eq!(decoded.unlocked_upgrades, vec!["Kitten helpers"]);
    }

    #[test]
    fn short_upgrade_string_leaves_tail_unset() {
        let mut save = Save::default();
        decode_upgrades(&mut save, "1110").unwrap();
        assert_eq!(save.owned_upgrades, vec![UPGRADES.name_of(0).unwrap()]);
        assert_eq!(save.unlocked_upgrades, vec![UPGRADES.name_of(1).unwrap()]);
    }

    #[test]
    fn overlong_achievement_string_is_an_error() {
        let mut save = Save::default();
        let segment = "1".repeat(ACHIEVEMENTS.len() + 1);
        assert!(matches!(
            decode_achievements(&mut save, &segment),
            Err(DecodeError::FlagOverflow { context: "achievements", .. })
        ));
    }

    proptest! {
        #[test]
        fn achievements_round_trip(bits in proptest::collection::vec(any::<bool>(), 0..=160)) {
            let mut save = Save::default();
            for (id, on) in bits.iter().enumerate() {
                if *on {
                    if let Some(name) = ACHIEVEMENTS.name_of(id) {
                        save.achievements.push(name.to_string());
                    }
                }
            }
            let segment = encode_achievements(&save);
            let mut decoded = Save::default();
            decode_achievements(&mut decoded, &segment).unwrap();
            prop_assert_eq!(decoded.achievements, save.achievements);
        }
    }
}
