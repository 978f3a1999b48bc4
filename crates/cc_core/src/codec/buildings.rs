//! Buildings segment: one `;`-terminated record per canonical building id,
//! `amount,bought,totalCookies,level,<minigameBlob>,muted,highest`.
//!
//! The blob slot is empty unless the building is leveled and hosts a
//! minigame; minigame sub-grammars never contain `,` or `;`, so the record
//! stays comma-splittable.

use super::minigames;
use super::numbers::{flag, js_number};
use super::Fields;
use crate::error::DecodeError;
use crate::ids::BUILDINGS;
use crate::model::{Building, Save};

pub(super) fn encode(save: &Save) -> String {
    let mut out = String::new();
    for id in 0..BUILDINGS.len() {
        let base = save.buildings.base(id).unwrap();
        let blob = if base.level > 0.0 { minigame_blob(save, id) } else { String::new() };
        out.push_str(&format!(
            "{},{},{},{},{},{},{};",
            js_number(base.amount),
            js_number(base.bought),
            js_number(base.total_cookies),
            js_number(base.level),
            blob,
            flag(base.muted),
            js_number(base.highest),
        ));
    }
    out
}

fn minigame_blob(save: &Save, id: usize) -> String {
    match id {
        2 => save.buildings.farm.minigame.as_ref().map(minigames::encode_garden),
        5 => save.buildings.bank.minigame.as_ref().map(minigames::encode_market),
        6 => save.buildings.temple.minigame.as_ref().map(minigames::encode_pantheon),
        7 => save.buildings.wizard_tower.minigame.as_ref().map(minigames::encode_grimoire),
        _ => None,
    }
    .unwrap_or_default()
}

pub(super) fn decode(save: &mut Save, segment: &str) -> Result<(), DecodeError> {
    let records: Vec<&str> = segment.split(';').filter(|record| !record.is_empty()).collect();
    if records.len() != BUILDINGS.len() {
        return Err(DecodeError::FieldCount {
            context: "buildings",
            expected: BUILDINGS.len(),
            found: records.len(),
        });
    }
    for (id, record) in records.iter().enumerate() {
        let (base, blob) = decode_record(record)?;
        *save.buildings.base_mut(id).unwrap() = base;
        match id {
            2 => {
                save.buildings.farm.minigame =
                    non_empty(blob).map(minigames::decode_garden).transpose()?;
            }
            5 => {
                save.buildings.bank.minigame =
                    non_empty(blob).map(minigames::decode_market).transpose()?;
            }
            6 => {
                save.buildings.temple.minigame =
                    non_empty(blob).map(minigames::decode_pantheon).transpose()?;
            }
            7 => {
                save.buildings.wizard_tower.minigame =
                    non_empty(blob).map(minigames::decode_grimoire).transpose()?;
            }
            _ if !blob.is_empty() => {
                log::warn!(
                    "building {:?} carries minigame text but hosts no minigame",
                    BUILDINGS.name_of(id).unwrap()
                );
            }
            _ => {}
        }
    }
    Ok(())
}

fn non_empty(blob: &str) -> Option<&str> {
    if blob.is_empty() {
        None
    } else {
        Some(blob)
    }
}

fn decode_record(record: &str) -> Result<(Building, &str), DecodeError> {
    let mut fields = Fields::new("building record", record, ',', 7);
    let amount = fields.next_f64()?;
    let bought = fields.next_f64()?;
    let total_cookies = fields.next_f64()?;
    let level = fields.next_f64()?;
    let blob = fields.next()?;
    let muted = fields.next_flag()?;
    let highest = fields.next_f64()?;
    Ok((Building { amount, bought, total_cookies, level, muted, highest }, blob))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Garden, Pantheon};

    #[test]
    fn default_buildings_round_trip() {
        let save = Save::default();
        let segment = encode(&save);
        assert_eq!(segment.matches(';').count(), BUILDINGS.len());

        let mut decoded = Save::default();
        decode(&mut decoded, &segment).unwrap();
        assert_eq!(decoded.buildings, save.buildings);
    }

    #[test]
    fn leveled_host_carries_its_minigame_blob() {
        let mut save = Save::default();
        save.buildings.farm.building.amount = 120.0;
        save.buildings.farm.building.level = 3.0;
        save.buildings.farm.building.highest = 120.0;
        let mut garden = Garden::default();
        garden.harvests = 7.0;
        save.buildings.farm.minigame = Some(garden);

        save.buildings.temple.building.level = 1.0;
        save.buildings.temple.minigame = Some(Pantheon::default());

        let segment = encode(&save);
        let mut decoded = Save::default();
        decode(&mut decoded, &segment).unwrap();
        assert_eq!(decoded.buildings, save.buildings);
    }

    #[test]
    fn unleveled_host_emits_no_blob_even_with_a_minigame() {
        let mut save = Save::default();
        save.buildings.farm.minigame = Some(Garden::default());

        let segment = encode(&save);
        let mut decoded = Save::default();
        decode(&mut decoded, &segment).unwrap();
        assert!(decoded.buildings.farm.minigame.is_none());
    }

    #[test]
    fn wrong_record_count_fails_closed() {
        let mut save = Save::default();
        let err = decode(&mut save, "0,0,0,0,,0,0;").unwrap_err();
        assert!(matches!(err, DecodeError::FieldCount { context: "buildings", .. }));
    }

    #[test]
    fn muted_flag_survives() {
        let mut save = Save::default();
        save.buildings.mine.muted = true;
        let mut decoded = Save::default();
        decode(&mut decoded, &encode(&save)).unwrap();
        assert!(decoded.buildings.mine.muted);
    }
}
