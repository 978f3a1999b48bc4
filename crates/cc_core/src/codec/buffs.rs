//! Buff segment: comma-joined records, one per active buff, `;`-terminated.
//!
//! `typeId,maxTime,time` plus the kind-specific extras. Records with a type
//! id outside the canonical table decode to `Buff::Unknown` so foreign buffs
//! survive a round trip.

use super::numbers::{js_number, parse_f64};
use crate::error::DecodeError;
use crate::ids::{BUFFS, BUILDINGS};
use crate::model::Buff;

pub(super) fn encode(buffs: &[Buff]) -> String {
    let mut out = String::new();
    for buff in buffs {
        let (max_time, time) = buff.times();
        out.push_str(&js_number(buff.type_id() as f64));
        out.push(',');
        out.push_str(&js_number(max_time));
        out.push(',');
        out.push_str(&js_number(time));
        for extra in wire_extras(buff) {
            out.push(',');
            out.push_str(&extra);
        }
        out.push(';');
    }
    out
}

/// Extras after `maxTime,time`, in wire order.
fn wire_extras(buff: &Buff) -> Vec<String> {
    match *buff {
        Buff::Frenzy { mult_cps, .. }
        | Buff::BloodFrenzy { mult_cps, .. }
        | Buff::Clot { mult_cps, .. }
        | Buff::DragonHarvest { mult_cps, .. }
        | Buff::SugarFrenzy { mult_cps, .. }
        | Buff::Loan1 { mult_cps, .. }
        | Buff::Loan1Interest { mult_cps, .. }
        | Buff::Loan2 { mult_cps, .. }
        | Buff::Loan2Interest { mult_cps, .. }
        | Buff::Loan3 { mult_cps, .. }
        | Buff::Loan3Interest { mult_cps, .. } => vec![js_number(mult_cps)],
        Buff::ClickFrenzy { mult_click, .. }
        | Buff::Dragonflight { mult_click, .. }
        | Buff::Devastation { mult_click, .. } => vec![js_number(mult_click)],
        Buff::EverythingMustGo { power, .. }
        | Buff::CursedFinger { power, .. }
        | Buff::CookieStorm { power, .. }
        | Buff::HagglerLuck { power, .. }
        | Buff::HagglerMisery { power, .. }
        | Buff::PixieLuck { power, .. }
        | Buff::PixieMisery { power, .. }
        | Buff::MagicAdept { power, .. }
        | Buff::MagicInept { power, .. } => vec![js_number(power)],
        Buff::BuildingBuff { mult_cps, ref building, .. }
        | Buff::BuildingDebuff { mult_cps, ref building, .. } => {
            let id = BUILDINGS.id_of(building).unwrap_or(0);
            vec![js_number(mult_cps), id.to_string()]
        }
        // The game always stores a fixed third arg for this kind.
        Buff::SugarBlessing { .. } => vec!["1".to_string()],
        Buff::Unknown { arg1, arg2, arg3, .. } => {
            vec![js_number(arg1), js_number(arg2), js_number(arg3)]
        }
    }
}

pub(super) fn decode(segment: &str) -> Result<Vec<Buff>, DecodeError> {
    segment.split(';').filter(|record| !record.is_empty()).map(decode_record).collect()
}

fn decode_record(record: &str) -> Result<Buff, DecodeError> {
    let fields: Vec<&str> = record.split(',').collect();
    if fields.len() < 3 {
        return Err(DecodeError::FieldCount {
            context: "buff record",
            expected: 3,
            found: fields.len(),
        });
    }
    let type_id = parse_f64("buff record", fields[0])? as i64;
    let max_time = parse_f64("buff record", fields[1])?;
    let time = parse_f64("buff record", fields[2])?;
    let arg = |i: usize| -> Result<f64, DecodeError> {
        match fields.get(i) {
            Some(field) => parse_f64("buff record", field),
            None => Err(DecodeError::FieldCount {
                context: "buff record",
                expected: i + 1,
                found: fields.len(),
            }),
        }
    };

    let kind = if type_id >= 0 { BUFFS.name_of(type_id as usize) } else { None };
    let buff = match kind {
        Some("frenzy") => Buff::Frenzy { max_time, time, mult_cps: arg(3)? },
        Some("blood frenzy") => Buff::BloodFrenzy { max_time, time, mult_cps: arg(3)? },
        Some("clot") => Buff::Clot { max_time, time, mult_cps: arg(3)? },
        Some("dragon harvest") => Buff::DragonHarvest { max_time, time, mult_cps: arg(3)? },
        Some("everything must go") => Buff::EverythingMustGo { max_time, time, power: arg(3)? },
        Some("cursed finger") => Buff::CursedFinger { max_time, time, power: arg(3)? },
        Some("click frenzy") => Buff::ClickFrenzy { max_time, time, mult_click: arg(3)? },
        Some("dragonflight") => Buff::Dragonflight { max_time, time, mult_click: arg(3)? },
        Some("cookie storm") => Buff::CookieStorm { max_time, time, power: arg(3)? },
        Some("building buff") => Buff::BuildingBuff {
            max_time,
            time,
            mult_cps: arg(3)?,
            building: building_name(arg(4)?)?,
        },
        Some("building debuff") => Buff::BuildingDebuff {
            max_time,
            time,
            mult_cps: arg(3)?,
            building: building_name(arg(4)?)?,
        },
        Some("sugar blessing") => Buff::SugarBlessing { max_time, time },
        Some("haggler luck") => Buff::HagglerLuck { max_time, time, power: arg(3)? },
        Some("haggler misery") => Buff::HagglerMisery { max_time, time, power: arg(3)? },
        Some("pixie luck") => Buff::PixieLuck { max_time, time, power: arg(3)? },
        Some("pixie misery") => Buff::PixieMisery { max_time, time, power: arg(3)? },
        Some("magic adept") => Buff::MagicAdept { max_time, time, power: arg(3)? },
        Some("magic inept") => Buff::MagicInept { max_time, time, power: arg(3)? },
        Some("devastation") => Buff::Devastation { max_time, time, mult_click: arg(3)? },
        Some("sugar frenzy") => Buff::SugarFrenzy { max_time, time, mult_cps: arg(3)? },
        Some("loan 1") => Buff::Loan1 { max_time, time, mult_cps: arg(3)? },
        Some("loan 1 (interest)") => Buff::Loan1Interest { max_time, time, mult_cps: arg(3)? },
        Some("loan 2") => Buff::Loan2 { max_time, time, mult_cps: arg(3)? },
        Some("loan 2 (interest)") => Buff::Loan2Interest { max_time, time, mult_cps: arg(3)? },
        Some("loan 3") => Buff::Loan3 { max_time, time, mult_cps: arg(3)? },
        Some("loan 3 (interest)") => Buff::Loan3Interest { max_time, time, mult_cps: arg(3)? },
        Some(other) => {
            // Table kinds are covered above; a miss here is a table edit
            // without a matching decode arm.
            return Err(DecodeError::UnknownId {
                context: "buff record",
                id: BUFFS.id_of(other).unwrap_or(0) as i64,
            });
        }
        None => {
            log::warn!("buff record has unknown type id {}", type_id);
            Buff::Unknown {
                id: type_id.max(0) as u32,
                max_time,
                time,
                arg1: if fields.len() > 3 { arg(3)? } else { 0.0 },
                arg2: if fields.len() > 4 { arg(4)? } else { 0.0 },
                arg3: if fields.len() > 5 { arg(5)? } else { 0.0 },
            }
        }
    };
    Ok(buff)
}

fn building_name(id: f64) -> Result<String, DecodeError> {
    let id = id as i64;
    match BUILDINGS.name_of(id.max(0) as usize) {
        Some(name) if id >= 0 => Ok(name.to_string()),
        _ => Err(DecodeError::UnknownId { context: "buff building", id }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_segment_decodes_to_no_buffs() {
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn known_kinds_round_trip() {
        let buffs = vec![
            Buff::Frenzy { max_time: 77000.0, time: 30000.0, mult_cps: 7.0 },
            Buff::Dragonflight { max_time: 20000.0, time: 5000.0, mult_click: 1223.0 },
            Buff::BuildingBuff {
                max_time: 30000.0,
                time: 10000.0,
                mult_cps: 3.5,
                building: "Grandma".to_string(),
            },
            Buff::SugarBlessing { max_time: 86400000.0, time: 43200000.0 },
        ];
        let segment = encode(&buffs);
        assert_eq!(decode(&segment).unwrap(), buffs);
    }

    #[test]
    fn sugar_blessing_emits_its_constant_extra() {
        let segment = encode(&[Buff::SugarBlessing { max_time: 10.0, time: 5.0 }]);
        let id = BUFFS.id_of("sugar blessing").unwrap();
        assert_eq!(segment, format!("{},10,5,1;", id));
    }

    #[test]
    fn foreign_type_ids_survive_as_unknown() {
        let segment = "120,1000,500,1,2,3;";
        let decoded = decode(segment).unwrap();
        assert_eq!(
            decoded,
            vec![Buff::Unknown {
                id: 120,
                max_time: 1000.0,
                time: 500.0,
                arg1: 1.0,
                arg2: 2.0,
                arg3: 3.0,
            }]
        );
        assert_eq!(encode(&decoded), segment);
    }

    #[test]
    fn missing_required_extra_fails_closed() {
        let id = BUFFS.id_of("frenzy").unwrap();
        let segment = format!("{},77000,30000;", id);
        assert!(matches!(
            decode(&segment),
            Err(DecodeError::FieldCount { context: "buff record", .. })
        ));
    }
}
