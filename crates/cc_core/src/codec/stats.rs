//! Run-details and general-stats segments.

use super::numbers::{flag, js_number};
use super::Fields;
use crate::error::DecodeError;
use crate::ids::{SUGAR_LUMP_KINDS, UPGRADES};
use crate::model::Save;

pub(super) fn encode_run_details(save: &Save) -> String {
    [
        js_number(save.start_date),
        js_number(save.full_date),
        js_number(save.last_date),
        save.bakery_name.clone(),
        save.seed.clone(),
    ]
    .join(";")
}

pub(super) fn decode_run_details(save: &mut Save, segment: &str) -> Result<(), DecodeError> {
    let mut fields = Fields::new("run details", segment, ';', 5);
    save.start_date = fields.next_f64()?;
    save.full_date = fields.next_f64()?;
    save.last_date = fields.next_f64()?;
    save.bakery_name = fields.next()?.to_string();
    save.seed = fields.next()?.to_string();
    Ok(())
}

/// Number of `;`-joined fields in the general-stats segment.
fn general_field_count(version: f64) -> usize {
    if version >= 2.04 {
        52
    } else {
        51
    }
}

pub(super) fn encode_general(save: &Save) -> String {
    let mut fields: Vec<String> = Vec::with_capacity(general_field_count(save.version));
    fields.push(js_number(save.cookies));
    fields.push(js_number(save.cookies_earned));
    fields.push(js_number(save.cookie_clicks));
    fields.push(js_number(save.golden_clicks));
    fields.push(js_number(save.handmade_cookies));
    fields.push(js_number(save.missed_golden_clicks));
    fields.push(js_number(save.bg_type));
    fields.push(js_number(save.milk_type));
    fields.push(js_number(save.cookies_reset));
    fields.push(js_number(save.elder_wrath));
    fields.push(js_number(save.pledges));
    fields.push(js_number(save.pledge_t));
    fields.push(js_number(save.next_research));
    fields.push(js_number(save.research_t));
    fields.push(js_number(save.resets));
    fields.push(js_number(save.golden_clicks_local));
    fields.push(js_number(save.cookies_sucked));
    fields.push(js_number(save.wrinklers_popped));
    fields.push(js_number(save.santa_level));
    fields.push(js_number(save.reindeer_clicked));
    fields.push(js_number(save.season_t));
    fields.push(js_number(save.season_uses));
    fields.push(save.season.clone());
    fields.push(js_number(save.wrinklers.amount));
    fields.push(js_number(save.wrinklers.number));
    fields.push(js_number(save.prestige));
    fields.push(js_number(save.heavenly_chips));
    fields.push(js_number(save.heavenly_chips_spent));
    fields.push(js_number(save.heavenly_cookies));
    fields.push(js_number(save.ascension_mode));
    for slot in &save.permanent_upgrades {
        fields.push(permanent_slot_id(slot));
    }
    fields.push(js_number(save.dragon_level));
    fields.push(js_number(save.dragon_aura));
    fields.push(js_number(save.dragon_aura2));
    fields.push(js_number(save.chime_type));
    fields.push(js_number(save.volume));
    fields.push(js_number(save.wrinklers.shinies));
    fields.push(js_number(save.wrinklers.amount_shinies));
    fields.push(js_number(save.lumps));
    fields.push(js_number(save.lumps_total));
    fields.push(js_number(save.lump_t));
    fields.push(js_number(save.lump_refill));
    fields.push(lump_kind_id(&save.lump_current_type));
    fields.push(encode_vault(&save.vault));
    fields.push(js_number(save.heralds));
    fields.push(flag(save.fortune_gc).to_string());
    fields.push(flag(save.fortune_cps).to_string());
    if save.version >= 2.04 {
        fields.push(js_number(save.cookies_ps_raw_highest));
    }
    fields.join(";")
}

pub(super) fn decode_general(save: &mut Save, segment: &str) -> Result<(), DecodeError> {
    let expected = general_field_count(save.version);
    let mut fields = Fields::new("general stats", segment, ';', expected);
    save.cookies = fields.next_f64()?;
    save.cookies_earned = fields.next_f64()?;
    save.cookie_clicks = fields.next_f64()?;
    save.golden_clicks = fields.next_f64()?;
    save.handmade_cookies = fields.next_f64()?;
    save.missed_golden_clicks = fields.next_f64()?;
    save.bg_type = fields.next_f64()?;
    save.milk_type = fields.next_f64()?;
    save.cookies_reset = fields.next_f64()?;
    save.elder_wrath = fields.next_f64()?;
    save.pledges = fields.next_f64()?;
    save.pledge_t = fields.next_f64()?;
    save.next_research = fields.next_f64()?;
    save.research_t = fields.next_f64()?;
    save.resets = fields.next_f64()?;
    save.golden_clicks_local = fields.next_f64()?;
    save.cookies_sucked = fields.next_f64()?;
    save.wrinklers_popped = fields.next_f64()?;
    save.santa_level = fields.next_f64()?;
    save.reindeer_clicked = fields.next_f64()?;
    save.season_t = fields.next_f64()?;
    save.season_uses = fields.next_f64()?;
    save.season = fields.next()?.to_string();
    save.wrinklers.amount = fields.next_f64()?;
    save.wrinklers.number = fields.next_f64()?;
    save.prestige = fields.next_f64()?;
    save.heavenly_chips = fields.next_f64()?;
    save.heavenly_chips_spent = fields.next_f64()?;
    save.heavenly_cookies = fields.next_f64()?;
    save.ascension_mode = fields.next_f64()?;
    for i in 0..5 {
        save.permanent_upgrades[i] = decode_permanent_slot(fields.next()?)?;
    }
    save.dragon_level = fields.next_f64()?;
    save.dragon_aura = fields.next_f64()?;
    save.dragon_aura2 = fields.next_f64()?;
    save.chime_type = fields.next_f64()?;
    save.volume = fields.next_f64()?;
    save.wrinklers.shinies = fields.next_f64()?;
    save.wrinklers.amount_shinies = fields.next_f64()?;
    save.lumps = fields.next_f64()?;
    save.lumps_total = fields.next_f64()?;
    save.lump_t = fields.next_f64()?;
    save.lump_refill = fields.next_f64()?;
    save.lump_current_type = decode_lump_kind(fields.next()?)?;
    save.vault = decode_vault(fields.next()?)?;
    save.heralds = fields.next_f64()?;
    save.fortune_gc = fields.next_flag()?;
    save.fortune_cps = fields.next_flag()?;
    if save.version >= 2.04 {
        save.cookies_ps_raw_highest = fields.next_f64()?;
    }
    Ok(())
}

fn permanent_slot_id(slot: &str) -> String {
    if slot.is_empty() {
        return "-1".to_string();
    }
    match UPGRADES.id_of(slot) {
        Some(id) => id.to_string(),
        None => {
            log::warn!("permanent upgrade slot holds unknown upgrade {:?}", slot);
            "-1".to_string()
        }
    }
}

fn decode_permanent_slot(field: &str) -> Result<String, DecodeError> {
    let id = field.parse::<i64>().map_err(|_| DecodeError::InvalidNumber {
        context: "permanent upgrades",
        value: field.to_string(),
    })?;
    if id < 0 {
        return Ok(String::new());
    }
    match UPGRADES.name_of(id as usize) {
        Some(name) => Ok(name.to_string()),
        None => {
            log::warn!("permanent upgrade slot references unknown upgrade id {}", id);
            Ok(String::new())
        }
    }
}

fn lump_kind_id(kind: &str) -> String {
    SUGAR_LUMP_KINDS.id_of(kind).unwrap_or(0).to_string()
}

fn decode_lump_kind(field: &str) -> Result<String, DecodeError> {
    let id = field.parse::<i64>().map_err(|_| DecodeError::InvalidNumber {
        context: "sugar lump kind",
        value: field.to_string(),
    })?;
    match SUGAR_LUMP_KINDS.name_of(id.max(0) as usize) {
        Some(name) => Ok(name.to_string()),
        None => {
            log::warn!("unknown sugar lump kind id {}", id);
            Ok("normal".to_string())
        }
    }
}

fn encode_vault(vault: &[String]) -> String {
    let ids: Vec<String> = vault
        .iter()
        .filter_map(|name| UPGRADES.id_of(name))
        .map(|id| id.to_string())
        .collect();
    ids.join(",")
}

fn decode_vault(field: &str) -> Result<Vec<String>, DecodeError> {
    let mut ids: Vec<u16> = Vec::new();
    for part in field.split(',').filter(|part| !part.is_empty()) {
        let id = part.parse::<i64>().map_err(|_| DecodeError::InvalidNumber {
            context: "vault",
            value: part.to_string(),
        })?;
        match UPGRADES.name_of(id.max(0) as usize) {
            Some(_) => ids.push(id as u16),
            None => log::warn!("vault references unknown upgrade id {}", id),
        }
    }
    ids.sort_unstable();
    ids.dedup();
    Ok(ids.iter().map(|id| UPGRADES.name_of(*id as usize).unwrap().to_string()).collect())
}
