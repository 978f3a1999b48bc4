//! The four minigame sub-codecs (garden, market, pantheon, grimoire).
//!
//! Each sub-grammar is space-separated chunks; no chunk ever contains a
//! space, comma or semicolon, so the blobs nest cleanly inside a building
//! record.

use super::numbers::{flag, js_number, parse_f64, parse_flag};
use super::Fields;
use crate::error::DecodeError;
use crate::ids::{GODS, PLANTS, SOILS};
use crate::model::{Garden, GoodState, Grimoire, Market, Pantheon, PLOT_SIZE};

// ---------------------------------------------------------------------------
// Garden
// ---------------------------------------------------------------------------

pub(super) fn encode_garden(garden: &Garden) -> String {
    let soil_id = SOILS.id_of(&garden.soil).unwrap_or(0);
    let stats = [
        js_number(garden.next_step),
        soil_id.to_string(),
        js_number(garden.next_soil),
        flag(garden.freeze).to_string(),
        js_number(garden.harvests),
        js_number(garden.harvests_total),
        flag(garden.on_minigame).to_string(),
        js_number(garden.convert_times),
        js_number(garden.next_freeze),
    ]
    .join(":");

    let unlocked: std::collections::HashSet<&str> =
        garden.unlocked_plants.iter().map(String::as_str).collect();
    let plants: String =
        PLANTS.names().iter().map(|name| if unlocked.contains(name) { '1' } else { '0' }).collect();

    let mut plot = String::with_capacity(PLOT_SIZE * PLOT_SIZE * 4);
    for row in &garden.plot {
        for (plant, age) in row {
            let id_plus_one = if plant == "empty" {
                0
            } else {
                PLANTS.id_of(plant).map(|id| id as u32 + 1).unwrap_or(0)
            };
            plot.push_str(&format!("{}:{}:", id_plus_one, age));
        }
    }

    format!("{} {} {}", stats, plants, plot)
}

pub(super) fn decode_garden(text: &str) -> Result<Garden, DecodeError> {
    let mut chunks = text.splitn(3, ' ');
    let stats = chunks.next().unwrap_or("");
    let plants = chunks.next().ok_or(DecodeError::MissingSegment { segment: "garden plants" })?;
    let plot = chunks.next().ok_or(DecodeError::MissingSegment { segment: "garden plot" })?;

    let mut garden = Garden::default();
    let mut fields = Fields::new("garden", stats, ':', 9);
    garden.next_step = fields.next_f64()?;
    garden.soil = decode_soil(fields.next()?)?;
    garden.next_soil = fields.next_f64()?;
    garden.freeze = fields.next_flag()?;
    garden.harvests = fields.next_f64()?;
    garden.harvests_total = fields.next_f64()?;
    garden.on_minigame = fields.next_flag()?;
    garden.convert_times = fields.next_f64()?;
    garden.next_freeze = fields.next_f64()?;

    if plants.len() > PLANTS.len() {
        return Err(DecodeError::FlagOverflow {
            context: "garden plants",
            len: plants.len(),
            max: PLANTS.len(),
        });
    }
    garden.unlocked_plants.clear();
    for (id, c) in plants.chars().enumerate() {
        if c == '1' {
            garden.unlocked_plants.push(PLANTS.name_of(id).unwrap().to_string());
        }
    }
    garden.canonicalize_plants();

    let cells: Vec<&str> = plot.split(':').filter(|cell| !cell.is_empty()).collect();
    let expected = PLOT_SIZE * PLOT_SIZE * 2;
    if cells.len() != expected {
        return Err(DecodeError::FieldCount {
            context: "garden plot",
            expected,
            found: cells.len(),
        });
    }
    for (i, pair) in cells.chunks(2).enumerate() {
        let id_plus_one = parse_f64("garden plot", pair[0])? as i64;
        let age = parse_f64("garden plot", pair[1])? as u32;
        let plant = if id_plus_one <= 0 {
            "empty".to_string()
        } else {
            match PLANTS.name_of(id_plus_one as usize - 1) {
                Some(name) => name.to_string(),
                None => {
                    log::warn!("plot cell {} references unknown plant id {}", i, id_plus_one - 1);
                    "empty".to_string()
                }
            }
        };
        garden.plot[i / PLOT_SIZE][i % PLOT_SIZE] = (plant, age);
    }
    Ok(garden)
}

fn decode_soil(field: &str) -> Result<String, DecodeError> {
    let id = parse_f64("garden soil", field)? as i64;
    match SOILS.name_of(id.max(0) as usize) {
        Some(name) => Ok(name.to_string()),
        None => {
            log::warn!("unknown soil id {}", id);
            Ok("dirt".to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Market
// ---------------------------------------------------------------------------

/// Prices and deltas are stored as integer cents to avoid float drift.
fn cents(x: f64) -> i64 {
    (x * 100.0).round() as i64
}

pub(super) fn encode_market(market: &Market) -> String {
    let head = [
        js_number(market.office_level),
        js_number(market.brokers),
        js_number(market.graph_lines),
        js_number(market.profit),
        js_number(market.graph_cols),
    ]
    .join(":");

    let mut goods = String::new();
    for good in market.goods.all() {
        goods.push_str(&format!(
            "{}:{}:{}:{}:{}:{}:{}!",
            cents(good.value),
            u8::from(good.mode),
            cents(good.delta),
            js_number(good.duration_ticks),
            js_number(good.stock_held),
            flag(good.hidden),
            js_number(good.last_action),
        ));
    }

    format!("{} {} {}", head, goods, flag(market.on_minigame))
}

pub(super) fn decode_market(text: &str) -> Result<Market, DecodeError> {
    let mut chunks = text.splitn(3, ' ');
    let head = chunks.next().unwrap_or("");
    let goods = chunks.next().ok_or(DecodeError::MissingSegment { segment: "market goods" })?;
    let on = chunks.next().ok_or(DecodeError::MissingSegment { segment: "market flag" })?;

    let mut market = Market::default();
    let mut fields = Fields::new("market", head, ':', 5);
    market.office_level = fields.next_f64()?;
    market.brokers = fields.next_f64()?;
    market.graph_lines = fields.next_f64()?;
    market.profit = fields.next_f64()?;
    market.graph_cols = fields.next_f64()?;

    for (id, record) in goods.split('!').filter(|r| !r.is_empty()).enumerate() {
        let Some(slot) = market.goods.by_id_mut(id) else {
            return Err(DecodeError::FieldCount {
                context: "market goods",
                expected: 16,
                found: id + 1,
            });
        };
        *slot = decode_good(record)?;
    }

    market.on_minigame = parse_flag("market", on)?;
    Ok(market)
}

fn decode_good(record: &str) -> Result<GoodState, DecodeError> {
    let mut fields = Fields::new("market good", record, ':', 7);
    let value = fields.next_f64()? / 100.0;
    let mode_id = fields.next_f64()? as i64;
    let mode = u8::try_from(mode_id.max(0))
        .ok()
        .and_then(|id| crate::model::GoodMode::try_from(id).ok())
        .ok_or(DecodeError::UnknownId { context: "market good mode", id: mode_id })?;
    Ok(GoodState {
        value,
        mode,
        delta: fields.next_f64()? / 100.0,
        duration_ticks: fields.next_f64()?,
        stock_held: fields.next_f64()?,
        hidden: fields.next_flag()?,
        last_action: fields.next_f64()?,
    })
}

// ---------------------------------------------------------------------------
// Pantheon
// ---------------------------------------------------------------------------

pub(super) fn encode_pantheon(pantheon: &Pantheon) -> String {
    let slot_ids: Vec<String> = pantheon
        .slots()
        .iter()
        .map(|name| match GODS.id_of(name) {
            Some(id) => id.to_string(),
            None => "-1".to_string(),
        })
        .collect();
    format!(
        "{} {} {} {}",
        slot_ids.join("/"),
        js_number(pantheon.swaps),
        js_number(pantheon.swap_t),
        flag(pantheon.on_minigame),
    )
}

pub(super) fn decode_pantheon(text: &str) -> Result<Pantheon, DecodeError> {
    let mut fields = Fields::new("pantheon", text, ' ', 4);
    let slots = fields.next()?;
    let mut pantheon = Pantheon::default();
    let mut slot_fields = Fields::new("pantheon slots", slots, '/', 3);
    pantheon.diamond_slot = decode_god_slot(slot_fields.next()?)?;
    pantheon.ruby_slot = decode_god_slot(slot_fields.next()?)?;
    pantheon.jade_slot = decode_god_slot(slot_fields.next()?)?;
    pantheon.swaps = fields.next_f64()?;
    pantheon.swap_t = fields.next_f64()?;
    pantheon.on_minigame = fields.next_flag()?;
    Ok(pantheon)
}

fn decode_god_slot(field: &str) -> Result<String, DecodeError> {
    let id = field.parse::<i64>().map_err(|_| DecodeError::InvalidNumber {
        context: "pantheon slots",
        value: field.to_string(),
    })?;
    if id < 0 {
        return Ok(String::new());
    }
    match GODS.name_of(id as usize) {
        Some(name) => Ok(name.to_string()),
        None => {
            log::warn!("pantheon slot references unknown god id {}", id);
            Ok(String::new())
        }
    }
}

// ---------------------------------------------------------------------------
// Grimoire
// ---------------------------------------------------------------------------

pub(super) fn encode_grimoire(grimoire: &Grimoire) -> String {
    format!(
        "{} {} {} {}",
        js_number(grimoire.magic),
        js_number(grimoire.spells_cast),
        js_number(grimoire.spells_cast_total),
        flag(grimoire.on_minigame),
    )
}

pub(super) fn decode_grimoire(text: &str) -> Result<Grimoire, DecodeError> {
    let mut fields = Fields::new("grimoire", text, ' ', 4);
    Ok(Grimoire {
        magic: fields.next_f64()?,
        spells_cast: fields.next_f64()?,
        spells_cast_total: fields.next_f64()?,
        on_minigame: fields.next_flag()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GoodMode;

    #[test]
    fn garden_round_trip() {
        let mut garden = Garden::default();
        garden.soil = "woodchips".to_string();
        garden.harvests = 12.0;
        garden.unlocked_plants = vec!["bakerWheat".to_string(), "clover".to_string()];
        garden.plot[0][0] = ("bakerWheat".to_string(), 57);
        garden.plot[5][5] = ("clover".to_string(), 3);

        let decoded = decode_garden(&encode_garden(&garden)).unwrap();
        assert_eq!(decoded, garden);
    }

    #[test]
    fn garden_decode_defaults_unknown_plot_plants_to_empty() {
        let text = encode_garden(&Garden::default());
        // Forge the first plot cell to an out-of-table plant id.
        let (head, plot) = text.rsplit_once(' ').unwrap();
        let plot = plot.replacen("0:0:", "999:5:", 1);
        let decoded = decode_garden(&format!("{} {}", head, plot)).unwrap();
        assert_eq!(decoded.plot[0][0], ("empty".to_string(), 5));
        assert_eq!(decoded.plot[0][1], ("empty".to_string(), 0));
    }

    #[test]
    fn market_round_trip_uses_integer_cents() {
        let mut market = Market::default();
        market.office_level = 2.0;
        market.profit = -150.25;
        market.goods.crl.value = 21.57;
        market.goods.crl.mode = GoodMode::FastRise;
        market.goods.crl.delta = -0.35;
        market.goods.crl.stock_held = 40.0;
        market.goods.sbd.hidden = true;
        market.on_minigame = true;

        let text = encode_market(&market);
        assert!(text.contains("2157:3:-35:"));
        let decoded = decode_market(&text).unwrap();
        assert_eq!(decoded, market);
    }

    #[test]
    fn pantheon_round_trip_with_empty_slot() {
        let mut pantheon = Pantheon::default();
        pantheon.diamond_slot = "godzamok".to_string();
        pantheon.jade_slot = "rigidel".to_string();
        pantheon.swaps = 1.0;
        pantheon.swap_t = 1_660_000_000_000.0;

        let text = encode_pantheon(&pantheon);
        assert!(text.starts_with("2/-1/10 "));
        let decoded = decode_pantheon(&text).unwrap();
        assert_eq!(decoded, pantheon);
    }

    #[test]
    fn grimoire_round_trip() {
        let grimoire = Grimoire {
            magic: 34.75,
            spells_cast: 9.0,
            spells_cast_total: 143.0,
            on_minigame: true,
        };
        let decoded = decode_grimoire(&encode_grimoire(&grimoire)).unwrap();
        assert_eq!(decoded, grimoire);
    }
}
