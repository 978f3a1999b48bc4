//! Canonical ID tables.
//!
//! Every domain the save format references (upgrades, achievements, plants,
//! soils, pantheon gods, market goods, sugar-lump kinds, buff kinds, building
//! names) has one fixed, ordered master list here. The index of a name in its
//! list is its canonical id; the wire format only ever stores ids, never free
//! text. All orderings in the data model (upgrade lists, achievement lists,
//! unlocked plants) are defined by these tables.

mod achievements;
mod buffs;
mod buildings;
mod garden;
mod market;
mod pantheon;
mod upgrades;

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub use achievements::ACHIEVEMENTS;
pub use buffs::BUFFS;
pub use buildings::BUILDINGS;
pub use garden::{PLANTS, SOILS};
pub use market::GOODS;
pub use pantheon::GODS;
pub use upgrades::UPGRADES;

/// An ordered name table plus its exact name -> id inverse.
///
/// The inverse is built lazily on first access; a duplicate name in a table is
/// a programmer error and panics at that point.
pub struct IdTable {
    label: &'static str,
    names: &'static [&'static str],
    inverse: Lazy<HashMap<&'static str, u16>>,
}

macro_rules! id_table {
    ($label:literal, $names:expr) => {
        IdTable {
            label: $label,
            names: $names,
            inverse: once_cell::sync::Lazy::new(|| crate::ids::build_inverse($label, $names)),
        }
    };
}
pub(crate) use id_table;

impl IdTable {
    /// Canonical id of `name`, or `None` if the name is not in the table.
    pub fn id_of(&self, name: &str) -> Option<u16> {
        self.inverse.get(name).copied()
    }

    /// Name at canonical id `id`.
    pub fn name_of(&self, id: usize) -> Option<&'static str> {
        self.names.get(id).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inverse.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All names in canonical order.
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// What this table indexes ("upgrade", "plant", ...), used in diagnostics.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

pub(crate) fn build_inverse(
    label: &'static str,
    names: &'static [&'static str],
) -> HashMap<&'static str, u16> {
    let mut map = HashMap::with_capacity(names.len());
    for (id, name) in names.iter().enumerate() {
        if map.insert(*name, id as u16).is_some() {
            panic!("duplicate {} name in canonical table: {:?}", label, name);
        }
    }
    map
}

/// Sugar-lump kinds, in the order the save format numbers them.
pub static SUGAR_LUMP_KINDS: IdTable =
    id_table!("sugar lump kind", &["normal", "bifurcated", "golden", "meaty", "caramelized"]);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exact_inverse(table: &IdTable) {
        for (id, name) in table.names().iter().enumerate() {
            assert_eq!(
                table.id_of(name),
                Some(id as u16),
                "{} table: inverse[{:?}] != {}",
                table.label(),
                name,
                id
            );
        }
        assert_eq!(table.len(), table.names().len());
    }

    #[test]
    fn every_table_inverse_is_exact() {
        for table in [
            &UPGRADES,
            &ACHIEVEMENTS,
            &PLANTS,
            &SOILS,
            &GODS,
            &GOODS,
            &SUGAR_LUMP_KINDS,
            &BUFFS,
            &BUILDINGS,
        ] {
            assert_exact_inverse(table);
        }
    }

    #[test]
    fn fixed_table_sizes() {
        assert_eq!(BUILDINGS.len(), 18);
        assert_eq!(PLANTS.len(), 34);
        assert_eq!(SOILS.len(), 5);
        assert_eq!(GODS.len(), 11);
        assert_eq!(GOODS.len(), 16);
        assert_eq!(SUGAR_LUMP_KINDS.len(), 5);
        assert_eq!(BUFFS.len(), 26);
    }

    #[test]
    fn base_plant_is_first() {
        assert_eq!(PLANTS.name_of(0), Some("bakerWheat"));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(UPGRADES.id_of("Not an upgrade"), None);
        assert_eq!(PLANTS.id_of(""), None);
        assert_eq!(BUILDINGS.id_of("farm"), None); // case sensitive
    }
}
