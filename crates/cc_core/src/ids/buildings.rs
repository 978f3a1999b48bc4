use super::{id_table, IdTable};

/// The 18 building types, in save-file order. The buildings segment of the
/// wire format emits one record per entry, in this order.
pub static BUILDINGS: IdTable = id_table!(
    "building",
    &[
        "Cursor",
        "Grandma",
        "Farm",
        "Mine",
        "Factory",
        "Bank",
        "Temple",
        "Wizard tower",
        "Shipment",
        "Alchemy lab",
        "Portal",
        "Time machine",
        "Antimatter condenser",
        "Prism",
        "Chancemaker",
        "Fractal engine",
        "Javascript console",
        "Idleverse",
    ]
);
