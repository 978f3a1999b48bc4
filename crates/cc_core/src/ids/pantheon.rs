use super::{id_table, IdTable};

/// Pantheon spirits in slotting order. A pantheon slot stores the god id on
/// the wire, `-1` for an empty slot.
pub static GODS: IdTable = id_table!(
    "god",
    &[
        "holobore",
        "vomitrax",
        "godzamok",
        "cyclius",
        "selebrak",
        "dotjeiess",
        "muridal",
        "jeremy",
        "mokalsium",
        "skruuia",
        "rigidel",
    ]
);
