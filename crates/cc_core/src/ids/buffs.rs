use super::{id_table, IdTable};

/// The 26 known buff kinds. The index of a kind here is the numeric type id
/// the wire format stores in each buff record; ids outside this table decode
/// to the `unknown` fallback variant.
pub static BUFFS: IdTable = id_table!(
    "buff",
    &[
        "frenzy",
        "blood frenzy",
        "clot",
        "dragon harvest",
        "everything must go",
        "cursed finger",
        "click frenzy",
        "dragonflight",
        "cookie storm",
        "building buff",
        "building debuff",
        "sugar blessing",
        "haggler luck",
        "haggler misery",
        "pixie luck",
        "pixie misery",
        "magic adept",
        "magic inept",
        "devastation",
        "sugar frenzy",
        "loan 1",
        "loan 1 (interest)",
        "loan 2",
        "loan 2 (interest)",
        "loan 3",
        "loan 3 (interest)",
    ]
);
