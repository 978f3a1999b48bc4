use super::{id_table, IdTable};

/// Garden plants in canonical order. `bakerWheat` is the base plant; a
/// garden's unlocked set always contains it, and plot cells store
/// `id + 1` on the wire (0 means empty).
pub static PLANTS: IdTable = id_table!(
    "plant",
    &[
        "bakerWheat",
        "thumbcorn",
        "cronerice",
        "gildmillet",
        "clover",
        "goldenClover",
        "shimmerlily",
        "elderwort",
        "bakeberry",
        "chocoroot",
        "whiteChocoroot",
        "whiteMildew",
        "brownMold",
        "meddleweed",
        "whiskerbloom",
        "chimerose",
        "nursetulip",
        "drowsyfern",
        "wardlichen",
        "keenmoss",
        "queenbeet",
        "queenbeetLump",
        "duketater",
        "crumbspore",
        "doughshroom",
        "glovemorel",
        "cheapcap",
        "foolBolete",
        "wrinklegill",
        "greenRot",
        "shriekbulb",
        "tidygrass",
        "everdaisy",
        "ichorpuff",
    ]
);

/// Garden soils, in unlock order. The garden sub-format stores the soil id.
pub static SOILS: IdTable =
    id_table!("soil", &["dirt", "fertilizer", "clay", "pebbles", "woodchips"]);
