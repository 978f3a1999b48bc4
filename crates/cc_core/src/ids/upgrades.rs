use super::{id_table, IdTable};

/// Canonical upgrade names. The index of a name is its upgrade id; the
/// upgrades segment of the wire format emits one two-character bit pair per
/// entry, in this order, and `ownedUpgrades` / `unlockedUpgrades` / `vault`
/// are sorted by this index.
pub static UPGRADES: IdTable = id_table!(
    "upgrade",
    &[
        // Cursors / clicking
        "Reinforced index finger",
        "Carpal tunnel prevention cream",
        "Ambidextrous",
        "Thousand fingers",
        "Million fingers",
        "Billion fingers",
        "Trillion fingers",
        // Grandmas
        "Forwards from grandma",
        "Steel-plated rolling pins",
        "Lubricated dentures",
        // Farms
        "Cheap hoes",
        "Fertilizer",
        "Cookie trees",
        // Mines
        "Sugar gas",
        "Megadrill",
        "Ultradrill",
        // Factories
        "Sturdier conveyor belts",
        "Child labor",
        "Sugar bombing",
        // Mouse upgrades
        "Plastic mouse",
        "Iron mouse",
        "Titanium mouse",
        "Adamantium mouse",
        "Unobtainium mouse",
        "Eludium mouse",
        "Wishalloy mouse",
        "Fantasteel mouse",
        "Nevercrack mouse",
        "Armythril mouse",
        "Technobsidian mouse",
        "Plasmarble mouse",
        // Kittens
        "Kitten helpers",
        "Kitten workers",
        "Kitten engineers",
        "Kitten overseers",
        "Kitten managers",
        "Kitten accountants",
        "Kitten specialists",
        "Kitten experts",
        "Kitten consultants",
        "Kitten assistants to the regional manager",
        // Cookies
        "Plain cookies",
        "Sugar cookies",
        "Oatmeal raisin cookies",
        "Peanut butter cookies",
        "Coconut cookies",
        "White chocolate cookies",
        "Macadamia nut cookies",
        "Double-chip cookies",
        "White chocolate macadamia nut cookies",
        "All-chocolate cookies",
        "Dark chocolate-coated cookies",
        "White chocolate-coated cookies",
        "Eclipse cookies",
        "Zebra cookies",
        "Snickerdoodles",
        "Stroopwafels",
        "Macaroons",
        "Empire biscuits",
        "Madeleines",
        "Palmiers",
        "Palets",
        "Sables",
        "Gingerbread men",
        "Gingerbread trees",
        // Golden cookie upgrades
        "Lucky day",
        "Serendipity",
        "Get lucky",
        // Research / grandmapocalypse
        "Bingo center/Research facility",
        "Specialized chocolate chips",
        "Designer cocoa beans",
        "Ritual rolling pins",
        "Underworld ovens",
        "One mind",
        "Exotic nuts",
        "Communal brainsweep",
        "Arcane sugar",
        "Elder Pact",
        "Elder Pledge",
        "Sacrificial rolling pins",
        "Elder Covenant",
        "Revoke Elder Covenant",
        // Banks
        "Taller tellers",
        "Scissor-resistant credit cards",
        "Acid-proof vaults",
        // Temples
        "Golden idols",
        "Sacrifices",
        "Delicious blessing",
        // Wizard towers
        "Pointier hats",
        "Beardlier beards",
        "Ancient grimoires",
        // Shipments
        "Vanilla nebulae",
        "Wormholes",
        "Frequent flyer",
        // Alchemy labs
        "Antimony",
        "Essence of dough",
        "True chocolate",
        // Portals
        "Ancient tablet",
        "Insane oatling workers",
        "Soul bond",
        // Time machines
        "Flux capacitors",
        "Time paradox resolver",
        "Quantum conundrum",
        // Antimatter condensers
        "Sugar rush",
        "String theory",
        "Large macaron collider",
        // Prisms
        "Gem polish",
        "9th color",
        "Chocolate light",
        // Chancemakers
        "Your lucky cookie",
        "All Bets Are Off magic tricks",
        "Winning lottery ticket",
        // Fractal engines
        "Metabakeries",
        "Mandelbrown sugar",
        "Fractoids",
        // Javascript consoles
        "The JavaScript console for dummies",
        "64bit arrays",
        "Stack overflow",
        // Idleverses
        "Manifest destiny",
        "The multiverse in a nutshell",
        "All-conversion",
        // Heavenly
        "Heavenly chip secret",
        "Heavenly cookie stand",
        "Heavenly bakery",
        "Heavenly confectionery",
        "Heavenly key",
        // Seasonal
        "Season switcher",
        "Festive biscuit",
        "Ghostly biscuit",
        "Lovesick biscuit",
        "Fool's biscuit",
        "Bunny biscuit",
        "A festive hat",
        "Naughty list",
        "Santa's bottomless bag",
        "Santa's helpers",
        "Santa's legacy",
        "Santa's milk and cookies",
        "Reindeer baking grounds",
        "Weighted sleighs",
        "Ho ho ho-flavored frosting",
        "Season savings",
        "Toy workshop",
        "Santa's dominion",
        // Biscuits from golden cookies during seasons
        "Skull cookies",
        "Ghost cookies",
        "Bat cookies",
        "Spider cookies",
        "Pumpkin cookies",
        "Eyeball cookies",
        "Spooky cookies",
        // Easter eggs
        "Chicken egg",
        "Duck egg",
        "Turkey egg",
        "Quail egg",
        "Robin egg",
        "Ostrich egg",
        "Cassowary egg",
        "Salmon roe",
        "Frogspawn",
        "Shark egg",
        "Turtle egg",
        "Ant larva",
        "Golden goose egg",
        "Faberge egg",
        "Wrinklerspawn",
        "Cookie egg",
        "Omelette",
        "Chocolate egg",
        "Century egg",
        "\"egg\"",
        // Dragon
        "A crumbly egg",
        "Dragon cookie",
        // Sugar lumps
        "Sugar baking",
        "Sugar craving",
        "Sugar aging process",
        "Sugar frenzy",
        // Wrinklers
        "Wrinkler doormat",
        "Sacrilegious corruption",
        "Elder spice",
        // Golden switch
        "Golden switch",
        "Golden switch [off]",
        "Golden switch [on]",
        // Milk selector and other toggles
        "Milk selector",
        "Background selector",
        "Classic dairy selection",
        "Fanciful dairy selection",
        // Fortune cookies
        "Fortune cookies",
        "Fortune #001",
        "Fortune #002",
        "Fortune #003",
        "Fortune #004",
        "Fortune #005",
        "Fortune #100",
        "Fortune #101",
        "Fortune #102",
        "Fortune #103",
        "Fortune #104",
        "Fortune cookies galore",
        // Synergies
        "Future almanacs",
        "Rain prayer",
        "Seismic magic",
        "Asteroid mining",
        "Quantum electronics",
        "Temporal overclocking",
        "Contracts from beyond",
        "Printing presses",
        "Paganism",
        "God particle",
        "Arcane knowledge",
        "Magical botany",
        "Fossil fuels",
        "Shipyards",
        "Primordial ores",
        "Gold fund",
        "Infernal crops",
        "Abysmal glimmer",
        "Relativistic parsec-skipping",
        "Primeval glow",
        "Extra physics funding",
        "Chemical proficiency",
        "Light magic",
        "Mystical energies",
    ]
);
