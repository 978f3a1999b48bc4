use super::{id_table, IdTable};

/// Canonical achievement names. The achievements segment of the wire format
/// is one `0`/`1` character per entry, in this order, and the model's
/// `achievements` list is sorted by this index.
pub static ACHIEVEMENTS: IdTable = id_table!(
    "achievement",
    &[
        // Banked cookies
        "Wake and bake",
        "Making some dough",
        "So baked right now",
        "Fledgling bakery",
        "Affluent bakery",
        "World-famous bakery",
        "Cosmic bakery",
        "Galactic bakery",
        "Universal bakery",
        "Timeless bakery",
        "Infinite bakery",
        "Immortal bakery",
        "Don't stop me now",
        "You can stop now",
        "Cookies all the way down",
        "Overdose",
        // Cookies per second
        "Casual baking",
        "Hardcore baking",
        "Steady tasty stream",
        "Cookie monster",
        "Mass producer",
        "Cookie vortex",
        "Cookie pulsar",
        "Cookie quasar",
        "Oh hey, you're still here",
        "Let's never bake again",
        // Ascension
        "Sacrifice",
        "Oblivion",
        "From scratch",
        // Clicking
        "Neverclick",
        "Clicktastic",
        "Clickathlon",
        "Clickolympics",
        "Clickorama",
        "Clickasmic",
        "Clickageddon",
        "Clicknarok",
        // Cursors
        "Click",
        "Double-click",
        "Mouse wheel",
        "Of Mice and Men",
        "The Digital",
        "Extreme polydactyly",
        // Grandmas
        "Just wrong",
        "Grandma's cookies",
        "Sloppy kisses",
        "Retirement home",
        "Friend of the ancients",
        "Ruler of the ancients",
        // Farms
        "Bought the farm",
        "Reap what you sow",
        "Farm ill",
        "Perfected agriculture",
        // Mines
        "You know the drill",
        "Excavation site",
        "Hollow the planet",
        "Can you dig it",
        // Factories
        "Production chain",
        "Industrial revolution",
        "Global warming",
        "Ultimate automation",
        // Banks
        "Pretty penny",
        "Fit the bill",
        "A loan in the dark",
        "Need for greed",
        "It's the economy, stupid",
        // Temples
        "Your time to shine",
        "Shady sect",
        "New-age cult",
        "Organized religion",
        "Fanaticism",
        // Wizard towers
        "Bewitched",
        "The sorcerer's apprentice",
        "Charms and enchantments",
        "Curses and maledictions",
        "Magic kingdom",
        // Shipments
        "Expedition",
        "Galactic highway",
        "Far far away",
        "Type II civilization",
        // Alchemy labs
        "Transmutation",
        "Transmogrification",
        "Gold member",
        "Gild wars",
        // Portals
        "A whole new world",
        "Now you're thinking",
        "Dimensional shift",
        "Brain-split",
        // Time machines
        "Time warp",
        "Alternate timeline",
        "Rewriting history",
        "Time duke",
        // Antimatter condensers
        "One with everything",
        "Mathematician",
        "Base 10",
        "Molecular maestro",
        // Prisms
        "Lone photon",
        "Dazzling glimmer",
        "Blinding flash",
        "Unending glow",
        // Chancemakers
        "Lucked out",
        "What are the odds",
        "Grand gesture",
        "Above the law",
        // Fractal engines
        "Self-contained",
        "Threw you for a loop",
        "The sum of its parts",
        "Bears repeating",
        // Javascript consoles
        "First repository",
        "Source control",
        "Always in beta",
        "Version control",
        // Idleverses
        "Derivative discovery",
        "Parallel universe",
        "Forever and ever",
        "Walk the planck",
        // Buildings / upgrades totals
        "Builder",
        "Architect",
        "Engineer",
        "Lord of Constructs",
        "Enhancer",
        "Augmenter",
        "Upgrader",
        "Lord of Progress",
        // Golden cookies
        "Golden cookie",
        "Lucky cookie",
        "A stroke of luck",
        "Fortune",
        "Leprechaun",
        "Black cat's paw",
        // Grandmapocalypse
        "Elder nap",
        "Elder slumber",
        "Elder",
        "Elder calm",
        "Itchscratcher",
        "Wrinklesquisher",
        "Moistburster",
        // Shadow / misc
        "True Neverclick",
        "Speed baking I",
        "Speed baking II",
        "Speed baking III",
        "Cheated cookies taste awful",
        "Third-party",
        "Cookie-dunker",
        "Tiny cookie",
        "What's in a name",
        "Here you go",
        "Tabloid addiction",
        // Seasonal
        "Let it snow",
        "Oh deer",
        "Sleigh of hand",
        "Reindeer sleigher",
        "Eldeer",
        "Spooky cookies",
        "Ghost busters",
        "The hunt is on",
        "Egg hunter",
        "Hide & seek champion",
        "Lovely cookies",
        // Minigames
        "Seedy business",
        "Keeper of the conservatory",
        "Botanical perfection",
        "Buy buy buy",
        "Gaseous assets",
        "Pyramid scheme",
        "Jellicles",
        "Initial public offering",
        "Rookie numbers",
        "No nobility in poverty",
        "The leader is good, the leader is great",
        "You'll never walk alone",
    ]
);
