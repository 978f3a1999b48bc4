//! Building minigame sub-states.
//!
//! Four buildings host a minigame: Farm (garden), Bank (market), Temple
//! (pantheon), Wizard tower (grimoire). Each is an independent struct with
//! its own sub-codec in `crate::codec`.

mod garden;
mod grimoire;
mod market;
mod pantheon;

pub use garden::{Garden, PlotCell, PLOT_SIZE};
pub use grimoire::Grimoire;
pub use market::{GoodMode, GoodState, Market, MarketGoods};
pub use pantheon::Pantheon;
