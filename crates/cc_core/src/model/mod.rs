//! The typed save-state aggregate.
//!
//! A `Save` is constructed fresh with `Default`, then either overwritten
//! field-by-field by the object validator or replaced wholesale by the
//! native-format decoder. The model itself performs no I/O.

mod buff;
mod buildings;
pub mod minigame;
mod mod_data;
mod preferences;
mod save;

pub use buff::Buff;
pub use buildings::{Building, Buildings, MinigameHost};
pub use minigame::{Garden, GoodMode, GoodState, Grimoire, Market, MarketGoods, Pantheon, PlotCell, PLOT_SIZE};
pub use mod_data::{ModData, ModSaveData};
pub use preferences::{preference_count, Preferences};
pub use save::{Save, Wrinklers};
