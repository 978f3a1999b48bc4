//! # cc_core — cookie-game save codec and schema validator
//!
//! Bidirectional codec between the game's native compact save text (a
//! pipe/semicolon/colon-delimited, base64 + percent-encoded blob) and a
//! strongly-typed [`model::Save`], plus a lenient object validator that
//! turns arbitrary JSON-like input into the same typed representation with
//! field-by-field diagnostics.
//!
//! Four entry points, all pure and synchronous:
//! - [`encode`] — `&Save -> String` (wire string)
//! - [`decode`] — `&str -> Result<Save, DecodeError>`
//! - [`validate::from_object`] / [`validate::from_object_with`]
//! - the canonical [`ids`] tables

pub mod codec;
pub mod error;
pub mod ids;
pub mod model;
pub mod validate;

pub use codec::{decode, encode};
pub use error::{DecodeError, ValidationError};
pub use model::Save;
pub use validate::{from_object, from_object_with};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Oldest game version the codec understands. Older saves decode with a
/// logged warning.
pub const MIN_GAME_VERSION: f64 = 2.022;
/// Newest game version the codec understands.
pub const MAX_GAME_VERSION: f64 = 2.052;
/// Version a freshly-defaulted save reports.
pub const CURRENT_GAME_VERSION: f64 = 2.052;

pub(crate) const DEFAULT_BAKERY_NAME: &str = "anonymous";
pub(crate) const DEFAULT_SEED: &str = "aaaaa";
