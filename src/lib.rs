//! Reader and writer for the Pokémon Showdown team export format.
//!
//! Parsing entry points live in [`parser`], the canonical writer in [`export`].
//! Both work on the [`model::StatBlock`] value type, which converts losslessly
//! to and from the flat storage row [`model::StatBlockFlat`].

pub mod error;
pub mod export;
pub mod legality;
pub mod model;
pub mod parser;
pub mod stats;

/// Largest team the strict parser accepts.
pub const MAX_TEAM_SIZE: usize = 6;
/// Move lines allowed per Pokémon.
pub const MAX_MOVES: usize = 4;
pub const DEFAULT_LEVEL: u8 = 50;
pub const DEFAULT_NATURE: &str = "Hardy";
pub const MAX_EV: u16 = 252;
pub const MAX_EV_TOTAL: u16 = 510;
pub const MAX_IV: u16 = 31;

pub use error::BlockError;
pub use export::{export_pokemon_to_showdown, export_team, export_team_to_showdown, to_showdown_format};
pub use parser::{parse_pokemon, parse_showdown_team, parse_team, TeamParseResult};

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::export::{export_team, export_team_to_showdown, to_showdown_format};
    pub use crate::legality::{check_stat_block, check_team, LegalityIssue};
    pub use crate::model::{Gender, MoveSet, StatBlock, StatBlockFlat, StatSpread};
    pub use crate::parser::{parse_pokemon, parse_showdown_team, parse_team, TeamParseResult};
    pub use crate::stats::{Nature, Stat};
}
