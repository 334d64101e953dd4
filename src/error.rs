use thiserror::Error;

/// Hard failures for a single Pokémon block.
///
/// Everything else the grammar does not understand falls back to defaults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("Species is required")]
    MissingSpecies,

    #[error("Too many moves (maximum {max})")]
    TooManyMoves { max: usize },
}
