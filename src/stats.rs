use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

static STAT_ALIASES: phf::Map<&'static str, Stat> = phf_map! {
    "hp" => Stat::Hp,
    "atk" => Stat::Atk,
    "attack" => Stat::Atk,
    "def" => Stat::Def,
    "defense" => Stat::Def,
    "spa" => Stat::Spa,
    "spatk" => Stat::Spa,
    "sp. atk" => Stat::Spa,
    "special attack" => Stat::Spa,
    "spd" => Stat::Spd,
    "spdef" => Stat::Spd,
    "sp. def" => Stat::Spd,
    "special defense" => Stat::Spd,
    "spe" => Stat::Spe,
    "speed" => Stat::Spe,
};

impl Stat {
    /// Export order of stat lists.
    pub const ALL: [Stat; 6] = [Stat::Hp, Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];

    pub fn abbreviation(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Atk => "Atk",
            Stat::Def => "Def",
            Stat::Spa => "SpA",
            Stat::Spd => "SpD",
            Stat::Spe => "Spe",
        }
    }

    /// Resolves a stat name as written in an `EVs:`/`IVs:` line.
    ///
    /// Matching ignores case and runs of whitespace, so `SpD`, `sp. def` and
    /// `Special  Defense` all land on [`Stat::Spd`].
    pub fn from_alias(name: &str) -> Option<Stat> {
        let key = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();
        STAT_ALIASES.get(key.as_str()).copied()
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

static NATURES: phf::Map<&'static str, Nature> = phf_map! {
    "hardy" => Nature::Hardy,
    "lonely" => Nature::Lonely,
    "brave" => Nature::Brave,
    "adamant" => Nature::Adamant,
    "naughty" => Nature::Naughty,
    "bold" => Nature::Bold,
    "docile" => Nature::Docile,
    "relaxed" => Nature::Relaxed,
    "impish" => Nature::Impish,
    "lax" => Nature::Lax,
    "timid" => Nature::Timid,
    "hasty" => Nature::Hasty,
    "serious" => Nature::Serious,
    "jolly" => Nature::Jolly,
    "naive" => Nature::Naive,
    "modest" => Nature::Modest,
    "mild" => Nature::Mild,
    "quiet" => Nature::Quiet,
    "bashful" => Nature::Bashful,
    "rash" => Nature::Rash,
    "calm" => Nature::Calm,
    "gentle" => Nature::Gentle,
    "sassy" => Nature::Sassy,
    "careful" => Nature::Careful,
    "quirky" => Nature::Quirky,
};

impl Nature {
    pub fn from_name(name: &str) -> Option<Nature> {
        NATURES.get(name.trim().to_ascii_lowercase().as_str()).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Nature::Hardy => "Hardy",
            Nature::Lonely => "Lonely",
            Nature::Brave => "Brave",
            Nature::Adamant => "Adamant",
            Nature::Naughty => "Naughty",
            Nature::Bold => "Bold",
            Nature::Docile => "Docile",
            Nature::Relaxed => "Relaxed",
            Nature::Impish => "Impish",
            Nature::Lax => "Lax",
            Nature::Timid => "Timid",
            Nature::Hasty => "Hasty",
            Nature::Serious => "Serious",
            Nature::Jolly => "Jolly",
            Nature::Naive => "Naive",
            Nature::Modest => "Modest",
            Nature::Mild => "Mild",
            Nature::Quiet => "Quiet",
            Nature::Bashful => "Bashful",
            Nature::Rash => "Rash",
            Nature::Calm => "Calm",
            Nature::Gentle => "Gentle",
            Nature::Sassy => "Sassy",
            Nature::Careful => "Careful",
            Nature::Quirky => "Quirky",
        }
    }

    /// `(raised, lowered)` stats, or `None` for the neutral natures.
    pub fn effect(self) -> Option<(Stat, Stat)> {
        match self {
            Nature::Hardy | Nature::Docile | Nature::Serious | Nature::Bashful | Nature::Quirky => None,
            Nature::Lonely => Some((Stat::Atk, Stat::Def)),
            Nature::Brave => Some((Stat::Atk, Stat::Spe)),
            Nature::Adamant => Some((Stat::Atk, Stat::Spa)),
            Nature::Naughty => Some((Stat::Atk, Stat::Spd)),
            Nature::Bold => Some((Stat::Def, Stat::Atk)),
            Nature::Relaxed => Some((Stat::Def, Stat::Spe)),
            Nature::Impish => Some((Stat::Def, Stat::Spa)),
            Nature::Lax => Some((Stat::Def, Stat::Spd)),
            Nature::Timid => Some((Stat::Spe, Stat::Atk)),
            Nature::Hasty => Some((Stat::Spe, Stat::Def)),
            Nature::Jolly => Some((Stat::Spe, Stat::Spa)),
            Nature::Naive => Some((Stat::Spe, Stat::Spd)),
            Nature::Modest => Some((Stat::Spa, Stat::Atk)),
            Nature::Mild => Some((Stat::Spa, Stat::Def)),
            Nature::Quiet => Some((Stat::Spa, Stat::Spe)),
            Nature::Rash => Some((Stat::Spa, Stat::Spd)),
            Nature::Calm => Some((Stat::Spd, Stat::Atk)),
            Nature::Gentle => Some((Stat::Spd, Stat::Def)),
            Nature::Sassy => Some((Stat::Spd, Stat::Spe)),
            Nature::Careful => Some((Stat::Spd, Stat::Spa)),
        }
    }
}
