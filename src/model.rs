use crate::stats::Stat;
use crate::{DEFAULT_LEVEL, DEFAULT_NATURE, MAX_IV};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Single-letter marker used in export headers.
    pub fn marker(self) -> char {
        match self {
            Gender::Male => 'M',
            Gender::Female => 'F',
        }
    }

    pub fn from_marker(marker: &str) -> Option<Gender> {
        match marker {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSpread {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl StatSpread {
    pub fn uniform(value: u16) -> Self {
        Self {
            hp: value,
            attack: value,
            defense: value,
            special_attack: value,
            special_defense: value,
            speed: value,
        }
    }

    /// All EVs at 0.
    pub fn default_evs() -> Self {
        Self::uniform(0)
    }

    /// All IVs at 31.
    pub fn default_ivs() -> Self {
        Self::uniform(MAX_IV)
    }

    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.attack,
            Stat::Def => self.defense,
            Stat::Spa => self.special_attack,
            Stat::Spd => self.special_defense,
            Stat::Spe => self.speed,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u16) {
        let slot = match stat {
            Stat::Hp => &mut self.hp,
            Stat::Atk => &mut self.attack,
            Stat::Def => &mut self.defense,
            Stat::Spa => &mut self.special_attack,
            Stat::Spd => &mut self.special_defense,
            Stat::Spe => &mut self.speed,
        };
        *slot = value;
    }

    pub fn total(&self) -> u32 {
        Stat::ALL.iter().map(|&stat| self.get(stat) as u32).sum()
    }
}

/// Four move slots. The first is always present, possibly as an empty
/// placeholder; the rest are absent rather than empty when unused.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveSet {
    pub move1: String,
    #[serde(default)]
    pub move2: Option<String>,
    #[serde(default)]
    pub move3: Option<String>,
    #[serde(default)]
    pub move4: Option<String>,
}

impl MoveSet {
    /// Fills slots in order. Anything past the fourth move is dropped; the
    /// parser rejects such blocks before getting here.
    pub fn from_moves<I>(moves: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut iter = moves.into_iter();
        Self {
            move1: iter.next().unwrap_or_default(),
            move2: iter.next(),
            move3: iter.next(),
            move4: iter.next(),
        }
    }

    /// Non-empty moves in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(Some(self.move1.as_str()))
            .chain([self.move2.as_deref(), self.move3.as_deref(), self.move4.as_deref()])
            .flatten()
            .filter(|name| !name.is_empty())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One Pokémon's competitive configuration.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatBlock {
    pub species: String,
    pub nickname: Option<String>,
    pub level: u8,
    pub nature: String,
    pub ability: String,
    pub held_item: Option<String>,
    pub gender: Option<Gender>,
    pub is_shiny: bool,
    pub tera_type: Option<String>,
    /// Informational; set by callers, never derived here.
    pub format_legal: bool,
    pub moves: MoveSet,
    pub evs: StatSpread,
    pub ivs: StatSpread,
}

impl Default for StatBlock {
    fn default() -> Self {
        Self {
            species: String::new(),
            nickname: None,
            level: DEFAULT_LEVEL,
            nature: DEFAULT_NATURE.to_string(),
            ability: String::new(),
            held_item: None,
            gender: None,
            is_shiny: false,
            tera_type: None,
            format_legal: true,
            moves: MoveSet::default(),
            evs: StatSpread::default_evs(),
            ivs: StatSpread::default_ivs(),
        }
    }
}

impl StatBlock {
    pub fn to_flat(&self) -> StatBlockFlat {
        StatBlockFlat::from(self.clone())
    }

    pub fn from_flat(flat: StatBlockFlat) -> Self {
        Self::from(flat)
    }

    /// Nickname worth showing: present, non-empty and not just the species.
    pub fn display_nickname(&self) -> Option<&str> {
        self.nickname
            .as_deref()
            .filter(|nick| !nick.is_empty() && *nick != self.species)
    }
}

/// [`StatBlock`] with moves and stat spreads hoisted into prefixed columns,
/// matching the storage row shape.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatBlockFlat {
    pub species: String,
    pub nickname: Option<String>,
    pub level: u8,
    pub nature: String,
    pub ability: String,
    pub held_item: Option<String>,
    pub gender: Option<Gender>,
    pub is_shiny: bool,
    pub tera_type: Option<String>,
    pub format_legal: bool,
    pub move1: String,
    pub move2: Option<String>,
    pub move3: Option<String>,
    pub move4: Option<String>,
    pub ev_hp: u16,
    pub ev_attack: u16,
    pub ev_defense: u16,
    pub ev_special_attack: u16,
    pub ev_special_defense: u16,
    pub ev_speed: u16,
    pub iv_hp: u16,
    pub iv_attack: u16,
    pub iv_defense: u16,
    pub iv_special_attack: u16,
    pub iv_special_defense: u16,
    pub iv_speed: u16,
}

impl Default for StatBlockFlat {
    fn default() -> Self {
        StatBlock::default().into()
    }
}

impl StatBlockFlat {
    pub fn evs(&self) -> StatSpread {
        StatSpread {
            hp: self.ev_hp,
            attack: self.ev_attack,
            defense: self.ev_defense,
            special_attack: self.ev_special_attack,
            special_defense: self.ev_special_defense,
            speed: self.ev_speed,
        }
    }

    pub fn ivs(&self) -> StatSpread {
        StatSpread {
            hp: self.iv_hp,
            attack: self.iv_attack,
            defense: self.iv_defense,
            special_attack: self.iv_special_attack,
            special_defense: self.iv_special_defense,
            speed: self.iv_speed,
        }
    }
}

impl From<StatBlock> for StatBlockFlat {
    fn from(block: StatBlock) -> Self {
        let StatBlock {
            species,
            nickname,
            level,
            nature,
            ability,
            held_item,
            gender,
            is_shiny,
            tera_type,
            format_legal,
            moves,
            evs,
            ivs,
        } = block;
        Self {
            species,
            nickname,
            level,
            nature,
            ability,
            held_item,
            gender,
            is_shiny,
            tera_type,
            format_legal,
            move1: moves.move1,
            move2: moves.move2,
            move3: moves.move3,
            move4: moves.move4,
            ev_hp: evs.hp,
            ev_attack: evs.attack,
            ev_defense: evs.defense,
            ev_special_attack: evs.special_attack,
            ev_special_defense: evs.special_defense,
            ev_speed: evs.speed,
            iv_hp: ivs.hp,
            iv_attack: ivs.attack,
            iv_defense: ivs.defense,
            iv_special_attack: ivs.special_attack,
            iv_special_defense: ivs.special_defense,
            iv_speed: ivs.speed,
        }
    }
}

impl From<StatBlockFlat> for StatBlock {
    fn from(flat: StatBlockFlat) -> Self {
        let evs = flat.evs();
        let ivs = flat.ivs();
        let StatBlockFlat {
            species,
            nickname,
            level,
            nature,
            ability,
            held_item,
            gender,
            is_shiny,
            tera_type,
            format_legal,
            move1,
            move2,
            move3,
            move4,
            ..
        } = flat;
        Self {
            species,
            nickname,
            level,
            nature,
            ability,
            held_item,
            gender,
            is_shiny,
            tera_type,
            format_legal,
            moves: MoveSet {
                move1,
                move2,
                move3,
                move4,
            },
            evs,
            ivs,
        }
    }
}
