use crate::error::BlockError;
use crate::model::{Gender, MoveSet, StatBlock, StatSpread};
use crate::stats::Stat;
use crate::{MAX_MOVES, MAX_TEAM_SIZE};
use log::{debug, trace, warn};
use serde::Serialize;
use std::collections::HashSet;

/// Outcome of a strict team parse. Per-block problems are collected here
/// instead of failing the whole call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TeamParseResult {
    pub success: bool,
    pub pokemon: Vec<StatBlock>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl TeamParseResult {
    fn failed(error: String) -> Self {
        Self {
            success: false,
            errors: vec![error],
            ..Self::default()
        }
    }

    /// Rejects the submission if any block failed.
    pub fn into_result(self) -> anyhow::Result<Vec<StatBlock>> {
        if !self.success {
            anyhow::bail!("Invalid team: {}", self.errors.join("; "));
        }
        Ok(self.pokemon)
    }
}

/// Best-effort parse: blocks that fail are dropped.
pub fn parse_team(text: &str) -> Vec<StatBlock> {
    let mut team = Vec::new();
    for (idx, block) in split_blocks(text).iter().enumerate() {
        match parse_block(block) {
            Ok(pokemon) => team.push(pokemon),
            Err(err) => warn!("Skipping team entry {}: {}", idx + 1, err),
        }
    }
    team
}

/// Diagnostic parse. Fails the team when there is nothing to parse or more
/// than [`MAX_TEAM_SIZE`] blocks; otherwise records `Pokemon N: ...` errors and
/// keeps going.
pub fn parse_showdown_team(text: &str) -> TeamParseResult {
    let blocks = split_blocks(text);
    if blocks.is_empty() {
        return TeamParseResult::failed("No Pokemon found".to_string());
    }
    if blocks.len() > MAX_TEAM_SIZE {
        return TeamParseResult::failed(format!(
            "Team cannot have more than {} Pokemon (found {})",
            MAX_TEAM_SIZE,
            blocks.len()
        ));
    }

    let mut result = TeamParseResult::default();
    let mut seen = HashSet::new();
    for (idx, block) in blocks.iter().enumerate() {
        let position = idx + 1;
        match parse_block(block) {
            Ok(pokemon) => {
                if !seen.insert(pokemon.species.to_ascii_lowercase()) {
                    let warning = format!(
                        "Pokemon {}: Duplicate species \"{}\" detected",
                        position, pokemon.species
                    );
                    warn!("{}", warning);
                    result.warnings.push(warning);
                }
                result.pokemon.push(pokemon);
            }
            Err(err) => result.errors.push(format!("Pokemon {}: {}", position, err)),
        }
    }
    result.success = result.errors.is_empty() && !result.pokemon.is_empty();
    result
}

/// Parses a single Pokémon. Blank lines inside `text` are ignored.
pub fn parse_pokemon(text: &str) -> Result<StatBlock, BlockError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    parse_block(&lines)
}

fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    // `lines` already strips a trailing `\r`.
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(trimmed);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn parse_block(lines: &[&str]) -> Result<StatBlock, BlockError> {
    let (header_line, rest) = lines.split_first().ok_or(BlockError::MissingSpecies)?;
    let header = parse_header(header_line);
    if header.species.is_empty() {
        return Err(BlockError::MissingSpecies);
    }

    let mut pokemon = StatBlock {
        species: header.species.to_string(),
        nickname: header.nickname.map(str::to_string),
        gender: header.gender,
        held_item: header.item.map(str::to_string),
        ..StatBlock::default()
    };
    let mut moves = Vec::new();

    for line in rest {
        match classify(line) {
            LineKind::Ability(ability) => pokemon.ability = ability.to_string(),
            LineKind::Level(level) => {
                if let Some(level) = level {
                    pokemon.level = level;
                }
            }
            LineKind::Shiny(shiny) => pokemon.is_shiny = shiny,
            LineKind::TeraType(tera) => pokemon.tera_type = Some(tera.to_string()),
            LineKind::Evs(list) => pokemon.evs = parse_stat_list(list, StatSpread::default_evs()),
            LineKind::Ivs(list) => pokemon.ivs = parse_stat_list(list, StatSpread::default_ivs()),
            LineKind::Nature(nature) => pokemon.nature = nature.to_string(),
            LineKind::Move(name) => {
                if moves.len() == MAX_MOVES {
                    return Err(BlockError::TooManyMoves { max: MAX_MOVES });
                }
                moves.push(name.to_string());
            }
            LineKind::Unknown => trace!("Ignoring line {:?} for {}", line, pokemon.species),
        }
    }
    pokemon.moves = MoveSet::from_moves(moves);
    debug!("Parsed {} with {} move(s)", pokemon.species, pokemon.moves.len());
    Ok(pokemon)
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Header<'a> {
    species: &'a str,
    nickname: Option<&'a str>,
    gender: Option<Gender>,
    item: Option<&'a str>,
}

fn parse_header(line: &str) -> Header<'_> {
    let (base, item) = match line.rfind('@') {
        Some(at) => (line[..at].trim(), Some(line[at + 1..].trim())),
        None => (line.trim(), None),
    };
    let item = item.filter(|item| !item.is_empty());
    let (base, gender) = split_gender(base);
    let (nickname, species) = split_nickname(base);
    Header {
        species,
        nickname,
        gender,
        item,
    }
}

/// Strips a trailing `(M)` / `(F)` marker, as long as something precedes it.
fn split_gender(base: &str) -> (&str, Option<Gender>) {
    if let Some((rest, inner)) = trailing_parens(base) {
        if let Some(gender) = Gender::from_marker(inner) {
            if !rest.is_empty() {
                return (rest, Some(gender));
            }
        }
    }
    (base, None)
}

/// `Name (Species)` → `(Some(Name), Species)`; anything else is a bare species.
fn split_nickname(base: &str) -> (Option<&str>, &str) {
    match trailing_parens(base) {
        Some((name, species)) if !name.is_empty() && !species.is_empty() => (Some(name), species),
        _ => (None, base),
    }
}

/// Splits `text (inner)` into trimmed `text` and `inner`.
fn trailing_parens(text: &str) -> Option<(&str, &str)> {
    let body = text.strip_suffix(')')?;
    let open = body.rfind('(')?;
    Some((body[..open].trim(), body[open + 1..].trim()))
}

#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Ability(&'a str),
    /// `None` when the value is not an integer in 1..=100.
    Level(Option<u8>),
    Shiny(bool),
    TeraType(&'a str),
    Evs(&'a str),
    Ivs(&'a str),
    Nature(&'a str),
    Move(&'a str),
    Unknown,
}

type PrefixRule = (&'static str, for<'a> fn(&'a str) -> LineKind<'a>);

const PREFIX_RULES: &[PrefixRule] = &[
    ("Ability:", |v| LineKind::Ability(v)),
    ("Level:", |v| LineKind::Level(parse_level(v))),
    ("Shiny:", |v| LineKind::Shiny(v.eq_ignore_ascii_case("yes") || v.eq_ignore_ascii_case("true"))),
    ("Tera Type:", |v| LineKind::TeraType(v)),
    ("EVs:", |v| LineKind::Evs(v)),
    ("IVs:", |v| LineKind::Ivs(v)),
    ("- ", |v| LineKind::Move(v)),
];

fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim();
    for (prefix, build) in PREFIX_RULES {
        if let Some(rest) = line.strip_prefix(prefix) {
            return build(rest.trim());
        }
    }
    if let Some(nature) = line.strip_suffix(" Nature") {
        return LineKind::Nature(nature.trim());
    }
    LineKind::Unknown
}

fn parse_level(value: &str) -> Option<u8> {
    value
        .parse::<i64>()
        .ok()
        .filter(|level| (1..=100).contains(level))
        .map(|level| level as u8)
}

fn parse_stat_list(list: &str, mut base: StatSpread) -> StatSpread {
    for part in list.split('/') {
        let trimmed = part.trim();
        let Some((value, name)) = trimmed.split_once(char::is_whitespace) else {
            continue;
        };
        if let (Ok(value), Some(stat)) = (value.parse::<u16>(), Stat::from_alias(name)) {
            base.set(stat, value);
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_with_nickname_gender_and_item() {
        let header = parse_header("Sparky (Pikachu) (M) @ Light Ball");
        assert_eq!(
            header,
            Header {
                species: "Pikachu",
                nickname: Some("Sparky"),
                gender: Some(Gender::Male),
                item: Some("Light Ball"),
            }
        );
    }

    #[test]
    fn header_with_nickname_only() {
        let header = parse_header("Chompy (Garchomp)");
        assert_eq!(header.species, "Garchomp");
        assert_eq!(header.nickname, Some("Chompy"));
        assert_eq!(header.gender, None);
        assert_eq!(header.item, None);
    }

    #[test]
    fn header_with_gender_only_is_not_a_nickname() {
        let header = parse_header("Pikachu (F)");
        assert_eq!(header.species, "Pikachu");
        assert_eq!(header.nickname, None);
        assert_eq!(header.gender, Some(Gender::Female));
    }

    #[test]
    fn header_bare_species_with_item() {
        let header = parse_header("Charizard @ Charcoal");
        assert_eq!(header.species, "Charizard");
        assert_eq!(header.nickname, None);
        assert_eq!(header.item, Some("Charcoal"));
    }

    #[test]
    fn header_item_splits_on_last_at() {
        let header = parse_header("M@x (Ditto) @ Choice Scarf");
        assert_eq!(header.nickname, Some("M@x"));
        assert_eq!(header.species, "Ditto");
        assert_eq!(header.item, Some("Choice Scarf"));
    }

    #[test]
    fn header_empty_item_is_absent() {
        assert_eq!(parse_header("Eevee @ ").item, None);
    }

    #[test]
    fn classify_each_line_kind() {
        assert_eq!(classify("Ability: Static"), LineKind::Ability("Static"));
        assert_eq!(classify("Level: 100"), LineKind::Level(Some(100)));
        assert_eq!(classify("Level: 0"), LineKind::Level(None));
        assert_eq!(classify("Level: 101"), LineKind::Level(None));
        assert_eq!(classify("Level: fifty"), LineKind::Level(None));
        assert_eq!(classify("Shiny: Yes"), LineKind::Shiny(true));
        assert_eq!(classify("Shiny: true"), LineKind::Shiny(true));
        assert_eq!(classify("Shiny: No"), LineKind::Shiny(false));
        assert_eq!(classify("Tera Type: Water"), LineKind::TeraType("Water"));
        assert_eq!(classify("EVs: 252 Atk"), LineKind::Evs("252 Atk"));
        assert_eq!(classify("IVs: 0 Spe"), LineKind::Ivs("0 Spe"));
        assert_eq!(classify("Jolly Nature"), LineKind::Nature("Jolly"));
        assert_eq!(classify("- Nature Power"), LineKind::Move("Nature Power"));
        assert_eq!(classify("Happiness: 0"), LineKind::Unknown);
        assert_eq!(classify("ability: Static"), LineKind::Unknown);
    }

    #[test]
    fn stat_list_only_overrides_listed_stats() {
        let evs = parse_stat_list("252 Atk / 4 SpD / 252 Spe", StatSpread::default_evs());
        assert_eq!(evs.attack, 252);
        assert_eq!(evs.special_defense, 4);
        assert_eq!(evs.speed, 252);
        assert_eq!(evs.hp, 0);

        let ivs = parse_stat_list("0 Atk", StatSpread::default_ivs());
        assert_eq!(ivs.attack, 0);
        assert_eq!(ivs.speed, 31);
    }

    #[test]
    fn stat_list_skips_malformed_pairs() {
        let evs = parse_stat_list("252 / Atk 4 / x Def / 8 Luck / 4 HP", StatSpread::default_evs());
        assert_eq!(evs, {
            let mut expected = StatSpread::default_evs();
            expected.hp = 4;
            expected
        });
    }

    #[test]
    fn stat_list_last_occurrence_wins() {
        let evs = parse_stat_list("4 Def / 252 Def", StatSpread::default_evs());
        assert_eq!(evs.defense, 252);
    }

    #[test]
    fn blocks_split_on_blank_runs() {
        let blocks = split_blocks("A\n- X\n\n\n  \nB\r\n- Y\r\n\r\nC\n");
        assert_eq!(blocks, vec![vec!["A", "- X"], vec!["B", "- Y"], vec!["C"]]);
        assert!(split_blocks("\n \n\t\n").is_empty());
    }

    #[test]
    fn fifth_move_is_rejected() {
        let text = "Mew\n- Psychic\n- Surf\n- Flamethrower\n- Ice Beam\n- Thunderbolt";
        assert_eq!(
            parse_pokemon(text),
            Err(BlockError::TooManyMoves { max: MAX_MOVES })
        );
    }

    #[test]
    fn block_without_species_is_rejected() {
        assert_eq!(parse_pokemon("@ Leftovers\n- Protect"), Err(BlockError::MissingSpecies));
        assert_eq!(parse_pokemon(""), Err(BlockError::MissingSpecies));
    }
}
