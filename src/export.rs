use crate::model::{StatBlock, StatBlockFlat, StatSpread};
use crate::stats::Stat;
use crate::{DEFAULT_LEVEL, MAX_IV};

/// Writes one Pokémon in canonical Showdown form.
///
/// Line order is fixed. `Ability:` and the nature line are always written;
/// level, shiny, tera type and the two stat lists only when they differ from
/// their defaults. No trailing newline.
pub fn to_showdown_format(pokemon: &StatBlock) -> String {
    let mut lines = vec![header_line(pokemon)];
    lines.push(format!("Ability: {}", pokemon.ability));
    if pokemon.level != DEFAULT_LEVEL {
        lines.push(format!("Level: {}", pokemon.level));
    }
    if pokemon.is_shiny {
        lines.push("Shiny: Yes".to_string());
    }
    if let Some(tera) = pokemon.tera_type.as_deref().filter(|t| !t.is_empty()) {
        lines.push(format!("Tera Type: {tera}"));
    }
    if let Some(evs) = stat_list(&pokemon.evs, 0) {
        lines.push(format!("EVs: {evs}"));
    }
    lines.push(format!("{} Nature", pokemon.nature));
    if let Some(ivs) = stat_list(&pokemon.ivs, MAX_IV) {
        lines.push(format!("IVs: {ivs}"));
    }
    lines.extend(pokemon.moves.iter().map(|name| format!("- {name}")));
    lines.join("\n")
}

pub fn export_pokemon_to_showdown(row: &StatBlockFlat) -> String {
    to_showdown_format(&StatBlock::from(row.clone()))
}

/// Blocks separated by one blank line.
pub fn export_team(team: &[StatBlock]) -> String {
    team.iter()
        .map(to_showdown_format)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn export_team_to_showdown(rows: &[StatBlockFlat]) -> String {
    rows.iter()
        .map(export_pokemon_to_showdown)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn header_line(pokemon: &StatBlock) -> String {
    let mut header = match pokemon.display_nickname() {
        Some(nickname) => format!("{} ({})", nickname, pokemon.species),
        None => pokemon.species.clone(),
    };
    if let Some(gender) = pokemon.gender {
        header.push_str(&format!(" ({})", gender.marker()));
    }
    if let Some(item) = pokemon.held_item.as_deref().filter(|i| !i.is_empty()) {
        header.push_str(&format!(" @ {item}"));
    }
    header
}

/// `None` when every stat sits at `baseline`.
fn stat_list(spread: &StatSpread, baseline: u16) -> Option<String> {
    let parts: Vec<String> = Stat::ALL
        .iter()
        .filter(|&&stat| spread.get(stat) != baseline)
        .map(|&stat| format!("{} {}", spread.get(stat), stat.abbreviation()))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" / "))
    }
}
