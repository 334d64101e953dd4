//! Advisory checks on parsed sets.
//!
//! Parsing never consults this module; callers decide what to do with the
//! issues (for example, clearing `format_legal` before storing a row).

use crate::model::StatBlock;
use crate::stats::{Nature, Stat};
use crate::{MAX_EV, MAX_EV_TOTAL, MAX_IV, MAX_TEAM_SIZE};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LegalityIssue {
    #[error("Level {0} is outside 1-100")]
    LevelOutOfRange(u8),

    #[error("{stat} EVs are {value} (maximum {max})", max = MAX_EV)]
    EvTooHigh { stat: Stat, value: u16 },

    #[error("EV total is {0} (maximum {max})", max = MAX_EV_TOTAL)]
    EvTotalTooHigh(u32),

    #[error("{stat} IVs are {value} (maximum {max})", max = MAX_IV)]
    IvTooHigh { stat: Stat, value: u16 },

    #[error("No moves")]
    NoMoves,

    #[error("Duplicate move \"{0}\"")]
    DuplicateMove(String),

    #[error("Unknown nature \"{0}\"")]
    UnknownNature(String),

    #[error("Team has {0} Pokemon (maximum {max})", max = MAX_TEAM_SIZE)]
    TeamTooLarge(usize),
}

pub fn check_stat_block(pokemon: &StatBlock) -> Vec<LegalityIssue> {
    let mut issues = Vec::new();
    if !(1..=100).contains(&pokemon.level) {
        issues.push(LegalityIssue::LevelOutOfRange(pokemon.level));
    }
    for stat in Stat::ALL {
        let ev = pokemon.evs.get(stat);
        if ev > MAX_EV {
            issues.push(LegalityIssue::EvTooHigh { stat, value: ev });
        }
        let iv = pokemon.ivs.get(stat);
        if iv > MAX_IV {
            issues.push(LegalityIssue::IvTooHigh { stat, value: iv });
        }
    }
    let total = pokemon.evs.total();
    if total > MAX_EV_TOTAL as u32 {
        issues.push(LegalityIssue::EvTotalTooHigh(total));
    }
    if pokemon.moves.move1.is_empty() {
        issues.push(LegalityIssue::NoMoves);
    }
    let mut seen = HashSet::new();
    for name in pokemon.moves.iter() {
        if !seen.insert(name.to_ascii_lowercase()) {
            issues.push(LegalityIssue::DuplicateMove(name.to_string()));
        }
    }
    if Nature::from_name(&pokemon.nature).is_none() {
        issues.push(LegalityIssue::UnknownNature(pokemon.nature.clone()));
    }
    issues
}

/// Issues tagged with the 0-based team slot. Team-wide issues use slot 0.
pub fn check_team(team: &[StatBlock]) -> Vec<(usize, LegalityIssue)> {
    let mut issues: Vec<(usize, LegalityIssue)> = team
        .iter()
        .enumerate()
        .flat_map(|(idx, pokemon)| {
            check_stat_block(pokemon)
                .into_iter()
                .map(move |issue| (idx, issue))
        })
        .collect();
    if team.len() > MAX_TEAM_SIZE {
        issues.insert(0, (0, LegalityIssue::TeamTooLarge(team.len())));
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MoveSet;

    fn valid() -> StatBlock {
        let mut pokemon = StatBlock {
            species: "Dragonite".to_string(),
            nature: "Adamant".to_string(),
            moves: MoveSet::from_moves(vec!["Extreme Speed".to_string(), "Earthquake".to_string()]),
            ..StatBlock::default()
        };
        pokemon.evs.attack = 252;
        pokemon.evs.speed = 252;
        pokemon.evs.hp = 4;
        pokemon
    }

    #[test]
    fn standard_set_has_no_issues() {
        assert!(check_stat_block(&valid()).is_empty());
    }

    #[test]
    fn reports_out_of_range_values() {
        let mut pokemon = valid();
        pokemon.level = 0;
        pokemon.evs.defense = 300;
        pokemon.ivs.speed = 32;
        let issues = check_stat_block(&pokemon);
        assert!(issues.contains(&LegalityIssue::LevelOutOfRange(0)));
        assert!(issues.contains(&LegalityIssue::EvTooHigh { stat: Stat::Def, value: 300 }));
        assert!(issues.contains(&LegalityIssue::IvTooHigh { stat: Stat::Spe, value: 32 }));
        assert!(issues.contains(&LegalityIssue::EvTotalTooHigh(808)));
    }

    #[test]
    fn reports_move_and_nature_problems() {
        let mut pokemon = valid();
        pokemon.nature = "Grumpy".to_string();
        pokemon.moves = MoveSet::from_moves(vec!["Surf".to_string(), "surf".to_string()]);
        let issues = check_stat_block(&pokemon);
        assert_eq!(
            issues,
            vec![
                LegalityIssue::DuplicateMove("surf".to_string()),
                LegalityIssue::UnknownNature("Grumpy".to_string()),
            ]
        );

        pokemon.moves = MoveSet::default();
        assert!(check_stat_block(&pokemon).contains(&LegalityIssue::NoMoves));
    }

    #[test]
    fn issue_messages_name_the_stat() {
        let issue = LegalityIssue::EvTooHigh { stat: Stat::Spa, value: 255 };
        assert_eq!(issue.to_string(), "SpA EVs are 255 (maximum 252)");
    }

    #[test]
    fn team_check_tags_slots() {
        let mut second = valid();
        second.level = 101;
        let issues = check_team(&[valid(), second]);
        assert_eq!(issues, vec![(1, LegalityIssue::LevelOutOfRange(101))]);

        let big = vec![valid(); 7];
        assert_eq!(check_team(&big)[0], (0, LegalityIssue::TeamTooLarge(7)));
    }
}
