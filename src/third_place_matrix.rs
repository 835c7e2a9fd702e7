use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::warn;

use crate::error::EngineError;
use crate::model::Group;
use crate::third_place::ADVANCING_THIRD_PLACE;
use crate::third_place_matrix_data::{COMBINATIONS, PUBLISHED_ROWS};

/// Round-of-32 matches whose away side is a third-placed team, ascending.
pub const WILDCARD_MATCHES: [u16; 8] = [74, 77, 79, 80, 81, 82, 85, 87];

/// Match hosted by the winners of groups A, B, D, E, G, I, K and L; column order of
/// `MatrixRow::opponents`.
pub const SLOT_MATCHES: [u16; 8] = [79, 85, 81, 74, 82, 77, 87, 80];

#[derive(Debug, Clone, Copy)]
pub struct MatrixRow {
    pub row: u16,
    advancing: &'static str,
    opponents: &'static str,
}

impl MatrixRow {
    pub(crate) const fn new(row: u16, advancing: &'static str, opponents: &'static str) -> Self {
        Self {
            row,
            advancing,
            opponents,
        }
    }

    /// False for rows derived from the allowed-opponent sets rather than transcribed.
    pub fn is_published(&self) -> bool {
        self.row <= PUBLISHED_ROWS
    }

    pub fn advancing(&self) -> Option<Vec<Group>> {
        self.advancing.chars().map(Group::from_letter).collect()
    }

    /// (match number, group) pairs in ascending match order.
    pub fn assignments(&self) -> Option<Vec<ThirdPlaceAssignment>> {
        if self.opponents.chars().count() != SLOT_MATCHES.len() {
            return None;
        }
        let mut out = SLOT_MATCHES
            .iter()
            .zip(self.opponents.chars())
            .map(|(&match_number, letter)| {
                Group::from_letter(letter).map(|group| ThirdPlaceAssignment {
                    match_number,
                    group,
                })
            })
            .collect::<Option<Vec<_>>>()?;
        out.sort_by_key(|a| a.match_number);
        Some(out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThirdPlaceAssignment {
    pub match_number: u16,
    pub group: Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatrixSource {
    Table { row: u16 },
    // Row present but not yet checked against the published allocation.
    Derived { row: u16 },
    Fallback,
}

impl MatrixSource {
    pub fn is_published(&self) -> bool {
        matches!(self, MatrixSource::Table { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixResolution {
    pub assignments: Vec<ThirdPlaceAssignment>,
    pub source: MatrixSource,
}

impl MatrixResolution {
    pub fn group_for(&self, match_number: u16) -> Option<Group> {
        self.assignments
            .iter()
            .find(|a| a.match_number == match_number)
            .map(|a| a.group)
    }
}

/// Groups whose third-placed team may be drawn into a wildcard match.
pub fn allowed_groups(match_number: u16) -> &'static [Group] {
    use Group::*;
    match match_number {
        74 => &[A, B, C, D, F],
        77 => &[C, D, F, G, H],
        79 => &[C, E, F, H, I],
        80 => &[E, H, I, J, K],
        81 => &[B, E, F, I, J],
        82 => &[A, E, H, I, J],
        85 => &[E, F, G, I, J],
        87 => &[D, E, I, J, L],
        _ => &[],
    }
}

pub fn table() -> &'static [MatrixRow] {
    &COMBINATIONS
}

fn mask_of(groups: &[Group]) -> u16 {
    groups.iter().fold(0u16, |acc, g| acc | (1 << g.index()))
}

static INDEX: Lazy<HashMap<u16, (MatrixSource, Vec<ThirdPlaceAssignment>)>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(COMBINATIONS.len());
    for row in COMBINATIONS.iter() {
        match (row.advancing(), row.assignments()) {
            (Some(groups), Some(assignments)) => {
                let source = if row.is_published() {
                    MatrixSource::Table { row: row.row }
                } else {
                    MatrixSource::Derived { row: row.row }
                };
                index.insert(mask_of(&groups), (source, assignments));
            }
            _ => warn!(row = row.row, "skipping undecodable third-place matrix row"),
        }
    }
    index
});

fn validate(groups: &[Group]) -> Result<Vec<Group>, EngineError> {
    let mut sorted = groups.to_vec();
    sorted.sort();
    sorted.dedup();
    if groups.len() != ADVANCING_THIRD_PLACE || sorted.len() != ADVANCING_THIRD_PLACE {
        let letters: String = groups.iter().map(|g| g.letter()).collect();
        return Err(EngineError::InvalidCombination(format!(
            "expected {ADVANCING_THIRD_PLACE} distinct groups, got {letters:?}"
        )));
    }
    Ok(sorted)
}

/// Which advancing third-placed group plays in each wildcard match. Order of `groups` does
/// not matter.
pub fn resolve_third_place_assignments(groups: &[Group]) -> Result<MatrixResolution, EngineError> {
    let sorted = validate(groups)?;
    let letters: String = sorted.iter().map(|g| g.letter()).collect();
    if let Some((source, assignments)) = INDEX.get(&mask_of(&sorted)) {
        if let MatrixSource::Derived { row } = source {
            warn!(
                combination = %letters,
                row = *row,
                "third-place allocation is derived, not published; verify before relying on it"
            );
        }
        return Ok(MatrixResolution {
            assignments: assignments.clone(),
            source: *source,
        });
    }

    warn!(combination = %letters, "third-place combination missing from matrix; using fallback");
    Ok(MatrixResolution {
        assignments: fallback_assignments(&sorted)?,
        source: MatrixSource::Fallback,
    })
}

/// Deterministic search over the allowed-opponent sets: wildcard matches ascending, candidate
/// groups alphabetically, first complete assignment wins.
pub fn fallback_assignments(groups: &[Group]) -> Result<Vec<ThirdPlaceAssignment>, EngineError> {
    let sorted = validate(groups)?;
    let mut chosen: Vec<Group> = Vec::with_capacity(WILDCARD_MATCHES.len());
    if search(&sorted, &mut chosen) {
        Ok(WILDCARD_MATCHES
            .iter()
            .zip(chosen)
            .map(|(&match_number, group)| ThirdPlaceAssignment {
                match_number,
                group,
            })
            .collect())
    } else {
        let letters: String = sorted.iter().map(|g| g.letter()).collect();
        Err(EngineError::InvalidCombination(format!(
            "no assignment satisfies the allowed opponents for {letters}"
        )))
    }
}

fn search(groups: &[Group], chosen: &mut Vec<Group>) -> bool {
    let Some(&match_number) = WILDCARD_MATCHES.get(chosen.len()) else {
        return true;
    };
    for group in groups {
        if chosen.contains(group) || !allowed_groups(match_number).contains(group) {
            continue;
        }
        chosen.push(*group);
        if search(groups, chosen) {
            return true;
        }
        chosen.pop();
    }
    false
}
