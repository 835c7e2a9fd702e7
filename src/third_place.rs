use crate::model::{Group, ThirdPlaceTeam};
use crate::standings::GroupStandings;
use crate::tiebreakers::compare_final;

pub const ADVANCING_THIRD_PLACE: usize = 8;

/// Every group's third-placed team, best first: points, then the final tiebreakers. There is
/// no head-to-head step because these teams never share a group.
pub fn rank_third_place_teams(standings: &GroupStandings) -> Vec<ThirdPlaceTeam> {
    let mut thirds: Vec<ThirdPlaceTeam> = standings
        .iter()
        .filter_map(|(group, table)| {
            table
                .iter()
                .find(|s| s.position == 3)
                .map(|standing| ThirdPlaceTeam {
                    group: *group,
                    standing: standing.clone(),
                })
        })
        .collect();
    thirds.sort_by(|a, b| {
        b.standing
            .standing
            .points
            .cmp(&a.standing.standing.points)
            .then_with(|| compare_final(&a.standing.standing, &b.standing.standing))
    });
    thirds
}

pub fn select_best_third_place_teams(ranked: &[ThirdPlaceTeam]) -> Vec<ThirdPlaceTeam> {
    ranked.iter().take(ADVANCING_THIRD_PLACE).cloned().collect()
}

/// Origin groups of the advancing teams, alphabetical: the matrix lookup key.
pub fn advancing_groups(best: &[ThirdPlaceTeam]) -> Vec<Group> {
    let mut groups: Vec<Group> = best.iter().map(|t| t.group).collect();
    groups.sort();
    groups
}
