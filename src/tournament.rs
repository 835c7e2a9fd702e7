use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::bracket::{
    KnockoutPredictions, generate_bronze_final, generate_final, generate_quarter_finals,
    generate_round_of_16, generate_round_of_32_bracket, generate_semi_finals, resolve_winner,
};
use crate::drafts::{DraftSet, GroupPredictions};
use crate::error::EngineError;
use crate::model::{Fixture, Group, KnockoutMatch, KnockoutSlot, Stage, TeamId, ThirdPlaceTeam};
use crate::standings::{GroupStandings, calculate_all_group_standings};
use crate::third_place::{
    advancing_groups, rank_third_place_teams, select_best_third_place_teams,
};
use crate::third_place_matrix::{
    MatrixSource, ThirdPlaceAssignment, resolve_third_place_assignments,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundOf32Result {
    pub bracket: Vec<KnockoutMatch>,
    pub group_standings: GroupStandings,
    pub third_place_ranking: Vec<ThirdPlaceTeam>,
    pub best_third_place: Vec<ThirdPlaceTeam>,
    pub assignments: Vec<ThirdPlaceAssignment>,
    // None until all twelve groups have standings.
    pub matrix_source: Option<MatrixSource>,
}

impl RoundOf32Result {
    /// Group winners, runners-up and the best eight third-placed teams.
    pub fn qualified_team_ids(&self) -> BTreeSet<TeamId> {
        let mut out: BTreeSet<TeamId> = self
            .group_standings
            .values()
            .flatten()
            .filter(|s| s.position <= 2)
            .map(|s| s.standing.team_id.clone())
            .collect();
        out.extend(
            self.best_third_place
                .iter()
                .map(|t| t.standing.standing.team_id.clone()),
        );
        out
    }

    pub fn eliminated_team_ids(&self) -> BTreeSet<TeamId> {
        let qualified = self.qualified_team_ids();
        self.group_standings
            .values()
            .flatten()
            .map(|s| s.standing.team_id.clone())
            .filter(|id| !qualified.contains(id))
            .collect()
    }
}

/// Standings, third-place selection and the Round-of-32 draw from the user's group predictions.
pub fn generate_round_of_32(
    fixtures: &[Fixture],
    predictions: &GroupPredictions,
    pool: Option<&rayon::ThreadPool>,
) -> Result<RoundOf32Result, EngineError> {
    let group_standings = calculate_all_group_standings(fixtures, predictions, pool)?;
    let third_place_ranking = rank_third_place_teams(&group_standings);
    let best_third_place = select_best_third_place_teams(&third_place_ranking);

    let (assignments, matrix_source) = if group_standings.len() == Group::ALL.len() {
        let resolution = resolve_third_place_assignments(&advancing_groups(&best_third_place))?;
        (resolution.assignments, Some(resolution.source))
    } else {
        debug!(
            groups = group_standings.len(),
            "not every group has standings; third-place slots left open"
        );
        (Vec::new(), None)
    };

    let bracket = generate_round_of_32_bracket(&group_standings, &assignments);
    Ok(RoundOf32Result {
        bracket,
        group_standings,
        third_place_ranking,
        best_third_place,
        assignments,
        matrix_source,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentProjection {
    pub round_of_32: RoundOf32Result,
    pub round_of_16: Vec<KnockoutMatch>,
    pub quarter_finals: Vec<KnockoutMatch>,
    pub semi_finals: Vec<KnockoutMatch>,
    pub bronze_final: Vec<KnockoutMatch>,
    pub final_match: Vec<KnockoutMatch>,
}

impl TournamentProjection {
    /// Generated matches for a knockout stage; empty for the group stage.
    pub fn stage(&self, stage: Stage) -> &[KnockoutMatch] {
        match stage {
            Stage::Group => &[],
            Stage::RoundOf32 => &self.round_of_32.bracket,
            Stage::RoundOf16 => &self.round_of_16,
            Stage::QuarterFinals => &self.quarter_finals,
            Stage::SemiFinals => &self.semi_finals,
            Stage::BronzeFinal => &self.bronze_final,
            Stage::Final => &self.final_match,
        }
    }

    pub fn group_standings(&self) -> &GroupStandings {
        &self.round_of_32.group_standings
    }
}

/// Every stage derivable from the drafts. Stages past the first unresolved match come back
/// partial or empty.
pub fn project_tournament(
    fixtures: &[Fixture],
    drafts: &DraftSet,
    pool: Option<&rayon::ThreadPool>,
) -> Result<TournamentProjection, EngineError> {
    let round_of_32 = generate_round_of_32(fixtures, &drafts.group, pool)?;
    let round_of_16 = generate_round_of_16(&round_of_32.bracket, drafts.knockout(Stage::RoundOf32));
    let quarter_finals = generate_quarter_finals(&round_of_16, drafts.knockout(Stage::RoundOf16));
    let semi_finals = generate_semi_finals(&quarter_finals, drafts.knockout(Stage::QuarterFinals));
    let semi_predictions = drafts.knockout(Stage::SemiFinals);
    let bronze_final = generate_bronze_final(&semi_finals, semi_predictions);
    let final_match = generate_final(&semi_finals, semi_predictions);
    Ok(TournamentProjection {
        round_of_32,
        round_of_16,
        quarter_finals,
        semi_finals,
        bronze_final,
        final_match,
    })
}

/// True when `bracket` is a full stage and every match in it has a resolvable prediction.
pub fn stage_ready(bracket: &[KnockoutMatch], predictions: &KnockoutPredictions) -> bool {
    let Some(first) = bracket.first() else {
        return false;
    };
    bracket.len() == first.stage.match_count()
        && bracket.iter().all(|m| {
            predictions
                .get(&m.match_number)
                .is_some_and(|p| resolve_winner(m, p).is_some())
        })
}

fn group_stage_complete(projection: &TournamentProjection) -> bool {
    let standings = projection.group_standings();
    standings.len() == Group::ALL.len()
        && standings
            .values()
            .flatten()
            .all(|s| usize::from(s.standing.played) == 3)
}

/// First stage still awaiting predictions, or `None` once the Final is resolvable.
pub fn next_open_stage(projection: &TournamentProjection, drafts: &DraftSet) -> Option<Stage> {
    if !group_stage_complete(projection) {
        return Some(Stage::Group);
    }
    Stage::KNOCKOUT
        .into_iter()
        .find(|&stage| !stage_ready(projection.stage(stage), drafts.knockout(stage)))
}

pub fn champion<'a>(
    projection: &'a TournamentProjection,
    drafts: &DraftSet,
) -> Option<&'a KnockoutSlot> {
    let last = projection.final_match.first()?;
    let prediction = drafts.knockout(Stage::Final).get(&last.match_number)?;
    resolve_winner(last, prediction)
}

pub fn third_place_finisher<'a>(
    projection: &'a TournamentProjection,
    drafts: &DraftSet,
) -> Option<&'a KnockoutSlot> {
    let bronze = projection.bronze_final.first()?;
    let prediction = drafts.knockout(Stage::BronzeFinal).get(&bronze.match_number)?;
    resolve_winner(bronze, prediction)
}
