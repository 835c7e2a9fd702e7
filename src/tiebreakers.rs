use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::model::{Fixture, ScorePrediction, TeamStanding};

// Unranked teams rank behind everyone with a FIFA ranking.
pub const UNRANKED_SENTINEL: u16 = 999;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadToHead {
    pub points: u32,
    pub goal_difference: i32,
    pub goals_for: u32,
}

/// Aggregate record of every team in `teams`, counting only predicted matches between two
/// members of the set.
pub fn head_to_head(
    teams: &[TeamStanding],
    fixtures: &[Fixture],
    predictions: &HashMap<String, ScorePrediction>,
) -> HashMap<String, HeadToHead> {
    let ids: HashSet<&str> = teams.iter().map(|t| t.team_id.as_str()).collect();
    let mut out: HashMap<String, HeadToHead> = teams
        .iter()
        .map(|t| (t.team_id.clone(), HeadToHead::default()))
        .collect();

    for fixture in fixtures {
        let home = fixture.home_team.id.as_str();
        let away = fixture.away_team.id.as_str();
        if !ids.contains(home) || !ids.contains(away) {
            continue;
        }
        let Some((home_goals, away_goals)) =
            predictions.get(&fixture.id).and_then(ScorePrediction::scores)
        else {
            continue;
        };
        if let Some(rec) = out.get_mut(home) {
            apply(rec, home_goals, away_goals);
        }
        if let Some(rec) = out.get_mut(away) {
            apply(rec, away_goals, home_goals);
        }
    }
    out
}

fn apply(rec: &mut HeadToHead, scored: u8, conceded: u8) {
    rec.goals_for += u32::from(scored);
    rec.goal_difference += i32::from(scored) - i32::from(conceded);
    rec.points += match scored.cmp(&conceded) {
        Ordering::Greater => 3,
        Ordering::Equal => 1,
        Ordering::Less => 0,
    };
}

/// Orders teams level on points: head-to-head mini-table first (re-derived on every strictly
/// smaller still-tied subset), then the final tiebreakers. Always returns every input team.
pub fn apply_tiebreakers(
    tied: Vec<TeamStanding>,
    fixtures: &[Fixture],
    predictions: &HashMap<String, ScorePrediction>,
) -> Vec<TeamStanding> {
    if tied.len() <= 1 {
        return tied;
    }
    let original_len = tied.len();
    let h2h = head_to_head(&tied, fixtures, predictions);
    let key = |t: &TeamStanding| h2h.get(&t.team_id).copied().unwrap_or_default();

    let mut sorted = tied;
    sorted.sort_by(|a, b| compare_head_to_head(&key(a), &key(b)));

    let mut result = Vec::with_capacity(original_len);
    for run in split_runs(sorted, |a, b| key(a) == key(b)) {
        if run.len() == 1 {
            result.extend(run);
        } else if run.len() == original_len {
            // No separation this pass: recursing would see the same set again.
            result.extend(apply_final_tiebreakers(run));
        } else {
            result.extend(apply_tiebreakers(run, fixtures, predictions));
        }
    }
    result
}

fn compare_head_to_head(a: &HeadToHead, b: &HeadToHead) -> Ordering {
    b.points
        .cmp(&a.points)
        .then(b.goal_difference.cmp(&a.goal_difference))
        .then(b.goals_for.cmp(&a.goals_for))
}

fn split_runs<T>(items: Vec<T>, same: impl Fn(&T, &T) -> bool) -> Vec<Vec<T>> {
    let mut runs: Vec<Vec<T>> = Vec::new();
    for item in items {
        match runs.last_mut() {
            Some(run) if run.last().is_some_and(|prev| same(prev, &item)) => run.push(item),
            _ => runs.push(vec![item]),
        }
    }
    runs
}

/// Goal difference, goals for, FIFA ranking, then team code and id so the order is total.
pub fn compare_final(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.goal_difference
        .cmp(&a.goal_difference)
        .then(b.goals_for.cmp(&a.goals_for))
        .then(ranking_of(a).cmp(&ranking_of(b)))
        .then_with(|| a.team_code.cmp(&b.team_code))
        .then_with(|| a.team_id.cmp(&b.team_id))
}

pub fn apply_final_tiebreakers(mut teams: Vec<TeamStanding>) -> Vec<TeamStanding> {
    teams.sort_by(compare_final);
    teams
}

fn ranking_of(team: &TeamStanding) -> u16 {
    team.fifa_ranking.unwrap_or(UNRANKED_SENTINEL)
}
