use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;

use crate::error::EngineError;
use crate::fixtures::fixtures_by_group;
use crate::model::{FinalGroupStanding, Fixture, Group, ScorePrediction, TeamStanding};
use crate::tiebreakers::apply_tiebreakers;

pub const TEAMS_PER_GROUP: usize = 4;
pub const FIXTURES_PER_GROUP: usize = 6;

pub type GroupStandings = BTreeMap<Group, Vec<FinalGroupStanding>>;

/// Final table for one group from the user's predicted scores. Matches without a complete
/// prediction are skipped, so `played` can be below three.
pub fn calculate_group_standings(
    group: Group,
    fixtures: &[Fixture],
    predictions: &HashMap<String, ScorePrediction>,
) -> Result<Vec<FinalGroupStanding>, EngineError> {
    validate_group(group, fixtures)?;

    let mut table: Vec<TeamStanding> = Vec::with_capacity(TEAMS_PER_GROUP);
    let mut index: HashMap<String, usize> = HashMap::new();
    for fixture in fixtures {
        for team in [&fixture.home_team, &fixture.away_team] {
            if !index.contains_key(&team.id) {
                index.insert(team.id.clone(), table.len());
                table.push(TeamStanding::new(team));
            }
        }
    }

    for fixture in fixtures {
        let Some((home_goals, away_goals)) =
            predictions.get(&fixture.id).and_then(ScorePrediction::scores)
        else {
            continue;
        };
        let home = index[&fixture.home_team.id];
        let away = index[&fixture.away_team.id];
        table[home].record(home_goals, away_goals);
        table[away].record(away_goals, home_goals);
    }

    let mut by_points: BTreeMap<u32, Vec<TeamStanding>> = BTreeMap::new();
    for standing in table {
        by_points.entry(standing.points).or_default().push(standing);
    }

    let mut out = Vec::with_capacity(TEAMS_PER_GROUP);
    for (_, level) in by_points.into_iter().rev() {
        let ordered = if level.len() == 1 {
            level
        } else {
            apply_tiebreakers(level, fixtures, predictions)
        };
        for standing in ordered {
            let position = out.len() as u8 + 1;
            out.push(FinalGroupStanding {
                standing,
                position,
                group,
            });
        }
    }
    Ok(out)
}

fn validate_group(group: Group, fixtures: &[Fixture]) -> Result<(), EngineError> {
    let malformed = |reason: String| EngineError::MalformedGroup { group, reason };

    if fixtures.len() > FIXTURES_PER_GROUP {
        return Err(malformed(format!(
            "{} fixtures, expected at most {FIXTURES_PER_GROUP}",
            fixtures.len()
        )));
    }
    let mut teams: Vec<&str> = Vec::new();
    for fixture in fixtures {
        if fixture.group != Some(group) {
            return Err(malformed(format!(
                "fixture {} belongs to {}",
                fixture.id,
                fixture
                    .group
                    .map(|g| format!("group {g}"))
                    .unwrap_or_else(|| "no group".to_string())
            )));
        }
        if fixture.home_team.id == fixture.away_team.id {
            return Err(malformed(format!(
                "fixture {} pairs team {} with itself",
                fixture.id, fixture.home_team.id
            )));
        }
        for id in [fixture.home_team.id.as_str(), fixture.away_team.id.as_str()] {
            if !teams.contains(&id) {
                teams.push(id);
            }
        }
    }
    if teams.len() != TEAMS_PER_GROUP {
        return Err(malformed(format!(
            "{} distinct teams, expected {TEAMS_PER_GROUP}",
            teams.len()
        )));
    }
    Ok(())
}

/// Standings for every group that has fixtures. Groups are independent, so they are computed
/// in parallel on `pool` (or rayon's global pool).
pub fn calculate_all_group_standings(
    fixtures: &[Fixture],
    predictions: &HashMap<String, ScorePrediction>,
    pool: Option<&rayon::ThreadPool>,
) -> Result<GroupStandings, EngineError> {
    let groups: Vec<(Group, Vec<Fixture>)> = fixtures_by_group(fixtures).into_iter().collect();
    let compute = || {
        groups
            .par_iter()
            .map(|(group, group_fixtures)| {
                calculate_group_standings(*group, group_fixtures, predictions)
                    .map(|table| (*group, table))
            })
            .collect::<Result<Vec<_>, EngineError>>()
    };
    let tables = match pool {
        Some(pool) => pool.install(compute),
        None => compute(),
    }?;
    Ok(tables.into_iter().collect())
}

pub fn build_group_pool(threads: usize) -> Option<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads.clamp(1, Group::ALL.len()))
        .build()
        .ok()
}

pub fn standing_at(
    standings: &GroupStandings,
    group: Group,
    position: u8,
) -> Option<&FinalGroupStanding> {
    standings
        .get(&group)?
        .iter()
        .find(|s| s.position == position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MatchStatus, Team};

    fn team(id: &str) -> Team {
        Team {
            id: id.to_string(),
            code: id.to_uppercase(),
            name: id.to_string(),
            confederation: None,
            fifa_ranking: None,
        }
    }

    fn fixture(id: &str, group: Group, home: &Team, away: &Team) -> Fixture {
        Fixture {
            id: id.to_string(),
            match_number: 1,
            group: Some(group),
            home_team: home.clone(),
            away_team: away.clone(),
            match_date: None,
            home_score: None,
            away_score: None,
            status: MatchStatus::Scheduled,
        }
    }

    fn round_robin(group: Group, teams: &[Team; 4]) -> Vec<Fixture> {
        let [a, b, c, d] = teams;
        vec![
            fixture("m1", group, a, b),
            fixture("m2", group, c, d),
            fixture("m3", group, a, c),
            fixture("m4", group, d, b),
            fixture("m5", group, d, a),
            fixture("m6", group, b, c),
        ]
    }

    #[test]
    fn unpredicted_group_still_ranks_all_four() {
        let teams = [team("a"), team("b"), team("c"), team("d")];
        let table =
            calculate_group_standings(Group::A, &round_robin(Group::A, &teams), &HashMap::new())
                .unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(
            table.iter().map(|s| s.position).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert!(table.iter().all(|s| s.standing.played == 0));
    }

    #[test]
    fn partial_prediction_is_not_counted() {
        let teams = [team("a"), team("b"), team("c"), team("d")];
        let predictions = HashMap::from([
            ("m1".to_string(), ScorePrediction::new(2, 0)),
            (
                "m2".to_string(),
                ScorePrediction {
                    home_score: Some(1),
                    away_score: None,
                    predicted_winner_id: None,
                },
            ),
        ]);
        let table =
            calculate_group_standings(Group::A, &round_robin(Group::A, &teams), &predictions)
                .unwrap();
        let played: u32 = table.iter().map(|s| u32::from(s.standing.played)).sum();
        assert_eq!(played, 2);
        assert_eq!(table[0].standing.team_id, "a");
    }

    #[test]
    fn rejects_fixture_from_another_group() {
        let teams = [team("a"), team("b"), team("c"), team("d")];
        let mut fixtures = round_robin(Group::B, &teams);
        fixtures[3].group = Some(Group::C);
        let err = calculate_group_standings(Group::B, &fixtures, &HashMap::new()).unwrap_err();
        assert!(matches!(err, EngineError::MalformedGroup { group: Group::B, .. }));
    }

    #[test]
    fn rejects_group_with_three_teams() {
        let (a, b, c) = (team("a"), team("b"), team("c"));
        let fixtures = vec![
            fixture("m1", Group::D, &a, &b),
            fixture("m2", Group::D, &b, &c),
            fixture("m3", Group::D, &c, &a),
        ];
        assert!(calculate_group_standings(Group::D, &fixtures, &HashMap::new()).is_err());
    }

    #[test]
    fn rejects_team_playing_itself() {
        let teams = [team("a"), team("b"), team("c"), team("d")];
        let mut fixtures = round_robin(Group::E, &teams);
        fixtures[0].away_team = teams[0].clone();
        assert!(calculate_group_standings(Group::E, &fixtures, &HashMap::new()).is_err());
    }

    #[test]
    fn all_groups_uses_supplied_pool() {
        let teams_a = [team("a1"), team("a2"), team("a3"), team("a4")];
        let teams_b = [team("b1"), team("b2"), team("b3"), team("b4")];
        let mut fixtures = round_robin(Group::A, &teams_a);
        for (i, mut f) in round_robin(Group::B, &teams_b).into_iter().enumerate() {
            f.id = format!("b{i}");
            fixtures.push(f);
        }
        let pool = build_group_pool(2);
        let all =
            calculate_all_group_standings(&fixtures, &HashMap::new(), pool.as_ref()).unwrap();
        assert_eq!(all.keys().copied().collect::<Vec<_>>(), vec![Group::A, Group::B]);
        assert!(standing_at(&all, Group::B, 4).is_some());
        assert!(standing_at(&all, Group::C, 1).is_none());
    }
}
