use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use wc26_predictor::model::{Fixture, Group, MatchStatus, ScorePrediction, Team, TeamStanding};
use wc26_predictor::standings::calculate_group_standings;
use wc26_predictor::third_place::{
    ADVANCING_THIRD_PLACE, rank_third_place_teams, select_best_third_place_teams,
};
use wc26_predictor::tiebreakers::apply_tiebreakers;

fn team(idx: usize, ranking: Option<u16>) -> Team {
    Team {
        id: format!("t{idx}"),
        code: format!("T{idx:02}"),
        name: format!("Team {idx}"),
        confederation: None,
        fifa_ranking: ranking,
    }
}

fn round_robin(teams: &[Team]) -> Vec<Fixture> {
    let pairs = [(0, 1), (2, 3), (0, 2), (3, 1), (3, 0), (1, 2)];
    pairs
        .iter()
        .enumerate()
        .map(|(k, &(h, a))| Fixture {
            id: format!("m{k}"),
            match_number: k as u16 + 1,
            group: Some(Group::F),
            home_team: teams[h].clone(),
            away_team: teams[a].clone(),
            match_date: None,
            home_score: None,
            away_score: None,
            status: MatchStatus::Scheduled,
        })
        .collect()
}

fn rankings() -> impl Strategy<Value = Vec<Option<u16>>> {
    prop::collection::vec(prop::option::of(1u16..6), 4)
}

fn scores() -> impl Strategy<Value = Vec<Option<(u8, u8)>>> {
    prop::collection::vec(prop::option::weighted(0.85, (0u8..5, 0u8..5)), 6)
}

fn predictions(scores: &[Option<(u8, u8)>]) -> HashMap<String, ScorePrediction> {
    scores
        .iter()
        .enumerate()
        .filter_map(|(k, s)| s.map(|(h, a)| (format!("m{k}"), ScorePrediction::new(h, a))))
        .collect()
}

proptest! {
    #[test]
    fn group_table_is_complete_and_conserves_goals(ranks in rankings(), scores in scores()) {
        let teams: Vec<Team> = ranks.iter().enumerate().map(|(i, r)| team(i, *r)).collect();
        let fixtures = round_robin(&teams);
        let predictions = predictions(&scores);
        let table = calculate_group_standings(Group::F, &fixtures, &predictions).unwrap();

        let positions: Vec<u8> = table.iter().map(|s| s.position).collect();
        prop_assert_eq!(positions, vec![1, 2, 3, 4]);
        let ids: HashSet<&str> = table.iter().map(|s| s.standing.team_id.as_str()).collect();
        prop_assert_eq!(ids.len(), 4);

        let counted = scores.iter().filter(|s| s.is_some()).count();
        let played: usize = table.iter().map(|s| usize::from(s.standing.played)).sum();
        prop_assert_eq!(played, counted * 2);

        let mut gf = 0;
        let mut ga = 0;
        for row in &table {
            let s = &row.standing;
            prop_assert_eq!(s.points, 3 * u32::from(s.won) + u32::from(s.drawn));
            prop_assert_eq!(s.played, s.won + s.drawn + s.lost);
            prop_assert_eq!(s.goal_difference, s.goals_for as i32 - s.goals_against as i32);
            gf += s.goals_for;
            ga += s.goals_against;
        }
        prop_assert_eq!(gf, ga);

        let points: Vec<u32> = table.iter().map(|s| s.standing.points).collect();
        prop_assert!(points.windows(2).all(|w| w[0] >= w[1]));

        let again = calculate_group_standings(Group::F, &fixtures, &predictions).unwrap();
        prop_assert_eq!(again, table);
    }

    #[test]
    fn tiebreakers_return_every_team_in_a_stable_order(
        ranks in rankings(),
        scores in scores(),
        gd in prop::collection::vec(-2i32..3, 4),
        gf in prop::collection::vec(0u32..4, 4),
    ) {
        let teams: Vec<Team> = ranks.iter().enumerate().map(|(i, r)| team(i, *r)).collect();
        let fixtures = round_robin(&teams);
        let predictions = predictions(&scores);
        let tied: Vec<TeamStanding> = teams
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let mut s = TeamStanding::new(t);
                s.points = 4;
                s.goal_difference = gd[i];
                s.goals_for = gf[i];
                s
            })
            .collect();

        let resolved = apply_tiebreakers(tied.clone(), &fixtures, &predictions);
        prop_assert_eq!(resolved.len(), 4);
        let ids: HashSet<&str> = resolved.iter().map(|s| s.team_id.as_str()).collect();
        prop_assert_eq!(ids.len(), 4);

        let mut reversed = tied;
        reversed.reverse();
        let from_reversed = apply_tiebreakers(reversed, &fixtures, &predictions);
        prop_assert_eq!(from_reversed, resolved);
    }

    #[test]
    fn best_third_place_is_always_eight_of_twelve(
        points in prop::collection::vec(0u32..8, 12),
        gd in prop::collection::vec(-4i32..5, 12),
    ) {
        let standings = Group::ALL
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let mut s = TeamStanding::new(&team(i, None));
                s.points = points[i];
                s.goal_difference = gd[i];
                (*g, vec![wc26_predictor::model::FinalGroupStanding {
                    standing: s,
                    position: 3,
                    group: *g,
                }])
            })
            .collect();
        let ranked = rank_third_place_teams(&standings);
        prop_assert_eq!(ranked.len(), 12);
        let best = select_best_third_place_teams(&ranked);
        prop_assert_eq!(best.len(), ADVANCING_THIRD_PLACE);
        let worst_in = best.iter().map(|t| t.standing.standing.points).min().unwrap_or(0);
        let best_out = ranked[ADVANCING_THIRD_PLACE..]
            .iter()
            .map(|t| t.standing.standing.points)
            .max()
            .unwrap_or(0);
        prop_assert!(worst_in >= best_out);
    }
}
