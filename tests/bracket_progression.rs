use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use wc26_predictor::bracket::{KnockoutPredictions, ROUND_OF_16_PAIRS, generate_round_of_16};
use wc26_predictor::drafts::DraftSet;
use wc26_predictor::fixtures::parse_fixtures_json;
use wc26_predictor::model::{Fixture, Group, ScorePrediction, Stage};
use wc26_predictor::standings::standing_at;
use wc26_predictor::third_place_matrix::{MatrixSource, WILDCARD_MATCHES};
use wc26_predictor::tournament::{
    champion, generate_round_of_32, next_open_stage, project_tournament, stage_ready,
    third_place_finisher,
};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn all_fixtures() -> Vec<Fixture> {
    parse_fixtures_json(&read_fixture("group_fixtures.json")).expect("fixtures should parse")
}

// Varied but fixed scorelines so the group tables differ from group to group.
fn group_predictions(fixtures: &[Fixture]) -> HashMap<String, ScorePrediction> {
    fixtures
        .iter()
        .map(|f| {
            let n = f.match_number;
            (
                f.id.clone(),
                ScorePrediction::new((n % 4) as u8, ((n / 3) % 3) as u8),
            )
        })
        .collect()
}

fn home_wins(stage: Stage) -> KnockoutPredictions {
    stage
        .match_numbers()
        .map(|n| (n, ScorePrediction::new(1, 0)))
        .collect()
}

fn complete_drafts(fixtures: &[Fixture]) -> DraftSet {
    let mut drafts = DraftSet {
        group: group_predictions(fixtures),
        knockout: HashMap::new(),
    };
    for stage in Stage::KNOCKOUT {
        drafts.knockout.insert(stage, home_wins(stage));
    }
    drafts
}

#[test]
fn round_of_32_uses_group_positions_and_matrix() {
    let fixtures = all_fixtures();
    let result = generate_round_of_32(&fixtures, &group_predictions(&fixtures), None).unwrap();

    assert_eq!(result.bracket.len(), 16);
    assert_eq!(result.third_place_ranking.len(), 12);
    assert_eq!(result.best_third_place.len(), 8);
    assert!(matches!(
        result.matrix_source,
        Some(MatrixSource::Table { .. } | MatrixSource::Derived { .. })
    ));
    assert_eq!(result.qualified_team_ids().len(), 32);
    assert_eq!(result.eliminated_team_ids().len(), 16);

    let m73 = &result.bracket[0];
    assert_eq!(m73.match_number, 73);
    assert_eq!(m73.home.source, "Runner-up Group A");
    assert_eq!(m73.away.source, "Runner-up Group B");
    let runner_up_a = standing_at(&result.group_standings, Group::A, 2).unwrap();
    assert_eq!(m73.home.team_id, runner_up_a.standing.team_id);

    let advancing: Vec<Group> = result.best_third_place.iter().map(|t| t.group).collect();
    for number in WILDCARD_MATCHES {
        let m = result
            .bracket
            .iter()
            .find(|m| m.match_number == number)
            .unwrap();
        let assigned = result
            .assignments
            .iter()
            .find(|a| a.match_number == number)
            .unwrap()
            .group;
        assert!(advancing.contains(&assigned));
        assert_eq!(m.away.source, format!("3rd Place Group {assigned}"));
        let third = standing_at(&result.group_standings, assigned, 3).unwrap();
        assert_eq!(m.away.team_id, third.standing.team_id);
        assert!(m.home.source.starts_with("Winner Group"));
    }
}

#[test]
fn round_of_16_pairs_home_winners_of_fixed_feeders() {
    let fixtures = all_fixtures();
    let r32 = generate_round_of_32(&fixtures, &group_predictions(&fixtures), None)
        .unwrap()
        .bracket;
    let r16 = generate_round_of_16(&r32, &home_wins(Stage::RoundOf32));
    assert_eq!(r16.len(), 8);

    let home_of = |n: u16| {
        r32.iter()
            .find(|m| m.match_number == n)
            .map(|m| m.home.team_id.clone())
            .unwrap()
    };
    for (m, (number, home_from, away_from)) in r16.iter().zip(ROUND_OF_16_PAIRS) {
        assert_eq!(m.match_number, number);
        assert_eq!(m.home.team_id, home_of(home_from));
        assert_eq!(m.away.team_id, home_of(away_from));
        assert_eq!(m.home.source, format!("Winner Match {home_from}"));
        assert_eq!(m.round_number, 2);
    }
}

#[test]
fn full_projection_reaches_a_champion() {
    let fixtures = all_fixtures();
    let drafts = complete_drafts(&fixtures);
    let projection = project_tournament(&fixtures, &drafts, None).unwrap();

    for stage in Stage::KNOCKOUT {
        assert_eq!(projection.stage(stage).len(), stage.match_count(), "{stage}");
        assert!(stage_ready(projection.stage(stage), drafts.knockout(stage)));
    }
    assert_eq!(next_open_stage(&projection, &drafts), None);

    // Home side wins everything: 73 -> 89 -> 97 -> 101 -> 104.
    let winner = champion(&projection, &drafts).unwrap();
    let runner_up_a = standing_at(projection.group_standings(), Group::A, 2).unwrap();
    assert_eq!(winner.team_id, runner_up_a.standing.team_id);

    let bronze = &projection.bronze_final[0];
    let semis = &projection.semi_finals;
    assert_eq!(bronze.home.team_id, semis[0].away.team_id);
    assert_eq!(bronze.away.team_id, semis[1].away.team_id);
    assert_eq!(
        third_place_finisher(&projection, &drafts).unwrap().team_id,
        semis[0].away.team_id
    );
}

#[test]
fn bronze_final_holds_the_semi_final_losers() {
    let fixtures = all_fixtures();
    let mut drafts = complete_drafts(&fixtures);
    let semis = HashMap::from([
        (101, ScorePrediction::new(0, 2)),
        (102, ScorePrediction::new(1, 1)),
    ]);
    drafts.knockout.insert(Stage::SemiFinals, semis.clone());
    let projection = project_tournament(&fixtures, &drafts, None).unwrap();
    // 102 is a draw with no declared winner: neither final can be drawn yet.
    assert!(projection.final_match.is_empty());
    assert!(projection.bronze_final.is_empty());
    assert_eq!(next_open_stage(&projection, &drafts), Some(Stage::SemiFinals));

    let sf = projection.semi_finals.clone();
    let away_102 = sf[1].away.team_id.clone();
    let mut semis = semis;
    semis.insert(102, ScorePrediction::with_winner(1, 1, away_102.clone()));
    drafts.knockout.insert(Stage::SemiFinals, semis);
    let projection = project_tournament(&fixtures, &drafts, None).unwrap();

    let last = &projection.final_match[0];
    let bronze = &projection.bronze_final[0];
    assert_eq!(last.home.team_id, sf[0].away.team_id);
    assert_eq!(last.away.team_id, away_102);
    assert_eq!(bronze.home.team_id, sf[0].home.team_id);
    assert_eq!(bronze.away.team_id, sf[1].home.team_id);
    assert_eq!(bronze.home.source, "Loser Match 101");
    assert_eq!(last.away.source, "Winner Match 102");
}

#[test]
fn missing_predictions_stop_progression_without_error() {
    let fixtures = all_fixtures();
    let empty = DraftSet::default();
    let projection = project_tournament(&fixtures, &empty, None).unwrap();
    assert_eq!(next_open_stage(&projection, &empty), Some(Stage::Group));
    // All four teams of every group are still ranked, so a draw exists.
    assert_eq!(projection.round_of_32.bracket.len(), 16);
    assert!(projection.round_of_16.is_empty());
    assert!(champion(&projection, &empty).is_none());

    let mut drafts = complete_drafts(&fixtures);
    drafts
        .knockout
        .get_mut(&Stage::RoundOf32)
        .unwrap()
        .remove(&80);
    let projection = project_tournament(&fixtures, &drafts, None).unwrap();
    assert_eq!(projection.round_of_16.len(), 7);
    assert!(projection.round_of_16.iter().all(|m| m.match_number != 92));
    assert_eq!(projection.quarter_finals.len(), 3);
    assert_eq!(next_open_stage(&projection, &drafts), Some(Stage::RoundOf32));
}

#[test]
fn pool_and_global_fan_out_agree() {
    let fixtures = all_fixtures();
    let drafts = complete_drafts(&fixtures);
    let pool = wc26_predictor::standings::build_group_pool(3);
    let pooled = project_tournament(&fixtures, &drafts, pool.as_ref()).unwrap();
    let global = project_tournament(&fixtures, &drafts, None).unwrap();
    assert_eq!(pooled, global);
}
