use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use wc26_predictor::fixtures::{group_fixtures, parse_fixtures_json};
use wc26_predictor::model::{Fixture, Group, ScorePrediction};
use wc26_predictor::standings::calculate_group_standings;

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

fn predict(scores: &[(&str, u8, u8)]) -> HashMap<String, ScorePrediction> {
    scores
        .iter()
        .map(|(id, h, a)| (id.to_string(), ScorePrediction::new(*h, *a)))
        .collect()
}

#[test]
fn fixture_file_has_twelve_round_robin_groups() {
    let fixtures = all_fixtures();
    assert_eq!(fixtures.len(), 72);
    for group in Group::ALL {
        let in_group = group_fixtures(&fixtures, group);
        let table = calculate_group_standings(group, &in_group, &HashMap::new())
            .expect("group should be well formed");
        assert_eq!(table.len(), 4);
    }
}

#[test]
fn straightforward_group_needs_no_tiebreaker() {
    // Group A fixtures: 1v2, 3v4, 1v3, 4v2, 4v1, 2v3.
    let fixtures = group_fixtures(&all_fixtures(), Group::A);
    let predictions = predict(&[
        ("gs-a-1", 3, 1),
        ("gs-a-2", 2, 1),
        ("gs-a-3", 2, 0),
        ("gs-a-4", 1, 1),
        ("gs-a-5", 0, 1),
        ("gs-a-6", 1, 0),
    ]);
    let table = calculate_group_standings(Group::A, &fixtures, &predictions).unwrap();

    let order: Vec<&str> = table.iter().map(|s| s.standing.team_id.as_str()).collect();
    assert_eq!(order, vec!["team-a1", "team-a2", "team-a3", "team-a4"]);
    let points: Vec<u32> = table.iter().map(|s| s.standing.points).collect();
    assert_eq!(points, vec![9, 4, 3, 1]);

    let runner_up = &table[1].standing;
    assert_eq!((runner_up.won, runner_up.drawn, runner_up.lost), (1, 1, 1));
    assert_eq!((runner_up.goals_for, runner_up.goals_against), (3, 4));
    assert_eq!(runner_up.goal_difference, -1);
    assert!(table.iter().all(|s| s.standing.played == 3));
    assert!(table.iter().all(|s| s.group == Group::A));
}

#[test]
fn head_to_head_beats_better_fifa_ranking() {
    // Group B rankings: b1 = 2, b2 = 14, b3 = 26, b4 = 38.
    // b1 and b4 both finish on 6 points, +3, five scored; b4 won their meeting 2-1.
    let fixtures = group_fixtures(&all_fixtures(), Group::B);
    let predictions = predict(&[
        ("gs-b-1", 2, 0),
        ("gs-b-2", 1, 0),
        ("gs-b-3", 2, 0),
        ("gs-b-4", 3, 0),
        ("gs-b-5", 2, 1),
        ("gs-b-6", 0, 0),
    ]);
    let table = calculate_group_standings(Group::B, &fixtures, &predictions).unwrap();

    let first = &table[0].standing;
    let second = &table[1].standing;
    assert_eq!(first.team_id, "team-b4");
    assert_eq!(second.team_id, "team-b1");
    assert_eq!(
        (first.points, first.goal_difference, first.goals_for),
        (second.points, second.goal_difference, second.goals_for)
    );
    assert!(first.fifa_ranking > second.fifa_ranking);
    assert_eq!(table[2].standing.team_id, "team-b3");
    assert_eq!(table[3].standing.team_id, "team-b2");
}

#[test]
fn identical_records_fall_back_to_fifa_ranking() {
    // Every match 1-1: all level on points, goals and head-to-head.
    let fixtures = group_fixtures(&all_fixtures(), Group::C);
    let predictions: HashMap<String, ScorePrediction> = fixtures
        .iter()
        .map(|f| (f.id.clone(), ScorePrediction::new(1, 1)))
        .collect();
    let table = calculate_group_standings(Group::C, &fixtures, &predictions).unwrap();
    let rankings: Vec<Option<u16>> = table.iter().map(|s| s.standing.fifa_ranking).collect();
    assert_eq!(rankings, vec![Some(3), Some(15), Some(27), Some(39)]);
}

#[test]
fn repeated_calls_agree() {
    let fixtures = group_fixtures(&all_fixtures(), Group::D);
    let predictions = predict(&[
        ("gs-d-1", 0, 2),
        ("gs-d-2", 1, 1),
        ("gs-d-3", 4, 2),
        ("gs-d-4", 0, 0),
        ("gs-d-5", 1, 3),
        ("gs-d-6", 2, 2),
    ]);
    let first = calculate_group_standings(Group::D, &fixtures, &predictions).unwrap();
    for _ in 0..5 {
        assert_eq!(
            calculate_group_standings(Group::D, &fixtures, &predictions).unwrap(),
            first
        );
    }
}
