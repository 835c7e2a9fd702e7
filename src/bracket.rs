use std::collections::HashMap;

use tracing::{debug, warn};

use crate::model::{Group, KnockoutMatch, KnockoutSlot, ScorePrediction, Stage};
use crate::standings::{GroupStandings, standing_at};
use crate::third_place_matrix::ThirdPlaceAssignment;

/// Knockout predictions are keyed by match number; these matches have no shared fixture row.
pub type KnockoutPredictions = HashMap<u16, ScorePrediction>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seed {
    Winner(Group),
    RunnerUp(Group),
    // Group comes from the third-place matrix for this match.
    ThirdPlace,
}

use Group::*;
use Seed::*;

const ROUND_OF_32: [(u16, Seed, Seed); 16] = [
    (73, RunnerUp(A), RunnerUp(B)),
    (74, Winner(E), ThirdPlace),
    (75, Winner(F), RunnerUp(C)),
    (76, Winner(C), RunnerUp(F)),
    (77, Winner(I), ThirdPlace),
    (78, RunnerUp(E), RunnerUp(I)),
    (79, Winner(A), ThirdPlace),
    (80, Winner(L), ThirdPlace),
    (81, Winner(D), ThirdPlace),
    (82, Winner(G), ThirdPlace),
    (83, RunnerUp(K), RunnerUp(L)),
    (84, Winner(H), RunnerUp(J)),
    (85, Winner(B), ThirdPlace),
    (86, Winner(J), RunnerUp(H)),
    (87, Winner(K), ThirdPlace),
    (88, RunnerUp(D), RunnerUp(G)),
];

/// (match, home fed by, away fed by) for the rounds after the Round of 32.
pub const ROUND_OF_16_PAIRS: [(u16, u16, u16); 8] = [
    (89, 73, 74),
    (90, 75, 76),
    (91, 77, 78),
    (92, 79, 80),
    (93, 81, 82),
    (94, 83, 84),
    (95, 85, 86),
    (96, 87, 88),
];

pub const QUARTER_FINAL_PAIRS: [(u16, u16, u16); 4] =
    [(97, 89, 90), (98, 91, 92), (99, 93, 94), (100, 95, 96)];

pub const SEMI_FINAL_PAIRS: [(u16, u16, u16); 2] = [(101, 97, 98), (102, 99, 100)];

pub const BRONZE_FINAL_PAIR: (u16, u16, u16) = (103, 101, 102);
pub const FINAL_PAIR: (u16, u16, u16) = (104, 101, 102);

fn seed_slot(
    seed: Seed,
    match_number: u16,
    standings: &GroupStandings,
    thirds: &[ThirdPlaceAssignment],
) -> Option<KnockoutSlot> {
    let (group, position, label) = match seed {
        Winner(group) => (group, 1, format!("Winner Group {group}")),
        RunnerUp(group) => (group, 2, format!("Runner-up Group {group}")),
        ThirdPlace => {
            let group = thirds
                .iter()
                .find(|a| a.match_number == match_number)?
                .group;
            (group, 3, format!("3rd Place Group {group}"))
        }
    };
    standing_at(standings, group, position).map(|s| KnockoutSlot::from_standing(&s.standing, label))
}

/// The 16 Round-of-32 matches seeded from final group positions. A match whose seed is missing
/// (group not in `standings`, or no third-place assignment) is left out.
pub fn generate_round_of_32_bracket(
    standings: &GroupStandings,
    thirds: &[ThirdPlaceAssignment],
) -> Vec<KnockoutMatch> {
    let bracket: Vec<KnockoutMatch> = ROUND_OF_32
        .iter()
        .filter_map(|&(match_number, home, away)| {
            let home = seed_slot(home, match_number, standings, thirds)?;
            let away = seed_slot(away, match_number, standings, thirds)?;
            Some(KnockoutMatch {
                match_number,
                home,
                away,
                stage: Stage::RoundOf32,
                round_number: Stage::RoundOf32.round_number(),
            })
        })
        .collect();
    log_generated(Stage::RoundOf32, &bracket);
    bracket
}

/// Higher predicted score wins; a predicted draw needs a declared winner who is actually in the
/// match. Anything else is unresolved.
pub fn resolve_winner<'a>(
    m: &'a KnockoutMatch,
    prediction: &ScorePrediction,
) -> Option<&'a KnockoutSlot> {
    let (home, away) = prediction.scores()?;
    if home > away {
        return Some(&m.home);
    }
    if away > home {
        return Some(&m.away);
    }
    let declared = prediction.predicted_winner_id.as_deref()?;
    [&m.home, &m.away]
        .into_iter()
        .find(|slot| slot.team_id == declared)
}

pub fn resolve_loser<'a>(
    m: &'a KnockoutMatch,
    prediction: &ScorePrediction,
) -> Option<&'a KnockoutSlot> {
    let winner = resolve_winner(m, prediction)?;
    if winner.team_id == m.home.team_id {
        Some(&m.away)
    } else {
        Some(&m.home)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Advance {
    Winners,
    Losers,
}

fn feeder_slot(
    prior: &[KnockoutMatch],
    predictions: &KnockoutPredictions,
    match_number: u16,
    advance: Advance,
) -> Option<KnockoutSlot> {
    let m = prior.iter().find(|m| m.match_number == match_number)?;
    let prediction = predictions.get(&match_number)?;
    let (slot, label) = match advance {
        Advance::Winners => (resolve_winner(m, prediction)?, "Winner"),
        Advance::Losers => (resolve_loser(m, prediction)?, "Loser"),
    };
    Some(slot.relabel(format!("{label} Match {match_number}")))
}

fn pair_matches(
    stage: Stage,
    pairs: &[(u16, u16, u16)],
    prior: &[KnockoutMatch],
    predictions: &KnockoutPredictions,
    advance: Advance,
) -> Vec<KnockoutMatch> {
    let bracket: Vec<KnockoutMatch> = pairs
        .iter()
        .filter_map(|&(match_number, home_from, away_from)| {
            Some(KnockoutMatch {
                match_number,
                home: feeder_slot(prior, predictions, home_from, advance)?,
                away: feeder_slot(prior, predictions, away_from, advance)?,
                stage,
                round_number: stage.round_number(),
            })
        })
        .collect();
    log_generated(stage, &bracket);
    bracket
}

fn log_generated(stage: Stage, bracket: &[KnockoutMatch]) {
    let expected = stage.match_count();
    if bracket.is_empty() || bracket.len() == expected {
        debug!(stage = stage.short_code(), matches = bracket.len(), "bracket generated");
    } else {
        warn!(
            stage = stage.short_code(),
            matches = bracket.len(),
            expected,
            "bracket partially generated"
        );
    }
}

pub fn generate_round_of_16(
    round_of_32: &[KnockoutMatch],
    predictions: &KnockoutPredictions,
) -> Vec<KnockoutMatch> {
    pair_matches(
        Stage::RoundOf16,
        &ROUND_OF_16_PAIRS,
        round_of_32,
        predictions,
        Advance::Winners,
    )
}

pub fn generate_quarter_finals(
    round_of_16: &[KnockoutMatch],
    predictions: &KnockoutPredictions,
) -> Vec<KnockoutMatch> {
    pair_matches(
        Stage::QuarterFinals,
        &QUARTER_FINAL_PAIRS,
        round_of_16,
        predictions,
        Advance::Winners,
    )
}

pub fn generate_semi_finals(
    quarter_finals: &[KnockoutMatch],
    predictions: &KnockoutPredictions,
) -> Vec<KnockoutMatch> {
    pair_matches(
        Stage::SemiFinals,
        &SEMI_FINAL_PAIRS,
        quarter_finals,
        predictions,
        Advance::Winners,
    )
}

pub fn generate_bronze_final(
    semi_finals: &[KnockoutMatch],
    predictions: &KnockoutPredictions,
) -> Vec<KnockoutMatch> {
    pair_matches(
        Stage::BronzeFinal,
        &[BRONZE_FINAL_PAIR],
        semi_finals,
        predictions,
        Advance::Losers,
    )
}

pub fn generate_final(
    semi_finals: &[KnockoutMatch],
    predictions: &KnockoutPredictions,
) -> Vec<KnockoutMatch> {
    pair_matches(
        Stage::Final,
        &[FINAL_PAIR],
        semi_finals,
        predictions,
        Advance::Winners,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: &str) -> KnockoutSlot {
        KnockoutSlot {
            team_id: id.to_string(),
            code: id.to_uppercase(),
            name: id.to_string(),
            source: "test".to_string(),
        }
    }

    fn semi(match_number: u16, home: &str, away: &str) -> KnockoutMatch {
        KnockoutMatch {
            match_number,
            home: slot(home),
            away: slot(away),
            stage: Stage::SemiFinals,
            round_number: 4,
        }
    }

    #[test]
    fn round_of_32_schedule_is_complete() {
        let numbers: Vec<u16> = ROUND_OF_32.iter().map(|r| r.0).collect();
        assert_eq!(numbers, (73..=88).collect::<Vec<_>>());
        let wildcards: Vec<u16> = ROUND_OF_32
            .iter()
            .filter(|r| r.2 == ThirdPlace)
            .map(|r| r.0)
            .collect();
        assert_eq!(wildcards, crate::third_place_matrix::WILDCARD_MATCHES.to_vec());
    }

    #[test]
    fn winner_by_score_or_declared_on_draw() {
        let m = semi(101, "a", "b");
        assert_eq!(resolve_winner(&m, &ScorePrediction::new(0, 2)).unwrap().team_id, "b");
        assert_eq!(
            resolve_winner(&m, &ScorePrediction::with_winner(1, 1, "a")).unwrap().team_id,
            "a"
        );
        assert!(resolve_winner(&m, &ScorePrediction::new(1, 1)).is_none());
        assert!(resolve_winner(&m, &ScorePrediction::with_winner(1, 1, "zz")).is_none());
        assert!(resolve_winner(&m, &ScorePrediction::default()).is_none());
    }

    #[test]
    fn declared_winner_is_ignored_when_scores_differ() {
        let m = semi(101, "a", "b");
        let p = ScorePrediction::with_winner(3, 0, "b");
        assert_eq!(resolve_winner(&m, &p).unwrap().team_id, "a");
        assert_eq!(resolve_loser(&m, &p).unwrap().team_id, "b");
    }

    #[test]
    fn bronze_and_final_take_opposite_sides() {
        let semis = vec![semi(101, "a", "b"), semi(102, "c", "d")];
        let predictions = HashMap::from([
            (101, ScorePrediction::new(2, 1)),
            (102, ScorePrediction::with_winner(0, 0, "d")),
        ]);
        let bronze = generate_bronze_final(&semis, &predictions);
        let last = generate_final(&semis, &predictions);
        assert_eq!(bronze.len(), 1);
        assert_eq!(last.len(), 1);
        assert_eq!((bronze[0].home.team_id.as_str(), bronze[0].away.team_id.as_str()), ("b", "c"));
        assert_eq!((last[0].home.team_id.as_str(), last[0].away.team_id.as_str()), ("a", "d"));
        assert_eq!(bronze[0].home.source, "Loser Match 101");
        assert_eq!(last[0].away.source, "Winner Match 102");
        assert_eq!(bronze[0].round_number, 5);
        assert_eq!(last[0].round_number, 6);
    }

    #[test]
    fn unresolved_feeder_omits_only_that_match() {
        let semis = vec![semi(101, "a", "b"), semi(102, "c", "d")];
        let predictions = HashMap::from([(101, ScorePrediction::new(2, 1))]);
        assert!(generate_final(&semis, &predictions).is_empty());
    }
}
