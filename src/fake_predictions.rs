use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bracket::{KnockoutPredictions, resolve_winner};
use crate::drafts::{DraftSet, GroupPredictions};
use crate::error::EngineError;
use crate::model::{Fixture, KnockoutMatch, ScorePrediction, Stage};
use crate::tournament::{TournamentProjection, project_tournament};

// Roughly the shape of real international scorelines.
const GOAL_WEIGHTS: [u8; 10] = [0, 0, 0, 1, 1, 1, 2, 2, 3, 4];

pub fn random_score(rng: &mut impl Rng) -> ScorePrediction {
    let home = GOAL_WEIGHTS[rng.gen_range(0..GOAL_WEIGHTS.len())];
    let away = GOAL_WEIGHTS[rng.gen_range(0..GOAL_WEIGHTS.len())];
    ScorePrediction::new(home, away)
}

/// Fills group matches that have no complete prediction. Returns how many were written.
pub fn fill_group_predictions(
    fixtures: &[Fixture],
    predictions: &mut GroupPredictions,
    rng: &mut impl Rng,
) -> usize {
    let mut filled = 0;
    for fixture in fixtures.iter().filter(|f| f.group.is_some()) {
        if predictions.get(&fixture.id).is_some_and(ScorePrediction::is_complete) {
            continue;
        }
        predictions.insert(fixture.id.clone(), random_score(rng));
        filled += 1;
    }
    filled
}

/// Fills matches in `bracket` whose prediction is missing or cannot pick a winner. Draws get a
/// coin-flip winner.
pub fn fill_knockout_predictions(
    bracket: &[KnockoutMatch],
    predictions: &mut KnockoutPredictions,
    rng: &mut impl Rng,
) -> usize {
    let mut filled = 0;
    for m in bracket {
        if predictions
            .get(&m.match_number)
            .is_some_and(|p| resolve_winner(m, p).is_some())
        {
            continue;
        }
        let mut prediction = random_score(rng);
        if prediction.home_score == prediction.away_score {
            let winner = if rng.gen_bool(0.5) { &m.home } else { &m.away };
            prediction.predicted_winner_id = Some(winner.team_id.clone());
        }
        predictions.insert(m.match_number, prediction);
        filled += 1;
    }
    filled
}

/// Completes every stage of `drafts` in order, regenerating the bracket before each knockout
/// stage so later rounds follow the filled-in results.
pub fn autofill_draft_set(
    fixtures: &[Fixture],
    drafts: &mut DraftSet,
    pool: Option<&rayon::ThreadPool>,
    rng: &mut impl Rng,
) -> Result<usize, EngineError> {
    let mut filled = fill_group_predictions(fixtures, &mut drafts.group, rng);
    for stage in Stage::KNOCKOUT {
        let projection = project_tournament(fixtures, drafts, pool)?;
        let predictions = drafts.knockout.entry(stage).or_default();
        filled += fill_knockout_predictions(projection.stage(stage), predictions, rng);
    }
    Ok(filled)
}

/// A whole random tournament. The same seed always yields the same result.
pub fn simulate_tournament(
    fixtures: &[Fixture],
    seed: Option<u64>,
    pool: Option<&rayon::ThreadPool>,
) -> Result<(DraftSet, TournamentProjection), EngineError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut drafts = DraftSet::default();
    autofill_draft_set(fixtures, &mut drafts, pool, &mut rng)?;
    let projection = project_tournament(fixtures, &drafts, pool)?;
    Ok((drafts, projection))
}
