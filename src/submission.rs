use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};

use crate::drafts::{DraftSet, DraftStore, Drafts, validate_knockout_prediction};
use crate::fixtures::match_number_index;
use crate::model::{
    Fixture, KnockoutMatch, PredictionRecord, PredictionType, ScorePrediction, Stage,
};
use crate::prediction_store::PredictionStore;
use crate::tournament::{project_tournament, stage_ready};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageFailure {
    pub match_number: Option<u16>,
    pub match_id: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub stage: Stage,
    pub attempted: usize,
    pub saved: usize,
    pub failures: Vec<StageFailure>,
}

impl StageReport {
    fn new(stage: Stage) -> Self {
        Self {
            stage,
            attempted: 0,
            saved: 0,
            failures: Vec::new(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    fn fail(
        &mut self,
        match_number: Option<u16>,
        match_id: Option<&str>,
        reason: impl Into<String>,
    ) {
        self.failures.push(StageFailure {
            match_number,
            match_id: match_id.map(str::to_string),
            reason: reason.into(),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReport {
    pub stages: Vec<StageReport>,
    pub locked: bool,
    pub drafts_cleared: bool,
    // True when the user was locked before this call and nothing was written.
    pub already_locked: bool,
}

impl SubmissionReport {
    pub fn succeeded(&self) -> bool {
        self.locked && self.stages.iter().all(StageReport::succeeded)
    }

    pub fn failure_count(&self) -> usize {
        self.stages.iter().map(|s| s.failures.len()).sum()
    }
}

/// Commits every ante-post draft for `user_id`. Each stage must be complete and every knockout
/// prediction must resolve against the bracket drawn from the user's own earlier predictions;
/// anything else is reported as a failure. Drafts are cleared and the user locked only when every
/// stage saved cleanly, so a failed batch can simply be retried.
pub fn submit_ante_post<D, P>(
    user_id: &str,
    fixtures: &[Fixture],
    drafts: &mut Drafts<D>,
    store: &mut P,
) -> Result<SubmissionReport>
where
    D: DraftStore,
    P: PredictionStore + ?Sized,
{
    if store.is_locked(user_id)? {
        if !drafts.is_locked()? {
            drafts.set_locked(true)?;
        }
        info!(user_id, "ante-post predictions already locked; nothing submitted");
        return Ok(SubmissionReport {
            stages: Vec::new(),
            locked: true,
            drafts_cleared: false,
            already_locked: true,
        });
    }

    let set = drafts.load_all()?;
    let projection = project_tournament(fixtures, &set, None)?;
    let mut stages = vec![submit_group_stage(user_id, fixtures, &set, store)];
    for stage in Stage::KNOCKOUT {
        stages.push(submit_knockout_stage(
            user_id,
            stage,
            projection.stage(stage),
            &set,
            store,
        ));
    }

    let mut report = SubmissionReport {
        stages,
        locked: false,
        drafts_cleared: false,
        already_locked: false,
    };
    if report.failure_count() > 0 {
        warn!(
            user_id,
            failures = report.failure_count(),
            "ante-post submission incomplete; drafts kept"
        );
        return Ok(report);
    }

    store.set_locked(user_id, true)?;
    report.locked = true;
    // The user is locked from here on; draft cleanup failures are logged, not returned.
    match drafts.clear_all() {
        Ok(()) => report.drafts_cleared = true,
        Err(err) => warn!(user_id, error = %err, "submitted, but drafts could not be cleared"),
    }
    if let Err(err) = drafts.set_locked(true) {
        warn!(user_id, error = %err, "submitted, but the draft lock could not be written");
    }
    let saved: usize = report.stages.iter().map(|s| s.saved).sum();
    info!(user_id, saved, "ante-post predictions submitted and locked");
    Ok(report)
}

fn record_for(
    user_id: &str,
    match_id: Option<&str>,
    match_number: u16,
    prediction: &ScorePrediction,
) -> PredictionRecord {
    let now = Utc::now();
    PredictionRecord {
        user_id: user_id.to_string(),
        match_id: match_id.map(str::to_string),
        match_number,
        prediction_type: PredictionType::AntePost,
        home_score: prediction.home_score,
        away_score: prediction.away_score,
        predicted_winner_id: prediction.predicted_winner_id.clone(),
        created_at: now,
        updated_at: now,
    }
}

fn save<P: PredictionStore + ?Sized>(
    report: &mut StageReport,
    store: &mut P,
    record: &PredictionRecord,
) {
    report.attempted += 1;
    match store.upsert(record) {
        Ok(()) => report.saved += 1,
        Err(err) => report.fail(
            Some(record.match_number),
            record.match_id.as_deref(),
            format!("{err:#}"),
        ),
    }
}

fn submit_group_stage<P: PredictionStore + ?Sized>(
    user_id: &str,
    fixtures: &[Fixture],
    set: &DraftSet,
    store: &mut P,
) -> StageReport {
    let mut report = StageReport::new(Stage::Group);
    let index = match_number_index(fixtures);

    let mut ids: Vec<&String> = set.group.keys().collect();
    ids.sort();
    for match_id in ids {
        let match_id = match_id.as_str();
        let prediction = &set.group[match_id];
        let Some(&match_number) = index.get(match_id) else {
            report.fail(None, Some(match_id), "unknown fixture");
            continue;
        };
        if !prediction.is_complete() {
            report.fail(Some(match_number), Some(match_id), "both scores are required");
            continue;
        }
        save(&mut report, store, &record_for(user_id, Some(match_id), match_number, prediction));
    }

    for fixture in fixtures.iter().filter(|f| f.group.is_some()) {
        if !set.group.contains_key(&fixture.id) {
            report.fail(Some(fixture.match_number), Some(fixture.id.as_str()), "no prediction");
        }
    }
    report
}

fn submit_knockout_stage<P: PredictionStore + ?Sized>(
    user_id: &str,
    stage: Stage,
    bracket: &[KnockoutMatch],
    set: &DraftSet,
    store: &mut P,
) -> StageReport {
    let mut report = StageReport::new(stage);
    let predictions = set.knockout(stage);
    for match_number in stage.match_numbers() {
        let Some(prediction) = predictions.get(&match_number) else {
            report.fail(Some(match_number), None, "no prediction");
            continue;
        };
        let Some((home, away)) = prediction.scores() else {
            report.fail(Some(match_number), None, "both scores are required");
            continue;
        };
        if home == away && prediction.predicted_winner_id.is_none() {
            report.fail(Some(match_number), None, "draw needs a declared winner");
            continue;
        }
        let Some(m) = bracket.iter().find(|m| m.match_number == match_number) else {
            report.fail(
                Some(match_number),
                None,
                "match cannot be drawn from earlier predictions",
            );
            continue;
        };
        if let Err(err) = validate_knockout_prediction(m, prediction) {
            report.fail(Some(match_number), None, err.to_string());
            continue;
        }
        save(&mut report, store, &record_for(user_id, None, match_number, prediction));
    }
    for extra in predictions.keys().filter(|n| !stage.match_numbers().contains(*n)) {
        report.fail(Some(*extra), None, format!("not a {} match", stage.label()));
    }
    if report.failures.is_empty() && !stage_ready(bracket, predictions) {
        report.fail(None, None, format!("{} is not fully resolvable", stage.label()));
    }
    report
}
