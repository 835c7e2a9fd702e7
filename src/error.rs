use thiserror::Error;

use crate::model::{Group, Stage};

/// Hard data defects. "Not ready yet" conditions (missing predictions, unresolved draws) are
/// never errors; they surface as absent matches instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown group: {0:?}")]
    UnknownGroup(String),
    #[error("malformed group {group}: {reason}")]
    MalformedGroup { group: Group, reason: String },
    #[error("invalid third-place combination: {0}")]
    InvalidCombination(String),
}

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("ante-post predictions are locked")]
    Locked,
    #[error("{0} has no knockout draft")]
    NotKnockout(Stage),
    #[error("draft storage failed")]
    Storage(#[source] anyhow::Error),
    #[error("draft entry {key} could not be encoded")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PredictionInputError {
    #[error("match {0}: both scores are required")]
    MissingScore(u16),
    #[error("match {0}: a drawn knockout match needs a declared winner")]
    DrawWithoutWinner(u16),
    #[error("match {match_number}: declared winner {team_id} is not playing")]
    WinnerNotInMatch { match_number: u16, team_id: String },
}
