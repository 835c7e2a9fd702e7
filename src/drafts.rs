use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::bracket::{KnockoutPredictions, resolve_winner};
use crate::error::{DraftError, PredictionInputError};
use crate::model::{KnockoutMatch, ScorePrediction, Stage};

pub const LOCK_KEY: &str = "ante_post_is_locked";

/// Group predictions keyed by fixture id.
pub type GroupPredictions = HashMap<String, ScorePrediction>;

/// Plain key-value storage for predictions that have not been submitted yet.
pub trait DraftStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryDraftStore {
    entries: HashMap<String, String>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// All drafts in one JSON object on disk, rewritten through a temp file on every change.
#[derive(Debug)]
pub struct FileDraftStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileDraftStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "draft file unreadable; starting empty"
                );
                HashMap::new()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                return Err(err).with_context(|| format!("read drafts {}", path.display()));
            }
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let json = serde_json::to_string(&self.entries).context("serialize drafts")?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).context("write drafts")?;
        fs::rename(&tmp, &self.path).context("swap drafts")?;
        Ok(())
    }
}

impl DraftStore for FileDraftStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

static NO_PREDICTIONS: Lazy<KnockoutPredictions> = Lazy::new(HashMap::new);

/// Every stage's drafts at once, as read by `Drafts::load_all`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftSet {
    pub group: GroupPredictions,
    pub knockout: HashMap<Stage, KnockoutPredictions>,
}

impl DraftSet {
    pub fn knockout(&self, stage: Stage) -> &KnockoutPredictions {
        self.knockout.get(&stage).unwrap_or(&*NO_PREDICTIONS)
    }

    pub fn prediction_count(&self) -> usize {
        self.group.len() + self.knockout.values().map(HashMap::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.prediction_count() == 0
    }
}

/// Typed view over a `DraftStore`. Writes are refused once the user is locked.
pub struct Drafts<S: DraftStore> {
    store: S,
}

impl<S: DraftStore> Drafts<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn is_locked(&self) -> Result<bool, DraftError> {
        let raw = self.store.get(LOCK_KEY).map_err(DraftError::Storage)?;
        Ok(raw.is_some_and(|val| val.trim() == "true"))
    }

    pub fn set_locked(&mut self, locked: bool) -> Result<(), DraftError> {
        let written = if locked {
            self.store.set(LOCK_KEY, "true".to_string())
        } else {
            self.store.remove(LOCK_KEY)
        };
        written.map_err(DraftError::Storage)
    }

    pub fn load_group(&self) -> Result<GroupPredictions, DraftError> {
        self.load_entry(Stage::Group.draft_key())
    }

    pub fn save_group(&mut self, predictions: &GroupPredictions) -> Result<(), DraftError> {
        self.save_entry(Stage::Group.draft_key(), predictions)
    }

    pub fn save_group_prediction(
        &mut self,
        match_id: &str,
        prediction: ScorePrediction,
    ) -> Result<(), DraftError> {
        let mut current = self.load_group()?;
        current.insert(match_id.to_string(), prediction);
        self.save_group(&current)
    }

    pub fn load_knockout(&self, stage: Stage) -> Result<KnockoutPredictions, DraftError> {
        if stage == Stage::Group {
            return Err(DraftError::NotKnockout(stage));
        }
        self.load_entry(stage.draft_key())
    }

    pub fn save_knockout(
        &mut self,
        stage: Stage,
        predictions: &KnockoutPredictions,
    ) -> Result<(), DraftError> {
        if stage == Stage::Group {
            return Err(DraftError::NotKnockout(stage));
        }
        self.save_entry(stage.draft_key(), predictions)
    }

    pub fn save_knockout_prediction(
        &mut self,
        stage: Stage,
        match_number: u16,
        prediction: ScorePrediction,
    ) -> Result<(), DraftError> {
        let mut current = self.load_knockout(stage)?;
        current.insert(match_number, prediction);
        self.save_knockout(stage, &current)
    }

    pub fn load_all(&self) -> Result<DraftSet, DraftError> {
        let mut set = DraftSet {
            group: self.load_group()?,
            knockout: HashMap::new(),
        };
        for stage in Stage::KNOCKOUT {
            let predictions = self.load_knockout(stage)?;
            if !predictions.is_empty() {
                set.knockout.insert(stage, predictions);
            }
        }
        Ok(set)
    }

    pub fn save_all(&mut self, set: &DraftSet) -> Result<(), DraftError> {
        self.save_group(&set.group)?;
        for stage in Stage::KNOCKOUT {
            self.save_knockout(stage, set.knockout(stage))?;
        }
        Ok(())
    }

    /// Drops every stage's drafts. The lock flag is kept.
    pub fn clear_all(&mut self) -> Result<(), DraftError> {
        for stage in Stage::ALL {
            self.store
                .remove(stage.draft_key())
                .map_err(DraftError::Storage)?;
        }
        Ok(())
    }

    fn load_entry<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, DraftError> {
        let Some(raw) = self.store.get(key).map_err(DraftError::Storage)? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(key, error = %err, "corrupt draft entry ignored");
                Ok(T::default())
            }
        }
    }

    fn save_entry<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), DraftError> {
        if self.is_locked()? {
            return Err(DraftError::Locked);
        }
        let json = serde_json::to_string(value).map_err(|source| DraftError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, json).map_err(DraftError::Storage)
    }
}

/// Input-boundary check for a knockout prediction against the match it is for.
pub fn validate_knockout_prediction(
    m: &KnockoutMatch,
    prediction: &ScorePrediction,
) -> Result<(), PredictionInputError> {
    let Some((home, away)) = prediction.scores() else {
        return Err(PredictionInputError::MissingScore(m.match_number));
    };
    if home != away {
        return Ok(());
    }
    match prediction.predicted_winner_id.as_deref() {
        None => Err(PredictionInputError::DrawWithoutWinner(m.match_number)),
        Some(team_id) if resolve_winner(m, prediction).is_none() => {
            Err(PredictionInputError::WinnerNotInMatch {
                match_number: m.match_number,
                team_id: team_id.to_string(),
            })
        }
        Some(_) => Ok(()),
    }
}
