use std::collections::{BTreeMap, HashMap, HashSet};
use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use rusqlite::Error::FromSqlConversionFailure;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::model::{PredictionRecord, PredictionType, Stage};

/// Permanent prediction rows plus the per-user lock. Upserts are keyed by
/// (user, match number, prediction type).
pub trait PredictionStore {
    fn upsert(&mut self, record: &PredictionRecord) -> Result<()>;

    fn predictions_for_user(
        &self,
        user_id: &str,
        prediction_type: PredictionType,
    ) -> Result<Vec<PredictionRecord>>;

    /// Ante-post predictions for the match numbers in `range`.
    fn predictions_by_match_number(
        &self,
        user_id: &str,
        range: RangeInclusive<u16>,
    ) -> Result<HashMap<u16, PredictionRecord>>;

    fn has_round_of_32_predictions(&self, user_id: &str) -> Result<bool> {
        Ok(!self
            .predictions_by_match_number(user_id, Stage::RoundOf32.match_numbers())?
            .is_empty())
    }

    fn is_locked(&self, user_id: &str) -> Result<bool>;

    fn set_locked(&mut self, user_id: &str, locked: bool) -> Result<()>;
}

pub struct SqlitePredictionStore {
    conn: Connection,
}

impl SqlitePredictionStore {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let conn =
            Connection::open(path).with_context(|| format!("open sqlite db {}", path.display()))?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory sqlite db")?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn prediction_count(&self, user_id: &str) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM predictions WHERE user_id = ?1",
                params![user_id],
                |row| row.get(0),
            )
            .context("count predictions")?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        PRAGMA journal_mode = WAL;
        CREATE TABLE IF NOT EXISTS predictions (
            user_id TEXT NOT NULL,
            match_id TEXT NULL,
            match_number INTEGER NOT NULL,
            prediction_type TEXT NOT NULL,
            home_score INTEGER NULL,
            away_score INTEGER NULL,
            predicted_winner_id TEXT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            PRIMARY KEY (user_id, match_number, prediction_type)
        );
        CREATE INDEX IF NOT EXISTS idx_predictions_user ON predictions(user_id);

        CREATE TABLE IF NOT EXISTS user_locks (
            user_id TEXT PRIMARY KEY,
            locked INTEGER NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .context("create sqlite schema")?;
    Ok(())
}

const SELECT_COLUMNS: &str = "user_id, match_id, match_number, prediction_type, home_score, \
    away_score, predicted_winner_id, created_at, updated_at";

fn decode_row(row: &Row<'_>) -> rusqlite::Result<PredictionRecord> {
    let kind: String = row.get(3)?;
    let prediction_type = PredictionType::parse(&kind).ok_or_else(|| {
        let reason = format!("unknown prediction type {kind:?}");
        FromSqlConversionFailure(3, Type::Text, reason.into())
    })?;
    Ok(PredictionRecord {
        user_id: row.get(0)?,
        match_id: row.get(1)?,
        match_number: row.get::<_, u16>(2)?,
        prediction_type,
        home_score: row.get::<_, Option<u8>>(4)?,
        away_score: row.get::<_, Option<u8>>(5)?,
        predicted_winner_id: row.get(6)?,
        created_at: timestamp_at(row, 7)?,
        updated_at: timestamp_at(row, 8)?,
    })
}

fn timestamp_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|err| FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}

impl PredictionStore for SqlitePredictionStore {
    fn upsert(&mut self, record: &PredictionRecord) -> Result<()> {
        self.conn
            .execute(
                r#"
                INSERT INTO predictions (
                    user_id, match_id, match_number, prediction_type,
                    home_score, away_score, predicted_winner_id, created_at, updated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                ON CONFLICT(user_id, match_number, prediction_type) DO UPDATE SET
                    match_id = excluded.match_id,
                    home_score = excluded.home_score,
                    away_score = excluded.away_score,
                    predicted_winner_id = excluded.predicted_winner_id,
                    updated_at = excluded.updated_at
                "#,
                params![
                    record.user_id,
                    record.match_id,
                    record.match_number,
                    record.prediction_type.as_str(),
                    record.home_score,
                    record.away_score,
                    record.predicted_winner_id,
                    record.created_at.to_rfc3339(),
                    record.updated_at.to_rfc3339(),
                ],
            )
            .with_context(|| format!("upsert prediction for match {}", record.match_number))?;
        Ok(())
    }

    fn predictions_for_user(
        &self,
        user_id: &str,
        prediction_type: PredictionType,
    ) -> Result<Vec<PredictionRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {SELECT_COLUMNS} FROM predictions \
                 WHERE user_id = ?1 AND prediction_type = ?2 ORDER BY match_number ASC"
            ))
            .context("prepare user predictions query")?;
        let rows = stmt
            .query_map(params![user_id, prediction_type.as_str()], decode_row)
            .context("query user predictions")?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row.context("decode prediction row")?);
        }
        Ok(out)
    }

    fn predictions_by_match_number(
        &self,
        user_id: &str,
        range: RangeInclusive<u16>,
    ) -> Result<HashMap<u16, PredictionRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {SELECT_COLUMNS} FROM predictions \
                 WHERE user_id = ?1 AND prediction_type = ?2 \
                   AND match_number BETWEEN ?3 AND ?4"
            ))
            .context("prepare match number query")?;
        let rows = stmt
            .query_map(
                params![
                    user_id,
                    PredictionType::AntePost.as_str(),
                    *range.start(),
                    *range.end()
                ],
                decode_row,
            )
            .context("query predictions by match number")?;
        let mut out = HashMap::new();
        for row in rows {
            let record = row.context("decode prediction row")?;
            out.insert(record.match_number, record);
        }
        Ok(out)
    }

    fn is_locked(&self, user_id: &str) -> Result<bool> {
        let locked: Option<i64> = self
            .conn
            .query_row(
                "SELECT locked FROM user_locks WHERE user_id = ?1",
                params![user_id],
                |row| row.get(0),
            )
            .optional()
            .context("read user lock")?;
        Ok(locked.is_some_and(|v| v != 0))
    }

    fn set_locked(&mut self, user_id: &str, locked: bool) -> Result<()> {
        self.conn
            .execute(
                r#"
                INSERT INTO user_locks (user_id, locked, updated_at) VALUES (?1, ?2, ?3)
                ON CONFLICT(user_id) DO UPDATE SET
                    locked = excluded.locked,
                    updated_at = excluded.updated_at
                "#,
                params![user_id, i64::from(locked), Utc::now().to_rfc3339()],
            )
            .context("write user lock")?;
        Ok(())
    }
}

type RecordKey = (String, u16, &'static str);

/// In-process store. `fail_on` makes upserts for a match number fail, to exercise partial
/// submissions.
#[derive(Debug, Default)]
pub struct MemoryPredictionStore {
    records: BTreeMap<RecordKey, PredictionRecord>,
    locks: HashSet<String>,
    failing: HashSet<u16>,
}

impl MemoryPredictionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(&mut self, match_number: u16) {
        self.failing.insert(match_number);
    }

    pub fn clear_failures(&mut self) {
        self.failing.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PredictionStore for MemoryPredictionStore {
    fn upsert(&mut self, record: &PredictionRecord) -> Result<()> {
        if self.failing.contains(&record.match_number) {
            return Err(anyhow!("simulated write failure for match {}", record.match_number));
        }
        let key = (
            record.user_id.clone(),
            record.match_number,
            record.prediction_type.as_str(),
        );
        let created_at = self
            .records
            .get(&key)
            .map(|existing| existing.created_at)
            .unwrap_or(record.created_at);
        self.records.insert(
            key,
            PredictionRecord {
                created_at,
                ..record.clone()
            },
        );
        Ok(())
    }

    fn predictions_for_user(
        &self,
        user_id: &str,
        prediction_type: PredictionType,
    ) -> Result<Vec<PredictionRecord>> {
        Ok(self
            .records
            .values()
            .filter(|r| r.user_id == user_id && r.prediction_type == prediction_type)
            .cloned()
            .collect())
    }

    fn predictions_by_match_number(
        &self,
        user_id: &str,
        range: RangeInclusive<u16>,
    ) -> Result<HashMap<u16, PredictionRecord>> {
        Ok(self
            .records
            .values()
            .filter(|r| {
                r.user_id == user_id
                    && r.prediction_type == PredictionType::AntePost
                    && range.contains(&r.match_number)
            })
            .map(|r| (r.match_number, r.clone()))
            .collect())
    }

    fn is_locked(&self, user_id: &str) -> Result<bool> {
        Ok(self.locks.contains(user_id))
    }

    fn set_locked(&mut self, user_id: &str, locked: bool) -> Result<()> {
        if locked {
            self.locks.insert(user_id.to_string());
        } else {
            self.locks.remove(user_id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(user: &str, match_number: u16, home: u8, away: u8) -> PredictionRecord {
        let at = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        PredictionRecord {
            user_id: user.to_string(),
            match_id: None,
            match_number,
            prediction_type: PredictionType::AntePost,
            home_score: Some(home),
            away_score: Some(away),
            predicted_winner_id: None,
            created_at: at,
            updated_at: at,
        }
    }

    fn exercise(store: &mut dyn PredictionStore) {
        store.upsert(&record("u1", 1, 1, 0)).unwrap();
        store.upsert(&record("u1", 74, 2, 2)).unwrap();
        let mut later = record("u1", 74, 3, 1);
        later.created_at = later.created_at + chrono::Duration::hours(1);
        later.updated_at = later.created_at;
        store.upsert(&later).unwrap();
        store.upsert(&record("u2", 74, 0, 1)).unwrap();

        let mine = store
            .predictions_for_user("u1", PredictionType::AntePost)
            .unwrap();
        assert_eq!(mine.len(), 2);
        let r32 = store
            .predictions_by_match_number("u1", Stage::RoundOf32.match_numbers())
            .unwrap();
        assert_eq!(r32.len(), 1);
        assert_eq!(r32[&74].home_score, Some(3));
        assert_eq!(r32[&74].created_at, record("u1", 74, 0, 0).created_at);
        assert!(store.has_round_of_32_predictions("u2").unwrap());
        assert!(!store.has_round_of_32_predictions("u3").unwrap());
        assert!(
            store
                .predictions_for_user("u1", PredictionType::Live)
                .unwrap()
                .is_empty()
        );

        assert!(!store.is_locked("u1").unwrap());
        store.set_locked("u1", true).unwrap();
        assert!(store.is_locked("u1").unwrap());
        assert!(!store.is_locked("u2").unwrap());
    }

    #[test]
    fn sqlite_store_upserts_on_user_match_type() {
        let mut store = SqlitePredictionStore::open_in_memory().unwrap();
        exercise(&mut store);
        assert_eq!(store.prediction_count("u1").unwrap(), 2);
    }

    #[test]
    fn sqlite_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db").join("predictions.sqlite");
        {
            let mut store = SqlitePredictionStore::open(&path).unwrap();
            store.upsert(&record("u1", 104, 1, 0)).unwrap();
            store.set_locked("u1", true).unwrap();
        }
        let store = SqlitePredictionStore::open(&path).unwrap();
        assert!(store.is_locked("u1").unwrap());
        assert_eq!(store.prediction_count("u1").unwrap(), 1);
    }

    #[test]
    fn corrupt_rows_fail_instead_of_defaulting() {
        let store = SqlitePredictionStore::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO predictions (user_id, match_number, prediction_type, home_score, \
                 away_score, created_at, updated_at) \
                 VALUES ('u1', 74, 'ante_post', 1, 0, 'yesterday', 'yesterday')",
                [],
            )
            .unwrap();
        let err = store
            .predictions_for_user("u1", PredictionType::AntePost)
            .unwrap_err();
        assert!(format!("{err:#}").contains("decode prediction row"));

        let at = Utc::now().to_rfc3339();
        store
            .conn
            .execute(
                "INSERT INTO predictions (user_id, match_number, prediction_type, home_score, \
                 away_score, created_at, updated_at) VALUES ('u2', 75, 'bogus', 1, 0, ?1, ?1)",
                params![at],
            )
            .unwrap();
        let decoded = store.conn.query_row(
            &format!("SELECT {SELECT_COLUMNS} FROM predictions WHERE user_id = 'u2'"),
            [],
            decode_row,
        );
        assert!(matches!(
            decoded,
            Err(rusqlite::Error::FromSqlConversionFailure(3, Type::Text, _))
        ));
    }

    #[test]
    fn memory_store_matches_sqlite_semantics() {
        let mut store = MemoryPredictionStore::new();
        exercise(&mut store);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn memory_store_injected_failure() {
        let mut store = MemoryPredictionStore::new();
        store.fail_on(89);
        assert!(store.upsert(&record("u1", 89, 1, 0)).is_err());
        store.clear_failures();
        assert!(store.upsert(&record("u1", 89, 1, 0)).is_ok());
    }
}
