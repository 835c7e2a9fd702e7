use std::env;
use std::path::PathBuf;

const CACHE_DIR: &str = "wc26_predictor";
const DRAFTS_FILE: &str = "drafts.json";
const DB_FILE: &str = "predictions.sqlite";

pub const DEFAULT_FIXTURES_PATH: &str = "data/group_fixtures.json";
pub const DEFAULT_USER_ID: &str = "local";
pub const DEFAULT_GROUP_PARALLELISM: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub fixtures_path: PathBuf,
    pub db_path: PathBuf,
    pub drafts_path: PathBuf,
    pub user_id: String,
    pub group_parallelism: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let fixtures_path = opt_env("WC26_FIXTURES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURES_PATH));
        let db_path = opt_env("WC26_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);
        let drafts_path = opt_env("WC26_DRAFTS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_drafts_path);
        let user_id = opt_env("WC26_USER_ID").unwrap_or_else(|| DEFAULT_USER_ID.to_string());
        let group_parallelism = env::var("WC26_GROUP_PARALLELISM")
            .ok()
            .and_then(|val| val.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_GROUP_PARALLELISM)
            .clamp(1, 12);
        Self {
            fixtures_path,
            db_path,
            drafts_path,
            user_id,
            group_parallelism,
        }
    }
}

fn opt_env(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|val| {
        if val.trim().is_empty() {
            None
        } else {
            Some(val.trim().to_string())
        }
    })
}

pub fn app_cache_dir() -> Option<PathBuf> {
    // Prefer XDG cache.
    if let Some(base) = opt_env("XDG_CACHE_HOME") {
        return Some(PathBuf::from(base).join(CACHE_DIR));
    }
    let home = opt_env("HOME")?;
    Some(PathBuf::from(home).join(".cache").join(CACHE_DIR))
}

pub fn default_drafts_path() -> PathBuf {
    app_cache_dir()
        .map(|dir| dir.join(DRAFTS_FILE))
        .unwrap_or_else(|| PathBuf::from(DRAFTS_FILE))
}

pub fn default_db_path() -> PathBuf {
    app_cache_dir()
        .map(|dir| dir.join(DB_FILE))
        .unwrap_or_else(|| PathBuf::from(DB_FILE))
}
