use std::path::PathBuf;

use anyhow::{Context, Result};

use wc26_predictor::config::AppConfig;
use wc26_predictor::fake_predictions::simulate_tournament;
use wc26_predictor::fixtures::{FixtureSource, JsonFixtureFile};
use wc26_predictor::model::Stage;
use wc26_predictor::standings::build_group_pool;
use wc26_predictor::tournament::{champion, third_place_finisher};

fn main() -> Result<()> {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    wc26_predictor::init_tracing();

    let config = AppConfig::from_env();
    let fixtures_path = parse_path_arg("--fixtures").unwrap_or(config.fixtures_path);
    let seed = parse_seed_arg()?;

    let fixtures = JsonFixtureFile::new(&fixtures_path).fixtures()?;
    let pool = build_group_pool(config.group_parallelism);
    let (drafts, projection) = simulate_tournament(&fixtures, seed, pool.as_ref())?;

    if let Some(seed) = seed {
        println!("Seed: {seed}");
    }
    for stage in Stage::KNOCKOUT {
        let predictions = drafts.knockout(stage);
        println!("\n{stage}");
        for m in projection.stage(stage) {
            let score = predictions
                .get(&m.match_number)
                .and_then(|p| p.scores())
                .map(|(h, a)| format!("{h}-{a}"))
                .unwrap_or_else(|| "?".to_string());
            println!(
                "  M{:<3} {:<10} {:>5} {:<10}",
                m.match_number, m.home.name, score, m.away.name
            );
        }
    }

    let winner = champion(&projection, &drafts).context("simulation did not produce a champion")?;
    println!("\nChampion: {}", winner.name);
    if let Some(bronze) = third_place_finisher(&projection, &drafts) {
        println!("Third place: {}", bronze.name);
    }
    Ok(())
}

fn parse_seed_arg() -> Result<Option<u64>> {
    for arg in std::env::args().skip(1) {
        if let Some(raw) = arg.strip_prefix("--seed=") {
            return raw
                .trim()
                .parse::<u64>()
                .map(Some)
                .context("--seed must be a number");
        }
    }
    Ok(None)
}

fn parse_path_arg(name: &str) -> Option<PathBuf> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let prefix = format!("{name}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix(&prefix) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == name {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(PathBuf::from(next));
            }
        }
    }
    None
}
