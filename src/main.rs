use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use rand::SeedableRng;
use rand::rngs::StdRng;

use wc26_predictor::config::AppConfig;
use wc26_predictor::drafts::{Drafts, FileDraftStore};
use wc26_predictor::fake_predictions::autofill_draft_set;
use wc26_predictor::fixtures::{FixtureSource, JsonFixtureFile};
use wc26_predictor::model::{Fixture, KnockoutMatch, Stage};
use wc26_predictor::prediction_store::{PredictionStore, SqlitePredictionStore};
use wc26_predictor::standings::build_group_pool;
use wc26_predictor::submission::submit_ante_post;
use wc26_predictor::tournament::{
    TournamentProjection, champion, next_open_stage, project_tournament, third_place_finisher,
};

struct Cli {
    command: String,
    config: AppConfig,
    seed: Option<u64>,
}

fn main() -> Result<()> {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    wc26_predictor::init_tracing();

    let cli = parse_cli(std::env::args().skip(1).collect())?;
    match cli.command.as_str() {
        "project" => run_project(&cli.config),
        "autofill" => run_autofill(&cli.config, cli.seed),
        "submit" => run_submit(&cli.config),
        "status" => run_status(&cli.config),
        other => Err(anyhow!(
            "unknown command {other:?} (expected project, autofill, submit or status)"
        )),
    }
}

fn parse_cli(args: Vec<String>) -> Result<Cli> {
    let mut config = AppConfig::from_env();
    if let Some(path) = flag_value(&args, "--fixtures") {
        config.fixtures_path = PathBuf::from(path);
    }
    if let Some(path) = flag_value(&args, "--db") {
        config.db_path = PathBuf::from(path);
    }
    if let Some(path) = flag_value(&args, "--drafts") {
        config.drafts_path = PathBuf::from(path);
    }
    if let Some(user) = flag_value(&args, "--user") {
        config.user_id = user;
    }
    let seed = match flag_value(&args, "--seed") {
        Some(raw) => Some(raw.parse::<u64>().context("--seed must be a number")?),
        None => None,
    };

    let mut command = None;
    let mut skip_next = false;
    for arg in &args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg.starts_with("--") {
            skip_next = !arg.contains('=');
            continue;
        }
        command = Some(arg.clone());
        break;
    }
    Ok(Cli {
        command: command.unwrap_or_else(|| "project".to_string()),
        config,
        seed,
    })
}

fn flag_value(args: &[String], name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == name {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(next.trim().to_string());
            }
        }
    }
    None
}

fn load_fixtures(config: &AppConfig) -> Result<Vec<Fixture>> {
    JsonFixtureFile::new(&config.fixtures_path).fixtures()
}

fn open_drafts(config: &AppConfig) -> Result<Drafts<FileDraftStore>> {
    Ok(Drafts::new(FileDraftStore::open(&config.drafts_path)?))
}

fn run_project(config: &AppConfig) -> Result<()> {
    let fixtures = load_fixtures(config)?;
    let drafts = open_drafts(config)?.load_all()?;
    let pool = build_group_pool(config.group_parallelism);
    let projection = project_tournament(&fixtures, &drafts, pool.as_ref())?;

    print_group_tables(&projection);
    print_third_place(&projection);
    for stage in Stage::KNOCKOUT {
        print_stage(stage, projection.stage(stage));
    }

    if let Some(winner) = champion(&projection, &drafts) {
        println!();
        println!("Champion: {} ({})", winner.name, winner.code);
        if let Some(bronze) = third_place_finisher(&projection, &drafts) {
            println!("Third place: {} ({})", bronze.name, bronze.code);
        }
    }
    match next_open_stage(&projection, &drafts) {
        Some(stage) => println!("\nNext stage awaiting predictions: {stage}"),
        None => println!("\nEvery stage is predicted."),
    }
    Ok(())
}

fn run_autofill(config: &AppConfig, seed: Option<u64>) -> Result<()> {
    let fixtures = load_fixtures(config)?;
    let mut drafts = open_drafts(config)?;
    if drafts.is_locked()? {
        return Err(anyhow!("ante-post predictions are locked"));
    }
    let mut set = drafts.load_all()?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let pool = build_group_pool(config.group_parallelism);
    let filled = autofill_draft_set(&fixtures, &mut set, pool.as_ref(), &mut rng)?;
    drafts.save_all(&set)?;
    println!(
        "Filled {filled} predictions into {}",
        config.drafts_path.display()
    );
    Ok(())
}

fn run_submit(config: &AppConfig) -> Result<()> {
    let fixtures = load_fixtures(config)?;
    let mut drafts = open_drafts(config)?;
    let mut store = SqlitePredictionStore::open(&config.db_path)?;
    let report = submit_ante_post(&config.user_id, &fixtures, &mut drafts, &mut store)?;

    if report.already_locked {
        println!("User {} is already locked; nothing submitted.", config.user_id);
        return Ok(());
    }
    for stage in &report.stages {
        println!(
            "{:<16} {:>3}/{:<3} saved{}",
            stage.stage.label(),
            stage.saved,
            stage.stage.match_count(),
            if stage.failures.is_empty() {
                String::new()
            } else {
                format!("  ({} failed)", stage.failures.len())
            }
        );
        for failure in stage.failures.iter().take(6) {
            let label = failure
                .match_number
                .map(|n| format!("match {n}"))
                .or_else(|| failure.match_id.clone())
                .unwrap_or_else(|| "?".to_string());
            println!("   - {label}: {}", failure.reason);
        }
    }
    if report.succeeded() {
        println!("Submitted and locked for {}.", config.user_id);
    } else {
        println!(
            "{} predictions failed; drafts kept for retry.",
            report.failure_count()
        );
    }
    Ok(())
}

fn run_status(config: &AppConfig) -> Result<()> {
    let drafts = open_drafts(config)?;
    let store = SqlitePredictionStore::open(&config.db_path)?;
    let user = config.user_id.as_str();

    println!("User: {user}");
    println!("Locked (store): {}", store.is_locked(user)?);
    println!("Locked (drafts): {}", drafts.is_locked()?);
    println!("Draft predictions: {}", drafts.load_all()?.prediction_count());
    for stage in Stage::ALL {
        let saved = store.predictions_by_match_number(user, stage.match_numbers())?;
        println!(
            "{:<16} {:>3}/{}",
            stage.label(),
            saved.len(),
            stage.match_count()
        );
    }
    Ok(())
}

fn print_group_tables(projection: &TournamentProjection) {
    for (group, table) in projection.group_standings() {
        println!("Group {group}");
        println!("  #  Team                 P  W  D  L  GF GA  GD Pts");
        for row in table {
            let s = &row.standing;
            println!(
                "  {}  {:<20} {:>2} {:>2} {:>2} {:>2} {:>3} {:>2} {:>3} {:>3}",
                row.position,
                s.team_name,
                s.played,
                s.won,
                s.drawn,
                s.lost,
                s.goals_for,
                s.goals_against,
                s.goal_difference,
                s.points
            );
        }
    }
}

fn print_third_place(projection: &TournamentProjection) {
    let result = &projection.round_of_32;
    if result.third_place_ranking.is_empty() {
        return;
    }
    println!("\nThird-placed teams");
    for (idx, third) in result.third_place_ranking.iter().enumerate() {
        let s = &third.standing.standing;
        let marker = if idx < result.best_third_place.len() {
            "Q"
        } else {
            " "
        };
        println!(
            "  {marker} {:>2}. {} {:<20} {:>3} pts {:>3} GD {:>2} GF",
            idx + 1,
            third.group,
            s.team_name,
            s.points,
            s.goal_difference,
            s.goals_for
        );
    }
    if let Some(source) = &result.matrix_source {
        println!("  allocation: {source:?}");
    }
}

fn print_stage(stage: Stage, matches: &[KnockoutMatch]) {
    println!("\n{stage} ({}/{})", matches.len(), stage.match_count());
    for m in matches {
        println!(
            "  M{:<3} {:<20} v {:<20} [{} / {}]",
            m.match_number, m.home.name, m.away.name, m.home.source, m.away.source
        );
    }
}
