use anyhow::{Result, anyhow};

use wc26_predictor::model::Group;
use wc26_predictor::third_place_matrix::{MatrixSource, resolve_third_place_assignments};

// Host of each wildcard match, for display.
const HOSTS: [(u16, &str); 8] = [
    (74, "Winner Group E"),
    (77, "Winner Group I"),
    (79, "Winner Group A"),
    (80, "Winner Group L"),
    (81, "Winner Group D"),
    (82, "Winner Group G"),
    (85, "Winner Group B"),
    (87, "Winner Group K"),
];

fn main() -> Result<()> {
    wc26_predictor::init_tracing();

    let raw = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: matrix_lookup <eight group letters, e.g. DEFGHIKL>"))?;
    let groups = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| Group::from_letter(c).ok_or_else(|| anyhow!("unknown group {c:?}")))
        .collect::<Result<Vec<_>>>()?;

    let resolution = resolve_third_place_assignments(&groups)?;
    match resolution.source {
        MatrixSource::Table { row } => println!("Combination row {row}"),
        MatrixSource::Derived { row } => {
            println!("Combination row {row} (derived, not yet checked against FIFA's table)")
        }
        MatrixSource::Fallback => println!("Combination not in table; fallback allocation"),
    }
    for (match_number, host) in HOSTS {
        let third = resolution
            .group_for(match_number)
            .map(|g| format!("3rd Place Group {g}"))
            .unwrap_or_else(|| "?".to_string());
        println!("  Match {match_number}: {host} v {third}");
    }
    Ok(())
}
