use std::env;

use cc6_results::standings::{render_standings, StandingsTable};
use cc6_results::{ChampionshipQuery, ChampionshipType, Gender, ResultsClient};
use tracing_subscriber::EnvFilter;

/// Print a championship table.
///
/// Usage: `cargo run --example standings -- [team|individual] [Male|Female] [category]`
/// against the service named by `CC6_API_BASE`.
#[tokio::main]
async fn main() -> cc6_results::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let championship_type = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(ChampionshipType::Team);
    let gender = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(Gender::Male);
    let category = args.next();

    let client = ResultsClient::from_env()?;
    let seasons = client.get_seasons().await?;
    let Some(season) = seasons.default_season.or_else(|| seasons.seasons.last().cloned()) else {
        println!("No seasons available");
        return Ok(());
    };

    let mut query = ChampionshipQuery::new(season, championship_type, gender);
    query.category = category;
    let payload = client.get_championship(&query).await?;
    print_table(&render_standings(&payload));
    Ok(())
}

fn print_table(table: &StandingsTable) {
    println!("{}", table.heading);
    println!("Scoring: {}", table.scoring);
    println!("Races included: {}", table.races_included);
    for note in &table.notes {
        println!("Note: {note}");
    }
    println!();

    let lines: Vec<Vec<String>> = std::iter::once(table.columns.clone())
        .chain(table.rows.iter().map(|row| row.to_cells()))
        .collect();
    let widths: Vec<usize> = (0..table.columns.len())
        .map(|i| {
            lines
                .iter()
                .map(|l| l.get(i).map_or(0, |c| c.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    for line in lines {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        println!("{}", padded.join("  ").trim_end());
    }
}
