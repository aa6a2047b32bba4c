//! Turning championship payloads into display tables.
//!
//! Everything here is a pure function of its input. Malformed or missing
//! payload data degrades to `"-"` placeholders and empty tables.

mod categories;

pub use categories::*;

use itertools::Itertools;
use serde::Serialize;

use crate::model::{
    format_number, ChampionshipPayload, ChampionshipType, Gender, RaceCell, StandingEntry,
    DISQUALIFIED_TOKEN, ORGANISER_TOKEN,
};

/// Placeholder for a cell with nothing to show.
pub const PLACEHOLDER: &str = "-";

const DEFAULT_BEST_OF: u32 = 3;

/// Notes printed under every team table.
pub const TEAM_NOTES: [&str; 2] = [
    "Clubs may be marked as disqualified (DQ) due to having insufficient runners in a race.",
    "The Total Rankings column will be adjusted if a club did not organise a race \
     (for example due to cancellation or if the season is ongoing).",
];

/// A fully derived championship table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsTable {
    pub heading: String,
    pub scoring: String,
    pub races_included: usize,
    pub notes: Vec<&'static str>,
    pub columns: Vec<String>,
    pub rows: Vec<StandingsRow>,
}

/// One rendered standings line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    /// Identity of the entry, for keyed list rendering.
    pub key: String,
    pub position: usize,
    pub name: String,
    /// Only set for individual championships.
    pub category: Option<String>,
    pub total: String,
    /// One cell per race, in the payload's race order.
    pub cells: Vec<String>,
}

impl StandingsRow {
    /// All cells of the row in column order.
    pub fn to_cells(&self) -> Vec<String> {
        let mut cells = vec![self.position.to_string(), self.name.clone()];
        cells.extend(self.category.clone());
        cells.push(self.total.clone());
        cells.extend(self.cells.iter().cloned());
        cells
    }
}

/// Derive the complete table for `payload`.
pub fn render_standings(payload: &ChampionshipPayload) -> StandingsTable {
    let individual = payload.championship_type == ChampionshipType::Individual;

    let mut columns = vec![
        "Position".to_string(),
        if individual { "Name" } else { "Club" }.to_string(),
    ];
    if individual {
        columns.push("Category".to_string());
    }
    columns.push("Total Rankings".to_string());
    columns.extend(payload.races.iter().map(|race| race.name.clone()));

    let rows = payload
        .standings
        .iter()
        .enumerate()
        .map(|(index, entry)| render_row(payload, index, entry))
        .collect();

    StandingsTable {
        heading: format!("{} - {}", payload.championship_name, payload.season),
        scoring: scoring_description(payload),
        races_included: races_included(payload),
        notes: if individual { Vec::new() } else { TEAM_NOTES.to_vec() },
        columns,
        rows,
    }
}

fn render_row(payload: &ChampionshipPayload, index: usize, entry: &StandingEntry) -> StandingsRow {
    let cells = payload
        .races
        .iter()
        .map(|race| match payload.championship_type {
            ChampionshipType::Individual => render_position_cell(entry.race_position(&race.name)),
            ChampionshipType::Team => render_team_cell(entry.race_cell(&race.name)),
        })
        .collect();

    let category = match payload.championship_type {
        ChampionshipType::Individual => Some(
            entry
                .age_category
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        ),
        ChampionshipType::Team => None,
    };

    StandingsRow {
        key: entry.key(),
        position: index + 1,
        name: display_name(payload.championship_type, entry),
        category,
        total: entry.total_points.to_string(),
        cells,
    }
}

/// The name column: runners get their club appended, clubs are shown as-is.
pub fn display_name(championship_type: ChampionshipType, entry: &StandingEntry) -> String {
    match (championship_type, entry.club.as_deref()) {
        (ChampionshipType::Individual, Some(club)) if !club.is_empty() => {
            format!("{} ({club})", entry.name)
        }
        _ => entry.name.clone(),
    }
}

/// Text for one team race cell.
pub fn render_team_cell(cell: &RaceCell) -> String {
    match cell {
        RaceCell::Exempt => ORGANISER_TOKEN.to_string(),
        RaceCell::Disqualified => DISQUALIFIED_TOKEN.to_string(),
        RaceCell::Ranked {
            rank,
            positions,
            points,
        } => format!(
            "{rank} ({} = {} points)",
            positions.iter().join(", "),
            format_number(*points)
        ),
        RaceCell::Unscored => PLACEHOLDER.to_string(),
    }
}

/// Text for one individual race cell.
pub fn render_position_cell(position: Option<u32>) -> String {
    position
        .filter(|p| *p > 0)
        .map(|p| p.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// How the championship is scored.
///
/// The team depth depends only on gender: four scorers for men, three
/// otherwise.
pub fn scoring_description(payload: &ChampionshipPayload) -> String {
    match payload.championship_type {
        ChampionshipType::Individual => format!(
            "Best {} race results per individual",
            payload.best_of.unwrap_or(DEFAULT_BEST_OF)
        ),
        ChampionshipType::Team => {
            let depth = if payload.gender == Some(Gender::Male) { 4 } else { 3 };
            format!("Top {depth} finishers per club per race")
        }
    }
}

/// Number of races counted in the championship.
///
/// For teams, a race counts once any club holds a ranked result in it;
/// races where every club is exempt, disqualified, or unscored do not.
pub fn races_included(payload: &ChampionshipPayload) -> usize {
    match payload.championship_type {
        ChampionshipType::Individual => payload.races.len(),
        ChampionshipType::Team => payload
            .races
            .iter()
            .filter(|race| {
                payload
                    .standings
                    .iter()
                    .any(|entry| entry.race_cell(&race.name).is_ranked())
            })
            .count(),
    }
}
