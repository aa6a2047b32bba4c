//! Display rows for a single race and for one participant's history.

use serde::Serialize;

use crate::model::{ParticipantResult, RaceResults};
use crate::standings::PLACEHOLDER;

pub const RACE_RESULT_COLUMNS: [&str; 5] = ["Position", "Name", "Gender", "Category", "Club"];
pub const PARTICIPANT_RESULT_COLUMNS: [&str; 5] = ["Season", "Race", "Date", "Position", "Time"];

const PARTICIPANT_FALLBACK_TITLE: &str = "Participant Results";
pub const NO_RESULTS_MESSAGE: &str = "No race results found for this participant.";

/// One finisher line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaceResultRow {
    pub key: String,
    pub position: usize,
    pub name: String,
    pub gender: String,
    pub category: String,
    pub club: String,
}

/// Rows for a race, positioned by finishing order.
pub fn race_result_rows(results: &RaceResults) -> Vec<RaceResultRow> {
    results
        .results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            let p = &result.participant;
            RaceResultRow {
                key: result
                    .finish_token
                    .clone()
                    .unwrap_or_else(|| (index + 1).to_string()),
                position: index + 1,
                name: p.full_name(),
                gender: p.gender.clone().unwrap_or_default(),
                category: p.age_category.clone().unwrap_or_default(),
                club: p.club.clone().unwrap_or_default(),
            }
        })
        .collect()
}

/// A participant's page: who they are and where they finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantHistory {
    pub title: String,
    pub club: Option<String>,
    /// `"{gender} • {category}"`, when both are known.
    pub subtitle: Option<String>,
    pub rows: Vec<[String; 5]>,
}

/// Build the history view. `None` when there are no results to show.
pub fn participant_history(results: &[ParticipantResult]) -> Option<ParticipantHistory> {
    let participant = &results.first()?.participant;

    let title = match participant.full_name() {
        name if name.is_empty() => PARTICIPANT_FALLBACK_TITLE.to_string(),
        name => name,
    };
    let subtitle = match (&participant.gender, &participant.age_category) {
        (Some(gender), Some(category)) => Some(format!("{gender} • {category}")),
        _ => None,
    };

    let rows = results
        .iter()
        .map(|r| {
            [
                r.season.clone(),
                r.race.clone(),
                r.date.clone().unwrap_or_default(),
                r.position.map(|p| p.to_string()).unwrap_or_default(),
                r.time.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
            ]
        })
        .collect();

    Some(ParticipantHistory {
        title,
        club: participant.club.clone(),
        subtitle,
        rows,
    })
}
