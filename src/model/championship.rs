use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use strum_macros::EnumString;

use super::common::Gender;
use super::lenient;
use super::season::Race;

/// Token the service uses for a race the club organised.
pub const ORGANISER_TOKEN: &str = "ORG";
/// Token the service uses for a disqualified club.
pub const DISQUALIFIED_TOKEN: &str = "DQ";

/// Whether standings are per club or per runner.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ChampionshipType {
    #[default]
    Team,
    Individual,
}

/// A championship as returned by the results service.
///
/// `standings` is already in rank order; nothing in this crate re-sorts it.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionshipPayload {
    #[serde(default, deserialize_with = "lenient::enum_or_default")]
    pub championship_type: ChampionshipType,
    #[serde(default, deserialize_with = "lenient::text")]
    pub season: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub championship_name: String,
    #[serde(default, deserialize_with = "lenient::optional_enum")]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub best_of: Option<u32>,
    #[serde(default, deserialize_with = "lenient::lossy_vec")]
    pub races: Vec<Race>,
    /// Entries that are not objects are dropped.
    #[serde(default, deserialize_with = "lenient::lossy_vec")]
    pub standings: Vec<StandingEntry>,
}

/// One club or runner in a championship table.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default)]
    pub total_points: TotalPoints,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub club: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub age_category: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub participant_id: Option<String>,
    #[serde(default, deserialize_with = "race_cell_map")]
    pub race_points: BTreeMap<String, RaceCell>,
    #[serde(default, deserialize_with = "lenient::position_map")]
    pub race_positions: BTreeMap<String, u32>,
}

impl StandingEntry {
    /// Stable identity for this entry within one table.
    ///
    /// Uses `participant_id` when present. Otherwise the key is built from
    /// name, club and category, so two entrants sharing all three collide.
    pub fn key(&self) -> String {
        match &self.participant_id {
            Some(id) => id.clone(),
            None => format!(
                "{}|{}|{}",
                self.name,
                self.club.as_deref().unwrap_or_default(),
                self.age_category.as_deref().unwrap_or_default()
            ),
        }
    }

    /// The team cell for `race`, treating a missing entry as unscored.
    pub fn race_cell(&self, race: &str) -> &RaceCell {
        self.race_points.get(race).unwrap_or(&RaceCell::Unscored)
    }

    /// The individual finishing position for `race`, if any.
    pub fn race_position(&self, race: &str) -> Option<u32> {
        self.race_positions.get(race).copied()
    }
}

/// A club's result in one race of a team championship.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum RaceCell {
    /// No scoring data for this race.
    #[default]
    Unscored,
    /// The club organised the race and is exempt from fielding runners.
    Exempt,
    /// Too few finishers to score.
    Disqualified,
    /// Scored: club rank in the race, contributing finisher positions, and
    /// the points they sum to.
    Ranked {
        rank: String,
        positions: Vec<u32>,
        points: f64,
    },
}

impl RaceCell {
    /// Classify a raw JSON value. Anything unrecognised is [`RaceCell::Unscored`].
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) if s == ORGANISER_TOKEN => RaceCell::Exempt,
            Value::String(s) if s == DISQUALIFIED_TOKEN => RaceCell::Disqualified,
            Value::Object(map) => {
                let Some(rank) = map.get("rank").and_then(rank_from_value) else {
                    return RaceCell::Unscored;
                };
                let positions = match map.get("positions") {
                    Some(Value::Array(items)) => {
                        items.iter().filter_map(lenient::count_from_value).collect()
                    }
                    _ => Vec::new(),
                };
                let points = map
                    .get("points")
                    .and_then(lenient::number_from_value)
                    .unwrap_or_default();
                RaceCell::Ranked {
                    rank,
                    positions,
                    points,
                }
            }
            _ => RaceCell::Unscored,
        }
    }

    pub fn is_ranked(&self) -> bool {
        matches!(self, RaceCell::Ranked { .. })
    }
}

impl<'de> Deserialize<'de> for RaceCell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(RaceCell::from_value(&Value::deserialize(deserializer)?))
    }
}

impl Serialize for RaceCell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Ranked<'a> {
            rank: &'a str,
            positions: &'a [u32],
            points: f64,
        }

        match self {
            RaceCell::Unscored => serializer.serialize_none(),
            RaceCell::Exempt => serializer.serialize_str(ORGANISER_TOKEN),
            RaceCell::Disqualified => serializer.serialize_str(DISQUALIFIED_TOKEN),
            RaceCell::Ranked {
                rank,
                positions,
                points,
            } => Ranked {
                rank,
                positions,
                points: *points,
            }
            .serialize(serializer),
        }
    }
}

/// A rank is any non-zero number or non-blank text, kept as shown.
fn rank_from_value(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => n.as_f64().filter(|r| *r != 0.0).map(format_number),
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn race_cell_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, RaceCell>, D::Error>
where
    D: Deserializer<'de>,
{
    let cells = match Value::deserialize(deserializer)? {
        Value::Object(map) => map
            .into_iter()
            .map(|(race, value)| (race, RaceCell::from_value(&value)))
            .collect(),
        _ => BTreeMap::new(),
    };
    Ok(cells)
}

/// A championship total: points, or the disqualification token for clubs
/// disqualified over the whole season. Any other text is kept verbatim.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum TotalPoints {
    Points(f64),
    Disqualified,
    Text(String),
    #[default]
    Missing,
}

impl<'de> Deserialize<'de> for TotalPoints {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let total = match &value {
            Value::String(s) if s == DISQUALIFIED_TOKEN => TotalPoints::Disqualified,
            other => match lenient::number_from_value(other) {
                Some(points) => TotalPoints::Points(points),
                None => lenient::text_from_value(other)
                    .map(TotalPoints::Text)
                    .unwrap_or_default(),
            },
        };
        Ok(total)
    }
}

impl Serialize for TotalPoints {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TotalPoints::Points(points) => serializer.serialize_f64(*points),
            TotalPoints::Disqualified => serializer.serialize_str(DISQUALIFIED_TOKEN),
            TotalPoints::Text(text) => serializer.serialize_str(text),
            TotalPoints::Missing => serializer.serialize_none(),
        }
    }
}

impl fmt::Display for TotalPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TotalPoints::Points(points) => f.write_str(&format_number(*points)),
            TotalPoints::Disqualified => f.write_str(DISQUALIFIED_TOKEN),
            TotalPoints::Text(text) => f.write_str(text),
            TotalPoints::Missing => f.write_str("-"),
        }
    }
}

/// Whole numbers without a decimal point, everything else as-is.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
