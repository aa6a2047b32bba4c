use serde::{Deserialize, Serialize};

use super::common::ParticipantInfo;
use super::lenient;

/// Finishers of a single race, in finishing order.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResults {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub season: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub results: Vec<RaceResult>,
}

/// One finisher.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub finish_token: Option<String>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub participant: ParticipantInfo,
}

/// One race in a participant's history.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantResult {
    #[serde(default, deserialize_with = "lenient::text")]
    pub season: String,
    #[serde(default, alias = "race_name", deserialize_with = "lenient::text")]
    pub race: String,
    #[serde(default, alias = "race_date", deserialize_with = "lenient::optional_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub position: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub finish_token: Option<String>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub participant: ParticipantInfo,
}
