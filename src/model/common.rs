use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use super::lenient;

/// Competition gender. Text forms match the service (`Male`, `Female`).
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
#[strum(ascii_case_insensitive)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Participant details embedded in race results and participant histories.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantInfo {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub age_category: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub club: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub parkrun_barcode_id: Option<String>,
}

impl ParticipantInfo {
    /// `"{first} {last}"` with surrounding whitespace removed.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }
}

/// A running club known to the service.
///
/// Older deployments list clubs as bare names; both forms are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ClubWire")]
pub struct Club {
    pub name: String,
    pub short_names: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClubWire {
    Name(String),
    Full {
        name: String,
        #[serde(default, deserialize_with = "lenient::null_as_default")]
        short_names: Vec<String>,
    },
}

impl From<ClubWire> for Club {
    fn from(wire: ClubWire) -> Self {
        match wire {
            ClubWire::Name(name) => Club {
                name,
                short_names: Vec::new(),
            },
            ClubWire::Full { name, short_names } => Club { name, short_names },
        }
    }
}
