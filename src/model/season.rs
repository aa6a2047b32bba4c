use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::lenient;

/// Bucket width used when a season does not specify one.
pub const DEFAULT_AGE_CATEGORY_SIZE: i64 = 5;

pub(crate) const RACE_DATE_FORMAT: &str = "%Y-%m-%d";

/// The list of known seasons plus the service's suggested starting point.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonList {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub seasons: Vec<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub default_season: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub default_race: Option<String>,
}

/// A season with its races.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::lossy_vec")]
    pub races: Vec<Race>,
    #[serde(default)]
    pub age_category_size: Option<i64>,
}

impl Season {
    /// The configured bucket width, or the default when the service sent none.
    pub fn category_size(&self) -> i64 {
        self.age_category_size.unwrap_or(DEFAULT_AGE_CATEGORY_SIZE)
    }
}

/// A single race within a season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    /// Empty when the service sent no usable name.
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub date: Option<String>,
}

impl Race {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: None,
        }
    }

    /// The race date, if the service sent a well-formed `YYYY-MM-DD` value.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, RACE_DATE_FORMAT).ok())
    }

    /// Label used in race pickers: `"{name} ({date})"`.
    pub fn label(&self) -> String {
        match &self.date {
            Some(date) => format!("{} ({date})", self.name),
            None => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_defaults_category_size() {
        let season: Season = serde_json::from_str(r#"{"races": null}"#).unwrap();
        assert!(season.races.is_empty());
        assert_eq!(season.category_size(), DEFAULT_AGE_CATEGORY_SIZE);

        let season: Season =
            serde_json::from_str(r#"{"name": "2024", "races": [], "age_category_size": 10}"#)
                .unwrap();
        assert_eq!(season.category_size(), 10);
    }

    #[test]
    fn test_race_date_parsing() {
        let race: Race =
            serde_json::from_str(r#"{"name": "Harbour 5k", "date": "2024-03-17"}"#).unwrap();
        assert_eq!(race.parsed_date(), NaiveDate::from_ymd_opt(2024, 3, 17));
        assert_eq!(race.label(), "Harbour 5k (2024-03-17)");

        let race: Race = serde_json::from_str(r#"{"name": "Hill", "date": "soon"}"#).unwrap();
        assert_eq!(race.parsed_date(), None);
    }

    #[test]
    fn test_season_skips_malformed_races() {
        let season: Season = serde_json::from_str(
            r#"{"races": [{"name": "Hill"}, {"date": "2024-05-01"}, "junk", {"name": 5}]}"#,
        )
        .unwrap();
        let names: Vec<&str> = season.races.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Hill", "", "5"]);
        assert_eq!(season.races[1].date.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn test_season_list_accepts_numeric_season() {
        let list: SeasonList =
            serde_json::from_str(r#"{"seasons": ["2023", "2024"], "default_season": 2024}"#)
                .unwrap();
        assert_eq!(list.default_season.as_deref(), Some("2024"));
        assert_eq!(list.default_race, None);
    }
}
