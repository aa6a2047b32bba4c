//! Request shapes for the results service, kept free of any I/O so the
//! routing rules can be checked directly.

use crate::model::{ChampionshipType, Gender};

/// Which championship to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChampionshipQuery {
    pub season: String,
    pub championship_type: ChampionshipType,
    pub gender: Gender,
    /// Age category filter. Empty or `None` means all categories.
    pub category: Option<String>,
}

impl ChampionshipQuery {
    pub fn new(
        season: impl Into<String>,
        championship_type: ChampionshipType,
        gender: Gender,
    ) -> Self {
        Self {
            season: season.into(),
            championship_type,
            gender,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Path segments below the service base URL.
    pub fn path_segments(&self) -> Vec<String> {
        let last = match self.championship_type {
            ChampionshipType::Team => self.gender.to_string(),
            ChampionshipType::Individual => ChampionshipType::Individual.to_string(),
        };
        vec![
            "api".to_string(),
            "seasons".to_string(),
            self.season.clone(),
            "championship".to_string(),
            last,
        ]
    }

    /// Query parameters. Team championships never carry any; the service
    /// does not accept a category there.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        match self.championship_type {
            ChampionshipType::Team => Vec::new(),
            ChampionshipType::Individual => {
                let mut params = vec![("gender", self.gender.to_string())];
                params.extend(non_empty(self.category.as_deref()).map(|c| ("category", c)));
                params
            }
        }
    }
}

/// Which race's results to load, with optional filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RaceQuery {
    pub season: String,
    pub race: String,
    pub gender: Option<Gender>,
    pub category: Option<String>,
}

impl RaceQuery {
    pub fn new(season: impl Into<String>, race: impl Into<String>) -> Self {
        Self {
            season: season.into(),
            race: race.into(),
            ..Default::default()
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn path_segments(&self) -> Vec<String> {
        vec![
            "api".to_string(),
            "races".to_string(),
            self.season.clone(),
            self.race.clone(),
        ]
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        params.extend(self.gender.map(|g| ("gender", g.to_string())));
        params.extend(non_empty(self.category.as_deref()).map(|c| ("category", c)));
        params
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
