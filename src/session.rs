//! State behind the championship view: what the user selected, whether a
//! load is in flight, and the last payload that arrived.
//!
//! Loads can be re-issued before earlier ones finish. Each load takes a
//! [`LoadTicket`]; only the completion holding the newest ticket is applied.

use tracing::{debug, instrument};

use crate::client::ResultsClient;
use crate::error::{Result, ResultsError};
use crate::model::{ChampionshipPayload, ChampionshipType, Gender, Season};
use crate::query::ChampionshipQuery;
use crate::standings::{generate_categories, render_standings, StandingsTable};

/// The user's current championship selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChampionshipSelection {
    pub season: Option<String>,
    pub championship_type: ChampionshipType,
    pub gender: Gender,
    /// Empty means all categories.
    pub category: Option<String>,
}

impl ChampionshipSelection {
    /// The query for this selection, once a season is chosen.
    pub fn query(&self) -> Option<ChampionshipQuery> {
        let season = self.season.as_deref().filter(|s| !s.is_empty())?;
        let mut query = ChampionshipQuery::new(season, self.championship_type, self.gender);
        query.category = self.category.clone();
        Some(query)
    }
}

/// Proof that a load was started. Hand it back to
/// [`ChampionshipSession::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    id: u64,
    pub query: ChampionshipQuery,
}

#[derive(Debug, Default)]
pub struct ChampionshipSession {
    selection: ChampionshipSelection,
    categories: Vec<String>,
    latest: u64,
    loading: bool,
    payload: Option<ChampionshipPayload>,
    error: Option<String>,
}

impl ChampionshipSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &ChampionshipSelection {
        &self.selection
    }

    /// Age categories offered for the selected season.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn payload(&self) -> Option<&ChampionshipPayload> {
        self.payload.as_ref()
    }

    /// Message from the last failed load, if it was the newest one.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The table for the last applied payload.
    pub fn table(&self) -> Option<StandingsTable> {
        self.payload.as_ref().map(render_standings)
    }

    /// Select a season and regenerate its categories.
    ///
    /// A category that does not exist in the new season is cleared.
    pub fn set_season(&mut self, season: &str, details: &Season) -> Result<()> {
        let categories = generate_categories(details.category_size())?;
        if let Some(category) = &self.selection.category {
            if !categories.contains(category) {
                self.selection.category = None;
            }
        }
        self.selection.season = Some(season.to_string());
        self.categories = categories;
        Ok(())
    }

    pub fn set_championship_type(&mut self, championship_type: ChampionshipType) {
        self.selection.championship_type = championship_type;
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.selection.gender = gender;
    }

    /// Select an age category; `None` or an empty string means all.
    pub fn set_category(&mut self, category: Option<String>) {
        self.selection.category = category.filter(|c| !c.is_empty());
    }

    /// Start a load for the current selection. Returns `None` until a season
    /// is selected.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        let query = self.selection.query()?;
        self.latest += 1;
        self.loading = true;
        Some(LoadTicket {
            id: self.latest,
            query,
        })
    }

    /// Apply the outcome of a load. Returns `false` and leaves state untouched
    /// when a newer load has been started since `ticket` was issued.
    pub fn complete(&mut self, ticket: LoadTicket, outcome: Result<ChampionshipPayload>) -> bool {
        if ticket.id != self.latest {
            debug!(
                ticket = ticket.id,
                latest = self.latest,
                "discarding stale championship response"
            );
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(payload) => {
                self.payload = Some(payload);
                self.error = None;
            }
            Err(err) => {
                debug!(error = %err, "championship load failed");
                self.error = Some(err.user_message());
            }
        }
        true
    }

    /// Load the current selection through `client` and apply the result.
    #[instrument(skip(self, client))]
    pub async fn load(&mut self, client: &ResultsClient) -> Result<()> {
        let ticket = self.begin_load().ok_or_else(|| {
            ResultsError::Configuration("select a season before loading".to_string())
        })?;
        let outcome = client.get_championship(&ticket.query).await;
        self.complete(ticket, outcome);
        Ok(())
    }
}
