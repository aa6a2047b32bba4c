use tracing::instrument;

use crate::api;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::*;
use crate::query::{ChampionshipQuery, RaceQuery};

/// The main entry point for talking to the results service.
///
/// `ResultsClient` wraps a [`reqwest::Client`] and a base URL, and exposes
/// one method per service endpoint.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> cc6_results::Result<()> {
/// use cc6_results::{render_standings, ChampionshipQuery, ChampionshipType, Gender, ResultsClient};
///
/// let client = ResultsClient::new();
/// let query = ChampionshipQuery::new("2024", ChampionshipType::Team, Gender::Female);
/// let payload = client.get_championship(&query).await?;
/// let table = render_standings(&payload);
/// println!("{} ({} races)", table.heading, table.races_included);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResultsClient {
    http: reqwest::Client,
    base_url: String,
}

impl ResultsClient {
    /// Create a client for the default base URL.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new(), crate::config::DEFAULT_API_BASE)
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http: client,
            base_url: base_url.into(),
        }
    }

    /// Create a client from connection settings.
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_client(config.build_http()?, config.base_url.clone()))
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::with_config(&ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the season list and the suggested default season and race.
    #[instrument(skip(self))]
    pub async fn get_seasons(&self) -> Result<SeasonList> {
        api::seasons::get_seasons(&self.http, &self.base_url).await
    }

    /// Fetch one season with its races and category size.
    #[instrument(skip(self))]
    pub async fn get_season(&self, season: &str) -> Result<Season> {
        api::seasons::get_season(&self.http, &self.base_url, season).await
    }

    /// Fetch team or individual championship standings.
    #[instrument(skip(self))]
    pub async fn get_championship(&self, query: &ChampionshipQuery) -> Result<ChampionshipPayload> {
        api::championship::get_championship(&self.http, &self.base_url, query).await
    }

    /// Fetch the finishers of one race.
    #[instrument(skip(self))]
    pub async fn get_race_results(&self, query: &RaceQuery) -> Result<RaceResults> {
        api::races::get_race_results(&self.http, &self.base_url, query).await
    }

    /// Fetch the clubs a participant can register with.
    #[instrument(skip(self))]
    pub async fn get_clubs(&self) -> Result<Vec<Club>> {
        api::registration::get_clubs(&self.http, &self.base_url).await
    }

    /// Fetch every recorded result for one participant.
    #[instrument(skip(self))]
    pub async fn get_participant_results(
        &self,
        participant_id: &str,
    ) -> Result<Vec<ParticipantResult>> {
        api::participants::get_participant_results(&self.http, &self.base_url, participant_id)
            .await
    }

    /// Validate and submit a participant registration.
    #[instrument(skip(self, form))]
    pub async fn register(&self, form: &RegistrationForm) -> Result<RegistrationReceipt> {
        api::registration::register(&self.http, &self.base_url, form).await
    }
}

impl Default for ResultsClient {
    fn default() -> Self {
        Self::new()
    }
}
