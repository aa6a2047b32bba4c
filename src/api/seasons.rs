use tracing::{debug, instrument};

use crate::api::{self, endpoint};
use crate::error::Result;
use crate::model::{Season, SeasonList};

#[instrument(skip(client))]
pub(crate) async fn get_seasons(client: &reqwest::Client, base_url: &str) -> Result<SeasonList> {
    let url = endpoint(base_url, &["api", "seasons"])?;
    let seasons: SeasonList = api::get_json(client, url).await?;
    debug!(
        count = seasons.seasons.len(),
        default_season = seasons.default_season.as_deref(),
        "fetched season list"
    );
    Ok(seasons)
}

#[instrument(skip(client))]
pub(crate) async fn get_season(
    client: &reqwest::Client,
    base_url: &str,
    season: &str,
) -> Result<Season> {
    let url = endpoint(base_url, &["api", "seasons", season])?;
    let season_data: Season = api::get_json(client, url).await?;
    debug!(
        season,
        races = season_data.races.len(),
        category_size = season_data.category_size(),
        "fetched season"
    );
    Ok(season_data)
}
