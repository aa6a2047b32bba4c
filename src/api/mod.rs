pub(crate) mod championship;
pub(crate) mod participants;
pub(crate) mod races;
pub(crate) mod registration;
pub(crate) mod seasons;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, ResultsError};

/// Join `segments` onto the service base URL, percent-encoding each one.
pub(crate) fn endpoint<S: AsRef<str>>(base_url: &str, segments: &[S]) -> Result<Url> {
    let mut url = Url::parse(base_url).map_err(|e| {
        ResultsError::Configuration(format!("invalid base url {base_url}: {e}"))
    })?;
    url.path_segments_mut()
        .map_err(|_| {
            ResultsError::Configuration(format!("base url {base_url} cannot have a path"))
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Append query parameters. Leaves the URL untouched when there are none.
pub(crate) fn with_params(mut url: Url, params: &[(&str, String)]) -> Url {
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params);
    }
    url
}

/// Fetch a URL and decode its body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: Url,
) -> Result<T> {
    debug!(url = %url, "fetching");

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| ResultsError::Http {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ResultsError::UnexpectedStatus {
            url: url.to_string(),
            status,
        });
    }

    response.json().await.map_err(|e| ResultsError::ResponseBody {
        url: url.to_string(),
        source: e,
    })
}
