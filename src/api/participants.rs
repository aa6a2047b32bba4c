use tracing::{debug, instrument};

use crate::api::{self, endpoint};
use crate::error::Result;
use crate::model::ParticipantResult;

#[instrument(skip(client))]
pub(crate) async fn get_participant_results(
    client: &reqwest::Client,
    base_url: &str,
    participant_id: &str,
) -> Result<Vec<ParticipantResult>> {
    let url = endpoint(base_url, &["participants", participant_id, "results"])?;
    let results: Vec<ParticipantResult> = api::get_json(client, url).await?;
    debug!(
        participant_id,
        count = results.len(),
        "fetched participant results"
    );
    Ok(results)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_get_participant_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/participants/A1234567/results"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "season": "2024",
                    "race_name": "Harbour 5k",
                    "race_date": "2024-03-17",
                    "finish_token": "P0012",
                    "participant": {"first_name": "Ana", "last_name": "Ruiz"},
                },
            ])))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let results = get_participant_results(&client, &server.uri(), "A1234567")
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].race, "Harbour 5k");
    }

    #[tokio::test]
    async fn test_get_participant_results_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let err = get_participant_results(&client, &server.uri(), "A1234567")
            .await
            .unwrap_err();
        assert!(err.is_network());
    }
}
