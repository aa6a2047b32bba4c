use tracing::{debug, instrument};

use crate::api::{self, endpoint, with_params};
use crate::error::Result;
use crate::model::RaceResults;
use crate::query::RaceQuery;

#[instrument(skip(client))]
pub(crate) async fn get_race_results(
    client: &reqwest::Client,
    base_url: &str,
    query: &RaceQuery,
) -> Result<RaceResults> {
    let url = with_params(
        endpoint(base_url, &query.path_segments())?,
        &query.query_params(),
    );
    let results: RaceResults = api::get_json(client, url).await?;
    debug!(
        race = %query.race,
        count = results.results.len(),
        "fetched race results"
    );
    Ok(results)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::model::Gender;

    #[tokio::test]
    async fn test_get_race_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/races/2024/Harbour%205k"))
            .and(query_param("gender", "Female"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "season": "2024",
                "name": "Harbour 5k",
                "results": [
                    {
                        "finish_token": "P0003",
                        "participant": {
                            "first_name": "Ana",
                            "last_name": "Ruiz",
                            "gender": "Female",
                            "age_category": "V45",
                            "club": "Coast AC",
                        },
                    },
                    {"finish_token": "P0007", "participant": {"first_name": "Kim"}},
                ],
            })))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let query = RaceQuery::new("2024", "Harbour 5k").with_gender(Gender::Female);
        let results = get_race_results(&client, &server.uri(), &query)
            .await
            .unwrap();
        assert_eq!(results.results.len(), 2);
        assert_eq!(results.results[0].participant.full_name(), "Ana Ruiz");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("gender=Female"));
    }
}
