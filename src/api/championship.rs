use tracing::{debug, instrument};

use crate::api::{self, endpoint, with_params};
use crate::error::Result;
use crate::model::ChampionshipPayload;
use crate::query::ChampionshipQuery;

#[instrument(skip(client))]
pub(crate) async fn get_championship(
    client: &reqwest::Client,
    base_url: &str,
    query: &ChampionshipQuery,
) -> Result<ChampionshipPayload> {
    let url = with_params(
        endpoint(base_url, &query.path_segments())?,
        &query.query_params(),
    );
    let payload: ChampionshipPayload = api::get_json(client, url).await?;
    debug!(
        championship_type = %payload.championship_type,
        races = payload.races.len(),
        standings = payload.standings.len(),
        "fetched championship"
    );
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::error::ResultsError;
    use crate::model::{ChampionshipType, Gender, RaceCell};

    #[tokio::test]
    async fn test_get_team_championship() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/seasons/2024/championship/Female"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "season": "2024",
                "gender": "Female",
                "championship_type": "team",
                "championship_name": "Female Team Championship",
                "races": [{"name": "Harbour 5k", "date": "2024-03-17"}],
                "standings": [{
                    "name": "Coast AC",
                    "total_points": 1,
                    "race_points": {
                        "Harbour 5k": {"rank": 1, "positions": [1, 3, 4], "points": 8},
                    },
                }],
            })))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let query = ChampionshipQuery::new("2024", ChampionshipType::Team, Gender::Female)
            .with_category("V40");
        let payload = get_championship(&client, &server.uri(), &query)
            .await
            .unwrap();
        assert_eq!(payload.standings.len(), 1);
        assert!(payload.standings[0].race_cell("Harbour 5k").is_ranked());

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_get_individual_championship_with_category() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/seasons/2024/championship/individual"))
            .and(query_param("gender", "Male"))
            .and(query_param("category", "V50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "season": "2024",
                "gender": "Male",
                "category": "V50",
                "championship_type": "individual",
                "championship_name": "Male V50 Individual Championship",
                "races": [{"name": "Hill"}],
                "standings": [{
                    "name": "Sam Hill",
                    "club": "Coast AC",
                    "age_category": "V50",
                    "participant_id": "A7654321",
                    "total_points": 2,
                    "race_positions": {"Hill": 2},
                }],
            })))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let query = ChampionshipQuery::new("2024", ChampionshipType::Individual, Gender::Male)
            .with_category("V50");
        let payload = get_championship(&client, &server.uri(), &query)
            .await
            .unwrap();
        assert_eq!(payload.championship_type, ChampionshipType::Individual);
        assert_eq!(payload.standings[0].race_position("Hill"), Some(2));
        assert_eq!(payload.standings[0].race_cell("Hill"), &RaceCell::Unscored);
    }

    #[tokio::test]
    async fn test_get_championship_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let query = ChampionshipQuery::new("2024", ChampionshipType::Team, Gender::Male);
        let err = get_championship(&client, &server.uri(), &query)
            .await
            .unwrap_err();
        assert!(err.is_network());
        assert!(matches!(err, ResultsError::UnexpectedStatus { .. }));
    }

    #[tokio::test]
    async fn test_get_championship_invalid_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let query = ChampionshipQuery::new("2024", ChampionshipType::Team, Gender::Male);
        let err = get_championship(&client, &server.uri(), &query)
            .await
            .unwrap_err();
        assert!(matches!(err, ResultsError::ResponseBody { .. }));
    }
}
