use tracing::{debug, instrument, warn};

use crate::api::{self, endpoint};
use crate::error::{Result, ResultsError, REGISTRATION_FAILED_MESSAGE};
use crate::model::{Club, RegistrationForm, RegistrationReceipt, RegistrationResponse};

pub(crate) const REGISTRATION_SUCCESS_MESSAGE: &str =
    "Registration successful! You can now participate in races.";

#[instrument(skip(client))]
pub(crate) async fn get_clubs(client: &reqwest::Client, base_url: &str) -> Result<Vec<Club>> {
    let url = endpoint(base_url, &["api", "clubs"])?;
    let clubs: Vec<Club> = api::get_json(client, url).await?;
    debug!(count = clubs.len(), "fetched clubs");
    Ok(clubs)
}

/// Validate and submit a registration.
///
/// A non-success status is a rejection carrying the service's `error` text
/// when it sent one.
#[instrument(skip(client, form), fields(club = %form.club))]
pub(crate) async fn register(
    client: &reqwest::Client,
    base_url: &str,
    form: &RegistrationForm,
) -> Result<RegistrationReceipt> {
    let form = form.validated()?;
    let url = endpoint(base_url, &["api", "register"])?;
    debug!(url = %url, "submitting registration");

    let response = client
        .post(url.clone())
        .json(&form)
        .send()
        .await
        .map_err(|e| ResultsError::Http {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    let body: RegistrationResponse =
        response.json().await.map_err(|e| ResultsError::ResponseBody {
            url: url.to_string(),
            source: e,
        })?;

    if status.is_success() && body.success != Some(false) {
        debug!("registration accepted");
        return Ok(RegistrationReceipt {
            message: REGISTRATION_SUCCESS_MESSAGE.to_string(),
        });
    }

    let message = body
        .error
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| REGISTRATION_FAILED_MESSAGE.to_string());
    warn!(%status, error = %message, "registration rejected");
    Err(ResultsError::Rejected { message })
}
