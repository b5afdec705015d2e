use entity::{Employee, Roster};
use thiserror::Error;
use tracing::debug;
use url::Url;

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid base url {url:?}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("roster request failed")]
    Transport(#[source] reqwest::Error),
    #[error("roster endpoint responded with status {status}")]
    Status { status: u16 },
    #[error("roster body could not be decoded")]
    Decode(#[source] reqwest::Error),
}

/// Client for the remote directory source. One GET per refresh; no retries,
/// no caching — every retry is a fresh user action.
#[derive(Clone, Debug)]
pub struct RosterClient {
    http: reqwest::Client,
    base_url: String,
}

impl RosterClient {
    pub fn new(base_url: &str) -> FetchResult<Self> {
        Url::parse(base_url).map_err(|source| FetchError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Share the underlying connection pool with other remote operations.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub async fn fetch_employees(&self) -> FetchResult<Vec<Employee>> {
        let url = format!("{}/employees", self.base_url);
        debug!(%url, "fetching roster");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let roster: Roster = response.json().await.map_err(FetchError::Decode)?;
        debug!(count = roster.employees.len(), "roster fetched");
        Ok(roster.employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn fetches_and_decodes_the_roster() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/employees");
            then.status(200).json_body(serde_json::json!({
                "employees": [{
                    "name": "Åse Nordmann",
                    "email": "aase@example.no",
                    "telephone": "+47 123 45 678",
                    "imageUrl": "https://img.example.no/aase.png",
                    "officeName": "Oslo",
                    "startDate": "2021-01-01"
                }]
            }));
        });

        let client = RosterClient::new(&server.base_url()).unwrap();
        let employees = client.fetch_employees().await.unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].name, "Åse Nordmann");
        mock.assert();
    }

    #[tokio::test]
    async fn non_success_status_is_surfaced() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/employees");
            then.status(503);
        });

        let client = RosterClient::new(&server.base_url()).unwrap();
        let err = client.fetch_employees().await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 503 }));
    }

    #[tokio::test]
    async fn garbage_body_is_a_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/employees");
            then.status(200).body("not json");
        });

        let client = RosterClient::new(&server.base_url()).unwrap();
        let err = client.fetch_employees().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(
            RosterClient::new("not a url"),
            Err(FetchError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let client = RosterClient::new("https://example.no/").unwrap();
        assert_eq!(client.base_url(), "https://example.no");
    }
}
