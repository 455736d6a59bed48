//! HTTP seam between the board and the activities API.

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::{Activities, ErrorResponse, MessageResponse};

#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// The request never produced a response
    Network(String),
    /// The server answered with a non-success status
    Rejected { status: u16, detail: Option<String> },
    /// The response body was not what we expected
    Decode(String),
}

impl RequestError {
    /// The server supplied detail, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            RequestError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::Network(msg) => write!(f, "network error: {}", msg),
            RequestError::Rejected { status, detail } => match detail {
                Some(detail) => write!(f, "request rejected with {}: {}", status, detail),
                None => write!(f, "request rejected with {}", status),
            },
            RequestError::Decode(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        RequestError::Network(err.to_string())
    }
}

#[async_trait]
pub trait ActivityApi: Send + Sync {
    /// `GET /activities`
    async fn list_activities(&self) -> Result<Activities, RequestError>;
    /// `POST /activities/{name}/signup?email=`, returns the confirmation message
    async fn signup(&self, activity: &str, email: &str) -> Result<String, RequestError>;
    /// `POST /activities/{name}/unregister?email=`
    async fn unregister(&self, activity: &str, email: &str) -> Result<(), RequestError>;
}

pub struct HttpActivityClient {
    api_base_url: String,
    client: reqwest::Client,
}

impl HttpActivityClient {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn mutation_url(
        &self,
        activity: &str,
        action: &str,
        email: &str,
    ) -> Result<reqwest::Url, RequestError> {
        let mut url = reqwest::Url::parse(&format!(
            "{}/activities/{}/{}",
            self.api_base_url,
            urlencoding::encode(activity),
            action
        ))
        .map_err(|e| RequestError::Network(e.to_string()))?;
        url.query_pairs_mut().append_pair("email", email);
        Ok(url)
    }

    /// Send a request and return the decoded JSON body of a successful
    /// response. Non-success statuses become `Rejected` with whatever
    /// `detail` the body carries.
    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, RequestError> {
        let resp = request.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(rejected(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| RequestError::Decode(e.to_string()))
    }
}

impl Default for HttpActivityClient {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}

fn rejected(status: u16, body: &str) -> RequestError {
    let detail = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|e| e.detail);
    RequestError::Rejected { status, detail }
}

#[async_trait]
impl ActivityApi for HttpActivityClient {
    async fn list_activities(&self) -> Result<Activities, RequestError> {
        let url = format!("{}/activities", self.api_base_url);
        tracing::debug!("Fetching activities from {}", url);

        self.send(self.client.get(&url)).await
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, RequestError> {
        let url = self.mutation_url(activity, "signup", email)?;
        let resp: MessageResponse = self.send(self.client.post(url)).await?;
        Ok(resp.message)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<(), RequestError> {
        let url = self.mutation_url(activity, "unregister", email)?;
        self.send::<Value>(self.client.post(url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[tokio::test]
    async fn it_lists_activities() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let _mock = server
            .mock("GET", "/activities")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"Chess Club": {"description":"d","schedule":"Mon","max_participants":10,"participants":["a@x.com"]}}"#)
            .create();

        let client = HttpActivityClient::new(&url);
        let activities = client.list_activities().await?;
        assert_eq!(activities.names(), vec!["Chess Club"]);
        assert_eq!(activities.get("Chess Club").unwrap().spots_left(), 9);

        Ok(())
    }

    #[tokio::test]
    async fn it_reports_undecodable_collections() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let _mock = server
            .mock("GET", "/activities")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create();

        let client = HttpActivityClient::new(&url);
        let result = client.list_activities().await;
        assert!(matches!(result, Err(RequestError::Decode(_))));
    }

    #[tokio::test]
    async fn it_surfaces_rejections_when_listing() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let _mock = server
            .mock("GET", "/activities")
            .with_status(503)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "Maintenance"}"#)
            .create();

        let client = HttpActivityClient::new(&url);
        let err = client.list_activities().await.unwrap_err();
        assert_eq!(
            err,
            RequestError::Rejected {
                status: 503,
                detail: Some("Maintenance".to_string())
            }
        );
    }

    #[tokio::test]
    async fn it_encodes_signup_requests() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("POST", "/activities/Chess%20Club/signup")
            .match_query(mockito::Matcher::UrlEncoded(
                "email".into(),
                "new@x.com".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "Signed up new@x.com for Chess Club"}"#)
            .create();

        let client = HttpActivityClient::new(&url);
        let message = client.signup("Chess Club", "new@x.com").await?;
        assert_eq!(message, "Signed up new@x.com for Chess Club");
        mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn it_surfaces_rejection_detail() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let _mock = server
            .mock("POST", "/activities/Chess%20Club/signup")
            .match_query(mockito::Matcher::Any)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "Already registered"}"#)
            .create();

        let client = HttpActivityClient::new(&url);
        let err = client.signup("Chess Club", "a@x.com").await.unwrap_err();
        assert_eq!(
            err,
            RequestError::Rejected {
                status: 400,
                detail: Some("Already registered".to_string())
            }
        );
        assert_eq!(err.detail(), Some("Already registered"));
    }

    #[tokio::test]
    async fn it_tolerates_rejections_without_detail() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let _mock = server
            .mock("POST", "/activities/Gym/unregister")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body("Internal Server Error")
            .create();

        let client = HttpActivityClient::new(&url);
        let err = client.unregister("Gym", "a@x.com").await.unwrap_err();
        assert_eq!(
            err,
            RequestError::Rejected {
                status: 500,
                detail: None
            }
        );
    }

    #[tokio::test]
    async fn it_unregisters() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("POST", "/activities/Gym/unregister")
            .match_query(mockito::Matcher::UrlEncoded("email".into(), "a@x.com".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "Unregistered a@x.com from Gym"}"#)
            .create();

        let client = HttpActivityClient::new(&url);
        client.unregister("Gym", "a@x.com").await?;
        mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn it_reports_network_failures() {
        // Nothing listens on port 9 locally
        let client = HttpActivityClient::new("http://127.0.0.1:9");
        let result = client.list_activities().await;
        assert!(matches!(result, Err(RequestError::Network(_))));
    }

    #[test]
    fn test_client_default() {
        let client = HttpActivityClient::default();
        assert_eq!(client.api_base_url, "http://localhost:8000");
    }
}
