use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::{
    domain::models::{HealthStatus, Scenario, TrackedScenario},
    infrastructure::api::error::{extract_detail, ApiError},
};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// Client for the scenario and tracking endpoints.
///
/// Every method performs exactly one request. Non-2xx responses become
/// [`ApiError::Status`]; there is no retry.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// `timeout` of `None` lets requests run until the backend answers.
    pub fn new(
        base_url: impl Into<String>,
        timeout: impl Into<Option<Duration>>,
    ) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder().connect_timeout(CONNECT_TIMEOUT);
        if let Some(timeout) = timeout.into() {
            builder = builder
                .timeout(timeout)
                .connect_timeout(CONNECT_TIMEOUT.min(timeout));
        }
        let client = builder.build().map_err(ApiError::Http)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /scenarios`
    pub async fn create_scenario(&self, description: &str) -> Result<Scenario, ApiError> {
        self.json(
            Method::POST,
            "/scenarios".to_string(),
            Some(json!({ "description": description })),
        )
        .await
    }

    /// `GET /scenarios`
    pub async fn list_scenarios(&self) -> Result<Vec<Scenario>, ApiError> {
        self.json(Method::GET, "/scenarios".to_string(), None).await
    }

    /// `GET /scenarios/{id}`
    pub async fn get_scenario(&self, id: &str) -> Result<Scenario, ApiError> {
        self.json(Method::GET, format!("/scenarios/{}", segment(id)), None)
            .await
    }

    /// `POST /tracking/start`
    pub async fn start_tracking(
        &self,
        scenario_id: &str,
        play_id: &str,
    ) -> Result<TrackedScenario, ApiError> {
        self.json(
            Method::POST,
            "/tracking/start".to_string(),
            Some(json!({ "scenario_id": scenario_id, "play_id": play_id })),
        )
        .await
    }

    /// `GET /tracking`
    pub async fn list_tracking(&self) -> Result<Vec<TrackedScenario>, ApiError> {
        self.json(Method::GET, "/tracking".to_string(), None).await
    }

    /// `GET /tracking/{scenario_id}/{play_id}`
    pub async fn get_tracking(
        &self,
        scenario_id: &str,
        play_id: &str,
    ) -> Result<TrackedScenario, ApiError> {
        self.json(Method::GET, tracking_path(scenario_id, play_id), None)
            .await
    }

    /// `POST /tracking/{scenario_id}/{play_id}/refresh`
    pub async fn refresh_tracking(
        &self,
        scenario_id: &str,
        play_id: &str,
    ) -> Result<TrackedScenario, ApiError> {
        let path = format!("{}/refresh", tracking_path(scenario_id, play_id));
        self.json(Method::POST, path, None).await
    }

    /// `DELETE /tracking/{scenario_id}/{play_id}`; the response body is ignored.
    pub async fn stop_tracking(&self, scenario_id: &str, play_id: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, tracking_path(scenario_id, play_id), None)
            .await?;
        Ok(())
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.json(Method::GET, "/health".to_string(), None).await
    }

    async fn json<R: DeserializeOwned>(
        &self,
        method: Method,
        path: String,
        body: Option<serde_json::Value>,
    ) -> Result<R, ApiError> {
        let response = self.send(method, path, body).await?;
        response
            .json::<R>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn send(
        &self,
        method: Method,
        path: String,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ApiError> {
        log::debug!("{method} {path}");

        let mut request = self
            .client
            .request(method.clone(), format!("{}{}", self.base_url, path));
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout(self.base_url.clone())
            } else if e.is_connect() {
                ApiError::Connection(self.base_url.clone())
            } else {
                ApiError::Http(e)
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response
            .text()
            .await
            .ok()
            .and_then(|text| extract_detail(&text));
        log::warn!("{method} {path} returned {status}");
        Err(ApiError::Status {
            method: method.to_string(),
            path,
            status: status.as_u16(),
            detail,
        })
    }
}

fn tracking_path(scenario_id: &str, play_id: &str) -> String {
    format!("/tracking/{}/{}", segment(scenario_id), segment(play_id))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("sc-1", "sc-1")]
    #[case("a/b", "a%2Fb")]
    #[case("with space?", "with%20space%3F")]
    #[case("株", "%E6%A0%AA")]
    fn test_segment_encoding(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(segment(raw), expected);
    }

    #[test]
    fn test_tracking_path() {
        assert_eq!(tracking_path("sc 1", "p/2"), "/tracking/sc%201/p%2F2");
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_new_without_timeout() {
        let client = ApiClient::new("http://localhost:8000", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = ApiClient::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(ApiError::InvalidUrl { .. })));
    }
}
