use anyhow::{bail, ensure, Context as _, Result};
use reqwest::{RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::AccessToken;

pub const DEFAULT_BASE_URL: &str = "https://dev.lunchmoney.app/v1";
const USER_AGENT: &str = concat!("lunchmoney-amazon-matcher/", env!("CARGO_PKG_VERSION"));

pub struct LunchMoney {
    http: reqwest::Client,
    base_url: String,
    access_token: AccessToken,
}

impl LunchMoney {
    pub fn new(access_token: AccessToken) -> Result<LunchMoney> {
        Self::with_base_url(access_token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(access_token: AccessToken, base_url: &str) -> Result<LunchMoney> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(LunchMoney {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        })
    }

    pub(super) async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let request = self.http.get(self.url(endpoint)).query(query);
        self.send(request).await
    }

    pub(super) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.http.put(self.url(endpoint)).json(body);
        self.send(request).await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request
            .bearer_auth(self.access_token.get())
            .send()
            .await
            .context("Failed to reach Lunch Money")?;
        let status = response.status();
        let body = response.text().await?;
        parse_response(status, &body)
    }
}

/// Lunch Money also reports some errors with a success status, as `{"error": ...}` in the body
fn parse_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    ensure!(
        status.is_success(),
        "Lunch Money request failed with status {status}: {body}"
    );
    let value: Value = serde_json::from_str(body)
        .with_context(|| format!("Lunch Money returned invalid JSON: {body}"))?;
    if let Some(error) = api_error(&value) {
        bail!("{error}");
    }
    serde_json::from_value(value).context("Lunch Money returned an unexpected response")
}

fn api_error(response: &Value) -> Option<String> {
    match response.get("error")? {
        Value::String(error) => Some(error.clone()),
        Value::Array(errors) => Some(
            errors
                .iter()
                .map(|error| match error {
                    Value::String(error) => error.clone(),
                    error => error.to_string(),
                })
                .collect::<Vec<_>>()
                .join("; "),
        ),
        Value::Null => None,
        error => Some(error.to_string()),
    }
}
