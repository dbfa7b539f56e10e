//! Minimal HTTP client for JSON endpoints.

use crate::Result;
use core::time::Duration;
use ohno::{IntoAppError, bail};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use strum::Display;
use url::Url;

/// Port the cluster listens on unless configured otherwise, for both schemes.
pub const DEFAULT_PORT: u16 = 9200;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

/// Connection settings for a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub host: String,
    pub port: u16,
    pub scheme: Scheme,
    pub user: Option<String>,
    pub password: Option<String>,

    /// Skip TLS certificate verification. Insecure, avoid in production.
    pub insecure: bool,

    pub timeout: Duration,

    /// Extra headers sent with every request.
    pub headers: BTreeMap<String, String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
            scheme: Scheme::default(),
            user: None,
            password: None,
            insecure: false,
            timeout: DEFAULT_TIMEOUT,
            headers: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    base_url: Url,
    credentials: Option<(String, String)>,
}

impl Client {
    /// Create a client for the given connection settings
    ///
    /// # Errors
    ///
    /// Returns an error if the host does not form a valid URL, a header is invalid,
    /// or the HTTP client cannot be built
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let base_url = format!("{}://{}:{}/", options.scheme, options.host, options.port);
        let base_url = Url::parse(&base_url).into_app_err_with(|| format!("invalid server address '{base_url}'"))?;

        let mut headers = HeaderMap::new();
        for (name, value) in &options.headers {
            let _ = headers.insert(HeaderName::from_bytes(name.as_bytes())?, HeaderValue::from_str(value)?);
        }

        let mut client_builder = reqwest::Client::builder()
            .user_agent(concat!("elasticmetrics/", env!("CARGO_PKG_VERSION")))
            .timeout(options.timeout)
            .default_headers(headers);

        if options.insecure && options.scheme == Scheme::Https {
            log::warn!("disabled SSL certificate verification, requests are insecure");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        // basic auth is only used when both parts are provided
        let credentials = match (&options.user, &options.password) {
            (Some(user), Some(password)) if !user.is_empty() && !password.is_empty() => Some((user.clone(), password.clone())),
            _ => None,
        };

        Ok(Self {
            client: client_builder.build()?,
            base_url,
            credentials,
        })
    }

    /// The URL that endpoint paths are resolved against
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send a GET request to `path` and decode the JSON response
    ///
    /// # Errors
    ///
    /// Returns a request error if the server can't be reached, responds with a non-success
    /// status, or the body is not valid JSON
    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.base_url.join(path).into_app_err_with(|| format!("invalid URL path '{path}'"))?;
        log::debug!("requesting URL '{url}'");

        let mut request = self.client.get(url.clone());
        if let Some((user, password)) = &self.credentials {
            request = request.basic_auth(user, Some(password));
        }

        let response = request.send().await.into_app_err_with(|| format!("request to URL '{url}' failed"))?;

        let status = response.status();
        log::debug!("URL '{url}' responded with status {status}");
        if !status.is_success() {
            bail!("request to URL '{url}' failed with status {status}");
        }

        let body = response
            .bytes()
            .await
            .into_app_err_with(|| format!("request to URL '{url}' failed while reading the response"))?;

        serde_json::from_slice(&body).into_app_err_with(|| format!("invalid JSON response from URL '{url}'"))
    }
}
