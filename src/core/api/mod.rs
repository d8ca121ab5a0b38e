//! HTTP client for the remote geolocation service.
//!
//! Every endpoint lives under one configured base URL. Authenticated calls
//! take the session token as an `Option` and refuse to touch the network
//! when it is absent.

mod error;

pub use error::ApiError;

use std::{sync::Arc, time::Duration};

use reqwest::{
    ClientBuilder, RequestBuilder, Response, StatusCode,
    cookie::{CookieStore, Jar},
};
use serde::de::DeserializeOwned;
use url::Url;

use crate::models::{
    Credentials, DataEnvelope, ErrorBody, GeoRecord, LoginResponse, LookupRequest, Registration,
};

pub const CSRF_COOKIE_PATH: &str = "sanctum/csrf-cookie";
pub const LOGIN_PATH: &str = "login";
pub const REGISTER_PATH: &str = "register";
pub const LOGOUT_PATH: &str = "logout";
pub const GEO_PATH: &str = "geo";
pub const HISTORY_PATH: &str = "history";

/// Cookie set by CSRF priming and echoed back in [`XSRF_HEADER`].
const XSRF_COOKIE: &str = "XSRF-TOKEN";
const XSRF_HEADER: &str = "X-XSRF-TOKEN";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    cookies: Arc<Jar>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(base_url)?;
        let cookies = Arc::new(Jar::default());
        let http = ClientBuilder::new()
            .timeout(timeout)
            .cookie_provider(cookies.clone())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url,
            cookies,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|source| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source,
            })
    }

    /// Attach the decoded XSRF cookie, if priming has stored one.
    fn with_xsrf(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self
            .cookies
            .cookies(&self.base_url)
            .and_then(|header| header.to_str().ok().and_then(|raw| find_cookie(raw, XSRF_COOKIE)));
        match token {
            Some(token) => request.header(XSRF_HEADER, token),
            None => request,
        }
    }

    /// `GET /sanctum/csrf-cookie`. The response only matters for the cookie it sets.
    pub async fn prime_csrf(&self) -> Result<(), ApiError> {
        let response = self.http.get(self.endpoint(CSRF_COOKIE_PATH)?).send().await?;
        check_status(response).await.map(|_| ())
    }

    /// `POST /login`, returning the bearer token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let request = self.http.post(self.endpoint(LOGIN_PATH)?).json(credentials);
        let response = check_status(self.with_xsrf(request).send().await?).await?;
        let body: LoginResponse = response.json().await?;
        Ok(body.token)
    }

    /// `POST /register`. Returns the success status so callers can
    /// distinguish `200 OK` from other 2xx answers.
    pub async fn register(&self, registration: &Registration) -> Result<StatusCode, ApiError> {
        let request = self.http.post(self.endpoint(REGISTER_PATH)?).json(registration);
        let response = check_status(self.with_xsrf(request).send().await?).await?;
        Ok(response.status())
    }

    /// `POST /logout` with the bearer token.
    pub async fn logout(&self, token: Option<&str>) -> Result<(), ApiError> {
        let token = token.ok_or(ApiError::MissingToken)?;
        let request = self
            .http
            .post(self.endpoint(LOGOUT_PATH)?)
            .bearer_auth(token)
            .json(&serde_json::json!({}));
        check_status(self.with_xsrf(request).send().await?).await?;
        Ok(())
    }

    /// `POST /geo` for one search value.
    pub async fn lookup(&self, token: Option<&str>, search_value: &str) -> Result<GeoRecord, ApiError> {
        let token = token.ok_or(ApiError::MissingToken)?;
        let request = self
            .http
            .post(self.endpoint(GEO_PATH)?)
            .bearer_auth(token)
            .json(&LookupRequest {
                search_value: search_value.to_string(),
            });
        let response = check_status(self.with_xsrf(request).send().await?).await?;
        decode_data(response).await
    }

    /// `GET /history`: every lookup recorded for the token's user.
    pub async fn history(&self, token: Option<&str>) -> Result<Vec<GeoRecord>, ApiError> {
        let token = token.ok_or(ApiError::MissingToken)?;
        let response = self
            .http
            .get(self.endpoint(HISTORY_PATH)?)
            .bearer_auth(token)
            .send()
            .await?;
        decode_data(check_status(response).await?).await
    }
}

/// Ensure the base URL ends in `/` so that joining keeps its path prefix.
fn normalize_base_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    Url::parse(&with_slash).map_err(|source| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })
}

fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|body| body.message);
    tracing::debug!(%status, ?message, "api call rejected");
    Err(ApiError::Rejected { status, message })
}

async fn decode_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let envelope: DataEnvelope<T> = response.json().await?;
    Ok(envelope.data)
}
