//! Typed HTTP client for the scanner backend.

use std::time::Duration;

use contracts::endpoints;
use contracts::{
    AlertDetail, AlertDetailQuery, AlertsPage, AlertsQuery, ApiErrorBody, CategorySetting, GranteesResponse,
    LoginRequest, LoginResponse, NewOperator, OperatorAccount, OperatorList, OperatorUpdate, StatusMessage,
    SubCategoryQuery, UnlockContactRequest, UsState,
};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::CliError;

const REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct Backend {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl Backend {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, CliError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned(), token })
    }

    pub async fn ping(&self) -> Result<(), CliError> {
        let response = self.http.get(format!("{}/healthz", self.base_url)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CliError::Status { status: status.as_u16(), message: "health check failed".to_owned() });
        }
        Ok(())
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, CliError> {
        self.post_json(endpoints::LOGIN, request).await
    }

    pub async fn alerts_by_filter(&self, query: &AlertsQuery) -> Result<AlertsPage, CliError> {
        self.post_json(endpoints::ALERTS_BY_FILTER, query).await
    }

    pub async fn alert_by_id(&self, query: &AlertDetailQuery) -> Result<AlertDetail, CliError> {
        self.post_json(endpoints::ALERT_BY_ID, query).await
    }

    pub async fn unlock_contact_info(&self, request: &UnlockContactRequest) -> Result<StatusMessage, CliError> {
        self.post_json(endpoints::UNLOCK_CONTACT_INFO, request).await
    }

    pub async fn grantee_info(&self, request: &UnlockContactRequest) -> Result<GranteesResponse, CliError> {
        self.post_json(endpoints::GRANTEE_INFO, request).await
    }

    pub async fn operators(&self) -> Result<Vec<OperatorAccount>, CliError> {
        let list: OperatorList = self.get_json(endpoints::GET_USER_STATUS).await?;
        Ok(list.data)
    }

    pub async fn insert_operator(&self, operator: &NewOperator) -> Result<(), CliError> {
        self.post_unit(endpoints::INSERT_USER_STATUS, operator).await
    }

    pub async fn update_operator(&self, update: &OperatorUpdate) -> Result<(), CliError> {
        self.post_unit(endpoints::UPDATE_USER_STATUS, update).await
    }

    pub async fn sub_categories(&self, query: &SubCategoryQuery) -> Result<Vec<CategorySetting>, CliError> {
        self.post_json(endpoints::SUB_CATEGORIES_BY_CATEGORY, query).await
    }

    pub async fn state_list(&self) -> Result<Vec<UsState>, CliError> {
        self.get_json(endpoints::STATE_LIST).await
    }

    fn headers(&self) -> Result<HeaderMap, CliError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {token}"))?);
        }
        Ok(headers)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, CliError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(endpoints::join(&self.base_url, path))
            .headers(self.headers()?)
            .json(body)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), CliError> {
        let response = self
            .http
            .post(endpoints::join(&self.base_url, path))
            .headers(self.headers()?)
            .json(body)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CliError> {
        let response = self
            .http
            .get(endpoints::join(&self.base_url, path))
            .headers(self.headers()?)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CliError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status.as_u16(), &body))
}

/// Map a failed response onto [`CliError::Status`], preferring the backend's message.
pub(crate) fn status_error(status: u16, body: &str) -> CliError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.human_message())
        .unwrap_or_else(|| "request failed".to_owned());
    CliError::Status { status, message }
}
