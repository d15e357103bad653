//! REST API helpers for communicating with the backend through `/api`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session
//! bearer token attached when one is held.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `Result`s instead of panics. Form pages turn errors into
//! toast text with [`ApiError::user_message`]; list pages log and keep their
//! last-good rows.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contracts::endpoints;
use contracts::{
    AlertDetail, AlertDetailQuery, AlertsPage, AlertsQuery, CategorySetting, GranteesResponse,
    LoginRequest, LoginResponse, NewOperator, OperatorAccount, OperatorList, OperatorUpdate, SignupRequest,
    StatusMessage, SubCategoryQuery, UnlockContactRequest, UsState, VisitRecord,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::session::SessionState;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Toast text: the backend's own message when it sent one, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Map a non-success response body onto [`ApiError::Status`].
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<contracts::ApiErrorBody>(body).ok().and_then(|b| b.human_message());
    ApiError::Status { status, message }
}

/// Backend client bound to the current session's credentials.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Api {
    bearer: Option<String>,
}

impl Api {
    /// Client for unauthenticated endpoints (login, signup).
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn for_session(session: &SessionState) -> Self {
        Self { bearer: session.bearer() }
    }

    // ---- auth ----

    /// # Errors
    ///
    /// Returns an error when the request fails or credentials are rejected.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json(endpoints::LOGIN, request).await
    }

    /// # Errors
    ///
    /// Returns an error when the request fails or the backend rejects the signup.
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.post_unit(endpoints::SIGNUP, request).await
    }

    // ---- alerts ----

    /// # Errors
    ///
    /// Returns an error on transport, status or decode failure.
    pub async fn alerts_by_filter(&self, query: &AlertsQuery) -> Result<AlertsPage, ApiError> {
        self.post_json(endpoints::ALERTS_BY_FILTER, query).await
    }

    /// # Errors
    ///
    /// Returns an error on transport, status or decode failure.
    pub async fn alert_by_id(&self, query: &AlertDetailQuery) -> Result<AlertDetail, ApiError> {
        self.post_json(endpoints::ALERT_BY_ID, query).await
    }

    /// # Errors
    ///
    /// Returns an error on transport, status or decode failure.
    pub async fn unlock_contact_info(&self, request: &UnlockContactRequest) -> Result<StatusMessage, ApiError> {
        self.post_json(endpoints::UNLOCK_CONTACT_INFO, request).await
    }

    /// # Errors
    ///
    /// Returns an error on transport, status or decode failure.
    pub async fn grantee_info(&self, request: &UnlockContactRequest) -> Result<GranteesResponse, ApiError> {
        self.post_json(endpoints::GRANTEE_INFO, request).await
    }

    // ---- user list ----

    /// # Errors
    ///
    /// Returns an error on transport, status or decode failure.
    pub async fn operators(&self) -> Result<Vec<OperatorAccount>, ApiError> {
        let list: OperatorList = self.get_json(endpoints::GET_USER_STATUS).await?;
        Ok(list.data)
    }

    /// # Errors
    ///
    /// Returns an error when the create request fails.
    pub async fn insert_operator(&self, operator: &NewOperator) -> Result<(), ApiError> {
        self.post_unit(endpoints::INSERT_USER_STATUS, operator).await
    }

    /// # Errors
    ///
    /// Returns an error when the update request fails.
    pub async fn update_operator(&self, update: &OperatorUpdate) -> Result<(), ApiError> {
        self.post_unit(endpoints::UPDATE_USER_STATUS, update).await
    }

    /// # Errors
    ///
    /// Returns an error when the audit request fails.
    pub async fn record_visit(&self, visit: &VisitRecord) -> Result<(), ApiError> {
        self.post_unit(endpoints::INSERT_USER_STATUS, visit).await
    }

    // ---- settings / billing ----

    /// # Errors
    ///
    /// Returns an error on transport, status or decode failure.
    pub async fn sub_categories(&self, query: &SubCategoryQuery) -> Result<Vec<CategorySetting>, ApiError> {
        self.post_json(endpoints::SUB_CATEGORIES_BY_CATEGORY, query).await
    }

    /// # Errors
    ///
    /// Returns an error on transport, status or decode failure.
    pub async fn state_list(&self) -> Result<Vec<UsState>, ApiError> {
        self.get_json(endpoints::STATE_LIST).await
    }

    // ---- transport ----

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.send_post(path, body).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.send_post(path, body).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut req = gloo_net::http::Request::get(path).header("Accept", "application/json");
            if let Some(bearer) = &self.bearer {
                req = req.header("Authorization", bearer);
            }
            let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = check_status(resp).await?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send_post<B: Serialize>(&self, path: &str, body: &B) -> Result<gloo_net::http::Response, ApiError> {
        let mut req = gloo_net::http::Request::post(path).header("Accept", "application/json");
        if let Some(bearer) = &self.bearer {
            req = req.header("Authorization", bearer);
        }
        let resp = req
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp).await
    }
}

#[cfg(feature = "hydrate")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(status_error(status, &body))
}
