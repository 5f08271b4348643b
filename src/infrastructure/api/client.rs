//! Rental API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::dto::{AuthInfoResponse, ErrorResponse, LoginBody};
use crate::domain::entities::{AuthInfo, AuthToken, Credentials, NewReview, Offer, Review, UserData};
use crate::domain::errors::ApiError;
use crate::domain::ports::{AuthPort, OffersPort};

const TOKEN_HEADER: &str = "X-Token";
const USER_AGENT: &str = concat!("six-cities/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the rental API.
///
/// Holds the current session token and sends it with every request.
pub struct RentalApiClient {
    client: Client,
    base_url: String,
    session: RwLock<Option<AuthToken>>,
}

impl RentalApiClient {
    /// Creates client for the given base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session: RwLock::new(None),
        })
    }

    /// Returns whether a session token is attached.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.session.read().is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn with_session(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.read().as_ref() {
            Some(token) => request.header(TOKEN_HEADER, token.as_str()),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, resource: &str) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.json::<ErrorResponse>().await.unwrap_or_default();
        let message = if body.message.is_empty() {
            format!("HTTP {status}")
        } else {
            body.summary()
        };
        warn!(%status, resource, %message, "API request failed");

        Err(error_for_status(status, resource, message))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, resource: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let request = self.with_session(self.client.get(self.url(path)));
        let response = self.send(request, resource).await?;
        parse_body(response).await
    }
}

fn map_transport_error(e: reqwest::Error) -> ApiError {
    warn!(error = %e, "Failed to reach rental API");
    if e.is_timeout() {
        ApiError::network("request timed out")
    } else if e.is_connect() {
        ApiError::network("failed to connect to the server")
    } else {
        ApiError::network(e.to_string())
    }
}

async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json().await.map_err(|e| {
        warn!(error = %e, "Failed to parse API response");
        ApiError::unexpected(format!("failed to parse response: {e}"))
    })
}

/// Maps a non-success status to the error taxonomy.
fn error_for_status(status: StatusCode, resource: &str, message: String) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::unauthorized(message),
        StatusCode::NOT_FOUND => ApiError::not_found(resource),
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::bad_request(message)
        }
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT | StatusCode::BAD_GATEWAY => {
            ApiError::network("rental API is temporarily unavailable")
        }
        _ => ApiError::unexpected(format!("unexpected response: {status} - {message}")),
    }
}

#[async_trait]
impl AuthPort for RentalApiClient {
    async fn check_auth(&self, token: &AuthToken) -> Result<UserData, ApiError> {
        debug!(token = %token, "Checking session");

        let request = self
            .client
            .get(self.url("/login"))
            .header(TOKEN_HEADER, token.as_str());
        let response = self.send(request, "session").await?;
        let info: AuthInfoResponse = parse_body(response).await?;

        *self.session.write() = Some(token.clone());
        info!(email = %info.user.email, "Session restored");

        Ok(info.user)
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthInfo, ApiError> {
        debug!(email = %credentials.email, "Signing in");

        let body = LoginBody {
            email: &credentials.email,
            password: &credentials.password,
        };
        let request = self.client.post(self.url("/login")).json(&body);
        let response = self.send(request, "account").await?;
        let info: AuthInfoResponse = parse_body(response).await?;

        let token = AuthToken::new(&info.token)
            .ok_or_else(|| ApiError::unexpected("server returned an empty token"))?;
        *self.session.write() = Some(token.clone());
        info!(email = %info.user.email, "Signed in");

        Ok(AuthInfo::new(info.user, token))
    }

    async fn logout(&self, token: &AuthToken) -> Result<(), ApiError> {
        debug!("Signing out");

        let request = self
            .client
            .delete(self.url("/logout"))
            .header(TOKEN_HEADER, token.as_str());
        let result = self.send(request, "session").await;
        *self.session.write() = None;

        result.map(|_| info!("Signed out"))
    }
}

#[async_trait]
impl OffersPort for RentalApiClient {
    async fn fetch_offers(&self) -> Result<Vec<Offer>, ApiError> {
        let offers: Vec<Offer> = self.get_json("/offers", "offers").await?;
        debug!(count = offers.len(), "Offers loaded");
        Ok(offers)
    }

    async fn fetch_offer(&self, offer_id: &str) -> Result<Offer, ApiError> {
        self.get_json(&format!("/offers/{offer_id}"), &format!("offer {offer_id}"))
            .await
    }

    async fn fetch_nearby(&self, offer_id: &str) -> Result<Vec<Offer>, ApiError> {
        self.get_json(
            &format!("/offers/{offer_id}/nearby"),
            &format!("offer {offer_id}"),
        )
        .await
    }

    async fn fetch_comments(&self, offer_id: &str) -> Result<Vec<Review>, ApiError> {
        self.get_json(&format!("/comments/{offer_id}"), &format!("offer {offer_id}"))
            .await
    }

    async fn post_comment(&self, offer_id: &str, review: &NewReview) -> Result<Review, ApiError> {
        debug!(offer_id, rating = review.rating, "Posting review");

        let request = self
            .with_session(self.client.post(self.url(&format!("/comments/{offer_id}"))))
            .json(review);
        let response = self.send(request, &format!("offer {offer_id}")).await?;
        parse_body(response).await
    }

    async fn fetch_favorites(&self) -> Result<Vec<Offer>, ApiError> {
        self.get_json("/favorite", "favorites").await
    }

    async fn set_favorite(&self, offer_id: &str, is_favorite: bool) -> Result<Offer, ApiError> {
        debug!(offer_id, is_favorite, "Updating favorite");

        let status = u8::from(is_favorite);
        let request = self.with_session(
            self.client
                .post(self.url(&format!("/favorite/{offer_id}/{status}"))),
        );
        let response = self.send(request, &format!("offer {offer_id}")).await?;
        parse_body(response).await
    }
}
