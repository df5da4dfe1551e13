use crate::{
    ClaimId, Coordinates, FireId, Location, SpaceObjectId, requests,
    responses,
};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// A resource path relative to the API base address, plus query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub path: String,
    pub query: Vec<(&'static str, String)>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Adds the parameter only when a value is present.
    pub fn optional_param(
        self,
        key: &'static str,
        value: Option<impl ToString>,
    ) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    pub fn location(mut self, location: &Location) -> Self {
        self.query.extend(location.query_pairs());
        self
    }

    pub fn coordinates(self, coordinates: &Coordinates) -> Self {
        self.param("lat", coordinates.latitude)
            .param("lon", coordinates.longitude)
    }
}

/// Method, extra headers and body for a single request.
///
/// Headers given here override the default `Content-Type`.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl RequestOptions {
    pub fn method(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Options carrying `body` serialized as JSON.
    pub fn json(
        method: Method,
        body: &impl Serialize,
    ) -> Result<Self, ClientError> {
        let body = serde_json::to_vec(body).map_err(ClientError::Encode)?;
        Ok(Self {
            method,
            headers: HeaderMap::new(),
            body: Some(body),
        })
    }
}

/// An API client for interfacing with the climate backend.
///
/// Holds no per-call state, so a single instance is shared (behind an `Arc`)
/// by every dashboard hook.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    /// Build a client for the API rooted at `address`, e.g.
    /// `http://127.0.0.1:8080/api/v1`.
    pub fn new(
        address: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            address: address.into(),
            inner_client: builder.build()?,
        })
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}{path}", self.address.trim_end_matches('/'))
    }

    async fn send(
        &self,
        endpoint: &Endpoint,
        options: RequestOptions,
    ) -> ReqwestResult {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        let mut request = self
            .inner_client
            .request(options.method, self.format_url(&endpoint.path))
            .headers(headers);
        if !endpoint.query.is_empty() {
            request = request.query(&endpoint.query);
        }
        if let Some(body) = options.body {
            request = request.body(body);
        }

        request.send().await
    }

    /// Perform exactly one call and parse the JSON body as `T`.
    ///
    /// No retries are attempted; the failure is returned as-is.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let result = match self.send(endpoint, options).await {
            Ok(response) => ok_body(response).await,
            Err(e) => Err(e.into()),
        };
        if let Err(e) = &result {
            tracing::warn!(path = %endpoint.path, "API request failed: {e}");
        }
        result
    }

    /// Like [`APIClient::request`], but returns the raw body.
    pub async fn request_bytes(
        &self,
        endpoint: &Endpoint,
        options: RequestOptions,
    ) -> Result<Vec<u8>, ClientError> {
        let result = match self.send(endpoint, options).await {
            Ok(response) => ok_bytes(response).await,
            Err(e) => Err(e.into()),
        };
        if let Err(e) = &result {
            tracing::warn!(path = %endpoint.path, "API request failed: {e}");
        }
        result
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> Result<T, ClientError> {
        self.request(&endpoint, RequestOptions::default()).await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(
        &self,
    ) -> Result<responses::HealthStatus, ClientError> {
        self.get(Endpoint::new("/health")).await
    }

    pub async fn list_space_objects(
        &self,
    ) -> Result<Vec<responses::SpaceObject>, ClientError> {
        self.get(Endpoint::new("/space-objects/")).await
    }

    pub async fn get_space_object(
        &self,
        id: SpaceObjectId,
    ) -> Result<responses::SpaceObject, ClientError> {
        self.get(Endpoint::new(format!("/space-objects/{id}"))).await
    }

    pub async fn create_space_object(
        &self,
        details: &requests::SpaceObjectCreate,
    ) -> Result<responses::SpaceObject, ClientError> {
        let options = RequestOptions::json(Method::POST, details)?;
        self.request(&Endpoint::new("/space-objects/"), options)
            .await
    }

    pub async fn update_space_object(
        &self,
        id: SpaceObjectId,
        details: &requests::SpaceObjectCreate,
    ) -> Result<responses::SpaceObject, ClientError> {
        let options = RequestOptions::json(Method::PUT, details)?;
        self.request(&Endpoint::new(format!("/space-objects/{id}")), options)
            .await
    }

    pub async fn delete_space_object(
        &self,
        id: SpaceObjectId,
    ) -> Result<responses::DeleteMessage, ClientError> {
        self.request(
            &Endpoint::new(format!("/space-objects/{id}")),
            RequestOptions::method(Method::DELETE),
        )
        .await
    }

    /// All space objects of one kind, e.g. `planet`.
    pub async fn space_objects_by_type(
        &self,
        object_type: &str,
    ) -> Result<Vec<responses::SpaceObject>, ClientError> {
        let object_type = urlencoding::encode(object_type);
        self.get(Endpoint::new(format!("/space-objects/type/{object_type}")))
            .await
    }

    pub async fn current_weather(
        &self,
        coordinates: &Coordinates,
    ) -> Result<responses::WeatherCurrent, ClientError> {
        self.get(Endpoint::new("/weather/current").coordinates(coordinates))
            .await
    }

    pub async fn weather_forecast(
        &self,
        coordinates: &Coordinates,
        days: u32,
    ) -> Result<Vec<responses::WeatherForecast>, ClientError> {
        let endpoint = Endpoint::new("/weather/forecast")
            .coordinates(coordinates)
            .param("days", days);
        self.get(endpoint).await
    }

    pub async fn farm_recommendations(
        &self,
        coordinates: &Coordinates,
    ) -> Result<responses::FarmRecommendation, ClientError> {
        self.get(Endpoint::new("/recommendations/farm").coordinates(coordinates))
            .await
    }

    pub async fn farm_alerts(
        &self,
        coordinates: &Coordinates,
    ) -> Result<Vec<responses::FarmAlert>, ClientError> {
        self.get(Endpoint::new("/alerts/farm").coordinates(coordinates))
            .await
    }

    pub async fn insurance_risks(
        &self,
        region: &str,
        period: &str,
    ) -> Result<Vec<responses::InsuranceRisk>, ClientError> {
        let endpoint = Endpoint::new("/insurance/risks")
            .param("region", region)
            .param("period", period);
        self.get(endpoint).await
    }

    pub async fn get_claim(
        &self,
        claim_id: &ClaimId,
    ) -> Result<responses::Claim, ClientError> {
        let claim_id = urlencoding::encode(&claim_id.0);
        self.get(Endpoint::new(format!("/insurance/claims/{claim_id}")))
            .await
    }

    /// Downloads the verification report for a claim as PDF bytes.
    pub async fn claim_report_pdf(
        &self,
        claim_id: &ClaimId,
    ) -> Result<Vec<u8>, ClientError> {
        let claim_id = urlencoding::encode(&claim_id.0);
        let endpoint =
            Endpoint::new(format!("/insurance/claims/{claim_id}/report"))
                .param("format", "pdf");
        self.request_bytes(&endpoint, RequestOptions::default())
            .await
    }

    pub async fn insurance_forecast(
        &self,
        period: &str,
    ) -> Result<responses::InsuranceForecast, ClientError> {
        self.get(Endpoint::new("/insurance/forecast").param("period", period))
            .await
    }

    /// Active fires, optionally restricted to one region.
    pub async fn active_fires(
        &self,
        region: Option<&str>,
    ) -> Result<Vec<responses::Fire>, ClientError> {
        let endpoint = Endpoint::new("/wildfire/active-fires")
            .optional_param("region", region);
        self.get(endpoint).await
    }

    pub async fn fire_spread_forecast(
        &self,
        fire_id: &FireId,
    ) -> Result<responses::FireSpreadForecast, ClientError> {
        let fire_id = urlencoding::encode(&fire_id.0);
        self.get(Endpoint::new(format!(
            "/wildfire/fires/{fire_id}/spread-forecast"
        )))
        .await
    }

    /// Air quality per city. With `affected` set, only cities affected by
    /// smoke are returned.
    pub async fn air_quality(
        &self,
        affected: bool,
    ) -> Result<Vec<responses::AirQualityArea>, ClientError> {
        self.get(Endpoint::new("/wildfire/air-quality").param("affected", affected))
            .await
    }

    pub async fn wildfire_risk_forecast(
        &self,
        hours: u32,
    ) -> Result<Vec<responses::WildfireRiskRegion>, ClientError> {
        self.get(Endpoint::new("/wildfire/risk-forecast").param("hours", hours))
            .await
    }

    pub async fn dashboard_agriculture(
        &self,
        location: &Location,
    ) -> Result<responses::DashboardAgriculture, ClientError> {
        self.get(Endpoint::new("/dashboard/agriculture").location(location))
            .await
    }

    pub async fn dashboard_insurance(
        &self,
        location: &Location,
        region: Option<&str>,
    ) -> Result<responses::DashboardInsurance, ClientError> {
        let endpoint = Endpoint::new("/dashboard/insurance")
            .location(location)
            .optional_param("region", region);
        self.get(endpoint).await
    }

    pub async fn dashboard_wildfires(
        &self,
        location: &Location,
        radius_km: f64,
    ) -> Result<responses::DashboardWildfires, ClientError> {
        let endpoint = Endpoint::new("/dashboard/wildfires")
            .location(location)
            .param("radius_km", radius_km);
        self.get(endpoint).await
    }

    pub async fn dashboard_main(
        &self,
        location: &Location,
    ) -> Result<responses::DashboardMain, ClientError> {
        self.get(Endpoint::new("/dashboard/main").location(location))
            .await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A non-success status. The response text is kept for logging, but is
    /// not part of the displayed message.
    #[error("HTTP error, status: {}", .0.as_u16())]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response from server: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Could not encode request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ClientError {
    /// The HTTP status, when the backend answered with a failure.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(e) => e.status(),
            _ => None,
        }
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let body = ok_bytes(response).await?;
    serde_json::from_slice(&body).map_err(ClientError::Decode)
}

/// Check that the response is OK and return its raw body.
pub async fn ok_bytes(
    response: reqwest::Response,
) -> Result<Vec<u8>, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.bytes().await?.to_vec())
}
