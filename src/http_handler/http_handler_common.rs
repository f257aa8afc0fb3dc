use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use strum_macros::Display;

/// Per-country value series shared by the world map responses. The three
/// vectors are parallel (one entry per country) and arrive sorted by the
/// backend in descending value order.
#[derive(serde::Deserialize, Debug)]
pub struct WorldMapSeries {
    countries: Vec<String>,
    country_names: Vec<String>,
    values: Vec<f64>,
}

impl WorldMapSeries {
    /// ISO-3166 alpha-3 codes, one per country.
    pub fn countries(&self) -> &[String] { &self.countries }
    /// Human-readable country names, parallel to `countries`.
    pub fn country_names(&self) -> &[String] { &self.country_names }
    /// Metric values, parallel to `countries`.
    pub fn values(&self) -> &[f64] { &self.values }
}

/// Unified failure type surfaced by every endpoint request.
#[derive(Debug, Display)]
pub enum HTTPError {
    #[strum(to_string = "Request failed: {0}")]
    HTTPRequestError(RequestError),
    #[strum(to_string = "Response failed: {0}")]
    HTTPResponseError(ResponseError),
}

impl std::error::Error for HTTPError {}

impl From<RequestError> for HTTPError {
    fn from(value: RequestError) -> Self { Self::HTTPRequestError(value) }
}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { Self::HTTPResponseError(value) }
}

impl HTTPError {
    /// Maps a send-phase `reqwest` failure onto the error taxonomy. Timeouts
    /// and connection failures are transport outcomes; everything else that
    /// fails before a response exists is a malformed request.
    pub(crate) fn from_send_error(value: reqwest::Error) -> Self {
        if value.is_timeout() || value.is_connect() {
            Self::HTTPResponseError(ResponseError::from(value))
        } else {
            Self::HTTPRequestError(RequestError::FailedToSend(value.to_string()))
        }
    }
}
