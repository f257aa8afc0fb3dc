use strum_macros::Display;

#[allow(async_fn_in_trait)]
pub trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

/// Marker trait: a `Deserialize` response struct gets the whole JSON
/// response pipeline from the blanket impls below.
pub trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

#[allow(async_fn_in_trait)]
pub trait HTTPResponseType {
    type ParsedResponseType;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    /// Status normalization stage: passes 2xx responses through untouched
    /// and turns everything else into a `ResponseError` carrying the
    /// server's error payload where one decodes.
    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status.is_server_error() {
            Err(ResponseError::InternalServer(response.json().await?))
        } else if status.is_client_error() {
            Err(ResponseError::BadRequest(response.json().await?))
        } else {
            Err(ResponseError::Unknown(format!("Unexpected status {status}")))
        }
    }
}

/// Error payload the dashboard backend attaches to non-2xx responses. The
/// reporting endpoints echo the request's country/year on 404s.
#[derive(Debug, serde::Deserialize)]
pub struct ErrorResponse {
    error: String,
    country: Option<String>,
    country_code: Option<String>,
    year: Option<u16>,
}

impl ErrorResponse {
    pub fn error(&self) -> &str { &self.error }
    pub fn country(&self) -> Option<&str> { self.country.as_deref() }
    pub fn country_code(&self) -> Option<&str> { self.country_code.as_deref() }
    pub fn year(&self) -> Option<u16> { self.year }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    #[strum(to_string = "Internal server error: {0}")]
    InternalServer(ErrorResponse),
    #[strum(to_string = "Bad request: {0}")]
    BadRequest(ErrorResponse),
    #[strum(to_string = "No connection: {0}")]
    NoConnection(String),
    #[strum(to_string = "Timeout: {0}")]
    Timeout(String),
    #[strum(to_string = "Unknown error: {0}")]
    Unknown(String),
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout(value.to_string())
        } else if value.is_connect() {
            ResponseError::NoConnection(value.to_string())
        } else {
            ResponseError::Unknown(value.to_string())
        }
    }
}
