use super::expenditure_breakdown::ExpenditureBreakdownResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the `/country/{code}/expenditure-breakdown` endpoint.
/// The country code goes into the path, never the query string.
#[derive(serde::Serialize, Debug)]
pub struct ExpenditureBreakdownRequest {
    #[serde(skip)]
    endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<u16>,
}

impl ExpenditureBreakdownRequest {
    /// `country_code` is an ISO-3166 alpha-3 code (e.g. `"FRA"`); it is
    /// passed through uninspected, the server rejects unknown codes.
    pub fn new(country_code: &str, year: Option<u16>) -> Self {
        Self {
            endpoint: format!("/country/{country_code}/expenditure-breakdown"),
            year,
        }
    }
}

impl NoBodyHTTPRequestType for ExpenditureBreakdownRequest {}

impl HTTPRequestType for ExpenditureBreakdownRequest {
    type Response = ExpenditureBreakdownResponse;
    type Query = Self;
    fn endpoint(&self) -> &str { &self.endpoint }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query(&self) -> &Self::Query { self }
}
