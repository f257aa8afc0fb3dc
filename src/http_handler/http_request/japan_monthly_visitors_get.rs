use super::monthly_visitors::MonthlyVisitorsResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the `/country/JPN/monthly-visitors` endpoint. The
/// country code is baked into the path and never caller-supplied.
#[derive(serde::Serialize, Debug)]
pub struct JapanMonthlyVisitorsRequest {
    /// Reporting year; the server picks its default when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

impl NoBodyHTTPRequestType for JapanMonthlyVisitorsRequest {}

impl HTTPRequestType for JapanMonthlyVisitorsRequest {
    type Response = MonthlyVisitorsResponse;
    type Query = Self;
    fn endpoint(&self) -> &'static str { "/country/JPN/monthly-visitors" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query(&self) -> &Self::Query { self }
}
