use super::monthly_visitors::MonthlyVisitorsResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the `/country/KOR/monthly-visitors` endpoint.
#[derive(serde::Serialize, Debug)]
pub struct KoreaMonthlyVisitorsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

impl NoBodyHTTPRequestType for KoreaMonthlyVisitorsRequest {}

impl HTTPRequestType for KoreaMonthlyVisitorsRequest {
    type Response = MonthlyVisitorsResponse;
    type Query = Self;
    fn endpoint(&self) -> &'static str { "/country/KOR/monthly-visitors" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query(&self) -> &Self::Query { self }
}
