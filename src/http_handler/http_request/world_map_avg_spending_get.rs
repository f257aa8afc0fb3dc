use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::world_map_avg_spending::WorldMapAvgSpendingResponse;

/// Request type for the `/world-map-avg-spending` endpoint (average
/// expenditure per visitor arrival).
#[derive(serde::Serialize, Debug)]
pub struct WorldMapAvgSpendingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

impl NoBodyHTTPRequestType for WorldMapAvgSpendingRequest {}

impl HTTPRequestType for WorldMapAvgSpendingRequest {
    type Response = WorldMapAvgSpendingResponse;
    type Query = Self;
    fn endpoint(&self) -> &'static str { "/world-map-avg-spending" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query(&self) -> &Self::Query { self }
}
