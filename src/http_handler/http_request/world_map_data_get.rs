use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::world_map_data::WorldMapDataResponse;

/// Request type for the `/world-map-data` endpoint.
#[derive(serde::Serialize, Debug)]
pub struct WorldMapDataRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Measurement dimension the server should aggregate. Passed through
    /// unvalidated; unknown values are the server's to reject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
}

impl NoBodyHTTPRequestType for WorldMapDataRequest {}

impl HTTPRequestType for WorldMapDataRequest {
    type Response = WorldMapDataResponse;
    type Query = Self;
    fn endpoint(&self) -> &'static str { "/world-map-data" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query(&self) -> &Self::Query { self }
}
