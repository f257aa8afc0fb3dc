use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::world_map_expenditure::WorldMapExpenditureResponse;

/// Request type for the `/world-map-expenditure` endpoint.
#[derive(serde::Serialize, Debug)]
pub struct WorldMapExpenditureRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

impl NoBodyHTTPRequestType for WorldMapExpenditureRequest {}

impl HTTPRequestType for WorldMapExpenditureRequest {
    type Response = WorldMapExpenditureResponse;
    type Query = Self;
    fn endpoint(&self) -> &'static str { "/world-map-expenditure" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query(&self) -> &Self::Query { self }
}
